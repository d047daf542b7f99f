//! REPL configuration.

/// Configuration for the interactive prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplConfig {
    /// Prompt printed before each line
    pub prompt: String,
    /// Filename shown in diagnostics
    pub filename: String,
    /// Echo each line back before its tokens (useful when piping input)
    pub echo: bool,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            prompt: "mcfs > ".to_string(),
            filename: "<stdin>".to_string(),
            echo: false,
        }
    }
}

impl ReplConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let prompt = var("MCFS_PROMPT").unwrap_or(defaults.prompt);
        let filename = var("MCFS_FILENAME")
            .filter(|name| !name.is_empty())
            .unwrap_or(defaults.filename);
        let echo = var("MCFS_ECHO")
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(defaults.echo);

        Self {
            prompt,
            filename,
            echo,
        }
    }
}
