//! Repl command - scan lines read from stdin.

use crate::config::ReplConfig;
use mcfs_lexer::{scan, Token};
use std::io::{self, BufRead, Write};

pub fn run(config: &ReplConfig) -> miette::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_with(config, stdin.lock(), stdout.lock())
}

/// Prompt, read a line, print its tokens or the rendered error. Stops at end
/// of input or on `exit`/`quit`.
fn run_with(
    config: &ReplConfig,
    mut input: impl BufRead,
    mut output: impl Write,
) -> miette::Result<()> {
    let write_err = |e: io::Error| miette::miette!("Failed to write output: {}", e);
    let mut line = String::new();

    loop {
        write!(output, "{}", config.prompt).map_err(write_err)?;
        output.flush().map_err(write_err)?;

        line.clear();
        let read = input
            .read_line(&mut line)
            .map_err(|e| miette::miette!("Failed to read input: {}", e))?;
        if read == 0 {
            writeln!(output).map_err(write_err)?;
            return Ok(());
        }

        let text = line.trim_end_matches(&['\n', '\r'][..]);
        match text.trim() {
            "" => continue,
            "exit" | "quit" => return Ok(()),
            _ => {}
        }

        if config.echo {
            writeln!(output, "{text}").map_err(write_err)?;
        }

        let written = match scan(&config.filename, text) {
            Ok(tokens) => writeln!(output, "{}", format_tokens(&tokens)),
            Err(err) => {
                tracing::debug!(error = %err, "line rejected");
                writeln!(output, "{}", err.render())
            }
        };
        written.map_err(write_err)?;
    }
}

fn format_tokens(tokens: &[Token]) -> String {
    let items: Vec<String> = tokens.iter().map(ToString::to_string).collect();
    format!("[{}]", items.join(", "))
}
