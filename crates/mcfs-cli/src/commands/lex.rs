//! Lex command - tokenize a file.

use mcfs_lexer::{scan, Token};
use std::fs;
use std::path::Path;

pub fn run(file: &Path, json: bool) -> miette::Result<()> {
    let source = fs::read_to_string(file)
        .map_err(|e| miette::miette!("Failed to read file: {}", e))?;

    let filename = file.display().to_string();
    let tokens = match scan(&filename, &source) {
        Ok(tokens) => tokens,
        Err(err) => {
            eprintln!("{}", err.render());
            return Err(miette::miette!("lexing {} failed: {}", filename, err));
        }
    };
    tracing::debug!(file = %filename, tokens = tokens.len(), "tokenized");

    if json {
        let out = serde_json::to_string_pretty(&tokens)
            .map_err(|e| miette::miette!("Failed to serialize tokens: {}", e))?;
        println!("{}", out);
        return Ok(());
    }

    println!("Tokenizing: {}\n", filename);
    for token in &tokens {
        println!("{}", format_token(token));
    }
    println!("\n{} tokens", tokens.len());

    Ok(())
}

/// One listing row: 1-based `line:col` range, then the token.
fn format_token(token: &Token) -> String {
    let (start, end) = (&token.span.start, &token.span.end);
    let range = format!(
        "{}:{}..{}:{}",
        start.line() + 1,
        start.column() + 1,
        end.line() + 1,
        end.column() + 1
    );
    format!("{:16}  {}", range, token.to_string().replace('\n', "\\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_token() {
        let tokens = scan("<test>", "at @a\n/say hi\\\nthere").unwrap();
        let rows: Vec<_> = tokens.iter().map(format_token).collect();
        assert_eq!(rows[0], "1:1..1:3          KEYWORD:at");
        assert_eq!(rows[1], "1:4..1:6          SELECTOR:@a");
        assert_eq!(rows[2], "1:6..2:1          NEWLINE");
        assert_eq!(rows[3], "2:1..3:6          RAW_TEXT:say hi\\nthere");
        assert_eq!(rows[4], "3:6..3:6          END_OF_STREAM");
    }

    #[test]
    fn test_json_output_shape() {
        let tokens = scan("<test>", "set 2").unwrap();
        let value = serde_json::to_value(&tokens).unwrap();
        assert_eq!(value[0]["kind"]["type"], "Keyword");
        assert_eq!(value[0]["kind"]["value"], "set");
        assert_eq!(value[1]["kind"]["value"], 2.0);
        assert_eq!(value[1]["span"]["start"]["column"], 4);
        assert_eq!(value[2]["kind"]["type"], "EndOfStream");
    }
}
