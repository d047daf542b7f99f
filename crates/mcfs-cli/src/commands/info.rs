//! Info command - show the language tables.

use mcfs_lexer::{KEYWORDS, SELECTOR_KINDS};

pub(crate) fn run() -> miette::Result<()> {
    println!("mcfs command scripting language");
    println!("===============================");
    println!();
    println!("Version: {}", env!("CARGO_PKG_VERSION"));
    println!();

    println!("Reserved words:");
    println!("  {}", KEYWORDS.join(" "));
    println!();

    let selectors: Vec<String> = SELECTOR_KINDS.iter().map(|c| format!("@{c}")).collect();
    println!("Selectors:");
    println!("  {}", selectors.join(" "));
    println!();

    println!("Syntax:");
    println!("  /text      raw command, runs to end of line (\\ escapes)");
    println!("  (json)     embedded JSON, keys and words may be unquoted");
    println!("  #text#     comment");
    println!("  [ ] = .    punctuation");

    Ok(())
}
