//! Caret rendering of source spans.

use crate::position::Position;

/// Render the lines covered by `start..end` with a `^` underline beneath
/// the covered columns.
///
/// Only the first line starts its underline at `start`'s column and only the
/// last line stops at `end`'s column; lines in between are underlined in
/// full. Tabs are removed from the output since they break the alignment.
pub fn render_arrows(text: &str, start: &Position, end: &Position) -> String {
    let line_count = end.line().saturating_sub(start.line()) + 1;
    let mut rendered = Vec::with_capacity(line_count);

    let lines = text.split('\n').skip(start.line()).take(line_count);

    for (i, line) in lines.enumerate() {
        let line = line.strip_suffix('\r').unwrap_or(line);
        let col_start = if i == 0 { start.column() } else { 0 };
        let col_end = if i == line_count - 1 {
            end.column()
        } else {
            line.chars().count()
        };

        let mut underline = " ".repeat(col_start);
        underline.push_str(&"^".repeat(col_end.saturating_sub(col_start)));
        rendered.push(format!("{line}\n{underline}"));
    }

    rendered.join("\n").replace('\t', "")
}
