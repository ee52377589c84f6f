//! Notice marks and heading styles for CLI output.
//!
//! Coloring goes through `console`, which drops styling when the output is
//! not a terminal or `NO_COLOR`/`CLICOLOR=0` is set.

use console::{style, StyledObject};

use crate::domain::models::NoticeLevel;

/// Leading mark for a notice line.
///
/// Success = green check, Info = cyan `i`, Warning = yellow `!`.
pub fn notice_mark(level: NoticeLevel) -> StyledObject<&'static str> {
    match level {
        NoticeLevel::Success => style("\u{2713}").green().bold(),
        NoticeLevel::Info => style("i").cyan().bold(),
        NoticeLevel::Warning => style("!").yellow().bold(),
    }
}

/// Styled label for key-value lines (bold + dimmed colon).
pub fn label(name: &str) -> String {
    format!("{}{}", style(name).bold(), style(":").dim())
}

/// Section header with underline.
pub fn section_header(title: &str) -> String {
    format!("{}", style(title).bold().underlined())
}

/// Dimmed hint text, e.g. prompt placeholders.
pub fn hint(text: &str) -> String {
    format!("{}", style(text).dim())
}
