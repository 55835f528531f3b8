// ============================================================================
// spritegen-cli/src/terminal.rs
// ============================================================================
//
// TERMINAL OUTPUT: UI Components and Styling
//
// Section headers, aligned status lines and success/warning/error markers.
// Every line is emitted through `log::info!` so it reaches the console and
// the optional log file alike.

use console::style;
use log::info;
use owo_colors::OwoColorize;
use unicode_width::UnicodeWidthStr;

use std::io::IsTerminal;

/// Width labels are padded to in status lines.
const LABEL_WIDTH: usize = 15;

/// Indent of key-value status lines.
const STATUS_INDENT: &str = "      ";

/// Color only when writing to a terminal and NO_COLOR is unset.
pub fn should_use_color() -> bool {
    std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal()
}

/// Pads `label:` so values line up, measuring display width rather than bytes.
pub fn format_status_line(label: &str, value: &str) -> String {
    let padding = LABEL_WIDTH.saturating_sub(label.width()).max(1);
    format!(
        "{}{}:{}{}",
        STATUS_INDENT,
        label,
        " ".repeat(padding),
        value
    )
}

/// Print a section header for major workflow phases
pub fn print_section(title: &str) {
    info!("");
    if should_use_color() {
        info!("===== {} =====", title.to_uppercase().cyan());
    } else {
        info!("===== {} =====", title.to_uppercase());
    }
    info!("");
}

/// Print a key-value status line
pub fn print_status(label: &str, value: &str, highlight: bool) {
    if should_use_color() && highlight {
        info!("{}", format_status_line(label, &value.green().bold().to_string()));
    } else {
        info!("{}", format_status_line(label, value));
    }
}

/// Print a success message
pub fn print_success(message: &str) {
    if should_use_color() {
        info!("  ✓ {}", message.green());
    } else {
        info!("  ✓ {message}");
    }
}

/// Print a warning message
pub fn print_warning(message: &str) {
    if should_use_color() {
        info!("  ⚠ {}", message.yellow());
    } else {
        info!("  ⚠ {message}");
    }
}

/// Lines of an error block: the marked title, then each message line indented.
pub fn format_error_block(title: &str, message: &str, color: bool) -> Vec<String> {
    let heading = if color {
        format!("  ✗ {}", style(title).red().bold())
    } else {
        format!("  ✗ {title}")
    };
    std::iter::once(heading)
        .chain(message.lines().map(|line| format!("    {line}")))
        .collect()
}

/// Print an error block; multi-line messages such as ffmpeg stderr stay readable.
pub fn print_error(title: &str, message: &str) {
    for line in format_error_block(title, message, should_use_color()) {
        info!("{line}");
    }
}
