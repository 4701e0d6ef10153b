use crossterm::style::Stylize;
use std::fmt::Display;

/// Writes status lines, coloring them only when the stream is a terminal.
#[derive(Debug, Clone, Copy)]
pub struct Printer {
    color_stdout: bool,
    color_stderr: bool,
}

impl Printer {
    pub fn detect() -> Self {
        let no_color = std::env::var_os("NO_COLOR").is_some();
        Self {
            color_stdout: !no_color && atty::is(atty::Stream::Stdout),
            color_stderr: !no_color && atty::is(atty::Stream::Stderr),
        }
    }

    pub fn plain() -> Self {
        Self {
            color_stdout: false,
            color_stderr: false,
        }
    }

    pub fn error(&self, message: impl Display) {
        eprintln!("{}", self.format_error(message));
    }

    pub fn warn(&self, message: impl Display) {
        let text = format!("warning: {}", message);
        if self.color_stderr {
            eprintln!("{}", text.yellow());
        } else {
            eprintln!("{}", text);
        }
    }

    pub fn info(&self, message: impl Display) {
        println!("{}", self.format_info(message));
    }

    pub fn success(&self, message: impl Display) {
        let text = message.to_string();
        if self.color_stdout {
            println!("{}", text.green());
        } else {
            println!("{}", text);
        }
    }

    pub fn notice(&self, message: impl Display) {
        let text = message.to_string();
        if self.color_stdout {
            println!("{}", text.yellow().bold());
        } else {
            println!("{}", text);
        }
    }

    pub fn format_error(&self, message: impl Display) -> String {
        let label = "error:";
        if self.color_stderr {
            format!("{} {}", label.red().bold(), message)
        } else {
            format!("{} {}", label, message)
        }
    }

    pub fn format_info(&self, message: impl Display) -> String {
        let text = message.to_string();
        if self.color_stdout {
            text.cyan().to_string()
        } else {
            text
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_printer_has_no_escape_codes() {
        let printer = Printer::plain();
        assert_eq!(printer.format_error("boom"), "error: boom");
        assert_eq!(printer.format_info("hello"), "hello");
    }

    #[test]
    fn test_colored_error_keeps_message() {
        let printer = Printer {
            color_stdout: true,
            color_stderr: true,
        };
        let formatted = printer.format_error("boom");
        assert!(formatted.contains("\u{1b}["));
        assert!(formatted.ends_with("boom"));
    }
}
