//! Styling helpers for terminal output.
//!
//! The [`GameStyle`] trait provides a set of convenience methods for applying
//! ANSI styling via the `colored` crate. Implementations for `&str` and
//! `String` are provided so string literals can be styled directly.

use colored::{ColoredString, Colorize};

/// Convenience trait for applying color and style to text output.
pub trait GameStyle {
    fn item_style(&self) -> ColoredString;
    fn map_titlebar_style(&self) -> ColoredString;
    fn description_style(&self) -> ColoredString;
    fn exit_style(&self) -> ColoredString;
    fn code_style(&self) -> ColoredString;
    fn effect_style(&self) -> ColoredString;
    fn death_style(&self) -> ColoredString;
    fn error_style(&self) -> ColoredString;
    fn subheading_style(&self) -> ColoredString;
    fn prompt_style(&self) -> ColoredString;
}

impl GameStyle for &str {
    fn item_style(&self) -> ColoredString {
        self.truecolor(220, 180, 40)
    }
    fn map_titlebar_style(&self) -> ColoredString {
        self.truecolor(223, 77, 10).underline()
    }
    fn description_style(&self) -> ColoredString {
        self.italic().truecolor(102, 208, 250)
    }
    fn exit_style(&self) -> ColoredString {
        self.italic().truecolor(110, 220, 110)
    }
    fn code_style(&self) -> ColoredString {
        self.bold().truecolor(200, 200, 200)
    }
    fn effect_style(&self) -> ColoredString {
        self.italic().truecolor(230, 230, 30)
    }
    fn death_style(&self) -> ColoredString {
        self.bold().truecolor(230, 30, 30)
    }
    fn error_style(&self) -> ColoredString {
        self.truecolor(230, 30, 30)
    }
    fn subheading_style(&self) -> ColoredString {
        self.underline()
    }
    fn prompt_style(&self) -> ColoredString {
        self.truecolor(75, 180, 255)
    }
}

impl GameStyle for String {
    fn item_style(&self) -> ColoredString {
        self.as_str().item_style()
    }
    fn map_titlebar_style(&self) -> ColoredString {
        self.as_str().map_titlebar_style()
    }
    fn description_style(&self) -> ColoredString {
        self.as_str().description_style()
    }
    fn exit_style(&self) -> ColoredString {
        self.as_str().exit_style()
    }
    fn code_style(&self) -> ColoredString {
        self.as_str().code_style()
    }
    fn effect_style(&self) -> ColoredString {
        self.as_str().effect_style()
    }
    fn death_style(&self) -> ColoredString {
        self.as_str().death_style()
    }
    fn error_style(&self) -> ColoredString {
        self.as_str().error_style()
    }
    fn subheading_style(&self) -> ColoredString {
        self.as_str().subheading_style()
    }
    fn prompt_style(&self) -> ColoredString {
        self.as_str().prompt_style()
    }
}

/// Text wrapping options for an indented block of text.
pub fn indented_block() -> textwrap::Options<'static> {
    textwrap::Options::new(textwrap::termwidth().saturating_sub(4).max(20))
        .initial_indent("  ")
        .subsequent_indent("  ")
}

/// Text wrapping options for a normal block of text.
pub fn normal_block() -> textwrap::Options<'static> {
    textwrap::Options::new(textwrap::termwidth().max(20))
}
