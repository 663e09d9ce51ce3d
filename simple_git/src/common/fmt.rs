// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::Display;

use crossterm::style::Stylize;

use crate::DefaultColors;

fn paint(arg_text: impl Display, color: DefaultColors) -> String {
    arg_text
        .to_string()
        .with(color.as_crossterm_color())
        .to_string()
}

/// Normal or default text style.
pub fn normal(arg_text: impl Display) -> String {
    paint(arg_text, DefaultColors::SilverMetallic)
}

/// Error text style.
pub fn error(arg_text: impl Display) -> String { paint(arg_text, DefaultColors::SoftPink) }

/// Emphasis text style to highlight.
pub fn emphasis(arg_text: impl Display) -> String {
    paint(arg_text, DefaultColors::LizardGreen)
}

/// De-emphasize (dim) text. Used to echo git's own output.
pub fn dim(arg_text: impl Display) -> String { paint(arg_text, DefaultColors::SlateGray) }

/// Unrecoverable failures.
pub fn fatal(arg_text: impl Display) -> String {
    arg_text
        .to_string()
        .with(DefaultColors::GuardsRed.as_crossterm_color())
        .bold()
        .to_string()
}
