// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crossterm::style::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultColors {
    LizardGreen,
    SlateGray,
    SilverMetallic,
    SoftPink,
    GuardsRed,
}

impl DefaultColors {
    #[must_use]
    pub fn as_crossterm_color(&self) -> Color {
        match self {
            DefaultColors::LizardGreen => rgb(20, 244, 0),
            DefaultColors::SlateGray => rgb(94, 103, 111),
            DefaultColors::SilverMetallic => rgb(213, 217, 220),
            DefaultColors::SoftPink => rgb(255, 181, 234),
            DefaultColors::GuardsRed => rgb(200, 1, 1),
        }
    }
}

const fn rgb(r: u8, g: u8, b: u8) -> Color { Color::Rgb { r, g, b } }
