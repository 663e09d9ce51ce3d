// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod color_constants;
pub mod fmt;
pub mod reporter;

// Re-export.
pub use color_constants::*;
pub use fmt::*;
pub use reporter::*;
