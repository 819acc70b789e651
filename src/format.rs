use std::fmt::{self, Write};

use crate::release::Asset;

/// How each asset is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// `id:name`
    #[default]
    Names,
    /// `id`
    IdsOnly,
}

impl OutputMode {
    /// Append one newline-terminated line for `asset` to `out`.
    pub fn write_line<W: Write>(self, out: &mut W, asset: &Asset) -> fmt::Result {
        match self {
            OutputMode::Names => writeln!(out, "{}:{}", asset.id, asset.name),
            OutputMode::IdsOnly => writeln!(out, "{}", asset.id),
        }
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputMode::Names => write!(f, "names"),
            OutputMode::IdsOnly => write!(f, "ids-only"),
        }
    }
}
