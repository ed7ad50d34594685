//! Token and frame serialization for the OCaml array-literal output.

use std::fmt;

/// Opens an image and its first row.
pub const IMAGE_OPEN: &str = "[|[|";
/// Closes one row and opens the next.
pub const ROW_SEP: &str = "|]; [|";
/// Closes the last row and the image.
pub const IMAGE_CLOSE: &str = "|]|];";

/// One output cell: the transparency sentinel or a palette index (1..=32).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Token {
    Transparent,
    Index(u8),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Transparent => write!(f, "0;"),
            Token::Index(i) => write!(f, "{i};"),
        }
    }
}
