// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A catalog read was attempted outside the valid index range,
    /// e.g. `current()` on an empty catalog.
    OutOfRange,

    /// An embedded asset is missing or unusable.
    Asset(String),

    /// SVG parsing or rasterization failed.
    Svg(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::OutOfRange => write!(f, "catalog index out of range"),
            Error::Asset(msg) => write!(f, "Asset error: {}", msg),
            Error::Svg(msg) => write!(f, "SVG error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_out_of_range() {
        assert_eq!(Error::OutOfRange.to_string(), "catalog index out of range");
    }

    #[test]
    fn display_includes_asset_detail() {
        let err = Error::Asset("missing artwork1.png".to_string());
        assert!(err.to_string().contains("missing artwork1.png"));
    }
}
