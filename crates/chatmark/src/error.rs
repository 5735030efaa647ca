//! Error types for chat markup processing.
//!
//! None of these ever escape [`crate::MarkupParser::parse`]: the parser
//! swallows them and degrades the offending marker to literal text. They are
//! exposed for callers that use the color and gradient parsers directly.

use thiserror::Error;

/// Errors that can occur when parsing a `#RRGGBB` color.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// The color does not start with `#`.
    #[error("hex color must start with '#': {0}")]
    MissingHash(String),

    /// The color does not have exactly six digits.
    #[error("hex color must have exactly 6 digits: {0}")]
    InvalidLength(String),

    /// A digit is not a hexadecimal character.
    #[error("invalid hex digit {digit:?} in color {input}")]
    InvalidDigit {
        /// The whole color as supplied.
        input: String,
        /// The offending character.
        digit: char,
    },
}

/// Errors that can occur when parsing gradient notation like
/// `<#FF0000:0 #0000FF:1>`.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GradientParseError {
    /// The notation is not enclosed in angle brackets.
    #[error("gradient notation must be enclosed in angle brackets: {0}")]
    Unbracketed(String),

    /// An anchor is not of the form `#RRGGBB:offset`.
    #[error("malformed gradient anchor: {0:?}")]
    MalformedAnchor(String),

    /// The color part of an anchor is invalid.
    #[error("invalid anchor color: {0}")]
    InvalidColor(#[from] ColorParseError),

    /// The offset part of an anchor is not a finite number.
    #[error("invalid anchor offset: {0:?}")]
    InvalidOffset(String),

    /// The offset lies outside of `[0, 1]`.
    #[error("anchor offset {0} is outside of [0, 1]")]
    OffsetOutOfRange(f64),

    /// The notation did not contain a single anchor.
    #[error("gradient notation contains no anchors")]
    Empty,
}

/// Errors that can occur when loading [`crate::MarkupOptions`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The options document is not valid JSON for the options schema.
    #[error("invalid markup options: {0}")]
    Json(#[from] serde_json::Error),
}
