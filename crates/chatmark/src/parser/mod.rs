//! Parser for legacy chat markup.
//!
//! This module contains the lexer and the main markup parser.

mod lexer;
mod markup;

pub use lexer::{Lexer, Token};
pub use markup::parse;
