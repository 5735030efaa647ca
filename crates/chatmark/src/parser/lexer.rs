//! Lexer for legacy chat markup.
//!
//! Converts input text into a stream of tokens. The lexer only recognizes
//! marker syntax; whether a formatting or color-code marker actually changes
//! the style depends on parser state and is decided in [`super::markup`].

use crate::color::is_hex_digit;
use crate::formatting::Formatting;
use crate::gradient::{GradientAnchor, GradientEngine};

/// A token produced by the lexer.
#[derive(Clone, Debug, PartialEq)]
pub enum Token {
    /// A literal character, including escape leads that start no marker.
    Literal(char),
    /// A hex color marker: `§#RRGGBB`, carrying `#RRGGBB` as written.
    HexColor(String),
    /// A gradient marker: `§<#RRGGBB:offset ...>`.
    Gradient(Vec<GradientAnchor>),
    /// A formatting marker such as `§l`, with its marker character.
    Formatting(Formatting, char),
    /// A legacy color or reset code such as `§a` or `§r`.
    ColorCode(char),
}

/// Lexer for legacy chat markup.
///
/// # Examples
///
/// ```
/// use chatmark::parser::{Lexer, Token};
///
/// let tokens: Vec<_> = Lexer::new("§#FF0000a", '§', None).collect();
/// assert_eq!(
///     tokens,
///     vec![Token::HexColor("#FF0000".into()), Token::Literal('a')]
/// );
/// ```
pub struct Lexer<'a> {
    chars: Vec<char>,
    pos: usize,
    escape_lead: char,
    gradients: Option<&'a GradientEngine>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer. Gradient markers are only recognized when an
    /// engine is supplied.
    pub fn new(input: &str, escape_lead: char, gradients: Option<&'a GradientEngine>) -> Self {
        Self {
            chars: input.chars().collect(),
            pos: 0,
            escape_lead,
            gradients,
        }
    }

    /// Try to consume `§#RRGGBB` at the current position.
    fn consume_hex_color(&mut self) -> Option<Token> {
        let digits = self.chars.get(self.pos + 2..self.pos + 8)?;
        if !digits.iter().all(|c| is_hex_digit(*c)) {
            return None;
        }

        let hex: String = std::iter::once('#').chain(digits.iter().copied()).collect();
        self.pos += 8;
        Some(Token::HexColor(hex))
    }

    /// Try to consume `§<...>` at the current position.
    fn consume_gradient(&mut self) -> Option<Token> {
        let engine = self.gradients?;

        let open = self.pos + 1;
        let close = open + self.chars[open..].iter().position(|c| *c == '>')?;
        let notation: String = self.chars[open..=close].iter().collect();

        match engine.parse(&notation) {
            Ok(anchors) => {
                self.pos = close + 1;
                Some(Token::Gradient(anchors))
            }
            Err(err) => {
                log::trace!("treating {notation:?} as literal text: {err}");
                None
            }
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let c = *self.chars.get(self.pos)?;

        let Some(&next) = self.chars.get(self.pos + 1) else {
            self.pos += 1;
            return Some(Token::Literal(c));
        };

        if c != self.escape_lead {
            self.pos += 1;
            return Some(Token::Literal(c));
        }

        let marker = match next {
            '#' => self.consume_hex_color(),
            '<' => self.consume_gradient(),
            _ => None,
        };
        if marker.is_some() {
            return marker;
        }

        if let Some(flag) = Formatting::from_marker(next) {
            self.pos += 2;
            return Some(Token::Formatting(flag, next));
        }

        if is_color_code(next) {
            self.pos += 2;
            return Some(Token::ColorCode(next));
        }

        // Not a marker: the lead is literal, the next character is lexed
        // on its own so that it may start a marker itself.
        self.pos += 1;
        Some(Token::Literal(c))
    }
}

/// Legacy color codes `0`-`9`, `a`-`f` and the reset code `r`.
fn is_color_code(c: char) -> bool {
    matches!(c, '0'..='9' | 'a'..='f' | 'r')
}
