//! Main markup parser for legacy chat text.
//!
//! Consumes lexer tokens, accumulating literal text under a pending style and
//! flushing it into a new sibling of the root whenever the style changes.

use std::mem;

use crate::formatting::Formatting;
use crate::gradient::{GradientAnchor, GradientEngine};
use crate::node::StyledNode;
use crate::palette::ColorApproximator;

use super::lexer::{Lexer, Token};

/// Parses legacy chat markup into a root node.
///
/// The root has no text; every run of text becomes one of its siblings.
/// Malformed markers never fail the parse, they are kept as literal text.
///
/// # Examples
///
/// ```
/// use chatmark::{parser::parse, LegacyPalette};
///
/// let root = parse("§#FF0000Hot §#0000FFCold", '§', None, &LegacyPalette);
/// assert_eq!(root.siblings().len(), 2);
/// assert_eq!(root.siblings()[1].color(), Some("#0000FF"));
/// ```
pub fn parse(
    input: &str,
    escape_lead: char,
    gradients: Option<&GradientEngine>,
    approximator: &dyn ColorApproximator,
) -> StyledNode {
    let mut parser = Parser::new(escape_lead, gradients, approximator);
    for token in Lexer::new(input, escape_lead, gradients) {
        parser.process_token(token);
    }

    // Nothing follows, so there is nothing to reset
    parser.flush(false);

    log::debug!(
        "parsed {} chars of markup into {} siblings",
        input.chars().count(),
        parser.head.siblings().len()
    );
    parser.head
}

/// Style waiting to be applied to the buffered text.
#[derive(Debug, Default)]
struct PendingState {
    /// Literal text collected since the last flush.
    buffer: String,
    /// Exact color from the last hex marker.
    color: Option<String>,
    /// Gradient from the last gradient marker.
    gradient: Option<Vec<GradientAnchor>>,
    /// Flags set since the last color or gradient marker.
    formatting: Formatting,
}

impl PendingState {
    fn has_color(&self) -> bool {
        self.color.is_some() || self.gradient.is_some()
    }

    fn reset(&mut self) {
        self.color = None;
        self.gradient = None;
        self.formatting = Formatting::empty();
    }
}

/// The main parser state.
struct Parser<'a> {
    escape_lead: char,
    gradients: Option<&'a GradientEngine>,
    approximator: &'a dyn ColorApproximator,
    state: PendingState,
    head: StyledNode,
}

impl<'a> Parser<'a> {
    fn new(
        escape_lead: char,
        gradients: Option<&'a GradientEngine>,
        approximator: &'a dyn ColorApproximator,
    ) -> Self {
        Self {
            escape_lead,
            gradients,
            approximator,
            state: PendingState::default(),
            head: StyledNode::container(),
        }
    }

    /// Process a single token.
    fn process_token(&mut self, token: Token) {
        match token {
            Token::Literal(c) => {
                self.state.buffer.push(c);
            }
            Token::HexColor(hex) => {
                self.flush(true);
                self.state.color = Some(hex);
            }
            Token::Gradient(anchors) => {
                self.flush(true);
                self.state.gradient = Some(anchors);
            }
            Token::Formatting(flag, marker) => {
                if self.state.has_color() {
                    // Color carries over, the flag applies from here on
                    self.flush(false);
                    self.state.formatting |= flag;
                } else {
                    self.push_marker(marker);
                }
            }
            Token::ColorCode(code) => {
                // A legacy color ends the hex run, but stays in the text for
                // the client's own legacy handling
                if self.state.has_color() {
                    self.flush(true);
                }
                self.push_marker(code);
            }
        }
    }

    /// Keep an unhandled marker as literal text.
    fn push_marker(&mut self, marker: char) {
        self.state.buffer.push(self.escape_lead);
        self.state.buffer.push(marker);
    }

    /// Turn the buffered text into a sibling carrying the pending style.
    ///
    /// With `reset_properties`, the pending color, gradient and formatting
    /// are cleared afterwards.
    fn flush(&mut self, reset_properties: bool) {
        if !self.state.buffer.is_empty() {
            let text = mem::take(&mut self.state.buffer);

            let node = match (&self.state.gradient, self.gradients) {
                (Some(anchors), Some(engine)) => {
                    let mut node = engine.gradientize(&text, anchors, self.approximator);
                    node.set_formatting(self.state.formatting);
                    node
                }
                _ => StyledNode::styled(
                    text,
                    self.state.color.clone(),
                    self.state.formatting,
                    self.approximator,
                ),
            };

            self.head.add_sibling(node);
        }

        if reset_properties {
            self.state.reset();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::{ChatColor, LegacyPalette};

    fn parse_default(input: &str) -> StyledNode {
        parse(input, '§', Some(&GradientEngine), &LegacyPalette)
    }

    fn texts(node: &StyledNode) -> Vec<&str> {
        node.siblings().iter().map(|n| n.text().unwrap_or_default()).collect()
    }

    #[test]
    fn parse_plain_text() {
        let root = parse_default("plain text");
        assert_eq!(root.text(), None);
        assert_eq!(texts(&root), vec!["plain text"]);
        assert_eq!(root.siblings()[0].color(), None);
        assert!(root.siblings()[0].formatting().is_empty());
    }

    #[test]
    fn parse_empty_input() {
        let root = parse_default("");
        assert_eq!(root.text(), None);
        assert!(root.siblings().is_empty());
    }

    #[test]
    fn parse_hex_color() {
        let root = parse_default("§#FF00AAhello");
        assert_eq!(texts(&root), vec!["hello"]);
        assert_eq!(root.siblings()[0].color(), Some("#FF00AA"));
        assert_eq!(root.siblings()[0].approximated_color(), Some(ChatColor::DarkPurple));
    }

    #[test]
    fn parse_text_before_hex_color() {
        let root = parse_default("a§#000000b");
        assert_eq!(texts(&root), vec!["a", "b"]);
        assert_eq!(root.siblings()[0].color(), None);
        assert_eq!(root.siblings()[1].color(), Some("#000000"));
    }

    #[test]
    fn parse_formatting_after_hex() {
        let root = parse_default("§#FF0000a§lb§oc");
        assert_eq!(texts(&root), vec!["a", "b", "c"]);
        let siblings = root.siblings();
        assert!(siblings.iter().all(|n| n.color() == Some("#FF0000")));
        assert_eq!(siblings[0].formatting(), Formatting::empty());
        assert_eq!(siblings[1].formatting(), Formatting::BOLD);
        assert_eq!(siblings[2].formatting(), Formatting::BOLD | Formatting::ITALIC);
    }

    #[test]
    fn parse_formatting_without_color_stays_literal() {
        let root = parse_default("§lbold");
        assert_eq!(texts(&root), vec!["§lbold"]);
        assert!(root.siblings()[0].formatting().is_empty());
    }

    #[test]
    fn parse_new_hex_resets_formatting() {
        let root = parse_default("§#FF0000§la§#00FF00b");
        assert_eq!(root.siblings()[0].formatting(), Formatting::BOLD);
        assert_eq!(root.siblings()[1].formatting(), Formatting::empty());
    }

    #[test]
    fn parse_color_code_ends_hex_run() {
        let root = parse_default("§#FF0000red§agreen");
        assert_eq!(texts(&root), vec!["red", "§agreen"]);
        assert_eq!(root.siblings()[1].color(), None);
    }

    #[test]
    fn parse_reset_code_ends_hex_run() {
        let root = parse_default("§#FF0000§lred§rplain");
        assert_eq!(texts(&root), vec!["red", "§rplain"]);
        assert_eq!(root.siblings()[1].formatting(), Formatting::empty());
    }

    #[test]
    fn parse_color_code_without_hex_is_untouched() {
        let root = parse_default("§ahello §bworld");
        assert_eq!(texts(&root), vec!["§ahello §bworld"]);
    }

    #[test]
    fn parse_gradient_wraps_characters() {
        let root = parse_default("§<#000000:0 #FFFFFF:1>§lab");
        assert_eq!(root.siblings().len(), 1);

        let gradient = &root.siblings()[0];
        assert_eq!(gradient.text(), Some(""));
        assert_eq!(gradient.color(), None);
        assert_eq!(gradient.formatting(), Formatting::BOLD);
        assert_eq!(texts(gradient), vec!["a", "b"]);
        assert_eq!(gradient.siblings()[0].color(), Some("#7f7f7f"));
        assert_eq!(gradient.siblings()[1].color(), Some("#ffffff"));
    }

    #[test]
    fn parse_hex_after_gradient_clears_gradient() {
        let root = parse_default("§<#000000:0 #FFFFFF:1>ab§#123456c");
        assert_eq!(root.siblings().len(), 2);
        assert_eq!(root.siblings()[1].color(), Some("#123456"));
        assert!(root.siblings()[1].siblings().is_empty());
    }

    #[test]
    fn parse_gradient_without_engine_is_literal() {
        let root = parse("§<#000000:0>x", '§', None, &LegacyPalette);
        assert_eq!(texts(&root), vec!["§<#000000:0>x"]);
    }

    #[test]
    fn parse_invalid_hex_keeps_lead() {
        let root = parse_default("§#XYZ123 text");
        assert_eq!(texts(&root), vec!["§#XYZ123 text"]);
    }
}
