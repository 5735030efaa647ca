//! Linear color gradients.
//!
//! A gradient is written as a list of anchors enclosed in angle brackets,
//! each anchor pairing a color with an offset between 0 and 1:
//!
//! ```text
//! <#FF0000:0 #00FF00:.5 #0000FF:1>
//! ```
//!
//! Before the first anchor and after the last one the gradient is flat.
//! In between, colors are interpolated linearly per channel and floored.

use nom::{combinator::all_consuming, number::complete::double};

use crate::color::Rgb;
use crate::error::GradientParseError;
use crate::node::StyledNode;
use crate::palette::ColorApproximator;

/// A fixed color point of a gradient.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientAnchor {
    /// Color at this point.
    pub color: Rgb,
    /// Position on the gradient, between 0 and 1.
    pub offset: f64,
}

impl GradientAnchor {
    pub fn new(color: Rgb, offset: f64) -> Self {
        Self { color, offset }
    }
}

/// Parses gradient notation and colors text along a gradient.
///
/// The markup parser only recognizes gradient markers when it has an engine;
/// see [`crate::MarkupParser::without_gradients`].
#[derive(Clone, Copy, Debug, Default)]
pub struct GradientEngine;

impl GradientEngine {
    /// Parse gradient notation into anchors sorted by offset.
    ///
    /// See [`parse_notation`].
    pub fn parse(&self, notation: &str) -> Result<Vec<GradientAnchor>, GradientParseError> {
        parse_notation(notation)
    }

    /// Pick the color at `percentage` along `anchors`.
    ///
    /// See [`evaluate`].
    pub fn evaluate(&self, anchors: &[GradientAnchor], percentage: f64) -> Rgb {
        evaluate(anchors, percentage)
    }

    /// Color every character of `text` along the gradient.
    ///
    /// Returns a node with empty text holding one sibling per character.
    /// Character `i` of `n` is colored at `(i + 1) / n`, so the last
    /// character always lands on the end of the gradient.
    pub fn gradientize(
        &self,
        text: &str,
        anchors: &[GradientAnchor],
        approximator: &dyn ColorApproximator,
    ) -> StyledNode {
        let chars: Vec<char> = text.chars().collect();
        let total = chars.len() as f64;

        let mut wrapper = StyledNode::new("");
        for (i, c) in chars.into_iter().enumerate() {
            let percentage = (i + 1) as f64 / total;
            let mut node = StyledNode::new(c.to_string());
            node.set_color_with(evaluate(anchors, percentage).to_hex(), approximator);
            wrapper.add_sibling(node);
        }
        wrapper
    }
}

/// Parse gradient notation of the form `<#RRGGBB:offset ...>`.
///
/// Anchors are separated by single spaces; trailing spaces before the
/// closing bracket are ignored. Every anchor must be valid, otherwise the
/// whole notation is rejected. The result is sorted by offset (stable).
///
/// # Examples
///
/// ```
/// use chatmark::gradient::parse_notation;
///
/// let anchors = parse_notation("<#0000FF:1 #FF0000:0>").unwrap();
/// assert_eq!(anchors[0].offset, 0.0);
/// assert!(parse_notation("<#FF0000:2>").is_err());
/// ```
pub fn parse_notation(notation: &str) -> Result<Vec<GradientAnchor>, GradientParseError> {
    let inner = notation
        .strip_prefix('<')
        .and_then(|rest| rest.strip_suffix('>'))
        .ok_or_else(|| GradientParseError::Unbracketed(notation.to_string()))?;

    let mut anchors = inner
        .trim_end_matches(' ')
        .split(' ')
        .map(parse_anchor)
        .collect::<Result<Vec<_>, _>>()?;

    if anchors.is_empty() {
        return Err(GradientParseError::Empty);
    }

    anchors.sort_by(|a, b| a.offset.total_cmp(&b.offset));
    Ok(anchors)
}

/// Parse a single `#RRGGBB:offset` anchor.
fn parse_anchor(token: &str) -> Result<GradientAnchor, GradientParseError> {
    let (color, offset) = token
        .split_once(':')
        .filter(|(_, offset)| !offset.contains(':'))
        .ok_or_else(|| GradientParseError::MalformedAnchor(token.to_string()))?;

    let color = Rgb::parse_hex(color)?;
    let offset = parse_offset(offset)?;

    Ok(GradientAnchor::new(color, offset))
}

/// Parse an offset like `0`, `.5` or `1.0` and check it lies in `[0, 1]`.
fn parse_offset(input: &str) -> Result<f64, GradientParseError> {
    let (_, offset) = all_consuming(double::<&str, nom::error::Error<&str>>)(input)
        .map_err(|_| GradientParseError::InvalidOffset(input.to_string()))?;

    if !offset.is_finite() {
        return Err(GradientParseError::InvalidOffset(input.to_string()));
    }
    if !(0.0..=1.0).contains(&offset) {
        return Err(GradientParseError::OffsetOutOfRange(offset));
    }

    Ok(offset)
}

/// Pick the color at `percentage` along offset-sorted `anchors`.
///
/// - no anchors: white
/// - one anchor: its color
/// - at or before the first offset: the first color
/// - at or after the last offset: the last color
/// - otherwise: interpolated between the closest anchor strictly below
///   `percentage` and the closest anchor at or above it, floored per channel.
///   Hitting an interior offset exactly yields that anchor's color.
///
/// # Examples
///
/// ```
/// use chatmark::{Rgb, gradient::{evaluate, GradientAnchor}};
///
/// let anchors = [
///     GradientAnchor::new(Rgb::new(0, 0, 0), 0.0),
///     GradientAnchor::new(Rgb::new(255, 255, 255), 1.0),
/// ];
/// assert_eq!(evaluate(&anchors, 0.5), Rgb::new(127, 127, 127));
/// ```
pub fn evaluate(anchors: &[GradientAnchor], percentage: f64) -> Rgb {
    let (first, last) = match anchors {
        [] => return Rgb::WHITE,
        [only] => return only.color,
        [first, .., last] => (first, last),
    };

    if percentage <= first.offset {
        return first.color;
    }
    if percentage >= last.offset {
        return last.color;
    }

    let mut below = first;
    let mut above = last;

    for anchor in &anchors[1..anchors.len() - 1] {
        if anchor.offset < percentage && anchor.offset > below.offset {
            below = anchor;
        }
        // >= so that an exact hit picks the anchor's own color
        if anchor.offset >= percentage && anchor.offset < above.offset {
            above = anchor;
        }
    }

    let t = (percentage - below.offset) / (above.offset - below.offset);

    Rgb::new(
        lerp(below.color.r, above.color.r, t),
        lerp(below.color.g, above.color.g, t),
        lerp(below.color.b, above.color.b, t),
    )
}

fn lerp(from: u8, to: u8, t: f64) -> u8 {
    let value = f64::from(from) + t * (f64::from(to) - f64::from(from));
    value.floor().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anchor(hex: &str, offset: f64) -> GradientAnchor {
        GradientAnchor::new(Rgb::parse_hex(hex).unwrap(), offset)
    }

    #[test]
    fn parse_two_anchors() {
        let anchors = parse_notation("<#FF0000:0 #0000FF:1>").unwrap();
        assert_eq!(
            anchors,
            vec![anchor("#FF0000", 0.0), anchor("#0000FF", 1.0)]
        );
    }

    #[test]
    fn parse_sorts_by_offset() {
        let anchors = parse_notation("<#0000FF:1 #00FF00:.5 #FF0000:0>").unwrap();
        let offsets: Vec<f64> = anchors.iter().map(|a| a.offset).collect();
        assert_eq!(offsets, vec![0.0, 0.5, 1.0]);
    }

    #[test]
    fn parse_ignores_trailing_spaces() {
        assert_eq!(parse_notation("<#FF0000:0  >").unwrap().len(), 1);
    }

    #[test]
    fn parse_rejects_missing_brackets() {
        assert!(matches!(
            parse_notation("#FF0000:0"),
            Err(GradientParseError::Unbracketed(_))
        ));
        assert!(matches!(
            parse_notation("<#FF0000:0"),
            Err(GradientParseError::Unbracketed(_))
        ));
    }

    #[test]
    fn parse_rejects_empty() {
        assert!(parse_notation("<>").is_err());
    }

    #[test]
    fn parse_rejects_double_space() {
        assert!(matches!(
            parse_notation("<#FF0000:0  #0000FF:1>"),
            Err(GradientParseError::MalformedAnchor(_))
        ));
    }

    #[test]
    fn parse_rejects_extra_colon() {
        assert!(matches!(
            parse_notation("<#FF0000:0:1>"),
            Err(GradientParseError::MalformedAnchor(_))
        ));
    }

    #[test]
    fn parse_rejects_bad_offsets() {
        assert!(matches!(
            parse_notation("<#FF0000:abc>"),
            Err(GradientParseError::InvalidOffset(_))
        ));
        assert!(matches!(
            parse_notation("<#FF0000:0.5x>"),
            Err(GradientParseError::InvalidOffset(_))
        ));
        assert!(matches!(
            parse_notation("<#FF0000:nan>"),
            Err(GradientParseError::InvalidOffset(_))
        ));
        assert!(matches!(
            parse_notation("<#FF0000:-0.1>"),
            Err(GradientParseError::OffsetOutOfRange(_))
        ));
    }

    #[test]
    fn evaluate_empty_is_white() {
        assert_eq!(evaluate(&[], 0.3), Rgb::WHITE);
    }

    #[test]
    fn evaluate_single_anchor() {
        let anchors = [anchor("#123456", 0.7)];
        assert_eq!(evaluate(&anchors, 0.0), Rgb::new(0x12, 0x34, 0x56));
        assert_eq!(evaluate(&anchors, 1.0), Rgb::new(0x12, 0x34, 0x56));
    }

    #[test]
    fn evaluate_clamps_outside_range() {
        let anchors = [anchor("#FF0000", 0.25), anchor("#0000FF", 0.75)];
        assert_eq!(evaluate(&anchors, 0.1), Rgb::new(255, 0, 0));
        assert_eq!(evaluate(&anchors, 0.25), Rgb::new(255, 0, 0));
        assert_eq!(evaluate(&anchors, 0.9), Rgb::new(0, 0, 255));
    }

    #[test]
    fn evaluate_exact_interior_hit() {
        let anchors = [
            anchor("#FF0000", 0.0),
            anchor("#00FF00", 0.5),
            anchor("#0000FF", 1.0),
        ];
        assert_eq!(evaluate(&anchors, 0.5), Rgb::new(0, 255, 0));
    }

    #[test]
    fn evaluate_between_interior_anchors() {
        let anchors = [
            anchor("#FF0000", 0.0),
            anchor("#00FF00", 0.5),
            anchor("#0000FF", 1.0),
        ];
        // halfway between green and blue
        assert_eq!(evaluate(&anchors, 0.75), Rgb::new(0, 127, 127));
        // a quarter of the way from red to green
        assert_eq!(evaluate(&anchors, 0.125), Rgb::new(191, 63, 0));
    }

    #[test]
    fn evaluate_floors_channels() {
        let anchors = [anchor("#000000", 0.0), anchor("#0A0A0A", 1.0)];
        assert_eq!(evaluate(&anchors, 0.99), Rgb::new(9, 9, 9));
    }

    #[test]
    fn gradientize_colors_each_character() {
        let anchors = [anchor("#000000", 0.0), anchor("#FFFFFF", 1.0)];
        let node = GradientEngine.gradientize("abcd", &anchors, &crate::LegacyPalette);

        assert_eq!(node.text(), Some(""));
        let colors: Vec<_> = node.siblings().iter().filter_map(|n| n.color()).collect();
        assert_eq!(colors, vec!["#3f3f3f", "#7f7f7f", "#bfbfbf", "#ffffff"]);
        let texts: String = node.siblings().iter().filter_map(|n| n.text()).collect();
        assert_eq!(texts, "abcd");
    }

    #[test]
    fn gradientize_empty_text() {
        let anchors = [anchor("#000000", 0.0)];
        let node = GradientEngine.gradientize("", &anchors, &crate::LegacyPalette);
        assert!(node.siblings().is_empty());
    }
}
