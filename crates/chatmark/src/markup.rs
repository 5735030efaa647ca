//! The configured markup compiler.
//!
//! [`MarkupParser`] bundles the options and collaborators a parse needs: the
//! escape lead, the optional gradient engine and the color approximation
//! policy. It holds no per-parse state and can be shared between threads.

use std::sync::Arc;

use crate::config::MarkupOptions;
use crate::gradient::GradientEngine;
use crate::node::StyledNode;
use crate::palette::{ColorApproximator, LegacyPalette};
use crate::render;

/// Compiles legacy chat markup into styled nodes and rendered output.
///
/// # Examples
///
/// ```
/// use chatmark::MarkupParser;
///
/// let parser = MarkupParser::new();
/// let root = parser.parse("§#FF5555Alert");
/// assert_eq!(root.siblings()[0].color(), Some("#FF5555"));
///
/// assert_eq!(parser.to_plain_text("§#FF5555Alert"), "§cAlert");
/// assert_eq!(
///     parser.to_json("§#FF5555Alert", true),
///     r#"{"text":"","extra":[{"text":"Alert","color":"red"}]}"#
/// );
/// ```
#[derive(Clone, Debug)]
pub struct MarkupParser {
    escape_lead: char,
    gradients: Option<GradientEngine>,
    approximator: Arc<dyn ColorApproximator>,
}

impl Default for MarkupParser {
    fn default() -> Self {
        Self::from_options(&MarkupOptions::default())
    }
}

impl MarkupParser {
    /// Create a parser with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser from options, using the [`LegacyPalette`].
    pub fn from_options(options: &MarkupOptions) -> Self {
        Self {
            escape_lead: options.escape_lead,
            gradients: options.gradients.then_some(GradientEngine),
            approximator: Arc::new(LegacyPalette),
        }
    }

    /// Use a different color approximation policy.
    pub fn with_approximator(mut self, approximator: impl ColorApproximator + 'static) -> Self {
        self.approximator = Arc::new(approximator);
        self
    }

    /// Recognize gradient markers with `engine`.
    pub fn with_gradient_engine(mut self, engine: GradientEngine) -> Self {
        self.gradients = Some(engine);
        self
    }

    /// Treat gradient markers as literal text.
    pub fn without_gradients(mut self) -> Self {
        self.gradients = None;
        self
    }

    /// The escape lead this parser recognizes.
    pub fn escape_lead(&self) -> char {
        self.escape_lead
    }

    /// The color approximation policy in use.
    pub fn approximator(&self) -> &dyn ColorApproximator {
        self.approximator.as_ref()
    }

    /// Parse markup into a root node whose siblings hold the content.
    pub fn parse(&self, input: &str) -> StyledNode {
        crate::parser::parse(
            input,
            self.escape_lead,
            self.gradients.as_ref(),
            self.approximator.as_ref(),
        )
    }

    /// Parse markup and render the attributed document as JSON.
    pub fn to_json(&self, input: &str, approximate_colors: bool) -> String {
        render::to_json(&self.parse(input), approximate_colors)
    }

    /// Parse markup and render it as legacy escape sequences.
    pub fn to_plain_text(&self, input: &str) -> String {
        render::to_plain_text_with(&self.parse(input), self.escape_lead)
    }
}
