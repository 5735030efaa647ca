//! The styled node tree.
//!
//! A [`StyledNode`] is one run of text that shares a color, a set of
//! formatting flags and optional click/hover interactions. Nodes hold an
//! ordered list of siblings which render after the node's own text. There is
//! no back-reference to a parent: any visual inheritance comes from how the
//! renderers walk the tree.

use std::fmt;

use serde::Serialize;

use crate::color::Rgb;
use crate::formatting::Formatting;
use crate::palette::{ChatColor, ColorApproximator, LegacyPalette};
use crate::render;

/// What happens when a player clicks the text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ClickAction {
    OpenUrl,
    RunCommand,
    SuggestCommand,
    ChangePage,
    CopyToClipboard,
}

/// What is shown when a player hovers the text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HoverAction {
    ShowText,
    ShowItem,
    ShowEntity,
}

/// A click action and its literal value (URL, command, page number...).
#[derive(Clone, Debug, PartialEq)]
pub struct ClickEvent {
    pub action: ClickAction,
    pub value: String,
}

/// A hover action and the node displayed for it.
#[derive(Clone, Debug, PartialEq)]
pub struct HoverEvent {
    pub action: HoverAction,
    pub value: Box<StyledNode>,
}

/// A run of styled text plus its ordered siblings.
///
/// # Examples
///
/// ```
/// use chatmark::{ChatColor, ClickAction, Formatting, StyledNode};
///
/// let mut node = StyledNode::new("Visit us");
/// node.set_color("#FF5555");
/// node.toggle_formatting(Formatting::UNDERLINED, true);
/// node.set_click(ClickAction::OpenUrl, "https://example.com");
///
/// assert_eq!(node.approximated_color(), Some(ChatColor::Red));
/// assert_eq!(
///     node.to_string(),
///     r##"{"text":"Visit us","color":"#FF5555","clickEvent":{"action":"open_url","value":"https://example.com"},"underlined":true}"##
/// );
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StyledNode {
    text: Option<String>,
    formatting: Formatting,
    color: Option<String>,
    approximated_color: Option<ChatColor>,
    click: Option<ClickEvent>,
    hover: Option<HoverEvent>,
    siblings: Vec<StyledNode>,
}

impl StyledNode {
    /// Create a plain text node without any style.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }

    /// Create a node without text of its own, used to group siblings.
    pub fn container() -> Self {
        Self::default()
    }

    /// Create a text node carrying a color and formatting flags.
    pub(crate) fn styled(
        text: String,
        color: Option<String>,
        formatting: Formatting,
        approximator: &dyn ColorApproximator,
    ) -> Self {
        let mut node = Self::new(text);
        node.formatting = formatting;
        if let Some(color) = color {
            node.set_color_with(color, approximator);
        }
        node
    }

    /// Parse legacy chat markup with the default [`crate::MarkupParser`].
    pub fn parse(input: &str) -> Self {
        crate::MarkupParser::default().parse(input)
    }

    /// The node's own text, if any.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// The active formatting flags.
    pub fn formatting(&self) -> Formatting {
        self.formatting
    }

    /// Returns true if all flags in `flags` are active.
    pub fn has_formatting(&self, flags: Formatting) -> bool {
        self.formatting.contains(flags)
    }

    /// Turn a formatting flag on or off.
    pub fn toggle_formatting(&mut self, flags: Formatting, state: bool) {
        self.formatting.set(flags, state);
    }

    /// Replace all formatting flags.
    pub fn set_formatting(&mut self, formatting: Formatting) {
        self.formatting = formatting;
    }

    /// The exact color as it was set, e.g. `#FF00AA`.
    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    /// The palette approximation of [`Self::color`].
    ///
    /// Absent when no color is set or the color is not `#RRGGBB`.
    pub fn approximated_color(&self) -> Option<ChatColor> {
        self.approximated_color
    }

    /// Set the exact color, approximating it with the [`LegacyPalette`].
    pub fn set_color(&mut self, color: impl Into<String>) {
        self.set_color_with(color, &LegacyPalette);
    }

    /// Set the exact color, approximating it with `approximator`.
    pub fn set_color_with(&mut self, color: impl Into<String>, approximator: &dyn ColorApproximator) {
        let color = color.into();
        self.approximated_color = Rgb::parse_hex(&color)
            .ok()
            .map(|rgb| approximator.approximate(rgb));
        self.color = Some(color);
    }

    /// Remove the color and its approximation.
    pub fn clear_color(&mut self) {
        self.color = None;
        self.approximated_color = None;
    }

    /// The click event, if any.
    pub fn click(&self) -> Option<&ClickEvent> {
        self.click.as_ref()
    }

    /// Set what happens when the text is clicked.
    pub fn set_click(&mut self, action: ClickAction, value: impl Into<String>) {
        self.click = Some(ClickEvent {
            action,
            value: value.into(),
        });
    }

    /// Remove the click event.
    pub fn clear_click(&mut self) {
        self.click = None;
    }

    /// The hover event, if any.
    pub fn hover(&self) -> Option<&HoverEvent> {
        self.hover.as_ref()
    }

    /// Set the node shown when the text is hovered.
    pub fn set_hover(&mut self, action: HoverAction, value: StyledNode) {
        self.hover = Some(HoverEvent {
            action,
            value: Box::new(value),
        });
    }

    /// Show plain `text` on hover and return the created node for styling.
    pub fn set_hover_text(&mut self, action: HoverAction, text: impl Into<String>) -> &mut StyledNode {
        let hover = self.hover.insert(HoverEvent {
            action,
            value: Box::new(StyledNode::new(text)),
        });
        &mut hover.value
    }

    /// Remove the hover event.
    pub fn clear_hover(&mut self) {
        self.hover = None;
    }

    /// The ordered siblings rendered after this node's text.
    pub fn siblings(&self) -> &[StyledNode] {
        &self.siblings
    }

    /// Append a sibling.
    pub fn add_sibling(&mut self, node: StyledNode) {
        self.siblings.push(node);
    }
}

impl fmt::Display for StyledNode {
    /// Writes the structured document with exact colors.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&render::to_document(self, false), f)
    }
}
