//! Renderers for the styled node tree.
//!
//! Two targets are supported:
//!
//! - [`to_document`]: the attributed JSON text document understood by modern
//!   clients, with exact or palette-approximated colors.
//! - [`to_plain_text`]: a flat string of legacy escape sequences, using
//!   palette-approximated colors only.
//!
//! Both are stateless tree walks. Every node carries its complete style, so
//! nothing leaks from one sibling into the next.

use std::fmt;

use serde::Serialize;

use crate::config::DEFAULT_ESCAPE_LEAD;
use crate::formatting::Formatting;
use crate::node::{ClickAction, HoverAction, StyledNode};

/// A rendered attributed text document.
///
/// Serializes with the protocol's key names, in the order `text`, `color`,
/// `hoverEvent`, `clickEvent`, formatting flags, `extra`. Absent colors and
/// events, inactive flags and empty `extra` lists are omitted.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hover_event: Option<HoverEventDocument>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub click_event: Option<ClickEventDocument>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub bold: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub italic: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub underlined: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub strikethrough: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub obfuscated: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub extra: Vec<Document>,
}

/// A rendered hover event.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HoverEventDocument {
    pub action: HoverAction,
    pub value: Box<Document>,
}

/// A rendered click event.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ClickEventDocument {
    pub action: ClickAction,
    pub value: String,
}

impl Document {
    /// Serialize to compact JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serialize to a JSON value.
    pub fn to_value(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = self.to_json().map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}

/// Render a node and its siblings into an attributed document.
///
/// With `approximate_colors`, colors are written as palette names like
/// `dark_red`; otherwise the exact color is written as it was set.
pub fn to_document(node: &StyledNode, approximate_colors: bool) -> Document {
    let color = if approximate_colors {
        node.approximated_color().map(|color| color.name().to_string())
    } else {
        node.color().map(str::to_string)
    };

    let formatting = node.formatting();

    Document {
        text: node.text().unwrap_or_default().to_string(),
        color,
        hover_event: node.hover().map(|hover| HoverEventDocument {
            action: hover.action,
            value: Box::new(to_document(&hover.value, approximate_colors)),
        }),
        click_event: node.click().map(|click| ClickEventDocument {
            action: click.action,
            value: click.value.clone(),
        }),
        bold: formatting.contains(Formatting::BOLD),
        italic: formatting.contains(Formatting::ITALIC),
        underlined: formatting.contains(Formatting::UNDERLINED),
        strikethrough: formatting.contains(Formatting::STRIKETHROUGH),
        obfuscated: formatting.contains(Formatting::OBFUSCATED),
        extra: node
            .siblings()
            .iter()
            .map(|sibling| to_document(sibling, approximate_colors))
            .collect(),
    }
}

/// Render a node straight to compact JSON.
pub fn to_json(node: &StyledNode, approximate_colors: bool) -> String {
    to_document(node, approximate_colors).to_string()
}

/// Render a node into legacy escape sequences using the `§` lead.
///
/// # Examples
///
/// ```
/// use chatmark::{render::to_plain_text, Formatting, StyledNode};
///
/// let mut node = StyledNode::new("Warning");
/// node.set_color("#FF5050");
/// node.toggle_formatting(Formatting::BOLD, true);
/// assert_eq!(to_plain_text(&node), "§c§lWarning");
/// ```
pub fn to_plain_text(node: &StyledNode) -> String {
    to_plain_text_with(node, DEFAULT_ESCAPE_LEAD)
}

/// Render a node into legacy escape sequences using `escape_lead`.
pub fn to_plain_text_with(node: &StyledNode, escape_lead: char) -> String {
    let mut out = String::new();
    write_plain_text(node, escape_lead, &mut out);
    out
}

fn write_plain_text(node: &StyledNode, escape_lead: char, out: &mut String) {
    if let Some(color) = node.approximated_color() {
        out.push(escape_lead);
        out.push(color.code());
    }

    for (_, marker) in node.formatting().markers() {
        out.push(escape_lead);
        out.push(marker);
    }

    if let Some(text) = node.text() {
        out.push_str(text);
    }

    for sibling in node.siblings() {
        write_plain_text(sibling, escape_lead, out);
    }
}
