//! Markup parser options.

use serde::Deserialize;

use crate::error::ConfigError;

/// The escape lead used by legacy chat markup.
pub const DEFAULT_ESCAPE_LEAD: char = '§';

/// Options controlling how markup is recognized.
///
/// Missing fields take their defaults, so an empty JSON object is a valid
/// configuration.
///
/// # Examples
///
/// ```
/// use chatmark::MarkupOptions;
///
/// let options = MarkupOptions::from_json(r#"{ "escape_lead": "&" }"#).unwrap();
/// assert_eq!(options.escape_lead, '&');
/// assert!(options.gradients);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MarkupOptions {
    /// Character introducing a marker sequence.
    pub escape_lead: char,
    /// Whether `<...>` gradient markers are recognized.
    pub gradients: bool,
}

impl Default for MarkupOptions {
    fn default() -> Self {
        Self {
            escape_lead: DEFAULT_ESCAPE_LEAD,
            gradients: true,
        }
    }
}

impl MarkupOptions {
    /// Load options from a JSON document.
    pub fn from_json(input: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(input)?)
    }

    /// Use a different escape lead.
    pub fn with_escape_lead(mut self, escape_lead: char) -> Self {
        self.escape_lead = escape_lead;
        self
    }

    /// Enable or disable gradient markers.
    pub fn with_gradients(mut self, gradients: bool) -> Self {
        self.gradients = gradients;
        self
    }
}
