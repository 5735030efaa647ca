//! Legacy chat markup compiler.
//!
//! This crate turns strings written with legacy chat escape sequences into a
//! tree of styled text nodes, and renders that tree either as an attributed
//! JSON document or back into flat legacy escape sequences.
//!
//! # Overview
//!
//! Markers start with an escape lead, `§` by default:
//!
//! - `§#RRGGBB` - exact hex color for the following text
//! - `§<#RRGGBB:0 #RRGGBB:1>` - color the following text along a gradient
//! - `§l` `§o` `§n` `§m` `§k` - bold, italic, underlined, strikethrough,
//!   obfuscated (applied when a hex color or gradient is active)
//! - `§0`-`§f`, `§r` - legacy colors and reset, which end a hex/gradient run
//!
//! Markers the parser does not understand, as well as malformed ones, are
//! kept as literal text. Parsing never fails.
//!
//! # Usage
//!
//! ```
//! use chatmark::{MarkupParser, render};
//!
//! let parser = MarkupParser::new();
//! let root = parser.parse("§#FF00AAhello §lworld");
//!
//! // Exact colors for clients that support them
//! let json = render::to_json(&root, false);
//! assert!(json.contains(r##""color":"#FF00AA""##));
//!
//! // Nearest legacy palette colors for everyone else
//! assert_eq!(render::to_plain_text(&root), "§5hello §5§lworld");
//! ```

pub mod color;
pub mod config;
pub mod error;
pub mod formatting;
pub mod gradient;
pub mod markup;
pub mod node;
pub mod palette;
pub mod parser;
pub mod render;

// Re-export main types at crate root
pub use color::Rgb;
pub use config::{DEFAULT_ESCAPE_LEAD, MarkupOptions};
pub use error::{ColorParseError, ConfigError, GradientParseError};
pub use formatting::Formatting;
pub use gradient::{GradientAnchor, GradientEngine};
pub use markup::MarkupParser;
pub use node::{ClickAction, ClickEvent, HoverAction, HoverEvent, StyledNode};
pub use palette::{ChatColor, ColorApproximator, LegacyPalette, approximate};
pub use render::Document;
