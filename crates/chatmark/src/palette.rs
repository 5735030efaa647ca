//! The 16-entry legacy chat palette and nearest-color approximation.
//!
//! Clients that only understand legacy color codes get every exact color
//! mapped onto the closest palette entry. Closeness is the L1 distance
//! ([`Rgb::distance`]); on ties the entry declared first wins.

use std::fmt;

use serde::Serialize;

use crate::color::Rgb;

/// A legacy chat color.
///
/// Variants are declared in palette order, which is also the order the
/// approximation scans them in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatColor {
    Black,
    DarkBlue,
    DarkGreen,
    DarkAqua,
    DarkRed,
    DarkPurple,
    Gold,
    Gray,
    DarkGray,
    Blue,
    Green,
    Aqua,
    Red,
    LightPurple,
    Yellow,
    White,
}

impl ChatColor {
    /// All palette entries in table order.
    pub const ALL: [ChatColor; 16] = [
        ChatColor::Black,
        ChatColor::DarkBlue,
        ChatColor::DarkGreen,
        ChatColor::DarkAqua,
        ChatColor::DarkRed,
        ChatColor::DarkPurple,
        ChatColor::Gold,
        ChatColor::Gray,
        ChatColor::DarkGray,
        ChatColor::Blue,
        ChatColor::Green,
        ChatColor::Aqua,
        ChatColor::Red,
        ChatColor::LightPurple,
        ChatColor::Yellow,
        ChatColor::White,
    ];

    /// The legacy code character that selects this color (`0`-`9`, `a`-`f`).
    pub const fn code(self) -> char {
        match self {
            ChatColor::Black => '0',
            ChatColor::DarkBlue => '1',
            ChatColor::DarkGreen => '2',
            ChatColor::DarkAqua => '3',
            ChatColor::DarkRed => '4',
            ChatColor::DarkPurple => '5',
            ChatColor::Gold => '6',
            ChatColor::Gray => '7',
            ChatColor::DarkGray => '8',
            ChatColor::Blue => '9',
            ChatColor::Green => 'a',
            ChatColor::Aqua => 'b',
            ChatColor::Red => 'c',
            ChatColor::LightPurple => 'd',
            ChatColor::Yellow => 'e',
            ChatColor::White => 'f',
        }
    }

    /// The protocol name of this color, e.g. `dark_blue`.
    pub const fn name(self) -> &'static str {
        match self {
            ChatColor::Black => "black",
            ChatColor::DarkBlue => "dark_blue",
            ChatColor::DarkGreen => "dark_green",
            ChatColor::DarkAqua => "dark_aqua",
            ChatColor::DarkRed => "dark_red",
            ChatColor::DarkPurple => "dark_purple",
            ChatColor::Gold => "gold",
            ChatColor::Gray => "gray",
            ChatColor::DarkGray => "dark_gray",
            ChatColor::Blue => "blue",
            ChatColor::Green => "green",
            ChatColor::Aqua => "aqua",
            ChatColor::Red => "red",
            ChatColor::LightPurple => "light_purple",
            ChatColor::Yellow => "yellow",
            ChatColor::White => "white",
        }
    }

    /// The RGB value clients render this color with.
    pub const fn rgb(self) -> Rgb {
        match self {
            ChatColor::Black => Rgb::new(0x00, 0x00, 0x00),
            ChatColor::DarkBlue => Rgb::new(0x00, 0x00, 0xAA),
            ChatColor::DarkGreen => Rgb::new(0x00, 0xAA, 0x00),
            ChatColor::DarkAqua => Rgb::new(0x00, 0xAA, 0xAA),
            ChatColor::DarkRed => Rgb::new(0xAA, 0x00, 0x00),
            ChatColor::DarkPurple => Rgb::new(0xAA, 0x00, 0xAA),
            ChatColor::Gold => Rgb::new(0xFF, 0xAA, 0x00),
            ChatColor::Gray => Rgb::new(0xAA, 0xAA, 0xAA),
            ChatColor::DarkGray => Rgb::new(0x55, 0x55, 0x55),
            ChatColor::Blue => Rgb::new(0x55, 0x55, 0xFF),
            ChatColor::Green => Rgb::new(0x55, 0xFF, 0x55),
            ChatColor::Aqua => Rgb::new(0x55, 0xFF, 0xFF),
            ChatColor::Red => Rgb::new(0xFF, 0x55, 0x55),
            ChatColor::LightPurple => Rgb::new(0xFF, 0x55, 0xFF),
            ChatColor::Yellow => Rgb::new(0xFF, 0xFF, 0x55),
            ChatColor::White => Rgb::new(0xFF, 0xFF, 0xFF),
        }
    }

    /// Look up a color by its legacy code character.
    pub fn from_code(code: char) -> Option<Self> {
        Self::ALL.into_iter().find(|color| color.code() == code)
    }
}

impl fmt::Display for ChatColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A policy that maps arbitrary colors onto the legacy palette.
pub trait ColorApproximator: fmt::Debug + Send + Sync {
    /// Find the palette entry that best represents `color`.
    fn approximate(&self, color: Rgb) -> ChatColor;
}

/// Nearest palette entry by L1 distance, first entry wins on ties.
#[derive(Clone, Copy, Debug, Default)]
pub struct LegacyPalette;

impl ColorApproximator for LegacyPalette {
    fn approximate(&self, color: Rgb) -> ChatColor {
        let mut closest = ChatColor::ALL[0];
        let mut closest_distance = u32::MAX;

        for candidate in ChatColor::ALL {
            let distance = color.distance(&candidate.rgb());
            if distance < closest_distance {
                closest = candidate;
                closest_distance = distance;
            }
        }

        closest
    }
}

/// Approximate `color` with the default [`LegacyPalette`].
///
/// # Examples
///
/// ```
/// use chatmark::{approximate, ChatColor, Rgb};
///
/// assert_eq!(approximate(Rgb::new(250, 80, 90)), ChatColor::Red);
/// ```
pub fn approximate(color: Rgb) -> ChatColor {
    LegacyPalette.approximate(color)
}
