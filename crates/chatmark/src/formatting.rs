//! Legacy text formatting flags.
//!
//! The five flags are independent; any combination may be active at once.
//! Their declaration order is also the order in which renderers emit them.

use bitflags::bitflags;
use phf::phf_map;

bitflags! {
    /// Set of text formatting flags.
    ///
    /// # Example
    ///
    /// ```
    /// use chatmark::Formatting;
    ///
    /// let mut fmt = Formatting::empty();
    /// fmt |= Formatting::BOLD;
    /// fmt |= Formatting::ITALIC;
    ///
    /// assert!(fmt.contains(Formatting::BOLD));
    /// assert!(!fmt.contains(Formatting::OBFUSCATED));
    /// assert_eq!(Formatting::from_marker('n'), Some(Formatting::UNDERLINED));
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Formatting: u8 {
        /// Bold text, marker `l`.
        const BOLD          = 0b0000_0001;
        /// Italic text, marker `o`.
        const ITALIC        = 0b0000_0010;
        /// Underlined text, marker `n`.
        const UNDERLINED    = 0b0000_0100;
        /// Struck through text, marker `m`.
        const STRIKETHROUGH = 0b0000_1000;
        /// Obfuscated (randomly cycling) text, marker `k`.
        const OBFUSCATED    = 0b0001_0000;
    }
}

/// Marker character following the escape lead, per flag.
static MARKERS: phf::Map<char, Formatting> = phf_map! {
    'l' => Formatting::BOLD,
    'o' => Formatting::ITALIC,
    'n' => Formatting::UNDERLINED,
    'm' => Formatting::STRIKETHROUGH,
    'k' => Formatting::OBFUSCATED,
};

/// Single flags in declaration order with their marker and document key.
const FLAGS: [(Formatting, char, &str); 5] = [
    (Formatting::BOLD, 'l', "bold"),
    (Formatting::ITALIC, 'o', "italic"),
    (Formatting::UNDERLINED, 'n', "underlined"),
    (Formatting::STRIKETHROUGH, 'm', "strikethrough"),
    (Formatting::OBFUSCATED, 'k', "obfuscated"),
];

impl Formatting {
    /// Find the flag selected by a marker character.
    pub fn from_marker(marker: char) -> Option<Self> {
        MARKERS.get(&marker).copied()
    }

    /// The marker character of a single flag.
    ///
    /// Returns `None` for empty or combined sets.
    pub fn marker(self) -> Option<char> {
        FLAGS
            .iter()
            .find(|(flag, _, _)| *flag == self)
            .map(|(_, marker, _)| *marker)
    }

    /// The lower-case document key of a single flag, e.g. `strikethrough`.
    ///
    /// Returns `None` for empty or combined sets.
    pub fn key(self) -> Option<&'static str> {
        FLAGS
            .iter()
            .find(|(flag, _, _)| *flag == self)
            .map(|(_, _, key)| *key)
    }

    /// Iterate the active flags as `(flag, marker)` pairs in declaration order.
    pub fn markers(self) -> impl Iterator<Item = (Formatting, char)> {
        FLAGS
            .into_iter()
            .filter(move |(flag, _, _)| self.contains(*flag))
            .map(|(flag, marker, _)| (flag, marker))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markers_resolve() {
        assert_eq!(Formatting::from_marker('l'), Some(Formatting::BOLD));
        assert_eq!(Formatting::from_marker('o'), Some(Formatting::ITALIC));
        assert_eq!(Formatting::from_marker('k'), Some(Formatting::OBFUSCATED));
        assert_eq!(Formatting::from_marker('r'), None);
        assert_eq!(Formatting::from_marker('L'), None);
    }

    #[test]
    fn marker_and_key_of_single_flags() {
        assert_eq!(Formatting::STRIKETHROUGH.marker(), Some('m'));
        assert_eq!(Formatting::UNDERLINED.key(), Some("underlined"));
        assert_eq!((Formatting::BOLD | Formatting::ITALIC).marker(), None);
        assert_eq!(Formatting::empty().key(), None);
    }

    #[test]
    fn markers_follow_declaration_order() {
        let fmt = Formatting::OBFUSCATED | Formatting::BOLD | Formatting::UNDERLINED;
        let markers: Vec<char> = fmt.markers().map(|(_, m)| m).collect();
        assert_eq!(markers, vec!['l', 'n', 'k']);
    }
}
