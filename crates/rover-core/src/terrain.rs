//! Terrain symbols and their battery costs.

use std::fmt;

/// The kind of ground in a grid cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Terrain {
    Flat,
    Hill,
    /// Impassable: can never be entered.
    Ditch,
    /// An accepting cell. Entered at the same cost as flat ground.
    Goal,
}

impl Terrain {
    /// All terrain kinds.
    pub const ALL: [Terrain; 4] = [Terrain::Flat, Terrain::Hill, Terrain::Ditch, Terrain::Goal];

    /// Battery consumed by entering a cell of this terrain, or `None` if the
    /// cell cannot be entered at all.
    #[inline]
    pub const fn cost(self) -> Option<i32> {
        match self {
            Terrain::Flat => Some(2),
            Terrain::Hill => Some(4),
            Terrain::Goal => Some(2),
            Terrain::Ditch => None,
        }
    }

    #[inline]
    pub const fn is_passable(self) -> bool {
        self.cost().is_some()
    }

    /// Single-character symbol used in the text grid format.
    pub const fn symbol(self) -> char {
        match self {
            Terrain::Flat => 'F',
            Terrain::Hill => 'H',
            Terrain::Ditch => 'D',
            Terrain::Goal => 'G',
        }
    }

    /// Parse a terrain symbol. Unknown symbols yield `None`.
    pub const fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            'F' => Some(Terrain::Flat),
            'H' => Some(Terrain::Hill),
            'D' => Some(Terrain::Ditch),
            'G' => Some(Terrain::Goal),
            _ => None,
        }
    }
}

impl TryFrom<char> for Terrain {
    type Error = char;

    /// Fails with the offending character if it is not a terrain symbol.
    fn try_from(ch: char) -> Result<Self, char> {
        Self::from_symbol(ch).ok_or(ch)
    }
}

impl fmt::Display for Terrain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
