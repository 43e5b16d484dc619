//! Tile identity types for the Hong-Kong tile set.
//!
//! A [`Tile`] is an immutable (kind, value) pair. Suited tiles carry a
//! [`Suit`] and a value 1-9; dragons and winds are honor tiles; flowers
//! (gentlemen and seasons) never participate in melds.
//!
//! Tiles are `Copy` and totally ordered so that solver output is
//! deterministic and order-stable across runs.

mod multiset;

pub use multiset::TileMultiset;

use serde::{Deserialize, Serialize};

use crate::error::HandError;

/// The three numbered suits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Characters (wan).
    Characters,
    /// Circles (tong).
    Circles,
    /// Bamboos (sok).
    Bamboos,
}

impl Suit {
    /// All suits in canonical order.
    pub const ALL: [Suit; 3] = [Suit::Characters, Suit::Circles, Suit::Bamboos];
}

/// Dragon honor kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Dragon {
    /// Red dragon (zhong).
    Red,
    /// Green dragon (fat).
    Green,
    /// White dragon (bak).
    White,
}

impl Dragon {
    /// All dragons in canonical order.
    pub const ALL: [Dragon; 3] = [Dragon::Red, Dragon::Green, Dragon::White];
}

/// Wind honor kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Wind {
    /// East wind.
    East,
    /// South wind.
    South,
    /// West wind.
    West,
    /// North wind.
    North,
}

impl Wind {
    /// All winds in canonical order.
    pub const ALL: [Wind; 4] = [Wind::East, Wind::South, Wind::West, Wind::North];
}

/// Flower families. Each has values 1-4.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FlowerKind {
    /// The four gentlemen.
    Gentleman,
    /// The four seasons.
    Season,
}

/// An immutable Hong-Kong mahjong tile.
///
/// Ordering is (variant, fields) via the derive, which yields the canonical
/// suited < dragon < wind < flower order used everywhere for deterministic
/// output.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Tile {
    /// A numbered suit tile, value 1-9.
    Suited {
        /// Which suit.
        suit: Suit,
        /// Face value, 1-9.
        value: u8,
    },
    /// A dragon honor tile.
    Dragon(Dragon),
    /// A wind honor tile.
    Wind(Wind),
    /// A bonus flower tile, value 1-4. Never part of a meld.
    Flower {
        /// Gentleman or season.
        kind: FlowerKind,
        /// Face value, 1-4.
        value: u8,
    },
}

impl Tile {
    /// Create a suited tile, validating the value range.
    pub fn suited(suit: Suit, value: u8) -> Result<Self, HandError> {
        if !(1..=9).contains(&value) {
            return Err(HandError::InvalidTiles {
                detail: format!("suited tile value must be 1-9, got {value}"),
            });
        }
        Ok(Tile::Suited { suit, value })
    }

    /// Create a dragon tile.
    #[must_use]
    pub const fn dragon(dragon: Dragon) -> Self {
        Tile::Dragon(dragon)
    }

    /// Create a wind tile.
    #[must_use]
    pub const fn wind(wind: Wind) -> Self {
        Tile::Wind(wind)
    }

    /// Create a flower tile, validating the value range.
    pub fn flower(kind: FlowerKind, value: u8) -> Result<Self, HandError> {
        if !(1..=4).contains(&value) {
            return Err(HandError::InvalidTiles {
                detail: format!("flower tile value must be 1-4, got {value}"),
            });
        }
        Ok(Tile::Flower { kind, value })
    }

    /// Is this a numbered suit tile?
    #[must_use]
    pub const fn is_suited(self) -> bool {
        matches!(self, Tile::Suited { .. })
    }

    /// Is this a dragon or wind tile?
    #[must_use]
    pub const fn is_honor(self) -> bool {
        matches!(self, Tile::Dragon(_) | Tile::Wind(_))
    }

    /// Is this a flower tile?
    #[must_use]
    pub const fn is_flower(self) -> bool {
        matches!(self, Tile::Flower { .. })
    }

    /// The suit, for suited tiles.
    #[must_use]
    pub const fn suit(self) -> Option<Suit> {
        match self {
            Tile::Suited { suit, .. } => Some(suit),
            _ => None,
        }
    }

    /// The face value for suited and flower tiles.
    #[must_use]
    pub const fn value(self) -> Option<u8> {
        match self {
            Tile::Suited { value, .. } | Tile::Flower { value, .. } => Some(value),
            _ => None,
        }
    }

    /// All dragon and wind tiles in canonical order.
    #[must_use]
    pub fn honor_tiles() -> Vec<Tile> {
        let mut tiles: Vec<Tile> = Dragon::ALL.iter().map(|&d| Tile::Dragon(d)).collect();
        tiles.extend(Wind::ALL.iter().map(|&w| Tile::Wind(w)));
        tiles
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Tile::Suited { suit, value } => {
                let s = match suit {
                    Suit::Characters => 'c',
                    Suit::Circles => 'o',
                    Suit::Bamboos => 'b',
                };
                write!(f, "{value}{s}")
            }
            Tile::Dragon(d) => write!(f, "{d:?}"),
            Tile::Wind(w) => write!(f, "{w:?}"),
            Tile::Flower { kind, value } => write!(f, "{kind:?}{value}"),
        }
    }
}
