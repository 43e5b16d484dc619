//! Win and round context passed alongside a hand.

use serde::{Deserialize, Serialize};

use crate::tile::{Tile, Wind};

/// How the winning tile arrived: identity of the tile plus whether the
/// winner drew it themselves or claimed a discard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinContext {
    winning_tile: Tile,
    self_drawn: bool,
}

impl WinContext {
    pub fn new(winning_tile: Tile, self_drawn: bool) -> Self {
        Self {
            winning_tile,
            self_drawn,
        }
    }

    pub fn winning_tile(&self) -> Tile {
        self.winning_tile
    }

    pub fn self_drawn(&self) -> bool {
        self.self_drawn
    }
}

/// Table state that only matters at scoring time: the winner's seat wind
/// and the round's prevailing wind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundContext {
    seat_wind: Wind,
    prevailing_wind: Wind,
}

impl RoundContext {
    pub fn new(seat_wind: Wind, prevailing_wind: Wind) -> Self {
        Self {
            seat_wind,
            prevailing_wind,
        }
    }

    pub fn seat_wind(&self) -> Wind {
        self.seat_wind
    }

    pub fn prevailing_wind(&self) -> Wind {
        self.prevailing_wind
    }
}

impl Default for RoundContext {
    fn default() -> Self {
        Self::new(Wind::East, Wind::East)
    }
}
