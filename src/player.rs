use tracing::debug;

use crate::card::{draw, CardSource};
use crate::error::Result;
use crate::hand::{AceRule, Hand};

/// Minimum total the player's opening hand is dealt up to.
pub const OPENING_MINIMUM: u32 = 12;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    hand: Hand,
}

impl Player {
    /// Deals cards until the hand reaches the opening minimum.
    pub fn new<S: CardSource + ?Sized>(source: &mut S) -> Result<Self> {
        let mut player = Player { hand: Hand::new() };
        while player.hand.sum() < OPENING_MINIMUM {
            player.hit(source)?;
        }
        debug!(
            sum = player.hand.sum(),
            usable_ace = player.hand.usable_ace(),
            "player dealt in"
        );
        Ok(player)
    }

    pub fn with_hand(hand: Hand) -> Self {
        Player { hand }
    }

    /// Takes one card and returns the total after it.
    pub fn hit<S: CardSource + ?Sized>(&mut self, source: &mut S) -> Result<u32> {
        let card = draw(source)?;
        self.hand.apply_draw(card.value, AceRule::Guarded)
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    pub fn sum(&self) -> u32 {
        self.hand.sum()
    }

    pub fn usable_ace(&self) -> bool {
        self.hand.usable_ace()
    }

    pub fn is_bust(&self) -> bool {
        self.hand.is_bust()
    }
}
