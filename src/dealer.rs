use tracing::debug;

use crate::card::{draw, CardSource};
use crate::error::Result;
use crate::hand::{AceRule, Hand};

pub const DEALER_STANDS_ON: u32 = 17;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dealer {
    hand: Hand,
}

impl Dealer {
    /// Deals the dealer's single up card.
    pub fn new<S: CardSource + ?Sized>(source: &mut S) -> Result<Self> {
        let mut dealer = Dealer { hand: Hand::new() };
        dealer.take_card(source)?;
        Ok(dealer)
    }

    pub fn with_hand(hand: Hand) -> Self {
        Dealer { hand }
    }

    /// Takes one card and returns its pip value, not the total.
    ///
    /// Every Ace is counted high here regardless of the current total; an
    /// overflow immediately demotes it again.
    pub fn take_card<S: CardSource + ?Sized>(&mut self, source: &mut S) -> Result<u8> {
        let card = draw(source)?;
        self.hand.apply_draw(card.value, AceRule::AlwaysHigh)?;
        Ok(card.value)
    }

    /// Draws while below 17 and returns the final total, bust or not.
    pub fn play_to_end<S: CardSource + ?Sized>(&mut self, source: &mut S) -> Result<u32> {
        while self.hand.sum() < DEALER_STANDS_ON {
            self.take_card(source)?;
        }
        debug!(
            sum = self.hand.sum(),
            bust = self.hand.is_bust(),
            "dealer stands"
        );
        Ok(self.hand.sum())
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
