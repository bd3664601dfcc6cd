use serde::Serialize;
use tracing::trace;

use crate::card::ACE;
use crate::error::{BlackjackError, Result};

pub const BLACKJACK: u32 = 21;

/// How an incoming Ace is counted.
///
/// The player and the dealer do not agree here: the player only promotes an
/// Ace to 11 while the hand is below 11, the dealer always promotes it and
/// relies on demotion to pull the total back.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AceRule {
    Guarded,
    AlwaysHigh,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Hand {
    sum: u32,
    usable_ace: bool,
}

impl Hand {
    pub fn new() -> Self {
        Hand::default()
    }

    /// Rebuilds a hand from a known state. A soft total above 21 cannot exist,
    /// so it is demoted on the way in.
    pub fn from_parts(sum: u32, usable_ace: bool) -> Self {
        let mut hand = Hand { sum, usable_ace };
        hand.demote_if_over();
        hand
    }

    pub fn sum(&self) -> u32 {
        self.sum
    }

    pub fn usable_ace(&self) -> bool {
        self.usable_ace
    }

    pub fn is_bust(&self) -> bool {
        self.sum > BLACKJACK
    }

    /// Adds one card to the hand and returns the new total.
    pub fn apply_draw(&mut self, pip: u8, rule: AceRule) -> Result<u32> {
        if !(2..=ACE).contains(&pip) {
            return Err(BlackjackError::InvalidPipValue(pip));
        }

        let promoted = pip == ACE && (rule == AceRule::AlwaysHigh || self.sum < 11);
        if pip == ACE && !promoted {
            self.sum += 1;
        } else {
            if promoted {
                self.usable_ace = true;
            }
            self.sum += u32::from(pip);
        }
        let demoted = self.demote_if_over();

        trace!(
            pip,
            ?rule,
            promoted,
            demoted,
            sum = self.sum,
            usable_ace = self.usable_ace,
            "applied draw"
        );
        Ok(self.sum)
    }

    fn demote_if_over(&mut self) -> bool {
        if self.sum > BLACKJACK && self.usable_ace {
            self.usable_ace = false;
            self.sum -= 10;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn low_ace_is_promoted() {
        let mut hand = Hand::from_parts(10, false);
        assert_eq!(hand.apply_draw(11, AceRule::Guarded), Ok(21));
        assert!(hand.usable_ace());
    }

    #[test]
    fn guarded_ace_on_high_hand_counts_one() {
        let mut hand = Hand::from_parts(15, false);
        assert_eq!(hand.apply_draw(11, AceRule::Guarded), Ok(16));
        assert!(!hand.usable_ace());
    }

    #[test]
    fn guarded_ace_counts_one_even_when_soft() {
        let mut hand = Hand::from_parts(13, true);
        assert_eq!(hand.apply_draw(11, AceRule::Guarded), Ok(14));
        assert!(hand.usable_ace());
    }

    #[test]
    fn overflow_demotes_soft_ace() {
        let mut hand = Hand::from_parts(21, true);
        assert_eq!(hand.apply_draw(5, AceRule::Guarded), Ok(16));
        assert!(!hand.usable_ace());
    }

    #[test]
    fn hard_hand_busts() {
        let mut hand = Hand::from_parts(16, false);
        assert_eq!(hand.apply_draw(10, AceRule::Guarded), Ok(26));
        assert!(hand.is_bust());
    }

    #[test]
    fn always_high_promotes_then_demotes() {
        let mut hand = Hand::from_parts(15, false);
        assert_eq!(hand.apply_draw(11, AceRule::AlwaysHigh), Ok(16));
        assert!(!hand.usable_ace());
    }

    #[test]
    fn rejects_impossible_pips() {
        let mut hand = Hand::new();
        assert_eq!(
            hand.apply_draw(1, AceRule::Guarded),
            Err(BlackjackError::InvalidPipValue(1))
        );
        assert_eq!(
            hand.apply_draw(12, AceRule::AlwaysHigh),
            Err(BlackjackError::InvalidPipValue(12))
        );
        assert_eq!(hand, Hand::new());
    }

    #[test]
    fn from_parts_never_holds_a_soft_bust() {
        let hand = Hand::from_parts(25, true);
        assert_eq!(hand.sum(), 15);
        assert!(!hand.usable_ace());
    }
}
