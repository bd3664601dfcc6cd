use std::collections::VecDeque;

use rand::{rngs::SmallRng, Rng, SeedableRng};
use serde::Serialize;

use crate::error::{BlackjackError, Result};

pub const ACE: u8 = 11;

/// Maps a rank in `1..=13` to its pip value. Aces start high.
pub fn pip_value(rank: u8) -> Result<u8> {
    match rank {
        1 => Ok(ACE),
        11 | 12 | 13 => Ok(10),
        2..=10 => Ok(rank),
        _ => Err(BlackjackError::RankOutOfRange(rank)),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Card {
    pub rank: u8,
    pub value: u8,
}

impl Card {
    pub fn from_rank(rank: u8) -> Result<Self> {
        Ok(Card {
            rank,
            value: pip_value(rank)?,
        })
    }

    pub fn is_ace(&self) -> bool {
        self.value == ACE
    }
}

/// Anything that can hand out card ranks. Suits are not modeled and every
/// draw is independent of the previous ones.
pub trait CardSource {
    fn next_rank(&mut self) -> Result<u8>;
}

/// Draws one fresh card from `source`.
pub fn draw<S: CardSource + ?Sized>(source: &mut S) -> Result<Card> {
    let rank = source.next_rank()?;
    Card::from_rank(rank)
}

/// Uniform ranks with replacement, backed by a small fast RNG.
pub struct RandomCards {
    rng: SmallRng,
}

impl RandomCards {
    pub fn from_seed(seed: u64) -> Self {
        RandomCards {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        RandomCards {
            rng: SmallRng::from_entropy(),
        }
    }
}

impl CardSource for RandomCards {
    fn next_rank(&mut self) -> Result<u8> {
        Ok(self.rng.gen_range(1..=13))
    }
}

/// Replays a fixed sequence of ranks, front to back.
#[derive(Clone, Debug, Default)]
pub struct StackedCards {
    ranks: VecDeque<u8>,
}

impl StackedCards {
    pub fn new<I: IntoIterator<Item = u8>>(ranks: I) -> Self {
        StackedCards {
            ranks: ranks.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.ranks.len()
    }
}

impl CardSource for StackedCards {
    fn next_rank(&mut self) -> Result<u8> {
        self.ranks.pop_front().ok_or(BlackjackError::SourceExhausted)
    }
}
