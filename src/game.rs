use serde::Serialize;
use tracing::debug;

use crate::{
    card::CardSource,
    dealer::Dealer,
    error::Result,
    hand::BLACKJACK,
    player::Player,
    strategy::{Action, StandPolicy},
};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Win,
    Lose,
    Push,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundResult {
    pub outcome: Outcome,
    pub player_sum: u32,
    pub player_soft: bool,
    pub dealer_up: u32,
    /// `None` when the player busted and the dealer never played.
    pub dealer_sum: Option<u32>,
    pub actions: Vec<Action>,
}

impl RoundResult {
    pub fn player_bust(&self) -> bool {
        self.player_sum > BLACKJACK
    }

    pub fn dealer_bust(&self) -> bool {
        self.dealer_sum.map_or(false, |sum| sum > BLACKJACK)
    }
}

/// Plays one round: player first under `policy`, then the dealer to 17.
pub fn play_round<S: CardSource + ?Sized>(
    source: &mut S,
    policy: &StandPolicy,
) -> Result<RoundResult> {
    let mut player = Player::new(source)?;
    let mut dealer = Dealer::new(source)?;
    let dealer_up = dealer.sum();

    let mut actions = Vec::new();
    while !player.is_bust() {
        let action = policy.decide(player.sum());
        actions.push(action);
        match action {
            Action::Hit => {
                player.hit(source)?;
            }
            Action::Stand => break,
        }
    }

    if player.is_bust() {
        debug!(player_sum = player.sum(), "player busts");
        return Ok(RoundResult {
            outcome: Outcome::Lose,
            player_sum: player.sum(),
            player_soft: player.usable_ace(),
            dealer_up,
            dealer_sum: None,
            actions,
        });
    }

    let dealer_sum = dealer.play_to_end(source)?;
    let outcome = settle(player.sum(), dealer_sum);
    debug!(
        player_sum = player.sum(),
        dealer_sum,
        ?outcome,
        "round settled"
    );

    Ok(RoundResult {
        outcome,
        player_sum: player.sum(),
        player_soft: player.usable_ace(),
        dealer_up,
        dealer_sum: Some(dealer_sum),
        actions,
    })
}

/// Compares a standing player total against the dealer's final total.
pub fn settle(player_sum: u32, dealer_sum: u32) -> Outcome {
    if dealer_sum > BLACKJACK || player_sum > dealer_sum {
        Outcome::Win
    } else if player_sum < dealer_sum {
        Outcome::Lose
    } else {
        Outcome::Push
    }
}
