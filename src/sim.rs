use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{
    card::{CardSource, RandomCards},
    error::{BlackjackError, Result},
    game::{play_round, Outcome, RoundResult},
    player::OPENING_MINIMUM,
    strategy::{StandPolicy, DEFAULT_STANDS_ON},
};

fn default_rounds() -> u32 {
    1
}

fn default_stands_on() -> u32 {
    DEFAULT_STANDS_ON
}

fn default_progress_interval() -> u32 {
    10_000
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationInput {
    #[serde(default = "default_rounds")]
    pub rounds: u32,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default = "default_stands_on")]
    pub stands_on: u32,
    #[serde(default = "default_progress_interval")]
    pub progress_interval: u32,
}

impl Default for SimulationInput {
    fn default() -> Self {
        SimulationInput {
            rounds: default_rounds(),
            seed: None,
            stands_on: default_stands_on(),
            progress_interval: default_progress_interval(),
        }
    }
}

impl SimulationInput {
    pub fn validate(&self) -> Result<()> {
        if self.rounds == 0 {
            return Err(BlackjackError::InvalidConfig(
                "rounds must be at least 1".to_string(),
            ));
        }
        if !(OPENING_MINIMUM..=21).contains(&self.stands_on) {
            return Err(BlackjackError::InvalidConfig(format!(
                "standsOn must be within {OPENING_MINIMUM}..=21, got {}",
                self.stands_on
            )));
        }
        Ok(())
    }

    pub fn policy(&self) -> StandPolicy {
        StandPolicy::new(self.stands_on)
    }

    pub fn card_source(&self) -> RandomCards {
        match self.seed {
            Some(seed) => RandomCards::from_seed(seed),
            None => RandomCards::from_entropy(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResult {
    pub total_rounds: u32,
    pub wins: u32,
    pub losses: u32,
    pub pushes: u32,
    pub player_busts: u32,
    pub dealer_busts: u32,
    pub win_rate: f64,
    pub loss_rate: f64,
    pub push_rate: f64,
}

impl SimulationResult {
    fn record(&mut self, round: &RoundResult) {
        self.total_rounds += 1;
        match round.outcome {
            Outcome::Win => self.wins += 1,
            Outcome::Lose => self.losses += 1,
            Outcome::Push => self.pushes += 1,
        }
        if round.player_bust() {
            self.player_busts += 1;
        }
        if round.dealer_bust() {
            self.dealer_busts += 1;
        }
    }

    fn finalize(&mut self) {
        let total = self.total_rounds;
        let rate = |count: u32| {
            if total > 0 {
                (count as f64 / total as f64) * 100.0
            } else {
                0.0
            }
        };
        self.win_rate = rate(self.wins);
        self.loss_rate = rate(self.losses);
        self.push_rate = rate(self.pushes);
    }
}

pub fn run(input: SimulationInput) -> Result<SimulationResult> {
    run_with_progress(input, |_current, _total| {})
}

pub fn run_with_progress<F>(input: SimulationInput, progress_cb: F) -> Result<SimulationResult>
where
    F: FnMut(u32, u32),
{
    let mut source = input.card_source();
    run_from_source(&input, &mut source, progress_cb)
}

/// Same as [`run_with_progress`] but draws from a caller-supplied source.
pub fn run_from_source<S, F>(
    input: &SimulationInput,
    source: &mut S,
    mut progress_cb: F,
) -> Result<SimulationResult>
where
    S: CardSource + ?Sized,
    F: FnMut(u32, u32),
{
    input.validate()?;
    let policy = input.policy();
    let progress_interval = input.progress_interval.max(1);
    let mut result = SimulationResult::default();

    for round_index in 0..input.rounds {
        let round = play_round(source, &policy)?;
        result.record(&round);

        let completed = round_index + 1;
        if completed % progress_interval == 0 || completed == input.rounds {
            progress_cb(completed, input.rounds);
        }
    }

    result.finalize();
    info!(
        rounds = result.total_rounds,
        wins = result.wins,
        losses = result.losses,
        pushes = result.pushes,
        "simulation finished"
    );
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_rounds() {
        let input = SimulationInput {
            rounds: 0,
            ..SimulationInput::default()
        };
        assert!(matches!(run(input), Err(BlackjackError::InvalidConfig(_))));
    }

    #[test]
    fn rejects_stand_threshold_out_of_range() {
        for stands_on in [11, 22] {
            let input = SimulationInput {
                stands_on,
                ..SimulationInput::default()
            };
            assert!(input.validate().is_err());
        }
    }

    #[test]
    fn rates_sum_to_one_hundred() {
        let input = SimulationInput {
            rounds: 500,
            seed: Some(3),
            ..SimulationInput::default()
        };
        let result = run(input).unwrap();
        let total = result.win_rate + result.loss_rate + result.push_rate;
        assert!((total - 100.0).abs() < 1e-9);
    }
}
