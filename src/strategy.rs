use serde::{Deserialize, Serialize};

use crate::error::BlackjackError;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
#[repr(u8)]
pub enum Action {
    Hit = 0,
    Stand = 1,
}

impl Action {
    pub fn from_code(code: &str) -> Action {
        match code {
            "S" => Action::Stand,
            _ => Action::Hit,
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Action::Hit => "H",
            Action::Stand => "S",
        }
    }
}

impl From<Action> for u8 {
    fn from(action: Action) -> u8 {
        action as u8
    }
}

impl TryFrom<u8> for Action {
    type Error = BlackjackError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Action::Hit),
            1 => Ok(Action::Stand),
            other => Err(BlackjackError::UnknownAction(other)),
        }
    }
}

pub const DEFAULT_STANDS_ON: u32 = 17;

/// Hits below a fixed total, stands from it upward.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct StandPolicy {
    pub stands_on: u32,
}

impl Default for StandPolicy {
    fn default() -> Self {
        StandPolicy {
            stands_on: DEFAULT_STANDS_ON,
        }
    }
}

impl StandPolicy {
    pub fn new(stands_on: u32) -> Self {
        StandPolicy { stands_on }
    }

    pub fn decide(&self, sum: u32) -> Action {
        if sum < self.stands_on {
            Action::Hit
        } else {
            Action::Stand
        }
    }
}
