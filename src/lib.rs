use js_sys::Function;
use wasm_bindgen::prelude::*;

pub mod card;
pub mod dealer;
pub mod error;
pub mod game;
pub mod hand;
pub mod player;
pub mod sim;
pub mod strategy;

pub use card::{draw, pip_value, Card, CardSource, RandomCards, StackedCards};
pub use dealer::Dealer;
pub use error::BlackjackError;
pub use game::{Outcome, RoundResult};
pub use hand::{AceRule, Hand};
pub use player::Player;
pub use strategy::{Action, StandPolicy};

fn js_error(context: &str, err: impl std::fmt::Display) -> JsValue {
    let message = format!("{context}: {err}");
    web_sys::console::error_1(&JsValue::from_str(&message));
    JsValue::from_str(&message)
}

fn read_input(params: &JsValue) -> std::result::Result<sim::SimulationInput, JsValue> {
    if params.is_undefined() || params.is_null() {
        return Ok(sim::SimulationInput::default());
    }
    serde_wasm_bindgen::from_value(params.clone()).map_err(|err| js_error("Invalid input", err))
}

#[wasm_bindgen]
pub fn play_round(params: &JsValue) -> std::result::Result<JsValue, JsValue> {
    console_error_panic_hook::set_once();
    let input = read_input(params)?;
    input
        .validate()
        .map_err(|err| js_error("Invalid input", err))?;

    let mut source = input.card_source();
    let result = game::play_round(&mut source, &input.policy())
        .map_err(|err| js_error("Round failed", err))?;

    serde_wasm_bindgen::to_value(&result).map_err(|err| js_error("Serialization failed", err))
}

#[wasm_bindgen]
pub fn run_simulation(params: &JsValue) -> std::result::Result<JsValue, JsValue> {
    console_error_panic_hook::set_once();
    let input = read_input(params)?;

    let result = sim::run(input).map_err(|err| js_error("Simulation failed", err))?;

    serde_wasm_bindgen::to_value(&result).map_err(|err| js_error("Serialization failed", err))
}

#[wasm_bindgen]
pub fn run_simulation_with_progress(
    params: &JsValue,
    progress_callback: &Function,
) -> std::result::Result<JsValue, JsValue> {
    console_error_panic_hook::set_once();
    let input = read_input(params)?;

    let progress_cb = |current: u32, total: u32| {
        let _ = progress_callback.call2(
            &JsValue::NULL,
            &JsValue::from(current),
            &JsValue::from(total),
        );
    };

    let result = sim::run_with_progress(input, progress_cb)
        .map_err(|err| js_error("Simulation failed", err))?;

    serde_wasm_bindgen::to_value(&result).map_err(|err| js_error("Serialization failed", err))
}
