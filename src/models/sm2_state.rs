use serde::{Deserialize, Serialize};

/// SM-2 state of a single problem. Rebuilt from history on every schedule
/// request and never stored.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sm2State {
    pub interval: u32,
    pub ease_factor: f64,
    pub repetitions: u32,
}

impl Sm2State {
    pub fn initial(ease_factor: f64) -> Self {
        Self {
            interval: 0,
            ease_factor,
            repetitions: 0,
        }
    }
}

impl Default for Sm2State {
    fn default() -> Self {
        Self::initial(2.5)
    }
}
