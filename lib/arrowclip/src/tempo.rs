use serde::{Deserialize, Serialize};

/// A tempo change to `bpm` beats per minute at `tick`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TempoPoint {
    pub tick: u32,
    pub bpm: f64,
}

impl TempoPoint {
    pub fn new(tick: u32, bpm: f64) -> TempoPoint {
        TempoPoint { tick, bpm }
    }
}

/// A stop of `seconds` at `tick`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StopPoint {
    pub tick: u32,
    pub seconds: f64,
}

impl StopPoint {
    pub fn new(tick: u32, seconds: f64) -> StopPoint {
        StopPoint { tick, seconds }
    }
}
