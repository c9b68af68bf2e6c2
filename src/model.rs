//! Core data models for the points countdown.
//! Everything here mirrors the remote timer service; nothing is authoritative locally.

use serde::{Deserialize, Serialize};
use std::rc::Rc;
use yew::Reducible;

use crate::error::InputError;

pub const DEFAULT_TOTAL_DURATION_SECS: i64 = 8 * 60 * 60;

/// Body of `GET /points_info`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointsInfo {
    pub points: f64,
    pub elapsed_seconds: i64,
    pub timer_running: bool,
    /// Total duration as reported by the service, when it sends one.
    #[serde(default)]
    pub initial_remaining_seconds: Option<i64>,
}

/// Body of `POST /add_points`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointsUpdate {
    #[serde(alias = "remaining_points")]
    pub points: f64,
}

/// Acknowledgement from start/stop/reset. Only the message is kept, for logging.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Ack {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ClientState {
    pub points: f64,
    pub elapsed_seconds: i64,
    pub timer_running: bool,
    pub total_duration_secs: i64,
}

impl ClientState {
    pub fn new(total_duration_secs: i64) -> Self {
        Self {
            points: 0.0,
            elapsed_seconds: 0,
            timer_running: false,
            total_duration_secs,
        }
    }

    /// Seconds left of the total duration; negative once the timer runs over.
    pub fn remaining_seconds(&self) -> i64 {
        self.total_duration_secs - self.elapsed_seconds
    }

    pub fn start_stop_label(&self) -> &'static str {
        if self.timer_running { "Stop Timer" } else { "Start Timer" }
    }
}

impl Default for ClientState {
    fn default() -> Self {
        Self::new(DEFAULT_TOTAL_DURATION_SECS)
    }
}

pub enum ClientAction {
    Snapshot(PointsInfo),
    Started,
    Stopped,
    Reset,
    PointsAdded(f64),
}

impl Reducible for ClientState {
    type Action = ClientAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use ClientAction::*;
        let mut new = (*self).clone();
        match action {
            Snapshot(info) => {
                new.points = info.points;
                new.elapsed_seconds = info.elapsed_seconds;
                new.timer_running = info.timer_running;
                if let Some(total) = info.initial_remaining_seconds {
                    new.total_duration_secs = total;
                }
            }
            Started => new.timer_running = true,
            Stopped => new.timer_running = false,
            Reset => {
                new.points = 0.0;
                new.elapsed_seconds = 0;
                new.timer_running = false;
            }
            PointsAdded(points) => new.points = points,
        }
        Rc::new(new)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointsStyle {
    Positive,
    Negative,
}

impl PointsStyle {
    pub fn of(points: f64) -> Self {
        if points >= 0.0 { PointsStyle::Positive } else { PointsStyle::Negative }
    }

    pub fn class(self) -> &'static str {
        match self {
            PointsStyle::Positive => "positive",
            PointsStyle::Negative => "negative",
        }
    }
}

/// Validates what the user typed into the add-points prompt.
/// `None` means the prompt was dismissed.
pub fn parse_points_input(input: Option<&str>) -> Result<f64, InputError> {
    let raw = input.ok_or(InputError::Cancelled)?;
    let trimmed = raw.trim();
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(InputError::NotANumber(raw.to_string())),
    }
}
