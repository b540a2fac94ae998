use clap::{Parser, ValueEnum};
use std::time::Duration;

use crate::types::Floor;

/// What the driver does with a line it cannot decode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum InvalidInputPolicy {
    /// Treat bad input as the user being done.
    #[default]
    Terminate,
    /// Log it and keep reading.
    Ignore,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "dispatch_sim", about = "Single-car elevator dispatch simulator")]
pub struct Config {
    /// Number of floors in the building (floors are numbered from 0).
    #[arg(
        long,
        env = "ELEVATOR_FLOORS",
        default_value_t = 10,
        value_parser = clap::value_parser!(i32).range(1..)
    )]
    pub floors: Floor,

    /// Floor the car starts on. Saturates into the building.
    #[arg(
        long,
        env = "ELEVATOR_START_FLOOR",
        default_value_t = 0,
        allow_negative_numbers = true
    )]
    pub start_floor: Floor,

    /// Scheduling period in milliseconds.
    #[arg(
        long = "tick-ms",
        env = "ELEVATOR_TICK_MS",
        default_value_t = 5000,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub tick_ms: u64,

    #[arg(
        long,
        env = "ELEVATOR_ON_INVALID",
        value_enum,
        default_value_t = InvalidInputPolicy::Terminate
    )]
    pub on_invalid: InvalidInputPolicy,
}

impl Config {
    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}
