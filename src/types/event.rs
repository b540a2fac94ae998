use anyhow::Context;
use std::convert::TryFrom;

use crate::types::Floor;

/// A button press coming from the building or from inside the car.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Request {
    /// Up button on a landing.
    HallUp(Floor),
    /// Down button on a landing.
    HallDown(Floor),
    /// Floor button on the panel inside the car.
    Panel(Floor),
}

impl Request {
    pub fn floor(&self) -> Floor {
        match *self {
            Request::HallUp(floor) | Request::HallDown(floor) | Request::Panel(floor) => floor,
        }
    }
}

/// One decoded line of driver input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Request(Request),
    Exit,
}

impl TryFrom<&str> for Input {
    type Error = anyhow::Error;

    /// Decodes `<U|D|P><floor>` case-insensitively, or the `EXIT` token.
    fn try_from(value: &str) -> anyhow::Result<Self> {
        let line = value.trim().to_ascii_uppercase();
        if line == "EXIT" {
            return Ok(Input::Exit);
        }

        let mut chars = line.chars();
        let Some(cmd) = chars.next() else {
            anyhow::bail!("empty input");
        };
        let num_str = chars.as_str();
        if num_str.is_empty() {
            anyhow::bail!("missing floor number after '{cmd}'");
        }
        let floor = num_str
            .parse::<Floor>()
            .with_context(|| format!("failed to parse '{num_str}' as a floor"))?;

        match cmd {
            'U' => Ok(Input::Request(Request::HallUp(floor))),
            'D' => Ok(Input::Request(Request::HallDown(floor))),
            'P' => Ok(Input::Request(Request::Panel(floor))),
            other => anyhow::bail!("unknown command letter: {other}"),
        }
    }
}
