//! Value types used by settings.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::SettingsError;

/// Highest analog pin index (`PIN_A15` on a Mega).
pub const MAX_ANALOG_PIN: u8 = 15;

/// A board pin: a plain digital number or a named analog pin.
///
/// Serialized as a number (`13`) or a name (`PIN_A6`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "PinRepr", into = "PinRepr")]
pub enum Pin {
    Digital(u8),
    Analog(u8),
}

impl Pin {
    pub fn is_analog(&self) -> bool {
        matches!(self, Pin::Analog(_))
    }
}

impl fmt::Display for Pin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pin::Digital(n) => write!(f, "{}", n),
            Pin::Analog(n) => write!(f, "PIN_A{}", n),
        }
    }
}

impl FromStr for Pin {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        let invalid = || SettingsError::InvalidPin(s.to_string());

        if let Ok(n) = name.parse::<u8>() {
            return Ok(Pin::Digital(n));
        }

        let index = name
            .strip_prefix("PIN_A")
            .or_else(|| name.strip_prefix('A'))
            .ok_or_else(invalid)?;
        match index.parse::<u8>() {
            Ok(n) if n <= MAX_ANALOG_PIN => Ok(Pin::Analog(n)),
            _ => Err(invalid()),
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum PinRepr {
    Number(u8),
    Name(String),
}

impl TryFrom<PinRepr> for Pin {
    type Error = SettingsError;

    fn try_from(repr: PinRepr) -> Result<Self, Self::Error> {
        match repr {
            PinRepr::Number(n) => Ok(Pin::Digital(n)),
            PinRepr::Name(name) => name.parse(),
        }
    }
}

impl From<Pin> for PinRepr {
    fn from(pin: Pin) -> Self {
        match pin {
            Pin::Digital(n) => PinRepr::Number(n),
            Pin::Analog(_) => PinRepr::Name(pin.to_string()),
        }
    }
}

/// A lane sensor input: the pin and its bit in the interrupt port byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LaneBinding {
    pub pin: Pin,
    pub mask: u8,
}

impl LaneBinding {
    pub const fn new(pin: Pin, mask: u8) -> Self {
        Self { pin, mask }
    }
}

/// Which sounds play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AudioMode {
    /// Game sounds and racer songs
    AllOn,
    /// Game sounds only
    GameOnly,
    #[default]
    Mute,
}

impl fmt::Display for AudioMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AudioMode::AllOn => f.write_str("AllOn"),
            AudioMode::GameOnly => f.write_str("GameOnly"),
            AudioMode::Mute => f.write_str("Mute"),
        }
    }
}

/// Pin-change interrupt vector of the lane sensor port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InterruptVector {
    /// ATmega328 (Nano, Uno)
    #[serde(rename = "PCINT1_vect")]
    Pcint1,
    /// ATmega2560 (Mega)
    #[serde(rename = "PCINT2_vect")]
    Pcint2,
}

/// Input register read by the lane interrupt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InterruptPort {
    /// ATmega328 (Nano, Uno)
    #[serde(rename = "PINC")]
    PinC,
    /// ATmega2560 (Mega)
    #[serde(rename = "PINK")]
    PinK,
}

/// A short feedback tone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameSound {
    pub freq_hz: u16,
    pub duration_ms: u32,
}
