//! RTTTL (RingTone Text Transfer Language) tokenizer.
//!
//! A tune is `name:defaults:notes`. The defaults section sets the default
//! duration divisor (`d`), octave (`o`) and tempo (`b`); each note token is
//! `[duration]pitch[#][.][octave][.]` where `p` is a rest.
//!
//! # Example
//!
//! ```rust
//! use racetimer_audio::rtttl::Tune;
//!
//! let tune: Tune = "disabled:d=4,o=5,b=125:2c,4c,3c".parse().unwrap();
//! assert_eq!(tune.defaults.bpm, 125);
//! assert_eq!(tune.notes.len(), 3);
//! assert_eq!(tune.to_string(), "disabled:d=4,o=5,b=125:2c,c,3c");
//! ```

use std::fmt;
use std::str::FromStr;

use nom::{
    character::complete::{anychar, char, digit1, one_of},
    combinator::{map_opt, map_res, opt},
    IResult,
};
use serde::Serialize;
use thiserror::Error;

use super::melody::{dotted_duration, whole_note_ms, Tone};
use super::pitches::{self, MAX_OCTAVE, REST};

/// Errors that can occur while parsing an RTTTL string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RtttlError {
    #[error("rtttl: expected name:defaults:notes")]
    MissingSection,

    #[error("rtttl: invalid default {entry:?}")]
    InvalidDefault { entry: String },

    #[error("rtttl: malformed token #{index} {token:?}")]
    MalformedToken { index: usize, token: String },
}

/// Result type for RTTTL parsing.
pub type RtttlResult<T> = Result<T, RtttlError>;

/// Header defaults applied to notes that omit a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Defaults {
    /// Default duration divisor (`d`)
    pub duration: u16,
    /// Default octave (`o`)
    pub octave: u8,
    /// Beats per minute (`b`)
    pub bpm: u16,
}

impl Default for Defaults {
    /// Values used by the RTTTL format when a header key is absent.
    fn default() -> Self {
        Self {
            duration: 4,
            octave: 6,
            bpm: 63,
        }
    }
}

impl Defaults {
    /// Length of a whole note in milliseconds.
    pub fn whole_note_ms(&self) -> u32 {
        whole_note_ms(self.bpm)
    }
}

impl fmt::Display for Defaults {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "d={},o={},b={}", self.duration, self.octave, self.bpm)
    }
}

/// Pitch letter of a note token, or a pause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Key {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
    /// `p`: silence for the note's duration
    Pause,
}

impl Key {
    fn from_char(c: char) -> Option<Key> {
        use Key::*;
        let key = match c.to_ascii_lowercase() {
            'c' => C,
            'd' => D,
            'e' => E,
            'f' => F,
            'g' => G,
            'a' => A,
            'b' => B,
            'p' => Pause,
            _ => return None,
        };
        Some(key)
    }

    /// Semitone offset from C, `None` for a pause.
    pub fn semitone(self) -> Option<u8> {
        use Key::*;
        match self {
            C => Some(0),
            D => Some(2),
            E => Some(4),
            F => Some(5),
            G => Some(7),
            A => Some(9),
            B => Some(11),
            Pause => None,
        }
    }

    fn symbol(self) -> char {
        use Key::*;
        match self {
            C => 'c',
            D => 'd',
            E => 'e',
            F => 'f',
            G => 'g',
            A => 'a',
            B => 'b',
            Pause => 'p',
        }
    }
}

/// One note token as written; omitted values fall back to [`Defaults`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RtttlNote {
    pub key: Key,
    pub sharp: bool,
    pub duration: Option<u16>,
    pub octave: Option<u8>,
    pub dotted: bool,
}

impl RtttlNote {
    /// Returns true for a `p` token.
    pub fn is_pause(&self) -> bool {
        self.key == Key::Pause
    }

    /// Effective duration divisor.
    pub fn divisor(&self, defaults: &Defaults) -> u16 {
        self.duration.unwrap_or(defaults.duration)
    }

    /// Effective octave.
    pub fn octave(&self, defaults: &Defaults) -> u8 {
        self.octave.unwrap_or(defaults.octave)
    }

    /// Frequency in Hz, REST for a pause, `None` if outside the table.
    pub fn frequency(&self, defaults: &Defaults) -> Option<u16> {
        match self.key.semitone() {
            None => Some(REST),
            Some(semitone) => {
                pitches::frequency(semitone + self.sharp as u8, self.octave(defaults))
            }
        }
    }

    /// Duration in milliseconds.
    pub fn duration_ms(&self, defaults: &Defaults) -> u32 {
        dotted_duration(defaults.whole_note_ms(), self.divisor(defaults), self.dotted)
    }

    /// Drops duration and octave values that equal the defaults.
    fn without_redundant(mut self, defaults: &Defaults) -> Self {
        if self.duration == Some(defaults.duration) {
            self.duration = None;
        }
        if self.octave == Some(defaults.octave) {
            self.octave = None;
        }
        self
    }
}

impl fmt::Display for RtttlNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(duration) = self.duration {
            write!(f, "{}", duration)?;
        }
        write!(f, "{}", self.key.symbol())?;
        if self.sharp {
            f.write_str("#")?;
        }
        if let Some(octave) = self.octave {
            write!(f, "{}", octave)?;
        }
        if self.dotted {
            f.write_str(".")?;
        }
        Ok(())
    }
}

/// A parsed tune.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tune {
    pub name: String,
    pub defaults: Defaults,
    pub notes: Vec<RtttlNote>,
}

impl Tune {
    /// Resolves every token to a tone. A pause becomes a rest of the
    /// computed duration.
    ///
    /// Fails with `MalformedToken` if a note resolves outside the pitch
    /// table, which only a hand-built tune can do.
    pub fn tones(&self) -> RtttlResult<Vec<Tone>> {
        self.notes
            .iter()
            .enumerate()
            .map(|(index, note)| {
                let freq = note
                    .frequency(&self.defaults)
                    .ok_or_else(|| RtttlError::MalformedToken {
                        index,
                        token: note.to_string(),
                    })?;
                Ok(Tone::new(freq, note.duration_ms(&self.defaults)))
            })
            .collect()
    }

    /// Returns a copy with explicit values equal to the defaults removed.
    pub fn normalized(&self) -> Tune {
        Tune {
            name: self.name.clone(),
            defaults: self.defaults,
            notes: self
                .notes
                .iter()
                .map(|note| note.without_redundant(&self.defaults))
                .collect(),
        }
    }
}

impl fmt::Display for Tune {
    /// Writes the tune with redundant explicit values omitted.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:", self.name, self.defaults)?;
        for (i, note) in self.notes.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", note.without_redundant(&self.defaults))?;
        }
        Ok(())
    }
}

impl FromStr for Tune {
    type Err = RtttlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

/// Parses an RTTTL string.
pub fn parse(input: &str) -> RtttlResult<Tune> {
    let mut sections = input.splitn(3, ':');
    let (Some(name), Some(header), Some(body)) = (sections.next(), sections.next(), sections.next())
    else {
        return Err(RtttlError::MissingSection);
    };

    let defaults = parse_defaults(header)?;

    let body = body.trim();
    let mut notes = Vec::new();
    if !body.is_empty() {
        for (index, token) in body.split(',').enumerate() {
            notes.push(parse_token(index, token.trim(), &defaults)?);
        }
    }

    tracing::debug!(name = name.trim(), notes = notes.len(), "parsed rtttl tune");

    Ok(Tune {
        name: name.trim().to_string(),
        defaults,
        notes,
    })
}

fn parse_defaults(header: &str) -> RtttlResult<Defaults> {
    let mut defaults = Defaults::default();
    if header.trim().is_empty() {
        return Ok(defaults);
    }

    for entry in header.split(',') {
        let invalid = || RtttlError::InvalidDefault {
            entry: entry.trim().to_string(),
        };
        let (key, value) = entry.split_once('=').ok_or_else(invalid)?;
        let value = value.trim();
        match key.trim().to_ascii_lowercase().as_str() {
            "d" => {
                defaults.duration = value.parse().map_err(|_| invalid())?;
                if defaults.duration == 0 {
                    return Err(invalid());
                }
            }
            "o" => {
                defaults.octave = value.parse().map_err(|_| invalid())?;
                if defaults.octave > MAX_OCTAVE {
                    return Err(invalid());
                }
            }
            "b" => {
                defaults.bpm = value.parse().map_err(|_| invalid())?;
                if defaults.bpm == 0 {
                    return Err(invalid());
                }
            }
            _ => return Err(invalid()),
        }
    }

    Ok(defaults)
}

fn parse_token(index: usize, token: &str, defaults: &Defaults) -> RtttlResult<RtttlNote> {
    let malformed = || RtttlError::MalformedToken {
        index,
        token: token.to_string(),
    };

    let note = match note(token) {
        Ok(("", note)) => note,
        _ => return Err(malformed()),
    };

    if note.duration == Some(0) {
        return Err(malformed());
    }
    if note.is_pause() && note.sharp {
        return Err(malformed());
    }
    if note.frequency(defaults).is_none() {
        return Err(malformed());
    }

    Ok(note)
}

fn note(input: &str) -> IResult<&str, RtttlNote> {
    let (input, duration) = opt(number::<u16>)(input)?;
    let (input, key) = map_opt(anychar, Key::from_char)(input)?;
    let (input, sharp) = opt(one_of("#_"))(input)?;
    let (input, dot_before) = opt(char('.'))(input)?;
    let (input, octave) = opt(number::<u8>)(input)?;
    let (input, dot_after) = opt(char('.'))(input)?;

    Ok((
        input,
        RtttlNote {
            key,
            sharp: sharp.is_some(),
            duration,
            octave,
            dotted: dot_before.is_some() || dot_after.is_some(),
        },
    ))
}

fn number<T: FromStr>(input: &str) -> IResult<&str, T> {
    map_res(digit1, str::parse)(input)
}
