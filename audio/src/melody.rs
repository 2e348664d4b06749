//! Core types for pitch/duration melodies.

use serde::Serialize;
use thiserror::Error;

use super::pitches::REST;

/// Errors raised when building melody data at run time.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MelodyError {
    #[error("melody: zero is not a valid length code")]
    ZeroLength,

    #[error("melody: bpm must be positive")]
    ZeroTempo,
}

/// A resolved tone: frequency and duration in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Tone {
    /// Frequency in Hz (REST for silence)
    pub freq: u16,
    /// Duration in milliseconds
    pub duration_ms: u32,
}

impl Tone {
    /// Creates a new tone.
    pub const fn new(freq: u16, duration_ms: u32) -> Self {
        Self { freq, duration_ms }
    }

    /// Creates a rest of the given duration.
    pub const fn rest(duration_ms: u32) -> Self {
        Self { freq: REST, duration_ms }
    }

    /// Returns true if this tone is a rest (silence).
    pub fn is_rest(&self) -> bool {
        self.freq == REST
    }
}

/// Returns the total duration of a tone sequence in milliseconds.
pub fn total_duration(tones: &[Tone]) -> u64 {
    tones.iter().map(|t| t.duration_ms as u64).sum()
}

/// Signed note-length code.
///
/// A positive `N` is a 1/N note, a negative `N` a dotted 1/|N| note.
/// Zero is never valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DurationCode(i16);

impl DurationCode {
    /// Creates a code, panicking on zero. In a const context this is a
    /// compile-time error.
    pub const fn new(code: i16) -> Self {
        assert!(code != 0, "zero is not a valid length code");
        Self(code)
    }

    /// Returns the raw signed code.
    pub const fn code(self) -> i16 {
        self.0
    }

    /// Returns the note-value divisor (4 = quarter, 8 = eighth, ...).
    pub const fn divisor(self) -> u16 {
        self.0.unsigned_abs()
    }

    /// Returns true for dotted (1.5x) notes.
    pub const fn is_dotted(self) -> bool {
        self.0 < 0
    }

    /// Converts to milliseconds given the length of a whole note.
    pub fn duration_ms(self, whole_note_ms: u32) -> u32 {
        dotted_duration(whole_note_ms, self.divisor(), self.is_dotted())
    }
}

impl TryFrom<i16> for DurationCode {
    type Error = MelodyError;

    fn try_from(code: i16) -> Result<Self, Self::Error> {
        if code == 0 {
            return Err(MelodyError::ZeroLength);
        }
        Ok(Self(code))
    }
}

/// Duration of a 1/divisor note, optionally dotted.
///
/// Dotted values are computed as `3 * whole / (2 * divisor)` so that the
/// half-value extension is not truncated twice. The result is at least
/// 1 ms, so a resolved note never vanishes.
pub(crate) fn dotted_duration(whole_note_ms: u32, divisor: u16, dotted: bool) -> u32 {
    let whole = whole_note_ms as u64;
    let divisor = divisor.max(1) as u64;
    let ms = if dotted {
        whole * 3 / (divisor * 2)
    } else {
        whole / divisor
    };
    ms.max(1) as u32
}

/// Length of a whole note in milliseconds at the given tempo.
pub fn whole_note_ms(bpm: u16) -> u32 {
    // four quarter-note beats per whole note
    240_000 / bpm.max(1) as u32
}

/// How a melody's length values map to milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Timing {
    /// Lengths are duration codes; a quarter note is one beat at this BPM.
    Bpm(u16),
    /// Lengths are duration codes relative to a whole note of this many ms.
    WholeNote(u32),
    /// Lengths are literal milliseconds.
    Millis,
}

impl Timing {
    /// Creates a BPM timing, rejecting a zero tempo.
    pub fn bpm(bpm: u16) -> Result<Self, MelodyError> {
        if bpm == 0 {
            return Err(MelodyError::ZeroTempo);
        }
        Ok(Timing::Bpm(bpm))
    }

    /// Converts a length value to milliseconds.
    pub fn duration_ms(&self, length: i16) -> u32 {
        match *self {
            Timing::Bpm(bpm) => DurationCode(length).duration_ms(whole_note_ms(bpm)),
            Timing::WholeNote(ms) => DurationCode(length).duration_ms(ms),
            Timing::Millis => length.unsigned_abs() as u32,
        }
    }
}

/// One entry of a pitch/duration table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Note {
    /// Frequency in Hz (use REST for silence)
    pub freq: u16,
    /// Length value, interpreted by the melody's [`Timing`]
    pub length: i16,
}

impl Note {
    /// Creates a new note, rejecting a zero length.
    pub fn new(freq: u16, length: i16) -> Result<Self, MelodyError> {
        if length == 0 {
            return Err(MelodyError::ZeroLength);
        }
        Ok(Self { freq, length })
    }

    /// Returns true if this note is a rest (silence).
    pub fn is_rest(&self) -> bool {
        self.freq == REST
    }
}

/// Shorthand constructor for table entries.
///
/// A zero length fails const evaluation, so a bad transcription in a
/// `static` table does not build.
pub const fn n(freq: u16, length: i16) -> Note {
    assert!(length != 0, "zero is not a valid length");
    Note { freq, length }
}

/// A named melody: ordered notes plus a melody-level timing.
#[derive(Debug, Clone, Copy)]
pub struct Melody {
    /// Unique identifier
    pub id: &'static str,
    /// Display name
    pub name: &'static str,
    /// Length interpretation
    pub timing: Timing,
    /// Notes in playback order
    pub notes: &'static [Note],
}

impl Melody {
    /// Creates a new melody.
    pub const fn new(
        id: &'static str,
        name: &'static str,
        timing: Timing,
        notes: &'static [Note],
    ) -> Self {
        Self { id, name, timing, notes }
    }

    /// Number of notes, rests included.
    pub fn count(&self) -> usize {
        self.notes.len()
    }

    /// Returns the frequencies in order.
    pub fn frequencies(&self) -> impl Iterator<Item = u16> + '_ {
        self.notes.iter().map(|note| note.freq)
    }

    /// Returns the raw length values in order.
    pub fn lengths(&self) -> impl Iterator<Item = i16> + '_ {
        self.notes.iter().map(|note| note.length)
    }

    /// Resolves every note to a tone. Rests stay in sequence.
    pub fn tones(&self) -> Vec<Tone> {
        self.notes
            .iter()
            .map(|note| Tone::new(note.freq, self.timing.duration_ms(note.length)))
            .collect()
    }

    /// Returns the total duration in milliseconds.
    pub fn duration_ms(&self) -> u64 {
        total_duration(&self.tones())
    }

    /// Returns a melody by its ID.
    pub fn by_id(id: &str) -> Option<&'static Melody> {
        super::catalog::MELODIES.iter().find(|m| m.id == id).copied()
    }

    /// Returns all melody IDs.
    pub fn ids() -> Vec<&'static str> {
        super::catalog::MELODIES.iter().map(|m| m.id).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pitches::{A4, C4};

    #[test]
    fn test_tone_is_rest() {
        assert!(Tone::rest(100).is_rest());
        assert!(!Tone::new(440, 100).is_rest());
    }

    #[test]
    fn test_total_duration() {
        let tones = [Tone::new(440, 100), Tone::rest(50), Tone::new(880, 200)];
        assert_eq!(total_duration(&tones), 350);
    }

    #[test]
    fn test_duration_code_positive() {
        let quarter = DurationCode::new(4);
        assert_eq!(quarter.divisor(), 4);
        assert!(!quarter.is_dotted());
        assert_eq!(quarter.duration_ms(2000), 500);
        assert_eq!(DurationCode::new(1).duration_ms(2000), 2000);
        assert_eq!(DurationCode::new(8).duration_ms(2000), 250);
    }

    #[test]
    fn test_duration_code_dotted() {
        let dotted_quarter = DurationCode::new(-4);
        assert_eq!(dotted_quarter.divisor(), 4);
        assert!(dotted_quarter.is_dotted());
        assert_eq!(dotted_quarter.duration_ms(2000), 750);
        // 1.5 * 1000 / 3 rounds to 500, not 333 + 166
        assert_eq!(DurationCode::new(-3).duration_ms(1000), 500);
    }

    #[test]
    fn test_duration_code_rejects_zero() {
        assert_eq!(DurationCode::try_from(0), Err(MelodyError::ZeroLength));
        assert_eq!(DurationCode::try_from(-2).map(|c| c.code()), Ok(-2));
    }

    #[test]
    #[should_panic]
    fn test_duration_code_new_panics_on_zero() {
        let _ = DurationCode::new(0);
    }

    #[test]
    fn test_duration_never_truncates_to_zero() {
        // 240000 / 65535 = 3ms whole note
        assert_eq!(whole_note_ms(u16::MAX), 3);
        assert_eq!(dotted_duration(whole_note_ms(u16::MAX), u16::MAX, false), 1);
        assert_eq!(dotted_duration(whole_note_ms(u16::MAX), u16::MAX, true), 1);
        assert_eq!(Timing::Bpm(u16::MAX).duration_ms(i16::MIN + 1), 1);
    }

    #[test]
    fn test_whole_note_ms() {
        assert_eq!(whole_note_ms(120), 2000);
        assert_eq!(whole_note_ms(60), 4000);
        assert_eq!(whole_note_ms(125), 1920);
    }

    #[test]
    fn test_timing_bpm_rejects_zero() {
        assert_eq!(Timing::bpm(0), Err(MelodyError::ZeroTempo));
        assert_eq!(Timing::bpm(100), Ok(Timing::Bpm(100)));
    }

    #[test]
    fn test_timing_duration() {
        assert_eq!(Timing::Bpm(120).duration_ms(4), 500);
        assert_eq!(Timing::Bpm(120).duration_ms(-8), 375);
        assert_eq!(Timing::WholeNote(1000).duration_ms(12), 83);
        assert_eq!(Timing::Millis.duration_ms(1500), 1500);
    }

    #[test]
    fn test_note_new() {
        assert_eq!(Note::new(440, 0), Err(MelodyError::ZeroLength));
        let note = Note::new(REST, 4).unwrap();
        assert!(note.is_rest());
    }

    #[test]
    fn test_rest_is_kept_in_sequence() {
        static NOTES: [Note; 3] = [n(C4, 4), n(REST, 4), n(A4, 4)];
        let melody = Melody::new("t", "t", Timing::Bpm(120), &NOTES);
        let tones = melody.tones();
        assert_eq!(tones.len(), 3);
        assert!(tones[1].is_rest());
        assert_eq!(tones[1].duration_ms, 500);
    }

    #[test]
    fn test_count_is_container_length() {
        static NOTES: [Note; 2] = [n(C4, 8), n(A4, -4)];
        let melody = Melody::new("t", "t", Timing::WholeNote(1000), &NOTES);
        assert_eq!(melody.count(), 2);
        assert_eq!(melody.frequencies().count(), melody.lengths().count());
        assert_eq!(melody.duration_ms(), 125 + 375);
    }
}
