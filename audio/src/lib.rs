//! Race-timer audio data and tone utilities.
//!
//! This crate provides:
//!
//! - `pitches`: note frequencies (Hz) and the octave lookup table
//! - `melody`: pitch/duration tables, duration codes and tempo handling
//! - `rtttl`: RTTTL ringtone tokenizer and serializer
//! - `catalog`: the shipped RTTTL tunes and pitch/duration melodies
//! - `player`: the tone-output seam and sequencing
//! - `pcm`: PCM preview rendering of tone sequences
//!
//! # Example
//!
//! ```rust
//! use racetimer_audio::catalog::RtttlSong;
//! use racetimer_audio::pcm::{render_tones, RenderOptions};
//!
//! let song = RtttlSong::by_id("disabled_tone").unwrap();
//! let tones = song.parse().unwrap().tones().unwrap();
//! assert_eq!(tones.len(), 3);
//!
//! // 16kHz mono square wave, like a piezo buzzer
//! let samples = render_tones(&tones, RenderOptions::default()).unwrap();
//! assert!(!samples.is_empty());
//! ```

pub mod catalog;
pub mod melody;
pub mod pcm;
pub mod pitches;
pub mod player;
pub mod rtttl;

pub use catalog::{MELODIES, RTTTL_SONGS, RtttlSong};
pub use melody::{DurationCode, Melody, Note, Timing, Tone};
pub use player::{PlayTone, TonePlayer};
pub use rtttl::Tune;
