//! Tone sequencing.
//!
//! A [`TonePlayer`] walks a resolved tone sequence and hands each tone to a
//! [`PlayTone`] output, in order. Rests are forwarded with a zero frequency
//! so the output keeps time through them.

use thiserror::Error;

use super::melody::Tone;

/// Errors raised while loading a tone sequence.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AudioError {
    #[error("audio: output cannot play {0} Hz")]
    UnplayablePitch(u16),
}

/// A tone output: a buzzer driver, a PCM renderer, a test recorder.
pub trait PlayTone {
    /// Emits `freq` Hz (silence when 0) for `duration_ms` milliseconds.
    fn play_tone(&mut self, freq: u16, duration_ms: u32);

    /// Returns whether the output can reproduce `freq`.
    fn can_play_tone(&self, _freq: u16) -> bool {
        true
    }
}

/// Forwards every tone to `output` in order, rests included.
pub fn play<D: PlayTone + ?Sized>(tones: &[Tone], output: &mut D) {
    for tone in tones {
        output.play_tone(tone.freq, tone.duration_ms);
    }
}

/// Plays tone sequences on an output.
pub struct TonePlayer<'a, D: PlayTone> {
    output: D,
    song: Option<&'a [Tone]>,
}

impl<'a, D: PlayTone> TonePlayer<'a, D> {
    pub fn new(output: D) -> Self {
        TonePlayer { output, song: None }
    }

    /// Loads a sequence after checking every pitch is playable.
    pub fn load_song(&mut self, song: &'a [Tone]) -> Result<(), AudioError> {
        if let Some(tone) = song
            .iter()
            .find(|tone| !tone.is_rest() && !self.output.can_play_tone(tone.freq))
        {
            tracing::warn!(freq = tone.freq, "rejecting unplayable tone");
            return Err(AudioError::UnplayablePitch(tone.freq));
        }

        self.song = Some(song);
        Ok(())
    }

    /// Plays the loaded sequence, then silences the output.
    pub fn play_song(&mut self) {
        if let Some(song) = self.song {
            tracing::debug!(tones = song.len(), "playing song");
            play(song, &mut self.output);
            self.output.play_tone(0, 0);
        }
    }

    pub fn output(&self) -> &D {
        &self.output
    }

    pub fn into_output(self) -> D {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        calls: Vec<(u16, u32)>,
        max_freq: Option<u16>,
    }

    impl PlayTone for Recorder {
        fn play_tone(&mut self, freq: u16, duration_ms: u32) {
            self.calls.push((freq, duration_ms));
        }

        fn can_play_tone(&self, freq: u16) -> bool {
            self.max_freq.is_none_or(|max| freq <= max)
        }
    }

    #[test]
    fn test_play_forwards_rests() {
        let song = [Tone::new(440, 100), Tone::rest(50), Tone::new(880, 200)];
        let mut player = TonePlayer::new(Recorder::default());
        player.load_song(&song).unwrap();
        player.play_song();

        let calls = &player.output().calls;
        assert_eq!(calls, &vec![(440, 100), (0, 50), (880, 200), (0, 0)]);
    }

    #[test]
    fn test_play_without_player() {
        let mut recorder = Recorder::default();
        play(&[Tone::rest(10), Tone::new(262, 20)], &mut recorder);
        assert_eq!(recorder.calls, vec![(0, 10), (262, 20)]);
    }

    #[test]
    fn test_load_rejects_unplayable() {
        let song = [Tone::new(440, 100), Tone::new(9000, 100)];
        let recorder = Recorder {
            max_freq: Some(7000),
            ..Default::default()
        };
        let mut player = TonePlayer::new(recorder);
        assert_eq!(player.load_song(&song), Err(AudioError::UnplayablePitch(9000)));

        // nothing loaded, nothing played
        player.play_song();
        assert!(player.into_output().calls.is_empty());
    }

    #[test]
    fn test_rests_skip_pitch_check() {
        let song = [Tone::rest(100)];
        let recorder = Recorder {
            max_freq: Some(0),
            ..Default::default()
        };
        let mut player = TonePlayer::new(recorder);
        assert!(player.load_song(&song).is_ok());
    }
}
