//! PCM rendering of tone sequences.
//!
//! Produces mono 16-bit little-endian PCM, the same shape a piezo buzzer
//! preview needs: one square (or sine) wave per tone, silence for rests.

use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use super::melody::Tone;
use super::pitches::REST;
use super::player::{AudioError, PlayTone, TonePlayer};

/// Mono 16-bit PCM format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Format {
    /// Sample rate in Hz (e.g., 16000, 44100).
    pub sample_rate: u32,
}

impl Format {
    /// Creates a mono format with the given sample rate.
    pub const fn mono(sample_rate: u32) -> Self {
        Self { sample_rate }
    }

    /// Returns the number of bytes needed for a duration.
    pub fn bytes_in_duration(&self, duration_ms: u32) -> usize {
        duration_samples(duration_ms, self.sample_rate) * 2
    }

    /// Highest frequency the format can represent.
    pub fn nyquist(&self) -> u32 {
        self.sample_rate / 2
    }
}

// Common format presets
impl Format {
    /// 8kHz mono
    pub const MONO_8K: Format = Format::mono(8000);
    /// 16kHz mono
    pub const MONO_16K: Format = Format::mono(16000);
    /// 44.1kHz mono
    pub const MONO_44K: Format = Format::mono(44100);
}

/// Default audio format for rendering.
pub const DEFAULT_FORMAT: Format = Format::MONO_16K;

/// Wave shape used for tones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Waveform {
    /// 50% duty square wave, as a PWM-driven buzzer produces.
    #[default]
    Square,
    /// Pure sine.
    Sine,
}

impl fmt::Display for Waveform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Waveform::Square => f.write_str("square"),
            Waveform::Sine => f.write_str("sine"),
        }
    }
}

impl FromStr for Waveform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "square" => Ok(Waveform::Square),
            "sine" => Ok(Waveform::Sine),
            other => Err(format!("unknown waveform '{}'", other)),
        }
    }
}

/// Rendering options.
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    /// Audio format (default: 16kHz mono)
    pub format: Format,
    /// Volume 0.0-1.0 (default: 0.5)
    pub volume: f64,
    /// Wave shape (default: square)
    pub waveform: Waveform,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            format: DEFAULT_FORMAT,
            volume: 0.5,
            waveform: Waveform::Square,
        }
    }
}

impl RenderOptions {
    /// Creates options with the specified format.
    pub fn with_format(mut self, format: Format) -> Self {
        self.format = format;
        self
    }

    /// Creates options with the specified volume.
    pub fn with_volume(mut self, volume: f64) -> Self {
        self.volume = volume.clamp(0.0, 1.0);
        self
    }

    /// Creates options with the specified waveform.
    pub fn with_waveform(mut self, waveform: Waveform) -> Self {
        self.waveform = waveform;
        self
    }
}

// Attack/release ramp length; keeps tone edges from clicking.
const RAMP_MS: f64 = 1.0;

/// Generates one tone as i16 samples.
pub fn generate_tone(
    freq: u16,
    samples: usize,
    sample_rate: u32,
    volume: f64,
    waveform: Waveform,
) -> Vec<i16> {
    let mut data = vec![0i16; samples];
    if freq == REST {
        return data;
    }

    let ramp = ((sample_rate as f64 * RAMP_MS / 1000.0) as usize).max(1);
    let amplitude = volume.clamp(0.0, 1.0) * i16::MAX as f64 * 0.85;

    for (i, sample) in data.iter_mut().enumerate() {
        let t = i as f64 / sample_rate as f64;
        let phase = 2.0 * PI * freq as f64 * t;
        let value = match waveform {
            Waveform::Sine => phase.sin(),
            Waveform::Square => {
                if phase.sin() >= 0.0 {
                    1.0
                } else {
                    -1.0
                }
            }
        };

        let edge = i.min(samples - 1 - i);
        let envelope = (edge as f64 / ramp as f64).min(1.0);

        *sample = (value * amplitude * envelope) as i16;
    }

    data
}

/// Converts i16 samples to raw PCM bytes (little-endian).
pub fn int16_to_bytes(samples: &[i16]) -> Vec<u8> {
    let mut data = Vec::with_capacity(samples.len() * 2);
    for sample in samples {
        data.extend_from_slice(&sample.to_le_bytes());
    }
    data
}

/// Calculates the number of samples for a given duration in ms.
pub fn duration_samples(duration_ms: u32, sample_rate: u32) -> usize {
    (sample_rate as u64 * duration_ms as u64 / 1000) as usize
}

/// A [`PlayTone`] output that appends samples to a buffer.
#[derive(Debug, Clone)]
pub struct PcmRenderer {
    opts: RenderOptions,
    samples: Vec<i16>,
}

impl PcmRenderer {
    pub fn new(opts: RenderOptions) -> Self {
        Self {
            opts,
            samples: Vec::new(),
        }
    }

    /// Returns the samples rendered so far.
    pub fn samples(&self) -> &[i16] {
        &self.samples
    }

    pub fn into_samples(self) -> Vec<i16> {
        self.samples
    }

    pub fn into_bytes(self) -> Vec<u8> {
        int16_to_bytes(&self.samples)
    }
}

impl PlayTone for PcmRenderer {
    fn play_tone(&mut self, freq: u16, duration_ms: u32) {
        let sample_rate = self.opts.format.sample_rate;
        let samples = duration_samples(duration_ms, sample_rate);
        self.samples.extend(generate_tone(
            freq,
            samples,
            sample_rate,
            self.opts.volume,
            self.opts.waveform,
        ));
    }

    fn can_play_tone(&self, freq: u16) -> bool {
        (freq as u32) < self.opts.format.nyquist()
    }
}

/// Renders a tone sequence to i16 samples.
pub fn render_tones(tones: &[Tone], opts: RenderOptions) -> Result<Vec<i16>, AudioError> {
    let mut player = TonePlayer::new(PcmRenderer::new(opts));
    player.load_song(tones)?;
    player.play_song();

    let samples = player.into_output().into_samples();
    tracing::debug!(
        tones = tones.len(),
        samples = samples.len(),
        sample_rate = opts.format.sample_rate,
        "rendered tones"
    );
    Ok(samples)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bytes_in_duration() {
        let format = Format::MONO_16K;
        assert_eq!(format.bytes_in_duration(1000), 32000);
        assert_eq!(format.bytes_in_duration(100), 3200);
        assert_eq!(format.nyquist(), 8000);
    }

    #[test]
    fn test_waveform_from_str() {
        assert_eq!("square".parse::<Waveform>(), Ok(Waveform::Square));
        assert_eq!("Sine".parse::<Waveform>(), Ok(Waveform::Sine));
        assert!("saw".parse::<Waveform>().is_err());
        assert_eq!(Waveform::Sine.to_string(), "sine");
    }

    #[test]
    fn test_generate_tone() {
        let samples = 1600; // 100ms at 16kHz
        let data = generate_tone(440, samples, 16000, 0.5, Waveform::Square);
        assert_eq!(data.len(), samples);

        let non_zero = data.iter().filter(|&&s| s != 0).count();
        assert!(non_zero > samples / 2, "Should have significant audio content");
    }

    #[test]
    fn test_generate_rest_is_silent() {
        let data = generate_tone(REST, 800, 16000, 1.0, Waveform::Sine);
        assert_eq!(data.len(), 800);
        assert!(data.iter().all(|&s| s == 0));
    }

    #[test]
    fn test_volume_bounds_amplitude() {
        let data = generate_tone(440, 1600, 16000, 0.5, Waveform::Square);
        let peak = data.iter().map(|s| s.unsigned_abs()).max().unwrap();
        assert!(peak <= (i16::MAX as f64 * 0.5) as u16);
        assert!(peak > 0);
    }

    #[test]
    fn test_int16_to_bytes() {
        assert_eq!(int16_to_bytes(&[1, -1]), vec![0x01, 0x00, 0xff, 0xff]);
    }

    #[test]
    fn test_render_tones_keeps_rests() {
        let tones = [Tone::new(440, 100), Tone::rest(100), Tone::new(880, 100)];
        let samples = render_tones(&tones, RenderOptions::default()).unwrap();
        assert_eq!(samples.len(), duration_samples(300, 16000));

        let rest = &samples[1600..3200];
        assert!(rest.iter().all(|&s| s == 0));
    }

    #[test]
    fn test_render_rejects_pitch_above_nyquist() {
        let opts = RenderOptions::default().with_format(Format::MONO_8K);
        let tones = [Tone::new(4500, 100)];
        assert_eq!(
            render_tones(&tones, opts),
            Err(AudioError::UnplayablePitch(4500))
        );
    }

    #[test]
    fn test_renderer_into_bytes() {
        let mut renderer = PcmRenderer::new(RenderOptions::default());
        renderer.play_tone(440, 10);
        assert_eq!(renderer.samples().len(), 160);
        assert_eq!(renderer.into_bytes().len(), 320);
    }
}
