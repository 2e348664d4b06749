//! Tune catalog commands.

use clap::{Args, Subcommand};
use serde::Serialize;

use racetimer_audio::catalog::{MELODIES, RTTTL_SONGS};
use racetimer_audio::melody::{total_duration, Melody, Timing, Tone};
use racetimer_audio::pcm::{render_tones, Format, RenderOptions, Waveform};
use racetimer_audio::rtttl::{Defaults, Tune};
use racetimer_audio::RtttlSong;

use super::{
    format_bytes, get_settings, output_bytes, output_result, print_error, print_success,
    print_verbose,
};
use crate::Cli;

/// RTTTL tunes and pitch/duration melodies.
#[derive(Args)]
pub struct SongsCommand {
    #[command(subcommand)]
    command: SongsSubcommand,
}

#[derive(Subcommand)]
enum SongsSubcommand {
    /// List every tune and melody
    List,
    /// Show one tune or melody with its resolved tones
    Show {
        /// Tune or melody id
        id: String,
    },
    /// Render a tune or melody to raw 16-bit mono PCM
    Render {
        /// Tune or melody id
        id: String,
        /// Sample rate in Hz
        #[arg(long, default_value_t = 16000)]
        sample_rate: u32,
        /// Wave shape: square or sine
        #[arg(long, default_value = "square")]
        waveform: Waveform,
        /// Volume 0.0-1.0
        #[arg(long, default_value_t = 0.5)]
        volume: f64,
    },
    /// Parse every tune, resolve every melody and check racer songs
    Check,
}

#[derive(Serialize)]
struct SongSummary {
    id: &'static str,
    name: &'static str,
    kind: &'static str,
    notes: usize,
    duration_ms: u64,
}

#[derive(Serialize)]
struct RtttlDetail {
    id: &'static str,
    text: &'static str,
    name: String,
    defaults: Defaults,
    normalized: String,
    notes: usize,
    duration_ms: u64,
    tones: Vec<Tone>,
}

#[derive(Serialize)]
struct MelodyDetail {
    id: &'static str,
    name: &'static str,
    timing: Timing,
    notes: usize,
    duration_ms: u64,
    tones: Vec<Tone>,
}

/// A catalog entry of either encoding.
enum Song {
    Rtttl(&'static RtttlSong),
    Melody(&'static Melody),
}

impl Song {
    fn find(id: &str) -> anyhow::Result<Song> {
        if let Some(song) = RtttlSong::by_id(id) {
            return Ok(Song::Rtttl(song));
        }
        if let Some(melody) = Melody::by_id(id) {
            return Ok(Song::Melody(melody));
        }
        anyhow::bail!("song '{}' not found, see 'racetimer songs list'", id);
    }

    fn tones(&self) -> anyhow::Result<Vec<Tone>> {
        match self {
            Song::Rtttl(song) => Ok(song.parse()?.tones()?),
            Song::Melody(melody) => Ok(melody.tones()),
        }
    }
}

impl SongsCommand {
    pub fn run(&self, cli: &Cli) -> anyhow::Result<()> {
        match &self.command {
            SongsSubcommand::List => self.list(cli),
            SongsSubcommand::Show { id } => self.show(cli, id),
            SongsSubcommand::Render {
                id,
                sample_rate,
                waveform,
                volume,
            } => self.render(cli, id, *sample_rate, *waveform, *volume),
            SongsSubcommand::Check => self.check(cli),
        }
    }

    fn list(&self, cli: &Cli) -> anyhow::Result<()> {
        let mut songs = Vec::with_capacity(RTTTL_SONGS.len() + MELODIES.len());

        for song in RTTTL_SONGS.iter() {
            let tune = song.parse()?;
            songs.push(SongSummary {
                id: song.id,
                name: song.name(),
                kind: "rtttl",
                notes: tune.notes.len(),
                duration_ms: total_duration(&tune.tones()?),
            });
        }

        for melody in MELODIES.iter() {
            songs.push(SongSummary {
                id: melody.id,
                name: melody.name,
                kind: "melody",
                notes: melody.count(),
                duration_ms: melody.duration_ms(),
            });
        }

        output_result(&songs, cli.output.as_deref(), cli.json)
    }

    fn show(&self, cli: &Cli, id: &str) -> anyhow::Result<()> {
        match Song::find(id)? {
            Song::Rtttl(song) => {
                let tune: Tune = song.parse()?;
                let tones = tune.tones()?;
                let detail = RtttlDetail {
                    id: song.id,
                    text: song.text,
                    name: tune.name.clone(),
                    defaults: tune.defaults,
                    normalized: tune.to_string(),
                    notes: tune.notes.len(),
                    duration_ms: total_duration(&tones),
                    tones,
                };
                output_result(&detail, cli.output.as_deref(), cli.json)
            }
            Song::Melody(melody) => {
                let tones = melody.tones();
                let detail = MelodyDetail {
                    id: melody.id,
                    name: melody.name,
                    timing: melody.timing,
                    notes: melody.count(),
                    duration_ms: total_duration(&tones),
                    tones,
                };
                output_result(&detail, cli.output.as_deref(), cli.json)
            }
        }
    }

    fn render(
        &self,
        cli: &Cli,
        id: &str,
        sample_rate: u32,
        waveform: Waveform,
        volume: f64,
    ) -> anyhow::Result<()> {
        if sample_rate == 0 {
            anyhow::bail!("sample rate must be positive");
        }

        let tones = Song::find(id)?.tones()?;
        let opts = RenderOptions::default()
            .with_format(Format::mono(sample_rate))
            .with_volume(volume)
            .with_waveform(waveform);

        print_verbose(
            cli,
            &format!(
                "Rendering {} tones at {} Hz ({})",
                tones.len(),
                sample_rate,
                waveform
            ),
        );

        let samples = render_tones(&tones, opts)?;
        let data = racetimer_audio::pcm::int16_to_bytes(&samples);

        let default_output = format!("{}.pcm", id);
        let output_path = cli.output.as_deref().unwrap_or(&default_output);
        output_bytes(&data, output_path)?;

        print_success(&format!(
            "PCM saved to: {} ({}, {} ms)",
            output_path,
            format_bytes(data.len()),
            total_duration(&tones)
        ));
        Ok(())
    }

    fn check(&self, cli: &Cli) -> anyhow::Result<()> {
        let mut failures = 0;

        for song in RTTTL_SONGS.iter() {
            match check_tune(song) {
                Ok(()) => print_verbose(cli, &format!("{}: ok", song.id)),
                Err(err) => {
                    print_error(&format!("{}: {}", song.id, err));
                    failures += 1;
                }
            }
        }

        for melody in MELODIES.iter() {
            let tones = melody.tones();
            if tones.len() != melody.count() || tones.iter().any(|t| t.duration_ms == 0) {
                print_error(&format!("{}: unresolved notes", melody.id));
                failures += 1;
            } else {
                print_verbose(cli, &format!("{}: ok", melody.id));
            }
        }

        let settings = get_settings(cli)?;
        for id in &settings.racer_songs_list {
            if RtttlSong::by_id(id).is_none() && Melody::by_id(id).is_none() {
                print_error(&format!("racer song '{}' is not in the catalog", id));
                failures += 1;
            }
        }

        if failures > 0 {
            anyhow::bail!("{} check(s) failed", failures);
        }

        print_success(&format!(
            "{} tunes, {} melodies and {} racer songs ok",
            RTTTL_SONGS.len(),
            MELODIES.len(),
            settings.racer_songs_list.len()
        ));
        Ok(())
    }
}

/// Parses a tune and checks that its serialized form resolves identically.
fn check_tune(song: &RtttlSong) -> anyhow::Result<()> {
    let tune = song.parse()?;
    let reparsed: Tune = tune.to_string().parse()?;

    if reparsed.name != tune.name || reparsed.defaults != tune.defaults {
        anyhow::bail!("header changed after round trip");
    }
    if reparsed.tones()? != tune.tones()? {
        anyhow::bail!("tones changed after round trip");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_song() {
        assert!(matches!(Song::find("galaga"), Ok(Song::Rtttl(_))));
        assert!(matches!(Song::find("knight_rider"), Ok(Song::Melody(_))));
        assert!(Song::find("nope").is_err());
    }

    #[test]
    fn test_song_tones() {
        let tones = Song::find("disabled_tone").unwrap().tones().unwrap();
        assert_eq!(tones.len(), 3);
    }

    #[test]
    fn test_check_every_tune() {
        for song in RTTTL_SONGS.iter() {
            assert!(check_tune(song).is_ok(), "{}", song.id);
        }
    }
}
