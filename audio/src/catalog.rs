//! Tune catalog: RTTTL strings and pitch/duration melodies.

use super::melody::*;
use super::pitches::*;
use super::rtttl::{self, RtttlResult, Tune};

/// A named RTTTL string.
#[derive(Debug, Clone, Copy)]
pub struct RtttlSong {
    /// Unique identifier
    pub id: &'static str,
    /// RTTTL text, `name:defaults:notes`
    pub text: &'static str,
}

impl RtttlSong {
    /// Creates a new catalog entry.
    pub const fn new(id: &'static str, text: &'static str) -> Self {
        Self { id, text }
    }

    /// Returns the name embedded in the RTTTL header.
    pub fn name(&self) -> &'static str {
        self.text.split(':').next().unwrap_or_default()
    }

    /// Parses the RTTTL text.
    pub fn parse(&self) -> RtttlResult<Tune> {
        rtttl::parse(self.text)
    }

    /// Returns a tune by its ID.
    pub fn by_id(id: &str) -> Option<&'static RtttlSong> {
        RTTTL_SONGS.iter().find(|s| s.id == id).copied()
    }

    /// Returns the first tune whose RTTTL header name matches.
    pub fn by_name(name: &str) -> Option<&'static RtttlSong> {
        RTTTL_SONGS.iter().find(|s| s.name() == name).copied()
    }

    /// Returns all tune IDs.
    pub fn ids() -> Vec<&'static str> {
        RTTTL_SONGS.iter().map(|s| s.id).collect()
    }
}

/// All RTTTL tunes.
pub static RTTTL_SONGS: &[&RtttlSong] = &[
    &RTTTL_DISABLED_TONE,
    &RTTTL_STAR_WARS_END,
    &RTTTL_STAR_WARS,
    &RTTTL_STAR_WARS_INTRO,
    &RTTTL_STAR_WARS_IMPERIAL_MARCH,
    &RTTTL_SPY_HUNTER,
    &RTTTL_TMNT1,
    &RTTTL_GAME_OF_THRONES,
    &RTTTL_OUTRUN,
    &RTTTL_TAKE_ON_ME1,
    &RTTTL_TAKE_ON_ME_MB,
    &RTTTL_AIR_WOLF_THEME,
    &RTTTL_GALAGA,
    &RTTTL_NELLY_ONE,
    &RTTTL_GNR_SWEET_CHILD,
    &RTTTL_REVEILLE,
];

/// All pitch/duration melodies.
pub static MELODIES: &[&Melody] = &[
    &MELODY_TEST_MELODY,
    &MELODY_MARIO_MAIN_THEME,
    &MELODY_MARIO_UNDERWORLD,
    &MELODY_TAKE_ON_ME,
    &MELODY_KNIGHT_RIDER,
];

// ========== RTTTL Tunes ==========

/// Disabled lane tone
pub static RTTTL_DISABLED_TONE: RtttlSong = RtttlSong::new(
    "disabled_tone",
    "disabled:d=4,o=5,b=125:2c,4c,3c",
);

/// Star Wars end title
pub static RTTTL_STAR_WARS_END: RtttlSong = RtttlSong::new(
    "star_wars_end",
    "StarWarsEnd:d=4,o=5,b=225:2c,1f,2g.,8g#,8a#,1g#,2c.,c,2f.,g,g#,c,8g#.,8c.,8c6,1a#.,2c,2f.,g,g#.,8f,c.6,8g#,1f6,2f,8g#.,8g.,8f,2c6,8c.6,8g#.,8f,2c,8c.,8c.,8c,2f,8f.,8f.,8f,2f",
);

/// Star Wars
pub static RTTTL_STAR_WARS: RtttlSong = RtttlSong::new(
    "star_wars",
    "StarWars:d=4,o=5,b=45:32p,32f#,32f#,32f#,8b.,8f#.6,32e6,32d#6,32c#6,8b.6,16f#.6,32e6,32d#6,32c#6,8b.6,16f#.6,32e6,32d#6,32e6,8c#.6,32f#,32f#,32f#,8b.,8f#.6,32e6,32d#6,32c#6,8b.6,16f#.6,32e6,32d#6,32c#6,8b.6,16f#.6,32e6,32d#6,32e6,8c#6",
);

/// Star Wars intro
pub static RTTTL_STAR_WARS_INTRO: RtttlSong = RtttlSong::new(
    "star_wars_intro",
    "starwars:d=4,o=5,b=180:8f,8f,8f,2a#.,2f.6,8d#6,8d6,8c6,2a#.6,f.6,8d#6,8d6,8c6,2a#.6,f.6,8d#6,8d6,8d#6,2c6,p,8f,8f,8f,2a#.,2f.6,8d#6,8d6,8c6,2a#.6,f.6,8d#6,8d6,8c6,2a#.6,f.6,8d#6,8d6,8d#6,2c6",
);

/// Imperial March
pub static RTTTL_STAR_WARS_IMPERIAL_MARCH: RtttlSong = RtttlSong::new(
    "star_wars_imperial_march",
    "starWarsImperialMarch:d=4,o=5,b=180:a.4,a.4,a.4,f4,16c.,a.4,f4,16c.,2a.4,e.,e.,e.,f,16c.,g#.4,f4,16c.,2a.4,a.,a4,16a.4,a.,g#,16g.,16f#.,16e.,8f.,8p.,8a#.4,d#.,d,16c#.,16c.,16b.4,8c.,8p.,8f.4,g#.4,f4,16a.4,c.,a4,16c.,2e.,a.,a4,16a.4,a.,g#,16g.,16f#.,16e.,8f.,8p.,8a#.4,d#.,d,16c#.,16c.,16b.4,8c.,8p.,8f.4,g#.4,f4,16c.,a.4,f4,16c.,2a.4",
);

/// Spy Hunter
pub static RTTTL_SPY_HUNTER: RtttlSong = RtttlSong::new(
    "spy_hunter",
    "spyhunter:d=4,o=5,b=100:16f,32p,16f,32p,16g,32p,16f,32p,32g#.,16a,16f,32p,16a#,32p,16a,32p,16f,32p,16f,32p,16g,32p,16f,32p,32g#.,16a,16f,32p,16a#,32p,16a,32p",
);

/// Teenage Mutant Ninja Turtles
pub static RTTTL_TMNT1: RtttlSong = RtttlSong::new(
    "tmnt1",
    "tmnt1:d=4,o=5,b=100:8e,8f#,8e,8f#,8e,16f#,8e.,8f#,8g,8a,8g,8a,8g,16a,8g.,8a,8c6,8d6,8c6,8d6,8c6,16d6,8c.6,8d6,16a,16a,16a,16a,8g,8a,8p,16a,16a,16a,16a",
);

/// Game of Thrones
pub static RTTTL_GAME_OF_THRONES: RtttlSong = RtttlSong::new(
    "game_of_thrones",
    "GOT:d=32,o=4,b=320:2g5,p,2c5,p,4d#5,p,4f5,p,2g5,p,2c5,p,4d#5,p,4f5,p,2g5,p,2c5,p,4d#5,p,4f5,p,2g5,p,2c5,p,4d#5,p,4f5,p,2g5,p,2c5,p,4e5,p,4f5,p,2g5,p,2c5,p,4d#5,p,4f5,p,2g5,p,2c5,p,4e5,p,4f5,p,2g5,p,2c5,p,4d#5,p,4f5,p,1g.6,p,1c.6,p,4d#6,p,4f6,p,1g6,p,1c6,p,4d#6,p,4f6,p,2c5,p,4d#5,p,4f5,p,2g5,p,2c5,p,4d#5,p,4f5,p,2g5,p,2c5,p,4d#5,p,4f5,p,2g5,p,2c5,p,4d#5,p,4f5,p,2g5,p,1f.6,p,1a#.5,p,4d6,p,4d#6,p,1f6,p,1a#5,p,4d#6,p,4d6,p,2c5,p,4d#5",
);

/// OutRun Magical Sound Shower
pub static RTTTL_OUTRUN: RtttlSong = RtttlSong::new(
    "outrun",
    "outrun_magic:d=4,o=5,b=160:f6,d#6,8g#.6,f6,d#6,8c#.6,d#6,c6,2g#.,c#6,c6,8d#.6,c#6,c6,8f.,a#,16c.6,1a#,f6,d#6,8g#.6,f6,d#6,8c#.6,d#6,c6,2g#.,c#6,c6,8d#.6,c#6,c6,16f.,16g#.,c6,2a#.",
);

/// Take On Me
pub static RTTTL_TAKE_ON_ME1: RtttlSong = RtttlSong::new(
    "take_on_me1",
    "takeOnMe1:d=4,o=4,b=160:8f#5,8f#5,8f#5,8d5,8p,8b,8p,8e5,8p,8e5,8p,8e5,8g#5,8g#5,8a5,8b5,8a5,8a5,8a5,8e5,8p,8d5,8p,8f#5,8p,8f#5,8p,8f#5,8e5,8e5,8f#5,8e5,8f#5,8f#5,8f#5,8d5,8p,8b,8p,8e5,8p,8e5,8p,8e5,8g#5,8g#5,8a5,8b5,8a5,8a5,8a5,8e5,8p,8d5,8p,8f#5,8p,8f#5,8p,8f#5,8e5,8e5,8f#5,8e5",
);

/// Take On Me (riff)
pub static RTTTL_TAKE_ON_ME_MB: RtttlSong = RtttlSong::new(
    "take_on_me_mb",
    "takeOnMe1:d=8,o=5,b=160:f#,f#,d,b4,p,b4,p,e,p,e,p,e,g#,g#,a,b,a,a,a,e,p,d,p,f#,p,f#,p,f#,e,e,f#,e,f#,f#,d,b4,p,b4,p,e,p,e,p,e,g#,g#,a,b,a,a,a,e,p,d,p,f#,p,f#,p,f#,e,e,f#,e,f#,f#,d,b4,p,b4,p,e,p,e,p,e,g#,g#,a,b,a,a,a,e,p,d,p,f#,p,f#,p,f#",
);

/// Airwolf theme
pub static RTTTL_AIR_WOLF_THEME: RtttlSong = RtttlSong::new(
    "air_wolf_theme",
    "airWolfTheme:d=4,o=6,b=100:e5,16a5,16b5,16d,e,16g,16f_,16d,e,16g,16f_,16d,e,8d,16f_,b5,a5,8g5,16a5,8f_5,16d5,g5,16c,16d,16f,g,16c,16b,16f,g,16c,16b,16f,g,8f,16a,d,c,8b5,16d,8a5,16f5,g5,16c,16d,16f,g,16c,16b,16f",
);

/// Galaga
pub static RTTTL_GALAGA: RtttlSong = RtttlSong::new(
    "galaga",
    "Galaga:d=4,o=5,b=125:8g4,32c,32p,8d,32f,32p,8e,32c,32p,8d,32a,32p,8g,32c,32p,8d,32f,32p,8e,32c,32p,8g,32b,32p,8c6,32a#,32p,8g#,32g,32p,8f,32d#,32p,8d,32a#4,32p,8a#,32c6,32p,8a#,32g,32p,16a,16f,16d,16g,16e,16d",
);

/// Number One; shipped disabled, not in the default racer songs
pub static RTTTL_NELLY_ONE: RtttlSong = RtttlSong::new(
    "nelly_one",
    "NumberOn:d=16,o=5,b=90:a,e,a,8e6,8c6,2a,a,e,a,8e6,8c6,2a,a,e,a,8e6,8c6,2a,a,e,8a,g,a,g,8c6,a,4a",
);

/// Sweet Child o' Mine
pub static RTTTL_GNR_SWEET_CHILD: RtttlSong = RtttlSong::new(
    "gnr_sweet_child",
    "SweetChi:d=16,o=6,b=80:f5,f,c,a5,a#,c,a,c,f5,f,c,a5,a#,c,a,c,g5,f,c,a#5,a#,c,a,c,g5,f,c,a#5,a#,c,a,c,a#5,f,c,a#5,a#,c,a,c,a#5,f,c,a#5,a#,c,a,c,f5,f,c,a5,a#,c,a,c,f5,f,c,a5,a#,c,a,c,f5,f,c,a5,a#,c,a,c,f5,f,c,a5,a#,c,a,c,g5,f,c,a#5,a#,c,a,c,g5,f,c,a#5,a#,c,a,c,a#5,f,c,a#5,a#,c,a,c,a#5,f,c,a#5,a#,c,a,c,f5,f,c,a5,a#,c,a,c,f5,f,c,a5,a#,c,a,c",
);

/// Reveille
pub static RTTTL_REVEILLE: RtttlSong = RtttlSong::new(
    "reveille",
    "Reveille:d=4,o=5,b=140:e6,8c6,g,8g,8c6,8g,8e6,8c6,8c6,8c6,e6,8c6,g,8g,8c6,8g,8e6,c.6,8g,8g,8g,8c6,8e6,8c6,8g,8g,8g,c6,8e6,8g,8g,8g,8c6,8e6,8c6,8g,8g,8g,c.6",
);

// ========== Pitch/Duration Melodies ==========

static TEST_MELODY_NOTES: [Note; 8] = [
    n(C4, 4), n(G3, 8), n(G3, 8), n(A3, 4), n(G3, 4), n(REST, 4), n(B3, 4), n(C4, 4),
];

/// Test melody
pub static MELODY_TEST_MELODY: Melody = Melody::new(
    "test_melody",
    "Test melody",
    Timing::WholeNote(1000),
    &TEST_MELODY_NOTES,
);

static MARIO_MAIN_THEME_NOTES: [Note; 78] = [
    n(E7, 12), n(E7, 12), n(REST, 12), n(E7, 12),
    n(REST, 12), n(C7, 12), n(E7, 12), n(REST, 12),
    n(G7, 12), n(REST, 12), n(REST, 12), n(REST, 12),

    n(G6, 12), n(REST, 12), n(REST, 12), n(REST, 12),

    n(C7, 12), n(REST, 12), n(REST, 12), n(G6, 12),
    n(REST, 12), n(REST, 12), n(E6, 12), n(REST, 12),
    n(REST, 12), n(A6, 12), n(REST, 12), n(B6, 12),
    n(REST, 12), n(AS6, 12), n(A6, 12), n(REST, 12),

    n(G6, 9), n(E7, 9), n(G7, 9),
    n(A7, 12), n(REST, 12), n(F7, 12), n(G7, 12),
    n(REST, 12), n(E7, 12), n(REST, 12), n(C7, 12),
    n(D7, 12), n(B6, 12), n(REST, 12), n(REST, 12),

    n(C7, 12), n(REST, 12), n(REST, 12), n(G6, 12),
    n(REST, 12), n(REST, 12), n(E6, 12), n(REST, 12),
    n(REST, 12), n(A6, 12), n(REST, 12), n(B6, 12),
    n(REST, 12), n(AS6, 12), n(A6, 12), n(REST, 12),

    n(G6, 9), n(E7, 9), n(G7, 9),
    n(A7, 12), n(REST, 12), n(F7, 12), n(G7, 12),
    n(REST, 12), n(E7, 12), n(REST, 12), n(C7, 12),
    n(D7, 12), n(B6, 12), n(REST, 12), n(REST, 12),
];

/// Super Mario Bros. main theme
pub static MELODY_MARIO_MAIN_THEME: Melody = Melody::new(
    "mario_main_theme",
    "Super Mario Bros. main theme",
    Timing::WholeNote(1000),
    &MARIO_MAIN_THEME_NOTES,
);

static MARIO_UNDERWORLD_NOTES: [Note; 56] = [
    n(C4, 12), n(C5, 12), n(A3, 12), n(A4, 12),
    n(AS3, 12), n(AS4, 12), n(REST, 6),
    n(REST, 3),
    n(C4, 12), n(C5, 12), n(A3, 12), n(A4, 12),
    n(AS3, 12), n(AS4, 12), n(REST, 6),
    n(REST, 3),
    n(F3, 12), n(F4, 12), n(D3, 12), n(D4, 12),
    n(DS3, 12), n(DS4, 12), n(REST, 6),
    n(REST, 3),
    n(F3, 12), n(F4, 12), n(D3, 12), n(D4, 12),
    n(DS3, 12), n(DS4, 12), n(REST, 6),
    n(REST, 6), n(DS4, 18), n(CS4, 18), n(D4, 18),
    n(CS4, 6), n(DS4, 6),
    n(DS4, 6), n(GS3, 6),
    n(G3, 6), n(CS4, 6),
    n(C4, 18), n(FS4, 18), n(F4, 18), n(E3, 18), n(AS4, 18), n(A4, 18),
    n(GS4, 10), n(DS4, 10), n(B3, 10),
    n(AS3, 10), n(A3, 10), n(GS3, 10),
    n(REST, 3), n(REST, 3), n(REST, 3),
];

/// Super Mario Bros. underworld
pub static MELODY_MARIO_UNDERWORLD: Melody = Melody::new(
    "mario_underworld",
    "Super Mario Bros. underworld",
    Timing::WholeNote(1000),
    &MARIO_UNDERWORLD_NOTES,
);

static TAKE_ON_ME_NOTES: [Note; 24] = [
    n(FS5, 8), n(FS5, 8), n(D5, 8), n(B4, 4), n(B4, 4), n(E5, 4),
    n(E5, 4), n(E5, 5), n(GS5, 8), n(GS5, 8), n(A5, 8), n(B5, 8),
    n(A5, 8), n(A5, 8), n(A5, 8), n(E5, 4), n(D5, 4), n(FS5, 4),
    n(FS5, 4), n(FS5, 5), n(E5, 8), n(E5, 8), n(FS5, 8), n(E5, 8),
];

/// Take On Me
pub static MELODY_TAKE_ON_ME: Melody = Melody::new(
    "take_on_me",
    "Take On Me",
    Timing::WholeNote(1000),
    &TAKE_ON_ME_NOTES,
);

static KNIGHT_RIDER_NOTES: [Note; 210] = [
    // 1
    n(A4, 250), n(AS4, 125), n(A4, 125),
    n(A4, 125), n(AS4, 125), n(A4, 125), n(A4, 125),
    n(AS4, 125), n(A4, 125), n(A4, 125), n(A4, 125),
    n(GS4, 125), n(A4, 125), n(A4, 125), n(A4, 125),
    n(A4, 250), n(AS4, 125), n(A4, 125),
    n(A4, 125), n(AS4, 125), n(A4, 125), n(A4, 125),
    n(AS4, 125), n(A4, 125), n(A4, 125), n(A4, 125),
    n(GS4, 125), n(A4, 125), n(A4, 125), n(A4, 125),
    n(G4, 250), n(GS4, 125), n(G4, 125),
    n(G4, 125), n(GS4, 125), n(G4, 125), n(G4, 125),
    n(GS4, 125), n(G4, 125), n(G4, 125), n(G4, 125),
    n(FS4, 125), n(G4, 125), n(G4, 125), n(G4, 125),
    n(G4, 250), n(GS4, 125), n(G4, 125),
    n(G4, 125), n(GS4, 125), n(G4, 125), n(G4, 125),
    n(GS4, 125), n(G4, 125), n(G4, 125), n(G4, 125),
    n(FS4, 125), n(G4, 125), n(G4, 125), n(G4, 125),
    // 2
    n(A4, 250), n(AS4, 125), n(A4, 125),
    n(A4, 125), n(AS4, 125), n(A4, 125), n(A4, 125),
    n(AS4, 125), n(A4, 125), n(A4, 125), n(A4, 125),
    n(GS4, 125), n(A4, 125), n(A4, 125), n(A4, 125),
    n(A4, 250), n(AS4, 125), n(A4, 125),
    n(A4, 125), n(AS4, 125), n(A4, 125), n(A4, 125),
    n(AS4, 125), n(A4, 125), n(A4, 125), n(A4, 125),
    n(GS4, 125), n(A4, 125), n(A4, 125), n(A4, 125),
    n(G4, 250), n(GS4, 125), n(G4, 125),
    n(G4, 125), n(GS4, 125), n(G4, 125), n(G4, 125),
    n(GS4, 125), n(G4, 125), n(G4, 125), n(G4, 125),
    n(FS4, 125), n(G4, 125), n(G4, 125), n(G4, 125),
    n(G4, 250), n(GS4, 125), n(G4, 125),
    n(G4, 125), n(GS4, 125), n(G4, 125), n(G4, 125),
    n(GS4, 125), n(G4, 125), n(G4, 125), n(G4, 125),
    n(FS4, 125), n(G4, 125), n(G4, 125), n(G4, 125),
    // 3
    n(A4, 250), n(AS4, 125), n(A4, 125),
    n(A4, 125), n(AS4, 125), n(A4, 125), n(A4, 125),
    n(AS4, 125), n(A4, 125), n(A4, 125), n(A4, 125),
    n(GS4, 125), n(A4, 125), n(A4, 125), n(A4, 125),
    n(A4, 250), n(AS4, 125), n(A4, 125),
    n(A4, 125), n(AS4, 125), n(A4, 125), n(A4, 125),
    n(AS4, 125), n(A4, 125), n(A4, 125), n(A4, 125),
    n(GS4, 125), n(A4, 125), n(A4, 125), n(A4, 125),
    n(G4, 250), n(GS4, 125), n(G4, 125),
    n(G4, 125), n(GS4, 125), n(G4, 125), n(G4, 125),
    n(GS4, 125), n(G4, 125), n(G4, 125), n(G4, 125),
    n(FS4, 125), n(G4, 125), n(G4, 125), n(G4, 125),
    n(G4, 250), n(GS4, 125), n(G4, 125),
    n(G4, 125), n(GS4, 125), n(G4, 125), n(G4, 125),
    n(GS4, 125), n(G4, 125), n(G4, 125), n(G4, 125),
    n(FS4, 125), n(G4, 125), n(G4, 125), n(G4, 125),
    // solo
    n(A4, 250), n(AS4, 125), n(A4, 125), n(E5, 1500),
    n(A5, 250), n(AS5, 125), n(A5, 125), n(E5, 1500),
    n(A4, 250), n(AS4, 125), n(A4, 125), n(E5, 250), n(A5, 250), n(G5, 2000),
    n(A4, 250), n(AS4, 125), n(A4, 125), n(E5, 1500),
    n(A5, 250), n(AS5, 125), n(A5, 125), n(E5, 1500),
    n(A4, 250), n(AS4, 125), n(A4, 125), n(E5, 250), n(A5, 250), n(AS5, 40), n(G5, 250), n(A5, 500),
];

/// Knight Rider theme
pub static MELODY_KNIGHT_RIDER: Melody = Melody::new(
    "knight_rider",
    "Knight Rider theme",
    Timing::Millis,
    &KNIGHT_RIDER_NOTES,
);
