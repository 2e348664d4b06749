//! The settings table.
//!
//! Every setting is declared once; the declaration generates the resolved
//! [`Settings`] struct, its shipped defaults, and the all-optional
//! [`Overrides`] struct read from the local override file. Serialized keys
//! are the upper-case setting names (`LANE_COUNT`, `DEFAULT_LAPS`, ...).

use serde::{Deserialize, Serialize};

use crate::types::*;

macro_rules! settings {
    ($( $(#[$meta:meta])* $field:ident : $ty:ty = $default:expr ;)*) => {
        /// Resolved settings: every value present.
        #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
        pub struct Settings {
            $( $(#[$meta])* pub $field: $ty, )*
        }

        impl Default for Settings {
            fn default() -> Self {
                Self {
                    $( $field: $default, )*
                }
            }
        }

        /// Local overrides: any subset of the settings.
        #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(rename_all = "SCREAMING_SNAKE_CASE", deny_unknown_fields)]
        pub struct Overrides {
            $(
                #[serde(default, skip_serializing_if = "Option::is_none")]
                pub $field: Option<$ty>,
            )*
        }

        impl Overrides {
            /// Returns true if no setting is overridden.
            pub fn is_empty(&self) -> bool {
                true $( && self.$field.is_none() )*
            }

            /// Returns the setting names that are overridden.
            pub fn keys(&self) -> Vec<String> {
                let mut keys = Vec::new();
                $(
                    if self.$field.is_some() {
                        keys.push(stringify!($field).to_ascii_uppercase());
                    }
                )*
                keys
            }
        }

        impl Settings {
            /// Replaces every value that `overrides` sets.
            pub fn apply(mut self, overrides: Overrides) -> Self {
                $(
                    if let Some(value) = overrides.$field {
                        self.$field = value;
                    }
                )*
                self
            }
        }
    };
}

settings! {
    // Hardware and race defaults

    /// Physical lanes (at most 4)
    lane_count: u8 = 2;
    /// Fastest laps kept per racer
    default_max_stored_laps: u8 = 20;
    /// One finish-line trigger for drag races (otherwise start and finish)
    single_drag_trigger: bool = true;
    /// Count down again when restarting from a pause
    ctdwn_on_restart: bool = true;
    /// Lap sensor debounce, ms
    debounce: u32 = 500;
    default_laps: u16 = 10;
    default_set_min: u8 = 0;
    default_set_sec: u8 = 30;
    /// Pre-start countdown, s
    default_countdown: u8 = 5;
    /// Display refresh interval, ms
    default_refresh_ticks: u32 = 100;
    /// How long a completed lap stays on the LED bar, ms
    default_flash_period_length: u32 = 1500;
    /// How long the start light stays lit after a circuit race start, ms
    start_light_off_delay: u32 = 2000;

    // Lane inputs; all four are always defined

    lane1: LaneBinding = LaneBinding::new(Pin::Analog(0), 0b0000_0001);
    lane2: LaneBinding = LaneBinding::new(Pin::Analog(1), 0b0000_0010);
    lane3: LaneBinding = LaneBinding::new(Pin::Analog(2), 0b0000_0100);
    lane4: LaneBinding = LaneBinding::new(Pin::Analog(3), 0b0000_1000);
    pcint_vect: InterruptVector = InterruptVector::Pcint1;
    interrupt_port: InterruptPort = InterruptPort::PinC;

    pausepin: Pin = Pin::Analog(6);
    dragpin: Pin = Pin::Analog(7);
    buzzpin: Pin = Pin::Digital(13);

    // Game sounds

    beep_freq: u16 = 4000;
    beep_dur: u32 = 200;
    boop_freq: u16 = 1000;
    boop_dur: u32 = 200;
    bleep_freq: u16 = 2000;
    bleep_dur: u32 = 600;
    default_audio_mode: AudioMode = AudioMode::Mute;

    // Display geometry

    lcd_cols: u8 = 20;
    lcd_rows: u8 = 4;
    race_clk_pos: u8 = 8;
    prestart_clk_pos: u8 = 11;

    // LED bar pins

    pin_to_led_din: Pin = Pin::Digital(2);
    pin_to_led_cs: Pin = Pin::Digital(3);
    pin_to_led_clk: Pin = Pin::Digital(4);

    // Main menu

    a_select_racer: String = "A| Select Racers".into();
    b_change_settings: String = "B| Change Settings".into();
    c_start_race: String = "C| Start a Race".into();
    d_see_results: String = "D| See Results".into();

    // Select racers menu

    a_racer1: String = "A|Racer1".into();
    b_racer2: String = "B|Racer2".into();
    c_racer3: String = "C|Racer3".into();
    d_racer4: String = "D|Racer4".into();

    // Settings menu

    a_setting_audio: String = " A |Audio".into();
    time_setting_pos: u8 = 14;
    b_setting_time: String = " B |Time       :".into();
    c_setting_laps: String = " C |Laps".into();
    d_setting_lanes: String = "0-4|Lanes".into();

    // Start race menu

    start_race_laps_endpos_idx: u8 = 19;
    a_start_race_standard: String = "A|Laps Race to:".into();
    start_race_time_endpos_idx: u8 = 19;
    b_start_race_imed: String = "B|Timed Race:".into();
    start_race_3rd_row: String = "C|Drag Race".into();
    start_race_cntdwn_endpos_idx: u8 = 19;
    d_start_race_countdown: String = "D|PreStart (Sec):".into();

    text_prestart: String = "Your Race Starts in:".into();
    text_prestart_strpos: u8 = 0;

    // Finishing places, three characters each

    finish_dnf: String = "DNF".into();
    finish_1st: String = "1st".into();
    finish_2nd: String = "2nd".into();
    finish_3rd: String = "3rd".into();
    finish_4th: String = "4th".into();

    // Results menu

    no_race_data: String = "-NO RACE DATA-".into();
    compiling: String = "-Compiling-".into();
    results_top_lbl: String = "C| TOP RESULTS".into();
    results_top_text_best: String = "Best".into();
    results_top_text_lap: String = "Lap".into();
    /// Racer number / name alternation period, ms
    results_racer_blink: u32 = 2000;
    results_racer_lbl: String = "C| RACER ".into();
    results_racer_num_pos: u8 = 10;
    results_finish_lbl: String = "C| FINISH".into();
    results_total_lbl: String = "Total".into();
    results_total_lbla: String = "Time".into();
    results_total_lblb: String = "Laps".into();

    // LED bar text

    text_start: String = "Start".into();
    text_pause: String = "PAUSE".into();
    text_off: String = TEXT_OFF.into();

    // Racers

    /// Selectable racer names; the first entry marks an unused lane
    racer_names_list: Vec<String> = strings(&[
        TEXT_OFF, "Lucien", "Zoe", "Elise", "John", "Angie", "Uncle 1",
        "Rat2020_longer", "The OG", "5318008",
    ]);
    /// Song ids, by racer index (or by finishing place, see `songs_by_place`)
    racer_songs_list: Vec<String> = strings(&[
        "disabled_tone",
        "star_wars_imperial_march",
        "take_on_me_mb",
        "air_wolf_theme",
        "tmnt1",
        "game_of_thrones",
        "galaga",
        "outrun",
        "star_wars_end",
        "spy_hunter",
    ]);
    /// Play songs by finishing place instead of by racer
    songs_by_place: bool = false;
}

const TEXT_OFF: &str = "-Off-";

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Settings {
    /// Number of selectable racers, the "off" entry included.
    pub fn racer_list_size(&self) -> usize {
        self.racer_names_list.len()
    }

    pub fn beep(&self) -> GameSound {
        GameSound {
            freq_hz: self.beep_freq,
            duration_ms: self.beep_dur,
        }
    }

    pub fn boop(&self) -> GameSound {
        GameSound {
            freq_hz: self.boop_freq,
            duration_ms: self.boop_dur,
        }
    }

    pub fn bleep(&self) -> GameSound {
        GameSound {
            freq_hz: self.bleep_freq,
            duration_ms: self.bleep_dur,
        }
    }

    /// All four lane bindings, lane 1 first.
    pub fn lanes(&self) -> [&LaneBinding; 4] {
        [&self.lane1, &self.lane2, &self.lane3, &self.lane4]
    }

    /// Song id for racer `index` (or finishing place, when songs go by place).
    pub fn racer_song(&self, index: usize) -> Option<&str> {
        self.racer_songs_list.get(index).map(String::as_str)
    }
}

/// Resolves the effective settings: each overridden value wins, shipped
/// defaults fill the rest.
///
/// An inherited racer-name list keeps its first entry equal to the
/// resolved `TEXT_OFF` label.
pub fn resolve(defaults: Settings, overrides: Option<Overrides>) -> Settings {
    let Some(overrides) = overrides else {
        return defaults;
    };

    let names_overridden = overrides.racer_names_list.is_some();
    let default_off = defaults.text_off.clone();
    let mut settings = defaults.apply(overrides);

    if !names_overridden {
        if let Some(first) = settings.racer_names_list.first_mut() {
            if *first == default_off {
                *first = settings.text_off.clone();
            }
        }
    }
    settings
}
