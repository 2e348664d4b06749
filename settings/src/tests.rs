use std::io::Write;

use super::*;

const EXAMPLE: &str = include_str!("../localSettings.example.yaml");

#[test]
fn test_defaults() {
    let s = Settings::default();
    assert_eq!(s.lane_count, 2);
    assert_eq!(s.default_max_stored_laps, 20);
    assert_eq!(s.debounce, 500);
    assert_eq!(s.default_laps, 10);
    assert_eq!(s.default_set_sec, 30);
    assert_eq!(s.default_audio_mode, AudioMode::Mute);
    assert_eq!(s.pcint_vect, InterruptVector::Pcint1);
    assert_eq!(s.interrupt_port, InterruptPort::PinC);
    assert_eq!(s.pausepin, Pin::Analog(6));
    assert_eq!(s.buzzpin, Pin::Digital(13));
    assert_eq!(s.a_racer1, "A|Racer1");
    assert_eq!(s.text_prestart, "Your Race Starts in:");
    assert!(s.single_drag_trigger);
    assert!(!s.songs_by_place);
}

#[test]
fn test_lanes() {
    let s = Settings::default();
    let masks: Vec<u8> = s.lanes().iter().map(|l| l.mask).collect();
    assert_eq!(masks, vec![1, 2, 4, 8]);
    assert_eq!(s.lane3.pin, Pin::Analog(2));
}

#[test]
fn test_game_sounds() {
    let s = Settings::default();
    assert_eq!(s.beep(), GameSound { freq_hz: 4000, duration_ms: 200 });
    assert_eq!(s.boop(), GameSound { freq_hz: 1000, duration_ms: 200 });
    assert_eq!(s.bleep(), GameSound { freq_hz: 2000, duration_ms: 600 });
}

#[test]
fn test_racer_lists() {
    let s = Settings::default();
    assert_eq!(s.racer_list_size(), 10);
    assert_eq!(s.racer_names_list[0], s.text_off);
    assert_eq!(s.racer_names_list.len(), s.racer_songs_list.len());
    assert_eq!(s.racer_song(0), Some("disabled_tone"));
    assert_eq!(s.racer_song(3), Some("air_wolf_theme"));
    assert_eq!(s.racer_song(10), None);
}

#[test]
fn test_racer_list_size_follows_names() {
    let overrides = Overrides::from_yaml("RACER_NAMES_LIST: [\"-Off-\", Ann]").unwrap();
    let s = resolve(Settings::default(), Some(overrides));
    assert_eq!(s.racer_list_size(), 2);
}

#[test]
fn test_text_off_override_flows_into_names_list() {
    let overrides = Overrides::from_yaml("TEXT_OFF: \" OFF \"").unwrap();
    let s = resolve(Settings::default(), Some(overrides));
    assert_eq!(s.text_off, " OFF ");
    assert_eq!(s.racer_names_list[0], s.text_off);
    assert_eq!(s.racer_names_list[1], "Lucien");
    assert_eq!(s.racer_list_size(), 10);
}

#[test]
fn test_overridden_names_list_is_used_as_written() {
    let overrides =
        Overrides::from_yaml("TEXT_OFF: \" OFF \"\nRACER_NAMES_LIST: [\"-Off-\", Ann]").unwrap();
    let s = resolve(Settings::default(), Some(overrides));
    assert_eq!(s.racer_names_list, vec!["-Off-", "Ann"]);
}

#[test]
fn test_override_wins() {
    let overrides = Overrides::from_yaml("DEFAULT_LAPS: 25").unwrap();
    let s = resolve(Settings::default(), Some(overrides));
    assert_eq!(s.default_laps, 25);
    // untouched fields keep defaults
    assert_eq!(s.debounce, 500);
    assert_eq!(s.lane_count, 2);
}

#[test]
fn test_resolve_without_overrides() {
    assert_eq!(resolve(Settings::default(), None), Settings::default());
    assert_eq!(
        resolve(Settings::default(), Some(Overrides::default())),
        Settings::default()
    );
}

#[test]
fn test_resolve_is_not_first_write() {
    // an override equal to the default still applies, a differing one wins
    let overrides = Overrides {
        debounce: Some(500),
        default_audio_mode: Some(AudioMode::AllOn),
        ..Default::default()
    };
    let s = resolve(Settings::default(), Some(overrides));
    assert_eq!(s.debounce, 500);
    assert_eq!(s.default_audio_mode, AudioMode::AllOn);
}

#[test]
fn test_unknown_key_rejected() {
    let err = Overrides::from_yaml("NOT_A_SETTING: 1").unwrap_err();
    assert!(matches!(err, SettingsError::Yaml(_)));
}

#[test]
fn test_wrong_type_rejected() {
    assert!(Overrides::from_yaml("DEFAULT_LAPS: many").is_err());
    assert!(Overrides::from_yaml("PAUSEPIN: PIN_Z1").is_err());
}

#[test]
fn test_empty_document() {
    let overrides = Overrides::from_yaml("# nothing set\n").unwrap();
    assert!(overrides.is_empty());
    assert!(Overrides::from_yaml("").unwrap().is_empty());
}

#[test]
fn test_overrides_keys() {
    let overrides = Overrides::from_yaml("DEBOUNCE: 1\nA_RACER1: x\n").unwrap();
    assert_eq!(overrides.keys(), vec!["DEBOUNCE", "A_RACER1"]);
}

#[test]
fn test_overrides_serialize_only_set_keys() {
    let overrides = Overrides {
        lane_count: Some(4),
        ..Default::default()
    };
    assert_eq!(serde_yaml::to_string(&overrides).unwrap(), "LANE_COUNT: 4\n");
}

#[test]
fn test_settings_keys() {
    let yaml = serde_yaml::to_string(&Settings::default()).unwrap();
    assert!(yaml.contains("LANE_COUNT: 2\n"));
    assert!(yaml.contains("TEXT_PAUSE: PAUSE\n"));
    assert!(yaml.contains("PAUSEPIN: PIN_A6\n"));
    assert!(yaml.contains("PCINT_VECT: PCINT1_vect\n"));
}

#[test]
fn test_settings_round_trip_as_overrides() {
    // a full dump is a valid override file that changes nothing
    let yaml = serde_yaml::to_string(&Settings::default()).unwrap();
    let overrides = Overrides::from_yaml(&yaml).unwrap();
    assert_eq!(resolve(Settings::default(), Some(overrides)), Settings::default());
}

#[test]
fn test_example_file() {
    let overrides = Overrides::from_yaml(EXAMPLE).unwrap();
    let s = resolve(Settings::default(), Some(overrides));
    assert_eq!(s.debounce, 1000);
    assert_eq!(s.default_laps, 25);
    assert_eq!(s.lane_count, 4);
    assert_eq!(s.default_max_stored_laps, 10);
    assert_eq!(s.pcint_vect, InterruptVector::Pcint2);
    assert_eq!(s.interrupt_port, InterruptPort::PinK);
    assert_eq!(s.default_audio_mode, AudioMode::AllOn);
    assert_eq!(s.a_racer1, "A|Lane1");
    assert_eq!(s.start_race_laps_endpos_idx, 13);
    assert_eq!(s.start_race_3rd_row, "");
    assert_eq!(s.text_prestart_strpos, 3);
    assert_eq!(s.lanes(), Settings::default().lanes());
    assert_eq!(s.racer_names_list[9], "5318008");
}

#[test]
fn test_load_overrides_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("localSettings.yaml");
    assert!(load_overrides(&path).unwrap().is_none());
    assert_eq!(load_settings(Some(&path)).unwrap(), Settings::default());
}

#[test]
fn test_load_settings_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "DEFAULT_LAPS: 25").unwrap();
    writeln!(file, "BUZZPIN: 9").unwrap();

    let s = load_settings(Some(file.path())).unwrap();
    assert_eq!(s.default_laps, 25);
    assert_eq!(s.buzzpin, Pin::Digital(9));
}

#[test]
fn test_load_reports_path_on_parse_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "BOGUS: 1").unwrap();

    let err = load_overrides(file.path()).unwrap_err();
    match &err {
        SettingsError::Parse { path, .. } => assert_eq!(path, file.path()),
        other => panic!("unexpected error: {other}"),
    }
    assert!(err.to_string().starts_with("settings: parse "));
}

#[test]
fn test_settings_path() {
    let custom = Path::new("/tmp/custom.yaml");
    assert_eq!(settings_path(Some(custom)).unwrap(), custom);
    if let Some(path) = default_settings_path() {
        assert!(path.ends_with(".racetimer/localSettings.yaml"));
    }
}
