//! Note frequencies in Hz.
//!
//! Values match the Arduino `pitches.h` table the firmware tunes were written
//! against. Sharps use an `S` suffix (`CS4` is C#4 / Db4).

// Octave 0
pub const C0: u16 = 16;
pub const CS0: u16 = 17;
pub const D0: u16 = 18;
pub const DS0: u16 = 19;
pub const E0: u16 = 21;
pub const F0: u16 = 22;
pub const FS0: u16 = 23;
pub const G0: u16 = 24;
pub const GS0: u16 = 26;
pub const A0: u16 = 28;
pub const AS0: u16 = 29;
pub const B0: u16 = 31;

// Octave 1
pub const C1: u16 = 33;
pub const CS1: u16 = 35;
pub const D1: u16 = 37;
pub const DS1: u16 = 39;
pub const E1: u16 = 41;
pub const F1: u16 = 44;
pub const FS1: u16 = 46;
pub const G1: u16 = 49;
pub const GS1: u16 = 52;
pub const A1: u16 = 55;
pub const AS1: u16 = 58;
pub const B1: u16 = 62;

// Octave 2
pub const C2: u16 = 65;
pub const CS2: u16 = 69;
pub const D2: u16 = 73;
pub const DS2: u16 = 78;
pub const E2: u16 = 82;
pub const F2: u16 = 87;
pub const FS2: u16 = 93;
pub const G2: u16 = 98;
pub const GS2: u16 = 104;
pub const A2: u16 = 110;
pub const AS2: u16 = 117;
pub const B2: u16 = 123;

// Octave 3
pub const C3: u16 = 131;
pub const CS3: u16 = 139;
pub const D3: u16 = 147;
pub const DS3: u16 = 156;
pub const E3: u16 = 165;
pub const F3: u16 = 175;
pub const FS3: u16 = 185;
pub const G3: u16 = 196;
pub const GS3: u16 = 208;
pub const A3: u16 = 220;
pub const AS3: u16 = 233;
pub const B3: u16 = 247;

// Octave 4
pub const C4: u16 = 262;
pub const CS4: u16 = 277;
pub const D4: u16 = 294;
pub const DS4: u16 = 311;
pub const E4: u16 = 330;
pub const F4: u16 = 349;
pub const FS4: u16 = 370;
pub const G4: u16 = 392;
pub const GS4: u16 = 415;
pub const A4: u16 = 440;
pub const AS4: u16 = 466;
pub const B4: u16 = 494;

// Octave 5
pub const C5: u16 = 523;
pub const CS5: u16 = 554;
pub const D5: u16 = 587;
pub const DS5: u16 = 622;
pub const E5: u16 = 659;
pub const F5: u16 = 698;
pub const FS5: u16 = 740;
pub const G5: u16 = 784;
pub const GS5: u16 = 831;
pub const A5: u16 = 880;
pub const AS5: u16 = 932;
pub const B5: u16 = 988;

// Octave 6
pub const C6: u16 = 1047;
pub const CS6: u16 = 1109;
pub const D6: u16 = 1175;
pub const DS6: u16 = 1245;
pub const E6: u16 = 1319;
pub const F6: u16 = 1397;
pub const FS6: u16 = 1480;
pub const G6: u16 = 1568;
pub const GS6: u16 = 1661;
pub const A6: u16 = 1760;
pub const AS6: u16 = 1865;
pub const B6: u16 = 1976;

// Octave 7
pub const C7: u16 = 2093;
pub const CS7: u16 = 2217;
pub const D7: u16 = 2349;
pub const DS7: u16 = 2489;
pub const E7: u16 = 2637;
pub const F7: u16 = 2794;
pub const FS7: u16 = 2960;
pub const G7: u16 = 3136;
pub const GS7: u16 = 3322;
pub const A7: u16 = 3520;
pub const AS7: u16 = 3729;
pub const B7: u16 = 3951;

// Octave 8
pub const C8: u16 = 4186;
pub const CS8: u16 = 4435;
pub const D8: u16 = 4699;
pub const DS8: u16 = 4978;
pub const E8: u16 = 5274;
pub const F8: u16 = 5588;
pub const FS8: u16 = 5920;
pub const G8: u16 = 6272;
pub const GS8: u16 = 6645;
pub const A8: u16 = 7040;
pub const AS8: u16 = 7459;
pub const B8: u16 = 7902;
// Rest (silence)
pub const REST: u16 = 0;

/// Highest octave in the frequency table.
pub const MAX_OCTAVE: u8 = 8;

/// Semitones per octave.
pub const SEMITONES: u8 = 12;

pub(crate) const TABLE: [[u16; 12]; 9] = [
    [C0, CS0, D0, DS0, E0, F0, FS0, G0, GS0, A0, AS0, B0],
    [C1, CS1, D1, DS1, E1, F1, FS1, G1, GS1, A1, AS1, B1],
    [C2, CS2, D2, DS2, E2, F2, FS2, G2, GS2, A2, AS2, B2],
    [C3, CS3, D3, DS3, E3, F3, FS3, G3, GS3, A3, AS3, B3],
    [C4, CS4, D4, DS4, E4, F4, FS4, G4, GS4, A4, AS4, B4],
    [C5, CS5, D5, DS5, E5, F5, FS5, G5, GS5, A5, AS5, B5],
    [C6, CS6, D6, DS6, E6, F6, FS6, G6, GS6, A6, AS6, B6],
    [C7, CS7, D7, DS7, E7, F7, FS7, G7, GS7, A7, AS7, B7],
    [C8, CS8, D8, DS8, E8, F8, FS8, G8, GS8, A8, AS8, B8],
];

/// Looks up the frequency of a semitone (0 = C .. 11 = B) in an octave.
///
/// A semitone of 12 or more carries into the following octave, so B# in
/// octave 4 resolves to C5. Returns `None` past the end of the table.
pub fn frequency(semitone: u8, octave: u8) -> Option<u16> {
    let octave = octave as usize + (semitone / SEMITONES) as usize;
    let semitone = (semitone % SEMITONES) as usize;
    TABLE.get(octave).map(|row| row[semitone])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_pitch() {
        assert_eq!(A4, 440);
        assert_eq!(frequency(9, 4), Some(440));
    }

    #[test]
    fn test_frequency_matches_constants() {
        assert_eq!(frequency(0, 5), Some(C5));
        assert_eq!(frequency(6, 4), Some(FS4));
        assert_eq!(frequency(10, 6), Some(AS6));
        assert_eq!(frequency(4, 7), Some(E7));
    }

    #[test]
    fn test_frequency_carries_octave() {
        // B# is enharmonic with C of the next octave
        assert_eq!(frequency(12, 4), Some(C5));
        assert_eq!(frequency(11, 8), Some(B8));
        assert_eq!(frequency(12, 8), None);
    }

    #[test]
    fn test_frequency_out_of_range() {
        assert_eq!(frequency(0, MAX_OCTAVE + 1), None);
    }

    #[test]
    fn test_table_is_ascending() {
        let flat: Vec<u16> = TABLE.iter().flatten().copied().collect();
        for pair in flat.windows(2) {
            assert!(pair[0] < pair[1], "{} should be below {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_rest_is_silent() {
        assert_eq!(REST, 0);
    }
}
