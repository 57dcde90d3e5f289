//! Name generation.
//!
//! Random names (systems, vessels) are built from syllable and word lists.
//! Names of bodies inside a system are deterministic: planets take a roman
//! numeral after the system name, satellites a letter after their parent.

use crate::dice::{choose_uniform, d10, RandomSource};

const ONSETS: &[&str] = &[
    "k", "v", "th", "s", "d", "m", "r", "gr", "z", "t", "c", "h", "n", "ph", "x",
];
const VOWELS: &[&str] = &["a", "e", "i", "o", "u", "ae", "y", "io"];
const CODAS: &[&str] = &["r", "n", "s", "th", "l", "x", "m", "d", "k"];

const SYSTEM_SUFFIXES: &[&str] = &["Prime", "Secundus", "Tertius", "Majoris", "Minoris", "Reach"];

const SHIP_ADJECTIVES: &[&str] = &[
    "Iron", "Sacred", "Eternal", "Vigilant", "Crimson", "Silent", "Righteous", "Pale",
    "Burning", "Unbowed",
];
const SHIP_NOUNS: &[&str] = &[
    "Wrath", "Oath", "Crusade", "Litany", "Fortune", "Vengeance", "Judgement", "Dawn",
    "Sovereign", "Covenant",
];

/// Name generator for systems, vessels and bodies.
pub struct NameGenerator;

impl NameGenerator {
    /// A two or three syllable system name, sometimes with an epithet.
    pub fn system_name(rng: &mut impl RandomSource) -> String {
        let syllables = if d10(rng) <= 6 { 2 } else { 3 };
        let mut name = String::new();

        for i in 0..syllables {
            let onset = *choose_uniform(rng, ONSETS);
            if i == 0 {
                name.push_str(&capitalize(onset));
            } else {
                name.push_str(onset);
            }
            name.push_str(*choose_uniform(rng, VOWELS));

            // Codas close the last syllable more often than inner ones
            let coda_threshold = if i == syllables - 1 { 6 } else { 3 };
            if d10(rng) <= coda_threshold {
                name.push_str(*choose_uniform(rng, CODAS));
            }
        }

        if d10(rng) >= 9 {
            name.push(' ');
            name.push_str(*choose_uniform(rng, SYSTEM_SUFFIXES));
        }
        name
    }

    /// A vessel name such as "Iron Covenant".
    pub fn ship_name(rng: &mut impl RandomSource) -> String {
        let adjective = *choose_uniform(rng, SHIP_ADJECTIVES);
        let noun = *choose_uniform(rng, SHIP_NOUNS);
        format!("{adjective} {noun}")
    }

    /// The `ordinal`-th planet of a system, counting from 1.
    pub fn planet_name(system: &str, ordinal: usize) -> String {
        format!("{} {}", system, roman_numeral(ordinal))
    }

    /// The `ordinal`-th satellite of a body, counting from 1.
    pub fn satellite_name(parent: &str, ordinal: usize) -> String {
        format!("{} {}", parent, ordinal_letters(ordinal))
    }
}

/// Roman numeral for 1..=3999; zero renders as "N".
pub fn roman_numeral(mut value: usize) -> String {
    if value == 0 {
        return "N".to_string();
    }
    const NUMERALS: &[(usize, &str)] = &[
        (1000, "M"), (900, "CM"), (500, "D"), (400, "CD"),
        (100, "C"), (90, "XC"), (50, "L"), (40, "XL"),
        (10, "X"), (9, "IX"), (5, "V"), (4, "IV"), (1, "I"),
    ];
    let mut out = String::new();
    for &(amount, numeral) in NUMERALS {
        while value >= amount {
            out.push_str(numeral);
            value -= amount;
        }
    }
    out
}

/// Spreadsheet-style letters: 1 → a, 26 → z, 27 → aa.
fn ordinal_letters(mut ordinal: usize) -> String {
    let mut letters = Vec::new();
    while ordinal > 0 {
        let rem = (ordinal - 1) % 26;
        letters.push((b'a' + rem as u8) as char);
        ordinal = (ordinal - 1) / 26;
    }
    letters.iter().rev().collect()
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::ScriptedRolls;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_roman_numerals() {
        assert_eq!(roman_numeral(1), "I");
        assert_eq!(roman_numeral(4), "IV");
        assert_eq!(roman_numeral(9), "IX");
        assert_eq!(roman_numeral(14), "XIV");
    }

    #[test]
    fn test_satellite_names_follow_parent() {
        assert_eq!(NameGenerator::satellite_name("Vexis III", 1), "Vexis III a");
        assert_eq!(NameGenerator::satellite_name("Vexis III", 2), "Vexis III b");
        assert_eq!(NameGenerator::satellite_name("Vexis III", 27), "Vexis III aa");
    }

    #[test]
    fn test_system_names_are_capitalized() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..50 {
            let name = NameGenerator::system_name(&mut rng);
            assert!(name.len() >= 2);
            assert!(name.chars().next().is_some_and(|c| c.is_uppercase()), "{name}");
        }
    }

    #[test]
    fn test_system_name_from_script() {
        // Two syllables: k-ae-th, v-a-r, then the first suffix
        let mut rng = ScriptedRolls::new([1, 1, 6, 1, 4, 2, 1, 1, 1, 10, 1]);
        assert_eq!(NameGenerator::system_name(&mut rng), "Kaethvar Prime");
    }
}
