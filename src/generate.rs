//! Plate-like fixture strings for exercising the scorer: valid plates in the
//! `KA01AB1234` layout, noisy re-reads of a plate, and strings in unrelated
//! formats. Every function takes the RNG explicitly so callers can seed it.
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

pub const STATE_CODES: [&str; 7] = ["KA", "MH", "DL", "TN", "UP", "RJ", "GJ"];

const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";
const LETTERS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";
const UPPER_ALNUM: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Leading characters a noisy variant keeps from its source plate
pub const NOISY_PREFIX_LEN: usize = 6;

fn random_from<R: Rng + ?Sized>(rng: &mut R, alphabet: &[u8], k: usize) -> String {
    (0..k)
        .map(|_| alphabet[rng.gen_range(0..alphabet.len())] as char)
        .collect()
}

/// State code, 2-digit RTO code, 2 series letters, 4-digit number.
pub fn generate_valid_plate<R: Rng + ?Sized>(rng: &mut R) -> String {
    let state = STATE_CODES.choose(rng).copied().unwrap_or(STATE_CODES[0]);
    let rto: u32 = rng.gen_range(1..=99);
    let series = random_from(rng, UPPERCASE, 2);
    let number: u32 = rng.gen_range(0..=9999);
    format!("{state}{rto:02}{series}{number:04}")
}

/// Keep the first six characters of `plate` and redraw the rest from
/// `A-Z0-9`.
pub fn noisy_variant<R: Rng + ?Sized>(plate: &str, rng: &mut R) -> String {
    let prefix: String = plate.chars().take(NOISY_PREFIX_LEN).collect();
    let tail_len = plate.chars().count().saturating_sub(NOISY_PREFIX_LEN);
    prefix + &random_from(rng, UPPER_ALNUM, tail_len)
}

/// A string in one of several formats no valid plate follows.
pub fn generate_invalid_plate<R: Rng + ?Sized>(rng: &mut R) -> String {
    match rng.gen_range(0..5) {
        0 => random_from(rng, DIGITS, 10),
        1 => random_from(rng, LETTERS, 10),
        2 => format!("XX{}", rng.gen_range(100_000..=999_999)),
        3 => "12345678".to_string(),
        _ => "INVALID!!".to_string(),
    }
}

/// A generated pair and whether the two strings describe the same plate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedPair {
    pub first: String,
    pub second: String,
    pub same_plate: bool,
}

/// `n` plate/noisy-variant pairs followed by `n` plate/invalid pairs.
pub fn generate_pairs<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Vec<GeneratedPair> {
    let mut pairs = Vec::with_capacity(n * 2);
    for _ in 0..n {
        let first = generate_valid_plate(rng);
        let second = noisy_variant(&first, rng);
        pairs.push(GeneratedPair {
            first,
            second,
            same_plate: true,
        });
    }
    for _ in 0..n {
        let second = generate_invalid_plate(rng);
        pairs.push(GeneratedPair {
            first: generate_valid_plate(rng),
            second,
            same_plate: false,
        });
    }
    pairs
}

/// Render pairs in the comma-separated pairs-file format.
pub fn pairs_to_text(pairs: &[GeneratedPair]) -> String {
    let mut out = String::from("# first,second\n");
    for p in pairs {
        out.push_str(&p.first);
        out.push(',');
        out.push_str(&p.second);
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn valid_plate_layout() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let plate = generate_valid_plate(&mut rng);
            let bytes = plate.as_bytes();
            assert_eq!(bytes.len(), 10, "{plate}");
            assert!(STATE_CODES.contains(&&plate[..2]));
            assert!(bytes[2..4].iter().all(u8::is_ascii_digit));
            assert_ne!(&plate[2..4], "00");
            assert!(bytes[4..6].iter().all(u8::is_ascii_uppercase));
            assert!(bytes[6..].iter().all(u8::is_ascii_digit));
        }
    }

    #[test]
    fn noisy_variant_keeps_prefix() {
        let mut rng = StdRng::seed_from_u64(11);
        let noisy = noisy_variant("KA01AB1234", &mut rng);
        assert_eq!(noisy.len(), 10);
        assert!(noisy.starts_with("KA01AB"));
        assert!(noisy[6..].bytes().all(|b| UPPER_ALNUM.contains(&b)));
    }

    #[test]
    fn pairs_text_round_trips_through_reader() {
        let mut rng = StdRng::seed_from_u64(3);
        let pairs = generate_pairs(&mut rng, 5);
        assert_eq!(pairs.len(), 10);
        assert!(pairs[..5].iter().all(|p| p.same_plate));
        assert!(pairs[5..].iter().all(|p| !p.same_plate));

        let parsed = crate::io::parse_pairs(&pairs_to_text(&pairs)).unwrap();
        assert_eq!(parsed.len(), 10);
        assert_eq!(parsed[0].first, pairs[0].first);
        assert_eq!(parsed[9].second, pairs[9].second);
    }
}
