//! Shared types and enums used across platesim.
//! Includes the per-position `Marker`, the `MatchMask` built from it,
//! the threshold `Verdict`, and the `OutputFormat` selected on the CLI.
use clap::ValueEnum;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Default similarity threshold, in percent, above which two strings are
/// considered the same plate.
pub const SIMILARITY_THRESHOLD: f64 = 70.0;

#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Marker {
    Match,
    Mismatch,
}

impl Marker {
    pub fn as_char(self) -> char {
        match self {
            Marker::Match => '*',
            Marker::Mismatch => 'x',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '*' => Some(Marker::Match),
            'x' => Some(Marker::Mismatch),
            _ => None,
        }
    }
}

impl std::fmt::Display for Marker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// One marker per aligned position. Serializes as a `*`/`x` string.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct MatchMask(Vec<Marker>);

impl MatchMask {
    pub fn new(markers: Vec<Marker>) -> Self {
        Self(markers)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn markers(&self) -> &[Marker] {
        &self.0
    }

    pub fn matches(&self) -> usize {
        self.0.iter().filter(|m| **m == Marker::Match).count()
    }
}

impl std::fmt::Display for MatchMask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for marker in &self.0 {
            write!(f, "{}", marker)?;
        }
        Ok(())
    }
}

impl std::str::FromStr for MatchMask {
    type Err = char;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        s.chars()
            .map(|c| Marker::from_char(c).ok_or(c))
            .collect::<std::result::Result<Vec<_>, _>>()
            .map(MatchMask)
    }
}

impl Serialize for MatchMask {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MatchMask {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse::<MatchMask>()
            .map_err(|c| serde::de::Error::custom(format!("invalid mask marker {:?}", c)))
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Verdict {
    Match,
    NoMatch,
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Match => write!(f, "MATCH"),
            Verdict::NoMatch => write!(f, "NO MATCH"),
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
pub enum OutputFormat {
    Text,
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "Text"),
            OutputFormat::Json => write!(f, "Json"),
        }
    }
}
