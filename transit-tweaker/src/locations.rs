use serde::{Deserialize, Serialize};
use std::fmt;

/// Maps whose transit durations the tweak pass rescales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationId {
    Bigmap,
    Develop,
    Factory4Day,
    Factory4Night,
    Interchange,
    Laboratory,
    Lighthouse,
    Privatearea,
    Rezervbase,
    Shoreline,
    Suburbs,
    Tarkovstreets,
    Terminal,
    Town,
    Woods,
}

impl LocationId {
    /// Every known map, in the order the pass visits them.
    pub const ALL: [Self; 15] = [
        Self::Bigmap,
        Self::Develop,
        Self::Factory4Day,
        Self::Factory4Night,
        Self::Interchange,
        Self::Laboratory,
        Self::Lighthouse,
        Self::Privatearea,
        Self::Rezervbase,
        Self::Shoreline,
        Self::Suburbs,
        Self::Tarkovstreets,
        Self::Terminal,
        Self::Town,
        Self::Woods,
    ];

    /// Key of this map in the server's `locations` table.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Bigmap => "bigmap",
            Self::Develop => "develop",
            Self::Factory4Day => "factory4_day",
            Self::Factory4Night => "factory4_night",
            Self::Interchange => "interchange",
            Self::Laboratory => "laboratory",
            Self::Lighthouse => "lighthouse",
            Self::Privatearea => "privatearea",
            Self::Rezervbase => "rezervbase",
            Self::Shoreline => "shoreline",
            Self::Suburbs => "suburbs",
            Self::Tarkovstreets => "tarkovstreets",
            Self::Terminal => "terminal",
            Self::Town => "town",
            Self::Woods => "woods",
        }
    }

    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.key() == key)
    }
}

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
