//! Curated ENS names used as target words
//!
//! The list is compiled into the binary by the build script. Every entry
//! carries a difficulty, a category, and whether the name is known to have an
//! avatar set.

mod embedded;

pub use embedded::{CURATED, CURATED_COUNT};

use crate::core::{Word, WordError};
use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::warn;

/// How hard a name is to guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Difficulty implied by word length alone: up to 5 easy, up to 8 medium
    #[must_use]
    pub const fn from_length(len: usize) -> Self {
        match len {
            0..=5 => Self::Easy,
            6..=8 => Self::Medium,
            _ => Self::Hard,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

/// What kind of owner a name belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// A person
    Individual,
    /// A protocol, company, or product
    Project,
    /// A plain crypto word
    Generic,
}

impl Category {
    pub const ALL: [Self; 3] = [Self::Individual, Self::Project, Self::Generic];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Individual => "individual",
            Self::Project => "project",
            Self::Generic => "generic",
        }
    }
}

/// Unrecognised difficulty or category name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{value}'")]
pub struct ParseTagError {
    kind: &'static str,
    value: String,
}

impl FromStr for Difficulty {
    type Err = ParseTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseTagError {
                kind: "difficulty",
                value: s.to_string(),
            })
    }
}

impl FromStr for Category {
    type Err = ParseTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseTagError {
                kind: "category",
                value: s.to_string(),
            })
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of the curated list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CuratedName {
    /// Name without the `.eth` suffix
    pub name: &'static str,
    pub difficulty: Difficulty,
    pub category: Category,
    pub has_avatar: bool,
}

impl CuratedName {
    /// The name as a target word
    ///
    /// # Errors
    /// Returns `WordError` if the name contains anything but letters.
    pub fn word(&self) -> Result<Word, WordError> {
        Word::new(self.name)
    }
}

/// Used only if the embedded list holds no suitable entry
const DEFAULT_FALLBACK: CuratedName = CuratedName {
    name: "vitalik",
    difficulty: Difficulty::Medium,
    category: Category::Individual,
    has_avatar: true,
};

/// Pick any curated name
pub fn random_name<R: Rng + ?Sized>(rng: &mut R) -> &'static CuratedName {
    CURATED.choose(rng).unwrap_or_else(fallback_name)
}

/// Pick a name of the given difficulty, or any name if there is none
pub fn random_name_by_difficulty<R: Rng + ?Sized>(
    rng: &mut R,
    difficulty: Difficulty,
) -> &'static CuratedName {
    pick_where(rng, |n| n.difficulty == difficulty).unwrap_or_else(|| {
        warn!(%difficulty, "no names of this difficulty, falling back to any");
        random_name(rng)
    })
}

/// Pick a name of the given category, or any name if there is none
pub fn random_name_by_category<R: Rng + ?Sized>(
    rng: &mut R,
    category: Category,
) -> &'static CuratedName {
    pick_where(rng, |n| n.category == category).unwrap_or_else(|| {
        warn!(%category, "no names in this category, falling back to any");
        random_name(rng)
    })
}

fn pick_where<R, F>(rng: &mut R, predicate: F) -> Option<&'static CuratedName>
where
    R: Rng + ?Sized,
    F: Fn(&CuratedName) -> bool,
{
    let matching: Vec<&'static CuratedName> = CURATED.iter().filter(|n| predicate(*n)).collect();
    matching.choose(rng).copied()
}

/// Whether `name` is on the curated list (case-insensitive)
#[must_use]
pub fn is_curated(name: &str) -> bool {
    metadata(name).is_some()
}

/// Curated entry for `name` (case-insensitive)
#[must_use]
pub fn metadata(name: &str) -> Option<&'static CuratedName> {
    CURATED.iter().find(|n| n.name.eq_ignore_ascii_case(name))
}

/// A dependable name for when selection goes wrong
///
/// Prefers `vitalik` or `ens`, then any easy name with an avatar, then the
/// first entry of the list.
#[must_use]
pub fn fallback_name() -> &'static CuratedName {
    CURATED
        .iter()
        .find(|n| {
            n.name == "vitalik"
                || n.name == "ens"
                || (n.difficulty == Difficulty::Easy && n.has_avatar)
        })
        .or_else(|| CURATED.first())
        .unwrap_or(&DEFAULT_FALLBACK)
}

/// Counts over a name list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListSummary {
    pub total: usize,
    pub easy: usize,
    pub medium: usize,
    pub hard: usize,
    pub individual: usize,
    pub project: usize,
    pub generic: usize,
    pub with_avatars: usize,
    /// Mean name length, rounded
    pub average_length: usize,
}

impl ListSummary {
    #[must_use]
    pub fn of(names: &[CuratedName]) -> Self {
        let mut summary = Self {
            total: names.len(),
            ..Self::default()
        };
        let mut total_length = 0;

        for name in names {
            match name.difficulty {
                Difficulty::Easy => summary.easy += 1,
                Difficulty::Medium => summary.medium += 1,
                Difficulty::Hard => summary.hard += 1,
            }
            match name.category {
                Category::Individual => summary.individual += 1,
                Category::Project => summary.project += 1,
                Category::Generic => summary.generic += 1,
            }
            if name.has_avatar {
                summary.with_avatars += 1;
            }
            total_length += name.name.len();
        }

        if !names.is_empty() {
            summary.average_length = (total_length as f64 / names.len() as f64).round() as usize;
        }
        summary
    }
}

/// Summary of the embedded list
#[must_use]
pub fn summary() -> ListSummary {
    ListSummary::of(CURATED)
}
