//! Embedded curated name list
//!
//! Generated at build time from `data/curated_names.csv`.

use super::{Category, CuratedName, Difficulty};

include!(concat!(env!("OUT_DIR"), "/curated.rs"));
