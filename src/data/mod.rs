//! Bundled sample datasets.

use crate::domain::Dataset;

pub mod wineind;

pub use wineind::load_wineind;

impl Dataset {
    /// Load this dataset's values.
    pub fn load(self) -> Vec<i64> {
        match self {
            Dataset::Wineind => load_wineind(),
        }
    }
}
