//! Zero-run detection.
//!
//! The scan and the selection are two separate steps: [`zero_runs`] walks
//! the groups once and emits every maximal run of `"0"` groups, then
//! [`find_compression_run`] reduces that list to the single run that will
//! be rendered as `::`.
//!
//! Selection rules:
//!
//! - the longest run wins
//! - on equal length the leftmost run wins (a later run must be strictly
//!   longer to replace the current best)
//! - a run of one group is never compressed
//!
//! ```rust
//! use canonical::{find_compression_run, normalize, validate, CompressionChoice, ZeroRun};
//!
//! let groups = validate("1111:2222:0000:0000:5555:0000:0000:8888").unwrap();
//! let choice = find_compression_run(&normalize(&groups));
//! assert_eq!(choice, CompressionChoice::Run(ZeroRun { start: 2, end: 4 }));
//! ```

use serde::{Deserialize, Serialize};

use crate::normalize::NormalizedGroup;

/// Minimum run length eligible for `::` compression.
pub const MIN_COMPRESSED_RUN: usize = 2;

/// Half-open range `[start, end)` of consecutive zero groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ZeroRun {
    pub start: usize,
    pub end: usize,
}

impl ZeroRun {
    /// Zero for an inverted range (`start > end`).
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// True when the run begins at the first group.
    pub fn touches_start(&self) -> bool {
        self.start == 0
    }

    /// True when the run ends at the last of `total` groups.
    pub fn touches_end(&self, total: usize) -> bool {
        self.end == total
    }
}

/// Outcome of zero-run selection for one address.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompressionChoice {
    /// Every group is rendered.
    #[default]
    None,
    /// This run is replaced by `::`.
    Run(ZeroRun),
}

impl CompressionChoice {
    pub fn run(&self) -> Option<ZeroRun> {
        match self {
            CompressionChoice::None => None,
            CompressionChoice::Run(run) => Some(*run),
        }
    }

    pub fn is_compressed(&self) -> bool {
        matches!(self, CompressionChoice::Run(_))
    }
}

/// Every maximal run of zero groups, left to right.
///
/// Eight groups hold at most four runs, so the result never reallocates.
pub fn zero_runs(groups: &[NormalizedGroup]) -> Vec<ZeroRun> {
    let mut runs = Vec::with_capacity(groups.len().div_ceil(2));
    let mut open: Option<usize> = None;

    for (index, group) in groups.iter().enumerate() {
        match (group.is_zero(), open) {
            (true, None) => open = Some(index),
            (false, Some(start)) => {
                runs.push(ZeroRun { start, end: index });
                open = None;
            }
            _ => {}
        }
    }
    if let Some(start) = open {
        runs.push(ZeroRun {
            start,
            end: groups.len(),
        });
    }

    runs
}

/// Picks the run to compress: longest, leftmost on ties, at least two groups.
pub fn find_compression_run(groups: &[NormalizedGroup]) -> CompressionChoice {
    let best = zero_runs(groups)
        .into_iter()
        .fold(None::<ZeroRun>, |best, run| match best {
            Some(current) if run.len() <= current.len() => Some(current),
            _ => Some(run),
        });

    match best {
        Some(run) if run.len() >= MIN_COMPRESSED_RUN => CompressionChoice::Run(run),
        _ => CompressionChoice::None,
    }
}
