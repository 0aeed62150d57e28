//! Greedy selection of mutually distinct dominant buckets.
//!
//! The dominant bucket is always taken. Up to [`MAX_PASSES`] scans then add
//! buckets farther than the current threshold from everything selected so
//! far, halving the threshold after each scan. Remaining slots are filled
//! by frequency alone.

use crate::color::Color;
use crate::metrics::rgb_distance;

/// Number of colors an extraction returns at most.
pub const PALETTE_SIZE: usize = 5;

/// Distance threshold for the first scan.
pub const INITIAL_MIN_DISTANCE: f64 = 45.0;

/// Number of distinctness scans before falling back to raw frequency.
pub const MAX_PASSES: usize = 3;

/// Pick up to [`PALETTE_SIZE`] colors from buckets ranked by frequency.
pub fn select_distinct(ranked: &[Color]) -> Vec<Color> {
    let mut palette: Vec<Color> = Vec::with_capacity(PALETTE_SIZE);

    let Some(&dominant) = ranked.first() else {
        return palette;
    };
    palette.push(dominant);

    let mut min_distance = INITIAL_MIN_DISTANCE;
    let mut passes = 0;
    while palette.len() < PALETTE_SIZE && passes < MAX_PASSES {
        for &candidate in ranked {
            if palette.len() >= PALETTE_SIZE {
                break;
            }
            if palette.contains(&candidate) {
                continue;
            }
            if palette
                .iter()
                .all(|&picked| rgb_distance(candidate, picked) > min_distance)
            {
                palette.push(candidate);
            }
        }
        min_distance /= 2.0;
        passes += 1;
    }

    for &candidate in ranked {
        if palette.len() >= PALETTE_SIZE {
            break;
        }
        if !palette.contains(&candidate) {
            palette.push(candidate);
        }
    }

    palette
}
