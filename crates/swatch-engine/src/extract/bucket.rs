//! Quantization buckets and frequency counting.

use std::collections::HashMap;

use crate::color::Color;

/// Bucket width per channel.
pub const QUANTIZATION_STEP: u8 = 5;

/// Pixels with alpha below this never contribute.
pub const OPAQUE_THRESHOLD: u8 = 128;

/// Snap a channel to the nearest multiple of [`QUANTIZATION_STEP`].
///
/// Channels are integers, so `v / 5` never lands exactly on a half and
/// the result never exceeds 255.
#[inline]
pub fn quantize_channel(v: u8) -> u8 {
    let step = QUANTIZATION_STEP as u16;
    (((v as u16 + step / 2) / step) * step) as u8
}

/// Quantize each channel independently.
#[inline]
pub fn quantize(r: u8, g: u8, b: u8) -> Color {
    Color::new(quantize_channel(r), quantize_channel(g), quantize_channel(b))
}

/// Frequency count per bucket, remembering first-seen order so that ties
/// rank deterministically.
#[derive(Debug, Default)]
pub struct BucketTally {
    index: HashMap<Color, usize>,
    counts: Vec<(Color, u32)>,
}

impl BucketTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one RGBA pixel. Returns `false` if it was skipped as transparent.
    pub fn add_pixel(&mut self, [r, g, b, a]: [u8; 4]) -> bool {
        if a < OPAQUE_THRESHOLD {
            return false;
        }
        let key = quantize(r, g, b);
        match self.index.get(&key) {
            Some(&slot) => self.counts[slot].1 += 1,
            None => {
                self.index.insert(key, self.counts.len());
                self.counts.push((key, 1));
            }
        }
        true
    }

    /// Number of distinct buckets seen.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Buckets by descending frequency; equal counts keep first-seen order.
    pub fn into_ranked(self) -> Vec<(Color, u32)> {
        let mut ranked = self.counts;
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }
}
