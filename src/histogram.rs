//! Per-channel intensity histograms of an extracted region
//!
//! Counts each RGB channel of a [`RegionPixels`] buffer into 256 intensity
//! buckets and compresses the counts with a per-bucket square root, the
//! scaling the plot panel expects.

use crate::region::RegionPixels;

/// Number of intensity buckets per channel (one per 8-bit value).
pub const BUCKETS: usize = 256;

/// One color component of an RGB pixel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    /// Offset of this channel inside an interleaved RGB triple.
    pub fn index(self) -> usize {
        match self {
            Channel::Red => 0,
            Channel::Green => 1,
            Channel::Blue => 2,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Channel::Red => "red",
            Channel::Green => "green",
            Channel::Blue => "blue",
        }
    }
}

/// Square-root-scaled per-channel histogram of a region.
///
/// Bucket `i` of a channel holds `sqrt(count_of_intensity_i)`. The square
/// root compresses the display range so sparse tail buckets stay visible
/// next to dominant peaks; it is applied exactly once per compute.
#[derive(Clone, Debug, PartialEq)]
pub struct RegionHistogram {
    red: [f32; BUCKETS],
    green: [f32; BUCKETS],
    blue: [f32; BUCKETS],
}

impl RegionHistogram {
    /// Count the region's intensities and apply the square-root scaling.
    pub fn compute(pixels: &RegionPixels) -> Self {
        let mut red = [0u32; BUCKETS];
        let mut green = [0u32; BUCKETS];
        let mut blue = [0u32; BUCKETS];

        for px in pixels.data().chunks_exact(3) {
            red[px[0] as usize] += 1;
            green[px[1] as usize] += 1;
            blue[px[2] as usize] += 1;
        }

        Self {
            red: red.map(|n| (n as f32).sqrt()),
            green: green.map(|n| (n as f32).sqrt()),
            blue: blue.map(|n| (n as f32).sqrt()),
        }
    }

    /// Bucket values for one channel.
    pub fn channel(&self, channel: Channel) -> &[f32; BUCKETS] {
        match channel {
            Channel::Red => &self.red,
            Channel::Green => &self.green,
            Channel::Blue => &self.blue,
        }
    }
}
