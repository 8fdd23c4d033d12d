//! Histogram side panel
//!
//! Caches the most recent [`RegionHistogram`] and renders it as three
//! colored curves, one per channel, on a static chart. Values are computed
//! in [`crate::histogram`]; this panel only draws them.

use egui::Color32;
use egui_plot::{Corner, Legend, Line, Plot};

use crate::histogram::{Channel, RegionHistogram, BUCKETS};

fn channel_color(channel: Channel) -> Color32 {
    match channel {
        Channel::Red => Color32::RED,
        Channel::Green => Color32::GREEN,
        Channel::Blue => Color32::BLUE,
    }
}

/// Right-hand panel showing the histogram of the last committed region.
#[derive(Default)]
pub struct HistogramPanel {
    histogram: Option<RegionHistogram>,
}

impl HistogramPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the displayed histogram (called on every commit).
    pub fn set(&mut self, histogram: RegionHistogram) {
        self.histogram = Some(histogram);
    }

    /// Show an empty chart (degenerate region, or a new image loaded).
    pub fn clear(&mut self) {
        self.histogram = None;
    }

    pub fn has_data(&self) -> bool {
        self.histogram.is_some()
    }

    pub fn ui(&self, ui: &mut egui::Ui) {
        let Some(hist) = &self.histogram else {
            ui.centered_and_justified(|ui| {
                ui.label("Drag a region on the image to plot its histogram");
            });
            return;
        };

        Plot::new("region_histogram")
            .allow_drag(false)
            .allow_zoom(false)
            .allow_scroll(false)
            .allow_boxed_zoom(false)
            .x_axis_label("intensity")
            .y_axis_label("sqrt(count)")
            .include_x(0.0)
            .include_x((BUCKETS - 1) as f64)
            .include_y(0.0)
            .legend(Legend::default().position(Corner::RightTop))
            .show(ui, |plot_ui| {
                for channel in Channel::ALL {
                    let points: Vec<[f64; 2]> = hist
                        .channel(channel)
                        .iter()
                        .enumerate()
                        .map(|(i, &v)| [i as f64, v as f64])
                        .collect();
                    plot_ui.line(Line::new(channel.name(), points).color(channel_color(channel)));
                }
            });
    }
}
