//! Application shell: menu bar, panel layout, and image loading
//!
//! The interesting work happens in the other modules. This file is the glue
//! that opens files, routes finalized selections into the histogram panel,
//! and arranges the egui panels each frame.

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use image::RgbImage;
use log::{debug, error, info};

use crate::histogram::RegionHistogram;
use crate::plot::HistogramPanel;
use crate::region::{extract_region, Region};
use crate::widget::ImageCanvas;

/// Window title, also used as the eframe app name.
pub const APP_NAME: &str = "roihist";

/// File > Open, also reachable from the keyboard.
const OPEN_SHORTCUT: egui::KeyboardShortcut =
    egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::O);

/// Extensions offered by the open dialog.
const IMAGE_EXTENSIONS: [&str; 4] = ["jpeg", "jpg", "png", "bmp"];

/// Top-level application state.
pub struct HistApp {
    canvas: ImageCanvas,
    histogram_panel: HistogramPanel,
    /// View > Histogram panel toggle
    show_histogram: bool,
    /// Path of the currently displayed image, shown in the status line
    image_path: Option<PathBuf>,
    /// Most recent load failure, shown until the next successful load
    error: Option<String>,
    /// Window title update queued for the next frame
    pending_title: Option<String>,
}

impl HistApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, initial_image: Option<PathBuf>) -> Self {
        let mut canvas = ImageCanvas::new();
        canvas.selection_mut().on_finalized(|region| {
            info!(
                "selection finalized: {}x{} at ({}, {})",
                region.w, region.h, region.x, region.y
            );
        });

        let mut app = Self {
            canvas,
            histogram_panel: HistogramPanel::new(),
            show_histogram: true,
            image_path: None,
            error: None,
            pending_title: None,
        };
        if let Some(path) = initial_image {
            app.load_image(path);
        }
        app
    }

    fn open_file_dialog(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Images", &IMAGE_EXTENSIONS)
            .pick_file()
        {
            self.load_image(path);
        }
    }

    /// Decode and display the image at `path`. On failure the current image
    /// and selection stay as they are and the error lands in the status line.
    fn load_image(&mut self, path: PathBuf) {
        match decode_rgb(&path) {
            Ok(image) => {
                info!(
                    "loaded {} ({}x{})",
                    path.display(),
                    image.width(),
                    image.height()
                );
                self.canvas.set_image(image);
                self.histogram_panel.clear();
                self.pending_title = Some(match path.file_name() {
                    Some(name) => format!("{} - {}", name.to_string_lossy(), APP_NAME),
                    None => APP_NAME.to_owned(),
                });
                self.image_path = Some(path);
                self.error = None;
            }
            Err(err) => {
                error!("{err:#}");
                self.error = Some(format!("{err:#}"));
            }
        }
    }

    /// Push a freshly finalized region through extraction into the panel.
    fn update_histogram(&mut self, region: Region) {
        let Some(image) = self.canvas.image() else {
            return;
        };
        match extract_region(image, region) {
            Some(pixels) => self.histogram_panel.set(RegionHistogram::compute(&pixels)),
            None => {
                debug!("degenerate region {region:?}, clearing histogram");
                self.histogram_panel.clear();
            }
        }
    }

    fn top_bar(&mut self, ctx: &egui::Context, ui: &mut egui::Ui) {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                let open = egui::Button::new("Open…")
                    .shortcut_text(ctx.format_shortcut(&OPEN_SHORTCUT));
                if ui.add(open).clicked() {
                    self.open_file_dialog();
                }
            });
            ui.menu_button("View", |ui| {
                ui.checkbox(&mut self.show_histogram, "Histogram panel");
            });

            if let Some(path) = &self.image_path {
                ui.separator();
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string());
                ui.label(name);
                if let Some((width, height)) = self.canvas.dimensions() {
                    ui.separator();
                    ui.label(format!("{width}x{height} px"));
                    ui.separator();
                    ui.label(format!("zoom {:.0}%", self.canvas.view().scale * 100.0));
                }
            }
        });

        if let Some(error) = &self.error {
            ui.colored_label(egui::Color32::RED, format!("⚠ {error}"));
        }
    }
}

impl eframe::App for HistApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(title) = self.pending_title.take() {
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(title));
        }
        if ctx.input_mut(|i| i.consume_shortcut(&OPEN_SHORTCUT)) {
            self.open_file_dialog();
        }

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            self.top_bar(ctx, ui);
        });

        if self.show_histogram {
            egui::SidePanel::right("histogram_panel")
                .default_width(360.0)
                .show(ctx, |ui| {
                    self.histogram_panel.ui(ui);
                });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(region) = self.canvas.ui(ui) {
                self.update_histogram(region);
            }
        });
    }
}

/// Decode any supported image format into 8-bit RGB.
fn decode_rgb(path: &Path) -> anyhow::Result<RgbImage> {
    let image =
        image::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    Ok(image.to_rgb8())
}
