//! ImageCanvas - a self-contained egui widget for image display and region selection
//!
//! The canvas owns the decoded image, its GPU texture, the fit-to-viewport
//! transform, and the drag state machine. Each frame it refits the image to
//! the available space, feeds primary-button drag events to the selection
//! controller, and paints the live rubber band and the committed rectangle.
//! The pure geometry lives in [`crate::transform`] and [`crate::boundary`].

use egui::{
    Color32, ColorImage, PointerButton, Pos2, Sense, Stroke, StrokeKind, TextureHandle,
    TextureOptions, Ui, Vec2,
};
use image::RgbImage;
use log::debug;

use crate::region::Region;
use crate::selection::SelectionController;
use crate::transform::ViewTransform;

/// Margin subtracted from each viewport dimension before fitting
const FIT_MARGIN: f32 = 2.0;
/// Selection stroke width in display pixels before quantization
const STROKE_WIDTH: f32 = 5.0;
/// Drag-corner marker diameter in display pixels
const MARKER_SIZE: f32 = 8.0;
/// Selection green, RGBA (0, 255, 0, 128) stored premultiplied
const SELECTION_COLOR: Color32 = Color32::from_rgba_premultiplied(0, 128, 0, 128);

/// Central canvas widget: displays the image fit to the available space and
/// turns primary-button drags into finalized regions.
pub struct ImageCanvas {
    // === Image data ===
    /// Decoded RGB image, replaced on every successful open
    image: Option<RgbImage>,
    /// GPU texture of `image`; rebuilt when `texture_dirty`
    texture: Option<TextureHandle>,
    texture_dirty: bool,

    // === View and selection state ===
    /// Fit transform, recomputed each frame from the available rect
    view: ViewTransform,
    /// Drag state machine producing finalized regions
    selection: SelectionController,
}

impl Default for ImageCanvas {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageCanvas {
    pub fn new() -> Self {
        Self {
            image: None,
            texture: None,
            texture_dirty: false,
            view: ViewTransform::new(),
            selection: SelectionController::new(),
        }
    }

    /// Replace the displayed image. Any selection state belongs to the old
    /// image and is dropped.
    pub fn set_image(&mut self, image: RgbImage) {
        debug!("canvas image set to {}x{}", image.width(), image.height());
        self.image = Some(image);
        self.texture_dirty = true;
        self.selection.clear();
    }

    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }

    pub fn image(&self) -> Option<&RgbImage> {
        self.image.as_ref()
    }

    pub fn dimensions(&self) -> Option<(u32, u32)> {
        self.image.as_ref().map(|img| (img.width(), img.height()))
    }

    /// Transform of the most recent frame (for status display).
    pub fn view(&self) -> &ViewTransform {
        &self.view
    }

    /// Access the selection controller, e.g. to register observers.
    pub fn selection_mut(&mut self) -> &mut SelectionController {
        &mut self.selection
    }

    fn rebuild_texture(&mut self, ctx: &egui::Context) {
        if let Some(image) = &self.image {
            let color_image = ColorImage::from_rgb(
                [image.width() as usize, image.height() as usize],
                image.as_raw(),
            );
            self.texture = Some(ctx.load_texture("image", color_image, TextureOptions::NEAREST));
        }
    }

    /// Render the canvas and process this frame's pointer events.
    /// Returns the region finalized by a drag that ended this frame.
    pub fn ui(&mut self, ui: &mut Ui) -> Option<Region> {
        let ctx = ui.ctx().clone();
        if self.texture_dirty {
            self.texture_dirty = false;
            self.rebuild_texture(&ctx);
        }

        let (rect, response) = ui.allocate_exact_size(ui.available_size(), Sense::drag());

        let Some((img_w, img_h)) = self.dimensions() else {
            let painter = ui.painter_at(rect);
            painter.text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                "No image loaded - use File > Open",
                egui::FontId::default(),
                ui.style().visuals.text_color(),
            );
            return None;
        };
        let image_size = Vec2::new(img_w as f32, img_h as f32);

        // Refit to the current rect; the margin keeps a sliver of breathing
        // room and the clamp keeps the scale positive for tiny viewports
        let viewport = (rect.size() - Vec2::splat(FIT_MARGIN)).max(Vec2::splat(1.0));
        self.view = ViewTransform::fit(viewport, image_size);

        let painter = ui.painter_at(rect);
        if let Some(texture) = &self.texture {
            painter.image(
                texture.id(),
                self.view.display_rect(rect.min, image_size),
                egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                Color32::WHITE,
            );
        }

        // Pointer events, in viewport-local display coordinates
        let local = |p: Pos2| (p - rect.min).to_pos2();
        if response.drag_started_by(PointerButton::Primary) {
            if let Some(pos) = response.interact_pointer_pos() {
                self.selection.pointer_down(local(pos), &self.view, image_size);
            }
        }
        if response.dragged_by(PointerButton::Primary) {
            if let Some(pos) = response.interact_pointer_pos() {
                if self.selection.pointer_move(local(pos), &self.view, image_size) {
                    ctx.request_repaint();
                }
            }
        }
        let finalized = if response.drag_stopped_by(PointerButton::Primary) {
            self.selection.pointer_up()
        } else {
            None
        };

        if let Some((a, b)) = self.selection.committed_corners() {
            self.paint_selection(&painter, rect.min, a, b);
        }
        if let Some((a, b)) = self.selection.live_corners() {
            self.paint_selection(&painter, rect.min, a, b);
        }

        finalized
    }

    /// Outline a corner pair plus its two drag-corner markers.
    fn paint_selection(&self, painter: &egui::Painter, origin: Pos2, a: Pos2, b: Pos2) {
        let scale = self.view.scale;
        // Width is quantized in image units, so it stays near STROKE_WIDTH
        // on screen until high zoom makes whole image pixels dominate
        let stroke_width = (STROKE_WIDTH / scale).round().max(1.0) * scale;
        let stroke = Stroke::new(stroke_width, SELECTION_COLOR);

        let pa = origin + self.view.to_display(a).to_vec2();
        let pb = origin + self.view.to_display(b).to_vec2();
        painter.rect_stroke(egui::Rect::from_two_pos(pa, pb), 0.0, stroke, StrokeKind::Middle);

        // Markers keep a constant on-screen size regardless of zoom
        let radius = MARKER_SIZE / 2.0;
        painter.circle_stroke(pa, radius, stroke);
        painter.circle_stroke(pb, radius, stroke);
    }
}
