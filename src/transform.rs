//! Coordinate mapping between display space and image space
//!
//! This module contains the pure fit-and-center math that positions an image
//! inside a viewport, so it can be unit tested without egui dependencies.
//! Display space is viewport-local (origin at the canvas top-left); image
//! space is pixel coordinates of the decoded image (origin top-left,
//! fractional values allowed).

use egui::{Pos2, Rect, Vec2};

/// Scale factor and centering offset for the current viewport/image pair.
///
/// The mapping is `image = display / scale - offset` and its inverse
/// `display = (image + offset) * scale`. The offset is expressed in
/// image-space units so that scaling distributes over it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewTransform {
    /// Display pixels per image pixel
    pub scale: f32,
    /// Centering translation in image-space units (zero on the tight axis)
    pub offset: Vec2,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self {
            scale: 1.0,
            offset: Vec2::ZERO,
        }
    }
}

impl ViewTransform {
    /// Identity mapping (scale 1, no offset)
    pub fn new() -> Self {
        Self::default()
    }

    /// Scale factor that makes the image just fit the viewport.
    ///
    /// Compares aspect ratios: if the image is relatively wider than the
    /// viewport it is width-limited, so fit to width; otherwise fit to
    /// height. Callers must not pass zero-sized viewports or images.
    pub fn fit_scale(viewport: Vec2, image: Vec2) -> f32 {
        let viewport_aspect = viewport.x / viewport.y;
        let image_aspect = image.x / image.y;
        if image_aspect >= viewport_aspect {
            viewport.x / image.x
        } else {
            viewport.y / image.y
        }
    }

    /// Image-space translation that centers the scaled image along the
    /// slack axis.
    ///
    /// Per axis: `(viewport - image * scale) / (2 * scale)` when the scaled
    /// image leaves slack, else zero. At the fit scale exactly one axis has
    /// slack (or none when aspects match).
    pub fn centering_offset(viewport: Vec2, image: Vec2, scale: f32) -> Vec2 {
        let scaled = image * scale;
        let x = if viewport.x > scaled.x {
            (viewport.x - scaled.x) / (2.0 * scale)
        } else {
            0.0
        };
        let y = if viewport.y > scaled.y {
            (viewport.y - scaled.y) / (2.0 * scale)
        } else {
            0.0
        };
        Vec2::new(x, y)
    }

    /// Compose fit scale and centering offset for a viewport/image pair.
    /// Recomputed whenever either size changes (every frame, in practice).
    pub fn fit(viewport: Vec2, image: Vec2) -> Self {
        let scale = Self::fit_scale(viewport, image);
        Self {
            scale,
            offset: Self::centering_offset(viewport, image, scale),
        }
    }

    /// Map a viewport-local display point to image coordinates.
    pub fn to_image(&self, display: Pos2) -> Pos2 {
        Pos2::new(
            display.x / self.scale - self.offset.x,
            display.y / self.scale - self.offset.y,
        )
    }

    /// Map an image point back to viewport-local display coordinates
    /// (inverse of [`Self::to_image`]).
    pub fn to_display(&self, image: Pos2) -> Pos2 {
        Pos2::new(
            (image.x + self.offset.x) * self.scale,
            (image.y + self.offset.y) * self.scale,
        )
    }

    /// Display rect the image occupies, in absolute screen coordinates.
    /// `origin` is the canvas rect's top-left corner.
    pub fn display_rect(&self, origin: Pos2, image_size: Vec2) -> Rect {
        let min = self.to_display(Pos2::ZERO);
        Rect::from_min_size(origin + min.to_vec2(), image_size * self.scale)
    }
}
