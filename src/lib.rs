//! roihist - An interactive region-of-interest histogram viewer using egui
//!
//! Load an image, drag a rectangle over it, and the per-channel intensity
//! histogram of the selected pixels appears in a side panel. Drags may wander
//! outside the image; the selection is clipped to the image boundary so the
//! finalized region always addresses real pixels.
//!
//! ## Architecture
//!
//! - `ViewTransform`: maps between display and image coordinate spaces
//! - `SelectionController`: drag state machine that finalizes `Region`s
//! - `ImageCanvas`: egui widget rendering the image and selection overlay
//! - `RegionHistogram` / `HistogramPanel`: per-channel counts and their plot
//! - `HistApp`: eframe shell tying the canvas and panel together

pub mod app;
pub mod boundary;
pub mod histogram;
pub mod plot;
pub mod region;
pub mod selection;
pub mod transform;
pub mod widget;
