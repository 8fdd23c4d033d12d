//! Region derivation and pixel extraction
//!
//! Turns a finalized drag-corner pair into a whole-pixel [`Region`] and
//! copies the region's pixels out of the source image as row-major
//! interleaved RGB bytes, ready for histogram counting.

use egui::Pos2;
use image::RgbImage;

/// Finalized selection rectangle in whole image pixels.
///
/// Derived from a corner pair whose points lie in the closed image
/// rectangle `[0, W] x [0, H]`, which makes `x + w <= W` and `y + h <= H`
/// hold after truncation: every read in [`extract_region`] stays inside
/// the image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Region {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl Region {
    /// Normalize a drag corner pair: top-left is the per-axis minimum and
    /// the size is the absolute difference, both truncated to whole pixels.
    pub fn from_corners(a: Pos2, b: Pos2) -> Self {
        Self {
            x: a.x.min(b.x) as u32,
            y: a.y.min(b.y) as u32,
            w: (a.x - b.x).abs() as u32,
            h: (a.y - b.y).abs() as u32,
        }
    }

    /// Zero-area regions come from clicks without travel.
    pub fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0
    }
}

/// Pixels copied out of a region: `height` rows of `width` interleaved
/// RGB triples.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegionPixels {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl RegionPixels {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Interleaved RGB bytes in row-major order.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// RGB triple at (row, col).
    pub fn rgb(&self, row: u32, col: u32) -> [u8; 3] {
        let i = 3 * (row * self.width + col) as usize;
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }
}

/// Copy the region's pixels out of `image`, row by row.
///
/// Returns `None` for a zero-area region (a click with no drag) so the
/// caller can clear the histogram instead of computing over nothing.
pub fn extract_region(image: &RgbImage, region: Region) -> Option<RegionPixels> {
    if region.is_empty() {
        return None;
    }

    let mut data = Vec::with_capacity((region.w * region.h * 3) as usize);
    for i in 0..region.h {
        for j in 0..region.w {
            let px = image.get_pixel(region.x + j, region.y + i);
            data.extend_from_slice(&px.0);
        }
    }

    Some(RegionPixels {
        width: region.w,
        height: region.h,
        data,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;
    use image::Rgb;

    #[test]
    fn test_from_corners_normalizes_reversed_drag() {
        let r = Region::from_corners(pos2(80.7, 20.2), pos2(10.5, 60.9));
        assert_eq!(r, Region { x: 10, y: 20, w: 70, h: 40 });
    }

    #[test]
    fn test_from_corners_zero_travel_is_empty() {
        let r = Region::from_corners(pos2(33.3, 44.4), pos2(33.3, 44.4));
        assert_eq!((r.w, r.h), (0, 0));
        assert!(r.is_empty());
    }

    #[test]
    fn test_from_corners_thin_region_is_empty() {
        // Sub-pixel travel truncates to zero width
        let r = Region::from_corners(pos2(10.2, 5.0), pos2(10.9, 45.0));
        assert!(r.is_empty());
    }

    #[test]
    fn test_extract_full_2x2_reproduces_source_pixels() {
        let mut img = RgbImage::new(2, 2);
        img.put_pixel(0, 0, Rgb([10, 20, 30]));
        img.put_pixel(1, 0, Rgb([40, 50, 60]));
        img.put_pixel(0, 1, Rgb([70, 80, 90]));
        img.put_pixel(1, 1, Rgb([100, 110, 120]));

        let px = extract_region(&img, Region { x: 0, y: 0, w: 2, h: 2 })
            .expect("2x2 region is not degenerate");

        assert_eq!(px.width(), 2);
        assert_eq!(px.height(), 2);
        assert_eq!(px.rgb(0, 0), [10, 20, 30]);
        assert_eq!(px.rgb(0, 1), [40, 50, 60], "row 0 col 1 is source pixel (1,0)");
        assert_eq!(px.rgb(1, 0), [70, 80, 90], "row 1 col 0 is source pixel (0,1)");
        assert_eq!(px.rgb(1, 1), [100, 110, 120]);
    }

    #[test]
    fn test_extract_data_is_row_major_interleaved() {
        let mut img = RgbImage::new(2, 1);
        img.put_pixel(0, 0, Rgb([1, 2, 3]));
        img.put_pixel(1, 0, Rgb([4, 5, 6]));

        let px = extract_region(&img, Region { x: 0, y: 0, w: 2, h: 1 }).expect("non-degenerate");
        assert_eq!(px.data(), &[1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_extract_offset_subregion() {
        // Encode the source coordinate into the red channel
        let img = RgbImage::from_fn(4, 3, |x, y| Rgb([(10 * x + y) as u8, 0, 0]));

        let px = extract_region(&img, Region { x: 1, y: 1, w: 2, h: 2 }).expect("non-degenerate");
        assert_eq!(px.rgb(0, 0)[0], 11, "reads start at (region.x, region.y)");
        assert_eq!(px.rgb(0, 1)[0], 21);
        assert_eq!(px.rgb(1, 0)[0], 12);
        assert_eq!(px.rgb(1, 1)[0], 22);
    }

    #[test]
    fn test_extract_corner_on_closed_boundary_stays_in_bounds() {
        // A clipped drag can end exactly at (W, H); the derived region then
        // spans the whole image and the last read is (W-1, H-1)
        let img = RgbImage::from_fn(4, 4, |x, y| Rgb([(x + 4 * y) as u8, 0, 0]));
        let region = Region::from_corners(pos2(0.0, 0.0), pos2(4.0, 4.0));
        assert_eq!(region, Region { x: 0, y: 0, w: 4, h: 4 });

        let px = extract_region(&img, region).expect("non-degenerate");
        assert_eq!(px.rgb(3, 3)[0], 15);
    }

    #[test]
    fn test_extract_degenerate_region_is_none() {
        let img = RgbImage::new(8, 8);
        assert!(extract_region(&img, Region { x: 2, y: 2, w: 0, h: 5 }).is_none());
        assert!(extract_region(&img, Region { x: 2, y: 2, w: 5, h: 0 }).is_none());
    }
}
