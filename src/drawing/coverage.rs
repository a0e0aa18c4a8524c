use {
  crate::geometry::{PixelSpace, Region, Viewport},
  euclid::{Box2D, Point2D, Vector2D as V2},
  num_complex::Complex64,
  rayon::prelude::*
};

/// Pixels of the plotting area and the part of the plane they show.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PixelMap {
  /// backend pixels, `max` excluded
  pub pixels: Box2D<i32, PixelSpace>,
  pub viewport: Viewport<f64>
}

impl PixelMap {
  /// Point of the plane under the center of `pixel`. Pixel rows grow downwards.
  pub fn to_plane(&self, pixel: Point2D<i32, PixelSpace>) -> Complex64 {
    let size = self.pixels.size().to_f64();
    let offset = (pixel - self.pixels.min).to_f64() + V2::splat(0.5);
    let Box2D { min, max } = self.viewport.bounds;
    Complex64::new(
      min.x + offset.x / size.width * self.viewport.width(),
      max.y - offset.y / size.height * self.viewport.height()
    )
  }
}

/// Pixels whose center lies inside `region`. Rows are evaluated in parallel.
pub fn coverage<R>(map: &PixelMap, region: &R) -> Vec<Point2D<i32, PixelSpace>>
  where R: Region<f64> + Sync {
  map.pixels.y_range()
    .into_par_iter()
    .flat_map_iter(move |y| map.pixels.x_range()
      .map(move |x| Point2D::new(x, y))
      .filter(move |&pixel| region.contains(map.to_plane(pixel))))
    .collect()
}
