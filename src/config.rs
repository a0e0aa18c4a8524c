//! Problem instance and canvas layout.

use {
  crate::{
    geometry::{Disk, Intersection, PixelSpace, Sector, Viewport},
    sampling::{self, Solution}
  },
  anyhow::{bail, Context, Result},
  euclid::Size2D,
  num_complex::Complex64,
  std::f64::consts::PI
};

/// `|z - (2+3i)| < 3` and `|arg(z - (4-i))| < 2π/3`, 1000 boundary samples.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Problem {
  pub disk: Disk<f64>,
  pub sector: Sector<f64>,
  pub samples: usize
}

impl Default for Problem {
  fn default() -> Self {
    Self {
      disk: Disk::new(Complex64::new(2.0, 3.0), 3.0),
      sector: Sector::new(Complex64::new(4.0, -1.0), 2.0 * PI / 3.0),
      samples: 1000
    }
  }
}

impl Problem {
  /// Both constraints at once.
  pub fn region(&self) -> Intersection<Disk<f64>, Sector<f64>> {
    Intersection { r1: self.disk, r2: self.sector }
  }

  /// Boundary samples of the disk lying inside the sector.
  pub fn solve(&self) -> Solution {
    sampling::solve(&self.disk, self.samples, &self.sector)
  }
}

/// Canvas geometry. The plotting area keeps equal aspect: one unit of the plane spans
/// `density` pixels along both axes.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Layout {
  pub viewport: Viewport<f64>,
  /// pixels per unit
  pub density: u32,
  pub margin: u32,
  /// height of the title strip
  pub title_height: u32,
  /// width of the tick label areas, left and bottom
  pub label_area: u32
}

impl Default for Layout {
  fn default() -> Self {
    Self {
      viewport: Viewport::new(-2.0..8.0, -6.0..8.0),
      density: 70,
      margin: 20,
      title_height: 60,
      label_area: 60
    }
  }
}

impl Layout {
  /// Largest canvas, in pixels, a layout may ask for.
  pub const MAX_PIXELS: u64 = 1 << 28;

  pub fn plot_size(&self) -> Result<Size2D<u32, PixelSpace>> {
    let density = self.density as f64;
    let side = |len: f64| -> Result<u32> {
      let px = (len * density).round();
      if !(0.0..=u32::MAX as f64).contains(&px) {
        bail!("plot side of {} px is out of range", px);
      }
      Ok(px as u32)
    };
    Ok(Size2D::new(side(self.viewport.width())?, side(self.viewport.height())?))
  }

  /// Plotting area plus margins, label areas and the title strip.
  pub fn canvas_size(&self) -> Result<Size2D<u32, PixelSpace>> {
    let plot = self.plot_size()?;
    let frame = self.margin.checked_mul(2)
      .and_then(|m| m.checked_add(self.label_area))
      .context("layout margins overflow")?;
    let size = plot.width.checked_add(frame)
      .zip(plot.height.checked_add(frame).and_then(|h| h.checked_add(self.title_height)))
      .map(|(width, height)| Size2D::new(width, height))
      .context("canvas size overflows")?;
    let pixels = size.width as u64 * size.height as u64;
    if pixels > Self::MAX_PIXELS {
      bail!("canvas of {}x{} px is too large, lower the density", size.width, size.height);
    }
    Ok(size)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test] fn default_problem() {
    let problem = Problem::default();
    assert_eq!(problem.disk.center, Complex64::new(2.0, 3.0));
    assert_eq!(problem.disk.radius, 3.0);
    assert_eq!(problem.sector.vertex, Complex64::new(4.0, -1.0));
    assert!((problem.sector.half_angle.to_degrees() - 120.0).abs() < 1e-9);
    assert_eq!(problem.samples, 1000);
  }

  #[test] fn canvas_keeps_aspect() -> Result<()> {
    let layout = Layout::default();
    assert_eq!(layout.plot_size()?, Size2D::new(700, 980));
    assert_eq!(layout.canvas_size()?, Size2D::new(800, 1140));

    let layout = Layout { density: 10, ..layout };
    assert_eq!(layout.plot_size()?, Size2D::new(100, 140));
    Ok(())
  }

  #[test] fn oversized_canvas_is_an_error() {
    // 70100 x 98160 px, its area overflows u32
    assert!(Layout { density: 7000, ..Layout::default() }.canvas_size().is_err());
    assert!(Layout { density: u32::MAX, ..Layout::default() }.canvas_size().is_err());
    assert!(Layout { margin: u32::MAX, ..Layout::default() }.canvas_size().is_err());
    // 1300 x 1840 px
    assert!(Layout { density: 120, ..Layout::default() }.canvas_size().is_ok());
  }
}
