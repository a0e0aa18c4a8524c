//! Regions of the complex plane.
//!
//! A region is an open subset of ℂ given by its membership predicate. Points are
//! [`Complex`] numbers; rectangles use `euclid` boxes in the [`ComplexPlane`] basis, where
//! `x = Re(z)` and `y = Im(z)`.

use {
  std::ops::Range,
  euclid::{Box2D, Point2D},
  num_complex::Complex,
  num_traits::Float
};

pub mod shapes;
pub use shapes::*;

/// Data coordinate basis
#[derive(Debug, Copy, Clone)]
pub struct ComplexPlane;
/// Pixel coordinate basis
#[derive(Debug, Copy, Clone)]
pub struct PixelSpace;

/// An open subset of the complex plane.
pub trait Region<T> {
  fn contains(&self, z: Complex<T>) -> bool;

  /// Points contained in both regions.
  fn intersection<R>(self, other: R) -> Intersection<Self, R> where Self: Sized {
    Intersection { r1: self, r2: other }
  }
}

impl<T, F> Region<T> for F where F: Fn(Complex<T>) -> bool {
  fn contains(&self, z: Complex<T>) -> bool {
    self(z)
  }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Intersection<R1, R2> {
  pub r1: R1,
  pub r2: R2
}

impl<T, R1, R2> Region<T> for Intersection<R1, R2>
  where T: Copy,
        R1: Region<T>,
        R2: Region<T> {
  fn contains(&self, z: Complex<T>) -> bool {
    self.r1.contains(z) && self.r2.contains(z)
  }}

/// Visible rectangle of the plane, boundary included.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport<T> {
  pub bounds: Box2D<T, ComplexPlane>
}

impl<T: Float> Viewport<T> {
  pub fn new(re: Range<T>, im: Range<T>) -> Self {
    Self {
      bounds: Box2D::new(
        Point2D::new(re.start, im.start),
        Point2D::new(re.end, im.end)
      )
    }
  }

  pub fn re_range(&self) -> Range<T> {
    self.bounds.min.x..self.bounds.max.x
  }

  pub fn im_range(&self) -> Range<T> {
    self.bounds.min.y..self.bounds.max.y
  }

  pub fn width(&self) -> T {
    self.bounds.width()
  }

  pub fn height(&self) -> T {
    self.bounds.height()
  }

  pub fn contains(&self, z: Complex<T>) -> bool {
    let Box2D { min, max } = self.bounds;
    z.re >= min.x && z.re <= max.x &&
    z.im >= min.y && z.im <= max.y
  }

  /// Liang-Barsky clipping of the segment `a -> b`.
  /// Returns `None` if the segment lies entirely outside.
  pub fn clip_segment(&self, a: Complex<T>, b: Complex<T>) -> Option<(Complex<T>, Complex<T>)> {
    let Box2D { min, max } = self.bounds;
    let d = b - a;
    let (mut t0, mut t1) = (T::zero(), T::one());
    let edges = [
      (-d.re, a.re - min.x),
      (d.re, max.x - a.re),
      (-d.im, a.im - min.y),
      (d.im, max.y - a.im),
    ];
    for (p, q) in edges {
      if p == T::zero() {
        // parallel to this edge
        if q < T::zero() { return None; }
        continue;
      }
      let r = q / p;
      if p < T::zero() {
        if r > t1 { return None; }
        t0 = t0.max(r);
      } else {
        if r < t0 { return None; }
        t1 = t1.min(r);
      }
    }
    Some((a + d.scale(t0), a + d.scale(t1)))
  }
}
