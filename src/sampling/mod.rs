//! Boundary sampling of a disk against a region predicate.
//!
//! The disk's boundary circle is walked at `n` evenly spaced parameters over a full turn,
//! and every sample lying inside the region is kept. The result is a [`Solution`]: the
//! part of the circle that satisfies both constraints, as parallel coordinate sequences.

use {
  crate::geometry::{Disk, Region, Viewport},
  itertools::iproduct,
  num_complex::Complex64,
  std::f64::consts::TAU
};


/// `n` evenly spaced values over `[start, end]`, both ends included.
pub fn linspace(start: f64, end: f64, n: usize) -> impl Iterator<Item = f64> + Clone {
  let step = if n > 1 { (end - start) / (n - 1) as f64 } else { 0.0 };
  (0..n).map(move |k| start + step * k as f64)
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Sample {
  pub index: usize,
  /// circle parameter, in `[0, 2π]`
  pub t: f64,
  pub z: Complex64
}

/// Samples of the boundary circle. The first and the last sample coincide.
pub fn sample_boundary(disk: &Disk<f64>, n: usize) -> impl Iterator<Item = Sample> + '_ {
  linspace(0.0, TAU, n)
    .enumerate()
    .map(move |(index, t)| Sample { index, t, z: disk.boundary_point(t) })
}

/// Accepted boundary samples.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Solution {
  /// total number of samples taken
  pub samples: usize,
  pub indices: Vec<usize>,
  pub t: Vec<f64>,
  pub re: Vec<f64>,
  pub im: Vec<f64>
}

impl Solution {
  fn push(&mut self, sample: Sample) {
    self.indices.push(sample.index);
    self.t.push(sample.t);
    self.re.push(sample.z.re);
    self.im.push(sample.z.im);
  }

  pub fn len(&self) -> usize {
    self.indices.len()
  }

  pub fn is_empty(&self) -> bool {
    self.indices.is_empty()
  }

  pub fn points(&self) -> impl Iterator<Item = Complex64> + '_ {
    self.re.iter()
      .zip(&self.im)
      .map(|(&re, &im)| Complex64::new(re, im))
  }

  pub fn iter(&self) -> impl Iterator<Item = Sample> + '_ {
    itertools::izip!(&self.indices, &self.t, self.points())
      .map(|(&index, &t, z)| Sample { index, t, z })
  }

  /// Split into runs of consecutive samples.
  ///
  /// A run touching the end of the parameter range continues into a run starting at `t = 0`;
  /// such runs are joined, so a polyline through each arc never crosses a rejected gap.
  pub fn arcs(&self) -> Vec<Vec<Complex64>> {
    let mut arcs: Vec<Vec<Complex64>> = vec![];
    let mut prev: Option<usize> = None;
    for sample in self.iter() {
      let continues = prev.map_or(false, |p| sample.index == p + 1);
      match arcs.last_mut() {
        Some(arc) if continues => arc.push(sample.z),
        _ => arcs.push(vec![sample.z])
      }
      prev = Some(sample.index);
    }

    let wraps = self.indices.first() == Some(&0)
      && self.indices.last() == Some(&(self.samples - 1));
    if wraps && arcs.len() > 1 {
      let head = arcs.remove(0);
      if let Some(tail) = arcs.last_mut() {
        // sample 0 duplicates the last sample
        tail.extend(head.into_iter().skip(1));
      }
    }
    arcs
  }
}

/// Sample `n` points of the boundary of `disk` and keep those inside `region`.
pub fn solve(disk: &Disk<f64>, n: usize, region: &impl Region<f64>) -> Solution {
  let mut solution = Solution { samples: n, ..Default::default() };
  sample_boundary(disk, n)
    .filter(|sample| region.contains(sample.z))
    .for_each(|sample| solution.push(sample));
  solution
}

/// Area of `region ∩ viewport`, counting grid cells of side `step` whose center lies inside.
///
/// `None` unless `step` is positive and finite.
pub fn estimate_area(region: &impl Region<f64>, viewport: &Viewport<f64>, step: f64) -> Option<f64> {
  if !(step.is_finite() && step > 0.0) {
    return None;
  }
  let cells = |len: f64| (len / step).round() as usize;
  let origin = viewport.bounds.min;
  let inside = iproduct!(0..cells(viewport.height()), 0..cells(viewport.width()))
    .map(|(j, i)| Complex64::new(
      origin.x + (i as f64 + 0.5) * step,
      origin.y + (j as f64 + 0.5) * step
    ))
    .filter(|&z| region.contains(z))
    .count();
  Some(inside as f64 * step * step)
}
