use {
  super::Region,
  num_complex::Complex,
  num_traits::Float
};

/// Open disk `|z - center| < radius`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Disk<T> {
  pub center: Complex<T>,
  pub radius: T
}

/// Open sector `|arg(z - vertex)| < half_angle`, symmetric around the positive real direction.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Sector<T> {
  pub vertex: Complex<T>,
  pub half_angle: T
}

/// One of the two rays bounding a [`Sector`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Edge {
  /// at `-half_angle`
  Lower,
  /// at `+half_angle`
  Upper
}

impl<T: Float> Disk<T> {
  pub fn new(center: Complex<T>, radius: T) -> Self {
    Self { center, radius }
  }

  /// `center + radius * e^(it)`
  pub fn boundary_point(&self, t: T) -> Complex<T> {
    self.center + Complex::from_polar(self.radius, t)
  }
}

impl<T: Float> Region<T> for Disk<T> {
  fn contains(&self, z: Complex<T>) -> bool {
    (z - self.center).norm() < self.radius
  }
}

impl<T: Float> Sector<T> {
  pub fn new(vertex: Complex<T>, half_angle: T) -> Self {
    Self { vertex, half_angle }
  }

  /// Principal argument of `z - vertex`, in `(-π, π]`.
  pub fn angle_of(&self, z: Complex<T>) -> T {
    (z - self.vertex).arg()
  }

  /// Point at `length` from the vertex along one of the bounding rays.
  pub fn ray(&self, edge: Edge, length: T) -> Complex<T> {
    let angle = match edge {
      Edge::Lower => -self.half_angle,
      Edge::Upper => self.half_angle
    };
    self.vertex + Complex::from_polar(length, angle)
  }
}

impl<T: Float> Region<T> for Sector<T> {
  fn contains(&self, z: Complex<T>) -> bool {
    // arg(0) is undefined, the vertex itself is not part of the sector
    z != self.vertex && self.angle_of(z).abs() < self.half_angle
  }
}
