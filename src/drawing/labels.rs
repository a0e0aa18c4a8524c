//! Legend text for the problem parameters: `2+3i`, `4-i`, `2π/3`.

use {
  crate::geometry::{Disk, Sector},
  num_complex::Complex64,
  std::f64::consts::PI
};

const MAX_DENOMINATOR: i64 = 12;

pub fn complex(z: Complex64) -> String {
  // + 0.0 turns -0 into 0
  let (re, im) = (z.re + 0.0, z.im + 0.0);
  let imaginary = match im {
    im if im == 1.0 => "i".to_string(),
    im if im == -1.0 => "-i".to_string(),
    im => format!("{}i", im)
  };
  if im == 0.0 {
    format!("{}", re)
  } else if re == 0.0 {
    imaginary
  } else if im < 0.0 {
    format!("{}{}", re, imaginary)
  } else {
    format!("{}+{}", re, imaginary)
  }
}

/// Angle as a rational multiple of π when the denominator is small, degrees otherwise.
pub fn angle(theta: f64) -> String {
  for q in 1..=MAX_DENOMINATOR {
    let p = (theta / PI * q as f64).round();
    if (theta - p * PI / q as f64).abs() > 1e-9 {
      continue;
    }
    return match (p as i64, q) {
      (0, _) => "0".to_string(),
      (1, 1) => "π".to_string(),
      (-1, 1) => "-π".to_string(),
      (p, 1) => format!("{}π", p),
      (1, q) => format!("π/{}", q),
      (-1, q) => format!("-π/{}", q),
      (p, q) => format!("{}π/{}", p, q)
    };
  }
  format!("{:.1}°", theta.to_degrees())
}

/// `z - (c)`, or `z` when `c = 0`
fn shifted(c: Complex64) -> String {
  if c == Complex64::new(0.0, 0.0) {
    "z".to_string()
  } else {
    format!("z - ({})", complex(c))
  }
}

pub fn disk(disk: &Disk<f64>) -> String {
  format!("|{}| < {}", shifted(disk.center), disk.radius)
}

pub fn sector(sector: &Sector<f64>) -> String {
  format!("|arg({})| < {}", shifted(sector.vertex), angle(sector.half_angle))
}

pub fn point(name: &str, z: Complex64) -> String {
  format!("{} ({})", name, complex(z))
}
