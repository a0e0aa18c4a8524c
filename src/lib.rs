//! Intersection of a disk and an angular sector on the complex plane.
//!
//! The crate is split into [`geometry`], holding regions given by membership predicates,
//! [`sampling`], which walks the boundary circle of the disk and keeps the samples lying in
//! the sector, and [`drawing`], which renders both regions and the resulting arc.
//!
//! # Basic usage
//! ```no_run
//! # use {
//! #   complex_region::{config::{Layout, Problem}, drawing::{self, Style}},
//! #   anyhow::Result
//! # };
//! # fn main() -> Result<()> {
//! // |z - (2+3i)| < 3 and |arg(z - (4-i))| < 2π/3, 1000 boundary samples
//! let problem = Problem::default();
//! let solution = problem.solve();
//! assert!(!solution.is_empty());
//!
//! let image = drawing::render(&problem, &solution, &Layout::default(), &Style::default())?;
//! image.save("out.png")?;
//! #   Ok(())
//! # }
//! ```
//!
//! Any predicate is a region:
//! ```
//! # use {
//! #   complex_region::{geometry::{Disk, Region}, sampling},
//! #   num_complex::Complex64
//! # };
//! let unit = Disk::new(Complex64::new(0.0, 0.0), 1.0);
//! let upper = |z: Complex64| z.im > 0.0;
//! let solution = sampling::solve(&unit, 101, &upper);
//! assert!(solution.points().all(|z| z.im > 0.0));
//! ```

pub mod error;
pub mod util;
pub mod geometry;
pub mod sampling;
pub mod config;
pub mod drawing;

#[doc(hidden)]
pub use tracing;
