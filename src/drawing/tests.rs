use {
  super::*,
  crate::{
    geometry::{Disk, Region, Sector, Viewport},
    sampling
  },
  anyhow::Result,
  num_complex::Complex64,
  std::f64::consts::PI
};

fn map(density: i32) -> PixelMap {
  PixelMap {
    pixels: Box2D::new(Point2D::new(0, 0), Point2D::new(10 * density, 14 * density)),
    viewport: Viewport::new(-2.0..8.0, -6.0..8.0)
  }
}

#[test] fn pixel_centers() {
  let map = map(10);
  let top_left = map.to_plane(Point2D::new(0, 0));
  assert!((top_left - Complex64::new(-1.95, 7.95)).norm() < 1e-12);
  let bottom_right = map.to_plane(Point2D::new(99, 139));
  assert!((bottom_right - Complex64::new(7.95, -5.95)).norm() < 1e-12);
}

#[test] fn pixel_map_offset() {
  let map = PixelMap {
    pixels: Box2D::new(Point2D::new(50, 80), Point2D::new(150, 220)),
    ..map(10)
  };
  assert!((map.to_plane(Point2D::new(50, 80)) - Complex64::new(-1.95, 7.95)).norm() < 1e-12);
}

#[test] fn disk_coverage_matches_area() {
  let density = 50;
  let disk = Disk::new(Complex64::new(2.0, 3.0), 3.0);
  let pixels = coverage(&map(density), &disk);
  let expected = 9.0 * PI * (density * density) as f64;
  assert!((pixels.len() as f64 / expected - 1.0).abs() < 0.005, "{}", pixels.len());
  assert!(pixels.iter().all(|&p| disk.contains(map(density).to_plane(p))));
}

#[test] fn empty_sector_covers_nothing() {
  let sector = Sector::new(Complex64::new(4.0, -1.0), 0.0);
  assert!(coverage(&map(10), &sector).is_empty());
}

#[test] fn labels_complex() {
  assert_eq!(labels::complex(Complex64::new(2.0, 3.0)), "2+3i");
  assert_eq!(labels::complex(Complex64::new(4.0, -1.0)), "4-i");
  assert_eq!(labels::complex(Complex64::new(0.0, 1.0)), "i");
  assert_eq!(labels::complex(Complex64::new(-2.5, 0.0)), "-2.5");
  assert_eq!(labels::complex(Complex64::new(1.5, -0.5)), "1.5-0.5i");
  assert_eq!(labels::complex(Complex64::new(-0.0, -0.0)), "0");
}

#[test] fn labels_angle() {
  assert_eq!(labels::angle(2.0 * PI / 3.0), "2π/3");
  assert_eq!(labels::angle(PI), "π");
  assert_eq!(labels::angle(-PI / 4.0), "-π/4");
  assert_eq!(labels::angle(0.0), "0");
  assert_eq!(labels::angle(1.0), "57.3°");
}

#[test] fn labels_constraints() {
  let problem = Problem::default();
  assert_eq!(labels::disk(&problem.disk), "|z - (2+3i)| < 3");
  assert_eq!(labels::sector(&problem.sector), "|arg(z - (4-i))| < 2π/3");
  assert_eq!(labels::disk(&Disk::new(Complex64::new(0.0, 0.0), 1.5)), "|z| < 1.5");
  assert_eq!(labels::point("Sector vertex", problem.sector.vertex), "Sector vertex (4-i)");
}

#[test] fn zero_density_is_rejected() {
  let problem = Problem::default();
  let layout = Layout { density: 0, ..Layout::default() };
  assert!(render(&problem, &problem.solve(), &layout, &Style::default()).is_err());
}

#[test] fn huge_density_is_rejected() {
  let problem = Problem::default();
  let layout = Layout { density: 7000, ..Layout::default() };
  let error = render(&problem, &problem.solve(), &layout, &Style::default()).unwrap_err();
  assert!(error.to_string().contains("too large"), "{}", error);
}

// needs a system font
#[test] #[ignore] fn render_default() -> Result<()> {
  let problem = Problem::default();
  let layout = Layout::default();
  let solution = sampling::solve(&problem.disk, problem.samples, &problem.sector);
  let image = render(&problem, &solution, &layout, &Style::default())?;
  let size = layout.canvas_size()?;
  assert_eq!(image.dimensions(), (size.width, size.height));

  // the solution arc is opaque, its color survives the region fills
  let green = Style::default().solution;
  assert!(image.pixels().any(|p| p.0 == [green.0, green.1, green.2]));
  image.save(std::env::temp_dir().join("complex_region_render_default.png"))?;
  Ok(())
}
