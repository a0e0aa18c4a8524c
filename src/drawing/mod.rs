//! Rendering of the problem on a bitmap.
//!
//! The picture is drawn with `plotters` into an RGB buffer and handed out as an
//! [`image::RgbImage`]. Filled regions are painted per pixel from the same predicates the
//! sampler uses, so the shaded disk and sector agree exactly with the computed arc.

use {
  crate::{
    config::{Layout, Problem},
    geometry::{Edge, PixelSpace},
    profile,
    sampling::Solution
  },
  anyhow::{bail, Context, Result},
  euclid::{Box2D, Point2D},
  image::RgbImage,
  plotters::{
    coord::Shift,
    prelude::*
  }
};

pub mod coverage;
pub mod labels;
#[cfg(test)] mod tests;
pub use coverage::{coverage, PixelMap};

#[derive(Debug, Clone)]
pub struct Style {
  pub font: &'static str,
  pub title: String,
  pub title_size: u32,
  pub label_size: u32,
  pub grid: RGBAColor,
  pub disk_fill: RGBAColor,
  pub sector_fill: RGBAColor,
  pub ray: RGBColor,
  pub ray_width: u32,
  /// dash and gap length, pixels
  pub ray_dash: (u32, u32),
  /// in plane units, before clipping to the viewport
  pub ray_length: f64,
  pub solution: RGBColor,
  pub solution_width: u32,
  pub disk_marker: RGBColor,
  pub vertex_marker: RGBColor,
  pub marker_size: u32
}

impl Default for Style {
  fn default() -> Self {
    Self {
      font: "sans-serif",
      title: "System of inequalities on the complex plane".to_string(),
      title_size: 28,
      label_size: 18,
      grid: BLACK.mix(0.15),
      disk_fill: RGBColor(135, 206, 235).mix(0.4), // skyblue
      sector_fill: RGBColor(250, 128, 114).mix(0.4), // salmon
      ray: RED,
      ray_width: 1,
      ray_dash: (8, 5),
      ray_length: 20.0,
      solution: RGBColor(0, 128, 0),
      solution_width: 4,
      disk_marker: BLUE,
      vertex_marker: RED,
      marker_size: 6
    }
  }
}

/// Draw the disk, the sector, its boundary rays, the solution arcs and both centers.
pub fn render(problem: &Problem, solution: &Solution, layout: &Layout, style: &Style) -> Result<RgbImage> {
  if layout.density == 0 {
    bail!("pixel density must be positive");
  }
  let size = layout.canvas_size()?;
  let mut buffer = vec![0u8; size.width as usize * size.height as usize * 3];
  {
    let root = BitMapBackend::with_buffer(&mut buffer, (size.width, size.height))
      .into_drawing_area();
    draw(&root, problem, solution, layout, style)?;
    root.present()?;
  }
  RgbImage::from_raw(size.width, size.height, buffer)
    .context("framebuffer does not match canvas size")
}

fn draw(
  root: &DrawingArea<BitMapBackend, Shift>,
  problem: &Problem,
  solution: &Solution,
  layout: &Layout,
  style: &Style
) -> Result<()> {
  let viewport = layout.viewport;
  let font = |size: u32| (style.font, size);

  root.fill(&WHITE)?;
  let (title_area, body) = root.split_vertically(layout.title_height);
  title_area.titled(&style.title, font(style.title_size))?;

  let mut chart = ChartBuilder::on(&body)
    .margin(layout.margin)
    .x_label_area_size(layout.label_area)
    .y_label_area_size(layout.label_area)
    .build_cartesian_2d(viewport.re_range(), viewport.im_range())?;

  chart.configure_mesh()
    .x_desc("Re(z)")
    .y_desc("Im(z)")
    .label_style(font(style.label_size))
    .axis_desc_style(font(style.label_size))
    .bold_line_style(style.grid)
    .max_light_lines(0)
    .draw()?;

  // regions
  let (x_range, y_range) = chart.plotting_area().get_pixel_range();
  let map = PixelMap {
    pixels: Box2D::new(
      Point2D::new(x_range.start, y_range.start),
      Point2D::new(x_range.end, y_range.end)
    ),
    viewport
  };
  profile!("coverage", {
    paint(root, &coverage(&map, &problem.disk), &style.disk_fill)?;
    paint(root, &coverage(&map, &problem.sector), &style.sector_fill)?;
  });

  let (disk_fill, sector_fill) = (style.disk_fill, style.sector_fill);
  chart.draw_series(std::iter::empty::<Rectangle<(f64, f64)>>())?
    .label(labels::disk(&problem.disk))
    .legend(move |(x, y)| Rectangle::new([(x, y - 6), (x + 20, y + 6)], disk_fill.filled()));
  chart.draw_series(std::iter::empty::<Rectangle<(f64, f64)>>())?
    .label(labels::sector(&problem.sector))
    .legend(move |(x, y)| Rectangle::new([(x, y - 6), (x + 20, y + 6)], sector_fill.filled()));

  // sector edges
  let ray_style = style.ray.stroke_width(style.ray_width);
  for edge in [Edge::Lower, Edge::Upper] {
    let far = problem.sector.ray(edge, style.ray_length);
    if let Some((a, b)) = viewport.clip_segment(problem.sector.vertex, far) {
      chart.draw_series(DashedLineSeries::new(
        [(a.re, a.im), (b.re, b.im)],
        style.ray_dash.0,
        style.ray_dash.1,
        ray_style
      ))?;
    }
  }

  // solution
  let solution_style = style.solution.stroke_width(style.solution_width);
  for arc in solution.arcs() {
    chart.draw_series(LineSeries::new(
      arc.into_iter().map(|z| (z.re, z.im)),
      solution_style
    ))?;
  }
  if !solution.is_empty() {
    chart.draw_series(std::iter::empty::<Rectangle<(f64, f64)>>())?
      .label("Solution (intersection)")
      .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], solution_style));
  }

  // centers
  let marker_size = style.marker_size;
  let markers = [
    (problem.disk.center, style.disk_marker, labels::point("Disk center", problem.disk.center)),
    (problem.sector.vertex, style.vertex_marker, labels::point("Sector vertex", problem.sector.vertex))
  ];
  for (z, color, label) in markers {
    chart.draw_series(std::iter::once(Circle::new((z.re, z.im), marker_size, color.filled())))?
      .label(label)
      .legend(move |(x, y)| Circle::new((x + 10, y), marker_size, color.filled()));
  }

  chart.configure_series_labels()
    .position(SeriesLabelPosition::LowerRight)
    .label_font(font(style.label_size))
    .background_style(WHITE.mix(0.8))
    .border_style(BLACK)
    .draw()?;

  Ok(())
}

fn paint(
  root: &DrawingArea<BitMapBackend, Shift>,
  pixels: &[Point2D<i32, PixelSpace>],
  color: &RGBAColor
) -> Result<()> {
  for pixel in pixels {
    root.draw_pixel((pixel.x, pixel.y), color)?;
  }
  Ok(())
}
