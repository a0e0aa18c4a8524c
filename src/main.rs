use {
  anyhow::{Context, Result},
  clap::Parser,
  complex_region::{
    config::{Layout, Problem},
    drawing::{self, labels, Style},
    error, profile, sampling
  },
  humansize::{FileSize, file_size_opts as options},
  std::path::PathBuf,
  tracing::{info, warn},
  tracing_subscriber::EnvFilter
};

#[derive(Parser, Debug)]
#[command(name = "complex-region")]
#[command(version, about = "Plot |z - (2+3i)| < 3 and |arg(z - (4-i))| < 2π/3 on the complex plane")]
struct Args {
  /// Output image
  #[arg(short, long, default_value = "complex_region.png")]
  output: PathBuf,

  /// Pixels per unit of the plane
  #[arg(long, default_value = "70", value_parser = clap::value_parser!(u32).range(1..=1000))]
  density: u32,

  /// Number of samples on the boundary circle
  #[arg(long, default_value = "1000")]
  samples: usize,

  /// Only write the image, do not open it
  #[arg(long)]
  no_open: bool,
}

fn run(args: Args) -> Result<()> {
  let problem = Problem { samples: args.samples, ..Problem::default() };
  let layout = Layout { density: args.density, ..Layout::default() };
  info!("{} and {}", labels::disk(&problem.disk), labels::sector(&problem.sector));

  let solution = profile!("sampling", problem.solve());
  info!(
    accepted = solution.len(),
    samples = solution.samples,
    arcs = solution.arcs().len(),
    "boundary sampled"
  );
  if solution.is_empty() {
    info!("the circle does not meet the sector, no solution arc");
  }

  let area = profile!("area", sampling::estimate_area(
    &problem.region(),
    &layout.viewport,
    1.0 / layout.density as f64
  ));
  if let Some(area) = area {
    info!("area of the intersection ≈ {:.3}", area);
  }

  let image = profile!("render", drawing::render(&problem, &solution, &layout, &Style::default())?);
  image.save(&args.output)
    .with_context(|| format!("failed to write {}", args.output.display()))?;
  let size = std::fs::metadata(&args.output)?.len();
  info!(
    "wrote {} ({})",
    args.output.display(),
    size.file_size(options::CONVENTIONAL).unwrap_or_else(|_| format!("{} B", size))
  );

  if !args.no_open {
    let status = open::that(&args.output)
      .with_context(|| format!("failed to open {}", args.output.display()))?;
    if !status.success() {
      warn!("image viewer exited with {}", status);
    }
  }
  Ok(())
}

fn main() {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("complex_region=info"))
    )
    .init();

  if let Err(e) = run(Args::parse()) {
    error::display(&e);
    std::process::exit(1);
  }
}
