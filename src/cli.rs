use crate::build_info;
use crate::grid::*;
use crate::solver::*;
use crate::source::*;
use crate::util::*;
use clap::{Parser, ValueEnum};
use env_logger::Env;

#[cfg(feature = "profile-with-puffin")]
pub fn start_puffin_server() -> Option<puffin_http::Server> {
    let server_addr = format!("127.0.0.1:{}", puffin_http::DEFAULT_PORT);
    match puffin_http::Server::new(&server_addr) {
        Ok(server) => {
            println!(
                "Run this to view profiling data:  puffin_viewer {server_addr}"
            );
            profiling::puffin::set_scopes_on(true);
            Some(server)
        }
        Err(e) => {
            log::warn!("profiling server not started: {e}");
            None
        }
    }
}

#[derive(Copy, Clone, Debug, ValueEnum, Default, PartialEq, Eq)]
pub enum ClapBoundary {
    #[default]
    Reflective,
    Fixed,
}

/// poisson 3D Jacobi relaxation benchmark
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Grid edge length, the grid holds n³ cells.
    #[arg(short, long, default_value = "101")]
    pub n: usize,

    /// Number of Jacobi iterations.
    #[arg(short, long, default_value = "100")]
    pub iterations: usize,

    /// The number of threads to use, including the coordinator.
    #[arg(short, long, default_value = "1")]
    pub threads: usize,

    /// Grid spacing, the source is scaled by its square.
    #[arg(long, default_value = "1.0")]
    pub delta: f64,

    /// Boundary policy.
    #[arg(long, default_value = "reflective")]
    pub boundary: ClapBoundary,

    /// Value read past the grid edge with `--boundary fixed`.
    #[arg(long, default_value = "0.0")]
    pub boundary_value: f64,

    /// Thread coordination strategy.
    #[arg(long, default_value = "handshake")]
    pub schedule: Schedule,

    /// Source field.
    #[arg(long, default_value = "impulse")]
    pub source: ClapSourceType,

    /// Source parameter: impulse magnitude, normal variance
    /// or random bound.
    #[arg(long, default_value = "1.0")]
    pub dial: f64,

    /// Seed for `--source rand`.
    #[arg(long, default_value = "0")]
    pub seed: u64,

    /// Sweep the whole grid every iteration.
    #[arg(long)]
    pub no_wavefront: bool,

    /// How many times to run the solve, for timing.
    #[arg(short, long, default_value = "1")]
    pub repeats: usize,

    /// Use single precision.
    #[arg(long)]
    pub f32: bool,

    /// Log filter directives (`debug`, `poisson::solver=trace`),
    /// applied on top of RUST_LOG.
    #[arg(long)]
    pub log_level: Option<String>,
}

impl Args {
    pub fn cli_parse(name: &str) -> Self {
        let args = Args::parse();
        init_logging(args.log_level.as_deref());
        build_info::print_report(name);
        args
    }

    pub fn boundary_condition<F: FloatTrait>(&self) -> BoundaryCondition<F> {
        match self.boundary {
            ClapBoundary::Reflective => BoundaryCondition::Reflective,
            ClapBoundary::Fixed => {
                BoundaryCondition::Fixed(F::from_literal(self.boundary_value))
            }
        }
    }

    pub fn config<F: FloatTrait>(&self) -> SolverConfig<F> {
        SolverConfig {
            n: self.n,
            iterations: self.iterations,
            delta: F::from_literal(self.delta),
            boundary: self.boundary_condition(),
            threads: self.threads,
            schedule: self.schedule,
            wavefront: !self.no_wavefront,
        }
    }

    /// Number of timed solves, at least one.
    pub fn runs(&self) -> usize {
        self.repeats.max(1)
    }

    pub fn source_type(&self) -> SourceType {
        self.source.to_source_type(self.dial, self.seed)
    }
}

/// Filters from `env`, then the `directives` given on the command line.
pub fn logger_builder(
    env: Env<'_>,
    directives: Option<&str>,
) -> env_logger::Builder {
    let mut builder = env_logger::Builder::from_env(env);
    if let Some(directives) = directives {
        builder.parse_filters(directives);
    }
    builder.format_timestamp_millis();
    builder
}

/// `RUST_LOG` (info when unset) plus `directives`.
pub fn init_logging(directives: Option<&str>) {
    let env = Env::default().default_filter_or("info");
    if logger_builder(env, directives).try_init().is_ok() {
        log::debug!("logger initialized (max level: {})", log::max_level());
    }
}

/// Wall time statistics over repeated solves, in seconds.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Timings {
    pub runs: usize,
    pub min: f64,
    pub median: f64,
    pub mean: f64,
    pub max: f64,
}

impl Timings {
    pub fn new(samples: &[f64]) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }
        let mut sorted = samples.to_vec();
        sorted.sort_by(f64::total_cmp);
        let runs = sorted.len();
        let median = if runs % 2 == 1 {
            sorted[runs / 2]
        } else {
            0.5 * (sorted[runs / 2 - 1] + sorted[runs / 2])
        };
        Some(Timings {
            runs,
            min: sorted[0],
            median,
            mean: sorted.iter().sum::<f64>() / runs as f64,
            max: sorted[runs - 1],
        })
    }
}

/// Summary printed by the binary, the field itself is never printed.
pub fn report<F: FloatTrait>(
    config: &SolverConfig<F>,
    timings: &Timings,
    field: &Field<F>,
) -> String {
    let as_f64 = |v: F| v.to_f64().unwrap_or(f64::NAN);
    let c = field.n() / 2;
    let (min, max) = field.min_max();
    let entries = [
        format!("\"n\": {}", config.n),
        format!("\"iterations\": {}", config.iterations),
        format!("\"threads\": {}", config.threads),
        format!("\"schedule\": \"{:?}\"", config.schedule),
        format!("\"runs\": {}", timings.runs),
        format!("\"min_s\": {:.6}", timings.min),
        format!("\"median_s\": {:.6}", timings.median),
        format!("\"mean_s\": {:.6}", timings.mean),
        format!("\"max_s\": {:.6}", timings.max),
        format!("\"center\": {:e}", as_f64(field.get(c, c, c))),
        format!("\"field_min\": {:e}", as_f64(min)),
        format!("\"field_max\": {:e}", as_f64(max)),
    ];
    format!("{{\n  {}\n}}", entries.join(",\n  "))
}
