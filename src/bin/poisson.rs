use log::info;
use poisson::cli::*;
use poisson::error::*;
use poisson::solver::*;
use poisson::source::*;
use poisson::util::*;
use std::time::Instant;

fn run<F: FloatTrait>(args: &Args) -> SolverResult<()> {
    let config = args.config::<F>();
    config.validate()?;
    let source = generate_source::<F>(config.n, args.source_type())?;
    info!(
        "n: {}, iterations: {}, threads: {}, {:?}, {:?}, source: {:?}",
        config.n,
        config.iterations,
        config.threads,
        config.schedule,
        config.boundary,
        args.source_type()
    );

    let repeats = args.runs();
    let mut samples = Vec::with_capacity(repeats);
    let mut last = None;
    for r in 0..repeats {
        let solver = Solver::new(config, &source)?;
        let start = Instant::now();
        let field = solver.run();
        let elapsed = start.elapsed().as_secs_f64();
        profiling::finish_frame!();
        info!("run {}: {:.6} s", r, elapsed);
        samples.push(elapsed);
        last = Some(field);
    }

    if let (Some(timings), Some(field)) = (Timings::new(&samples), last) {
        println!("{}", report(&config, &timings, &field));
    }
    Ok(())
}

fn main() {
    let args = Args::cli_parse("poisson");

    #[cfg(feature = "profile-with-puffin")]
    let _puffin_server = start_puffin_server();

    let result = if args.f32 {
        run::<f32>(&args)
    } else {
        run::<f64>(&args)
    };
    if let Err(e) = result {
        eprintln!("poisson: {e}");
        std::process::exit(1);
    }
}
