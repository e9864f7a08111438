//! seatsim — compare toilet seat policies over a simulated household.
//!
//! Generates one set of usage schedules for the named standing (`-m`) and
//! sitting (`-f`) users, then counts how often each policy makes someone
//! move the seat.
//!
//! ```text
//! seatsim -m Sam Bob -f Ana --days 30
//! seatsim -m Sam -f Ana --policy lazy --animate --frame-delay-ms 150
//! ```

use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use seat_anim::{AnimationSink, RenderContext};
use seat_core::config::DEFAULT_HORIZON_DAYS;
use seat_core::{ConfigError, Horizon, SimConfig, UsageProcess};
use seat_policy::{NoopObserver, PolicyKind};
use seat_schedule::load_samples_csv;
use seat_sim::{PolicyOutcome, Report, SimulationBuilder, SimulationRun};

// ── Arguments ─────────────────────────────────────────────────────────────────

/// Compare the efficiency of different toilet seat policies.
#[derive(Parser, Debug)]
#[command(name = "seatsim", version)]
struct Args {
    /// Names of users who stand for short visits
    #[arg(short = 'm', long = "male", value_name = "NAME", num_args = 1..)]
    males: Vec<String>,

    /// Names of users who always sit
    #[arg(short = 'f', long = "female", value_name = "NAME", num_args = 1..)]
    females: Vec<String>,

    /// Simulated days
    #[arg(long, default_value_t = DEFAULT_HORIZON_DAYS as i64, allow_negative_numbers = true)]
    days: i64,

    /// Policy to evaluate ("lazy" or "down"); all when omitted
    #[arg(long)]
    policy: Option<String>,

    /// Master seed; a random one is chosen and logged when omitted
    #[arg(long, env = "SEATSIM_SEED")]
    seed: Option<u64>,

    /// CSV file of pre-drawn standard-normal samples (header: sample)
    #[arg(long, value_name = "FILE")]
    samples: Option<PathBuf>,

    /// Mean hours between short visits
    #[arg(long, default_value_t = UsageProcess::SHORT_VISIT.mean_hours)]
    short_mean: f64,

    /// Standard deviation of hours between short visits
    #[arg(long, default_value_t = UsageProcess::SHORT_VISIT.std_hours)]
    short_std: f64,

    /// Mean hours between long visits
    #[arg(long, default_value_t = UsageProcess::LONG_VISIT.mean_hours)]
    long_mean: f64,

    /// Standard deviation of hours between long visits
    #[arg(long, default_value_t = UsageProcess::LONG_VISIT.std_hours)]
    long_std: f64,

    /// Animate the evaluation in the terminal (requires --policy)
    #[arg(long)]
    animate: bool,

    /// Pause between animation frames; 0 draws as fast as possible
    #[arg(long, default_value_t = 120)]
    frame_delay_ms: u64,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Log level (RUST_LOG takes precedence)
    #[arg(short, long, default_value = "warn")]
    log_level: String,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level)),
        )
        .init();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    let policy = args.policy.as_deref().map(PolicyKind::from_str).transpose()?;
    if args.animate && policy.is_none() {
        bail!(r#"--animate requires a policy ("lazy" or "down")"#);
    }

    let config = build_config(&args)?;
    let mut builder = SimulationBuilder::new(config.clone())
        .males(args.males.iter().cloned())
        .females(args.females.iter().cloned());
    builder.validate()?;

    if let Some(path) = &args.samples {
        let samples = load_samples_csv(path)
            .with_context(|| format!("loading samples from {}", path.display()))?;
        tracing::info!(path = %path.display(), count = samples.len(), "replaying samples");
        builder = builder.samples(samples);
    }

    if !args.json {
        println!();
        println!(
            "Simulating toilet use of {} male(s) and {} female(s) over {}...",
            args.males.len(),
            args.females.len(),
            config.horizon,
        );
        println!();
    }

    let sim = builder.build()?;
    tracing::info!(events = sim.event_count(), samples = sim.samples_used(), "schedules generated");

    let outcomes = if args.animate {
        let ctx = RenderContext::open(Duration::from_millis(args.frame_delay_ms))
            .context("opening terminal for animation")?;
        let mut sink = AnimationSink::new(ctx);
        let result = sim.evaluate_selected(policy, &mut sink);
        let draw_error = sink.take_error();
        // Restore the terminal before anything else is printed.
        drop(sink);
        if let Some(e) = draw_error {
            return Err(e).context("animation failed");
        }
        result
    } else {
        sim.evaluate_selected(policy, &mut NoopObserver)
    };

    let outcomes = match outcomes {
        Ok(outcomes) => outcomes,
        Err(e) if e.is_interrupted() => {
            eprintln!("Interrupted; no results.");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    print_report(&sim, &outcomes, args.json)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn build_config(args: &Args) -> Result<SimConfig, ConfigError> {
    let days = u32::try_from(args.days)
        .ok()
        .filter(|&d| d > 0)
        .ok_or(ConfigError::NonPositiveHorizon)?;

    let seed = args.seed.unwrap_or_else(|| {
        let seed = rand::random::<u64>();
        tracing::info!(seed, "no seed given; pass --seed {seed} to replay this run");
        seed
    });

    let config = SimConfig {
        horizon:     Horizon::from_days(days),
        seed,
        short_visit: UsageProcess::new(args.short_mean, args.short_std),
        long_visit:  UsageProcess::new(args.long_mean, args.long_std),
        ..SimConfig::default()
    };
    config.validate()?;
    Ok(config)
}

fn print_report(sim: &SimulationRun, outcomes: &[PolicyOutcome], json: bool) -> Result<()> {
    let report = Report::new(sim, outcomes);
    if json {
        let text = serde_json::to_string_pretty(&report).context("serializing report")?;
        println!("{text}");
    } else {
        println!("Results:");
        println!();
        print!("{report}");
    }
    Ok(())
}

