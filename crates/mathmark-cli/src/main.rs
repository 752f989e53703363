//! mathmark binary.
//!
//! Benchmarks three math providers (reference `libm`, the fast-approximation
//! candidate, the platform standard library) over identical deterministic
//! inputs and prints the comparison table to stdout. Logs go to stderr via
//! `tracing`, filtered by `RUST_LOG`.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use mathmark_bench::{Harness, HarnessConfig, ProviderSet};
use mathmark_core::{FastApprox, Function, Reference, StdMath};

/// Compare math function providers under identical inputs.
#[derive(Debug, Parser)]
#[command(name = "mathmark", version, about)]
struct Cli {
    /// Iteration count per unary case (default 100000000; also settable via
    /// MATHMARK_RUNS or the config file).
    #[arg(long)]
    runs: Option<u64>,

    /// Path to a TOML config file (`runs = N`).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Benchmark only the named cases, in the given order (default: all).
    #[arg(long = "case", value_name = "NAME")]
    cases: Vec<Function>,
}

impl Cli {
    /// Resolves the configuration with precedence flag > env > file > default.
    fn resolve_config(&self) -> Result<HarnessConfig, mathmark_bench::ConfigError> {
        if let Some(runs) = self.runs {
            return HarnessConfig::new(runs);
        }
        if std::env::var(mathmark_bench::RUNS_ENV_VAR).is_ok() {
            return HarnessConfig::from_env();
        }
        match &self.config {
            Some(path) => HarnessConfig::load(path),
            None => Ok(HarnessConfig::default()),
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match cli.resolve_config() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("mathmark: {err}");
            return ExitCode::FAILURE;
        }
    };

    let providers = ProviderSet::new(Reference, FastApprox, StdMath);
    let mut harness = Harness::new(config, providers);

    let registration = if cli.cases.is_empty() {
        harness.register_all()
    } else {
        cli.cases
            .iter()
            .try_for_each(|&function| harness.register(function))
    };
    if let Err(err) = registration {
        eprintln!("mathmark: {err}");
        return ExitCode::FAILURE;
    }

    let version = concat!("mathmark ", env!("CARGO_PKG_VERSION"));
    let platform = format!("{} {}", std::env::consts::OS, std::env::consts::ARCH);
    let environment = [version, platform.as_str()];

    match harness.run(io::stdout().lock(), &environment) {
        Ok(summary) if summary.is_clean() => ExitCode::SUCCESS,
        Ok(summary) => {
            eprintln!("mathmark: {} of {} cases failed", summary.failed, summary.total());
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("mathmark: {err}");
            ExitCode::FAILURE
        }
    }
}
