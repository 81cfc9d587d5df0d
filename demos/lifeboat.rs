//! Lifeboat dilemma, evaluated with no weighting, then egoistically, then
//! altruistically.
//!
//! Usage:
//!   cargo run --example lifeboat
//!   RUST_LOG=felicific=debug cargo run --example lifeboat -- --seed 7 --out target/lifeboat

use std::path::PathBuf;

use clap::Parser;
use felicific::flush::{flush_to_jsonl, log_best, log_evaluations};
use felicific::{DecisionRule, Dilemma, SelfInterestScale};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const LIFEBOAT_JSON: &str = include_str!("lifeboat.json");

#[derive(Parser)]
#[command(name = "lifeboat")]
#[command(about = "Evaluate the lifeboat dilemma under three self-interest scales", long_about = None)]
struct Args {
    /// Tie-break seed; overrides the seed in the dilemma file
    #[arg(long)]
    seed: Option<u64>,

    /// Directory to write evaluations.jsonl and rankings.jsonl into
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> felicific::Result<()> {
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "felicific=info,lifeboat=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut dilemma = Dilemma::from_json(LIFEBOAT_JSON)?;
    dilemma.config.seed = args.seed.or(dilemma.config.seed);
    tracing::info!("{}", dilemma.description);

    let mut selector = dilemma.to_selector()?;
    log_evaluations(&selector);
    log_best(&selector, DecisionRule::Utilitarian)?;
    log_best(&selector, DecisionRule::NegativeUtilitarian)?;

    for scale in [SelfInterestScale::EGOISTIC, SelfInterestScale::ALTRUISTIC] {
        selector.set_self_interest_scale(scale.value())?;
        log_evaluations(&selector);
        log_best(&selector, DecisionRule::Utilitarian)?;
    }

    if let Some(out) = args.out {
        flush_to_jsonl(&selector, &out)?;
    }
    Ok(())
}
