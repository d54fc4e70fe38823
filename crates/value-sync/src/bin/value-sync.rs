//! Run the four-node chain to convergence and print the report as JSON.
//!
//! Set `RUST_LOG=accord_core=trace,accord_value_sync=debug` to watch the
//! selection loops work.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use accord_value_sync::{run_to_convergence, FieldAgent, RoundLimits, ValueGrid};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let agents = ["a", "b", "c", "d"].map(FieldAgent::new);
    let grid = ValueGrid::chain(&[("a", 2), ("b", 9), ("c", 3), ("d", 6)]);

    let report = run_to_convergence(&agents, grid, RoundLimits::default())?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
