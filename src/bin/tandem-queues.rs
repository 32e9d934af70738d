//! Discrete-event simulation of two queueing stations in tandem, configured
//! by `input.txt` in the working directory.
//!
//! The event trace goes to stdout; the final report lands on stdout and in
//! `output.txt`.

use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::Context;

use truncated_expon::sim::{SimConfig, TandemSim};

const INPUT_PATH: &str = "input.txt";
const OUTPUT_PATH: &str = "output.txt";

fn main() -> anyhow::Result<()> {
    let config = SimConfig::from_path(Path::new(INPUT_PATH))
        .with_context(|| format!("loading {}", INPUT_PATH))?;
    println!("{}\n", config);

    let sim = TandemSim::new(&config)?;

    let stdout = std::io::stdout();
    let stdout = stdout.lock();
    let mut trace = std::io::BufWriter::with_capacity(32768, stdout);

    let report = match sim.run(&mut trace) {
        Ok(report) => report,
        Err(err) => {
            trace.flush()?;
            // A failed run must not leave a stale report behind.
            let _ = fs::remove_file(OUTPUT_PATH);
            return Err(err.into());
        }
    };
    trace.flush()?;
    drop(trace);

    println!("processed_pkts: {}", report.processed_pkts);
    println!("{}", report);
    report
        .write_to(Path::new(OUTPUT_PATH))
        .with_context(|| format!("writing {}", OUTPUT_PATH))?;

    Ok(())
}
