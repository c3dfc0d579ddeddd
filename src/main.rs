use anyhow::Result;
use std::env;
use std::path::PathBuf;

use nba_integration::{pipeline, PipelineConfig};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    let data_dir = match args.get(1) {
        Some(dir) => PathBuf::from(dir),
        None => {
            eprintln!("Usage: nba-integration <data-dir> [out-dir]");
            eprintln!("  expects <data-dir>/teams.csv, <data-dir>/teams_won_titles.csv,");
            eprintln!("  <data-dir>/stats/stats_<season>.csv and");
            eprintln!("  <data-dir>/salaries/salaries_<season>.csv");
            std::process::exit(1);
        }
    };

    let mut config = PipelineConfig::from_data_dir(&data_dir);
    if let Some(out_dir) = args.get(2) {
        config.out_dir = PathBuf::from(out_dir);
    }

    let report = pipeline::run(&config)?;

    println!("\n🎉 Integration complete: {}", report.summary());
    Ok(())
}
