//! Run reviews for an entire client block from a JSON snapshot export
//!
//! Outputs one summary row per client for book-level gap reporting.

use advisory_engine::projection::ProjectionConfig;
use advisory_engine::snapshot::load_block;
use advisory_engine::{ClientReview, ScenarioRunner};
use anyhow::Context;
use chrono::Utc;
use rayon::prelude::*;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("data/client_block.json"));

    let start = Instant::now();
    println!("Loading snapshots from {}...", path.display());

    let snapshots = load_block(&path)
        .with_context(|| format!("loading client block {}", path.display()))?;
    println!("Loaded {} clients in {:?}", snapshots.len(), start.elapsed());

    let runner = ScenarioRunner::new();
    let as_of = Utc::now().date_naive();
    let config = ProjectionConfig::default();

    println!("Running reviews...");
    let review_start = Instant::now();

    let reviews: Vec<ClientReview> = snapshots
        .par_iter()
        .map(|snapshot| runner.review(snapshot, as_of, config))
        .collect();

    println!("Reviews complete in {:?}", review_start.elapsed());

    let output_path = "block_review_output.csv";
    let mut file = File::create(output_path).context("creating output file")?;

    writeln!(
        file,
        "Client,Age,FinalNetWorth,PeakNetWorth,FirstShortfallAge,TotalShortfall,DeathGap,DisabilityGap,CiEarlyGap,CiLateGap"
    )?;

    let mut clients_with_shortfall = 0usize;
    let mut clients_unprojectable = 0usize;

    for (snapshot, review) in snapshots.iter().zip(&reviews) {
        let (final_nw, peak_nw, shortfall_age, total_shortfall) = match &review.projection {
            Some(projection) => {
                let summary = projection.summary();
                if summary.first_shortfall_age.is_some() {
                    clients_with_shortfall += 1;
                }
                (
                    summary.final_net_worth,
                    summary.peak_net_worth,
                    summary
                        .first_shortfall_age
                        .map(|a| a.to_string())
                        .unwrap_or_default(),
                    summary.total_shortfall,
                )
            }
            None => {
                clients_unprojectable += 1;
                (0.0, 0.0, String::new(), 0.0)
            }
        };

        writeln!(
            file,
            "{},{},{:.2},{:.2},{},{:.2},{:.2},{:.2},{:.2},{:.2}",
            snapshot.profile.name,
            review
                .current_age
                .map(|a| a.to_string())
                .unwrap_or_default(),
            final_nw,
            peak_nw,
            shortfall_age,
            total_shortfall,
            review.coverage.death.shortfall(),
            review.coverage.disability.shortfall(),
            review.coverage.ci_early.shortfall(),
            review.coverage.ci_late.shortfall(),
        )?;
    }

    println!("Output written to {}", output_path);

    println!("\nBlock Summary:");
    println!("  Clients reviewed: {}", reviews.len());
    println!("  With projected shortfall: {}", clients_with_shortfall);
    println!("  Missing birth date (not projectable): {}", clients_unprojectable);
    println!(
        "  Under-covered for death benefit: {}",
        reviews.iter().filter(|r| !r.coverage.death.is_met).count()
    );

    println!("\nTotal time: {:?}", start.elapsed());
    Ok(())
}
