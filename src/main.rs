//! Advisory Engine CLI
//!
//! Runs a full client review (wealth projection, coverage gaps, holding
//! performance, education goals) from a snapshot file or a built-in sample.

use advisory_engine::analysis::CategoryAssessment;
use advisory_engine::money::format_amount;
use advisory_engine::projection::{ProjectionConfig, WithdrawalOrder};
use advisory_engine::snapshot::{
    load_snapshot, AccountSegment, Child, ClientProfile, ClientSnapshot, ContributionSchedule,
    CoverageAmounts, Frequency, Gender, InsurancePolicy, InvestmentHolding, SegmentedAccount,
};
use advisory_engine::{AssumptionSet, ScenarioRunner};
use anyhow::Context;
use chrono::{NaiveDate, Utc};
use clap::Parser;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser)]
#[command(about = "Deterministic client review: projection and gap analysis")]
struct Args {
    /// Client snapshot JSON file (a built-in sample client when omitted)
    #[arg(long)]
    snapshot: Option<PathBuf>,

    /// Review date, YYYY-MM-DD (today when omitted)
    #[arg(long)]
    as_of: Option<NaiveDate>,

    /// Horizon age override (default: later of life expectancy and retirement age)
    #[arg(long)]
    horizon: Option<u8>,

    /// Withdraw retirement expenses proportionally instead of cash-first
    #[arg(long)]
    pro_rata: bool,

    /// Directory of assumption CSVs (built-in defaults when omitted)
    #[arg(long)]
    assumptions: Option<PathBuf>,

    /// Output CSV path for the projection series
    #[arg(long, default_value = "projection_output.csv")]
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    println!("Advisory Engine v0.1.0");
    println!("======================\n");

    let snapshot = match &args.snapshot {
        Some(path) => load_snapshot(path)
            .with_context(|| format!("loading snapshot {}", path.display()))?,
        None => sample_snapshot(),
    };

    let assumptions = match &args.assumptions {
        Some(path) => AssumptionSet::from_csv_path(path)
            .with_context(|| format!("loading assumptions from {}", path.display()))?,
        None => AssumptionSet::default_advisory(),
    };

    let as_of = args.as_of.unwrap_or_else(|| Utc::now().date_naive());
    let config = ProjectionConfig {
        horizon_age: args.horizon,
        withdrawal_order: if args.pro_rata {
            WithdrawalOrder::ProRata
        } else {
            WithdrawalOrder::CashFirst
        },
    };

    let runner = ScenarioRunner::with_assumptions(assumptions);
    let review = runner.review(&snapshot, as_of, config);

    println!("Client: {}", snapshot.profile.name);
    match review.current_age {
        Some(age) => println!("  Age: {}", age),
        None => println!("  Age: unavailable (no birth date on record)"),
    }
    println!("  Monthly income: {}", format_amount(snapshot.profile.monthly_income));
    println!("  Retirement age: {}", snapshot.profile.retirement_age);
    println!();

    if let Some(projection) = &review.projection {
        println!("Wealth Projection ({} ages):", projection.rows.len());
        println!(
            "{:>4} {:>14} {:>14} {:>14} {:>16} {:>14} {:>12}",
            "Age", "Cash", "Investments", "Retirement", "Net Worth", "Expense", "Shortfall"
        );
        println!("{}", "-".repeat(94));

        for row in projection.rows.iter().take(20) {
            println!(
                "{:>4} {:>14} {:>14} {:>14} {:>16} {:>14} {:>12}",
                row.age,
                format_amount(row.cash),
                format_amount(row.investments),
                format_amount(row.retirement_total),
                format_amount(row.total_net_worth),
                format_amount(row.annual_expense),
                format_amount(row.shortfall),
            );
        }
        if projection.rows.len() > 20 {
            println!("... ({} more ages)", projection.rows.len() - 20);
        }

        let mut file = File::create(&args.output)
            .with_context(|| format!("creating {}", args.output.display()))?;
        writeln!(file, "Age,Cash,Investments,Retirement,TotalNetWorth,AnnualExpense,Shortfall")?;
        for row in &projection.rows {
            writeln!(
                file,
                "{},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2}",
                row.age,
                row.cash,
                row.investments,
                row.retirement_total,
                row.total_net_worth,
                row.annual_expense,
                row.shortfall,
            )?;
        }
        println!("\nFull series written to: {}", args.output.display());

        let summary = projection.summary();
        println!("\nSummary:");
        println!("  Final age: {}", summary.final_age);
        println!("  Final net worth: {}", format_amount(summary.final_net_worth));
        println!("  Peak net worth: {}", format_amount(summary.peak_net_worth));
        match summary.first_shortfall_age {
            Some(age) => println!(
                "  FIRST SHORTFALL at age {} (total unmet: {})",
                age,
                format_amount(summary.total_shortfall)
            ),
            None => println!("  No retirement shortfall projected"),
        }
    } else {
        println!("Wealth projection unavailable: profile has no usable birth date.");
    }

    println!("\nProtection Coverage:");
    print_category("Death", &review.coverage.death);
    print_category("Disability", &review.coverage.disability);
    print_category("CI (early)", &review.coverage.ci_early);
    print_category("CI (late)", &review.coverage.ci_late);

    if !review.holdings.is_empty() {
        println!("\nHolding Performance:");
        for (holding, report) in snapshot.holdings.iter().zip(&review.holdings) {
            match report {
                Some(r) => println!(
                    "  {}: invested {} | P/L {} ({:.2}%) | annualized {:.2}%",
                    holding.name,
                    format_amount(r.invested),
                    format_amount(r.profit_loss),
                    r.profit_loss_pct,
                    r.annualized_return_pct,
                ),
                None => println!("  {}: cost basis unavailable", holding.name),
            }
        }
    }

    if !review.education_goals.is_empty() {
        println!("\nEducation Goals:");
        for (child, goal) in snapshot.children.iter().zip(&review.education_goals) {
            match goal {
                Some(g) => println!(
                    "  {}: {} at age {} (in {} years){}",
                    g.child_name,
                    format_amount(g.future_cost),
                    g.start_age,
                    g.years_until_start,
                    g.parent_age_at_start
                        .map(|a| format!(", client will be {}", a))
                        .unwrap_or_default(),
                ),
                None => println!("  {}: unavailable (no birth date)", child.name),
            }
        }
    }

    Ok(())
}

fn print_category(label: &str, assessment: &CategoryAssessment) {
    println!(
        "  {:<11} current {:>14} | required {:>14} | {}",
        label,
        format_amount(assessment.current),
        format_amount(assessment.required),
        if assessment.is_met {
            format!("surplus {}", format_amount(-assessment.gap))
        } else {
            format!("GAP {}", format_amount(assessment.shortfall()))
        },
    );
}

/// Built-in sample client used when no snapshot file is supplied.
fn sample_snapshot() -> ClientSnapshot {
    let birth = NaiveDate::from_ymd_opt(1990, 4, 12);
    ClientSnapshot {
        profile: ClientProfile {
            name: "Sample Client".into(),
            gender: Some(Gender::Female),
            birth_date: birth,
            monthly_income: 6500.0,
            monthly_savings: 900.0,
            monthly_investment: 600.0,
            monthly_expenses: 3200.0,
            retirement_age: 65,
            life_expectancy: 90,
        },
        retirement_account: SegmentedAccount {
            segments: vec![
                AccountSegment {
                    name: "ordinary".into(),
                    balance: 78_000.0,
                    annual_rate: 0.025,
                    contribution_cutoff_age: None,
                },
                AccountSegment {
                    name: "special".into(),
                    balance: 42_000.0,
                    annual_rate: 0.04,
                    contribution_cutoff_age: Some(55),
                },
                AccountSegment {
                    name: "health".into(),
                    balance: 31_000.0,
                    annual_rate: 0.04,
                    contribution_cutoff_age: None,
                },
            ],
        },
        cash_balance: 45_000.0,
        investment_balance: 68_000.0,
        holdings: vec![InvestmentHolding {
            name: "Index fund".into(),
            current_value: 68_000.0,
            schedule: ContributionSchedule {
                amount: 600.0,
                frequency: Frequency::Monthly,
                inception: NaiveDate::from_ymd_opt(2018, 7, 1),
            },
            cost_basis_override: None,
        }],
        policies: vec![InsurancePolicy {
            name: "Term life".into(),
            coverage: CoverageAmounts {
                death: 500_000.0,
                disability: 250_000.0,
                ci_early: 0.0,
                ci_late: 100_000.0,
            },
            annual_premium_cash: 1450.0,
            annual_premium_retirement: 0.0,
        }],
        children: vec![Child {
            name: "Alex".into(),
            gender: Gender::Male,
            birth_date: NaiveDate::from_ymd_opt(2019, 9, 3),
            education_cost_today: 120_000.0,
        }],
    }
}
