mod summary;
mod tui;

use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use liftlog_core::service::dashboard::DEFAULT_TEMPLATE;
use liftlog_core::service::frequency::window_start;
use liftlog_core::usecase::dashboard::build_dashboard;
use liftlog_core::usecase::generate::generate_log;
use liftlog_core::{
    default_classification, load_classification, Archetype, ArchetypeParseError,
    ClassificationTable, FileSummaryRepository, FileWorkoutLogRepository, ProcessLogUseCase,
    ProcessReport, SummaryDocument, SummaryRepository, Workspace,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "liftlog")]
#[command(about = "Weekly training summaries from workout log exports", long_about = None)]
struct Cli {
    /// Base directory for logs, summaries and dashboards (default: ~/.liftlog)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// JSON exercise classification table replacing the built-in one
    #[arg(long, global = true)]
    table: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Write synthetic workout logs
    Generate {
        #[arg(default_value = "all")]
        target: Target,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Aggregate workout logs into weekly JSON summaries
    Process {
        #[arg(default_value = "all")]
        target: Target,
        /// Log to read instead of the workspace one (single archetype only)
        #[arg(long)]
        input: Option<PathBuf>,
        /// Summary to write instead of the workspace one (single archetype only)
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Render HTML dashboards from JSON summaries
    Dashboard {
        #[arg(default_value = "all")]
        target: Target,
        #[arg(long)]
        template: Option<PathBuf>,
    },
    /// Generate, process and render every archetype
    Run {
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        template: Option<PathBuf>,
    },
    /// Show weekly metrics for one archetype
    Summary {
        archetype: Archetype,
        /// Only exercises whose name contains this text
        #[arg(long)]
        exercise: Option<String>,
    },
    /// Show how often each muscle is trained per week
    Frequency {
        archetype: Archetype,
        /// Number of days to look back from the newest logged week
        #[arg(long, default_value_t = 90)]
        days: u64,
        /// Count weeks from this date (YYYY-MM-DD) instead of using --days
        #[arg(long)]
        since: Option<NaiveDate>,
    },
    /// Browse one archetype's exercises in the terminal
    Tui { archetype: Archetype },
}

/// An archetype, or `all` of them.
#[derive(Clone, Copy, Debug)]
enum Target {
    All,
    One(Archetype),
}

impl Target {
    fn archetypes(self) -> Vec<Archetype> {
        match self {
            Target::All => Archetype::ALL.to_vec(),
            Target::One(archetype) => vec![archetype],
        }
    }
}

impl FromStr for Target {
    type Err = ArchetypeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(Target::All)
        } else {
            s.parse().map(Target::One)
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_table(path: Option<&PathBuf>) -> Result<ClassificationTable> {
    match path {
        Some(path) => load_classification(path),
        None => Ok(default_classification()),
    }
}

fn load_template(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read template {}", path.display())),
        None => Ok(DEFAULT_TEMPLATE.to_string()),
    }
}

fn resolve_seed(seed: Option<u64>) -> u64 {
    let seed = seed.unwrap_or_else(rand::random);
    info!(seed, "using generator seed");
    seed
}

fn archetype_rng(seed: u64, archetype: Archetype) -> StdRng {
    StdRng::seed_from_u64(seed.wrapping_add(u64::from(archetype.number())))
}

fn print_report(report: &ProcessReport) {
    println!("  - {} exercises", report.exercises);
    println!("  - {} total week entries", report.week_entries);
    if report.warmup_sets > 0 {
        println!("  - {} warmup sets ignored", report.warmup_sets);
    }
    for (name, count) in &report.unknown_exercises {
        println!("  - skipped unknown exercise '{}' ({} sets)", name, count);
    }
}

fn load_summary(workspace: &Workspace, archetype: Archetype) -> Result<SummaryDocument> {
    FileSummaryRepository::new(workspace.summary_path(archetype)).load()
}

/// Generates, processes and renders one archetype with its own state.
fn run_archetype(
    archetype: Archetype,
    workspace: &Workspace,
    table: &ClassificationTable,
    template: &str,
    seed: u64,
) -> Result<(usize, ProcessReport)> {
    let log_repo = FileWorkoutLogRepository::new(workspace.log_path(archetype));
    let summary_repo = FileSummaryRepository::new(workspace.summary_path(archetype));

    let rows = generate_log(archetype, &log_repo, &mut archetype_rng(seed, archetype))?;
    let report = ProcessLogUseCase::new(&log_repo, &summary_repo, table).execute()?;
    build_dashboard(archetype, &summary_repo, template, &workspace.dashboard_path(archetype))?;
    Ok((rows, report))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let workspace = Workspace::new(cli.data_dir.clone())?;

    match cli.command {
        Commands::Generate { target, seed } => {
            let seed = resolve_seed(seed);
            for archetype in target.archetypes() {
                let log_repo = FileWorkoutLogRepository::new(workspace.log_path(archetype));
                let rows = generate_log(archetype, &log_repo, &mut archetype_rng(seed, archetype))?;
                println!("Generated {} ({} sets)", log_repo.path().display(), rows);
            }
        }
        Commands::Process { target, input, output } => {
            let archetypes = target.archetypes();
            if archetypes.len() > 1 && (input.is_some() || output.is_some()) {
                bail!("--input and --output need a single archetype");
            }
            let table = load_table(cli.table.as_ref())?;
            for archetype in archetypes {
                let log_path = input.clone().unwrap_or_else(|| workspace.log_path(archetype));
                let summary_path =
                    output.clone().unwrap_or_else(|| workspace.summary_path(archetype));
                let log_repo = FileWorkoutLogRepository::new(log_path);
                let summary_repo = FileSummaryRepository::new(summary_path);

                println!("Processing {}", log_repo.path().display());
                let report = ProcessLogUseCase::new(&log_repo, &summary_repo, &table).execute()?;
                println!("  Created {}", summary_repo.path().display());
                print_report(&report);
            }
        }
        Commands::Dashboard { target, template } => {
            let template = load_template(template.as_ref())?;
            for archetype in target.archetypes() {
                let summary_repo = FileSummaryRepository::new(workspace.summary_path(archetype));
                let output = workspace.dashboard_path(archetype);
                let shown = build_dashboard(archetype, &summary_repo, &template, &output)?;
                println!("  Created {} ({} exercises)", output.display(), shown);
            }
        }
        Commands::Run { seed, template } => {
            let seed = resolve_seed(seed);
            let table = load_table(cli.table.as_ref())?;
            let template = load_template(template.as_ref())?;

            let results: Vec<(Archetype, Result<(usize, ProcessReport)>)> = Archetype::ALL
                .par_iter()
                .map(|&archetype| {
                    let result = run_archetype(archetype, &workspace, &table, &template, seed);
                    (archetype, result)
                })
                .collect();

            let mut failed = 0;
            for (archetype, result) in results {
                println!("Processing {}", archetype.version_label());
                match result {
                    Ok((rows, report)) => {
                        println!("  Generated {} sets", rows);
                        print_report(&report);
                        println!("  Created {}", workspace.dashboard_path(archetype).display());
                    }
                    Err(e) => {
                        error!(archetype = archetype.slug(), "run failed: {:#}", e);
                        println!("  Failed: {:#}", e);
                        failed += 1;
                    }
                }
            }
            if failed > 0 {
                bail!("{} of {} archetypes failed", failed, Archetype::ALL.len());
            }
            println!("Dashboards written to {}", workspace.base_dir().join("dashboards").display());
        }
        Commands::Summary { archetype, exercise } => {
            let document = load_summary(&workspace, archetype)?;
            println!("{}", archetype.version_label());
            summary::show_summary(&document, exercise.as_deref());
        }
        Commands::Frequency { archetype, days, since } => {
            let document = load_summary(&workspace, archetype)?;
            let since = since
                .or_else(|| window_start(&document, days))
                .unwrap_or(NaiveDate::MIN);
            println!("{}", archetype.version_label());
            summary::show_frequency(&document, since);
        }
        Commands::Tui { archetype } => {
            let document = load_summary(&workspace, archetype)?;
            tui::run(archetype, document)?;
        }
    }
    Ok(())
}
