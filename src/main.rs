use anyhow::Result;
use clap::Parser;

use modver::calculator::VersionCalculator;
use modver::config;
use modver::source::GitCommitSource;
use modver::ui;

#[derive(clap::Parser)]
#[command(
    name = "modver",
    about = "Calculate semantic version bumps for multi-module repositories"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(long, default_value = ".", help = "Path to the git repository")]
    repo: String,

    #[arg(long, help = "Only consider commits after this rev (e.g. a release tag)")]
    since: Option<String>,

    #[arg(long, help = "Produce prerelease versions instead of releases")]
    prerelease: bool,

    #[arg(
        long,
        help = "Also version unchanged modules in a prerelease run"
    )]
    include_unchanged: bool,

    #[arg(long, help = "Stamp the HEAD commit id as build metadata")]
    build_metadata: bool,

    #[arg(long, help = "Append the snapshot suffix to computed versions")]
    snapshot: bool,

    #[arg(long, help = "Show configured modules and exit")]
    list: bool,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.version {
        println!("modver {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // Load configuration (includes the module manifest)
    let mut config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };

    // CLI flags OR into the configured run modes
    config.modes.prerelease |= args.prerelease;
    config.modes.include_unchanged |= args.include_unchanged;
    config.modes.build_metadata |= args.build_metadata;
    config.modes.snapshot |= args.snapshot;

    if config.modules.is_empty() {
        ui::display_error("No modules configured in modver.toml");
        std::process::exit(1);
    }

    let graph = match config.build_graph() {
        Ok(graph) => graph,
        Err(e) => {
            ui::display_error(&format!("Module manifest error: {}", e));
            std::process::exit(1);
        }
    };

    if args.list {
        ui::display_modules(&graph);
        return Ok(());
    }

    let mut source = match GitCommitSource::open(&args.repo) {
        Ok(source) => source,
        Err(e) => {
            ui::display_error(&format!("Git repository error: {}", e));
            std::process::exit(1);
        }
    };

    if let Some(rev) = &args.since {
        let repo = git2::Repository::discover(&args.repo)?;
        let oid = repo
            .revparse_single(rev)?
            .peel(git2::ObjectType::Commit)?
            .id();
        source = source.since(oid);
    }

    let build_metadata = if config.modes.build_metadata {
        Some(source.head_short_hash()?)
    } else {
        None
    };

    ui::display_status(&format!(
        "Calculating version bumps for {} modules...",
        graph.len()
    ));

    let calculator = VersionCalculator::new(&config)?;
    let outcome = calculator.calculate(&graph, &source, build_metadata)?;

    for warning in &outcome.warnings {
        ui::display_warning(warning);
    }

    ui::display_changes(&outcome.changes);

    if !outcome.changes.is_empty() {
        ui::display_success(&format!(
            "{} of {} modules need a new version",
            outcome.changes.len(),
            graph.len()
        ));
    }

    Ok(())
}
