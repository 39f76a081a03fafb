use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

use gp_app::{
    AppError, AppResult, Command, Labels, NetworkReport, Outcome, Session, Target, load_script,
    run_script,
};
use gp_core::ElementId;
use gp_graph::{ElementKind, validate_network};

#[derive(Parser)]
#[command(name = "gp-cli")]
#[command(about = "Gas pipeline network builder and flow simulator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a scenario script and print the resulting gas annotations
    Run {
        /// Path to the scenario YAML file
        script_path: PathBuf,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// Run a scenario script and verify the network's structural integrity
    Check {
        /// Path to the scenario YAML file
        script_path: PathBuf,
    },
    /// Simulate a built-in source, valve and junction chain, closed then open
    Demo,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
    Yaml,
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            script_path,
            format,
        } => cmd_run(&script_path, format),
        Commands::Check { script_path } => cmd_check(&script_path),
        Commands::Demo => cmd_demo(),
    }
}

fn cmd_run(script_path: &Path, format: Format) -> AppResult<()> {
    let script = load_script(script_path)?;
    let run = run_script(&script)?;
    let report = run.report();
    info!(
        script = %script_path.display(),
        elements = report.elements.len(),
        connections = report.connections.len(),
        "scenario run complete"
    );
    print_report(&report, format)
}

fn cmd_check(script_path: &Path) -> AppResult<()> {
    println!("Checking scenario: {}", script_path.display());
    let script = load_script(script_path)?;
    let run = run_script(&script)?;
    validate_network(run.session.network())?;
    info!(script = %script_path.display(), "network integrity verified");

    let ignored = run
        .outcomes
        .iter()
        .filter(|o| matches!(o, Some(Outcome::Ignored)))
        .count();
    println!(
        "✓ {} steps, {} elements, {} connections",
        script.steps.len(),
        run.session.network().element_count(),
        run.session.network().connection_count()
    );
    if ignored > 0 {
        println!("  {} step(s) had no effect", ignored);
    }
    Ok(())
}

fn cmd_demo() -> AppResult<()> {
    let mut session = Session::default();
    let mut labels = Labels::default();

    let src = add(&mut session, &mut labels, ElementKind::GasSource, "source")?;
    let valve = add(&mut session, &mut labels, ElementKind::Switch, "valve")?;
    let junction = add(&mut session, &mut labels, ElementKind::Connector, "junction")?;
    connect(&mut session, &mut labels, src, valve, "feed")?;
    connect(&mut session, &mut labels, valve, junction, "outlet")?;

    println!("Valve closed:");
    session.apply(Command::Simulate);
    print_report(
        &NetworkReport::capture(session.network(), &labels, session.last_report()),
        Format::Text,
    )?;

    println!("\nValve open:");
    session.apply(Command::Toggle(valve));
    session.apply(Command::Simulate);
    print_report(
        &NetworkReport::capture(session.network(), &labels, session.last_report()),
        Format::Text,
    )
}

fn add(
    session: &mut Session,
    labels: &mut Labels,
    kind: ElementKind,
    label: &str,
) -> AppResult<ElementId> {
    match session.apply(Command::AddElement { kind, at: None }) {
        Outcome::ElementAdded(id) => {
            labels.insert(label, Target::Element(id))?;
            Ok(id)
        }
        other => Err(AppError::Script(format!(
            "could not add {}: {:?}",
            label, other
        ))),
    }
}

fn connect(
    session: &mut Session,
    labels: &mut Labels,
    a: ElementId,
    b: ElementId,
    label: &str,
) -> AppResult<()> {
    match session.apply(Command::Connect { a, b }) {
        Outcome::Connected(id) => labels.insert(label, Target::Connection(id)),
        other => Err(AppError::Script(format!(
            "could not connect {}: {:?}",
            label, other
        ))),
    }
}

fn print_report(report: &NetworkReport, format: Format) -> AppResult<()> {
    match format {
        Format::Text => print!("{}", report.render_text()),
        Format::Json => println!("{}", serde_json::to_string_pretty(report)?),
        Format::Yaml => print!(
            "{}",
            serde_yaml::to_string(report).map_err(|e| AppError::Serialize(e.to_string()))?
        ),
    }
    Ok(())
}
