use crate::{
    artifact::ArtifactRecord,
    config::JarctlConfig,
    correlator, display, lifecycle,
    local_logger::init_local_logger,
    prelude::*,
    scanner,
    snapshot::ProcessSnapshot,
};
use clap::{
    Parser, Subcommand,
    builder::{Styles, styling},
};

fn create_styles() -> Styles {
    styling::Styles::styled()
        .header(styling::AnsiColor::Green.on_default() | styling::Effects::BOLD)
        .usage(styling::AnsiColor::Green.on_default() | styling::Effects::BOLD)
        .literal(styling::AnsiColor::Cyan.on_default() | styling::Effects::BOLD)
        .placeholder(styling::AnsiColor::Cyan.on_default())
}

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Discover jar artifacts on disk and toggle them between running and stopped",
    styles = create_styles()
)]
pub struct Cli {
    /// The directory under which artifacts are discovered
    #[arg(long, env = "JARCTL_ROOT", global = true)]
    pub root: Option<String>,

    /// The substring a file name must contain to count as an artifact
    #[arg(long, env = "JARCTL_SUFFIX", global = true)]
    pub suffix: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Scan for artifacts and show which ones are currently running
    #[command(alias = "ls")]
    List,
    /// Launch a stopped artifact with the configured Java runtime
    Start { name: String },
    /// Terminate the process correlated to a running artifact
    Stop { name: String },
    /// Flip an artifact between running and stopped
    Toggle { name: String },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_local_logger()?;

    let config = JarctlConfig::load()?.with_overrides(cli.root.as_deref(), cli.suffix.as_deref());

    match cli.command {
        Commands::List => {
            let records = scan_and_correlate(&config)?;
            if records.is_empty() {
                info!(
                    "No artifact containing {:?} found under {}",
                    config.scan.suffix,
                    config.scan.root.display()
                );
            } else {
                println!("{}", display::render(&records));
            }
        }
        Commands::Start { name } => {
            let record = find_record(&config, &name)?;
            if record.running() {
                bail!(
                    "{} is already running (pid {})",
                    record.name,
                    record.pid_label()
                );
            }
            lifecycle::start(&config.runtime, &record)?;
        }
        Commands::Stop { name } => {
            let record = find_record(&config, &name)?;
            if !record.running() {
                bail!("{} is not running", record.name);
            }
            lifecycle::stop(&record)?;
        }
        Commands::Toggle { name } => {
            let record = find_record(&config, &name)?;
            lifecycle::toggle(&config.runtime, &record)?;
        }
    }

    Ok(())
}

/// One pass of the engine: snapshot the process table once, then correlate
/// every discovered artifact against that frozen snapshot.
fn scan_and_correlate(config: &JarctlConfig) -> Result<Vec<ArtifactRecord>> {
    let snapshot = ProcessSnapshot::capture()?;
    let mut records = scanner::scan(&config.scan.root, &config.scan.suffix)?;
    correlator::correlate(&mut records, &snapshot);
    Ok(records)
}

/// Resolve an operator-supplied artifact name against a fresh scan. Exact
/// file-name match; with duplicate names the first record in scan order wins.
fn find_record(config: &JarctlConfig, name: &str) -> Result<ArtifactRecord> {
    let records = scan_and_correlate(config)?;
    records.into_iter().find(|r| r.name == name).ok_or_else(|| {
        anyhow!(
            "No artifact named {:?} under {}",
            name,
            config.scan.root.display()
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }
}
