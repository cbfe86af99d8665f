//! Active configuration resolver CLI.
//!
//! # Architecture Overview
//!
//! ```text
//!   manifest (TOML) ──▶ config::loader ──▶ SnapshotCatalog + ActiveConfigurationSlot
//!                                                   │
//!                                                   ▼
//!                                  ActiveConfiguredProjectsProvider
//!                                     │                     │
//!                                     ▼                     ▼
//!                          configuration::select_active   ConfiguredProjectLoader
//!                                                           │
//!                                                           ▼
//!                                                     CachingProject
//! ```
//!
//! # Commands
//! - `resolve`: print the active configurations
//! - `load`: load a configured project per active configuration
//! - `watch`: re-resolve whenever the manifest changes

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};

use active_configs::config::{load_config, watcher::ManifestWatcher, ResolverConfig};
use active_configs::configuration::ProjectConfiguration;
use active_configs::lifecycle::{signals::wait_for_shutdown, Cancellation};
use active_configs::observability::{logging::init_logging, metrics::init_metrics};
use active_configs::project::{
    ActiveConfigurationSlot, ActiveConfiguredProjectsProvider, CachingProject, SnapshotCatalog,
};

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

#[derive(Parser)]
#[command(name = "active-configs")]
#[command(about = "Resolve and load the active configurations of a project", long_about = None)]
struct Cli {
    /// Project manifest
    #[arg(short, long, default_value = "active-configs.toml")]
    manifest: PathBuf,

    /// Override the manifest's active configuration (e.g. "Debug|AnyCPU")
    #[arg(short, long)]
    active: Option<ProjectConfiguration>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the active configurations
    Resolve {
        /// Print as a JSON array
        #[arg(long)]
        json: bool,
    },
    /// Load a configured project for every active configuration
    Load,
    /// Print the active configurations every time the manifest changes
    Watch,
}

/// Collaborators built from one manifest.
struct Host {
    catalog: Arc<SnapshotCatalog>,
    active: Arc<ActiveConfigurationSlot>,
    project: Arc<CachingProject>,
    provider: ActiveConfiguredProjectsProvider,
}

impl Host {
    fn new(config: &ResolverConfig) -> CliResult<Self> {
        let catalog = Arc::new(SnapshotCatalog::new(config.project.configurations.clone()));
        let active = Arc::new(ActiveConfigurationSlot::new(config.project.active.clone()));
        let project = Arc::new(CachingProject::new(config.project.name.clone()));

        let provider = ActiveConfiguredProjectsProvider::builder()
            .catalog(catalog.clone())
            .active_configuration(active.clone())
            .project(project.clone())
            .loading(&config.loading)
            .build()?;

        Ok(Self {
            catalog,
            active,
            project,
            provider,
        })
    }

    /// Swap in a reloaded manifest.
    fn apply(&self, config: &ResolverConfig) {
        self.catalog.replace(config.project.configurations.clone());
        match &config.project.active {
            Some(active) => self.active.set(active.clone()),
            None => self.active.clear(),
        }
        self.project.retain_known(&config.project.configurations);
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> CliResult<()> {
    let mut config = load_config(&cli.manifest)?;
    if let Some(active) = &cli.active {
        config.project.active = Some(active.clone());
    }

    init_logging(&config.observability.log_level);

    tracing::info!(
        manifest = ?cli.manifest,
        project = %config.project.name,
        known = config.project.configurations.len(),
        active = ?config.project.active.as_ref().map(ToString::to_string),
        "Manifest loaded"
    );

    let host = Host::new(&config)?;

    match cli.command {
        Commands::Resolve { json } => {
            let active = host.provider.active_project_configurations().await?;
            print_configurations(&active, json)?;
        }
        Commands::Load => {
            let cancellation = Arc::new(Cancellation::new());
            let trigger = cancellation.clone();
            let interrupt = tokio::spawn(async move {
                wait_for_shutdown().await;
                trigger.trigger();
            });

            let loaded = host
                .provider
                .active_configured_projects(&cancellation.token())
                .await;
            interrupt.abort();

            println!("{}", serde_json::to_string_pretty(&loaded?)?);
        }
        Commands::Watch => watch(&cli, config, &host).await?,
    }

    Ok(())
}

async fn watch(cli: &Cli, config: ResolverConfig, host: &Host) -> CliResult<()> {
    if config.observability.metrics_enabled {
        init_metrics(config.observability.metrics_address.parse()?)?;
    }

    print_configurations(&host.provider.active_project_configurations().await?, false)?;

    let (watcher, mut updates) = ManifestWatcher::new(&cli.manifest, Some(config));
    let _handle = watcher.run()?;

    loop {
        tokio::select! {
            Some(mut reloaded) = updates.recv() => {
                if let Some(active) = &cli.active {
                    reloaded.project.active = Some(active.clone());
                }
                host.apply(&reloaded);
                match host.provider.active_project_configurations().await {
                    Ok(active) => print_configurations(&active, false)?,
                    Err(e) => {
                        tracing::error!(error = %e, "Failed to resolve active configurations")
                    }
                }
            }
            _ = wait_for_shutdown() => break,
        }
    }

    tracing::info!("Watch stopped");
    Ok(())
}

fn print_configurations(configurations: &[ProjectConfiguration], json: bool) -> CliResult<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(configurations)?);
    } else {
        for configuration in configurations {
            println!("{}", configuration);
        }
    }
    Ok(())
}
