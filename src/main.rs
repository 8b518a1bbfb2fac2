mod adapters;
mod application;
mod cli;
mod config;
mod graph_analysis;
mod ports;
mod shared;

use adapters::outbound::caching::CachingComponentRepository;
use adapters::outbound::console::StderrProgressReporter;
use adapters::outbound::filesystem::FileSystemScopeRepository;
use application::dto::{DependentsRequest, OutputFormat, ShowRequest};
use application::factories::{FormatterFactory, PresenterFactory};
use application::use_cases::{
    GraphLoadOptions, LoadGraphUseCase, QueryGraphUseCase, DEFAULT_MAX_CONCURRENT_FETCHES,
};
use cli::{Args, Command};
use config::{discover_config, load_config_from_path, ConfigFile};
use ports::inbound::GraphQueryPort;
use shared::error::{ExitCode, GraphError};
use shared::Result;
use std::path::{Path, PathBuf};
use std::process;

/// Effective settings after layering CLI flags over the config file
#[derive(Debug, Clone, PartialEq, Eq)]
struct Settings {
    format: OutputFormat,
    max_concurrency: usize,
    include_dev_dependencies: bool,
    fail_on_dependents: bool,
}

impl Settings {
    fn resolve(args: &Args, config: &ConfigFile) -> Self {
        let fail_on_dependents = match &args.command {
            Command::Dependents {
                fail_on_dependents, ..
            } => *fail_on_dependents,
            Command::Show { .. } => false,
        };

        Self {
            format: args
                .format
                .or_else(|| config.output_format())
                .unwrap_or_default(),
            max_concurrency: args
                .max_concurrency
                .or(config.max_concurrency)
                .unwrap_or(DEFAULT_MAX_CONCURRENT_FETCHES),
            include_dev_dependencies: args.include_dev
                || config.include_dev_dependencies.unwrap_or(false),
            fail_on_dependents: fail_on_dependents || config.fail_on_dependents.unwrap_or(false),
        }
    }
}

#[tokio::main]
async fn main() {
    let code = match run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            ExitCode::ApplicationError
        }
    };

    process::exit(code.as_i32());
}

async fn run() -> Result<ExitCode> {
    // Parse command-line arguments (clap exits with code 2 on invalid input)
    let args = Args::parse_args();

    let scope_path = PathBuf::from(args.path.as_deref().unwrap_or("."));
    validate_scope_path(&scope_path)?;

    let config = match args.config.as_deref() {
        Some(path) => load_config_from_path(Path::new(path))?,
        None => discover_config(&scope_path)?.unwrap_or_default(),
    };
    let settings = Settings::resolve(&args, &config);

    // Create adapters (Dependency Injection)
    let repository = CachingComponentRepository::new(FileSystemScopeRepository::new(scope_path));
    let progress_reporter = StderrProgressReporter::new();

    let load_graph = LoadGraphUseCase::new(
        repository,
        progress_reporter,
        GraphLoadOptions {
            max_concurrent_fetches: settings.max_concurrency,
            include_dev_dependencies: settings.include_dev_dependencies,
        },
    );
    let query = QueryGraphUseCase::new(load_graph.execute().await?);

    let formatter = FormatterFactory::create(settings.format);
    let presenter =
        PresenterFactory::create(PresenterFactory::presenter_type_for(args.output.map(PathBuf::from)));

    match args.command {
        Command::Dependents { ids, .. } => {
            let response = query.find_dependents(DependentsRequest::new(ids))?;

            eprintln!("{}", FormatterFactory::progress_message(settings.format));
            presenter.present(&formatter.format_dependents(&response)?)?;

            if settings.fail_on_dependents && response.has_dependents() {
                eprintln!(
                    "\n❌ {} identifier(s) still have dependents.",
                    response.dependents.len()
                );
                return Ok(ExitCode::CheckFailed);
            }
        }
        Command::Show { id, all_versions } => {
            let response = query.show(ShowRequest::new(id, all_versions))?;

            eprintln!("{}", FormatterFactory::progress_message(settings.format));
            presenter.present(&formatter.format_show(&response)?)?;

            if !response.is_found() {
                eprintln!("\n⚠️  Nothing found for '{}'.", response.query);
                return Ok(ExitCode::CheckFailed);
            }
        }
    }

    Ok(ExitCode::Success)
}

fn validate_scope_path(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(GraphError::InvalidScopePath {
            path: path.to_path_buf(),
            reason: "Directory does not exist".to_string(),
        }
        .into());
    }

    // Security check: Reject symbolic links for scope paths
    let metadata = std::fs::symlink_metadata(path).map_err(|e| GraphError::InvalidScopePath {
        path: path.to_path_buf(),
        reason: format!("Failed to read path metadata: {}", e),
    })?;

    if metadata.is_symlink() {
        return Err(GraphError::InvalidScopePath {
            path: path.to_path_buf(),
            reason: "Security: Scope path is a symbolic link. For security reasons, symbolic links are not allowed.".to_string(),
        }
        .into());
    }

    if !path.is_dir() {
        return Err(GraphError::InvalidScopePath {
            path: path.to_path_buf(),
            reason: "Not a directory".to_string(),
        }
        .into());
    }

    Ok(())
}
