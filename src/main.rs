mod cli;
mod config;

use cli::Args;
use config::ConfigFile;
use npm_spdx_sbom::prelude::*;
use std::path::{Path, PathBuf};
use std::process;

/// Manager name recorded when neither the config nor the CLI names one
const DEFAULT_MANAGER_NAME: &str = "npm";

fn main() {
    if let Err(e) = run() {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

fn run() -> Result<()> {
    // Parse command-line arguments; clap exits with code 2 on usage errors
    let args = Args::parse_args();

    let project_dir = args.path.as_deref().unwrap_or(".");
    let project_path = PathBuf::from(project_dir);

    validate_project_path(&project_path)?;

    let config = load_config(&args, &project_path)?.unwrap_or_default();
    let settings = Settings::merge(&args, config);

    let projector = GraphProjector::new(NpmSpecParser, SsriIntegrityParser, NpmManifestNormalizer)
        .with_namespace_base(settings.namespace_base.clone());

    let use_case = GenerateSbomUseCase::new(
        FileSystemReader::new(),
        StderrProgressReporter::new(),
        projector,
    );

    let request = SbomRequest::new(project_path, settings.manager.clone())
        .with_graph_path(args.graph.as_ref().map(PathBuf::from))
        .with_package_type(settings.package_type.clone());

    let response = use_case.execute(request)?;

    eprintln!("{}", FormatterFactory::progress_message(settings.style));
    let formatter = FormatterFactory::create(settings.style);
    let formatted_output = formatter.format(&response.document)?;

    let presenter =
        PresenterFactory::create(PresenterType::from_output(args.output.map(PathBuf::from)));
    presenter.present(&formatted_output)?;

    Ok(())
}

/// Effective settings after applying CLI overrides on top of the config file
#[derive(Debug, Clone, PartialEq, Eq)]
struct Settings {
    package_type: Option<String>,
    manager: ManagerInfo,
    namespace_base: String,
    style: OutputStyle,
}

impl Settings {
    fn merge(args: &Args, config: ConfigFile) -> Self {
        let manager_version = args.manager_version.clone().or(config.manager_version);
        let manager = match manager_version {
            Some(version) => ManagerInfo::new(
                config
                    .manager_name
                    .unwrap_or_else(|| DEFAULT_MANAGER_NAME.to_string()),
                version,
            ),
            // Without a known npm version the document credits this tool instead
            None => ManagerInfo::new(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
        };

        let style = if args.compact {
            OutputStyle::Compact
        } else {
            OutputStyle::from_pretty_flag(config.pretty.unwrap_or(true))
        };

        Self {
            package_type: args.package_type.clone().or(config.package_type),
            manager,
            namespace_base: config
                .namespace_base
                .unwrap_or_else(|| DEFAULT_NAMESPACE_BASE.to_string()),
            style,
        }
    }
}

/// Loads the explicit `--config` file, or auto-discovers one in the project directory
fn load_config(args: &Args, project_path: &Path) -> Result<Option<ConfigFile>> {
    if let Some(path) = args.config.as_deref() {
        return config::load_config_from_path(Path::new(path)).map(Some);
    }

    let discovered = config::discover_config(project_path)?;
    if discovered.is_some() {
        eprintln!(
            "📄 Auto-discovered config file: {}",
            project_path.join(config::CONFIG_FILENAME).display()
        );
    }
    Ok(discovered)
}

fn validate_project_path(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(SbomError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Directory does not exist".to_string(),
        }
        .into());
    }

    // Security check: Reject symbolic links for project paths
    let metadata = std::fs::symlink_metadata(path).map_err(|e| SbomError::InvalidProjectPath {
        path: path.to_path_buf(),
        reason: format!("Failed to read path metadata: {}", e),
    })?;

    if metadata.is_symlink() {
        return Err(SbomError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Security: Project path is a symbolic link. For security reasons, symbolic links are not allowed.".to_string(),
        }
        .into());
    }

    if !path.is_dir() {
        return Err(SbomError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Not a directory".to_string(),
        }
        .into());
    }

    Ok(())
}
