use clap::Parser;

/// Generate SPDX 2.3 SBOMs from resolved npm dependency graphs
#[derive(Parser, Debug)]
#[command(name = "npm-spdx-sbom")]
#[command(version)]
#[command(about = "Generate SPDX 2.3 SBOMs from resolved npm dependency graphs", long_about = None)]
pub struct Args {
    /// Path to the project directory (defaults to current directory)
    #[arg(short, long)]
    pub path: Option<String>,

    /// Graph snapshot file (defaults to npm-graph.json in the project directory)
    #[arg(short, long)]
    pub graph: Option<String>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Purpose of the root package, e.g. "application" or "library"
    #[arg(short = 't', long = "package-type", value_name = "TYPE")]
    pub package_type: Option<String>,

    /// npm version recorded in creationInfo.creators
    #[arg(long = "manager-version", value_name = "VERSION")]
    pub manager_version: Option<String>,

    /// Write single-line JSON instead of pretty-printed output
    #[arg(long)]
    pub compact: bool,

    /// Path to config file (auto-discovers npm-sbom.config.yml if not specified)
    #[arg(short, long)]
    pub config: Option<String>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults() {
        let args = Args::try_parse_from(["npm-spdx-sbom"]).unwrap();
        assert!(args.path.is_none());
        assert!(args.graph.is_none());
        assert!(args.output.is_none());
        assert!(args.package_type.is_none());
        assert!(args.manager_version.is_none());
        assert!(!args.compact);
        assert!(args.config.is_none());
    }

    #[test]
    fn test_parse_all_flags() {
        let args = Args::try_parse_from([
            "npm-spdx-sbom",
            "-p",
            "/work/app",
            "-g",
            "graph.json",
            "-o",
            "sbom.spdx.json",
            "-t",
            "application",
            "--manager-version",
            "10.2.4",
            "--compact",
            "-c",
            "custom.yml",
        ])
        .unwrap();

        assert_eq!(args.path.as_deref(), Some("/work/app"));
        assert_eq!(args.graph.as_deref(), Some("graph.json"));
        assert_eq!(args.output.as_deref(), Some("sbom.spdx.json"));
        assert_eq!(args.package_type.as_deref(), Some("application"));
        assert_eq!(args.manager_version.as_deref(), Some("10.2.4"));
        assert!(args.compact);
        assert_eq!(args.config.as_deref(), Some("custom.yml"));
    }

    #[test]
    fn test_parse_unknown_flag_rejected() {
        let result = Args::try_parse_from(["npm-spdx-sbom", "--format", "cyclonedx"]);
        assert!(result.is_err());
    }
}
