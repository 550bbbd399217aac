/// Classification of a package specifier string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecType {
    /// Exact registry version (`name@1.2.3`)
    Version,
    /// Registry semver range (`name@^1.2.0`)
    Range,
    /// Registry dist-tag (`name@latest`)
    Tag,
    /// Git repository URL (`git+https://…`, `git://…`, `git@host:…`)
    Git,
    /// Repository on a known git host (`github:user/repo`, `user/repo`, …)
    Hosted,
    /// Arbitrary http(s) tarball URL
    Remote,
    /// Local tarball
    File,
    /// Local directory
    Directory,
}

impl SpecType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SpecType::Version => "version",
            SpecType::Range => "range",
            SpecType::Tag => "tag",
            SpecType::Git => "git",
            SpecType::Hosted => "hosted",
            SpecType::Remote => "remote",
            SpecType::File => "file",
            SpecType::Directory => "directory",
        }
    }

    pub fn is_git(&self) -> bool {
        matches!(self, SpecType::Git | SpecType::Hosted)
    }
}

/// A registry identifier split into its parts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedSpec {
    /// Full package name, including the `@scope/` prefix when scoped
    pub name: String,
    /// Scope with its leading `@`, e.g. `@babel`
    pub scope: Option<String>,
    /// Everything after the name separator, empty when absent
    pub raw_spec: String,
    pub spec_type: SpecType,
}

impl ParsedSpec {
    /// Name safe for use in a URL path segment: the scope separator becomes `%2f`
    pub fn escaped_name(&self) -> String {
        self.name.replace('/', "%2f")
    }
}

/// Tri-state result of classifying a node's resolved source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// Git repository or hosted git shortcut
    Git,
    /// Any other successfully classified source
    Other,
    /// No source recorded, or the source could not be parsed
    Unknown,
}
