use crate::ports::outbound::PackageSpecParser;
use crate::sbom_generation::domain::{ParsedSpec, SpecType};
use crate::shared::Result;
use url::Url;

/// Maximum length of an npm package name
const MAX_NAME_LENGTH: usize = 214;

/// Hosts whose repository URLs count as hosted git sources
const GIT_HOSTS: [&str; 3] = ["github.com", "gitlab.com", "bitbucket.org"];

/// Shortcut prefixes for hosted git repositories
const HOSTED_SHORTCUTS: [&str; 4] = ["github:", "gitlab:", "bitbucket:", "gist:"];

/// NpmSpecParser adapter implementing npm package specifier semantics
///
/// Covers the subset of npm's specifier grammar that shows up in resolved
/// install trees: registry identifiers (`name@spec`), tarball URLs, git URLs,
/// hosted shortcuts and local paths.
#[derive(Debug, Clone, Copy, Default)]
pub struct NpmSpecParser;

impl NpmSpecParser {
    pub fn new() -> Self {
        Self
    }

    /// Splits `name@spec`, skipping the `@` that opens a scope
    fn split_identifier(identifier: &str) -> (&str, &str) {
        let search_from = usize::from(identifier.starts_with('@'));
        match identifier[search_from..].find('@') {
            Some(i) => {
                let at = search_from + i;
                (&identifier[..at], &identifier[at + 1..])
            }
            None => (identifier, ""),
        }
    }

    /// Validates a package name and returns its scope, if any
    fn validate_name(name: &str) -> Result<Option<String>> {
        if name.is_empty() {
            anyhow::bail!("package name cannot be empty");
        }
        if name.len() > MAX_NAME_LENGTH {
            anyhow::bail!(
                "package name is too long ({} bytes, maximum {})",
                name.len(),
                MAX_NAME_LENGTH
            );
        }
        if name.trim() != name {
            anyhow::bail!("package name cannot contain leading or trailing spaces");
        }

        let (scope, bare) = match name.strip_prefix('@') {
            Some(scoped) => {
                let (scope, bare) = scoped.split_once('/').ok_or_else(|| {
                    anyhow::anyhow!("scoped package name '{}' is missing '/'", name)
                })?;
                if scope.is_empty() || !is_url_safe(scope) {
                    anyhow::bail!("invalid scope in package name '{}'", name);
                }
                (Some(format!("@{}", scope)), bare)
            }
            None => (None, name),
        };

        if bare.is_empty() {
            anyhow::bail!("package name '{}' has an empty name part", name);
        }
        if bare.starts_with('.') || bare.starts_with('_') {
            anyhow::bail!("package name '{}' cannot start with a period or underscore", name);
        }
        if !is_url_safe(bare) {
            anyhow::bail!("package name '{}' contains URL-unsafe characters", name);
        }
        if scope.is_none() && matches!(bare, "node_modules" | "favicon.ico") {
            anyhow::bail!("'{}' is a reserved package name", name);
        }

        Ok(scope)
    }

    /// Classifies the spec part of a registry identifier
    fn registry_spec_type(&self, spec: &str) -> Result<SpecType> {
        if spec.is_empty() {
            return Ok(SpecType::Tag);
        }
        if looks_like_locator(spec) {
            return self.parse_source(spec);
        }
        if semver::Version::parse(spec).is_ok() {
            return Ok(SpecType::Version);
        }
        if semver::VersionReq::parse(spec).is_ok() {
            return Ok(SpecType::Range);
        }
        if is_url_safe(spec) {
            return Ok(SpecType::Tag);
        }
        anyhow::bail!("invalid tag name '{}'", spec)
    }

    fn classify_url(source: &str) -> Result<SpecType> {
        let url = Url::parse(source)
            .map_err(|e| anyhow::anyhow!("invalid URL '{}': {}", source, e))?;

        match url.scheme() {
            "git" | "ssh" | "git+ssh" | "git+https" | "git+http" | "git+file" => Ok(SpecType::Git),
            "http" | "https" => {
                let on_git_host = url
                    .host_str()
                    .map(|host| GIT_HOSTS.contains(&host.trim_start_matches("www.")))
                    .unwrap_or(false);
                if on_git_host && is_repository_path(&url) {
                    Ok(SpecType::Hosted)
                } else {
                    Ok(SpecType::Remote)
                }
            }
            "file" => Ok(local_spec_type(url.path())),
            other => anyhow::bail!("unsupported URL type '{}'", other),
        }
    }
}

impl PackageSpecParser for NpmSpecParser {
    fn parse_identifier(&self, identifier: &str) -> Result<ParsedSpec> {
        let (name, spec) = Self::split_identifier(identifier);
        let scope = Self::validate_name(name)?;
        let spec_type = self.registry_spec_type(spec)?;

        Ok(ParsedSpec {
            name: name.to_string(),
            scope,
            raw_spec: spec.to_string(),
            spec_type,
        })
    }

    fn parse_source(&self, source: &str) -> Result<SpecType> {
        if source.trim().is_empty() {
            anyhow::bail!("source is empty");
        }
        if source.chars().any(char::is_whitespace) {
            anyhow::bail!("source '{}' contains whitespace", source);
        }

        if HOSTED_SHORTCUTS.iter().any(|prefix| source.starts_with(prefix)) {
            return Ok(SpecType::Hosted);
        }
        if is_scp_like_git(source) {
            return Ok(SpecType::Git);
        }
        if let Some(path) = source.strip_prefix("file:") {
            return Ok(local_spec_type(path));
        }
        if ["/", "./", "../", "~/"].iter().any(|p| source.starts_with(p)) {
            return Ok(local_spec_type(source));
        }
        if source.contains("://") {
            return Self::classify_url(source);
        }
        if is_hosted_shorthand(source) {
            return Ok(SpecType::Hosted);
        }

        self.parse_identifier(source).map(|parsed| parsed.spec_type)
    }

    fn to_purl(&self, identifier: &str) -> Result<String> {
        let parsed = self.parse_identifier(identifier)?;
        if parsed.spec_type != SpecType::Version {
            anyhow::bail!(
                "only 'version' type specs can be converted to purl, '{}' is '{}'",
                identifier,
                parsed.spec_type.as_str()
            );
        }

        let encoded_name = match parsed.scope.as_deref() {
            Some(scope) => {
                let bare = parsed
                    .name
                    .strip_prefix(scope)
                    .map_or(parsed.name.as_str(), |rest| rest.trim_start_matches('/'));
                format!(
                    "{}/{}",
                    urlencoding::encode(scope),
                    urlencoding::encode(bare)
                )
            }
            None => urlencoding::encode(&parsed.name).into_owned(),
        };

        Ok(format!("pkg:npm/{}@{}", encoded_name, parsed.raw_spec))
    }
}

/// Characters left untouched by JavaScript's `encodeURIComponent`
fn is_url_safe(value: &str) -> bool {
    value.chars().all(|c| {
        c.is_ascii_alphanumeric()
            || matches!(c, '-' | '_' | '.' | '!' | '~' | '*' | '\'' | '(' | ')')
    })
}

fn looks_like_locator(spec: &str) -> bool {
    spec.contains(':') || spec.contains('/')
}

/// `git@github.com:user/repo.git`
fn is_scp_like_git(source: &str) -> bool {
    source
        .strip_prefix("git@")
        .and_then(|rest| rest.split_once(':'))
        .is_some_and(|(host, path)| !host.is_empty() && !path.is_empty())
}

/// `user/repo` or `user/repo#committish`
fn is_hosted_shorthand(source: &str) -> bool {
    let repo = source.split('#').next().unwrap_or(source);
    match repo.split_once('/') {
        Some((user, project)) => {
            !user.is_empty()
                && !project.is_empty()
                && !user.starts_with('@')
                && !project.contains('/')
                && !project.contains('@')
                && is_url_safe(user)
                && is_url_safe(project)
        }
        None => false,
    }
}

/// Repository rather than a tarball: `.git` suffix or a `#committish`
fn is_repository_path(url: &Url) -> bool {
    let path = url.path();
    if path.contains("/tarball/") || path.contains("/archive/") {
        return false;
    }
    if path.ends_with(".tgz") || path.ends_with(".tar.gz") {
        return false;
    }
    path.ends_with(".git") || url.fragment().is_some()
}

fn local_spec_type(path: &str) -> SpecType {
    if path.ends_with(".tgz") || path.ends_with(".tar.gz") || path.ends_with(".tar") {
        SpecType::File
    } else {
        SpecType::Directory
    }
}
