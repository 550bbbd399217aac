use crate::ports::outbound::ManifestNormalizer;
use crate::sbom_generation::domain::{GraphNode, LicenseField, PackageMetadata, RepositoryField};
use crate::sbom_generation::policies::LicensePriority;
use url::Url;

/// Git hosts with a known web view, keyed by shortcut prefix
const HOSTS: [(&str, &str); 3] = [
    ("github", "github.com"),
    ("gitlab", "gitlab.com"),
    ("bitbucket", "bitbucket.org"),
];

/// NpmManifestNormalizer adapter applying npm's manifest cleanup rules
///
/// Works on a copy of the node's manifest:
/// - `name` and `version` fall back to the node's own values
/// - string fields are trimmed and empty strings dropped
/// - legacy `license` objects and `licenses` arrays fold into one expression
/// - a missing `homepage` is derived from a hosted git `repository`
#[derive(Debug, Clone, Copy, Default)]
pub struct NpmManifestNormalizer;

impl NpmManifestNormalizer {
    pub fn new() -> Self {
        Self
    }

    fn fold_license(metadata: &PackageMetadata) -> Option<LicenseField> {
        LicensePriority::select_license(metadata.license.as_ref(), &metadata.licenses)
            .map(|expr| expr.trim().to_string())
            .filter(|expr| !expr.is_empty())
            .map(LicenseField::Expression)
    }

    /// `https://<host>/<user>/<project>#readme` for repositories on a known host
    fn homepage_from_repository(repository: &RepositoryField) -> Option<String> {
        let (domain, user, project) = hosted_repository(repository.url()?.trim())?;
        Some(format!("https://{}/{}/{}#readme", domain, user, project))
    }
}

impl ManifestNormalizer for NpmManifestNormalizer {
    fn normalize(&self, node: &GraphNode) -> PackageMetadata {
        let source = node.metadata().cloned().unwrap_or_default();

        let homepage = trimmed(source.homepage.clone()).or_else(|| {
            source
                .repository
                .as_ref()
                .and_then(Self::homepage_from_repository)
        });

        PackageMetadata {
            name: trimmed(source.name.clone()).or_else(|| Some(node.name().to_string())),
            version: trimmed(source.version.clone()).or_else(|| Some(node.version().to_string())),
            description: trimmed(source.description.clone()),
            homepage,
            license: Self::fold_license(&source),
            licenses: Vec::new(),
            repository: source.repository,
        }
    }
}

fn trimmed(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Splits a repository reference into (domain, user, project)
///
/// Understands `github:user/repo`, bare `user/repo` (GitHub),
/// `git@host:user/repo.git` and http/git URLs with optional `git+` prefix.
fn hosted_repository(reference: &str) -> Option<(&'static str, String, String)> {
    for (shortcut, domain) in HOSTS {
        if let Some(path) = reference
            .strip_prefix(shortcut)
            .and_then(|rest| rest.strip_prefix(':'))
        {
            return split_repo_path(path).map(|(user, project)| (domain, user, project));
        }
    }

    if let Some(rest) = reference.strip_prefix("git@") {
        let (host, path) = rest.split_once(':')?;
        let domain = known_domain(host)?;
        return split_repo_path(path).map(|(user, project)| (domain, user, project));
    }

    if !reference.contains(':') {
        return split_repo_path(reference).map(|(user, project)| ("github.com", user, project));
    }

    let url = Url::parse(reference.strip_prefix("git+").unwrap_or(reference)).ok()?;
    let domain = known_domain(url.host_str()?)?;
    split_repo_path(url.path().trim_start_matches('/'))
        .map(|(user, project)| (domain, user, project))
}

fn known_domain(host: &str) -> Option<&'static str> {
    let host = host.trim_start_matches("www.");
    HOSTS
        .iter()
        .find(|(_, domain)| *domain == host)
        .map(|(_, domain)| *domain)
}

/// `user/project[.git][#committish]` into its two parts
fn split_repo_path(path: &str) -> Option<(String, String)> {
    let path = path.split('#').next().unwrap_or(path);
    let (user, project) = path.trim_end_matches('/').split_once('/')?;
    let project = project.strip_suffix(".git").unwrap_or(project);

    if user.is_empty() || project.is_empty() || project.contains('/') {
        return None;
    }
    Some((user.to_string(), project.to_string()))
}
