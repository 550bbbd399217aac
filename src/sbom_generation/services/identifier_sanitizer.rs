/// Prefix of every package element ID
const PACKAGE_ID_PREFIX: &str = "SPDXRef-Package-";

/// IdentifierSanitizer service for turning package identifiers into SPDX element IDs
///
/// The transform is lossy: `@a/b@1` and `a.b@1` both become
/// `SPDXRef-Package-a.b-1`. Documents already issued depend on these IDs,
/// so the substitution order must stay exactly as it is.
pub struct IdentifierSanitizer;

impl IdentifierSanitizer {
    /// Sanitizes an identifier into an element ID
    ///
    /// Rules, in order: strip one leading `@`, replace `/` with `.`,
    /// replace remaining `@` with `-`, then prefix with `SPDXRef-Package-`.
    pub fn sanitize(identifier: &str) -> String {
        let unscoped = identifier.strip_prefix('@').unwrap_or(identifier);
        let dotted = unscoped.replace('/', ".");
        let dashed = dotted.replace('@', "-");
        format!("{}{}", PACKAGE_ID_PREFIX, dashed)
    }
}
