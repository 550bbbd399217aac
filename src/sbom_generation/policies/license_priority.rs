use crate::sbom_generation::domain::LicenseField;

/// LicensePriority policy for determining the declared license of an npm manifest
///
/// Priority order:
/// 1. `license` field as an SPDX expression (if non-empty)
/// 2. `license` field in the legacy `{ "type": ... }` form
/// 3. legacy `licenses` array, combined into a disjunction
pub struct LicensePriority;

impl LicensePriority {
    /// Selects the declared license text, or None if no usable license is present
    pub fn select_license(
        license: Option<&LicenseField>,
        licenses: &[LicenseField],
    ) -> Option<String> {
        license
            .and_then(Self::field_text)
            .or_else(|| Self::combine_legacy_licenses(licenses))
    }

    fn field_text(field: &LicenseField) -> Option<String> {
        let text = match field {
            LicenseField::Expression(expression) => expression.trim(),
            LicenseField::Legacy { license_type, .. } => license_type.trim(),
        };
        if text.is_empty() {
            None
        } else {
            Some(text.to_string())
        }
    }

    /// `[{type: MIT}, {type: ISC}]` becomes `(MIT OR ISC)`; a single entry is used as-is
    fn combine_legacy_licenses(licenses: &[LicenseField]) -> Option<String> {
        let texts: Vec<String> = licenses.iter().filter_map(Self::field_text).collect();
        match texts.len() {
            0 => None,
            1 => texts.into_iter().next(),
            _ => Some(format!("({})", texts.join(" OR "))),
        }
    }
}
