use crate::adapters::outbound::formatters::SpdxJsonFormatter;
use crate::application::dto::OutputStyle;
use crate::ports::outbound::SbomFormatter;

/// Factory for creating SBOM formatters
///
/// Encapsulates the selection of formatter adapters so the CLI only deals
/// with application-layer types.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter for the requested output style
    ///
    /// # Examples
    /// ```
    /// use npm_spdx_sbom::application::dto::OutputStyle;
    /// use npm_spdx_sbom::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputStyle::Compact);
    /// ```
    pub fn create(style: OutputStyle) -> Box<dyn SbomFormatter> {
        Box::new(SpdxJsonFormatter::with_pretty(style.is_pretty()))
    }

    /// Returns the progress message for the specified output style
    ///
    /// # Examples
    /// ```
    /// use npm_spdx_sbom::application::dto::OutputStyle;
    /// use npm_spdx_sbom::application::factories::FormatterFactory;
    ///
    /// let message = FormatterFactory::progress_message(OutputStyle::Pretty);
    /// assert_eq!(message, "📝 Generating SPDX 2.3 JSON output...");
    /// ```
    pub fn progress_message(style: OutputStyle) -> &'static str {
        match style {
            OutputStyle::Pretty => "📝 Generating SPDX 2.3 JSON output...",
            OutputStyle::Compact => "📝 Generating SPDX 2.3 JSON output (compact)...",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_formatters() {
        let pretty = FormatterFactory::create(OutputStyle::Pretty);
        let compact = FormatterFactory::create(OutputStyle::Compact);
        assert!(std::mem::size_of_val(&pretty) > 0);
        assert!(std::mem::size_of_val(&compact) > 0);
    }

    #[test]
    fn test_progress_message() {
        assert_eq!(
            FormatterFactory::progress_message(OutputStyle::Pretty),
            "📝 Generating SPDX 2.3 JSON output..."
        );
        assert!(FormatterFactory::progress_message(OutputStyle::Compact).contains("compact"));
    }
}
