/// Layout of the serialized SPDX JSON document
///
/// Application-layer type shared by the CLI and the formatter factory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputStyle {
    /// Two-space indented JSON
    #[default]
    Pretty,
    /// Single-line JSON
    Compact,
}

impl OutputStyle {
    pub fn from_pretty_flag(pretty: bool) -> Self {
        if pretty {
            OutputStyle::Pretty
        } else {
            OutputStyle::Compact
        }
    }

    pub fn is_pretty(&self) -> bool {
        matches!(self, OutputStyle::Pretty)
    }
}
