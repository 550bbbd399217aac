/// Formatter adapters for SBOM output formats
mod spdx_json_formatter;

pub use spdx_json_formatter::SpdxJsonFormatter;
