//! npm capability adapters: specifier parsing, integrity decoding and
//! manifest normalization

mod integrity_parser;
mod manifest_normalizer;
mod spec_parser;

pub use integrity_parser::SsriIntegrityParser;
pub use manifest_normalizer::NpmManifestNormalizer;
pub use spec_parser::NpmSpecParser;
