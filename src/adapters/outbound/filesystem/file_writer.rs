use crate::ports::outbound::OutputPresenter;
use crate::shared::error::SbomError;
use crate::shared::Result;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// FileSystemWriter adapter for writing the SPDX document to a file
///
/// This adapter implements the OutputPresenter port for file output.
pub struct FileSystemWriter {
    output_path: PathBuf,
}

impl FileSystemWriter {
    pub fn new(output_path: PathBuf) -> Self {
        Self { output_path }
    }

    fn write_error(&self, details: impl Into<String>) -> anyhow::Error {
        SbomError::FileWriteError {
            path: self.output_path.clone(),
            details: details.into(),
        }
        .into()
    }

    /// Validates that the parent directory exists before writing
    fn validate_parent_directory(&self) -> Result<()> {
        if let Some(parent) = self.output_path.parent() {
            if parent != Path::new("") && !parent.is_dir() {
                return Err(self.write_error(format!(
                    "Parent directory does not exist: {}",
                    parent.display()
                )));
            }
        }
        Ok(())
    }

    /// Rejects an existing output path that is a symlink or a directory
    fn validate_output_security(&self) -> Result<()> {
        let Ok(metadata) = fs::symlink_metadata(&self.output_path) else {
            return Ok(());
        };

        if metadata.is_symlink() {
            return Err(self.write_error(
                "Security: Output path is a symbolic link. For security reasons, writing to symbolic links is not allowed.",
            ));
        }
        if metadata.is_dir() {
            return Err(self.write_error("Output path is a directory"));
        }
        Ok(())
    }
}

impl OutputPresenter for FileSystemWriter {
    fn present(&self, content: &str) -> Result<()> {
        self.validate_parent_directory()?;
        self.validate_output_security()?;

        fs::write(&self.output_path, content).map_err(|e| self.write_error(e.to_string()))?;

        eprintln!("✅ Output complete: {}", self.output_path.display());
        Ok(())
    }
}

/// StdoutPresenter adapter for writing output to stdout
///
/// This adapter implements the OutputPresenter port for stdout output.
pub struct StdoutPresenter;

impl StdoutPresenter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdoutPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputPresenter for StdoutPresenter {
    fn present(&self, content: &str) -> Result<()> {
        let mut stdout = io::stdout().lock();
        let trailer: &[u8] = if content.ends_with('\n') { b"" } else { b"\n" };
        stdout
            .write_all(content.as_bytes())
            .and_then(|_| stdout.write_all(trailer))
            .and_then(|_| stdout.flush())
            .map_err(|e| anyhow::anyhow!("Failed to write to stdout: {}", e))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_writer_success() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("sbom.spdx.json");

        let writer = FileSystemWriter::new(output_path.clone());
        let result = writer.present("{}");

        assert!(result.is_ok());
        assert_eq!(fs::read_to_string(&output_path).unwrap(), "{}");
    }

    #[test]
    fn test_file_writer_overwrites_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("sbom.spdx.json");
        fs::write(&output_path, "old").unwrap();

        FileSystemWriter::new(output_path.clone()).present("new").unwrap();

        assert_eq!(fs::read_to_string(&output_path).unwrap(), "new");
    }

    #[test]
    fn test_file_writer_parent_directory_not_found() {
        let output_path = PathBuf::from("/nonexistent/directory/sbom.spdx.json");

        let writer = FileSystemWriter::new(output_path);
        let result = writer.present("{}");

        assert!(result.is_err());
        let err_string = format!("{}", result.unwrap_err());
        assert!(err_string.contains("Parent directory does not exist"));
    }

    #[test]
    fn test_file_writer_rejects_directory() {
        let temp_dir = TempDir::new().unwrap();

        let err = FileSystemWriter::new(temp_dir.path().to_path_buf())
            .present("{}")
            .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<SbomError>(),
            Some(SbomError::FileWriteError { .. })
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_file_writer_rejects_symlink() {
        let temp_dir = TempDir::new().unwrap();
        let real = temp_dir.path().join("real.json");
        fs::write(&real, "keep").unwrap();
        let link = temp_dir.path().join("link.json");
        std::os::unix::fs::symlink(&real, &link).unwrap();

        let result = FileSystemWriter::new(link).present("{}");

        assert!(result.is_err());
        assert_eq!(fs::read_to_string(&real).unwrap(), "keep");
    }

    #[test]
    fn test_stdout_presenter_success() {
        let presenter = StdoutPresenter::new();
        assert!(presenter.present("{}\n").is_ok());
    }
}
