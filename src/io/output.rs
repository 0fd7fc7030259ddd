use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::domain::FormDocument;

use super::DocumentFormat;

/// Destination for emitted documents.
#[derive(Debug, Clone)]
pub enum OutputDestination {
    Stdout,
    File(PathBuf),
}

impl OutputDestination {
    pub fn file(path: impl AsRef<Path>) -> Self {
        OutputDestination::File(path.as_ref().to_path_buf())
    }
}

/// Controls how a submitted document is serialized and where it goes.
#[derive(Debug, Clone)]
pub struct OutputOptions {
    pub format: DocumentFormat,
    pub pretty: bool,
    pub destinations: Vec<OutputDestination>,
}

impl OutputOptions {
    pub fn new(format: DocumentFormat) -> Self {
        Self {
            format,
            pretty: true,
            destinations: vec![OutputDestination::Stdout],
        }
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn with_destinations(mut self, destinations: Vec<OutputDestination>) -> Self {
        self.destinations = destinations;
        self
    }
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self::new(DocumentFormat::Json)
    }
}

/// Serialize and write a submitted document to every configured destination.
pub fn emit(doc: &FormDocument, options: &OutputOptions) -> Result<()> {
    if options.destinations.is_empty() {
        return Ok(());
    }
    let payload = serialize_document(doc, options)?;
    for destination in &options.destinations {
        write_payload(destination, &payload).with_context(|| match destination {
            OutputDestination::Stdout => "failed to write to stdout".to_string(),
            OutputDestination::File(path) => {
                format!("failed to write to file {}", path.display())
            }
        })?;
    }
    Ok(())
}

fn serialize_document(doc: &FormDocument, options: &OutputOptions) -> Result<String> {
    match options.format {
        DocumentFormat::Json => {
            if options.pretty {
                serde_json::to_string_pretty(doc).context("failed to serialize JSON")
            } else {
                serde_json::to_string(doc).context("failed to serialize JSON")
            }
        }
        #[cfg(feature = "yaml")]
        DocumentFormat::Yaml => serde_yaml::to_string(doc).context("failed to serialize YAML"),
        #[cfg(feature = "toml")]
        DocumentFormat::Toml => {
            if options.pretty {
                toml::to_string_pretty(doc).context("failed to serialize TOML")
            } else {
                toml::to_string(doc).context("failed to serialize TOML")
            }
        }
    }
}

fn write_payload(destination: &OutputDestination, payload: &str) -> Result<()> {
    match destination {
        OutputDestination::Stdout => {
            let mut stdout = io::stdout();
            stdout
                .write_all(payload.as_bytes())
                .and_then(|_| stdout.write_all(b"\n"))
                .context("failed to write stdout")?;
            stdout.flush().context("failed to flush stdout")
        }
        OutputDestination::File(path) => {
            let mut file = File::create(path)?;
            file.write_all(payload.as_bytes())?;
            file.write_all(b"\n")?;
            file.flush()?;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FieldEntry;
    use std::fs;

    fn sample() -> FormDocument {
        FormDocument {
            fields: vec![FieldEntry {
                name: "Age".to_string(),
                kind: "number".to_string(),
                value: "30".to_string(),
            }],
        }
    }

    #[test]
    fn no_destinations_is_a_noop() {
        let options = OutputOptions::default().with_destinations(Vec::new());
        emit(&sample(), &options).unwrap();
    }

    #[test]
    fn writes_compact_json_to_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        let options = OutputOptions::default()
            .with_pretty(false)
            .with_destinations(vec![OutputDestination::file(&path)]);
        emit(&sample(), &options).unwrap();
        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(
            contents,
            "{\"fields\":[{\"name\":\"Age\",\"type\":\"number\",\"value\":\"30\"}]}\n"
        );
    }

    #[cfg(feature = "toml")]
    #[test]
    fn writes_toml_when_enabled() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.toml");
        let options = OutputOptions::new(DocumentFormat::Toml)
            .with_destinations(vec![OutputDestination::file(&path)]);
        emit(&sample(), &options).unwrap();
        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("[[fields]]"));
        assert!(contents.contains("name = \"Age\""));
    }
}
