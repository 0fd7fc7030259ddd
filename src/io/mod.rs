mod output;

pub use output::{OutputDestination, OutputOptions, emit};

/// Serialization formats a submitted document can be emitted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    #[cfg(feature = "yaml")]
    Yaml,
    #[cfg(feature = "toml")]
    Toml,
}

impl DocumentFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentFormat::Json => "json",
            #[cfg(feature = "yaml")]
            DocumentFormat::Yaml => "yaml",
            #[cfg(feature = "toml")]
            DocumentFormat::Toml => "toml",
        }
    }
}

impl std::str::FromStr for DocumentFormat {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.to_ascii_lowercase().as_str() {
            "json" => Ok(DocumentFormat::Json),
            #[cfg(feature = "yaml")]
            "yaml" | "yml" => Ok(DocumentFormat::Yaml),
            #[cfg(not(feature = "yaml"))]
            "yaml" | "yml" => Err("yaml support not compiled in (enable the `yaml` feature)".to_string()),
            #[cfg(feature = "toml")]
            "toml" => Ok(DocumentFormat::Toml),
            #[cfg(not(feature = "toml"))]
            "toml" => Err("toml support not compiled in (enable the `toml` feature)".to_string()),
            other => Err(format!("unknown output format `{other}`")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_formats() {
        assert_eq!("json".parse::<DocumentFormat>(), Ok(DocumentFormat::Json));
        assert_eq!("JSON".parse::<DocumentFormat>(), Ok(DocumentFormat::Json));
        assert!("csv".parse::<DocumentFormat>().is_err());
    }

    #[cfg(feature = "yaml")]
    #[test]
    fn parses_yaml_aliases() {
        assert_eq!("yml".parse::<DocumentFormat>(), Ok(DocumentFormat::Yaml));
    }
}
