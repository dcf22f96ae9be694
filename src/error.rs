use std::path::PathBuf;

/// Rejected configuration, reported when an index or router is constructed.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config is not valid JSON or a field has the wrong type.
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("max edit distance {requested} exceeds the supported maximum of {max}")]
    EditDistanceTooLarge { requested: usize, max: usize },

    #[error("config max edit distance {config} does not match the corrector's {corrector}")]
    EditDistanceMismatch { config: usize, corrector: usize },
}
