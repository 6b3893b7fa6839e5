//! CLI error types.

use unidoc_config::ConfigError;
use unidoc_renderer::ConvertError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Convert(#[from] ConvertError),

    /// Input could not be read; `name` is the path or `stdin`.
    #[error("failed to read {name}: {source}")]
    Read {
        name: String,
        source: std::io::Error,
    },

    #[error("{0}")]
    Io(#[from] std::io::Error),
}
