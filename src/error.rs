//! Error types for configuration resolution and template rendering.

use thiserror::Error;

/// Errors produced while resolving a vanity configuration or rendering pages.
///
/// Every variant is terminal for a generation run. Callers report the error
/// and stop; nothing is retried.
#[derive(Debug, Error)]
pub enum Error {
    #[error("could not parse vanity config")]
    Config(#[from] serde_yaml_ng::Error),

    #[error("configuration for {path}: unknown VCS {vcs}")]
    UnknownVcs { path: String, vcs: String },

    #[error("configuration for {path}: cannot infer VCS from {repo:?}")]
    UninferableVcs { path: String, repo: String },

    #[error("failed to parse template {name}")]
    TemplateParse {
        name: String,
        #[source]
        source: tera::Error,
    },

    #[error("failed to execute template {name}")]
    TemplateRender {
        name: String,
        #[source]
        source: tera::Error,
    },

    #[error("failed to build template context")]
    Context(#[source] tera::Error),
}

/// Result alias used throughout the library.
pub type Result<T> = std::result::Result<T, Error>;
