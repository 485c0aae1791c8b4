use crate::bbox::ResourceGroup;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExporterError {
    #[error("Invalid Bbox endpoint {url:?}: {reason}")]
    InvalidEndpoint { url: String, reason: String },

    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Failed to decode {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Empty response from {resource}")]
    EmptyResponse { resource: &'static str },

    #[error("{resource}: {source}")]
    Resource {
        resource: String,
        #[source]
        source: Box<ExporterError>,
    },

    #[error("{group} metrics: {source}")]
    Group {
        group: ResourceGroup,
        #[source]
        source: Box<ExporterError>,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Metrics error: {0}")]
    Metrics(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ExporterError {
    /// Wraps an error with the API path of the sub-resource that produced it.
    pub fn in_resource(self, resource: impl Into<String>) -> Self {
        Self::Resource {
            resource: resource.into(),
            source: Box::new(self),
        }
    }

    /// Wraps an error with the resource group being fetched or projected.
    pub fn in_group(self, group: ResourceGroup) -> Self {
        Self::Group {
            group,
            source: Box::new(self),
        }
    }

    /// True for failures raised while logging in, however deeply wrapped.
    pub fn is_auth(&self) -> bool {
        match self {
            Self::Auth(_) => true,
            Self::Resource { source, .. } | Self::Group { source, .. } => source.is_auth(),
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, ExporterError>;
