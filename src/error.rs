pub type Result<T> = std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("invalid client configuration: {0}")]
    Configuration(String),

    #[error("request failed with status {status}{}", .body.as_deref().map(|b| format!(": {b}")).unwrap_or_default())]
    Transport { status: u16, body: Option<String> },

    #[error("{0}")]
    Connectivity(#[from] reqwest::Error),

    #[error(transparent)]
    EnvVar(#[from] EnvVarError),

    #[error("JSON deserialization error: {0}")]
    Deserialization(#[from] JSONError),
}

#[derive(thiserror::Error, Debug)]
#[error("{source} ({var})")]
pub struct EnvVarError {
    var: String,
    #[source]
    source: std::env::VarError,
}

impl EnvVarError {
    pub fn new(var: &str, source: std::env::VarError) -> Self {
        Self {
            var: var.into(),
            source,
        }
    }
}

#[derive(thiserror::Error, Debug)]
#[error("{source} ({resource})")]
pub struct JSONError {
    resource: String,
    #[source]
    source: serde_json::Error,
}

impl JSONError {
    pub fn new(resource: &str, source: serde_json::Error) -> Self {
        Self {
            resource: resource.into(),
            source,
        }
    }

    /// Path of the resource whose body failed to parse.
    pub fn resource(&self) -> &str {
        &self.resource
    }
}
