use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReferenceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("antenna listed twice: {0}")]
    DuplicateAntenna(String),
}
