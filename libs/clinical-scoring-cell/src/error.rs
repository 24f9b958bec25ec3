use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClinicalError {
    #[error("Invalid vitals: {0}")]
    InvalidVitals(String),

    #[error("Invalid program catalog: {0}")]
    InvalidCatalog(String),

    #[error("Failed to read program catalog {path}: {source}")]
    CatalogIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("AI analysis rejected: {0}")]
    AiContract(String),
}
