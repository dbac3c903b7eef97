use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("object not found: {key}")]
    NotFound { key: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("read error on {key}: {source}")]
    Read {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("write error on {key}: {source}")]
    Write {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("delete error on {key}: {source}")]
    Delete {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("list error under {prefix}: {source}")]
    List {
        prefix: String,
        #[source]
        source: std::io::Error,
    },
}
