use std::path::Path;

use serde::{Serialize, de::DeserializeOwned};

use crate::error::StorageError;
use crate::objects;

/// Load and deserialize a JSON record.
pub async fn load<T: DeserializeOwned>(root: &Path, key: &str) -> Result<T, StorageError> {
    let output = objects::get_object(root, key).await?;
    let value: T = serde_json::from_slice(&output.body)?;
    Ok(value)
}

/// Serialize and store a JSON record.
pub async fn save<T: Serialize>(root: &Path, key: &str, value: &T) -> Result<(), StorageError> {
    let body = serde_json::to_vec_pretty(value)?;
    objects::put_object(root, key, body).await
}

/// Load every record under a prefix. Records removed after listing are skipped.
pub async fn load_all<T: DeserializeOwned>(
    root: &Path,
    prefix: &str,
) -> Result<Vec<T>, StorageError> {
    let keys = objects::list_objects(root, prefix).await?;
    let mut values = Vec::with_capacity(keys.len());
    for key in &keys {
        match load(root, key).await {
            Ok(value) => values.push(value),
            Err(StorageError::NotFound { .. }) => {
                tracing::debug!(key, "object vanished while listing");
            }
            Err(e) => return Err(e),
        }
    }
    Ok(values)
}
