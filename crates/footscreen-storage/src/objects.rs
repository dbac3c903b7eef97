use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::StorageError;

/// Result of a GET operation.
pub struct GetObjectOutput {
    pub body: Vec<u8>,
}

fn object_path(root: &Path, key: &str) -> PathBuf {
    root.join(key)
}

/// Read an object from the store.
pub async fn get_object(root: &Path, key: &str) -> Result<GetObjectOutput, StorageError> {
    let body = tokio::fs::read(object_path(root, key))
        .await
        .map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                StorageError::NotFound {
                    key: key.to_string(),
                }
            } else {
                StorageError::Read {
                    key: key.to_string(),
                    source: e,
                }
            }
        })?;

    Ok(GetObjectOutput { body })
}

/// Write an object. The body lands in a temp file first and is renamed into
/// place, so readers never observe a partial object.
pub async fn put_object(root: &Path, key: &str, body: Vec<u8>) -> Result<(), StorageError> {
    let path = object_path(root, key);
    let write_err = |source| StorageError::Write {
        key: key.to_string(),
        source,
    };

    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await.map_err(write_err)?;
    }

    let tmp_path = path.with_extension("json.tmp");
    tokio::fs::write(&tmp_path, &body).await.map_err(write_err)?;
    tokio::fs::rename(&tmp_path, &path).await.map_err(write_err)?;

    tracing::debug!(key, bytes = body.len(), "object written");
    Ok(())
}

/// Delete an object. Deleting a missing object is not an error.
pub async fn delete_object(root: &Path, key: &str) -> Result<(), StorageError> {
    match tokio::fs::remove_file(object_path(root, key)).await {
        Ok(()) => {
            tracing::debug!(key, "object deleted");
            Ok(())
        }
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(StorageError::Delete {
            key: key.to_string(),
            source: e,
        }),
    }
}

/// List the `.json` objects directly under a prefix such as `"screenings/"`.
/// Returns keys in lexical order.
pub async fn list_objects(root: &Path, prefix: &str) -> Result<Vec<String>, StorageError> {
    let list_err = |source| StorageError::List {
        prefix: prefix.to_string(),
        source,
    };

    let mut dir = match tokio::fs::read_dir(object_path(root, prefix)).await {
        Ok(dir) => dir,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(list_err(e)),
    };

    let mut keys = Vec::new();
    while let Some(entry) = dir.next_entry().await.map_err(list_err)? {
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        if name.ends_with(".json") {
            keys.push(format!("{prefix}{name}"));
        }
    }

    keys.sort();
    Ok(keys)
}
