//! Shared object key construction.

use crate::{StorageError, StorageResult};

/// Build the object key for `file_name` inside `folder`.
///
/// Produces `folder/file_name`, or `file_name` alone when the folder is empty.
/// A trailing `/` on the folder is ignored.
pub fn object_key(folder: &str, file_name: &str) -> StorageResult<String> {
    if file_name.trim().is_empty() {
        return Err(StorageError::InvalidKey(
            "file name must not be empty".to_string(),
        ));
    }

    let folder = folder.trim_end_matches('/');
    let key = if folder.is_empty() {
        file_name.to_string()
    } else {
        format!("{}/{}", folder, file_name)
    };

    if key.starts_with('/') || key.split('/').any(|segment| segment == "..") {
        return Err(StorageError::InvalidKey(format!(
            "key must not start with '/' or contain '..': {}",
            key
        )));
    }

    Ok(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_with_folder() {
        assert_eq!(object_key("videos", "clip.mp4").unwrap(), "videos/clip.mp4");
        assert_eq!(object_key("videos/", "clip.mp4").unwrap(), "videos/clip.mp4");
        assert_eq!(
            object_key("users/7/videos", "clip.mp4").unwrap(),
            "users/7/videos/clip.mp4"
        );
    }

    #[test]
    fn test_key_without_folder() {
        assert_eq!(object_key("", "clip.mp4").unwrap(), "clip.mp4");
    }

    #[test]
    fn test_empty_file_name_rejected() {
        assert!(matches!(
            object_key("videos", ""),
            Err(StorageError::InvalidKey(_))
        ));
        assert!(matches!(object_key("", ""), Err(StorageError::InvalidKey(_))));
    }

    #[test]
    fn test_traversal_rejected() {
        assert!(object_key("videos", "../secret").is_err());
        assert!(object_key("/etc", "passwd").is_err());
        assert!(object_key("..", "clip.mp4").is_err());
    }
}
