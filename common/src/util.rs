use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use tokio::fs::{read_dir, read_to_string, symlink_metadata};
use tracing::debug;

use crate::error::{ParseFailure, PlotError};

pub async fn read_json_file<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T, PlotError> {
    let path = path.as_ref();
    let parse_err = |source: ParseFailure| PlotError::Parse {
        path: path.to_path_buf(),
        source,
    };
    let contents = read_to_string(path)
        .await
        .map_err(|e| parse_err(e.into()))?;
    serde_json::from_str(&contents).map_err(|e| parse_err(e.into()))
}

/// Recursively collects every non-directory entry under `root` whose name ends with `suffix`.
///
/// Entries of a directory are visited in lexical order, depth first. Symlinked
/// directories are not followed.
pub async fn find_files(root: &Path, suffix: &str) -> Result<Vec<PathBuf>, PlotError> {
    let discovery_err = |path: &Path| {
        let path = path.to_path_buf();
        move |source| PlotError::Discovery { path, source }
    };

    let mut pending = vec![root.to_path_buf()];
    let mut files = Vec::new();
    while let Some(path) = pending.pop() {
        let meta = symlink_metadata(&path).await.map_err(discovery_err(&path))?;
        if meta.is_dir() {
            let mut entries = read_dir(&path).await.map_err(discovery_err(&path))?;
            let mut children = Vec::new();
            while let Some(entry) = entries.next_entry().await.map_err(discovery_err(&path))? {
                children.push(entry.path());
            }
            children.sort();
            pending.extend(children.into_iter().rev());
        } else if path
            .file_name()
            .is_some_and(|name| name.as_encoded_bytes().ends_with(suffix.as_bytes()))
        {
            debug!("Found {path:?}");
            files.push(path);
        }
    }
    Ok(files)
}

/// File name with everything from its final `.` removed.
///
/// A name that is nothing but an extension (`.json`) is labelled after its
/// parent directory, or `.` when it has none.
pub fn file_label(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|x| x.to_string_lossy().into_owned())
        .unwrap_or_default();
    match name.rfind('.') {
        Some(0) => path
            .parent()
            .and_then(|x| x.file_name())
            .map(|x| x.to_string_lossy().into_owned())
            .unwrap_or_else(|| ".".to_owned()),
        Some(idx) => name[..idx].to_owned(),
        None => name,
    }
}
