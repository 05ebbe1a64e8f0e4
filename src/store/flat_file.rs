// This is intentionally thin:
// no manifest
// no listing
// each blob stands alone

use std::fs;
use std::path::{Path, PathBuf};

use log::warn;
use sha2::{Digest, Sha256};
use thiserror::Error;

/// The two blob namespaces consumers key into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Namespace {
    Configs,
    Models,
}

impl Namespace {
    pub fn dir(self) -> &'static str {
        match self {
            Namespace::Configs => "configs",
            Namespace::Models => "models",
        }
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid blob name: {0:?}")]
    InvalidName(String),
}

/// Flat-file key/value store for configuration and model blobs.
///
/// One file per blob under `<root>/<namespace>/<name>`. The first line is a
/// `sha256:` fingerprint of the payload; `read` recomputes it and refuses
/// blobs that no longer match. Stored content is an opaque delimited string;
/// consumers own the delimiting.
#[derive(Debug)]
pub struct FlatFileStore {
    root: PathBuf,
}

impl FlatFileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Write a blob, replacing any previous content under the same name.
    pub fn write(
        &self,
        namespace: Namespace,
        name: &str,
        content: &str,
    ) -> Result<(), StoreError> {
        let path = self.blob_path(namespace, name)?;
        fs::create_dir_all(self.root.join(namespace.dir()))?;

        let blob = format!("{}\n{}", fingerprint(content), content);

        // Write a temp sibling first, then atomically rename into place.
        let temp_path = self
            .root
            .join(namespace.dir())
            .join(format!("{name}.tmp"));
        fs::write(&temp_path, blob)?;
        fs::rename(&temp_path, &path)?;

        Ok(())
    }

    /// Read a blob. `None` for anything other than a present, intact blob:
    /// unknown name, unreadable file, or fingerprint mismatch.
    pub fn read(&self, namespace: Namespace, name: &str) -> Option<String> {
        let path = self.blob_path(namespace, name).ok()?;
        let blob = fs::read_to_string(path).ok()?;

        let (header, payload) = blob.split_once('\n')?;
        if header != fingerprint(payload) {
            warn!(
                "discarding corrupt blob {}/{name}: fingerprint mismatch",
                namespace.dir()
            );
            return None;
        }

        Some(payload.to_string())
    }

    fn blob_path(&self, namespace: Namespace, name: &str) -> Result<PathBuf, StoreError> {
        if name.is_empty() || name == "." || name == ".." || name.contains(['/', '\\']) {
            return Err(StoreError::InvalidName(name.to_string()));
        }
        Ok(self.root.join(namespace.dir()).join(name))
    }
}

/// Content fingerprint recorded in the blob header.
fn fingerprint(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());

    let hash = hasher.finalize();
    format!("sha256:{}", hex::encode(hash))
}
