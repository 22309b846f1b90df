//! Flat-directory object store keyed by codec name and content id
//!
//! One file per `(codec, oid)` pair, filename `<codec>-<oid hex>`, content
//! exactly the compressed bytes. No header, no metadata, no staging: a put
//! is a single whole-object write that replaces whatever was there.

use crate::{Error, Oid, Result};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// A content-addressed object store backed by a single flat directory
pub struct ObjectStore {
    dir: PathBuf,
}

impl ObjectStore {
    /// Open the store, creating the directory if it does not exist yet
    pub fn open(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        Ok(ObjectStore { dir })
    }

    fn key(codec: &str, oid: &Oid) -> String {
        format!("{}-{}", codec, oid.to_hex())
    }

    /// Path the object for `(codec, oid)` lives at
    pub fn object_path(&self, codec: &str, oid: &Oid) -> PathBuf {
        self.dir.join(Self::key(codec, oid))
    }

    /// Write a blob under its `(codec, oid)` key, silently replacing any
    /// prior object stored under the same key
    pub fn put(&self, codec: &str, oid: &Oid, data: &[u8]) -> Result<PathBuf> {
        let key = Self::key(codec, oid);
        let path = self.dir.join(&key);
        fs::write(&path, data).map_err(|source| Error::ObjectStoreWrite { key, source })?;
        debug!("stored {} ({} bytes)", path.display(), data.len());
        Ok(path)
    }

    /// Read a blob back by its `(codec, oid)` key
    pub fn get(&self, codec: &str, oid: &Oid) -> Result<Vec<u8>> {
        Ok(fs::read(self.object_path(codec, oid))?)
    }

    /// Check whether an object exists for `(codec, oid)`
    pub fn contains(&self, codec: &str, oid: &Oid) -> bool {
        self.object_path(codec, oid).is_file()
    }

    /// Number of objects currently stored
    pub fn object_count(&self) -> Result<usize> {
        let mut count = 0;
        for entry in fs::read_dir(&self.dir)? {
            if entry?.file_type()?.is_file() {
                count += 1;
            }
        }
        Ok(count)
    }

    /// The storage directory
    pub fn path(&self) -> &Path {
        &self.dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_open_creates_directory() {
        let dir = tempdir().unwrap();
        let storage = dir.path().join("objects");

        let store = ObjectStore::open(&storage).unwrap();
        assert!(storage.is_dir());
        assert_eq!(store.object_count().unwrap(), 0);

        // Reopening an existing directory is fine
        ObjectStore::open(&storage).unwrap();
    }

    #[test]
    fn test_put_then_get() {
        let dir = tempdir().unwrap();
        let store = ObjectStore::open(dir.path()).unwrap();
        let oid = Oid::digest(b"hello world");

        store.put("gzip", &oid, b"compressed bytes").unwrap();

        assert!(store.contains("gzip", &oid));
        assert_eq!(store.get("gzip", &oid).unwrap(), b"compressed bytes");
    }

    #[test]
    fn test_put_overwrites_same_key() {
        let dir = tempdir().unwrap();
        let store = ObjectStore::open(dir.path()).unwrap();
        let oid = Oid::digest(b"hello world");

        store.put("gzip", &oid, b"first, and longer than the second").unwrap();
        store.put("gzip", &oid, b"second").unwrap();

        assert_eq!(store.get("gzip", &oid).unwrap(), b"second");
        assert_eq!(store.object_count().unwrap(), 1);
    }

    #[test]
    fn test_keys_separate_codecs() {
        let dir = tempdir().unwrap();
        let store = ObjectStore::open(dir.path()).unwrap();
        let oid = Oid::digest(b"hello world");

        store.put("raw", &oid, b"raw bytes").unwrap();
        store.put("gzip", &oid, b"gzip bytes").unwrap();

        assert_eq!(store.object_count().unwrap(), 2);
        assert_eq!(store.get("raw", &oid).unwrap(), b"raw bytes");
        assert_eq!(store.get("gzip", &oid).unwrap(), b"gzip bytes");
    }

    #[test]
    fn test_object_filename_encodes_codec_and_oid() {
        let dir = tempdir().unwrap();
        let store = ObjectStore::open(dir.path()).unwrap();
        let oid = Oid::digest(b"hello world");

        let path = store.put("bz2", &oid, b"x").unwrap();
        let name = path.file_name().unwrap().to_str().unwrap();
        assert_eq!(name, format!("bz2-{}", oid.to_hex()));
    }

    #[test]
    fn test_empty_object_roundtrip() {
        let dir = tempdir().unwrap();
        let store = ObjectStore::open(dir.path()).unwrap();
        let oid = Oid::digest(b"");

        store.put("raw", &oid, b"").unwrap();
        assert!(store.contains("raw", &oid));
        assert_eq!(store.get("raw", &oid).unwrap(), b"");
    }
}
