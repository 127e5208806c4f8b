//! Ordered set of files making up the package.

use std::collections::HashMap;

use crate::epub::MediaType;
use crate::error::{Error, Result};

/// A file destined for the package, keyed by its path under `OEBPS/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VirtualFile {
    pub path: String,
    pub data: Vec<u8>,
}

impl VirtualFile {
    /// Media type derived from the path suffix.
    pub fn media_type(&self) -> Result<MediaType> {
        MediaType::from_path(&self.path)
    }
}

/// Ordered map from virtual path to file contents.
///
/// Paths are unique. Iteration follows insertion order, which fixes the
/// manifest and archive order so identical inputs give identical packages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileSet {
    files: Vec<VirtualFile>,
    index: HashMap<String, usize>,
}

impl FileSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file at a path that must not exist yet.
    pub fn insert_new(&mut self, path: impl Into<String>, data: Vec<u8>) -> Result<()> {
        let path = path.into();
        if self.index.contains_key(&path) {
            return Err(Error::DuplicatePath { path });
        }
        self.index.insert(path.clone(), self.files.len());
        self.files.push(VirtualFile { path, data });
        Ok(())
    }

    /// Add a file, replacing the contents of an existing one in place.
    pub fn upsert(&mut self, path: impl Into<String>, data: Vec<u8>) {
        let path = path.into();
        match self.index.get(&path) {
            Some(&i) => self.files[i].data = data,
            None => {
                self.index.insert(path.clone(), self.files.len());
                self.files.push(VirtualFile { path, data });
            }
        }
    }

    pub fn get(&self, path: &str) -> Option<&VirtualFile> {
        self.index.get(path).map(|&i| &self.files[i])
    }

    pub fn contains(&self, path: &str) -> bool {
        self.index.contains_key(path)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, VirtualFile> {
        self.files.iter()
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.files.iter().map(|f| f.path.as_str())
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl<'a> IntoIterator for &'a FileSet {
    type Item = &'a VirtualFile;
    type IntoIter = std::slice::Iter<'a, VirtualFile>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
