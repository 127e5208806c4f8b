//! Reading order and navigation entries.

use crate::epub::NAV_PATH;
use crate::error::{Error, Result};

/// One position in the reading order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TocEntry {
    /// Listed in the spine and in both navigation documents.
    Visible { label: String, path: String },
    /// Listed in the spine only.
    Hidden { path: String },
    /// A navigation page to be generated at finalization, at this position.
    PendingAutoNav { label: String },
}

impl TocEntry {
    pub fn visible(label: impl Into<String>, path: impl Into<String>) -> Self {
        TocEntry::Visible {
            label: label.into(),
            path: path.into(),
        }
    }

    pub fn hidden(path: impl Into<String>) -> Self {
        TocEntry::Hidden { path: path.into() }
    }

    /// Label shown in navigation. An empty label counts as no label.
    pub fn label(&self) -> Option<&str> {
        match self {
            TocEntry::Visible { label, .. } if !label.is_empty() => Some(label),
            _ => None,
        }
    }

    /// Virtual path, unless the entry is still a placeholder.
    pub fn path(&self) -> Option<&str> {
        match self {
            TocEntry::Visible { path, .. } | TocEntry::Hidden { path } => Some(path),
            TocEntry::PendingAutoNav { .. } => None,
        }
    }
}

/// The ordered table of contents, which is also the spine order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Toc {
    entries: Vec<TocEntry>,
}

impl Toc {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry. At most one auto-navigation page may ever be
    /// requested, whether or not an earlier one was already resolved.
    pub fn push(&mut self, entry: TocEntry) -> Result<()> {
        if matches!(entry, TocEntry::PendingAutoNav { .. }) && self.has_auto_navigation() {
            return Err(Error::DuplicateAutoNavigation);
        }
        self.entries.push(entry);
        Ok(())
    }

    /// Put an entry at the start of the reading order.
    pub fn push_front(&mut self, entry: TocEntry) {
        self.entries.insert(0, entry);
    }

    /// Replace the pending placeholder with a concrete entry pointing at
    /// the navigation document. Returns the label, or `None` when there is
    /// nothing to resolve.
    pub fn resolve_auto_navigation(&mut self) -> Option<String> {
        let slot = self
            .entries
            .iter_mut()
            .find(|e| matches!(e, TocEntry::PendingAutoNav { .. }))?;
        let TocEntry::PendingAutoNav { label } = slot else {
            return None;
        };
        let label = std::mem::take(label);
        *slot = TocEntry::visible(label.clone(), NAV_PATH);
        Some(label)
    }

    pub fn pending_auto_navigation(&self) -> Option<&str> {
        self.entries.iter().find_map(|e| match e {
            TocEntry::PendingAutoNav { label } => Some(label.as_str()),
            _ => None,
        })
    }

    fn has_auto_navigation(&self) -> bool {
        self.entries.iter().any(|e| match e {
            TocEntry::PendingAutoNav { .. } => true,
            _ => e.path() == Some(NAV_PATH),
        })
    }

    /// Entries with a non-empty label as `(label, path)`, in order.
    pub fn visible(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .filter_map(|e| Some((e.label()?, e.path()?)))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TocEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a Toc {
    type Item = &'a TocEntry;
    type IntoIter = std::slice::Iter<'a, TocEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
