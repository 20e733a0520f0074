//! Canonical vocabulary storage.

use crate::error::VocabularyError;
use crate::types::Domain;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{info, warn};

/// Insertion-ordered set of canonical domains.
///
/// Readers take an [`Arc`] snapshot and iterate it without holding any lock;
/// mutations copy the entry list only while a snapshot is still alive.
/// Every mutation bumps [`generation`](Self::generation).
#[derive(Debug, Default)]
pub struct VocabularyStore {
    entries: Arc<Vec<Domain>>,
    index: HashSet<Domain>,
    generation: u64,
}

/// Read operations.
impl VocabularyStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// All entries in insertion order.
    pub fn all(&self) -> &[Domain] {
        &self.entries
    }

    /// Shared handle to the current entry list.
    pub fn snapshot(&self) -> Arc<Vec<Domain>> {
        Arc::clone(&self.entries)
    }

    pub fn contains(&self, domain: &Domain) -> bool {
        self.index.contains(domain)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of mutations applied so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Mutation operations.
impl VocabularyStore {
    /// Adds entries after normalization and returns how many were new.
    ///
    /// Duplicates are ignored. Entries that normalize to nothing are skipped
    /// with a warning.
    pub fn add<I, S>(&mut self, entries: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut added = 0;

        for raw in entries {
            let raw = raw.as_ref();
            let domain = match Domain::try_new(raw.to_string()) {
                Ok(domain) => domain,
                Err(err) => {
                    warn!(entry = raw, error = %err, "skipping invalid vocabulary entry");
                    continue;
                }
            };

            if self.index.insert(domain.clone()) {
                Arc::make_mut(&mut self.entries).push(domain);
                added += 1;
            }
        }

        if added > 0 {
            self.generation += 1;
            info!(added, total = self.entries.len(), "vocabulary extended");
        }

        added
    }

    /// Removes one entry, matched after normalization.
    pub fn remove(&mut self, raw: &str) -> Result<Domain, VocabularyError> {
        let domain = Domain::try_new(raw.to_string())
            .map_err(|_| VocabularyError::InvalidEntry(raw.to_string()))?;

        if !self.index.remove(&domain) {
            return Err(VocabularyError::NotFound(domain.into_inner()));
        }

        Arc::make_mut(&mut self.entries).retain(|entry| entry != &domain);
        self.generation += 1;
        info!(removed = %domain, total = self.entries.len(), "vocabulary entry removed");

        Ok(domain)
    }

    /// Drops every entry.
    pub fn clear(&mut self) {
        if self.entries.is_empty() {
            return;
        }

        let removed = self.entries.len();
        self.entries = Arc::new(Vec::new());
        self.index.clear();
        self.generation += 1;
        info!(removed, "vocabulary cleared");
    }
}
