use crate::domain::{error::SplitError, split::SplitConfiguration};

/// Session-only list of saved split configurations.
///
/// Entries are append-only copies; loading hands out another copy so the
/// saved value can never be edited in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SavedSplits {
    entries: Vec<SplitConfiguration>,
}

impl SavedSplits {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn save(mut self, config: &SplitConfiguration) -> Self {
        self.entries.push(config.clone());
        log::info!("Saved split {}", self.entries.len());
        self
    }

    pub fn load(&self, index: usize) -> Result<SplitConfiguration, SplitError> {
        self.entries
            .get(index)
            .cloned()
            .ok_or(SplitError::SnapshotNotFound {
                index,
                len: self.entries.len(),
            })
    }

    pub fn get(&self, index: usize) -> Option<&SplitConfiguration> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last_index(&self) -> Option<usize> {
        self.entries.len().checked_sub(1)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SplitConfiguration> {
        self.entries.iter()
    }
}
