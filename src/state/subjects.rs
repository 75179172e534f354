//! Dynamic "subjects to upload" list

use uuid::Uuid;

/// Stable identity of a subject entry, independent of its list position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubjectId(Uuid);

impl SubjectId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

/// One user-entered subject
#[derive(Debug, Clone)]
pub struct SubjectEntry {
    id: SubjectId,
    pub value: String,
}

impl SubjectEntry {
    fn new(value: String) -> Self {
        Self {
            id: SubjectId::new(),
            value,
        }
    }

    pub fn id(&self) -> SubjectId {
        self.id
    }
}

/// Ordered list of subject entries.
///
/// Invariant: the list always holds at least one entry. Removing the last
/// remaining entry is silently ignored, and the UI hides the remove
/// affordance at length 1.
#[derive(Debug, Clone)]
pub struct SubjectList {
    entries: Vec<SubjectEntry>,
    pub error: Option<&'static str>,
}

impl Default for SubjectList {
    fn default() -> Self {
        Self::new()
    }
}

impl SubjectList {
    /// Create the initial list: exactly one empty entry
    pub fn new() -> Self {
        Self {
            entries: vec![SubjectEntry::new(String::new())],
            error: None,
        }
    }

    /// Append a new entry and return its identity
    pub fn add_entry(&mut self, initial: impl Into<String>) -> SubjectId {
        let entry = SubjectEntry::new(initial.into());
        let id = entry.id;
        self.entries.push(entry);
        id
    }

    /// Remove the entry with the given identity.
    ///
    /// No-op when only one entry remains, or when the id is unknown.
    pub fn remove_entry(&mut self, id: SubjectId) {
        if self.entries.len() > 1 {
            self.entries.retain(|entry| entry.id != id);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&SubjectEntry> {
        self.entries.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut SubjectEntry> {
        self.entries.get_mut(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SubjectEntry> {
        self.entries.iter()
    }

    /// Count of entries whose trimmed value is non-empty
    pub fn non_empty_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| !entry.value.trim().is_empty())
            .count()
    }

    /// Whether the per-entry remove affordance should be offered
    pub fn can_remove(&self) -> bool {
        self.entries.len() > 1
    }

    /// Back to the initial single empty entry
    pub fn reset(&mut self) {
        self.entries = vec![SubjectEntry::new(String::new())];
        self.error = None;
    }
}
