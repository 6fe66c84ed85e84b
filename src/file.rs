//! File records: the unit a report is grouped by.

use serde::{Deserialize, Serialize};

use crate::message::Message;

/// A file (virtual or real) with its accumulated diagnostics.
///
/// The reporter treats records as read-only snapshots; message order is
/// never mutated by a formatting call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FileRecord {
    /// Current path, if the file has one.
    pub path: Option<String>,
    /// First recorded path. Equals `path` unless the file was renamed.
    pub origin: Option<String>,
    /// Whether the file was persisted during processing.
    pub stored: bool,
    /// File contents; only needed when source-context rendering is on.
    pub contents: Option<String>,
    pub messages: Vec<Message>,
}

impl FileRecord {
    /// A record for `path`. The origin starts out equal to the path.
    pub fn new(path: impl Into<String>) -> Self {
        let path = path.into();
        Self {
            origin: Some(path.clone()),
            path: Some(path),
            ..Self::default()
        }
    }

    /// A record without any path, e.g. for stdin input.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Record a rename, keeping the first path as the origin.
    pub fn renamed_to(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Mark the file as persisted.
    pub fn written(mut self) -> Self {
        self.stored = true;
        self
    }

    pub fn with_contents(mut self, contents: impl Into<String>) -> Self {
        self.contents = Some(contents.into());
        self
    }

    pub fn with_message(mut self, message: Message) -> Self {
        self.messages.push(message);
        self
    }

    /// True when the file was persisted under a different path than it was
    /// first seen at.
    pub fn moved(&self) -> bool {
        self.stored && self.origin != self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_sets_origin() {
        let file = FileRecord::new("a.js");
        assert_eq!(file.path.as_deref(), Some("a.js"));
        assert_eq!(file.origin.as_deref(), Some("a.js"));
        assert!(!file.moved());
    }

    #[test]
    fn test_moved_requires_stored() {
        let renamed = FileRecord::new("a.js").renamed_to("b.js");
        assert!(!renamed.moved());
        assert!(renamed.written().moved());
    }

    #[test]
    fn test_stored_in_place_is_not_moved() {
        assert!(!FileRecord::new("a.js").written().moved());
    }
}
