//! Record of every value the migration changed.

use std::fmt;

/// One changed value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Change {
    /// Dotted option path, or a `post:<id>.<field>` / `user:<id>.<key>` target.
    pub path: String,
    pub before: String,
    pub after: String,
}

impl fmt::Display for Change {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {:?} -> {:?}", self.path, self.before, self.after)
    }
}

/// Applies writes and remembers the ones that changed something.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeLog {
    entries: Vec<Change>,
}

impl ChangeLog {
    /// Write a non-empty text value. Empty values never overwrite a field.
    pub fn set_text(&mut self, path: &str, field: &mut String, value: String) {
        if value.is_empty() {
            return;
        }
        if *field != value {
            self.record(path, field.as_str(), &value);
            *field = value;
        }
    }

    /// Explicitly empty a text field.
    pub fn clear_text(&mut self, path: &str, field: &mut String) {
        if !field.is_empty() {
            self.record(path, field.as_str(), "");
            field.clear();
        }
    }

    pub fn set_flag(&mut self, path: &str, field: &mut bool, value: bool) {
        if *field != value {
            self.record(path, &field.to_string(), &value.to_string());
            *field = value;
        }
    }

    /// Note a change made outside the option tree.
    pub fn record(&mut self, path: &str, before: &str, after: &str) {
        tracing::debug!(path, before, after, "value changed");
        self.entries.push(Change {
            path: path.to_string(),
            before: before.to_string(),
            after: after.to_string(),
        });
    }

    pub fn entries(&self) -> &[Change] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
