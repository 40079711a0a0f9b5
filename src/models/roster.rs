use crate::models::record::AttendeeRecord;
use crate::models::schema::KeyMatch;

/// The full attendee table, in sheet order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    /// Headers of columns the layout does not know about.
    pub extra_columns: Vec<String>,
    pub records: Vec<AttendeeRecord>,
}

impl Roster {
    pub fn new(records: Vec<AttendeeRecord>) -> Self {
        Self {
            extra_columns: Vec::new(),
            records,
        }
    }

    /// Default roster written on first use of a local store.
    pub fn seeded<S: AsRef<str>>(names: &[S]) -> Self {
        Self::new(
            names
                .iter()
                .map(|n| AttendeeRecord::new(n.as_ref()))
                .collect(),
        )
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Index of the first record matching `key`.
    pub fn position(&self, key: &str, policy: KeyMatch) -> Option<usize> {
        self.records
            .iter()
            .position(|r| policy.matches(&r.key, key))
    }

    pub fn find(&self, key: &str, policy: KeyMatch) -> Option<&AttendeeRecord> {
        self.position(key, policy).map(|i| &self.records[i])
    }

    pub fn find_mut(&mut self, key: &str, policy: KeyMatch) -> Option<&mut AttendeeRecord> {
        self.records.iter_mut().find(|r| policy.matches(&r.key, key))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.key.as_str())
    }

    /// First key that appears more than once under `policy`, if any.
    pub fn first_duplicate(&self, policy: KeyMatch) -> Option<&str> {
        self.records.iter().enumerate().find_map(|(i, r)| {
            self.records[..i]
                .iter()
                .any(|prev| policy.matches(&prev.key, &r.key))
                .then_some(r.key.as_str())
        })
    }
}
