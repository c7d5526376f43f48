/// AddressBook: the keyed, insertion-ordered store of contact records
///
/// Records are keyed by name (case-insensitive, at most one record per
/// name) and kept in insertion order, which drives listing, search result
/// order, and pagination.

use crate::domain::Record;

/// The in-memory contact store
#[derive(Debug, Default, Clone, PartialEq)]
pub struct AddressBook {
    records: Vec<Record>,
}

impl AddressBook {
    /// Create an empty address book
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|r| r.name().matches(name))
    }

    /// Insert a record, replacing any existing record with the same name
    ///
    /// Replacement keeps the original position so the book's order stays
    /// stable across updates.
    pub fn add_record(&mut self, record: Record) {
        match self.position(record.name().as_str()) {
            Some(index) => self.records[index] = record,
            None => self.records.push(record),
        }
    }

    /// Look up a record by exact name (case-insensitive)
    pub fn get(&self, name: &str) -> Option<&Record> {
        self.position(name).map(|i| &self.records[i])
    }

    /// Mutable lookup by exact name (case-insensitive)
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.position(name).map(|i| &mut self.records[i])
    }

    /// Remove a record by exact name, returning it when one existed
    pub fn remove(&mut self, name: &str) -> Option<Record> {
        self.position(name).map(|i| self.records.remove(i))
    }

    /// Every record whose name contains `query` as a case-insensitive
    /// substring, in insertion order
    pub fn find_records(&self, query: &str) -> Vec<&Record> {
        let query = query.trim().to_lowercase();
        self.records
            .iter()
            .filter(|r| r.name().as_str().to_lowercase().contains(&query))
            .collect()
    }

    /// Every record whose name or any phone number starts with `query`
    /// (case-insensitive prefix), in insertion order
    ///
    /// Deliberately narrower than find_records: "an" matches Anna and Ann
    /// but not Johanna.
    pub fn search(&self, query: &str) -> Vec<&Record> {
        let query = query.trim().to_lowercase();
        self.records
            .iter()
            .filter(|r| {
                r.name().as_str().to_lowercase().starts_with(&query)
                    || r.phones().iter().any(|p| p.as_str().starts_with(&query))
            })
            .collect()
    }

    /// Iterate over the book in fixed-size pages
    ///
    /// The final page may be shorter; a page size of zero means one page
    /// holding everything. Each call starts a fresh walk over the current
    /// record order.
    pub fn pages(&self, page_size: usize) -> impl Iterator<Item = &[Record]> {
        let size = if page_size == 0 {
            self.records.len().max(1)
        } else {
            page_size
        };
        self.records.chunks(size)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
