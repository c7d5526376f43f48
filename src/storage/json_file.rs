/// JSON file implementation of the contact storage interface
///
/// The book is stored as a JSON object mapping each name to its contact,
/// in book order (serde_json's preserve_order feature keeps object keys
/// ordered): `name -> { "name": string, "phones": [string],
/// "birthday": "dd.mm.yyyy" | null }`. Every value read back from disk
/// goes through the domain constructors, so a book that loads is a valid
/// book.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::{AddressBook, Birthday, Name, Phone, Record, UNKNOWN_YEAR};
use crate::storage::{ContactStorage, StorageError};

/// JSON-file-based storage implementation
pub struct JsonFileStorage {
    path: PathBuf,
}

/// Wire form of one contact
#[derive(Debug, Serialize, Deserialize)]
struct StoredRecord {
    name: String,
    phones: Vec<String>,
    birthday: Option<String>,
}

impl StoredRecord {
    fn from_record(record: &Record) -> Self {
        Self {
            name: record.name().as_str().to_string(),
            phones: record.phones().iter().map(|p| p.as_str().to_string()).collect(),
            birthday: record.birthday().map(encode_birthday),
        }
    }

    fn into_record(self) -> Result<Record, StorageError> {
        let mut record = Record::new(Name::new(&self.name)?);
        for phone in &self.phones {
            record.add_phone(Phone::new(phone)?);
        }
        if let Some(birthday) = &self.birthday {
            record.set_birthday(Some(decode_birthday(birthday)?));
        }
        Ok(record)
    }
}

/// The file always carries a four-digit year; UNKNOWN_YEAR stands in for
/// "no year known".
fn encode_birthday(birthday: &Birthday) -> String {
    format!(
        "{:02}.{:02}.{:04}",
        birthday.day(),
        birthday.month(),
        birthday.year().unwrap_or(UNKNOWN_YEAR)
    )
}

fn decode_birthday(value: &str) -> Result<Birthday, StorageError> {
    let parsed = Birthday::parse(value)?;
    if parsed.year() == Some(UNKNOWN_YEAR) {
        return Ok(Birthday::new(parsed.day(), parsed.month(), None)?);
    }
    Ok(parsed)
}

impl JsonFileStorage {
    /// Create a storage handle for the given contacts file path
    ///
    /// The file itself is only touched by load and save.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ContactStorage for JsonFileStorage {
    fn load(&self) -> Result<AddressBook, StorageError> {
        if !self.path.exists() {
            tracing::info!("No contacts file at {:?}, starting empty", self.path);
            let book = AddressBook::new();
            self.save(&book)?;
            return Ok(book);
        }

        let contents = fs::read_to_string(&self.path)?;
        let stored: serde_json::Map<String, serde_json::Value> =
            serde_json::from_str(&contents)?;

        let mut book = AddressBook::new();
        for (_name, value) in stored {
            let record: StoredRecord = serde_json::from_value(value)?;
            book.add_record(record.into_record()?);
        }

        tracing::debug!("Loaded {} contacts from {:?}", book.len(), self.path);
        Ok(book)
    }

    fn save(&self, book: &AddressBook) -> Result<(), StorageError> {
        let mut stored = serde_json::Map::new();
        for record in book.iter() {
            stored.insert(
                record.name().as_str().to_string(),
                serde_json::to_value(StoredRecord::from_record(record))?,
            );
        }
        let contents = serde_json::to_string_pretty(&serde_json::Value::Object(stored))?;

        // Write to a sibling temp file, then rename over the target so a
        // crash mid-write never leaves a half-written contacts file.
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, contents)?;
        fs::rename(&tmp, &self.path)?;

        tracing::debug!("Saved {} contacts to {:?}", book.len(), self.path);
        Ok(())
    }
}
