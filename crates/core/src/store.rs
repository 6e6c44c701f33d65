//! In-process record store.
//!
//! [`RecordStore`] exclusively owns the catalog's records. Ids are handed
//! out from a monotonically increasing counter and are never reused, even
//! after the record holding them is deleted.

use crate::error::CoreError;
use crate::record::{seed_records, CharacterRecord, CreateRecord, UpdateRecord};
use crate::types::RecordId;

const ENTITY: &str = "Character";

/// Ordered, in-memory collection of character records.
#[derive(Debug, Clone)]
pub struct RecordStore {
    records: Vec<CharacterRecord>,
    next_id: RecordId,
}

impl RecordStore {
    /// An empty store whose first record will get id 1.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            next_id: 1,
        }
    }

    /// A store holding `records` in the given order.
    ///
    /// The next id is one past the highest id present.
    pub fn with_records(records: Vec<CharacterRecord>) -> Self {
        let next_id = records.iter().map(|r| r.id).max().unwrap_or(0) + 1;
        Self { records, next_id }
    }

    /// A store holding the two default seed records.
    pub fn seeded() -> Self {
        Self::with_records(seed_records())
    }

    /// All records in insertion order.
    pub fn list(&self) -> &[CharacterRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: RecordId) -> Result<&CharacterRecord, CoreError> {
        self.records
            .iter()
            .find(|r| r.id == id)
            .ok_or(CoreError::NotFound { entity: ENTITY, id })
    }

    /// Insert a new record, assigning the next id.
    ///
    /// Fails with [`CoreError::Validation`] when the title is absent or empty.
    pub fn create(&mut self, input: CreateRecord) -> Result<CharacterRecord, CoreError> {
        let title = input
            .title
            .filter(|t| !t.is_empty())
            .ok_or_else(|| CoreError::Validation("title is required".to_string()))?;

        let record = CharacterRecord {
            id: self.next_id,
            title,
            body: input.body.unwrap_or_default(),
            universe: input.universe.unwrap_or_default(),
            species: input.species.unwrap_or_default(),
            image_url: input.image_url.unwrap_or_default(),
            abilities: input.abilities.unwrap_or_default(),
        };
        self.next_id += 1;
        self.records.push(record.clone());
        Ok(record)
    }

    pub fn update(
        &mut self,
        id: RecordId,
        input: UpdateRecord,
    ) -> Result<CharacterRecord, CoreError> {
        let record = self
            .records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(CoreError::NotFound { entity: ENTITY, id })?;
        record.apply(input);
        Ok(record.clone())
    }

    /// Remove a record and hand it back to the caller.
    pub fn delete(&mut self, id: RecordId) -> Result<CharacterRecord, CoreError> {
        let index = self
            .records
            .iter()
            .position(|r| r.id == id)
            .ok_or(CoreError::NotFound { entity: ENTITY, id })?;
        Ok(self.records.remove(index))
    }
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new()
    }
}
