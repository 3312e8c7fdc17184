use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};
use crate::value::{AttrValue, MISSING_SEGMENT};

/// Position of a record in the dataset it was loaded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub usize);

/// An attribute bag keyed by attribute name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    pub attributes: BTreeMap<String, AttrValue>,
}

impl Record {
    pub fn new(id: RecordId) -> Self {
        Self {
            id,
            attributes: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<AttrValue>) {
        self.attributes.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.attributes.get(name)
    }

    /// String form of an attribute, `undefined` when the record lacks it.
    pub fn display_value(&self, name: &str) -> String {
        match self.attributes.get(name) {
            Some(value) => value.to_string(),
            None => MISSING_SEGMENT.to_string(),
        }
    }

    /// True when both records carry identical attribute maps.
    pub fn same_values(&self, other: &Record) -> bool {
        self.attributes == other.attributes
    }
}

/// An immutable, pre-loaded record set with its column schema.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    pub name: String,
    pub columns: Vec<String>,
    pub records: Vec<Record>,
}

impl Dataset {
    /// Creates an empty dataset, rejecting blank or repeated column names.
    pub fn new(name: impl Into<String>, columns: Vec<String>) -> Result<Self> {
        let mut seen = std::collections::BTreeSet::new();
        for column in &columns {
            if column.trim().is_empty() {
                return Err(ModelError::EmptyColumnName);
            }
            if !seen.insert(column.as_str()) {
                return Err(ModelError::DuplicateColumn {
                    name: column.clone(),
                });
            }
        }
        Ok(Self {
            name: name.into(),
            columns,
            records: Vec::new(),
        })
    }

    /// Appends a record, assigning it the next sequential id.
    pub fn push_record(&mut self, mut record: Record) -> RecordId {
        let id = RecordId(self.records.len());
        record.id = id;
        self.records.push(record);
        id
    }

    /// Appends a record built from attribute pairs.
    pub fn push<I, K, V>(&mut self, attributes: I) -> RecordId
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<AttrValue>,
    {
        let mut record = Record::new(RecordId(0));
        for (name, value) in attributes {
            record.set(name, value);
        }
        self.push_record(record)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|column| column == name)
    }
}
