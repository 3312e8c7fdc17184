//! Entries of a rendered display sequence.

use serde::{Deserialize, Serialize};

use crate::record::Record;
use crate::value::AttrValue;

/// The shared value of one active filter within a group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderValue {
    pub name: String,
    /// `None` when the group's first record lacks the attribute.
    pub value: Option<AttrValue>,
}

impl HeaderValue {
    pub fn new(name: impl Into<String>, value: Option<AttrValue>) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// Synthetic row placed in front of each run of grouped records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupHeader {
    pub label: String,
    pub values: Vec<HeaderValue>,
    pub is_group_by: bool,
}

impl GroupHeader {
    pub fn new(label: impl Into<String>, values: Vec<HeaderValue>) -> Self {
        Self {
            label: label.into(),
            values,
            is_group_by: true,
        }
    }

    /// Looks up the shared value recorded for `name`.
    pub fn value_of(&self, name: &str) -> Option<&AttrValue> {
        self.values
            .iter()
            .find(|entry| entry.name == name)
            .and_then(|entry| entry.value.as_ref())
    }
}

/// One entry of a display sequence: either a data record or a group header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum DisplayRow {
    Record(Record),
    Header(GroupHeader),
}

impl DisplayRow {
    pub fn is_header(&self) -> bool {
        matches!(self, DisplayRow::Header(_))
    }

    pub fn as_record(&self) -> Option<&Record> {
        match self {
            DisplayRow::Record(record) => Some(record),
            DisplayRow::Header(_) => None,
        }
    }

    pub fn as_header(&self) -> Option<&GroupHeader> {
        match self {
            DisplayRow::Header(header) => Some(header),
            DisplayRow::Record(_) => None,
        }
    }
}

impl From<Record> for DisplayRow {
    fn from(record: Record) -> Self {
        DisplayRow::Record(record)
    }
}

impl From<GroupHeader> for DisplayRow {
    fn from(header: GroupHeader) -> Self {
        DisplayRow::Header(header)
    }
}
