pub mod display;
pub mod error;
pub mod options;
pub mod record;
pub mod value;

pub use display::{DisplayRow, GroupHeader, HeaderValue};
pub use error::{ModelError, Result};
pub use options::{GroupingMode, ViewOptions};
pub use record::{Dataset, Record, RecordId};
pub use value::{AttrValue, MISSING_SEGMENT};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_row_serializes_with_kind_tag() {
        let record = Record::new(RecordId(0)).with_attribute("size", "small");
        let row = DisplayRow::Record(record);
        let json = serde_json::to_value(&row).expect("serialize row");
        assert_eq!(json["kind"], "Record");
        assert_eq!(json["attributes"]["size"], "small");
    }

    #[test]
    fn header_round_trips() {
        let header = GroupHeader::new(
            "size: small",
            vec![HeaderValue::new("size", Some(AttrValue::from("small")))],
        );
        let row = DisplayRow::Header(header);
        let json = serde_json::to_string(&row).expect("serialize header");
        let round: DisplayRow = serde_json::from_str(&json).expect("deserialize header");
        assert!(round.is_header());
        assert_eq!(round.as_header().map(|h| h.label.as_str()), Some("size: small"));
    }
}
