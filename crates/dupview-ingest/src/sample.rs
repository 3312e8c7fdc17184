//! Built-in sample dataset.

use dupview_model::{AttrValue, Dataset, Record, RecordId};

const PIZZAS: [(&str, &[&str]); 7] = [
    ("small", &["pepperoni"]),
    ("small", &["pepperoni", "mushroom"]),
    ("medium", &["sausage"]),
    ("medium", &["olive", "green pepper"]),
    ("large", &["chicken"]),
    ("large", &["sausage", "green pepper"]),
    ("large", &["sausage", "red pepper"]),
];

/// Seven pizzas described by `size`, `noOfToppings` and `toppings`.
pub fn pizzas() -> Dataset {
    let mut dataset = Dataset {
        name: "pizzas".to_string(),
        columns: vec![
            "size".to_string(),
            "noOfToppings".to_string(),
            "toppings".to_string(),
        ],
        records: Vec::with_capacity(PIZZAS.len()),
    };
    for (size, toppings) in PIZZAS {
        dataset.push_record(
            Record::new(RecordId(0))
                .with_attribute("size", size)
                .with_attribute("noOfToppings", toppings.len() as i64)
                .with_attribute("toppings", AttrValue::list(toppings.iter().copied())),
        );
    }
    dataset
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_has_expected_shape() {
        let dataset = pizzas();
        assert_eq!(dataset.len(), 7);
        assert_eq!(dataset.records[3].display_value("toppings"), "olive,green pepper");
        assert_eq!(dataset.records[6].get("noOfToppings"), Some(&AttrValue::from(2)));
        assert_eq!(dataset.records[6].id, RecordId(6));
    }
}
