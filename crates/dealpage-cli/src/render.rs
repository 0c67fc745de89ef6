//! Plain-text rendering of an extraction record. Absent fields are skipped
//! rather than printed as empty sections.

use dealpage_core::{ExtractionRecord, FieldValue};

pub fn print_record(url: &str, record: &ExtractionRecord) {
    println!("== {url}");
    for (label, value) in record.fields() {
        match value {
            FieldValue::Absent => {}
            FieldValue::Text(text) => {
                // The price is stored as bare digits; restore a currency
                // prefix for display.
                if label == "Selling Price" {
                    println!("{label}: Rs {text}");
                } else {
                    println!("{label}: {text}");
                }
            }
            FieldValue::TextList(items) => {
                println!("{label}:");
                for item in items {
                    println!("  - {item}");
                }
            }
        }
    }
}
