//! The extraction output model: a fixed set of product-page fields, each of
//! which is absent, a single string, or an ordered list of strings.

use serde::{Deserialize, Serialize};

/// Value of one extracted field.
///
/// Serializes untagged: `Absent` becomes JSON `null`, `Text` a string,
/// `TextList` an array of strings — matching the shape downstream display
/// layers expect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Absent,
    Text(String),
    TextList(Vec<String>),
}

impl FieldValue {
    /// Builds a `Text` value, coercing a missing or empty (after trim)
    /// string to `Absent`. This is the single normalization point that keeps
    /// `Text("")` out of records.
    #[must_use]
    pub fn from_text(value: Option<String>) -> Self {
        match value {
            Some(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    FieldValue::Absent
                } else {
                    FieldValue::Text(trimmed.to_string())
                }
            }
            None => FieldValue::Absent,
        }
    }

    /// Builds a `TextList` value, trimming entries, dropping empties, and
    /// coercing an empty list to `Absent`.
    #[must_use]
    pub fn from_list(values: Vec<String>) -> Self {
        let cleaned: Vec<String> = values
            .into_iter()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        if cleaned.is_empty() {
            FieldValue::Absent
        } else {
            FieldValue::TextList(cleaned)
        }
    }

    #[must_use]
    pub fn is_absent(&self) -> bool {
        matches!(self, FieldValue::Absent)
    }

    /// The string payload, if this is a `Text` value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// The list payload, if this is a `TextList` value.
    #[must_use]
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            FieldValue::TextList(v) => Some(v),
            _ => None,
        }
    }
}

/// One scraped product page, as a flat record of the eleven supported
/// fields. Every key is always present; a field no strategy could extract
/// is `Absent`.
///
/// Field names serialize as the human-readable labels the display layer
/// renders directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionRecord {
    #[serde(rename = "Product Name")]
    pub product_name: FieldValue,
    #[serde(rename = "Rating")]
    pub rating: FieldValue,
    #[serde(rename = "Number of Ratings")]
    pub number_of_ratings: FieldValue,
    #[serde(rename = "Selling Price")]
    pub selling_price: FieldValue,
    #[serde(rename = "Total Discount")]
    pub total_discount: FieldValue,
    #[serde(rename = "Bank Offers")]
    pub bank_offers: FieldValue,
    #[serde(rename = "About this item")]
    pub about_this_item: FieldValue,
    #[serde(rename = "Product Information")]
    pub product_information: FieldValue,
    #[serde(rename = "Amazon Product Images")]
    pub amazon_product_images: FieldValue,
    #[serde(rename = "Manufacturer Images")]
    pub manufacturer_images: FieldValue,
    #[serde(rename = "AI Generated Customer Review Summary")]
    pub review_summary: FieldValue,
}

impl ExtractionRecord {
    /// A record with every field `Absent`.
    #[must_use]
    pub fn empty() -> Self {
        ExtractionRecord {
            product_name: FieldValue::Absent,
            rating: FieldValue::Absent,
            number_of_ratings: FieldValue::Absent,
            selling_price: FieldValue::Absent,
            total_discount: FieldValue::Absent,
            bank_offers: FieldValue::Absent,
            about_this_item: FieldValue::Absent,
            product_information: FieldValue::Absent,
            amazon_product_images: FieldValue::Absent,
            manufacturer_images: FieldValue::Absent,
            review_summary: FieldValue::Absent,
        }
    }

    /// All eleven fields in declaration order, with their serialized labels.
    #[must_use]
    pub fn fields(&self) -> [(&'static str, &FieldValue); 11] {
        [
            ("Product Name", &self.product_name),
            ("Rating", &self.rating),
            ("Number of Ratings", &self.number_of_ratings),
            ("Selling Price", &self.selling_price),
            ("Total Discount", &self.total_discount),
            ("Bank Offers", &self.bank_offers),
            ("About this item", &self.about_this_item),
            ("Product Information", &self.product_information),
            ("Amazon Product Images", &self.amazon_product_images),
            ("Manufacturer Images", &self.manufacturer_images),
            ("AI Generated Customer Review Summary", &self.review_summary),
        ]
    }
}
