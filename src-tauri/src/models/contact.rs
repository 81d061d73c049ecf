//! Contact details shown on the contact page and in the footer.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    pub email: String,
    pub linkedin_url: String,
    pub location_line1: String,
    /// Optional second address line; written as `null` when absent so a
    /// reimported document clears it instead of inheriting one.
    #[serde(default)]
    pub location_line2: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_second_location_line_is_written_as_null() {
        let contact = ContactInfo {
            email: "contact@example.fr".to_string(),
            linkedin_url: "https://linkedin.com".to_string(),
            location_line1: "Nouméa".to_string(),
            location_line2: None,
        };
        let value = serde_json::to_value(&contact).expect("to_value");
        assert_eq!(value["linkedinUrl"], "https://linkedin.com");
        assert_eq!(value["locationLine1"], "Nouméa");
        assert_eq!(value.get("locationLine2"), Some(&serde_json::Value::Null));
    }
}
