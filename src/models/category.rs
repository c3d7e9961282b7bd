//! Vendor category model.

use serde::{Deserialize, Serialize};

use super::CategoryId;

/// A vendor category. Read-only from the client's perspective outside
/// the admin surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Unique identifier.
    #[serde(rename = "_id")]
    pub id: CategoryId,
    /// Display name.
    pub name: String,
    /// Image URL or asset path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Accent color hint used by the category grid.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Free-form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Body for admin category create/update calls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryInput {
    /// Display name.
    pub name: String,
    /// Image URL or asset path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Free-form description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_category() {
        let json = r#"{
            "_id": "507f1f77bcf86cd799439011",
            "name": "Photography",
            "image": "/assets/categories/photography.png",
            "color": "bg-blue-50"
        }"#;
        let category: Category = serde_json::from_str(json).unwrap();
        assert_eq!(category.id.as_inner(), "507f1f77bcf86cd799439011");
        assert_eq!(category.name, "Photography");
        assert_eq!(
            category.image.as_deref(),
            Some("/assets/categories/photography.png")
        );
        assert!(category.description.is_none());
    }

    #[test]
    fn deserialize_category_minimal() {
        let json = r#"{"_id": "c-1", "name": "Venue"}"#;
        let category: Category = serde_json::from_str(json).unwrap();
        assert_eq!(category.name, "Venue");
        assert!(category.image.is_none());
        assert!(category.color.is_none());
    }

    #[test]
    fn serialize_input_skips_unset_fields() {
        let input = CategoryInput {
            name: "Catering".to_owned(),
            image: None,
            description: None,
        };
        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(json, serde_json::json!({"name": "Catering"}));
    }
}
