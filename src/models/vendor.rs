//! Vendor model.

use serde::{Deserialize, Serialize};

use super::{CategoryId, CategoryRef, VendorId};

/// A service vendor listed under a category.
///
/// `category` arrives either populated or as a bare id depending on the
/// endpoint; see [`CategoryRef`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vendor {
    /// Unique identifier.
    #[serde(rename = "_id")]
    pub id: VendorId,
    /// Display name.
    pub name: String,
    /// Owning category (populated or bare id).
    #[serde(rename = "categoryId")]
    pub category: CategoryRef,
    /// Contact email.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Contact phone number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Starting price.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    /// Upper bound of the price range.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_price: Option<f64>,
    /// Average rating, absent for unrated vendors.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    /// Image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Offered services.
    #[serde(default)]
    pub services: Vec<String>,
    /// Free-form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Whether the vendor currently accepts bookings.
    #[serde(default = "default_availability")]
    pub availability: bool,
}

/// Vendors accept bookings unless the backend says otherwise.
const fn default_availability() -> bool {
    true
}

/// Body for admin vendor create/update calls.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorInput {
    /// Display name.
    pub name: String,
    /// Owning category id.
    pub category_id: CategoryId,
    /// Contact email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Contact phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Starting price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    /// Upper bound of the price range.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_price: Option<f64>,
    /// Average rating.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    /// Image URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Offered services.
    pub services: Vec<String>,
    /// Free-form description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Whether the vendor currently accepts bookings.
    pub availability: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_vendor_with_bare_category_id() {
        let json = r#"{
            "_id": "65f0c0ffee0000000000beef",
            "name": "Lens & Light",
            "categoryId": "507f1f77bcf86cd799439011",
            "email": "studio@lenslight.example",
            "price": 15000,
            "maxPrice": 45000,
            "rating": 4.7,
            "services": ["Wedding", "Portrait"]
        }"#;
        let vendor: Vendor = serde_json::from_str(json).unwrap();
        assert_eq!(vendor.name, "Lens & Light");
        assert!(vendor.category.as_populated().is_none());
        assert_eq!(vendor.category.id().as_inner(), "507f1f77bcf86cd799439011");
        assert_eq!(vendor.price, Some(15000.0));
        assert_eq!(vendor.services.len(), 2);
        assert!(vendor.availability);
    }

    #[test]
    fn deserialize_vendor_with_populated_category() {
        let json = r#"{
            "_id": "v-1",
            "name": "Tasty Table",
            "categoryId": {"_id": "c-2", "name": "Catering"},
            "availability": false
        }"#;
        let vendor: Vendor = serde_json::from_str(json).unwrap();
        assert_eq!(vendor.category.name_or("Unknown Category"), "Catering");
        assert!(!vendor.availability);
        assert!(vendor.services.is_empty());
    }

    #[test]
    fn serialize_roundtrip() {
        let vendor = Vendor {
            id: VendorId::new("v-1".to_owned()),
            name: "Tasty Table".to_owned(),
            category: CategoryRef::Id(CategoryId::new("c-2".to_owned())),
            email: None,
            phone: None,
            price: Some(500.0),
            max_price: None,
            rating: None,
            image: None,
            services: vec!["Buffet".to_owned()],
            description: None,
            availability: true,
        };
        let json = serde_json::to_string(&vendor).unwrap();
        let deserialized: Vendor = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, vendor);
    }

    #[test]
    fn input_serializes_category_id_key() {
        let input = VendorInput {
            name: "Tasty Table".to_owned(),
            category_id: CategoryId::new("c-2".to_owned()),
            email: None,
            phone: None,
            price: None,
            max_price: None,
            rating: None,
            image: None,
            services: vec![],
            description: None,
            availability: true,
        };
        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(json["categoryId"], "c-2");
        assert_eq!(json["availability"], true);
    }
}
