//! Sum types for denormalized reference fields.
//!
//! The backend returns foreign-key fields either as a bare id or as the
//! referenced record already expanded ("populated"). These enums make
//! the two shapes explicit so callers narrow before field access instead
//! of reaching through a maybe-object.

use serde::{Deserialize, Serialize};

use super::{Category, CategoryId, Vendor, VendorId};

/// A category reference: either populated or a bare id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CategoryRef {
    /// The full category record, expanded by the backend.
    Populated(Category),
    /// Just the identifier.
    Id(CategoryId),
}

impl CategoryRef {
    /// Returns the category id regardless of shape.
    #[inline]
    #[must_use]
    pub const fn id(&self) -> &CategoryId {
        match self {
            Self::Populated(category) => &category.id,
            Self::Id(id) => id,
        }
    }

    /// Returns the populated record, if the backend expanded it.
    #[inline]
    #[must_use]
    pub const fn as_populated(&self) -> Option<&Category> {
        match self {
            Self::Populated(category) => Some(category),
            Self::Id(_) => None,
        }
    }

    /// Returns the category name, or the fallback when only an id is
    /// available.
    #[inline]
    #[must_use]
    pub fn name_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.as_populated().map_or(fallback, |c| c.name.as_str())
    }
}

/// A vendor reference: either populated or a bare id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VendorRef {
    /// The full vendor record, expanded by the backend.
    Populated(Box<Vendor>),
    /// Just the identifier.
    Id(VendorId),
}

impl VendorRef {
    /// Returns the vendor id regardless of shape.
    #[inline]
    #[must_use]
    pub const fn id(&self) -> &VendorId {
        match self {
            Self::Populated(vendor) => &vendor.id,
            Self::Id(id) => id,
        }
    }

    /// Returns the populated record, if the backend expanded it.
    #[inline]
    #[must_use]
    pub fn as_populated(&self) -> Option<&Vendor> {
        match self {
            Self::Populated(vendor) => Some(vendor),
            Self::Id(_) => None,
        }
    }

    /// Returns the vendor name, or the fallback when only an id is
    /// available.
    #[inline]
    #[must_use]
    pub fn name_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.as_populated().map_or(fallback, |v| v.name.as_str())
    }
}

impl From<VendorId> for VendorRef {
    #[inline]
    fn from(id: VendorId) -> Self {
        Self::Id(id)
    }
}

impl From<CategoryId> for CategoryRef {
    #[inline]
    fn from(id: CategoryId) -> Self {
        Self::Id(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_bare_id() {
        let json = r#""507f1f77bcf86cd799439011""#;
        let reference: CategoryRef = serde_json::from_str(json).unwrap();
        assert!(matches!(reference, CategoryRef::Id(_)));
        assert_eq!(reference.id().as_inner(), "507f1f77bcf86cd799439011");
        assert!(reference.as_populated().is_none());
    }

    #[test]
    fn deserialize_populated_category() {
        let json = r#"{
            "_id": "507f1f77bcf86cd799439011",
            "name": "Photography"
        }"#;
        let reference: CategoryRef = serde_json::from_str(json).unwrap();
        assert_eq!(reference.name_or("Unknown Category"), "Photography");
        assert_eq!(reference.id().as_inner(), "507f1f77bcf86cd799439011");
    }

    #[test]
    fn deserialize_populated_vendor() {
        let json = r#"{
            "_id": "65f0c0ffee0000000000beef",
            "name": "Lens & Light",
            "categoryId": "507f1f77bcf86cd799439011"
        }"#;
        let reference: VendorRef = serde_json::from_str(json).unwrap();
        assert_eq!(reference.name_or("Unknown Vendor"), "Lens & Light");
    }

    #[test]
    fn name_fallback_for_bare_id() {
        let reference = VendorRef::Id(VendorId::new("v-1".to_owned()));
        assert_eq!(reference.name_or("Unknown Vendor"), "Unknown Vendor");
    }

    #[test]
    fn serialize_bare_id_is_plain_string() {
        let reference = CategoryRef::Id(CategoryId::new("abc".to_owned()));
        let json = serde_json::to_string(&reference).unwrap();
        assert_eq!(json, r#""abc""#);
    }
}
