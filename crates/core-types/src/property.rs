use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Fallback listing image applied when a creation payload supplies none.
pub const PLACEHOLDER_IMAGE: &str = "/api/placeholder/400/300";

/// A property listing as clients see it.
///
/// Field names follow the client convention (camelCase, `type` for the
/// listing kind) rather than the storage schema. Optional fields that are
/// `None` are omitted from the JSON entirely instead of rendering as null.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: String,
    pub title: String,
    /// Display price, currency and separators included (e.g. "K3,500").
    pub price: String,
    /// Price unit such as "per month" or "per bedspace/month".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_type: Option<String>,
    pub location: String,
    #[serde(rename = "type")]
    pub listing_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bedrooms: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bathrooms: Option<i32>,
    /// Total sleeping slots, for boarding listings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bedspaces: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_bedspaces: Option<i32>,
    /// Free-text walking distance, e.g. "5 mins from UNZA".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_from_uni: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amenities: Option<Vec<String>>,
    /// Display surface area, e.g. "120 sqm".
    pub area: String,
    pub image: String,
    pub verified: bool,
    pub featured: bool,
    pub owner: PropertyOwner,
}

/// Contact block embedded in every listing. There is no owner entity or
/// foreign key behind it; the name string itself is the link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyOwner {
    pub name: String,
    pub phone: String,
    pub verified: bool,
}

/// Client payload for creating a listing.
///
/// Every field is optional at the type level so that any JSON object (or
/// none at all) deserializes cleanly; `validate` then decides whether the
/// payload is acceptable.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProperty {
    pub title: Option<String>,
    /// Display price string. Creation payloads carry it as "priceText";
    /// listings render it back out under the shorter "price" key.
    pub price_text: Option<String>,
    pub price_type: Option<String>,
    pub location: Option<String>,
    #[serde(rename = "type")]
    pub listing_type: Option<String>,
    pub category: Option<String>,
    pub bedrooms: Option<i32>,
    pub bathrooms: Option<i32>,
    pub bedspaces: Option<i32>,
    pub available_bedspaces: Option<i32>,
    pub distance_from_uni: Option<String>,
    pub amenities: Option<Vec<String>>,
    pub area: Option<String>,
    pub image: Option<String>,
    pub verified: Option<bool>,
    pub featured: Option<bool>,
    pub owner: Option<NewPropertyOwner>,
}

/// Owner block of a creation payload, optional field by field like its
/// parent.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPropertyOwner {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub verified: Option<bool>,
}

impl NewProperty {
    /// Checks the eight required fields: title, price, location, type,
    /// category, area, owner name and owner phone. A field is present when
    /// it is set and non-empty; whitespace counts as text.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let owner = self.owner.as_ref();
        let required = [
            self.title.as_deref(),
            self.price_text.as_deref(),
            self.location.as_deref(),
            self.listing_type.as_deref(),
            self.category.as_deref(),
            self.area.as_deref(),
            owner.and_then(|o| o.name.as_deref()),
            owner.and_then(|o| o.phone.as_deref()),
        ];

        if required.into_iter().all(has_text) {
            Ok(())
        } else {
            Err(ValidationError::MissingRequiredFields)
        }
    }
}

fn has_text(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}

/// Search criteria for the listing collection. All criteria are optional
/// and combine with AND; an absent criterion filters nothing out.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PropertyFilter {
    #[serde(rename = "type")]
    pub listing_type: Option<String>,
    pub category: Option<String>,
    /// Raw query value; only the literal string "true" activates the
    /// featured-only restriction.
    pub featured: Option<String>,
}

impl PropertyFilter {
    pub fn featured_only(&self) -> bool {
        self.featured.as_deref() == Some("true")
    }
}
