use chrono::NaiveDate;
use core_types::{
    AccountProfile, BillingEntry, NewProperty, Property, PropertyOwner, PLACEHOLDER_IMAGE,
};
use serde_json::{json, Value as JsonValue};
use sqlx::FromRow;

/// A row of the `properties` table, named exactly as the snake_case schema
/// spells it. The client-facing shape is produced by `From<PropertyRow>`,
/// never by serializing this struct.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct PropertyRow {
    pub id: String,
    pub title: String,
    pub price_text: String,
    pub price_type: Option<String>,
    pub location: String,
    #[sqlx(rename = "type")]
    pub listing_type: String,
    pub category: String,
    pub bedrooms: Option<i32>,
    pub bathrooms: Option<i32>,
    pub bedspaces: Option<i32>,
    pub available_bedspaces: Option<i32>,
    pub distance_from_uni: Option<String>,
    pub amenities: Option<Vec<String>>,
    pub area: String,
    pub image_url: String,
    pub verified: bool,
    pub featured: bool,
    pub owner_name: String,
    pub owner_phone: String,
    pub owner_verified: bool,
}

impl PropertyRow {
    /// Builds the row to insert for a creation payload, applying the
    /// storage defaults: a placeholder image when none was sent, empty
    /// optional strings and empty amenity lists stored as NULL, and flag
    /// fields coerced to plain booleans.
    ///
    /// Callers validate the payload first; the required-field fallbacks
    /// here exist only so this function stays total.
    pub fn from_new(id: String, new: NewProperty) -> Self {
        let owner = new.owner.unwrap_or_default();
        PropertyRow {
            id,
            title: new.title.unwrap_or_default(),
            price_text: new.price_text.unwrap_or_default(),
            price_type: new.price_type.filter(|p| !p.is_empty()),
            location: new.location.unwrap_or_default(),
            listing_type: new.listing_type.unwrap_or_default(),
            category: new.category.unwrap_or_default(),
            bedrooms: new.bedrooms,
            bathrooms: new.bathrooms,
            bedspaces: new.bedspaces,
            available_bedspaces: new.available_bedspaces,
            distance_from_uni: new.distance_from_uni.filter(|d| !d.is_empty()),
            amenities: new.amenities.filter(|a| !a.is_empty()),
            area: new.area.unwrap_or_default(),
            image_url: new
                .image
                .filter(|i| !i.is_empty())
                .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string()),
            verified: new.verified.unwrap_or(false),
            featured: new.featured.unwrap_or(false),
            owner_name: owner.name.unwrap_or_default(),
            owner_phone: owner.phone.unwrap_or_default(),
            owner_verified: owner.verified.unwrap_or(false),
        }
    }
}

impl From<PropertyRow> for Property {
    fn from(row: PropertyRow) -> Self {
        Property {
            id: row.id,
            title: row.title,
            price: row.price_text,
            // An empty stored price unit counts as unset.
            price_type: row.price_type.filter(|p| !p.is_empty()),
            location: row.location,
            listing_type: row.listing_type,
            bedrooms: row.bedrooms,
            bathrooms: row.bathrooms,
            bedspaces: row.bedspaces,
            available_bedspaces: row.available_bedspaces,
            distance_from_uni: row.distance_from_uni,
            // An empty amenity list reads as absent, not as [].
            amenities: row.amenities.filter(|a| !a.is_empty()),
            area: row.area,
            image: row.image_url,
            verified: row.verified,
            featured: row.featured,
            owner: PropertyOwner {
                name: row.owner_name,
                phone: row.owner_phone,
                verified: row.owner_verified,
            },
        }
    }
}

/// A row of the `users` table. The three JSONB columns stay opaque.
#[derive(Debug, Clone, FromRow)]
pub struct UserRow {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub profile_image_url: Option<String>,
    pub is_verified: bool,
    pub member_since: String,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub preferences: Option<JsonValue>,
    pub kyc: Option<JsonValue>,
    pub stats: Option<JsonValue>,
}

impl UserRow {
    /// The exact string listings are matched against when assembling the
    /// account view: first and last name joined by a single space.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl From<UserRow> for AccountProfile {
    fn from(row: UserRow) -> Self {
        AccountProfile {
            id: row.id,
            first_name: row.first_name,
            last_name: row.last_name,
            email: row.email,
            phone: row.phone,
            profile_image: row.profile_image_url,
            is_verified: row.is_verified,
            member_since: row.member_since,
            location: row.location,
            bio: row.bio,
            // NULL JSON blobs surface as {} so clients can always index in.
            preferences: row.preferences.unwrap_or_else(|| json!({})),
            kyc: row.kyc.unwrap_or_else(|| json!({})),
            stats: row.stats.unwrap_or_else(|| json!({})),
        }
    }
}

/// A row of the `billing_transactions` table.
#[derive(Debug, Clone, FromRow)]
pub struct BillingRow {
    pub id: String,
    pub user_id: String,
    pub date: NaiveDate,
    pub description: String,
    pub amount: String,
    pub status: String,
}

impl From<BillingRow> for BillingEntry {
    fn from(row: BillingRow) -> Self {
        BillingEntry {
            id: row.id,
            date: row.date,
            description: row.description,
            amount: row.amount,
            status: row.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::NewPropertyOwner;

    fn full_row() -> PropertyRow {
        PropertyRow {
            id: "prop-9".to_string(),
            title: "Student Lodge".to_string(),
            price_text: "K350".to_string(),
            price_type: Some("per bedspace/month".to_string()),
            location: "Great East Road".to_string(),
            listing_type: "boarding".to_string(),
            category: "boarding house".to_string(),
            bedrooms: None,
            bathrooms: Some(2),
            bedspaces: Some(4),
            available_bedspaces: Some(2),
            distance_from_uni: Some("5 mins from UNZA".to_string()),
            amenities: Some(vec!["Wifi".to_string(), "Security".to_string()]),
            area: "20 sqm".to_string(),
            image_url: "/images/lodge.jpg".to_string(),
            verified: true,
            featured: false,
            owner_name: "Grace Phiri".to_string(),
            owner_phone: "+260966111222".to_string(),
            owner_verified: true,
        }
    }

    #[test]
    fn row_maps_every_populated_field() {
        let property = Property::from(full_row());

        assert_eq!(property.id, "prop-9");
        assert_eq!(property.price, "K350");
        assert_eq!(property.price_type.as_deref(), Some("per bedspace/month"));
        assert_eq!(property.listing_type, "boarding");
        assert_eq!(property.available_bedspaces, Some(2));
        assert_eq!(property.distance_from_uni.as_deref(), Some("5 mins from UNZA"));
        assert_eq!(property.image, "/images/lodge.jpg");
        assert_eq!(property.owner.name, "Grace Phiri");
        assert!(property.owner.verified);
    }

    #[test]
    fn category_stays_out_of_the_listing_shape() {
        let property = Property::from(full_row());
        let value = serde_json::to_value(property).unwrap();
        assert!(!value.as_object().unwrap().contains_key("category"));
    }

    #[test]
    fn empty_price_type_reads_as_absent() {
        let mut row = full_row();
        row.price_type = Some(String::new());
        assert!(Property::from(row).price_type.is_none());
    }

    #[test]
    fn empty_distance_is_passed_through() {
        // Only NULL counts as absent for the campus distance; an empty
        // string survives the mapping.
        let mut row = full_row();
        row.distance_from_uni = Some(String::new());
        assert_eq!(Property::from(row).distance_from_uni.as_deref(), Some(""));
    }

    #[test]
    fn empty_amenity_list_reads_as_absent() {
        let mut row = full_row();
        row.amenities = Some(Vec::new());
        assert!(Property::from(row).amenities.is_none());
    }

    #[test]
    fn mapping_is_stable_across_repeated_reads() {
        let first = Property::from(full_row());
        let second = Property::from(full_row());
        assert_eq!(first, second);
    }

    fn minimal_payload() -> NewProperty {
        NewProperty {
            title: Some("Test Flat".to_string()),
            price_text: Some("K1,000".to_string()),
            location: Some("Lusaka".to_string()),
            listing_type: Some("rent".to_string()),
            category: Some("apartment".to_string()),
            area: Some("50 sqm".to_string()),
            owner: Some(NewPropertyOwner {
                name: Some("Jane Banda".to_string()),
                phone: Some("+260971234567".to_string()),
                verified: None,
            }),
            ..NewProperty::default()
        }
    }

    #[test]
    fn minimal_payload_gets_storage_defaults() {
        let row = PropertyRow::from_new("new-1".to_string(), minimal_payload());

        assert_eq!(row.id, "new-1");
        assert_eq!(row.image_url, PLACEHOLDER_IMAGE);
        assert!(row.price_type.is_none());
        assert!(row.bedrooms.is_none());
        assert!(row.amenities.is_none());
        assert!(!row.verified);
        assert!(!row.featured);
        assert!(!row.owner_verified);
        assert_eq!(row.owner_name, "Jane Banda");
    }

    #[test]
    fn empty_optional_strings_store_as_null() {
        let mut payload = minimal_payload();
        payload.price_type = Some(String::new());
        payload.distance_from_uni = Some(String::new());
        payload.amenities = Some(Vec::new());
        payload.image = Some(String::new());

        let row = PropertyRow::from_new("new-2".to_string(), payload);

        assert!(row.price_type.is_none());
        assert!(row.distance_from_uni.is_none());
        assert!(row.amenities.is_none());
        assert_eq!(row.image_url, PLACEHOLDER_IMAGE);
    }

    #[test]
    fn explicit_values_override_storage_defaults() {
        let mut payload = minimal_payload();
        payload.image = Some("/images/flat.jpg".to_string());
        payload.verified = Some(true);
        payload.featured = Some(true);
        payload.bedrooms = Some(2);

        let row = PropertyRow::from_new("new-3".to_string(), payload);

        assert_eq!(row.image_url, "/images/flat.jpg");
        assert!(row.verified);
        assert!(row.featured);
        assert_eq!(row.bedrooms, Some(2));
    }

    #[test]
    fn inserted_row_round_trips_to_the_client_shape() {
        let row = PropertyRow::from_new("new-4".to_string(), minimal_payload());
        let property = Property::from(row);

        assert_eq!(property.id, "new-4");
        assert_eq!(property.title, "Test Flat");
        assert_eq!(property.image, PLACEHOLDER_IMAGE);
        assert!(property.price_type.is_none());
        assert!(!property.verified);
    }

    #[test]
    fn user_full_name_joins_with_one_space() {
        let user = sample_user();
        assert_eq!(user.full_name(), "John Mwanza");
    }

    fn sample_user() -> UserRow {
        UserRow {
            id: "1".to_string(),
            first_name: "John".to_string(),
            last_name: "Mwanza".to_string(),
            email: "john.mwanza@email.com".to_string(),
            phone: "+260977123456".to_string(),
            profile_image_url: None,
            is_verified: true,
            member_since: "2023".to_string(),
            location: Some("Lusaka, Zambia".to_string()),
            bio: None,
            preferences: None,
            kyc: Some(json!({ "nrcVerified": true })),
            stats: None,
        }
    }

    #[test]
    fn null_json_blobs_default_to_empty_objects() {
        let profile = AccountProfile::from(sample_user());

        assert_eq!(profile.preferences, json!({}));
        assert_eq!(profile.stats, json!({}));
        assert_eq!(profile.kyc, json!({ "nrcVerified": true }));
        // Plain nullable columns stay None rather than defaulting.
        assert!(profile.bio.is_none());
    }
}
