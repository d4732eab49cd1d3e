use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::property::Property;

/// The account holder's profile as clients see it.
///
/// Unlike listing optionals, nullable profile fields serialize as explicit
/// nulls. The three JSON blobs are passed through opaquely and default to
/// `{}` when unset, so clients can always index into them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountProfile {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub profile_image: Option<String>,
    pub is_verified: bool,
    /// Display year such as "2023", not a timestamp.
    pub member_since: String,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub preferences: JsonValue,
    pub kyc: JsonValue,
    pub stats: JsonValue,
}

/// One line of the account's payment history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingEntry {
    pub id: String,
    /// Serializes as a plain calendar date, "YYYY-MM-DD".
    pub date: NaiveDate,
    pub description: String,
    /// Display amount, currency included (e.g. "K150").
    pub amount: String,
    pub status: String,
}

/// The composite account response: the profile fields at the top level,
/// with the owned listings and billing history alongside them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountView {
    #[serde(flatten)]
    pub profile: AccountProfile,
    pub properties: Vec<Property>,
    pub billing_history: Vec<BillingEntry>,
}

/// Client payload for a partial profile update. Absent fields keep their
/// stored values; only these seven fields are writable.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAccount {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub preferences: Option<JsonValue>,
}
