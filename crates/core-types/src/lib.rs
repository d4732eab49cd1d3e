pub mod account;
pub mod error;
pub mod property;

// Re-export the core types to provide a clean public API.
pub use account::{AccountProfile, AccountView, BillingEntry, UpdateAccount};
pub use error::ValidationError;
pub use property::{
    NewProperty, NewPropertyOwner, Property, PropertyFilter, PropertyOwner, PLACEHOLDER_IMAGE,
};
