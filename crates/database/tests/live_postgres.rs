//! Round-trip checks against a real PostgreSQL instance.
//!
//! These are ignored by default; point `DATABASE_URL` at a disposable
//! database and run `cargo test -p database -- --ignored`. The migration
//! set is applied on entry and the seed rows are assumed present.

use std::time::Duration;

use core_types::{NewProperty, NewPropertyOwner, PropertyFilter, UpdateAccount};
use database::{connect, run_migrations, AccountService, PgPool, PropertyCatalog};

async fn prepared_pool() -> PgPool {
    let pool = connect(2, Duration::from_secs(5))
        .await
        .expect("DATABASE_URL must point at a reachable PostgreSQL");
    run_migrations(&pool).await.expect("migrations apply");
    pool
}

fn lodge_payload(title: &str) -> NewProperty {
    NewProperty {
        title: Some(title.to_string()),
        price_text: Some("K400".to_string()),
        price_type: Some("per bedspace/month".to_string()),
        location: Some("Kalundu, Lusaka".to_string()),
        listing_type: Some("boarding".to_string()),
        category: Some("boarding house".to_string()),
        bedspaces: Some(4),
        available_bedspaces: Some(3),
        distance_from_uni: Some("8 mins from UNZA".to_string()),
        amenities: Some(vec!["Wifi".to_string()]),
        area: Some("22 sqm".to_string()),
        owner: Some(NewPropertyOwner {
            name: Some("John Mwanza".to_string()),
            phone: Some("+260977123456".to_string()),
            verified: Some(true),
        }),
        ..NewProperty::default()
    }
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL with DATABASE_URL set"]
async fn created_listing_is_fetchable_by_its_generated_id() {
    let pool = prepared_pool().await;
    let catalog = PropertyCatalog::new(pool);

    let created = catalog
        .create(lodge_payload("Round Trip Lodge"))
        .await
        .expect("create succeeds");
    assert!(!created.id.is_empty());

    let fetched = catalog
        .get(&created.id)
        .await
        .expect("get succeeds")
        .expect("listing exists");
    assert_eq!(fetched, created);

    let missing = catalog
        .get("no-such-listing")
        .await
        .expect("lookup itself succeeds");
    assert!(missing.is_none());
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL with DATABASE_URL set"]
async fn criteria_narrow_the_listing_collection() {
    let pool = prepared_pool().await;
    let catalog = PropertyCatalog::new(pool);

    let everything = catalog
        .list(&PropertyFilter::default())
        .await
        .expect("unfiltered list succeeds");
    assert!(!everything.is_empty());

    // Featured rows must lead the unfiltered collection.
    let boundary = everything
        .iter()
        .position(|p| !p.featured)
        .unwrap_or(everything.len());
    assert!(
        everything[boundary..].iter().all(|p| !p.featured),
        "featured listings must sort before unfeatured ones"
    );

    // Titles ascend within each featured group.
    for group in [&everything[..boundary], &everything[boundary..]] {
        for pair in group.windows(2) {
            assert!(
                pair[0].title.to_lowercase() <= pair[1].title.to_lowercase(),
                "titles out of order: {:?} before {:?}",
                pair[0].title,
                pair[1].title
            );
        }
    }

    let boarding = catalog
        .list(&PropertyFilter {
            listing_type: Some("boarding".to_string()),
            ..PropertyFilter::default()
        })
        .await
        .expect("filtered list succeeds");
    assert!(boarding.iter().all(|p| p.listing_type == "boarding"));
    assert!(boarding.len() <= everything.len());
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL with DATABASE_URL set"]
async fn account_view_matches_listings_by_exact_owner_name() {
    let pool = prepared_pool().await;
    let catalog = PropertyCatalog::new(pool.clone());
    let accounts = AccountService::new(pool);

    let owned = catalog
        .create(lodge_payload("Owner Match Lodge"))
        .await
        .expect("create succeeds");

    let view = accounts
        .account()
        .await
        .expect("account fetch succeeds")
        .expect("seed account exists");

    let full_name = format!("{} {}", view.profile.first_name, view.profile.last_name);
    assert_eq!(full_name, "John Mwanza");
    assert!(view.properties.iter().any(|p| p.id == owned.id));
    assert!(view.properties.iter().all(|p| p.owner.name == full_name));
    assert!(!view.billing_history.is_empty());

    // Billing history arrives newest first.
    for pair in view.billing_history.windows(2) {
        assert!(pair[0].date >= pair[1].date);
    }
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL with DATABASE_URL set"]
async fn partial_update_touches_only_the_sent_fields() {
    let pool = prepared_pool().await;
    let accounts = AccountService::new(pool);

    let before = accounts
        .account()
        .await
        .expect("account fetch succeeds")
        .expect("seed account exists")
        .profile;

    let updated = accounts
        .update(UpdateAccount {
            bio: Some("Updated through the integration suite".to_string()),
            ..UpdateAccount::default()
        })
        .await
        .expect("update succeeds")
        .expect("seed account exists");

    assert_eq!(
        updated.bio.as_deref(),
        Some("Updated through the integration suite")
    );
    assert_eq!(updated.first_name, before.first_name);
    assert_eq!(updated.email, before.email);
    assert_eq!(updated.preferences, before.preferences);

    // Restore the seeded bio so reruns start from the same state.
    accounts
        .update(UpdateAccount {
            bio: before.bio.clone().or_else(|| Some(String::new())),
            ..UpdateAccount::default()
        })
        .await
        .expect("restore succeeds");
}
