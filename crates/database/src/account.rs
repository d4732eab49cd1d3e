use crate::error::DbError;
use crate::rows::{BillingRow, PropertyRow, UserRow};
use core_types::{AccountProfile, AccountView, BillingEntry, Property, UpdateAccount};
use sqlx::PgPool;

/// Read and update access to the single account this deployment serves.
///
/// There is no account creation or deletion here; the profile row is
/// provisioned by the seed migration and only mutated in place.
#[derive(Debug, Clone)]
pub struct AccountService {
    pool: PgPool,
}

impl AccountService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Fetches the first (and in practice only) user row.
    async fn singleton_user(&self) -> Result<Option<UserRow>, DbError> {
        let row = sqlx::query_as::<_, UserRow>("SELECT * FROM users LIMIT 1")
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    /// Assembles the composite account view: the profile, the listings it
    /// owns and its billing history, stitched together in one response.
    ///
    /// Listings are owned when their stored owner name equals the user's
    /// full name exactly, case and spacing included. The schema keeps no
    /// owner foreign key, so the name string is the only link.
    pub async fn account(&self) -> Result<Option<AccountView>, DbError> {
        let Some(user) = self.singleton_user().await? else {
            return Ok(None);
        };

        let properties = sqlx::query_as::<_, PropertyRow>(
            "SELECT * FROM properties WHERE owner_name = $1 ORDER BY title ASC",
        )
        .bind(user.full_name())
        .fetch_all(&self.pool)
        .await?;

        let billing = sqlx::query_as::<_, BillingRow>(
            "SELECT * FROM billing_transactions WHERE user_id = $1 ORDER BY date DESC",
        )
        .bind(&user.id)
        .fetch_all(&self.pool)
        .await?;

        Ok(Some(AccountView {
            profile: user.into(),
            properties: properties.into_iter().map(Property::from).collect(),
            billing_history: billing.into_iter().map(BillingEntry::from).collect(),
        }))
    }

    /// Applies a partial profile update: each present field overwrites its
    /// column, each absent field keeps the stored value. Returns the
    /// updated profile alone, without listings or billing.
    ///
    /// `Ok(None)` means no user row exists; nothing is written in that
    /// case.
    pub async fn update(&self, changes: UpdateAccount) -> Result<Option<AccountProfile>, DbError> {
        let Some(user) = self.singleton_user().await? else {
            return Ok(None);
        };

        let updated = sqlx::query_as::<_, UserRow>(
            r#"
            UPDATE users SET
                first_name = COALESCE($1, first_name),
                last_name = COALESCE($2, last_name),
                email = COALESCE($3, email),
                phone = COALESCE($4, phone),
                location = COALESCE($5, location),
                bio = COALESCE($6, bio),
                preferences = COALESCE($7, preferences)
            WHERE id = $8
            RETURNING *
            "#,
        )
        .bind(changes.first_name)
        .bind(changes.last_name)
        .bind(changes.email)
        .bind(changes.phone)
        .bind(changes.location)
        .bind(changes.bio)
        .bind(changes.preferences)
        .bind(user.id)
        .fetch_one(&self.pool)
        .await?;

        Ok(Some(updated.into()))
    }
}
