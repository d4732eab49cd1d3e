use crate::error::{CreateError, DbError};
use crate::filter::QueryFilter;
use crate::rows::PropertyRow;
use core_types::{NewProperty, Property, PropertyFilter};
use sqlx::PgPool;
use uuid::Uuid;

/// Listing search, lookup and creation over the `properties` table.
///
/// The catalog owns no state beyond a handle to the shared connection pool,
/// so it is cheap to clone into handler state.
#[derive(Debug, Clone)]
pub struct PropertyCatalog {
    pool: PgPool,
}

impl PropertyCatalog {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Lists properties matching the AND of all supplied criteria; absent
    /// criteria restrict nothing, so no criteria returns every listing.
    ///
    /// The ordering is fixed: featured listings first, then title
    /// ascending. Callers cannot influence it.
    pub async fn list(&self, criteria: &PropertyFilter) -> Result<Vec<Property>, DbError> {
        let (sql, filter) = list_query(criteria);

        let mut query = sqlx::query_as::<_, PropertyRow>(&sql);
        for bind in filter.binds() {
            query = query.bind(bind);
        }

        let rows = query.fetch_all(&self.pool).await?;
        Ok(rows.into_iter().map(Property::from).collect())
    }

    /// Looks up a single property by its identifier. `Ok(None)` means the
    /// id matched nothing, which is distinct from a query failure.
    pub async fn get(&self, id: &str) -> Result<Option<Property>, DbError> {
        let row = sqlx::query_as::<_, PropertyRow>("SELECT * FROM properties WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(Property::from))
    }

    /// Validates and persists a new listing, returning it as stored.
    ///
    /// Validation runs before any storage access. The returned shape is
    /// mapped from the row the database sent back, generated id and
    /// storage defaults included, not from the caller's input.
    pub async fn create(&self, payload: NewProperty) -> Result<Property, CreateError> {
        payload.validate()?;

        let row = PropertyRow::from_new(Uuid::new_v4().to_string(), payload);

        let stored = sqlx::query_as::<_, PropertyRow>(
            r#"
            INSERT INTO properties (
                id, title, price_text, price_type, location, type, category,
                bedrooms, bathrooms, bedspaces, available_bedspaces,
                distance_from_uni, amenities, area, image_url,
                verified, featured, owner_name, owner_phone, owner_verified
            ) VALUES (
                $1, $2, $3, $4, $5, $6, $7,
                $8, $9, $10, $11,
                $12, $13, $14, $15,
                $16, $17, $18, $19, $20
            )
            RETURNING *
            "#,
        )
        .bind(row.id)
        .bind(row.title)
        .bind(row.price_text)
        .bind(row.price_type)
        .bind(row.location)
        .bind(row.listing_type)
        .bind(row.category)
        .bind(row.bedrooms)
        .bind(row.bathrooms)
        .bind(row.bedspaces)
        .bind(row.available_bedspaces)
        .bind(row.distance_from_uni)
        .bind(row.amenities)
        .bind(row.area)
        .bind(row.image_url)
        .bind(row.verified)
        .bind(row.featured)
        .bind(row.owner_name)
        .bind(row.owner_phone)
        .bind(row.owner_verified)
        .fetch_one(&self.pool)
        .await?;

        Ok(stored.into())
    }
}

/// Assembles the list SELECT: criteria clauses first, then the ordering
/// suffix every listing query shares.
fn list_query(criteria: &PropertyFilter) -> (String, QueryFilter) {
    let filter = QueryFilter::new()
        .eq("type", criteria.listing_type.as_deref())
        .eq("category", criteria.category.as_deref())
        .flag("featured = true", criteria.featured_only());

    let sql = format!(
        "SELECT * FROM properties {} ORDER BY featured DESC, title ASC",
        filter.where_clause()
    );

    (sql, filter)
}
