use crate::{error::AppError, AppState};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use core_types::{
    AccountProfile, AccountView, NewProperty, Property, PropertyFilter, UpdateAccount,
};
use database::CreateError;
use std::sync::Arc;

/// # GET /api/properties
/// Lists listings matching the optional `type`, `category` and
/// `featured=true` query criteria, featured first, then by title.
pub async fn list_properties(
    State(state): State<Arc<AppState>>,
    Query(criteria): Query<PropertyFilter>,
) -> Result<Json<Vec<Property>>, AppError> {
    let properties = state
        .catalog
        .list(&criteria)
        .await
        .map_err(|e| AppError::storage("Failed to fetch properties", e))?;
    Ok(Json(properties))
}

/// # GET /api/properties/:id
pub async fn get_property(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<Property>, AppError> {
    let property = state
        .catalog
        .get(&id)
        .await
        .map_err(|e| AppError::storage("Failed to fetch property", e))?
        .ok_or_else(|| AppError::not_found("Property not found"))?;
    Ok(Json(property))
}

/// # POST /api/properties
/// Validates and stores a new listing. The 201 body is the listing as
/// persisted: generated id and storage defaults included.
pub async fn create_property(
    State(state): State<Arc<AppState>>,
    payload: Option<Json<NewProperty>>,
) -> Result<(StatusCode, Json<Property>), AppError> {
    // A missing or unreadable body counts as an empty payload, which the
    // required-field check rejects with the same 400 as any other gap.
    let payload = payload.map(|Json(p)| p).unwrap_or_default();

    let created = state.catalog.create(payload).await.map_err(|e| match e {
        CreateError::Validation(v) => AppError::validation(v.to_string()),
        CreateError::Db(db) => AppError::storage("Failed to create property", db),
    })?;

    Ok((StatusCode::CREATED, Json(created)))
}

/// # GET /api/account
/// The composite account view: profile fields at the top level, with the
/// owned listings and billing history alongside.
pub async fn get_account(
    State(state): State<Arc<AppState>>,
) -> Result<Json<AccountView>, AppError> {
    let view = state
        .accounts
        .account()
        .await
        .map_err(|e| AppError::storage("Failed to fetch account", e))?
        .ok_or_else(|| AppError::not_found("Account not found"))?;
    Ok(Json(view))
}

/// # PUT /api/account
/// Partial profile update: present fields overwrite, absent fields keep
/// their stored values. Responds with the updated profile alone.
pub async fn update_account(
    State(state): State<Arc<AppState>>,
    payload: Option<Json<UpdateAccount>>,
) -> Result<Json<AccountProfile>, AppError> {
    let changes = payload.map(|Json(c)| c).unwrap_or_default();

    let profile = state
        .accounts
        .update(changes)
        .await
        .map_err(|e| AppError::storage("Failed to update account", e))?
        .ok_or_else(|| AppError::not_found("Account not found"))?;
    Ok(Json(profile))
}
