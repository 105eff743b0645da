use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::api::body::decode_json;
use crate::api::errors::ApiError;
use crate::api::state::AppState;
use crate::domain::customer::{Customer, CustomerFields};

/// List all customers
///
/// GET /customers
pub async fn list_customers(
    State(state): State<AppState>,
) -> Result<Json<Vec<Customer>>, ApiError> {
    let customers = state.customers.list().await?;

    Ok(Json(customers))
}

/// Get a customer by ID
///
/// GET /customers/:id
pub async fn get_customer(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Customer>, ApiError> {
    let customer = state
        .customers
        .find_by_id(&id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Customer not found: {}", id)))?;

    Ok(Json(customer))
}

/// Create a customer
///
/// POST /customers
pub async fn create_customer(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Customer>), ApiError> {
    let fields: CustomerFields = decode_json(&body)?;

    let customer = state.customers.create(fields).await?;
    tracing::info!(customer_id = %customer.id, "Customer created");

    Ok((StatusCode::CREATED, Json(customer)))
}

/// Replace a customer's name, phone and email
///
/// PUT /customers/:id
pub async fn update_customer(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<Customer>, ApiError> {
    let fields: CustomerFields = decode_json(&body)?;

    let customer = state.customers.update(&id, fields).await?;
    tracing::info!(customer_id = %id, "Customer updated");

    Ok(Json(customer))
}

/// Delete a customer, returning the customers that remain
///
/// DELETE /customers/:id
pub async fn delete_customer(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Customer>>, ApiError> {
    state.customers.delete(&id).await?;
    tracing::info!(customer_id = %id, "Customer deleted");

    let remaining = state.customers.list().await?;

    Ok(Json(remaining))
}
