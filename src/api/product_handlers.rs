use axum::body::Bytes;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post, put};
use axum::{Json, Router};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::{parse_payload, ApiError, AppState};
use crate::domain::Product;
use crate::error::ProductError;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/products", post(create_product))
        .route("/api/products/available", get(get_available_products))
        .route("/api/products/calculate-total-value", post(calculate_total_value))
        .route("/api/products/category/:category", get(get_products_by_category))
        .route("/api/products/:id", get(get_product))
        .route("/api/products/:id/discount", put(apply_discount))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApplyDiscountRequest {
    discount_percentage: Decimal,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TotalValueResponse {
    total_value: Decimal,
    product_count: usize,
}

async fn get_product(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Product>, ApiError> {
    state
        .products
        .get_by_id(&id)
        .await?
        .map(Json)
        .ok_or_else(|| ProductError::NotFound(id).into())
}

async fn get_available_products(State(state): State<AppState>) -> Result<Json<Vec<Product>>, ApiError> {
    Ok(Json(state.products.get_available().await?))
}

async fn get_products_by_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Result<Json<Vec<Product>>, ApiError> {
    Ok(Json(state.products.get_by_category(&category).await?))
}

async fn create_product(State(state): State<AppState>, body: Bytes) -> Result<impl IntoResponse, ApiError> {
    let product = parse_payload::<Product>(&body)?.ok_or(ProductError::MissingPayload)?;

    let created = state.products.create(product).await?;
    let location = format!("/api/products/{}", created.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(created)))
}

async fn apply_discount(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<ApplyDiscountRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = payload.map_err(|rejection| ApiError::Validation(rejection.body_text()))?;

    if !state.products.apply_discount(&id, request.discount_percentage).await? {
        return Err(ApiError::NotFound(format!(
            "Product with ID {id} not found or discount percentage is invalid"
        )));
    }
    Ok(Json(json!({ "message": "Discount applied successfully" })))
}

/// Looks up each id, skipping unknown ones, and totals the in-stock value.
async fn calculate_total_value(
    State(state): State<AppState>,
    payload: Result<Json<Vec<String>>, JsonRejection>,
) -> Result<Json<TotalValueResponse>, ApiError> {
    let Json(ids) = payload.map_err(|rejection| ApiError::Validation(rejection.body_text()))?;

    let mut products = Vec::with_capacity(ids.len());
    for id in &ids {
        if let Some(product) = state.products.get_by_id(id).await? {
            products.push(product);
        }
    }

    Ok(Json(TotalValueResponse {
        total_value: state.products.calculate_total_value(&products)?,
        product_count: products.len(),
    }))
}
