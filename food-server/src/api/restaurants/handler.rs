//! Restaurant API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::models::{Restaurant, RestaurantCreate};
use validator::Validate;

use crate::core::ServerState;
use crate::utils::{AppError, AppResult};

/// GET /api/restaurants - 获取所有餐厅
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Restaurant>>> {
    let restaurants = state.store().get_all().await?;
    Ok(Json(restaurants))
}

/// GET /api/restaurants/:id - 获取单个餐厅
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Restaurant>> {
    let restaurant = state
        .store()
        .get(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Restaurant {}", id)))?;
    Ok(Json(restaurant))
}

/// POST /api/restaurants - 创建餐厅
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<RestaurantCreate>,
) -> AppResult<Json<Restaurant>> {
    payload.validate()?;

    let restaurant = state.store().add(payload).await?;
    tracing::info!(id = restaurant.id, name = %restaurant.name, "Restaurant created");

    Ok(Json(restaurant))
}
