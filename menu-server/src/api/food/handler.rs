//! Food API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::extract::ApiJson;
use crate::core::ServerState;
use crate::db::repository::FoodRepository;
use crate::utils::validation::validate_food;
use crate::utils::{AppError, AppResult};
use shared::{FoodId, FoodInput, FoodItem};

/// 路径中的 id 必须是数字，否则视为不存在
fn parse_id(id: &str) -> AppResult<FoodId> {
    id.trim()
        .parse::<FoodId>()
        .map_err(|_| AppError::food_not_found(id))
}

/// POST /savefood - 创建菜品
pub async fn create(
    State(state): State<ServerState>,
    ApiJson(payload): ApiJson<FoodInput>,
) -> AppResult<Json<FoodItem>> {
    let fields = validate_food(payload)?;

    let repo = FoodRepository::new(state.get_db());
    let food = repo
        .create(fields)
        .await
        .map_err(|e| AppError::database(e.to_string()))?;

    tracing::info!(food_id = food.id, name = %food.name, "Food created");
    Ok(Json(food))
}

/// GET /getfood - 获取全部菜品
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<FoodItem>>> {
    let repo = FoodRepository::new(state.get_db());
    let foods = repo
        .find_all()
        .await
        .map_err(|e| AppError::database(e.to_string()))?;
    Ok(Json(foods))
}

/// GET /food/:id - 获取单个菜品
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<FoodItem>> {
    let food_id = parse_id(&id)?;

    let repo = FoodRepository::new(state.get_db());
    let food = repo
        .find_by_id(food_id)
        .await
        .map_err(|e| AppError::database(e.to_string()))?
        .ok_or_else(|| AppError::food_not_found(food_id))?;
    Ok(Json(food))
}

/// PUT /food/:id - 全量替换菜品
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    ApiJson(payload): ApiJson<FoodInput>,
) -> AppResult<Json<FoodItem>> {
    let food_id = parse_id(&id)?;
    let fields = validate_food(payload)?;

    let repo = FoodRepository::new(state.get_db());
    let food = repo
        .update(food_id, fields)
        .await
        .map_err(|e| AppError::database(e.to_string()))?
        .ok_or_else(|| AppError::food_not_found(food_id))?;

    tracing::info!(food_id, name = %food.name, "Food updated");
    Ok(Json(food))
}

/// DELETE /food/:id - 删除菜品 (硬删除)
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    let food_id = parse_id(&id)?;

    let repo = FoodRepository::new(state.get_db());
    let deleted = repo
        .delete(food_id)
        .await
        .map_err(|e| AppError::database(e.to_string()))?;
    if !deleted {
        return Err(AppError::food_not_found(food_id));
    }

    tracing::info!(food_id, "Food deleted");
    Ok(Json(true))
}
