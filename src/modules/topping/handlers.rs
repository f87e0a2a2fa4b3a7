use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use super::application::{
    CreateToppingRequest, ListToppingsQuery, ToppingResponse, UpdateToppingRequest,
};
use crate::routes::extract::{AppJson, AppPath, AppQuery};
use crate::shared::errors::AppResult;
use crate::state::AppState;
use crate::log_debug;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/toppings", get(list_toppings).post(create_topping))
        .route(
            "/toppings/{id}",
            get(get_topping).put(update_topping).delete(delete_topping),
        )
}

pub async fn list_toppings(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<ListToppingsQuery>,
) -> AppResult<Json<Vec<ToppingResponse>>> {
    let toppings = state.toppings.list(query.active_only).await?;
    Ok(Json(toppings.into_iter().map(ToppingResponse::from).collect()))
}

pub async fn get_topping(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> AppResult<Json<ToppingResponse>> {
    log_debug!("Fetching topping {}", id);
    let topping = state.toppings.get(id).await?;
    Ok(Json(topping.into()))
}

pub async fn create_topping(
    State(state): State<AppState>,
    AppJson(request): AppJson<CreateToppingRequest>,
) -> AppResult<impl IntoResponse> {
    let topping = state.toppings.create(request).await?;

    let location = format!("/toppings/{}", topping.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(ToppingResponse::from(topping)),
    ))
}

pub async fn update_topping(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
    AppJson(request): AppJson<UpdateToppingRequest>,
) -> AppResult<StatusCode> {
    state.toppings.update(id, request).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_topping(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> AppResult<StatusCode> {
    state.toppings.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
