use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use super::application::{BurgerResponse, CreateBurgerRequest, UpdateBurgerRequest};
use crate::routes::extract::{AppJson, AppPath};
use crate::shared::errors::AppResult;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/burgers", get(list_burgers).post(create_burger))
        .route(
            "/burgers/{id}",
            get(get_burger).put(update_burger).delete(delete_burger),
        )
        .route(
            "/burgers/{id}/toppings/{topping_id}",
            post(add_topping).delete(remove_topping),
        )
}

pub async fn list_burgers(State(state): State<AppState>) -> AppResult<Json<Vec<BurgerResponse>>> {
    let burgers = state.burgers.list().await?;
    Ok(Json(burgers.into_iter().map(BurgerResponse::from).collect()))
}

pub async fn get_burger(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> AppResult<Json<BurgerResponse>> {
    let burger = state.burgers.get(id).await?;
    Ok(Json(burger.into()))
}

pub async fn create_burger(
    State(state): State<AppState>,
    AppJson(request): AppJson<CreateBurgerRequest>,
) -> AppResult<impl IntoResponse> {
    let burger = state.burgers.create(request).await?;

    let location = format!("/burgers/{}", burger.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(BurgerResponse::from(burger)),
    ))
}

pub async fn update_burger(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
    AppJson(request): AppJson<UpdateBurgerRequest>,
) -> AppResult<StatusCode> {
    state.burgers.update(id, request).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_burger(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> AppResult<StatusCode> {
    state.burgers.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn add_topping(
    State(state): State<AppState>,
    AppPath((id, topping_id)): AppPath<(i32, i32)>,
) -> AppResult<StatusCode> {
    state.burgers.add_topping(id, topping_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn remove_topping(
    State(state): State<AppState>,
    AppPath((id, topping_id)): AppPath<(i32, i32)>,
) -> AppResult<StatusCode> {
    state.burgers.remove_topping(id, topping_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
