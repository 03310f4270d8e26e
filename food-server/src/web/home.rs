//! Home 页面 - 列表、详情、创建

use axum::{
    Form, Router,
    extract::{Path, State, rejection::FormRejection},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    routing::get,
};
use shared::models::RestaurantCreate;
use validator::Validate;

use crate::core::ServerState;
use crate::utils::{AppResult, validation_messages};
use crate::web::views::{HomeCreateView, HomeDetailsView, HomeIndexView, render};

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/", get(index))
        .route("/home", get(index))
        .route("/home/index", get(index))
        .route("/home/details", get(details_without_id))
        .route("/home/details/{id}", get(details))
        .route("/home/create", get(create_form).post(create))
}

fn details_path(id: i64) -> String {
    format!("/home/details/{id}")
}

/// GET / - 餐厅列表
pub async fn index(State(state): State<ServerState>) -> AppResult<Response> {
    let restaurants = state.store().get_all().await?;
    let view = HomeIndexView {
        current_message: state.greeter.message_of_the_day(),
        restaurants,
    };
    Ok(render(&view)?.into_response())
}

/// GET /home/details/:id - 不存在或 id 非整数时重定向到列表
pub async fn details(
    State(state): State<ServerState>,
    Path(raw_id): Path<String>,
) -> AppResult<Response> {
    let Ok(id) = raw_id.parse::<i64>() else {
        tracing::debug!(id = %raw_id, "Non-numeric restaurant id, redirecting to list");
        return Ok(Redirect::to("/").into_response());
    };

    match state.store().get(id).await? {
        Some(restaurant) => Ok(render(&HomeDetailsView { restaurant })?.into_response()),
        None => {
            tracing::debug!(id, "Restaurant not found, redirecting to list");
            Ok(Redirect::to("/").into_response())
        }
    }
}

/// GET /home/details
pub async fn details_without_id() -> Redirect {
    Redirect::to("/")
}

/// GET /home/create - 空表单
pub async fn create_form() -> AppResult<Response> {
    Ok(render(&HomeCreateView::empty())?.into_response())
}

/// POST /home/create
///
/// 验证失败时重新显示表单，不写入存储；成功后重定向到详情页
pub async fn create(
    State(state): State<ServerState>,
    form: Result<Form<RestaurantCreate>, FormRejection>,
) -> AppResult<Response> {
    let input = match form {
        Ok(Form(input)) => input,
        Err(rejection) => {
            tracing::debug!(error = %rejection.body_text(), "Malformed create form");
            let view = HomeCreateView::with_values(
                String::new(),
                Default::default(),
                vec!["The submitted form could not be read".to_string()],
            );
            return Ok((StatusCode::BAD_REQUEST, render(&view)?).into_response());
        }
    };

    if let Err(errors) = input.validate() {
        let view = HomeCreateView::with_values(
            input.name,
            input.cuisine,
            validation_messages(&errors),
        );
        return Ok(render(&view)?.into_response());
    }

    let restaurant = state.store().add(input).await?;
    tracing::info!(id = restaurant.id, name = %restaurant.name, "Restaurant created");

    Ok(Redirect::to(&details_path(restaurant.id)).into_response())
}
