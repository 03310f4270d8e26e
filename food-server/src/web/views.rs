//! 页面视图模型
//!
//! 每个结构体只携带对应模板需要的数据，模板位于 `templates/`。

use askama::Template;
use axum::response::Html;
use shared::models::{CuisineType, Restaurant};

use crate::utils::AppResult;

/// Render a template into an HTML response
pub fn render<T: Template>(view: &T) -> AppResult<Html<String>> {
    Ok(Html(view.render()?))
}

/// GET / - 餐厅列表
#[derive(Template)]
#[template(path = "home/index.html")]
pub struct HomeIndexView {
    pub current_message: String,
    pub restaurants: Vec<Restaurant>,
}

/// GET /home/details/{id}
#[derive(Template)]
#[template(path = "home/details.html")]
pub struct HomeDetailsView {
    pub restaurant: Restaurant,
}

/// Drop-down entry for the cuisine selector
pub struct CuisineOption {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

/// GET/POST /home/create
#[derive(Template)]
#[template(path = "home/create.html")]
pub struct HomeCreateView {
    pub name: String,
    pub cuisines: Vec<CuisineOption>,
    pub errors: Vec<String>,
}

impl HomeCreateView {
    pub fn empty() -> Self {
        Self::with_values(String::new(), CuisineType::default(), Vec::new())
    }

    /// Re-display with the submitted values and validation messages
    pub fn with_values(name: String, cuisine: CuisineType, errors: Vec<String>) -> Self {
        let cuisines = CuisineType::ALL
            .iter()
            .map(|c| CuisineOption {
                value: c.as_str(),
                label: c.label(),
                selected: *c == cuisine,
            })
            .collect();
        Self {
            name,
            cuisines,
            errors,
        }
    }
}

/// GET /greeting
#[derive(Template)]
#[template(path = "greeting.html")]
pub struct GreetingView {
    pub current_greeting: String,
    pub name: String,
}
