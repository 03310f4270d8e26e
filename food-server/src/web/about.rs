//! About 页面 (纯文本)

use axum::{Router, routing::get};

use crate::core::ServerState;

pub const PHONE: &str = "1+555+555-5555";
pub const ADDRESS: &str = "USA";

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/about", get(phone))
        .route("/about/phone", get(phone))
        .route("/about/address", get(address))
}

/// GET /about
pub async fn phone() -> &'static str {
    PHONE
}

/// GET /about/address
pub async fn address() -> &'static str {
    ADDRESS
}
