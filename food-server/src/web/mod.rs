//! HTML 页面路由
//!
//! 约定路由 `{controller=Home}/{action=Index}/{id?}`：
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /, /home, /home/index | GET | 餐厅列表 |
//! | /home/details/{id} | GET | 餐厅详情，不存在则重定向到列表 |
//! | /home/create | GET, POST | 创建表单 |
//! | /about, /about/address | GET | 联系方式 (纯文本) |
//! | /greeting | GET | 问候页 |

pub mod about;
pub mod greeting;
pub mod home;
pub mod views;

use axum::http::StatusCode;
use axum::response::IntoResponse;

/// Fallback for unmatched routes
pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "Not found")
}
