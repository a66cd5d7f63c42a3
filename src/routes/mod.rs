pub mod courses;

pub mod students;

pub use courses::configure_courses_routes;
pub use students::configure_students_routes;

use actix_web::{HttpResponse, web};

use crate::models::{ApiResponse, ErrorCode};

// 未匹配任何路由时的统一 404 响应
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ApiResponse::error(ErrorCode::NotFound, "Resource not found"))
}

// 配置所有 API 路由
pub fn configure_api_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(configure_courses_routes) // 配置课程相关路由
        .configure(configure_students_routes); // 配置学生相关路由
}
