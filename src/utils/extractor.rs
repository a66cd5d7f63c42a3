//! 路径参数提取器
//!
//! 将路径中的资源 ID 解析为正整数，解析失败时按资源不存在处理（404）。

use actix_web::{FromRequest, HttpRequest, HttpResponse, dev::Payload, error::InternalError};
use futures_util::future::{Ready, ready};

use crate::models::{ApiResponse, ErrorCode};

/// 从路由匹配信息中解析正整数 ID
fn parse_path_id(req: &HttpRequest, param: &str) -> Option<i64> {
    req.match_info()
        .get(param)
        .and_then(|raw| raw.parse::<i64>().ok())
        .filter(|id| *id > 0)
}

fn not_found_error(code: ErrorCode, message: &'static str) -> actix_web::Error {
    InternalError::from_response(
        message,
        HttpResponse::NotFound().json(ApiResponse::error(code, message)),
    )
    .into()
}

macro_rules! define_safe_id_extractor {
    ($name:ident, $param:literal, $code:expr, $message:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub struct $name(pub i64);

        impl FromRequest for $name {
            type Error = actix_web::Error;
            type Future = Ready<Result<Self, Self::Error>>;

            fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
                ready(
                    parse_path_id(req, $param)
                        .map($name)
                        .ok_or_else(|| not_found_error($code, $message)),
                )
            }
        }
    };
}

define_safe_id_extractor!(
    SafeCourseIdI64,
    "course_id",
    ErrorCode::CourseNotFound,
    "Course not found"
);
define_safe_id_extractor!(
    SafeStudentIdI64,
    "student_id",
    ErrorCode::StudentNotFound,
    "Student not found"
);
