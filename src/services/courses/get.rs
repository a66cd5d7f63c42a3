use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::CourseService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn get_course(
    service: &CourseService,
    request: &HttpRequest,
    course_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_course_by_id(course_id).await {
        Ok(Some(course)) => Ok(HttpResponse::Ok().json(course)),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error(
            ErrorCode::CourseNotFound,
            "Course not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error(
                ErrorCode::InternalServerError,
                format!("Failed to get course information: {e}"),
            )),
        ),
    }
}
