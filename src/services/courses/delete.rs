use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::CourseService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn delete_course(
    service: &CourseService,
    request: &HttpRequest,
    course_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_course(course_id).await {
        Ok(true) => {
            info!("Course {} deleted", course_id);
            Ok(HttpResponse::NoContent().finish())
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error(
            ErrorCode::CourseNotFound,
            "Course not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error(
                ErrorCode::CourseDeleteFailed,
                format!("Course deletion failed: {e}"),
            )),
        ),
    }
}
