use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::{CourseService, handle_course_write_error};
use crate::models::courses::requests::UpdateCourseRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::normalize_name;

pub async fn update_course(
    service: &CourseService,
    request: &HttpRequest,
    course_id: i64,
    mut update_data: UpdateCourseRequest,
) -> ActixResult<HttpResponse> {
    // 验证课程名称（如果提供）
    if let Some(ref name) = update_data.name {
        match normalize_name(name) {
            Ok(name) => update_data.name = Some(name),
            Err(msg) => {
                return Ok(HttpResponse::BadRequest()
                    .json(ApiResponse::error(ErrorCode::CourseNameInvalid, msg)));
            }
        }
    }

    let storage = service.get_storage(request);

    match storage.update_course(course_id, update_data).await {
        Ok(Some(course)) => {
            info!(
                "Course {} updated, now {} student(s)",
                course.id,
                course.students.len()
            );
            Ok(HttpResponse::Ok().json(course))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error(
            ErrorCode::CourseNotFound,
            "Course not found",
        ))),
        Err(e) => Ok(handle_course_write_error(
            &e,
            "Course update failed",
            ErrorCode::CourseUpdateFailed,
        )),
    }
}
