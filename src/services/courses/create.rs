use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::{CourseService, handle_course_write_error};
use crate::models::courses::requests::CreateCourseRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::normalize_name;

pub async fn create_course(
    service: &CourseService,
    request: &HttpRequest,
    mut course_data: CreateCourseRequest,
) -> ActixResult<HttpResponse> {
    // 验证课程名称
    course_data.name = match normalize_name(&course_data.name) {
        Ok(name) => name,
        Err(msg) => {
            return Ok(HttpResponse::BadRequest()
                .json(ApiResponse::error(ErrorCode::CourseNameInvalid, msg)));
        }
    };

    let storage = service.get_storage(request);

    // 创建课程，学生 ID 校验与关联写入在同一事务内完成
    match storage.create_course(course_data).await {
        Ok(course) => {
            info!(
                "Course {} (id {}) created with {} student(s)",
                course.name,
                course.id,
                course.students.len()
            );
            Ok(HttpResponse::Created().json(course))
        }
        Err(e) => Ok(handle_course_write_error(
            &e,
            "Course creation failed",
            ErrorCode::CourseCreationFailed,
        )),
    }
}
