use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::StudentService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn delete_student(
    service: &StudentService,
    request: &HttpRequest,
    student_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 学生的选课关系随学生一并移除，课程本身不受影响
    match storage.delete_student(student_id).await {
        Ok(true) => {
            info!("Student {} deleted", student_id);
            Ok(HttpResponse::NoContent().finish())
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error(
            ErrorCode::StudentNotFound,
            "Student not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error(
                ErrorCode::StudentDeleteFailed,
                format!("Student deletion failed: {e}"),
            )),
        ),
    }
}
