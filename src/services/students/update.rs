use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::StudentService;
use crate::models::students::requests::UpdateStudentRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::normalize_name;

pub async fn update_student(
    service: &StudentService,
    request: &HttpRequest,
    student_id: i64,
    mut update_data: UpdateStudentRequest,
) -> ActixResult<HttpResponse> {
    update_data.name = match normalize_name(&update_data.name) {
        Ok(name) => name,
        Err(msg) => {
            return Ok(HttpResponse::BadRequest()
                .json(ApiResponse::error(ErrorCode::StudentNameInvalid, msg)));
        }
    };

    let storage = service.get_storage(request);

    match storage.update_student(student_id, update_data).await {
        Ok(Some(student)) => Ok(HttpResponse::Ok().json(student)),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error(
            ErrorCode::StudentNotFound,
            "Student not found",
        ))),
        Err(e) => {
            let msg = format!("Student update failed: {e}");
            error!("{}", msg);
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::error(ErrorCode::StudentUpdateFailed, msg)))
        }
    }
}
