use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::StudentService;
use crate::models::students::requests::CreateStudentRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::normalize_name;

pub async fn create_student(
    service: &StudentService,
    request: &HttpRequest,
    mut student_data: CreateStudentRequest,
) -> ActixResult<HttpResponse> {
    // 验证学生姓名
    student_data.name = match normalize_name(&student_data.name) {
        Ok(name) => name,
        Err(msg) => {
            return Ok(HttpResponse::BadRequest()
                .json(ApiResponse::error(ErrorCode::StudentNameInvalid, msg)));
        }
    };

    let storage = service.get_storage(request);

    match storage.create_student(student_data).await {
        Ok(student) => {
            info!("Student {} (id {}) created", student.name, student.id);
            Ok(HttpResponse::Created().json(student))
        }
        Err(e) => {
            let msg = format!("Student creation failed: {e}");
            error!("{}", msg);
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::error(ErrorCode::StudentCreationFailed, msg)))
        }
    }
}
