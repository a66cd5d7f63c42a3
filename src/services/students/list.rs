use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::StudentService;
use crate::models::{ApiResponse, ErrorCode, students::requests::StudentQueryParams};

pub async fn list_students(
    service: &StudentService,
    request: &HttpRequest,
    query: StudentQueryParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_students(query).await {
        Ok(students) => Ok(HttpResponse::Ok().json(students)),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve student list: {e}"),
            )),
        ),
    }
}
