use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::CourseService;
use crate::models::{ApiResponse, ErrorCode, courses::requests::CourseQueryParams};

pub async fn list_courses(
    service: &CourseService,
    request: &HttpRequest,
    query: CourseQueryParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_courses(query).await {
        Ok(courses) => Ok(HttpResponse::Ok().json(courses)),
        Err(e) => {
            error!("Failed to retrieve course list: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error(
                    ErrorCode::InternalServerError,
                    format!("Failed to retrieve course list: {e}"),
                )),
            )
        }
    }
}
