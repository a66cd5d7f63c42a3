use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::students::requests::{
    CreateStudentRequest, StudentQueryParams, UpdateStudentRequest,
};
use crate::services::StudentService;
use crate::utils::SafeStudentIdI64;

// 懒加载的全局 STUDENT_SERVICE 实例
static STUDENT_SERVICE: Lazy<StudentService> = Lazy::new(StudentService::new_lazy);

// HTTP处理程序
pub async fn list_students(
    req: HttpRequest,
    query: web::Query<StudentQueryParams>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.list_students(&req, query.into_inner()).await
}

pub async fn create_student(
    req: HttpRequest,
    student_data: web::Json<CreateStudentRequest>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE
        .create_student(&req, student_data.into_inner())
        .await
}

pub async fn get_student(
    req: HttpRequest,
    student_id: SafeStudentIdI64,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.get_student(&req, student_id.0).await
}

pub async fn update_student(
    req: HttpRequest,
    student_id: SafeStudentIdI64,
    update_data: web::Json<UpdateStudentRequest>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE
        .update_student(&req, student_id.0, update_data.into_inner())
        .await
}

pub async fn delete_student(
    req: HttpRequest,
    student_id: SafeStudentIdI64,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.delete_student(&req, student_id.0).await
}

// 配置路由
pub fn configure_students_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/students")
            .service(
                web::resource("")
                    .route(web::get().to(list_students))
                    .route(web::post().to(create_student)),
            )
            .service(
                web::resource("/{student_id}")
                    .route(web::get().to(get_student))
                    .route(web::put().to(update_student))
                    .route(web::delete().to(delete_student)),
            ),
    );
}
