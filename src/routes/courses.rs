use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::courses::requests::{
    CourseQueryParams, CreateCourseRequest, ReplaceCourseRequest, UpdateCourseRequest,
};
use crate::services::CourseService;
use crate::utils::SafeCourseIdI64;

// 懒加载的全局 COURSE_SERVICE 实例
static COURSE_SERVICE: Lazy<CourseService> = Lazy::new(CourseService::new_lazy);

// HTTP处理程序
pub async fn list_courses(
    req: HttpRequest,
    query: web::Query<CourseQueryParams>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.list_courses(&req, query.into_inner()).await
}

pub async fn create_course(
    req: HttpRequest,
    course_data: web::Json<CreateCourseRequest>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE
        .create_course(&req, course_data.into_inner())
        .await
}

pub async fn get_course(req: HttpRequest, course_id: SafeCourseIdI64) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.get_course(&req, course_id.0).await
}

pub async fn replace_course(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
    course_data: web::Json<ReplaceCourseRequest>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE
        .update_course(&req, course_id.0, course_data.into_inner().into())
        .await
}

pub async fn patch_course(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
    update_data: web::Json<UpdateCourseRequest>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE
        .update_course(&req, course_id.0, update_data.into_inner())
        .await
}

pub async fn delete_course(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.delete_course(&req, course_id.0).await
}

// 配置路由
pub fn configure_courses_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/courses")
            .service(
                web::resource("")
                    .route(web::get().to(list_courses))
                    .route(web::post().to(create_course)),
            )
            .service(
                web::resource("/{course_id}")
                    .route(web::get().to(get_course))
                    .route(web::put().to(replace_course))
                    .route(web::patch().to(patch_course))
                    .route(web::delete().to(delete_course)),
            ),
    );
}
