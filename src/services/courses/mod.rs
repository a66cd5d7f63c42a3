pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;
use tracing::error;

use crate::errors::RegistryError;
use crate::models::courses::requests::{
    CourseQueryParams, CreateCourseRequest, UpdateCourseRequest,
};
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;

pub struct CourseService {
    storage: Option<Arc<dyn Storage>>,
}

impl CourseService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 获取课程列表
    pub async fn list_courses(
        &self,
        request: &HttpRequest,
        query: CourseQueryParams,
    ) -> ActixResult<HttpResponse> {
        list::list_courses(self, request, query).await
    }

    // 根据课程 ID 获取课程信息
    pub async fn get_course(&self, req: &HttpRequest, course_id: i64) -> ActixResult<HttpResponse> {
        get::get_course(self, req, course_id).await
    }

    pub async fn create_course(
        &self,
        req: &HttpRequest,
        course_data: CreateCourseRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_course(self, req, course_data).await
    }

    // 更新课程信息（PUT 与 PATCH 共用）
    pub async fn update_course(
        &self,
        req: &HttpRequest,
        course_id: i64,
        update_data: UpdateCourseRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_course(self, req, course_id, update_data).await
    }

    // 根据课程 ID 删除课程
    pub async fn delete_course(
        &self,
        req: &HttpRequest,
        course_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_course(self, req, course_id).await
    }
}

/// 写操作错误响应辅助函数
///
/// 学生 ID 校验失败返回 400，其余存储错误返回 500
fn handle_course_write_error(e: &RegistryError, action: &str, code: ErrorCode) -> HttpResponse {
    if e.is_validation() {
        return HttpResponse::BadRequest().json(ApiResponse::error(
            ErrorCode::CourseStudentInvalid,
            e.message(),
        ));
    }

    let msg = format!("{action}: {e}");
    error!("{}", msg);
    HttpResponse::InternalServerError().json(ApiResponse::error(code, msg))
}
