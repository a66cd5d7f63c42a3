pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::students::requests::{
    CreateStudentRequest, StudentQueryParams, UpdateStudentRequest,
};
use crate::storage::Storage;

pub struct StudentService {
    storage: Option<Arc<dyn Storage>>,
}

impl StudentService {
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

    pub async fn list_students(
        &self,
        request: &HttpRequest,
        query: StudentQueryParams,
    ) -> ActixResult<HttpResponse> {
        list::list_students(self, request, query).await
    }

    pub async fn get_student(
        &self,
        req: &HttpRequest,
        student_id: i64,
    ) -> ActixResult<HttpResponse> {
        get::get_student(self, req, student_id).await
    }

    pub async fn create_student(
        &self,
        req: &HttpRequest,
        student_data: CreateStudentRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_student(self, req, student_data).await
    }

    pub async fn update_student(
        &self,
        req: &HttpRequest,
        student_id: i64,
        update_data: UpdateStudentRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_student(self, req, student_id, update_data).await
    }

    pub async fn delete_student(
        &self,
        req: &HttpRequest,
        student_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_student(self, req, student_id).await
    }
}
