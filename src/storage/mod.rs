use std::sync::Arc;

use crate::models::{
    courses::{
        entities::Course,
        requests::{CourseQueryParams, CreateCourseRequest, UpdateCourseRequest},
    },
    students::{
        entities::Student,
        requests::{CreateStudentRequest, StudentQueryParams, UpdateStudentRequest},
    },
};

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 课程管理方法
    // 按条件列出课程（id、name 精确匹配，取交集）
    async fn list_courses(&self, query: CourseQueryParams) -> Result<Vec<Course>>;
    // 通过ID获取课程信息
    async fn get_course_by_id(&self, course_id: i64) -> Result<Option<Course>>;
    // 创建课程，学生ID全部存在时才会写入
    async fn create_course(&self, course: CreateCourseRequest) -> Result<Course>;
    // 更新课程信息，提供 students 时整体替换学生集合
    async fn update_course(
        &self,
        course_id: i64,
        update: UpdateCourseRequest,
    ) -> Result<Option<Course>>;
    // 删除课程及其选课关系
    async fn delete_course(&self, course_id: i64) -> Result<bool>;
    // 统计课程数量
    async fn count_courses(&self) -> Result<u64>;

    /// 学生管理方法
    // 按条件列出学生
    async fn list_students(&self, query: StudentQueryParams) -> Result<Vec<Student>>;
    // 通过ID获取学生信息
    async fn get_student_by_id(&self, student_id: i64) -> Result<Option<Student>>;
    // 创建学生
    async fn create_student(&self, student: CreateStudentRequest) -> Result<Student>;
    // 更新学生信息
    async fn update_student(
        &self,
        student_id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>>;
    // 删除学生，并从所有课程中移除
    async fn delete_student(&self, student_id: i64) -> Result<bool>;
    // 统计学生数量
    async fn count_students(&self) -> Result<u64>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
