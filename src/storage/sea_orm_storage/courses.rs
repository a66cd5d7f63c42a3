//! 课程存储操作

use super::SeaOrmStorage;
use super::course_students::{ensure_students_exist, load_memberships, replace_memberships};
use crate::entity::course_students::{Column as CourseStudentColumn, Entity as CourseStudents};
use crate::entity::courses::{ActiveModel, Column, Entity as Courses};
use crate::errors::{RegistryError, Result};
use crate::models::courses::{
    entities::Course,
    requests::{CourseQueryParams, CreateCourseRequest, UpdateCourseRequest, dedup_student_ids},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};

impl SeaOrmStorage {
    /// 创建课程
    pub async fn create_course_impl(&self, req: CreateCourseRequest) -> Result<Course> {
        let student_ids = dedup_student_ids(req.students);

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| RegistryError::database_operation(format!("开启事务失败: {e}")))?;

        ensure_students_exist(&txn, &student_ids).await?;

        let model = ActiveModel {
            name: Set(req.name),
            ..Default::default()
        };

        let result = model
            .insert(&txn)
            .await
            .map_err(|e| RegistryError::database_operation(format!("创建课程失败: {e}")))?;

        replace_memberships(&txn, result.id, &student_ids).await?;

        txn.commit()
            .await
            .map_err(|e| RegistryError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(result.into_course(student_ids))
    }

    /// 通过 ID 获取课程
    pub async fn get_course_by_id_impl(&self, course_id: i64) -> Result<Option<Course>> {
        find_course(&self.db, course_id).await
    }

    /// 按条件列出课程
    pub async fn list_courses_impl(&self, query: CourseQueryParams) -> Result<Vec<Course>> {
        let mut select = Courses::find();

        // ID 精确匹配
        if let Some(id) = query.id {
            select = select.filter(Column::Id.eq(id));
        }

        // 名称精确匹配
        if let Some(ref name) = query.name {
            select = select.filter(Column::Name.eq(name.as_str()));
        }

        let courses = select
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| RegistryError::database_operation(format!("查询课程列表失败: {e}")))?;

        let course_ids: Vec<i64> = courses.iter().map(|m| m.id).collect();
        let mut memberships = load_memberships(&self.db, &course_ids).await?;

        Ok(courses
            .into_iter()
            .map(|m| {
                let students = memberships.remove(&m.id).unwrap_or_default();
                m.into_course(students)
            })
            .collect())
    }

    /// 更新课程信息
    pub async fn update_course_impl(
        &self,
        course_id: i64,
        update: UpdateCourseRequest,
    ) -> Result<Option<Course>> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| RegistryError::database_operation(format!("开启事务失败: {e}")))?;

        // 先检查课程是否存在
        let existing = Courses::find_by_id(course_id)
            .one(&txn)
            .await
            .map_err(|e| RegistryError::database_operation(format!("查询课程失败: {e}")))?;
        if existing.is_none() {
            return Ok(None);
        }

        if let Some(name) = update.name {
            let model = ActiveModel {
                id: Set(course_id),
                name: Set(name),
            };

            model
                .update(&txn)
                .await
                .map_err(|e| RegistryError::database_operation(format!("更新课程失败: {e}")))?;
        }

        // 学生集合整体替换而非合并
        if let Some(students) = update.students {
            let student_ids = dedup_student_ids(students);
            ensure_students_exist(&txn, &student_ids).await?;
            replace_memberships(&txn, course_id, &student_ids).await?;
        }

        let course = find_course(&txn, course_id).await?;

        txn.commit()
            .await
            .map_err(|e| RegistryError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(course)
    }

    /// 删除课程
    pub async fn delete_course_impl(&self, course_id: i64) -> Result<bool> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| RegistryError::database_operation(format!("开启事务失败: {e}")))?;

        CourseStudents::delete_many()
            .filter(CourseStudentColumn::CourseId.eq(course_id))
            .exec(&txn)
            .await
            .map_err(|e| RegistryError::database_operation(format!("清除选课关系失败: {e}")))?;

        let result = Courses::delete_by_id(course_id)
            .exec(&txn)
            .await
            .map_err(|e| RegistryError::database_operation(format!("删除课程失败: {e}")))?;

        txn.commit()
            .await
            .map_err(|e| RegistryError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 统计课程数量
    pub async fn count_courses_impl(&self) -> Result<u64> {
        Courses::find()
            .count(&self.db)
            .await
            .map_err(|e| RegistryError::database_operation(format!("查询课程总数失败: {e}")))
    }
}

/// 读取单个课程及其学生
async fn find_course<C>(conn: &C, course_id: i64) -> Result<Option<Course>>
where
    C: ConnectionTrait,
{
    let model = Courses::find_by_id(course_id)
        .one(conn)
        .await
        .map_err(|e| RegistryError::database_operation(format!("查询课程失败: {e}")))?;

    let Some(model) = model else {
        return Ok(None);
    };

    let students = load_memberships(conn, &[model.id])
        .await?
        .remove(&model.id)
        .unwrap_or_default();

    Ok(Some(model.into_course(students)))
}
