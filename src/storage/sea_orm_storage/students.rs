//! 学生存储操作

use super::SeaOrmStorage;
use super::course_students::remove_student_memberships;
use crate::entity::students::{ActiveModel, Column, Entity as Students};
use crate::errors::{RegistryError, Result};
use crate::models::students::{
    entities::Student,
    requests::{CreateStudentRequest, StudentQueryParams, UpdateStudentRequest},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};
use tracing::debug;

impl SeaOrmStorage {
    /// 创建学生
    pub async fn create_student_impl(&self, req: CreateStudentRequest) -> Result<Student> {
        let model = ActiveModel {
            name: Set(req.name),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| RegistryError::database_operation(format!("创建学生失败: {e}")))?;

        Ok(result.into_student())
    }

    /// 通过 ID 获取学生
    pub async fn get_student_by_id_impl(&self, student_id: i64) -> Result<Option<Student>> {
        let result = Students::find_by_id(student_id)
            .one(&self.db)
            .await
            .map_err(|e| RegistryError::database_operation(format!("查询学生失败: {e}")))?;

        Ok(result.map(|m| m.into_student()))
    }

    /// 按条件列出学生
    pub async fn list_students_impl(&self, query: StudentQueryParams) -> Result<Vec<Student>> {
        let mut select = Students::find();

        if let Some(id) = query.id {
            select = select.filter(Column::Id.eq(id));
        }

        if let Some(ref name) = query.name {
            select = select.filter(Column::Name.eq(name.as_str()));
        }

        let students = select
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| RegistryError::database_operation(format!("查询学生列表失败: {e}")))?;

        Ok(students.into_iter().map(|m| m.into_student()).collect())
    }

    /// 更新学生信息
    pub async fn update_student_impl(
        &self,
        student_id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>> {
        // 先检查学生是否存在
        let existing = self.get_student_by_id_impl(student_id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let model = ActiveModel {
            id: Set(student_id),
            name: Set(update.name),
        };

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| RegistryError::database_operation(format!("更新学生失败: {e}")))?;

        Ok(Some(result.into_student()))
    }

    /// 删除学生，同时移除其选课关系
    pub async fn delete_student_impl(&self, student_id: i64) -> Result<bool> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| RegistryError::database_operation(format!("开启事务失败: {e}")))?;

        let removed = remove_student_memberships(&txn, student_id).await?;

        let result = Students::delete_by_id(student_id)
            .exec(&txn)
            .await
            .map_err(|e| RegistryError::database_operation(format!("删除学生失败: {e}")))?;

        txn.commit()
            .await
            .map_err(|e| RegistryError::database_operation(format!("提交事务失败: {e}")))?;

        debug!(
            "Student {} deleted, {} course membership(s) removed",
            student_id, removed
        );

        Ok(result.rows_affected > 0)
    }

    /// 统计学生数量
    pub async fn count_students_impl(&self) -> Result<u64> {
        Students::find()
            .count(&self.db)
            .await
            .map_err(|e| RegistryError::database_operation(format!("查询学生总数失败: {e}")))
    }
}
