//! 课程学生关联存储操作
//!
//! 这些函数接受任意 `ConnectionTrait`，可在事务内或直接在连接池上调用。

use std::collections::{HashMap, HashSet};

use crate::entity::course_students::{ActiveModel, Column, Entity as CourseStudents};
use crate::entity::students::{Column as StudentColumn, Entity as Students};
use crate::errors::{RegistryError, Result};
use sea_orm::{
    ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Set,
    SqlErr,
};

/// 单条语句携带的最大 ID 数量，低于 SQLite 绑定参数上限
const ID_BATCH_SIZE: usize = 500;

/// 错误信息中最多列出的缺失 ID 数量
const MAX_REPORTED_IDS: usize = 10;

/// 校验学生ID是否全部存在，不存在时返回 Validation 错误并列出缺失的ID
pub(super) async fn ensure_students_exist<C>(conn: &C, student_ids: &[i64]) -> Result<()>
where
    C: ConnectionTrait,
{
    if student_ids.is_empty() {
        return Ok(());
    }

    let mut existing: HashSet<i64> = HashSet::with_capacity(student_ids.len());
    for batch in student_ids.chunks(ID_BATCH_SIZE) {
        let found: Vec<i64> = Students::find()
            .select_only()
            .column(StudentColumn::Id)
            .filter(StudentColumn::Id.is_in(batch.iter().copied()))
            .into_tuple::<i64>()
            .all(conn)
            .await
            .map_err(|e| RegistryError::database_operation(format!("查询学生失败: {e}")))?;
        existing.extend(found);
    }

    let missing: Vec<i64> = student_ids
        .iter()
        .copied()
        .filter(|id| !existing.contains(id))
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(RegistryError::validation(format!(
            "Invalid student id(s): {}",
            format_id_list(&missing)
        )))
    }
}

/// 用给定学生集合整体替换课程的选课关系
pub(super) async fn replace_memberships<C>(
    conn: &C,
    course_id: i64,
    student_ids: &[i64],
) -> Result<()>
where
    C: ConnectionTrait,
{
    CourseStudents::delete_many()
        .filter(Column::CourseId.eq(course_id))
        .exec(conn)
        .await
        .map_err(|e| RegistryError::database_operation(format!("清除选课关系失败: {e}")))?;

    // 插入顺序即关联顺序
    for batch in student_ids.chunks(ID_BATCH_SIZE) {
        let rows = batch.iter().map(|student_id| ActiveModel {
            course_id: Set(course_id),
            student_id: Set(*student_id),
            ..Default::default()
        });

        CourseStudents::insert_many(rows)
            .exec_without_returning(conn)
            .await
            .map_err(membership_write_error)?;
    }

    Ok(())
}

/// 写入关联时学生已被并发删除，外键约束失败按校验错误处理
fn membership_write_error(e: DbErr) -> RegistryError {
    match e.sql_err() {
        Some(SqlErr::ForeignKeyConstraintViolation(_)) => {
            RegistryError::validation("Invalid student id(s): student no longer exists")
        }
        _ => RegistryError::database_operation(format!("写入选课关系失败: {e}")),
    }
}

fn format_id_list(ids: &[i64]) -> String {
    let shown: Vec<String> = ids
        .iter()
        .take(MAX_REPORTED_IDS)
        .map(|id| id.to_string())
        .collect();

    if ids.len() > MAX_REPORTED_IDS {
        format!(
            "{} and {} more",
            shown.join(", "),
            ids.len() - MAX_REPORTED_IDS
        )
    } else {
        shown.join(", ")
    }
}

/// 批量读取课程的学生ID，按关联顺序排列
pub(super) async fn load_memberships<C>(
    conn: &C,
    course_ids: &[i64],
) -> Result<HashMap<i64, Vec<i64>>>
where
    C: ConnectionTrait,
{
    let mut memberships: HashMap<i64, Vec<i64>> = HashMap::with_capacity(course_ids.len());
    if course_ids.is_empty() {
        return Ok(memberships);
    }

    // 每个课程只出现在一个批次内，批内按关联顺序排列
    for batch in course_ids.chunks(ID_BATCH_SIZE) {
        let rows = CourseStudents::find()
            .filter(Column::CourseId.is_in(batch.iter().copied()))
            .order_by_asc(Column::Id)
            .all(conn)
            .await
            .map_err(|e| RegistryError::database_operation(format!("查询选课关系失败: {e}")))?;

        for row in rows {
            memberships
                .entry(row.course_id)
                .or_default()
                .push(row.student_id);
        }
    }

    Ok(memberships)
}

/// 删除学生的全部选课关系
pub(super) async fn remove_student_memberships<C>(conn: &C, student_id: i64) -> Result<u64>
where
    C: ConnectionTrait,
{
    let result = CourseStudents::delete_many()
        .filter(Column::StudentId.eq(student_id))
        .exec(conn)
        .await
        .map_err(|e| RegistryError::database_operation(format!("移除学生选课关系失败: {e}")))?;

    Ok(result.rows_affected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DatabaseConfig;
    use crate::models::courses::requests::CreateCourseRequest;
    use crate::models::students::requests::CreateStudentRequest;
    use crate::storage::sea_orm_storage::SeaOrmStorage;

    async fn memory_storage() -> SeaOrmStorage {
        let config = DatabaseConfig {
            url: ":memory:".to_string(),
            pool_size: 1,
            timeout: 5,
        };
        SeaOrmStorage::connect(&config).await.unwrap()
    }

    async fn seed_students(storage: &SeaOrmStorage, count: usize) -> Vec<i64> {
        let mut ids = Vec::with_capacity(count);
        for i in 0..count {
            let student = storage
                .create_student_impl(CreateStudentRequest {
                    name: format!("Student{i}"),
                })
                .await
                .unwrap();
            ids.push(student.id);
        }
        ids
    }

    #[test]
    fn test_format_id_list() {
        assert_eq!(format_id_list(&[3, 7]), "3, 7");

        let ids: Vec<i64> = (1..=25).collect();
        assert_eq!(
            format_id_list(&ids),
            "1, 2, 3, 4, 5, 6, 7, 8, 9, 10 and 15 more"
        );
    }

    #[actix_web::test]
    async fn test_ensure_students_exist_across_batches() {
        let storage = memory_storage().await;
        let mut ids = seed_students(&storage, ID_BATCH_SIZE + 20).await;

        assert!(ensure_students_exist(&storage.db, &ids).await.is_ok());

        ids.push(999_999);
        let err = ensure_students_exist(&storage.db, &ids).await.unwrap_err();
        assert!(err.is_validation());
        assert!(err.message().contains("999999"));
    }

    #[actix_web::test]
    async fn test_replace_memberships_keeps_order_across_batches() {
        let storage = memory_storage().await;
        let mut ids = seed_students(&storage, ID_BATCH_SIZE + 20).await;
        ids.reverse();

        let course = storage
            .create_course_impl(CreateCourseRequest {
                name: "Math".to_string(),
                students: vec![],
            })
            .await
            .unwrap();

        replace_memberships(&storage.db, course.id, &ids)
            .await
            .unwrap();

        let mut memberships = load_memberships(&storage.db, &[course.id]).await.unwrap();
        assert_eq!(memberships.remove(&course.id).unwrap(), ids);
    }

    #[actix_web::test]
    async fn test_replace_memberships_with_missing_student_is_validation_error() {
        let storage = memory_storage().await;
        let course = storage
            .create_course_impl(CreateCourseRequest {
                name: "Math".to_string(),
                students: vec![],
            })
            .await
            .unwrap();

        // 跳过存在性检查，直接触发外键约束
        let err = replace_memberships(&storage.db, course.id, &[42])
            .await
            .unwrap_err();
        assert!(err.is_validation());
    }
}
