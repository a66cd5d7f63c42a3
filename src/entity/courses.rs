//! 课程实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "courses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::course_students::Entity")]
    CourseStudents,
}

impl Related<super::course_students::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CourseStudents.def()
    }
}

// 通过关联表访问课程内的学生
impl Related<super::students::Entity> for Entity {
    fn to() -> RelationDef {
        super::course_students::Relation::Student.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::course_students::Relation::Course.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    /// `students` 需按关联顺序传入
    pub fn into_course(self, students: Vec<i64>) -> crate::models::courses::entities::Course {
        use crate::models::courses::entities::Course;

        Course {
            id: self.id,
            name: self.name,
            students,
        }
    }
}
