//! 学生实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "students")]
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

// 通过关联表访问学生所在的课程
impl Related<super::courses::Entity> for Entity {
    fn to() -> RelationDef {
        super::course_students::Relation::Course.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::course_students::Relation::Student.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_student(self) -> crate::models::students::entities::Student {
        use crate::models::students::entities::Student;

        Student {
            id: self.id,
            name: self.name,
        }
    }
}
