use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    // 课程ID
    pub id: i64,
    // 课程名称
    pub name: String,
    // 选课学生ID，按关联顺序排列且不重复
    pub students: Vec<i64>,
}
