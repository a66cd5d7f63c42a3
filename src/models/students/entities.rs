use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    // 学生ID
    pub id: i64,
    // 学生姓名
    pub name: String,
}
