use serde::Deserialize;

use crate::models::common::query::{deserialize_optional_i64, deserialize_optional_string};

// 学生列表查询参数（来自HTTP请求）
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StudentQueryParams {
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub name: Option<String>,
}

// 创建学生请求
#[derive(Debug, Deserialize)]
pub struct CreateStudentRequest {
    pub name: String,
}

// 更新学生请求
#[derive(Debug, Deserialize)]
pub struct UpdateStudentRequest {
    pub name: String,
}
