use serde::Deserialize;

use crate::models::common::query::{deserialize_optional_i64, deserialize_optional_string};

// 课程列表查询参数（来自HTTP请求）
//
// 所有条件为精确匹配，同时提供时取交集
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CourseQueryParams {
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub name: Option<String>,
}

// 创建课程请求
#[derive(Debug, Deserialize)]
pub struct CreateCourseRequest {
    pub name: String,
    #[serde(default)]
    pub students: Vec<i64>,
}

// 整体替换课程请求（PUT）
//
// 省略 students 时保留原有学生集合，提供时整体替换
#[derive(Debug, Deserialize)]
pub struct ReplaceCourseRequest {
    pub name: String,
    pub students: Option<Vec<i64>>,
}

// 部分更新课程请求（PATCH），同时作为存储层的更新参数
#[derive(Debug, Default, Deserialize)]
pub struct UpdateCourseRequest {
    pub name: Option<String>,
    pub students: Option<Vec<i64>>,
}

impl From<ReplaceCourseRequest> for UpdateCourseRequest {
    fn from(req: ReplaceCourseRequest) -> Self {
        Self {
            name: Some(req.name),
            students: req.students,
        }
    }
}

/// 去除重复的学生ID，保留首次出现的顺序
pub fn dedup_student_ids(ids: Vec<i64>) -> Vec<i64> {
    let mut seen = std::collections::HashSet::with_capacity(ids.len());
    ids.into_iter().filter(|id| seen.insert(*id)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dedup_keeps_first_occurrence() {
        assert_eq!(dedup_student_ids(vec![3, 1, 3, 2, 1]), vec![3, 1, 2]);
        assert!(dedup_student_ids(vec![]).is_empty());
    }

    #[test]
    fn test_create_request_students_default_empty() {
        let req: CreateCourseRequest = serde_json::from_str(r#"{"name":"Math"}"#).unwrap();
        assert_eq!(req.name, "Math");
        assert!(req.students.is_empty());
    }

    #[test]
    fn test_create_request_requires_name() {
        let result = serde_json::from_str::<CreateCourseRequest>(r#"{"students":[1]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_replace_into_update() {
        let req: ReplaceCourseRequest =
            serde_json::from_str(r#"{"name":"Physics","students":[4,5]}"#).unwrap();
        let update = UpdateCourseRequest::from(req);
        assert_eq!(update.name.as_deref(), Some("Physics"));
        assert_eq!(update.students, Some(vec![4, 5]));

        let req: ReplaceCourseRequest = serde_json::from_str(r#"{"name":"Physics"}"#).unwrap();
        assert_eq!(UpdateCourseRequest::from(req).students, None);
    }

    #[test]
    fn test_query_params_parsing() {
        use actix_web::web::Query;

        let q = Query::<CourseQueryParams>::from_query("id=3&name=Math").unwrap();
        assert_eq!(q.id, Some(3));
        assert_eq!(q.name.as_deref(), Some("Math"));

        let q = Query::<CourseQueryParams>::from_query("").unwrap();
        assert_eq!(q.id, None);
        assert_eq!(q.name, None);

        // 空值视为未提供
        let q = Query::<CourseQueryParams>::from_query("id=&name=").unwrap();
        assert_eq!(q.id, None);
        assert_eq!(q.name, None);

        assert!(Query::<CourseQueryParams>::from_query("id=abc").is_err());
    }
}
