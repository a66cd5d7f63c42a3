use serde::{Deserialize, Serialize};

use crate::models::ErrorCode;

// 统一的API错误响应结构
//
// 成功响应直接返回资源本身，不经过此结构包装
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    pub code: i32,
    pub message: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl ApiResponse {
    pub fn error(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code as i32,
            message: message.into(),
            timestamp: chrono::Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_body() {
        let resp = ApiResponse::error(ErrorCode::CourseNotFound, "Course not found");
        let value = serde_json::to_value(&resp).unwrap();

        assert_eq!(value["code"], 3000);
        assert_eq!(value["message"], "Course not found");
        assert!(value.get("timestamp").is_some());
    }
}
