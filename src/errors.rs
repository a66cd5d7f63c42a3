//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_registry_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum RegistryError {
            $($variant(String),)*
        }

        impl RegistryError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(RegistryError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(RegistryError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(RegistryError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl RegistryError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        RegistryError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_registry_errors! {
    DatabaseConfig("E001", "Database Configuration Error"),
    DatabaseConnection("E002", "Database Connection Error"),
    DatabaseOperation("E003", "Database Operation Error"),
    Validation("E004", "Validation Error"),
}

impl RegistryError {
    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }

    /// 是否为请求数据校验失败（应返回 400）
    pub fn is_validation(&self) -> bool {
        matches!(self, RegistryError::Validation(_))
    }
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for RegistryError {}

// 数据库错误默认归为操作错误
impl From<sea_orm::DbErr> for RegistryError {
    fn from(err: sea_orm::DbErr) -> Self {
        RegistryError::DatabaseOperation(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, RegistryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(RegistryError::database_config("test").code(), "E001");
        assert_eq!(RegistryError::database_operation("test").code(), "E003");
        assert_eq!(RegistryError::validation("test").code(), "E004");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            RegistryError::database_connection("test").error_type(),
            "Database Connection Error"
        );
        assert_eq!(
            RegistryError::validation("test").error_type(),
            "Validation Error"
        );
    }

    #[test]
    fn test_error_message() {
        let err = RegistryError::validation("Unknown student id(s): 7");
        assert_eq!(err.message(), "Unknown student id(s): 7");
    }

    #[test]
    fn test_format_simple() {
        let err = RegistryError::database_operation("Course 3");
        let formatted = err.format_simple();
        assert!(formatted.contains("Database Operation Error"));
        assert!(formatted.contains("Course 3"));
    }

    #[test]
    fn test_is_validation() {
        assert!(RegistryError::validation("bad").is_validation());
        assert!(!RegistryError::database_operation("boom").is_validation());
    }

    #[test]
    fn test_from_db_err() {
        let err: RegistryError = sea_orm::DbErr::Custom("locked".to_string()).into();
        assert_eq!(err.code(), "E003");
        assert!(err.message().contains("locked"));
    }
}
