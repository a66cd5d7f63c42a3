/// API 错误码
///
/// 随错误响应体一起返回，HTTP 状态码仍按语义设置。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // 通用错误
    BadRequest = 1000,
    NotFound = 1004,
    InternalServerError = 1005,

    // 课程相关
    CourseNotFound = 3000,
    CourseNameInvalid = 3001,
    CourseStudentInvalid = 3002,
    CourseCreationFailed = 3003,
    CourseUpdateFailed = 3004,
    CourseDeleteFailed = 3005,

    // 学生相关
    StudentNotFound = 4000,
    StudentNameInvalid = 4001,
    StudentCreationFailed = 4002,
    StudentUpdateFailed = 4003,
    StudentDeleteFailed = 4004,
}
