/// 名称最大长度（字符数）
pub const MAX_NAME_LENGTH: usize = 255;

/// 校验并规范化课程/学生名称
///
/// 去除首尾空白后不能为空，且不超过 `MAX_NAME_LENGTH` 个字符。
pub fn normalize_name(name: &str) -> Result<String, &'static str> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err("Name must not be blank");
    }
    if trimmed.chars().count() > MAX_NAME_LENGTH {
        return Err("Name must be at most 255 characters");
    }
    Ok(trimmed.to_string())
}
