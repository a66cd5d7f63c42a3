use serde::{Deserialize, Deserializer};

/// 查询参数中的可选整数
///
/// 空字符串视为未提供，非整数值返回反序列化错误（由 query_error_handler 转换为 400）
pub fn deserialize_optional_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{Error, Unexpected};

    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(raw) if raw.trim().is_empty() => Ok(None),
        Some(raw) => raw.trim().parse::<i64>().map(Some).map_err(|_| {
            Error::invalid_value(Unexpected::Str(&raw), &"an integer id")
        }),
    }
}

/// 查询参数中的可选字符串，空字符串视为未提供
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.filter(|s| !s.is_empty()))
}
