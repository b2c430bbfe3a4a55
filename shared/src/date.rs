//! 时间解析与展示辅助
//!
//! API 返回 RFC 3339 时间字符串（如 `2024-04-01T08:45:00Z`），
//! 此模块负责解析并格式化为界面可读的形式。

use chrono::DateTime;

/// 解析 RFC 3339 / ISO 8601 时间字符串
///
/// 解析失败返回 None。
pub fn parse(value: &str) -> Option<DateTime<chrono::FixedOffset>> {
    DateTime::parse_from_rfc3339(value).ok()
}

/// 格式化为 "月 年"，用于用户的 "member since" 展示
///
/// 例：`2023-01-15T10:20:30Z` -> `Jan 2023`。
/// 无法解析时原样返回输入。
pub fn month_year(value: &str) -> String {
    match parse(value) {
        Some(date) => date.format("%b %Y").to_string(),
        None => value.to_string(),
    }
}

/// 格式化为短日期，用于反馈时间戳展示
///
/// 例：`2024-04-01T08:45:00Z` -> `Apr 1, 2024`。
pub fn short_date(value: &str) -> String {
    match parse(value) {
        Some(date) => date.format("%b %-d, %Y").to_string(),
        None => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rfc3339_timestamps() {
        assert!(parse("2024-04-01T08:45:00Z").is_some());
        assert!(parse("2024-04-01T08:45:00+02:00").is_some());
        assert!(parse("not a date").is_none());
    }

    #[test]
    fn formats_month_year() {
        assert_eq!(month_year("2023-01-15T10:20:30Z"), "Jan 2023");
    }

    #[test]
    fn formats_short_date() {
        assert_eq!(short_date("2024-04-01T08:45:00Z"), "Apr 1, 2024");
    }

    #[test]
    fn unparseable_input_passes_through() {
        assert_eq!(month_year("soon"), "soon");
        assert_eq!(short_date(""), "");
    }
}
