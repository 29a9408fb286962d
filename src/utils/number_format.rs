//! 法式数字格式解析
//!
//! 源站以显示格式给出数值：逗号作小数点，普通空格、不换行空格或窄不换行空格作千位分隔，
//! 价格末尾可能带有 `€`，`-` 表示无数据。

const THOUSANDS_SEPARATORS: [char; 3] = [' ', '\u{a0}', '\u{202f}'];

/// 解析价格，如 `"12 340,50 €"` → `12340.5`
pub fn parse_price(value: Option<&str>) -> Option<f64> {
    let cleaned: String = strip_blank_marker(value)?
        .chars()
        .filter(|c| !THOUSANDS_SEPARATORS.contains(c) && *c != '€')
        .map(|c| if c == ',' { '.' } else { c })
        .collect();

    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// 解析整数（年份、成交数量），如 `"1 204"` → `1204`
pub fn parse_count(value: Option<&str>) -> Option<i64> {
    let cleaned: String = strip_blank_marker(value)?
        .chars()
        .filter(|c| !THOUSANDS_SEPARATORS.contains(c))
        .collect();

    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse().ok()
}

/// `None`、空串和 `-` 都表示无数据
fn strip_blank_marker(value: Option<&str>) -> Option<&str> {
    let trimmed = value?.trim();
    if trimmed.is_empty() || trimmed == "-" {
        None
    } else {
        Some(trimmed)
    }
}
