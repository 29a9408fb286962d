//! 页面数据提取
//!
//! 从页面源码中定位 `var page = {...};` 并解码为 [`PagePayload`]。

use crate::models::PagePayload;
use regex::Regex;
use std::sync::OnceLock;
use tracing::debug;

fn page_marker() -> &'static Regex {
    static MARKER: OnceLock<Regex> = OnceLock::new();
    MARKER.get_or_init(|| {
        Regex::new(r"(?s)var page = (\{.+?\});").expect("page marker regex is valid")
    })
}

/// 提取页面数据
///
/// 找不到标记或 JSON 无法解码时返回 `None`（软失败，由调用方决定跳过）。
pub fn extract_payload(html: &str) -> Option<PagePayload> {
    let captures = page_marker().captures(html)?;
    let literal = captures.get(1)?.as_str();

    match serde_json::from_str(literal) {
        Ok(payload) => Some(payload),
        Err(e) => {
            debug!("页面数据解码失败: {}", e);
            None
        }
    }
}
