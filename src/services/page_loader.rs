//! 页面加载：抓取 + 提取数据
//!
//! 抓取失败和数据不可用对调用方是同一类失败：跳过当前单元。

use crate::clients::PageSource;
use crate::error::{AppError, AppResult};
use crate::models::PagePayload;
use crate::services::payload_extractor::extract_payload;

/// 获取页面并解析其中的数据
pub async fn load_payload<S: PageSource>(source: &S, url: &str) -> AppResult<PagePayload> {
    let html = source.fetch(url).await?;
    extract_payload(&html).ok_or_else(|| AppError::payload_unusable(url))
}
