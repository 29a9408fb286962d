//! 页面抓取客户端
//!
//! 封装对源站的 HTTP 请求：有限次重试，区分可重试与不可重试的失败

use crate::config::Config;
use crate::error::FetchError;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, warn};

/// 页面来源
///
/// 采集器只依赖这个能力，测试时可以替换为内存中的站点。
#[allow(async_fn_in_trait)]
pub trait PageSource {
    /// 获取页面源码
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

/// 单次请求的失败分类
enum Attempt {
    /// 超时、连接被拒绝或中途断开、5xx，可以重试
    Transient(String),
    /// 其他失败，立即放弃
    Fatal(FetchError),
}

/// 基于 reqwest 的页面客户端
pub struct PageClient {
    client: Client,
    max_retries: u32,
    retry_base_delay: Duration,
}

impl PageClient {
    /// 创建新的页面客户端
    pub fn new(config: &Config) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.request_timeout())
            .build()
            .map_err(FetchError::ClientBuild)?;

        Ok(Self {
            client,
            max_retries: config.max_retries.max(1),
            retry_base_delay: config.retry_base_delay(),
        })
    }

    /// 单次请求
    async fn attempt(&self, url: &str) -> Result<String, Attempt> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| classify(url, e))?;

        let status = response.status();
        if status.is_server_error() {
            return Err(Attempt::Transient(format!("HTTP {}", status.as_u16())));
        }
        if !status.is_success() {
            return Err(Attempt::Fatal(http_status(url, status)));
        }

        response.text().await.map_err(|e| classify(url, e))
    }
}

impl PageSource for PageClient {
    /// 获取页面（带重试逻辑）
    ///
    /// 第 n 次可重试失败后等待 n × 基础间隔；不可重试的失败直接返回。
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        for attempt in 1..=self.max_retries {
            debug!("GET {} (尝试 {}/{})", url, attempt, self.max_retries);

            match self.attempt(url).await {
                Ok(body) => return Ok(body),
                Err(Attempt::Fatal(e)) => return Err(e),
                Err(Attempt::Transient(reason)) => {
                    if attempt == self.max_retries {
                        return Err(FetchError::RetriesExhausted {
                            url: url.to_string(),
                            attempts: self.max_retries,
                            reason,
                        });
                    }
                    let delay = self.retry_base_delay * attempt;
                    warn!(
                        "请求失败 (尝试 {}/{}): {}，{:?} 后重试...",
                        attempt, self.max_retries, reason, delay
                    );
                    sleep(delay).await;
                }
            }
        }

        // max_retries 至少为 1，循环内一定会返回
        Err(FetchError::RetriesExhausted {
            url: url.to_string(),
            attempts: self.max_retries,
            reason: "no attempt made".to_string(),
        })
    }
}

/// 请求构建、重定向和解码错误重试也不会成功，其余传输层错误都按可重试处理
fn classify(url: &str, e: reqwest::Error) -> Attempt {
    if e.is_builder() || e.is_redirect() || e.is_decode() {
        Attempt::Fatal(FetchError::Request {
            url: url.to_string(),
            source: e,
        })
    } else {
        let reason = match std::error::Error::source(&e) {
            Some(cause) => format!("{}: {}", e, cause),
            None => e.to_string(),
        };
        Attempt::Transient(reason)
    }
}

fn http_status(url: &str, status: StatusCode) -> FetchError {
    FetchError::HttpStatus {
        url: url.to_string(),
        status: status.as_u16(),
    }
}
