//! # SAFER Prices
//!
//! 抓取法国 SAFER 公开站点的农地和森林价格，按 INSEE 公社代码合并后写入 SQLite
//!
//! ## 架构设计
//!
//! 本系统采用分层架构：
//!
//! ### ① 基础设施层（Clients）
//! - `clients/` - 只负责把 URL 变成 HTML 文本
//! - `PageSource` - 页面来源抽象，测试中可替换
//! - `PageClient` - 带超时和重试的 HTTP 实现
//! - `SiteUrls` - 站点地址构造
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，不关心抓取顺序
//! - `payload_extractor` - 从页面中取出内嵌数据
//! - `normalizer` - 名称规范化、INSEE 代码拼接
//! - `matching_service` - 公社身份索引和解析
//! - `UnmatchedWriter` - 写未匹配清单
//!
//! ### ③ 编排层（Orchestration）
//! - `orchestrator/land_collector` - 省份 → 小区域 → 公社
//! - `orchestrator/forest_collector` - 森林区 → 公社
//! - `orchestrator/merger` - 按 INSEE 代码合并
//! - `orchestrator/pipeline` - 整体流程和统计
//!
//! ### ④ 存储层（Storage）
//! - `storage/sqlite_writer` - 整体替换数据库
//! - `storage/price_lookup` - 按 INSEE 代码查询
//!
//! ## 模块结构

pub mod clients;
pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod storage;
pub mod utils;

// 重新导出常用类型
pub use clients::{PageClient, PageSource, SiteUrls};
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{Department, MergedRow, DEPARTMENTS};
pub use orchestrator::{run_pipeline, App, RunSummary};
pub use storage::{CommunePrices, PriceLookup};
