//! 编排层（Orchestration Layer）
//!
//! ## 职责
//!
//! 本层负责逐级抓取和阶段调度，是整个系统的"指挥中心"。
//!
//! ## 模块划分
//!
//! ### `land_collector` - 土地采集
//! - 省份 → 小区域 → 公社
//! - 产出土地记录和身份索引
//!
//! ### `forest_collector` - 森林采集
//! - 森林区 → 公社
//! - 只读使用土地阶段的索引解析身份
//!
//! ### `merger` - 合并
//! - 每个 INSEE 代码一行
//!
//! ### `pipeline` - 整体流程
//! - 土地 → 森林 → 合并 → 入库 → 统计
//!
//! ## 层次关系
//!
//! ```text
//! pipeline
//!     ↓
//! land_collector → (索引) → forest_collector → merger → storage
//!     ↓
//! services (能力层：提取 / 规范化 / 匹配)
//!     ↓
//! clients (基础设施：PageSource)
//! ```
//!
//! ## 设计原则
//!
//! 1. **顺序执行**：同一时间只有一个请求在进行
//! 2. **单元隔离**：一个省份、小区域或森林区失败只跳过它本身
//! 3. **最后入库**：两个采集阶段都结束后才写数据库，中断不会留下部分结果

use crate::config::Config;
use std::time::Duration;

pub mod forest_collector;
pub mod land_collector;
pub mod merger;
pub mod pipeline;

// 重新导出主要类型
pub use forest_collector::{ForestCollector, ForestHarvest, ForestStats};
pub use land_collector::{LandCollector, LandHarvest, LandStats};
pub use merger::merge;
pub use pipeline::{run_pipeline, App, RunSummary};

/// 请求间隔
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pacing {
    pub subregion: Duration,
    pub department: Duration,
    pub forest_region: Duration,
}

impl Pacing {
    pub fn from_config(config: &Config) -> Self {
        Self {
            subregion: Duration::from_millis(config.subregion_pause_ms),
            department: Duration::from_millis(config.department_pause_ms),
            forest_region: Duration::from_millis(config.forest_region_pause_ms),
        }
    }
}
