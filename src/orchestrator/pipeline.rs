//! 整体流程 - 编排层
//!
//! ## 职责
//!
//! 1. **应用初始化**：校验站点地址，创建 HTTP 客户端
//! 2. **土地采集**：得到土地记录和身份索引
//! 3. **森林采集**：用索引解析森林公社
//! 4. **合并入库**：一次性替换数据库
//! 5. **全局统计**：输出 BILAN
//!
//! 数据库只在最后写一次，运行中途被中断时不会改动已有文件。

use crate::clients::{PageClient, PageSource, SiteUrls};
use crate::config::Config;
use crate::error::AppResult;
use crate::models::{Department, MergedRow, DEPARTMENTS};
use crate::orchestrator::{merge, ForestCollector, LandCollector, Pacing};
use crate::services::UnmatchedWriter;
use crate::storage::SqliteWriter;
use crate::utils::logging::{log_startup, print_final_stats};
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// 一次运行的统计
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub total_communes: usize,
    pub with_land_price: usize,
    pub with_forest_price: usize,
    pub unmatched_forest: usize,
    pub ambiguous_matches: usize,
    pub departments_failed: usize,
    /// 页面正常但没有小区域的省份，和失败的省份分开统计
    pub departments_without_subregions: usize,
    pub subregions_failed: usize,
    pub forest_regions_failed: usize,
    pub db_path: String,
    pub elapsed: Duration,
}

/// 应用主结构
pub struct App {
    config: Config,
    client: PageClient,
    urls: SiteUrls,
}

impl App {
    /// 初始化应用
    pub fn initialize(config: Config) -> AppResult<Self> {
        log_startup(&config);

        let urls = SiteUrls::new(&config.base_url)?;
        let client = PageClient::new(&config)?;

        Ok(Self {
            config,
            client,
            urls,
        })
    }

    /// 运行应用主逻辑：全部本土省份
    pub async fn run(&self) -> AppResult<RunSummary> {
        run_pipeline(&self.client, &self.urls, &self.config, DEPARTMENTS).await
    }
}

/// 完整流程：土地 → 森林 → 合并 → 入库
pub async fn run_pipeline<S: PageSource>(
    source: &S,
    urls: &SiteUrls,
    config: &Config,
    departments: &[Department],
) -> AppResult<RunSummary> {
    let started = Instant::now();
    let pacing = Pacing::from_config(config);

    let land = LandCollector::new(source, urls, pacing)
        .collect(departments)
        .await;
    let forest = ForestCollector::new(source, urls, pacing)
        .collect(&land.index)
        .await;

    let rows = merge(&land.records, &forest.records);
    info!("\n🔗 合并完成: {} 个公社", rows.len());

    SqliteWriter::new(&config.db_path).write(&rows, forest.unmatched.len())?;

    if !config.unmatched_report_path.is_empty() {
        let writer = UnmatchedWriter::with_path(&config.unmatched_report_path);
        // 清单只是诊断信息，写不出来不影响数据库
        match writer.write(&forest.unmatched) {
            Ok(()) => info!("📝 未匹配清单: {}", writer.path()),
            Err(e) => warn!("⚠️ 无法写入未匹配清单: {}", e),
        }
    }

    let summary = RunSummary {
        total_communes: rows.len(),
        with_land_price: count_with(&rows, |r| r.land_price_per_ha.is_some()),
        with_forest_price: count_with(&rows, |r| r.forest_price_per_ha.is_some()),
        unmatched_forest: forest.unmatched.len(),
        ambiguous_matches: forest.stats.ambiguous_matches,
        departments_failed: land.stats.departments_failed,
        departments_without_subregions: land.stats.departments_without_subregions,
        subregions_failed: land.stats.subregions_failed,
        forest_regions_failed: forest.stats.regions_failed,
        db_path: config.db_path.clone(),
        elapsed: started.elapsed(),
    };

    print_final_stats(&summary);
    Ok(summary)
}

fn count_with(rows: &[MergedRow], predicate: impl Fn(&MergedRow) -> bool) -> usize {
    rows.iter().filter(|r| predicate(r)).count()
}
