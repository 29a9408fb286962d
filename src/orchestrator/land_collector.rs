//! 土地数据采集器 - 编排层
//!
//! 按省份 → 小区域 → 公社逐级抓取，每个公社产出一条土地记录，
//! 同时建立供森林阶段使用的身份索引。
//!
//! 任何省份或小区域失败都只跳过该单元并记录日志，不会中断整个运行。

use crate::clients::{PageSource, SiteUrls};
use crate::models::{Department, LandRecord, ZoneEntry};
use crate::orchestrator::Pacing;
use crate::services::normalizer::build_insee_code;
use crate::services::{load_payload, CommuneIndex};
use crate::utils::logging::{log_department_start, log_phase_banner};
use std::collections::BTreeMap;
use tokio::time::sleep;
use tracing::{debug, error, info, warn};

/// 省份页面中小区域所在的层级
const SUBREGION_LEVEL: i64 = 3;

/// 土地采集统计
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LandStats {
    pub departments_failed: usize,
    /// 页面正常但没有任何小区域的省份
    pub departments_without_subregions: usize,
    pub subregions_failed: usize,
    pub subregions_skipped: usize,
}

/// 土地采集结果
///
/// 索引在此阶段建完后只读交给森林阶段。
#[derive(Debug, Default)]
pub struct LandHarvest {
    pub records: BTreeMap<String, LandRecord>,
    pub index: CommuneIndex,
    pub stats: LandStats,
}

/// 土地数据采集器
pub struct LandCollector<'a, S: PageSource> {
    source: &'a S,
    urls: &'a SiteUrls,
    pacing: Pacing,
}

impl<'a, S: PageSource> LandCollector<'a, S> {
    pub fn new(source: &'a S, urls: &'a SiteUrls, pacing: Pacing) -> Self {
        Self {
            source,
            urls,
            pacing,
        }
    }

    /// 按给定顺序采集所有省份
    pub async fn collect(&self, departments: &[Department]) -> LandHarvest {
        log_phase_banner("TERRES ET PRÉS");

        let mut harvest = LandHarvest::default();
        let total = departments.len();

        for (idx, department) in departments.iter().enumerate() {
            log_department_start(idx + 1, total, department);
            self.collect_department(department, &mut harvest).await;

            // 省份之间稍作停顿
            sleep(self.pacing.department).await;
        }

        info!(
            "   --> 土地公社总数: {} (索引条目 {})",
            harvest.records.len(),
            harvest.index.len()
        );
        harvest
    }

    async fn collect_department(&self, department: &Department, harvest: &mut LandHarvest) {
        let url = self.urls.land(department, None);
        let payload = match load_payload(self.source, &url).await {
            Ok(payload) => payload,
            Err(e) => {
                error!("   [错误] 无法获取 {} 的小区域: {}", department.name, e);
                harvest.stats.departments_failed += 1;
                return;
            }
        };

        let subregions: Vec<&ZoneEntry> = payload.zones_at_level(SUBREGION_LEVEL).collect();
        if subregions.is_empty() {
            warn!("   [注意] {} 页面正常，但没有任何小区域", department.name);
            harvest.stats.departments_without_subregions += 1;
            return;
        }

        for subregion in subregions {
            self.collect_subregion(department, subregion, harvest).await;
            sleep(self.pacing.subregion).await;
        }
    }

    async fn collect_subregion(
        &self,
        department: &Department,
        subregion: &ZoneEntry,
        harvest: &mut LandHarvest,
    ) {
        let Some(subregion_name) = subregion.name() else {
            warn!("      [注意] {} 中有一个小区域没有名称，已跳过", department.name);
            harvest.stats.subregions_skipped += 1;
            return;
        };

        let url = self.urls.land(department, Some(subregion_name));
        let payload = match load_payload(self.source, &url).await {
            Ok(payload) => payload,
            Err(e) => {
                error!(
                    "      [错误] 无法获取小区域 '{}' ({}) 的公社: {}",
                    subregion_name, department.name, e
                );
                harvest.stats.subregions_failed += 1;
                return;
            }
        };

        let communes: Vec<&ZoneEntry> = payload.zones().collect();
        info!("      [OK] {} : {} 个公社", subregion_name, communes.len());

        for commune in communes {
            // 名称或代码缺失的条目不完整，直接忽略
            let (Some(name), Some(code)) = (commune.name(), commune.code()) else {
                continue;
            };
            let Some(insee_code) = build_insee_code(department.code, Some(code)) else {
                continue;
            };

            harvest.index.insert(code, name, &insee_code);

            let record = LandRecord {
                insee_code: insee_code.clone(),
                department_code: department.code.to_string(),
                department_name: department.name.to_string(),
                commune_name: name.to_string(),
                subregion_name: subregion_name.to_string(),
                subregion_code: subregion.code().unwrap_or_default().to_string(),
                price_per_ha: commune
                    .datas
                    .land_price()
                    .or_else(|| subregion.datas.land_price()),
                year: commune.datas.year().or_else(|| subregion.datas.year()),
                sales_count: commune.datas.sales_count(),
                source_url: url.clone(),
            };

            if harvest.records.insert(insee_code, record).is_some() {
                debug!("重复的公社条目，以后出现的为准: {}", name);
            }
        }
    }
}
