//! 森林数据采集器 - 编排层
//!
//! 抓取森林区列表 → 每个森林区的公社，用土地阶段的索引解析身份。
//! 与土地采集器结构相同，但不自行产生 INSEE 代码，只依赖索引。

use crate::clients::{PageSource, SiteUrls};
use crate::models::{ForestRecord, UnmatchedForestEntry, ZoneEntry};
use crate::orchestrator::Pacing;
use crate::services::{load_payload, CommuneIndex, IdentityMatch};
use crate::utils::logging::log_phase_banner;
use std::collections::BTreeMap;
use tokio::time::sleep;
use tracing::{error, info, warn};

/// 森林采集统计
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ForestStats {
    pub regions_failed: usize,
    /// 没有名称、无法构造页面地址的森林区
    pub regions_skipped: usize,
    pub ambiguous_matches: usize,
}

/// 森林采集结果
#[derive(Debug, Default)]
pub struct ForestHarvest {
    /// 已解析到 INSEE 代码的森林记录
    pub records: BTreeMap<String, ForestRecord>,
    /// 无法解析的森林公社条目
    pub unmatched: Vec<UnmatchedForestEntry>,
    pub stats: ForestStats,
}

/// 森林数据采集器
pub struct ForestCollector<'a, S: PageSource> {
    source: &'a S,
    urls: &'a SiteUrls,
    pacing: Pacing,
}

impl<'a, S: PageSource> ForestCollector<'a, S> {
    pub fn new(source: &'a S, urls: &'a SiteUrls, pacing: Pacing) -> Self {
        Self {
            source,
            urls,
            pacing,
        }
    }

    /// 采集所有森林区
    ///
    /// 森林区列表本身无法获取时返回空结果，让后续合并和入库照常进行。
    pub async fn collect(&self, index: &CommuneIndex) -> ForestHarvest {
        log_phase_banner("FORÊTS");

        let mut harvest = ForestHarvest::default();

        let url = self.urls.forest(None);
        let payload = match load_payload(self.source, &url).await {
            Ok(payload) => payload,
            Err(e) => {
                error!("[错误] 无法获取森林区列表: {}", e);
                return harvest;
            }
        };

        for region in payload.zones() {
            let Some(region_name) = region.name() else {
                warn!("   [注意] 森林区列表中有一个森林区没有名称，已跳过");
                harvest.stats.regions_skipped += 1;
                continue;
            };
            self.collect_region(region_name, region, index, &mut harvest)
                .await;
            sleep(self.pacing.forest_region).await;
        }

        info!("   --> 已关联森林数据的公社: {}", harvest.records.len());
        if !harvest.unmatched.is_empty() {
            warn!("   [注意] 没有对应公社的森林条目: {}", harvest.unmatched.len());
        }
        harvest
    }

    async fn collect_region(
        &self,
        region_name: &str,
        region: &ZoneEntry,
        index: &CommuneIndex,
        harvest: &mut ForestHarvest,
    ) {
        let url = self.urls.forest(Some(region_name));
        let payload = match load_payload(self.source, &url).await {
            Ok(payload) => payload,
            Err(e) => {
                error!("   [错误] 无法获取森林区 '{}' 的公社: {}", region_name, e);
                harvest.stats.regions_failed += 1;
                return;
            }
        };

        let communes: Vec<&ZoneEntry> = payload.zones().collect();
        info!("   [森林] {} : {} 个公社", region_name, communes.len());

        for commune in communes {
            let Some(name) = commune.name() else {
                continue;
            };
            let code = commune.code();

            let found = index.resolve(code, name);
            if let IdentityMatch::Unmatched = found {
                harvest.unmatched.push(UnmatchedForestEntry {
                    forest_region: region_name.to_string(),
                    commune_name: name.to_string(),
                    commune_code: code.map(str::to_string),
                });
                continue;
            }

            let targets = found.attach_targets();
            if found.is_ambiguous() {
                warn!(
                    "      [注意] {} ({}) 匹配到 {} 个公社，全部关联",
                    name,
                    code.unwrap_or("-"),
                    targets.len()
                );
                harvest.stats.ambiguous_matches += 1;
            }

            let record = ForestRecord {
                forest_region: region_name.to_string(),
                price_per_ha: commune
                    .datas
                    .forest_price()
                    .or_else(|| region.datas.forest_price()),
                year: commune.datas.year().or_else(|| region.datas.year()),
                sales_count: commune.datas.sales_count(),
                source_url: url.clone(),
            };

            for insee_code in targets {
                harvest
                    .records
                    .insert(insee_code.to_string(), record.clone());
            }
        }
    }
}
