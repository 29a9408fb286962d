//! 合并土地与森林数据
//!
//! 每个出现在任一侧的 INSEE 代码恰好产出一行。

use crate::models::{ForestRecord, LandRecord, MergedRow};
use std::collections::BTreeMap;

/// 按 INSEE 代码合并
///
/// 先输出所有土地公社（有森林数据则叠加），再补上只有森林数据的公社。
/// 最终按 (省份名称, 公社名称) 排序，缺失视为空串。
pub fn merge(
    land: &BTreeMap<String, LandRecord>,
    forest: &BTreeMap<String, ForestRecord>,
) -> Vec<MergedRow> {
    let mut rows: Vec<MergedRow> = land
        .values()
        .map(|record| {
            let row = MergedRow::from_land(record);
            match forest.get(&record.insee_code) {
                Some(f) => row.with_forest(f),
                None => row,
            }
        })
        .collect();

    rows.extend(
        forest
            .iter()
            .filter(|(insee_code, _)| !land.contains_key(*insee_code))
            .map(|(insee_code, f)| MergedRow::forest_only(insee_code, f)),
    );

    rows.sort_by(|a, b| sort_key(a).cmp(&sort_key(b)));
    rows
}

fn sort_key(row: &MergedRow) -> (&str, &str) {
    (
        row.department_name.as_deref().unwrap_or_default(),
        row.commune_name.as_deref().unwrap_or_default(),
    )
}
