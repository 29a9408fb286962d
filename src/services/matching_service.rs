//! 公社身份匹配服务
//!
//! 土地采集阶段建立两个索引，森林采集阶段只读使用：
//! 1. (本地代码, 规范化名称) → INSEE 代码集合
//! 2. 规范化名称 → INSEE 代码集合

use crate::services::normalizer::{commune_key, CommuneKey};
use std::collections::{BTreeSet, HashMap};
use tracing::debug;

/// 命中的索引
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchSource {
    /// 代码 + 名称精确命中
    CodeAndName,
    /// 仅按名称兜底命中
    NameOnly,
}

/// 匹配结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentityMatch<'a> {
    /// 唯一命中
    Unique {
        insee_code: &'a str,
        source: MatchSource,
    },
    /// 多个公社同名（通常位于不同省份）
    Ambiguous {
        insee_codes: &'a BTreeSet<String>,
        source: MatchSource,
    },
    /// 没有任何命中
    Unmatched,
}

impl<'a> IdentityMatch<'a> {
    /// 森林数据需要挂载的全部 INSEE 代码
    ///
    /// 歧义时挂到每一个候选公社：宁可把价格挂到同名的其他公社，也不静默丢失数据。
    pub fn attach_targets(&self) -> Vec<&'a str> {
        match self {
            IdentityMatch::Unique { insee_code, .. } => vec![*insee_code],
            IdentityMatch::Ambiguous { insee_codes, .. } => {
                insee_codes.iter().map(String::as_str).collect()
            }
            IdentityMatch::Unmatched => Vec::new(),
        }
    }

    pub fn is_ambiguous(&self) -> bool {
        matches!(self, IdentityMatch::Ambiguous { .. })
    }
}

/// 公社身份索引
#[derive(Debug, Clone, Default)]
pub struct CommuneIndex {
    by_code_and_name: HashMap<CommuneKey, BTreeSet<String>>,
    by_name_only: HashMap<String, BTreeSet<String>>,
}

impl CommuneIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// 登记一个土地侧公社
    pub fn insert(&mut self, local_code: &str, name: &str, insee_code: &str) {
        let key = commune_key(Some(local_code), name);
        self.by_name_only
            .entry(key.1.clone())
            .or_default()
            .insert(insee_code.to_string());
        self.by_code_and_name
            .entry(key)
            .or_default()
            .insert(insee_code.to_string());
    }

    /// 解析森林侧条目：先查 (代码, 名称)，未命中再按名称兜底
    pub fn resolve(&self, code: Option<&str>, name: &str) -> IdentityMatch<'_> {
        let key = commune_key(code, name);

        let hit = self
            .by_code_and_name
            .get(&key)
            .filter(|ids| !ids.is_empty())
            .map(|ids| (ids, MatchSource::CodeAndName))
            .or_else(|| {
                self.by_name_only
                    .get(&key.1)
                    .filter(|ids| !ids.is_empty())
                    .map(|ids| (ids, MatchSource::NameOnly))
            });

        match hit {
            None => {
                debug!("未找到匹配: {:?}", key);
                IdentityMatch::Unmatched
            }
            Some((ids, source)) if ids.len() == 1 => match ids.iter().next() {
                Some(insee_code) => IdentityMatch::Unique {
                    insee_code: insee_code.as_str(),
                    source,
                },
                None => IdentityMatch::Unmatched,
            },
            Some((ids, source)) => IdentityMatch::Ambiguous {
                insee_codes: ids,
                source,
            },
        }
    }

    /// 已登记的公社（INSEE 代码）数量
    pub fn len(&self) -> usize {
        self.by_name_only.values().map(BTreeSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name_only.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_index() -> CommuneIndex {
        let mut index = CommuneIndex::new();
        index.insert("001", "Alpha", "01001");
        index.insert("002", "Saint-Étienne", "01002");
        index.insert("218", "Saint-Étienne", "42218");
        index
    }

    #[test]
    fn test_code_and_name_hit() {
        let index = sample_index();
        assert_eq!(
            index.resolve(Some("001"), "ALPHA"),
            IdentityMatch::Unique {
                insee_code: "01001",
                source: MatchSource::CodeAndName
            }
        );
    }

    #[test]
    fn test_code_and_name_beats_name_ambiguity() {
        let index = sample_index();
        let found = index.resolve(Some("218"), "Saint Etienne");
        assert_eq!(found.attach_targets(), vec!["42218"]);
        assert!(!found.is_ambiguous());
    }

    #[test]
    fn test_name_only_fallback() {
        let index = sample_index();
        assert_eq!(
            index.resolve(Some("99999"), "alpha"),
            IdentityMatch::Unique {
                insee_code: "01001",
                source: MatchSource::NameOnly
            }
        );
        assert_eq!(index.resolve(None, "Alpha").attach_targets(), vec!["01001"]);
    }

    #[test]
    fn test_ambiguous_attaches_to_every_candidate() {
        let index = sample_index();
        let found = index.resolve(None, "SAINT ETIENNE");
        assert!(found.is_ambiguous());
        assert_eq!(found.attach_targets(), vec!["01002", "42218"]);
    }

    #[test]
    fn test_unmatched() {
        let index = sample_index();
        assert_eq!(index.resolve(Some("001"), "Gamma"), IdentityMatch::Unmatched);
        assert!(index.resolve(None, "Gamma").attach_targets().is_empty());
    }

    #[test]
    fn test_len_counts_codes() {
        let index = sample_index();
        assert_eq!(index.len(), 3);
        assert!(!index.is_empty());
        assert!(CommuneIndex::new().is_empty());
    }
}
