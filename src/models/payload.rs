//! 页面内嵌 `var page = {...};` 数据的结构定义
//!
//! 源站数据结构松散：字段可能缺失、类型可能不一致（数字或字符串）。
//! 在反序列化边界统一转换：形状不对的字段变成 `None`，不会在后续使用时出错。

use crate::utils::number_format::{parse_count, parse_price};
use serde::de::{DeserializeOwned, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::fmt;

/// 页面数据根对象
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PagePayload {
    #[serde(default, deserialize_with = "list_or_empty")]
    pub geodatas: Vec<GeoData>,
}

impl PagePayload {
    /// 所有地理分组下的区域条目
    pub fn zones(&self) -> impl Iterator<Item = &ZoneEntry> {
        self.geodatas.iter().flat_map(|geo| geo.datas.iter())
    }

    /// 指定层级的区域条目（省份页面中 level 3 为小区域）
    pub fn zones_at_level(&self, level: i64) -> impl Iterator<Item = &ZoneEntry> {
        self.zones().filter(move |zone| zone.level() == Some(level))
    }
}

/// 地理分组
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeoData {
    #[serde(default, deserialize_with = "list_or_empty")]
    pub datas: Vec<ZoneEntry>,
}

/// 区域或公社条目
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ZoneEntry {
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub code: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub level: Option<String>,
    #[serde(default, deserialize_with = "object_or_default")]
    pub datas: Metrics,
}

impl ZoneEntry {
    pub fn level(&self) -> Option<i64> {
        self.level.as_deref().and_then(|l| l.trim().parse().ok())
    }

    /// 非空名称
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref().filter(|n| !n.is_empty())
    }

    /// 非空代码（已去除首尾空白）
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref().map(str::trim).filter(|c| !c.is_empty())
    }
}

/// 条目附带的价格指标，保持源站的显示格式
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Metrics {
    #[serde(default, deserialize_with = "lenient_text")]
    pub prix_libre: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub prix_foret: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub annee: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub nombre_ventes: Option<String>,
}

impl Metrics {
    /// 土地价格（欧元/公顷）
    pub fn land_price(&self) -> Option<f64> {
        parse_price(self.prix_libre.as_deref())
    }

    /// 森林价格（欧元/公顷）
    pub fn forest_price(&self) -> Option<f64> {
        parse_price(self.prix_foret.as_deref())
    }

    pub fn year(&self) -> Option<i64> {
        parse_count(self.annee.as_deref())
    }

    pub fn sales_count(&self) -> Option<i64> {
        parse_count(self.nombre_ventes.as_deref())
    }
}

// ========== 宽松反序列化辅助函数 ==========

/// 接受字符串或数字，其他类型（null、对象、数组、布尔）一律视为缺失
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    struct TextVisitor;

    impl<'de> Visitor<'de> for TextVisitor {
        type Value = Option<String>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or a number")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(Some(value.to_string()))
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(Some(value.to_string()))
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(Some(value.to_string()))
        }

        fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(Some(value.to_string()))
        }

        fn visit_bool<E>(self, _value: bool) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(None)
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(None)
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(None)
        }

        fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
        where
            A: SeqAccess<'de>,
        {
            while seq.next_element::<IgnoredAny>()?.is_some() {}
            Ok(None)
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
            Ok(None)
        }
    }

    deserializer.deserialize_any(TextVisitor)
}

/// 数组中形状正确的元素；不是数组时返回空列表
fn list_or_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
        _ => Vec::new(),
    })
}

/// 对象按结构解析；不是对象时使用默认值
fn object_or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Object(_) => serde_json::from_value(value).unwrap_or_default(),
        _ => T::default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbers_and_strings_are_both_accepted() {
        let zone: ZoneEntry = serde_json::from_str(
            r#"{"name": "Alpha", "code": 1, "level": 3, "datas": {"prix_libre": "5 000 €", "annee": 2023}}"#,
        )
        .unwrap();

        assert_eq!(zone.code(), Some("1"));
        assert_eq!(zone.level(), Some(3));
        assert_eq!(zone.datas.land_price(), Some(5000.0));
        assert_eq!(zone.datas.year(), Some(2023));
    }

    #[test]
    fn test_wrong_shapes_become_missing() {
        let payload: PagePayload = serde_json::from_str(
            r#"{"geodatas": [
                {"datas": {"not": "a list"}},
                {"datas": [{"name": ["x"], "code": null, "datas": "oops"}, 42]},
                {"other": true}
            ]}"#,
        )
        .unwrap();

        let zones: Vec<_> = payload.zones().collect();
        assert_eq!(zones.len(), 1);
        assert_eq!(zones[0].name(), None);
        assert_eq!(zones[0].code(), None);
        assert_eq!(zones[0].datas.land_price(), None);
    }

    #[test]
    fn test_zones_at_level_filters_subregions() {
        let payload: PagePayload = serde_json::from_str(
            r#"{"geodatas": [
                {"datas": [{"name": "Dept", "level": 2}, {"name": "Bocage", "level": 3}]},
                {"datas": [{"name": "Plaine", "level": 3}]}
            ]}"#,
        )
        .unwrap();

        let names: Vec<_> = payload.zones_at_level(3).filter_map(|z| z.name()).collect();
        assert_eq!(names, vec!["Bocage", "Plaine"]);
    }

    #[test]
    fn test_missing_geodatas_is_empty() {
        let payload: PagePayload = serde_json::from_str(r#"{"title": "x"}"#).unwrap();
        assert_eq!(payload.zones().count(), 0);
    }
}
