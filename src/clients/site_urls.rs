//! 源站 URL 构造
//!
//! - 土地：`{base}/carte/terre/{大区}/{省份}/[{小区域}/]`
//! - 森林：`{base}/carte/foret/[{森林区}/]`

use crate::error::ConfigError;
use crate::models::Department;
use reqwest::Url;

/// 源站 URL 构造器
#[derive(Debug, Clone)]
pub struct SiteUrls {
    base: Url,
}

impl SiteUrls {
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason,
        };

        let base = Url::parse(base_url).map_err(|e| invalid(e.to_string()))?;
        if base.cannot_be_a_base() {
            return Err(invalid("cannot be a base".to_string()));
        }
        Ok(Self { base })
    }

    /// 省份页面，或省份下某个小区域的页面
    pub fn land(&self, department: &Department, subregion: Option<&str>) -> String {
        let mut segments = vec!["carte", "terre", department.region_url, department.name_url];
        segments.extend(subregion);
        self.build(&segments)
    }

    /// 森林区列表页面，或某个森林区的页面
    pub fn forest(&self, region: Option<&str>) -> String {
        let mut segments = vec!["carte", "foret"];
        segments.extend(region);
        self.build(&segments)
    }

    /// 逐段百分号编码，并以 `/` 结尾
    fn build(&self, segments: &[&str]) -> String {
        let mut url = self.base.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments).push("");
        }
        url.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn urls() -> SiteUrls {
        SiteUrls::new("https://www.le-prix-des-terres.fr").unwrap()
    }

    #[test]
    fn test_land_urls() {
        let ain = Department::by_code("01").unwrap();
        assert_eq!(
            urls().land(ain, None),
            "https://www.le-prix-des-terres.fr/carte/terre/Auvergne-Rh%C3%B4ne-Alpes/Ain/"
        );
        assert_eq!(
            urls().land(ain, Some("Bresse")),
            "https://www.le-prix-des-terres.fr/carte/terre/Auvergne-Rh%C3%B4ne-Alpes/Ain/Bresse/"
        );
    }

    #[test]
    fn test_forest_urls_encode_spaces() {
        assert_eq!(
            urls().forest(None),
            "https://www.le-prix-des-terres.fr/carte/foret/"
        );
        assert_eq!(
            urls().forest(Some("Landes de Gascogne")),
            "https://www.le-prix-des-terres.fr/carte/foret/Landes%20de%20Gascogne/"
        );
    }

    #[test]
    fn test_segment_slash_is_encoded() {
        let url = urls().forest(Some("Vosges / Alsace"));
        assert!(url.ends_with("/carte/foret/Vosges%20%2F%20Alsace/"), "{}", url);
    }

    #[test]
    fn test_invalid_base() {
        assert!(SiteUrls::new("not a url").is_err());
        assert!(SiteUrls::new("mailto:safer@example.org").is_err());
    }
}
