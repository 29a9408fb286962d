use serde::Serialize;

/// 土地价格记录，以 INSEE 代码为键
#[derive(Debug, Clone, PartialEq)]
pub struct LandRecord {
    pub insee_code: String,
    pub department_code: String,
    pub department_name: String,
    pub commune_name: String,
    pub subregion_name: String,
    pub subregion_code: String,
    /// 欧元/公顷
    pub price_per_ha: Option<f64>,
    pub year: Option<i64>,
    pub sales_count: Option<i64>,
    pub source_url: String,
}

/// 森林价格记录
///
/// 一条森林公社条目可能对应多个 INSEE 代码，此时同一记录会挂到每一个代码下。
#[derive(Debug, Clone, PartialEq)]
pub struct ForestRecord {
    pub forest_region: String,
    /// 欧元/公顷
    pub price_per_ha: Option<f64>,
    pub year: Option<i64>,
    pub sales_count: Option<i64>,
    pub source_url: String,
}

/// 无法关联到任何公社的森林条目（只计数，不入库）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnmatchedForestEntry {
    pub forest_region: String,
    pub commune_name: String,
    pub commune_code: Option<String>,
}

/// 合并后的公社行，缺失字段一律为 `None`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MergedRow {
    #[serde(rename = "code_insee")]
    pub insee_code: String,
    #[serde(rename = "departement_code")]
    pub department_code: Option<String>,
    #[serde(rename = "departement_nom")]
    pub department_name: Option<String>,
    #[serde(rename = "commune_nom")]
    pub commune_name: Option<String>,
    #[serde(rename = "petite_region_nom")]
    pub subregion_name: Option<String>,
    #[serde(rename = "petite_region_code")]
    pub subregion_code: Option<String>,
    #[serde(rename = "prix_terre_ha")]
    pub land_price_per_ha: Option<f64>,
    #[serde(rename = "annee_terre")]
    pub land_year: Option<i64>,
    #[serde(rename = "nombre_ventes_terre")]
    pub land_sales_count: Option<i64>,
    #[serde(rename = "region_forestiere")]
    pub forest_region: Option<String>,
    #[serde(rename = "prix_foret_ha")]
    pub forest_price_per_ha: Option<f64>,
    #[serde(rename = "annee_foret")]
    pub forest_year: Option<i64>,
    #[serde(rename = "nombre_ventes_foret")]
    pub forest_sales_count: Option<i64>,
    #[serde(rename = "source_terre_url")]
    pub land_source_url: Option<String>,
    #[serde(rename = "source_foret_url")]
    pub forest_source_url: Option<String>,
}

impl MergedRow {
    /// 由土地记录构建，森林字段置空
    pub fn from_land(land: &LandRecord) -> Self {
        Self {
            insee_code: land.insee_code.clone(),
            department_code: Some(land.department_code.clone()),
            department_name: Some(land.department_name.clone()),
            commune_name: Some(land.commune_name.clone()),
            subregion_name: Some(land.subregion_name.clone()),
            subregion_code: Some(land.subregion_code.clone()),
            land_price_per_ha: land.price_per_ha,
            land_year: land.year,
            land_sales_count: land.sales_count,
            forest_region: None,
            forest_price_per_ha: None,
            forest_year: None,
            forest_sales_count: None,
            land_source_url: Some(land.source_url.clone()),
            forest_source_url: None,
        }
    }

    /// 只有森林数据的行，土地字段置空
    pub fn forest_only(insee_code: &str, forest: &ForestRecord) -> Self {
        Self::empty(insee_code).with_forest(forest)
    }

    /// 覆盖森林字段
    pub fn with_forest(mut self, forest: &ForestRecord) -> Self {
        self.forest_region = Some(forest.forest_region.clone());
        self.forest_price_per_ha = forest.price_per_ha;
        self.forest_year = forest.year;
        self.forest_sales_count = forest.sales_count;
        self.forest_source_url = Some(forest.source_url.clone());
        self
    }

    fn empty(insee_code: &str) -> Self {
        Self {
            insee_code: insee_code.to_string(),
            department_code: None,
            department_name: None,
            commune_name: None,
            subregion_name: None,
            subregion_code: None,
            land_price_per_ha: None,
            land_year: None,
            land_sales_count: None,
            forest_region: None,
            forest_price_per_ha: None,
            forest_year: None,
            forest_sales_count: None,
            land_source_url: None,
            forest_source_url: None,
        }
    }
}
