//! 价格查询（读取已生成的数据库）
//!
//! 按 INSEE 代码返回某个公社的土地和森林价格，附带每平方米价格。

use crate::error::{AppResult, LookupError, StorageError};
use crate::storage::sqlite_writer::{META_GENERATED_AT, META_TOTAL_COMMUNES, META_UNMATCHED_FOREST};
use rusqlite::{Connection, OpenFlags, OptionalExtension};
use serde::Serialize;
use std::path::Path;
use tracing::debug;

const SQUARE_METRES_PER_HECTARE: f64 = 10_000.0;

/// 公社基本信息
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommuneInfo {
    pub nom: Option<String>,
    pub departement_code: Option<String>,
    pub departement_nom: Option<String>,
}

/// 一类价格（土地或森林）
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceBlock {
    pub prix_ha: Option<f64>,
    pub prix_m2: Option<f64>,
    pub annee: Option<i64>,
    pub nombre_ventes: Option<i64>,
    pub source_url: Option<String>,
}

impl PriceBlock {
    fn new(
        prix_ha: Option<f64>,
        annee: Option<i64>,
        nombre_ventes: Option<i64>,
        source_url: Option<String>,
    ) -> Self {
        Self {
            prix_ha,
            prix_m2: per_square_metre(prix_ha),
            annee,
            nombre_ventes,
            source_url,
        }
    }
}

/// 查询结果
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommunePrices {
    pub code_insee: String,
    pub commune: CommuneInfo,
    pub prix_terre: PriceBlock,
    pub prix_foret: PriceBlock,
}

/// 运行元数据
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunMeta {
    pub generated_at: Option<String>,
    pub total_communes: Option<u64>,
    pub communes_foret_sans_match: Option<u64>,
}

/// 每平方米价格；每公顷价格缺失或为零时没有意义
pub fn per_square_metre(price_per_ha: Option<f64>) -> Option<f64> {
    price_per_ha
        .filter(|p| *p != 0.0)
        .map(|p| p / SQUARE_METRES_PER_HECTARE)
}

/// 校验 INSEE 代码：去除首尾空白后必须是 5 位数字
pub fn validate_insee_code(code: &str) -> Result<&str, LookupError> {
    let trimmed = code.trim();
    if trimmed.len() == 5 && trimmed.bytes().all(|b| b.is_ascii_digit()) {
        Ok(trimmed)
    } else {
        Err(LookupError::InvalidInseeCode {
            code: code.to_string(),
        })
    }
}

/// 只读价格查询
pub struct PriceLookup {
    conn: Connection,
}

impl PriceLookup {
    /// 以只读方式打开数据库
    pub fn open(db_path: &Path) -> AppResult<Self> {
        if !db_path.exists() {
            return Err(StorageError::DatabaseMissing {
                path: db_path.display().to_string(),
            }
            .into());
        }

        let conn = Connection::open_with_flags(db_path, OpenFlags::SQLITE_OPEN_READ_ONLY)
            .map_err(StorageError::from)?;
        Ok(Self { conn })
    }

    /// 按 INSEE 代码查询
    pub fn find(&self, code: &str) -> AppResult<Option<CommunePrices>> {
        let code = validate_insee_code(code)?;
        debug!("查询 INSEE 代码: {}", code);

        let found = self
            .conn
            .query_row(
                r#"
                SELECT code_insee, departement_code, departement_nom, commune_nom,
                       prix_terre_ha, annee_terre, nombre_ventes_terre,
                       prix_foret_ha, annee_foret, nombre_ventes_foret,
                       source_terre_url, source_foret_url
                FROM safer_prices
                WHERE code_insee = ?1
                "#,
                [code],
                |row| {
                    Ok(CommunePrices {
                        code_insee: row.get(0)?,
                        commune: CommuneInfo {
                            departement_code: row.get(1)?,
                            departement_nom: row.get(2)?,
                            nom: row.get(3)?,
                        },
                        prix_terre: PriceBlock::new(row.get(4)?, row.get(5)?, row.get(6)?, row.get(10)?),
                        prix_foret: PriceBlock::new(row.get(7)?, row.get(8)?, row.get(9)?, row.get(11)?),
                    })
                },
            )
            .optional()
            .map_err(StorageError::from)?;

        Ok(found)
    }

    /// 读取运行元数据
    pub fn run_meta(&self) -> AppResult<RunMeta> {
        let value = |key: &str| -> Result<Option<String>, StorageError> {
            Ok(self
                .conn
                .query_row("SELECT valeur FROM meta WHERE cle = ?1", [key], |r| r.get(0))
                .optional()?)
        };

        Ok(RunMeta {
            generated_at: value(META_GENERATED_AT)?,
            total_communes: value(META_TOTAL_COMMUNES)?.and_then(|v| v.parse().ok()),
            communes_foret_sans_match: value(META_UNMATCHED_FOREST)?.and_then(|v| v.parse().ok()),
        })
    }
}
