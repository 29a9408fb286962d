//! SQLite 入库
//!
//! 每次运行都整体替换数据库文件（不是增量更新）：先在临时文件中建库，
//! 事务提交、索引建完后再改名覆盖目标文件。

use crate::error::StorageError;
use crate::models::MergedRow;
use chrono::Utc;
use rusqlite::{params, Connection};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const SCHEMA: &str = r#"
CREATE TABLE safer_prices (
    code_insee TEXT PRIMARY KEY,
    departement_code TEXT,
    departement_nom TEXT,
    commune_nom TEXT,
    petite_region_nom TEXT,
    petite_region_code TEXT,
    prix_terre_ha REAL,
    annee_terre INTEGER,
    nombre_ventes_terre INTEGER,
    region_forestiere TEXT,
    prix_foret_ha REAL,
    annee_foret INTEGER,
    nombre_ventes_foret INTEGER,
    source_terre_url TEXT,
    source_foret_url TEXT,
    created_at TEXT NOT NULL
);

CREATE TABLE meta (
    cle TEXT PRIMARY KEY,
    valeur TEXT NOT NULL
);
"#;

const INDEXES: &str = r#"
CREATE INDEX idx_safer_depart_commune ON safer_prices(departement_nom, commune_nom);
CREATE INDEX idx_safer_region_foret ON safer_prices(region_forestiere);
"#;

const INSERT_ROW: &str = r#"
INSERT INTO safer_prices (
    code_insee, departement_code, departement_nom, commune_nom,
    petite_region_nom, petite_region_code,
    prix_terre_ha, annee_terre, nombre_ventes_terre,
    region_forestiere, prix_foret_ha, annee_foret, nombre_ventes_foret,
    source_terre_url, source_foret_url, created_at
) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16)
"#;

/// 元数据键
pub const META_GENERATED_AT: &str = "generated_at";
pub const META_TOTAL_COMMUNES: &str = "total_communes";
pub const META_UNMATCHED_FOREST: &str = "communes_foret_sans_match";

/// 入库结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteSummary {
    pub rows_written: usize,
    pub generated_at: String,
}

/// SQLite 写入器
pub struct SqliteWriter {
    db_path: PathBuf,
}

impl SqliteWriter {
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
        }
    }

    /// 写入全部公社行和运行元数据，替换已有的数据库文件
    pub fn write(
        &self,
        rows: &[MergedRow],
        unmatched_forest: usize,
    ) -> Result<WriteSummary, StorageError> {
        let staging = self.staging_path();
        remove_if_exists(&staging)?;

        let generated_at = Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string();

        let written = build_database(&staging, rows, unmatched_forest, &generated_at)
            .and_then(|()| self.replace_target(&staging));
        if let Err(e) = written {
            // 失败时不留下临时文件，原有数据库保持不变
            let _ = std::fs::remove_file(&staging);
            return Err(e);
        }

        info!("💾 数据库已生成: {} ({} 行)", self.db_path.display(), rows.len());

        Ok(WriteSummary {
            rows_written: rows.len(),
            generated_at,
        })
    }

    /// 用临时库替换目标文件
    fn replace_target(&self, staging: &Path) -> Result<(), StorageError> {
        let io_err = |e: std::io::Error| StorageError::io(self.db_path.display().to_string(), e);

        match std::fs::rename(staging, &self.db_path) {
            Ok(()) => Ok(()),
            // Windows 上目标已存在时不能直接改名覆盖
            Err(_) if self.db_path.is_file() => {
                remove_if_exists(&self.db_path)?;
                std::fs::rename(staging, &self.db_path).map_err(io_err)
            }
            Err(e) => Err(io_err(e)),
        }
    }

    /// 同目录下的临时文件，保证最后的改名不跨文件系统
    fn staging_path(&self) -> PathBuf {
        let mut name = self.db_path.as_os_str().to_os_string();
        name.push(".tmp");
        PathBuf::from(name)
    }
}

/// 在临时文件中建表、写入全部行和元数据、建索引
fn build_database(
    staging: &Path,
    rows: &[MergedRow],
    unmatched_forest: usize,
    generated_at: &str,
) -> Result<(), StorageError> {
    let mut conn = Connection::open(staging)?;
    conn.execute_batch(SCHEMA)?;

    let tx = conn.transaction()?;
    {
        let mut insert = tx.prepare(INSERT_ROW)?;
        for row in rows {
            insert.execute(params![
                row.insee_code,
                row.department_code,
                row.department_name,
                row.commune_name,
                row.subregion_name,
                row.subregion_code,
                row.land_price_per_ha,
                row.land_year,
                row.land_sales_count,
                row.forest_region,
                row.forest_price_per_ha,
                row.forest_year,
                row.forest_sales_count,
                row.land_source_url,
                row.forest_source_url,
                generated_at,
            ])?;
        }

        let mut meta = tx.prepare("INSERT INTO meta (cle, valeur) VALUES (?1, ?2)")?;
        meta.execute(params![META_GENERATED_AT, generated_at])?;
        meta.execute(params![META_TOTAL_COMMUNES, rows.len().to_string()])?;
        meta.execute(params![META_UNMATCHED_FOREST, unmatched_forest.to_string()])?;
    }
    tx.commit()?;

    conn.execute_batch(INDEXES)?;
    debug!("已写入 {} 行到临时库 {}", rows.len(), staging.display());
    Ok(())
}

fn remove_if_exists(path: &Path) -> Result<(), StorageError> {
    match std::fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(StorageError::io(path.display().to_string(), e)),
    }
}
