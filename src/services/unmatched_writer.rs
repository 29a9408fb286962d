//! 未匹配清单写入服务
//!
//! 只负责把无法关联的森林公社条目写成文本清单，不写入数据库

use crate::error::StorageError;
use crate::models::UnmatchedForestEntry;
use std::fs::File;
use std::io::{BufWriter, Write};
use tracing::debug;

/// 未匹配清单写入服务
pub struct UnmatchedWriter {
    report_path: String,
}

impl UnmatchedWriter {
    /// 使用指定文件路径创建
    pub fn with_path(path: impl Into<String>) -> Self {
        Self {
            report_path: path.into(),
        }
    }

    pub fn path(&self) -> &str {
        &self.report_path
    }

    /// 写入清单（覆盖上一次运行的内容）
    ///
    /// 每行：`森林区 | 公社名称 | 代码`
    pub fn write(&self, entries: &[UnmatchedForestEntry]) -> Result<(), StorageError> {
        debug!("写入未匹配清单: {} 条 → {}", entries.len(), self.report_path);

        let io_err = |e| StorageError::io(&self.report_path, e);
        let mut out = BufWriter::new(File::create(&self.report_path).map_err(io_err)?);

        for entry in entries {
            writeln!(
                out,
                "{} | {} | {}",
                entry.forest_region,
                entry.commune_name,
                entry.commune_code.as_deref().unwrap_or("-")
            )
            .map_err(io_err)?;
        }
        out.flush().map_err(io_err)?;

        Ok(())
    }
}
