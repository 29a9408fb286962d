use crate::error::{AppResult, ConfigError};
use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

/// 程序配置文件
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 数据来源站点
    pub base_url: String,
    /// 输出的 SQLite 数据库路径
    pub db_path: String,
    /// 每个页面的最大尝试次数
    pub max_retries: u32,
    /// 重试等待基数（毫秒），第 n 次失败后等待 n 倍
    pub retry_base_delay_ms: u64,
    /// 单次请求超时（秒）
    pub request_timeout_secs: u64,
    pub user_agent: String,
    // --- 请求间隔（毫秒），减轻源站压力 ---
    pub subregion_pause_ms: u64,
    pub department_pause_ms: u64,
    pub forest_region_pause_ms: u64,
    /// 未匹配森林公社清单输出文件
    pub unmatched_report_path: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: "https://www.le-prix-des-terres.fr".to_string(),
            db_path: "safer_prices.db".to_string(),
            max_retries: 4,
            retry_base_delay_ms: 2000,
            request_timeout_secs: 30,
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36"
                .to_string(),
            subregion_pause_ms: 300,
            department_pause_ms: 500,
            forest_region_pause_ms: 500,
            unmatched_report_path: "foret_sans_match.txt".to_string(),
        }
    }
}

impl Config {
    /// 加载配置：默认值 → `SAFER_CONFIG` 指定的 TOML 文件 → 环境变量
    pub fn load() -> AppResult<Self> {
        let base = match std::env::var("SAFER_CONFIG") {
            Ok(path) => Self::from_file(Path::new(&path))?,
            Err(_) => Self::default(),
        };
        base.with_env_overrides()
    }

    /// 从 TOML 文件读取配置，缺省字段使用默认值
    pub fn from_file(path: &Path) -> AppResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::FileReadFailed {
            path: path.display().to_string(),
            source,
        })?;
        let config = toml::from_str(&content).map_err(|source| ConfigError::TomlParseFailed {
            path: path.display().to_string(),
            source,
        })?;
        Ok(config)
    }

    /// 用环境变量覆盖已有配置
    pub fn with_env_overrides(self) -> AppResult<Self> {
        Ok(Self {
            base_url: env_string("SAFER_BASE_URL").unwrap_or(self.base_url),
            db_path: env_string("SAFER_DB_PATH").unwrap_or(self.db_path),
            max_retries: env_parsed("SAFER_MAX_RETRIES", "u32")?.unwrap_or(self.max_retries),
            retry_base_delay_ms: env_parsed("SAFER_RETRY_BASE_DELAY_MS", "u64")?
                .unwrap_or(self.retry_base_delay_ms),
            request_timeout_secs: env_parsed("SAFER_REQUEST_TIMEOUT_SECS", "u64")?
                .unwrap_or(self.request_timeout_secs),
            user_agent: env_string("SAFER_USER_AGENT").unwrap_or(self.user_agent),
            subregion_pause_ms: env_parsed("SAFER_SUBREGION_PAUSE_MS", "u64")?
                .unwrap_or(self.subregion_pause_ms),
            department_pause_ms: env_parsed("SAFER_DEPARTMENT_PAUSE_MS", "u64")?
                .unwrap_or(self.department_pause_ms),
            forest_region_pause_ms: env_parsed("SAFER_FOREST_REGION_PAUSE_MS", "u64")?
                .unwrap_or(self.forest_region_pause_ms),
            unmatched_report_path: env_string("SAFER_UNMATCHED_REPORT")
                .unwrap_or(self.unmatched_report_path),
        })
    }

    pub fn retry_base_delay(&self) -> Duration {
        Duration::from_millis(self.retry_base_delay_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

fn env_string(var_name: &str) -> Option<String> {
    std::env::var(var_name).ok().filter(|v| !v.trim().is_empty())
}

fn env_parsed<T: FromStr>(var_name: &str, expected_type: &str) -> Result<Option<T>, ConfigError> {
    match env_string(var_name) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::EnvVarParseFailed {
                var_name: var_name.to_string(),
                value,
                expected_type: expected_type.to_string(),
            }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_matches_source_courtesy_values() {
        let config = Config::default();
        assert_eq!(config.max_retries, 4);
        assert_eq!(config.subregion_pause_ms, 300);
        assert_eq!(config.department_pause_ms, 500);
        assert_eq!(config.retry_base_delay(), Duration::from_secs(2));
    }

    #[test]
    fn test_from_file_keeps_defaults_for_missing_fields() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "db_path = \"out/prix.db\"\nmax_retries = 2").unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.db_path, "out/prix.db");
        assert_eq!(config.max_retries, 2);
        assert_eq!(config.base_url, Config::default().base_url);
    }

    #[test]
    fn test_from_file_rejects_malformed_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "max_retries = \"beaucoup").unwrap();

        let err = Config::from_file(file.path()).unwrap_err();
        assert!(matches!(
            err,
            crate::error::AppError::Config(ConfigError::TomlParseFailed { .. })
        ));
    }
}
