use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 页面抓取错误
    #[error("抓取错误: {0}")]
    Fetch(#[from] FetchError),
    /// 页面数据解析错误
    #[error("解析错误: {0}")]
    Payload(#[from] PayloadError),
    /// 数据库存储错误
    #[error("存储错误: {0}")]
    Storage(#[from] StorageError),
    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
    /// 查询参数错误
    #[error("查询错误: {0}")]
    Lookup(#[from] LookupError),
}

/// 页面抓取错误
#[derive(Debug, Error)]
pub enum FetchError {
    /// 可重试错误（超时、连接失败、5xx）在用尽重试次数后放弃
    #[error("重试 {attempts} 次后仍无法获取 {url}: {reason}")]
    RetriesExhausted {
        url: String,
        attempts: u32,
        reason: String,
    },
    /// 不可重试的 HTTP 状态码
    #[error("HTTP {status} ({url})")]
    HttpStatus { url: String, status: u16 },
    /// 不可重试的请求失败
    #[error("请求 {url} 失败: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    /// 构建 HTTP 客户端失败
    #[error("无法创建 HTTP 客户端: {0}")]
    ClientBuild(#[source] reqwest::Error),
}

impl FetchError {
    /// 出错的 URL（客户端构建错误没有 URL）
    pub fn url(&self) -> Option<&str> {
        match self {
            FetchError::RetriesExhausted { url, .. }
            | FetchError::HttpStatus { url, .. }
            | FetchError::Request { url, .. } => Some(url),
            FetchError::ClientBuild(_) => None,
        }
    }
}

/// 页面数据解析错误
#[derive(Debug, Error)]
pub enum PayloadError {
    /// 页面中没有可用的 `var page = {...};` 数据
    #[error("页面中没有可用的数据: {url}")]
    Unusable { url: String },
}

/// 数据库存储错误
#[derive(Debug, Error)]
pub enum StorageError {
    /// SQLite 操作失败
    #[error("SQLite 操作失败: {0}")]
    Sqlite(#[from] rusqlite::Error),
    /// 文件操作失败
    #[error("文件操作失败 ({path}): {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// 数据库文件不存在
    #[error("数据库文件不存在: {path}")]
    DatabaseMissing { path: String },
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 环境变量解析失败
    #[error("环境变量 {var_name} 解析失败: 值 '{value}' 无法转换为 {expected_type}")]
    EnvVarParseFailed {
        var_name: String,
        value: String,
        expected_type: String,
    },
    /// 读取配置文件失败
    #[error("读取配置文件失败 ({path}): {source}")]
    FileReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// TOML 解析失败
    #[error("TOML解析失败 ({path}): {source}")]
    TomlParseFailed {
        path: String,
        #[source]
        source: toml::de::Error,
    },
    /// 站点地址无效
    #[error("站点地址无效 '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

/// 查询参数错误
#[derive(Debug, Error)]
pub enum LookupError {
    /// INSEE 代码必须是 5 位数字
    #[error("INSEE 代码无效 (必须是5位数字): '{code}'")]
    InvalidInseeCode { code: String },
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建页面数据不可用错误
    pub fn payload_unusable(url: impl Into<String>) -> Self {
        AppError::Payload(PayloadError::Unusable { url: url.into() })
    }
}

impl StorageError {
    /// 创建文件操作错误
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        StorageError::Io {
            path: path.into(),
            source,
        }
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
