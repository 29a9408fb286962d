use anyhow::{Context, Result};
use safer_prices::utils::shutdown::until_interrupted;
use safer_prices::{logger, App, Config};
use tracing::{error, warn};

#[tokio::main]
async fn main() {
    // 初始化日志
    logger::init();

    match run().await {
        Ok(true) => {}
        Ok(false) => std::process::exit(130),
        Err(e) => {
            error!("\n[错误] {:#}", e);
            std::process::exit(1);
        }
    }
}

/// 正常完成返回 `true`，用户中断返回 `false`
async fn run() -> Result<bool> {
    // 加载配置
    let config = Config::load().context("无法加载配置")?;

    let app = App::initialize(config).context("初始化失败")?;

    match until_interrupted(app.run(), tokio::signal::ctrl_c()).await {
        Some(result) => {
            result.context("严重错误")?;
            Ok(true)
        }
        None => {
            warn!("\n用户中断，数据库未改动。");
            Ok(false)
        }
    }
}
