//! 按 INSEE 代码查询已生成数据库中的价格
//!
//! 用法：`safer-lookup <code_insee>`

use anyhow::{bail, Context, Result};
use safer_prices::storage::PriceLookup;
use safer_prices::{logger, Config};
use std::path::Path;

fn main() -> Result<()> {
    logger::init();

    let Some(code) = std::env::args().nth(1) else {
        bail!("用法: safer-lookup <code_insee>");
    };

    let config = Config::load().context("无法加载配置")?;
    let lookup = PriceLookup::open(Path::new(&config.db_path))?;

    match lookup.find(&code)? {
        Some(prices) => println!("{}", serde_json::to_string_pretty(&prices)?),
        None => bail!("没有找到 INSEE 代码 {} 的 SAFER 数据", code.trim()),
    }

    Ok(())
}
