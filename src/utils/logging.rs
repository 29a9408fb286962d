//! 日志工具模块
//!
//! 提供运行进度和统计信息的输出辅助函数

use crate::config::Config;
use crate::models::Department;
use crate::orchestrator::RunSummary;
use tracing::info;

/// 记录程序启动信息
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - SAFER 土地价格数据库构建");
    info!("🌐 数据来源: {}", config.base_url);
    info!("💾 输出文件: {}", config.db_path);
    info!("{}", "=".repeat(60));
}

/// 阶段标题
pub fn log_phase_banner(title: &str) {
    info!("\n================ {} ================", title);
}

/// 记录省份开始信息
///
/// # 参数
/// - `idx`: 省份序号（从1开始）
/// - `total`: 省份总数
/// - `department`: 省份
pub fn log_department_start(idx: usize, total: usize, department: &Department) {
    info!("[{:02}/{}] {} - {}", idx, total, department.code, department.name);
}

/// 打印最终统计信息
pub fn print_final_stats(summary: &RunSummary) {
    let secs = summary.elapsed.as_secs();

    info!("\n{}", "=".repeat(60));
    info!("📊 BILAN");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("公社总数: {}", summary.total_communes);
    info!("✅ 有土地价格: {}", summary.with_land_price);
    info!("🌲 有森林价格: {}", summary.with_forest_price);
    info!("❓ 森林条目未匹配: {}", summary.unmatched_forest);
    info!("🔀 森林条目歧义匹配: {}", summary.ambiguous_matches);
    if summary.departments_failed + summary.subregions_failed + summary.forest_regions_failed > 0 {
        info!(
            "❌ 失败: 省份 {} / 小区域 {} / 森林区 {}",
            summary.departments_failed, summary.subregions_failed, summary.forest_regions_failed
        );
    }
    if summary.departments_without_subregions > 0 {
        info!("⚠️ 没有小区域的省份: {}", summary.departments_without_subregions);
    }
    info!("💾 数据库: {}", summary.db_path);
    info!("⏱️ 总耗时: {} min {} s", secs / 60, secs % 60);
    info!("{}", "=".repeat(60));
}
