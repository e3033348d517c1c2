// ==========================================
// 销售日报监控系统 - 主入口
// ==========================================
// 系统定位: 决策支持系统
// 运行方式: 一次性分析当前数据文件并输出日报
// ==========================================

use daily_sales_agent::{
    get_default_data_path, DashboardApi, EngineConfig, VERSION,
};
use std::path::PathBuf;

fn main() {
    // 初始化日志系统
    daily_sales_agent::logging::init();

    tracing::info!("==================================================");
    tracing::info!("销售日报监控系统 - 决策支持系统");
    tracing::info!("系统版本: {}", VERSION);
    tracing::info!("==================================================");

    // 数据文件: 第一个命令行参数, 缺省为标准数据位置
    let data_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(get_default_data_path);
    tracing::info!("使用数据文件: {}", data_path.display());

    // 规则配置: 存在覆写文件时加载, 否则使用缺省契约
    let config = EngineConfig::load_or_default(
        EngineConfig::default_config_path().as_deref(),
    );

    let api = DashboardApi::with_config(&config);
    match api.load_and_analyze(&data_path) {
        Ok(report) => {
            let metrics = api.metrics_view(&report.summary);
            tracing::info!(
                date = %metrics.date,
                status = %metrics.overall_status,
                rows = report.summary.total_rows,
                critical = metrics.critical_count,
                warning = metrics.warning_count,
                ok = metrics.ok_count,
                "分析完成"
            );

            // 日报全文输出到标准输出, 供表示层或人工直接消费
            println!("{}", report.insight);
        }
        Err(e) => {
            tracing::error!("分析失败: {}", e);
            std::process::exit(1);
        }
    }
}
