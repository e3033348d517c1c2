// ==========================================
// 销售日报监控系统 - 驾驶舱 API
// ==========================================
// 职责: 面向外部表示层的聚合查询门面
// 架构: API 层 → 引擎层 (AnalysisOrchestrator)
// 边界: 货币/百分比展示格式化、HTML 渲染、文件上传备份
//       均由外部表示层负责, 此处只输出结构化数据
// ==========================================

use crate::api::error::ApiResult;
use crate::config::EngineConfig;
use crate::domain::summary::PortfolioSummary;
use crate::domain::types::{RecordStatus, Severity};
use crate::engine::orchestrator::{AnalysisOrchestrator, AnalysisReport};
use crate::importer::{ImportError, SalesDataset};
use serde::{Deserialize, Serialize};
use std::path::Path;

// ==========================================
// 视图对象
// ==========================================

/// 指标视图: 表示层 /api/metrics 形态
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsView {
    pub date: String,
    pub overall_status: RecordStatus,
    pub total_sales: f64,
    pub total_target: f64,
    pub achievement: f64,
    pub critical_count: usize,
    pub warning_count: usize,
    pub ok_count: usize,
}

/// 预警条目视图: 危急清单 + 警告清单合并后的扁平行
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertItem {
    pub region: String,
    pub product: String,
    pub severity: Severity,
    pub total_sales: f64,
    pub target_daily: f64,
    pub delta_vs_target: f64,
    pub delta_vs_yesterday: f64,
    /// 首条违规的描述, 无违规时为通用兜底文案
    pub issue_description: String,
}

// ==========================================
// DashboardApi - 驾驶舱 API
// ==========================================

/// 驾驶舱API
///
/// 职责:
/// 1. 加载数据快照并执行完整分析
/// 2. 汇总的表示层投影 (指标视图 / 预警清单)
pub struct DashboardApi {
    orchestrator: AnalysisOrchestrator,
}

impl Default for DashboardApi {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardApi {
    /// 以缺省配置构造
    pub fn new() -> Self {
        Self::with_config(&EngineConfig::default())
    }

    /// 以覆写配置构造
    pub fn with_config(config: &EngineConfig) -> Self {
        Self {
            orchestrator: AnalysisOrchestrator::with_config(config),
        }
    }

    // ==========================================
    // 分析入口
    // ==========================================

    /// 加载数据文件并执行完整分析
    ///
    /// # 错误语义
    /// - 数据文件不存在 → 软失败: 按空数据集分析, 不报错
    /// - 格式不支持 / 记录级验证失败 → Err(ApiError)
    pub fn load_and_analyze(&self, data_path: &Path) -> ApiResult<AnalysisReport> {
        let dataset = match SalesDataset::load(data_path) {
            Ok(dataset) => dataset,
            Err(ImportError::FileNotFound(path)) => {
                tracing::warn!(path = %path, "数据文件不存在, 按空数据集分析");
                SalesDataset::empty()
            }
            Err(e) => return Err(e.into()),
        };

        Ok(self.analyze(&dataset))
    }

    /// 对已加载快照执行完整分析 (纯函数, 可并发重入)
    pub fn analyze(&self, dataset: &SalesDataset) -> AnalysisReport {
        self.orchestrator.run(dataset)
    }

    // ==========================================
    // 表示层投影
    // ==========================================

    /// 指标视图
    pub fn metrics_view(&self, summary: &PortfolioSummary) -> MetricsView {
        MetricsView {
            date: summary.date.clone(),
            overall_status: summary.overall_status,
            total_sales: summary.total_sales,
            total_target: summary.total_target,
            achievement: summary.portfolio_achievement,
            critical_count: summary.critical_count,
            warning_count: summary.warning_count,
            ok_count: summary.ok_count,
        }
    }

    /// 预警清单: 危急条目在前, 警告条目在后
    pub fn alert_list(&self, summary: &PortfolioSummary) -> Vec<AlertItem> {
        let mut alerts = Vec::with_capacity(
            summary.critical_issues.len() + summary.warning_issues.len(),
        );

        for (issues, severity) in [
            (&summary.critical_issues, Severity::Critical),
            (&summary.warning_issues, Severity::Warning),
        ] {
            for issue in issues {
                alerts.push(AlertItem {
                    region: issue.record.region.clone(),
                    product: issue.record.product.clone(),
                    severity,
                    total_sales: issue.record.total_sales,
                    target_daily: issue.record.target_daily,
                    delta_vs_target: issue.record.delta_vs_target,
                    delta_vs_yesterday: issue.record.delta_vs_yesterday,
                    issue_description: issue.primary_issue_message().to_string(),
                });
            }
        }

        alerts
    }
}
