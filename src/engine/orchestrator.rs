// ==========================================
// 销售日报监控系统 - 分析编排器
// ==========================================
// 职责: 编排 日度处理 → 组合汇总 → 日报生成 的单趟流水线
// 红线: 快照显式传入, 编排器自身无可变状态, 并发重入安全
// ==========================================

use crate::config::EngineConfig;
use crate::domain::summary::PortfolioSummary;
use crate::engine::aggregate::PortfolioAggregator;
use crate::engine::daily::DailyProcessor;
use crate::engine::insight::InsightComposer;
use crate::engine::rules::RuleEngine;
use crate::importer::SalesDataset;
use serde::{Deserialize, Serialize};
use tracing::instrument;

// ==========================================
// AnalysisReport - 分析结果
// ==========================================

/// 一次完整分析的产出: 结构化汇总 + 日报全文
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub summary: PortfolioSummary,
    pub insight: String,
}

// ==========================================
// AnalysisOrchestrator - 分析编排器
// ==========================================
pub struct AnalysisOrchestrator {
    processor: DailyProcessor,
    aggregator: PortfolioAggregator,
    composer: InsightComposer,
}

impl Default for AnalysisOrchestrator {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalysisOrchestrator {
    /// 以缺省配置构造
    pub fn new() -> Self {
        Self::with_config(&EngineConfig::default())
    }

    /// 以覆写配置构造
    pub fn with_config(config: &EngineConfig) -> Self {
        Self {
            processor: DailyProcessor::with_engine(RuleEngine::with_thresholds(
                config.thresholds.clone(),
            )),
            aggregator: PortfolioAggregator::with_caps(config.caps.clone()),
            composer: InsightComposer::new(),
        }
    }

    /// 执行一次完整分析
    ///
    /// 对同一快照重复调用, 汇总与日报逐字节相同
    #[instrument(skip(self, dataset), fields(snapshot = %dataset.snapshot_id(), rows = dataset.len()))]
    pub fn run(&self, dataset: &SalesDataset) -> AnalysisReport {
        // 1. 日度处理: 选最新交易日, 逐行评估
        let evaluated = self.processor.process(dataset);

        // 2. 组合汇总
        let summary = self.aggregator.aggregate(&evaluated);

        // 3. 生成日报
        let insight = self.composer.compose(&summary);

        tracing::info!(
            date = %summary.date,
            status = %summary.overall_status,
            rows = summary.total_rows,
            critical = summary.critical_count,
            warning = summary.warning_count,
            "分析完成"
        );

        AnalysisReport { summary, insight }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::record::SalesRecord;
    use crate::domain::types::RecordStatus;
    use chrono::NaiveDate;

    fn record(delta_vs_target: f64) -> SalesRecord {
        SalesRecord {
            date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            region: "Jakarta".to_string(),
            product: "Electronics".to_string(),
            total_sales: 8000.0,
            target_daily: 10000.0,
            delta_vs_target,
            delta_vs_yesterday: -2.0,
            avg_7d_sales: 8000.0,
            day_name: "Friday".to_string(),
            is_weekend: false,
        }
    }

    #[test]
    fn test_run_produces_summary_and_insight() {
        let dataset = SalesDataset::from_records(vec![record(-20.0)]);
        let report = AnalysisOrchestrator::new().run(&dataset);

        assert_eq!(report.summary.overall_status, RecordStatus::Critical);
        assert!(report.insight.contains("LAPORAN PENJUALAN HARIAN"));
    }

    #[test]
    fn test_run_is_idempotent() {
        let dataset = SalesDataset::from_records(vec![record(-20.0), record(3.0)]);
        let orchestrator = AnalysisOrchestrator::new();

        let first = orchestrator.run(&dataset);
        let second = orchestrator.run(&dataset);

        assert_eq!(first.summary, second.summary);
        assert_eq!(first.insight, second.insight);
    }
}
