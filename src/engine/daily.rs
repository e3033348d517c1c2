// ==========================================
// 销售日报监控系统 - 日度处理引擎
// ==========================================
// 职责: 选取最新交易日的全部记录并逐行评估
// 输入: 数据集快照
// 输出: 评估结果表 (保持输入顺序)
// ==========================================

use crate::domain::record::EvaluatedRecord;
use crate::engine::rules::RuleEngine;
use crate::importer::SalesDataset;
use tracing::instrument;

// ==========================================
// DailyProcessor - 日度处理引擎
// ==========================================
pub struct DailyProcessor {
    rule_engine: RuleEngine,
}

impl Default for DailyProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl DailyProcessor {
    pub fn new() -> Self {
        Self {
            rule_engine: RuleEngine::new(),
        }
    }

    pub fn with_engine(rule_engine: RuleEngine) -> Self {
        Self { rule_engine }
    }

    /// 处理最新交易日
    ///
    /// 选取 date 等于数据集最大日期的全部记录, 逐行应用规则引擎。
    /// 数据集为空时软失败: 返回空表, 仅记录警告, 不报错
    #[instrument(skip(self, dataset), fields(snapshot = %dataset.snapshot_id(), rows = dataset.len()))]
    pub fn process(&self, dataset: &SalesDataset) -> Vec<EvaluatedRecord> {
        let Some(latest) = dataset.latest_date() else {
            tracing::warn!("数据集为空, 返回空结果");
            return Vec::new();
        };

        let results: Vec<EvaluatedRecord> = dataset
            .records()
            .iter()
            .filter(|r| r.date == latest)
            .map(|r| self.rule_engine.evaluate_record(r))
            .collect();

        tracing::debug!(latest = %latest, evaluated = results.len(), "日度评估完成");
        results
    }
}
