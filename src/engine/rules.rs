// ==========================================
// 销售日报监控系统 - 规则评估引擎
// ==========================================
// 职责: 对单行销售记录应用 R1-R4 规则
// 输入: 标准化销售记录
// 输出: 状态 + 违规列表 + 调整说明
// ==========================================
// 规则顺序: R1 → R2 → R3 → 状态归并 → R4
// 红线: 所有阈值为严格小于比较; 周末降级不改违规列表
// ==========================================

use crate::config::RuleThresholds;
use crate::domain::record::{EvaluatedRecord, SalesRecord, Violation};
use crate::domain::types::{RecordStatus, Severity};

/// 周末降级的固定说明文案
pub const WEEKEND_ADJUSTMENT_NOTE: &str = "Downgraded from CRITICAL due to weekend";

// ==========================================
// 评估结论 (Evaluation Outcome)
// ==========================================

/// 单行评估结论
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationOutcome {
    pub status: RecordStatus,
    /// 插入顺序 = 规则评估顺序 (R1, R2, R3)
    pub violations: Vec<Violation>,
    pub adjustment_note: Option<String>,
}

// ==========================================
// RuleEngine - 规则评估引擎
// ==========================================
pub struct RuleEngine {
    thresholds: RuleThresholds,
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleEngine {
    /// 以固定规则集的标准阈值构造
    pub fn new() -> Self {
        Self {
            thresholds: RuleThresholds::default(),
        }
    }

    /// 以覆写阈值构造
    pub fn with_thresholds(thresholds: RuleThresholds) -> Self {
        Self { thresholds }
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 对单行记录应用全部规则
    ///
    /// # 规则
    /// - R1 目标达成: delta_vs_target
    /// - R2 环比: delta_vs_yesterday
    /// - R3 趋势: total_sales / avg_7d_sales (仅当均值 > 0)
    /// - 状态归并: 违规最高严重度
    /// - R4 周末调整: 归并后 CRITICAL 且周末 → 降为 WARNING
    pub fn evaluate(&self, record: &SalesRecord) -> EvaluationOutcome {
        let t = &self.thresholds;
        let mut violations = Vec::new();

        // R1: 目标达成
        let delta_target = record.delta_vs_target;
        if delta_target < t.target_critical_pct {
            violations.push(Violation::new(
                "R1.3",
                Severity::Critical,
                format!("Missed target by {:.1}%", delta_target.abs()),
            ));
        } else if delta_target < t.target_warning_pct {
            violations.push(Violation::new(
                "R1.2",
                Severity::Warning,
                format!("Below target by {:.1}%", delta_target.abs()),
            ));
        }

        // R2: 环比表现
        let delta_yesterday = record.delta_vs_yesterday;
        if delta_yesterday < t.dod_critical_pct {
            violations.push(Violation::new(
                "R2.3",
                Severity::Critical,
                format!("Dropped {:.1}% vs yesterday", delta_yesterday.abs()),
            ));
        } else if delta_yesterday < t.dod_warning_pct {
            violations.push(Violation::new(
                "R2.2",
                Severity::Warning,
                format!("Down {:.1}% vs yesterday", delta_yesterday.abs()),
            ));
        }

        // R3: 趋势异常 (仅当 7 日均值为正; 均值缺省为当日销售额,
        // 此时比值恰为 1.0, 不触发)
        if record.avg_7d_sales > 0.0 {
            let trend_ratio = record.total_sales / record.avg_7d_sales;
            if trend_ratio < t.trend_critical_ratio {
                violations.push(Violation::new(
                    "R3.3",
                    Severity::Critical,
                    format!("Sales {:.1}% below 7-day average", (1.0 - trend_ratio) * 100.0),
                ));
            } else if trend_ratio < t.trend_warning_ratio {
                violations.push(Violation::new(
                    "R3.2",
                    Severity::Warning,
                    format!("Sales {:.1}% below 7-day average", (1.0 - trend_ratio) * 100.0),
                ));
            }
        }

        // 状态归并: 违规最高严重度, 与规则顺序无关
        let max_severity = violations.iter().map(|v| v.severity).max();
        let mut status = RecordStatus::from_severity(max_severity);

        // R4: 周末调整 (归并之后执行)
        // 只降状态, 违规列表保持原样: 降级后的记录仍携带 CRITICAL 违规
        let mut adjustment_note = None;
        if record.is_weekend && status == RecordStatus::Critical {
            status = RecordStatus::Warning;
            adjustment_note = Some(WEEKEND_ADJUSTMENT_NOTE.to_string());
        }

        EvaluationOutcome {
            status,
            violations,
            adjustment_note,
        }
    }

    /// 评估并装配为评估结果记录
    pub fn evaluate_record(&self, record: &SalesRecord) -> EvaluatedRecord {
        let outcome = self.evaluate(record);
        EvaluatedRecord {
            record: record.clone(),
            status: outcome.status,
            violations: outcome.violations,
            adjustment_note: outcome.adjustment_note,
        }
    }
}
