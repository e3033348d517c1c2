// ==========================================
// 销售日报监控系统 - 组合汇总引擎
// ==========================================
// 职责: 单日评估结果表 → 组合汇总
// 输入: 评估结果表
// 输出: PortfolioSummary (计数/金额/达成率/分级清单)
// ==========================================

use crate::config::ListCaps;
use crate::domain::record::EvaluatedRecord;
use crate::domain::summary::PortfolioSummary;
use crate::domain::types::RecordStatus;
use chrono::Local;
use std::cmp::Ordering;
use tracing::instrument;

// ==========================================
// PortfolioAggregator - 组合汇总引擎
// ==========================================
pub struct PortfolioAggregator {
    caps: ListCaps,
}

impl Default for PortfolioAggregator {
    fn default() -> Self {
        Self::new()
    }
}

impl PortfolioAggregator {
    pub fn new() -> Self {
        Self {
            caps: ListCaps::default(),
        }
    }

    pub fn with_caps(caps: ListCaps) -> Self {
        Self { caps }
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 汇总单日评估结果
    ///
    /// 空输入按定义返回空汇总: 当前日期/星期, 计数清零, 整体 OK
    #[instrument(skip(self, records), fields(count = records.len()))]
    pub fn aggregate(&self, records: &[EvaluatedRecord]) -> PortfolioSummary {
        let Some(first) = records.first() else {
            return self.empty_summary();
        };

        // 1. 状态计数
        let critical_count = records
            .iter()
            .filter(|r| r.status == RecordStatus::Critical)
            .count();
        let warning_count = records
            .iter()
            .filter(|r| r.status == RecordStatus::Warning)
            .count();
        let ok_count = records
            .iter()
            .filter(|r| r.status == RecordStatus::Ok)
            .count();

        // 2. 金额合计与达成率 (目标合计为 0 时定义为 0, 不抛除零)
        let total_sales: f64 = records.iter().map(|r| r.record.total_sales).sum();
        let total_target: f64 = records.iter().map(|r| r.record.target_daily).sum();
        let portfolio_achievement = if total_target > 0.0 {
            (total_sales / total_target) * 100.0
        } else {
            0.0
        };

        // 3. 组合级环比: 各行环比的算术平均
        let delta_vs_yesterday = records
            .iter()
            .map(|r| r.record.delta_vs_yesterday)
            .sum::<f64>()
            / records.len() as f64;

        // 4. 整体状态: 最高严重度归并
        let overall_status = records
            .iter()
            .map(|r| r.status)
            .max()
            .unwrap_or(RecordStatus::Ok);

        // 5. 分级清单
        let mut critical_issues: Vec<EvaluatedRecord> = records
            .iter()
            .filter(|r| r.status == RecordStatus::Critical)
            .cloned()
            .collect();
        sort_worst_first(&mut critical_issues);
        critical_issues.truncate(self.caps.critical_issues);

        let mut warning_issues: Vec<EvaluatedRecord> = records
            .iter()
            .filter(|r| r.status == RecordStatus::Warning)
            .cloned()
            .collect();
        sort_worst_first(&mut warning_issues);
        warning_issues.truncate(self.caps.warning_issues);

        let mut top_performers: Vec<EvaluatedRecord> = records
            .iter()
            .filter(|r| r.status == RecordStatus::Ok)
            .cloned()
            .collect();
        sort_best_first(&mut top_performers);
        top_performers.truncate(self.caps.top_performers);

        let flagged_items: Vec<EvaluatedRecord> = records
            .iter()
            .filter(|r| r.status != RecordStatus::Ok)
            .cloned()
            .collect();

        PortfolioSummary {
            date: first.record.date.format("%Y-%m-%d").to_string(),
            day_name: first.record.day_name.clone(),
            is_weekend: first.record.is_weekend,
            total_rows: records.len(),
            critical_count,
            warning_count,
            ok_count,
            total_sales,
            total_target,
            portfolio_achievement,
            delta_vs_yesterday,
            overall_status,
            critical_issues,
            warning_issues,
            top_performers,
            flagged_items,
        }
    }

    /// 空汇总: 以当前日期/星期作为兜底元信息
    fn empty_summary(&self) -> PortfolioSummary {
        let now = Local::now();
        PortfolioSummary {
            date: now.format("%Y-%m-%d").to_string(),
            day_name: now.format("%A").to_string(),
            is_weekend: false,
            total_rows: 0,
            critical_count: 0,
            warning_count: 0,
            ok_count: 0,
            total_sales: 0.0,
            total_target: 0.0,
            portfolio_achievement: 0.0,
            delta_vs_yesterday: 0.0,
            overall_status: RecordStatus::Ok,
            critical_issues: Vec::new(),
            warning_issues: Vec::new(),
            top_performers: Vec::new(),
            flagged_items: Vec::new(),
        }
    }
}

// ==========================================
// 排序辅助
// ==========================================
// 平局规则: delta_vs_target 相等时按 (region, product) 升序,
// 保证排序确定性

/// 升序: 最差 (delta_vs_target 最小) 在前
fn sort_worst_first(records: &mut [EvaluatedRecord]) {
    records.sort_by(|a, b| {
        a.record
            .delta_vs_target
            .partial_cmp(&b.record.delta_vs_target)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.record.region.cmp(&b.record.region))
            .then_with(|| a.record.product.cmp(&b.record.product))
    });
}

/// 降序: 最好 (delta_vs_target 最大) 在前
fn sort_best_first(records: &mut [EvaluatedRecord]) {
    records.sort_by(|a, b| {
        b.record
            .delta_vs_target
            .partial_cmp(&a.record.delta_vs_target)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.record.region.cmp(&b.record.region))
            .then_with(|| a.record.product.cmp(&b.record.product))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::record::SalesRecord;
    use chrono::NaiveDate;

    fn evaluated(
        region: &str,
        status: RecordStatus,
        delta_vs_target: f64,
        total_sales: f64,
        target_daily: f64,
    ) -> EvaluatedRecord {
        EvaluatedRecord {
            record: SalesRecord {
                date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
                region: region.to_string(),
                product: "Electronics".to_string(),
                total_sales,
                target_daily,
                delta_vs_target,
                delta_vs_yesterday: -4.0,
                avg_7d_sales: total_sales,
                day_name: "Friday".to_string(),
                is_weekend: false,
            },
            status,
            violations: vec![],
            adjustment_note: None,
        }
    }

    #[test]
    fn test_aggregate_counts_and_totals() {
        let records = vec![
            evaluated("Jakarta", RecordStatus::Critical, -20.0, 8000.0, 10000.0),
            evaluated("Bandung", RecordStatus::Warning, -5.0, 9500.0, 10000.0),
            evaluated("Surabaya", RecordStatus::Ok, 4.0, 10400.0, 10000.0),
        ];

        let summary = PortfolioAggregator::new().aggregate(&records);

        assert_eq!(summary.total_rows, 3);
        assert_eq!(summary.critical_count, 1);
        assert_eq!(summary.warning_count, 1);
        assert_eq!(summary.ok_count, 1);
        assert_eq!(summary.total_sales, 27900.0);
        assert_eq!(summary.total_target, 30000.0);
        assert!((summary.portfolio_achievement - 93.0).abs() < 1e-9);
        assert!((summary.delta_vs_yesterday - (-4.0)).abs() < 1e-9);
        assert_eq!(summary.overall_status, RecordStatus::Critical);
        assert_eq!(summary.date, "2024-03-15");
        assert_eq!(summary.day_name, "Friday");
        assert_eq!(summary.flagged_items.len(), 2);
    }

    #[test]
    fn test_aggregate_zero_target_guard() {
        let records = vec![evaluated("Jakarta", RecordStatus::Ok, 0.0, 5000.0, 0.0)];
        let summary = PortfolioAggregator::new().aggregate(&records);
        assert_eq!(summary.portfolio_achievement, 0.0);
    }

    #[test]
    fn test_aggregate_overall_status_warning_without_critical() {
        let records = vec![
            evaluated("Jakarta", RecordStatus::Warning, -5.0, 9500.0, 10000.0),
            evaluated("Bandung", RecordStatus::Ok, 2.0, 10200.0, 10000.0),
        ];
        let summary = PortfolioAggregator::new().aggregate(&records);
        assert_eq!(summary.overall_status, RecordStatus::Warning);
    }

    #[test]
    fn test_issue_lists_sorted_and_capped() {
        let mut records = Vec::new();
        for (i, delta) in [-11.0, -25.0, -13.0, -40.0, -18.0, -30.0].iter().enumerate() {
            records.push(evaluated(
                &format!("Region{}", i),
                RecordStatus::Critical,
                *delta,
                8000.0,
                10000.0,
            ));
        }

        let summary = PortfolioAggregator::new().aggregate(&records);

        assert_eq!(summary.critical_issues.len(), 5); // 上限 5
        let deltas: Vec<f64> = summary
            .critical_issues
            .iter()
            .map(|r| r.record.delta_vs_target)
            .collect();
        assert_eq!(deltas, vec![-40.0, -30.0, -25.0, -18.0, -13.0]);
    }

    #[test]
    fn test_top_performers_descending_capped_at_3() {
        let records = vec![
            evaluated("A", RecordStatus::Ok, 2.0, 10200.0, 10000.0),
            evaluated("B", RecordStatus::Ok, 9.0, 10900.0, 10000.0),
            evaluated("C", RecordStatus::Ok, 5.0, 10500.0, 10000.0),
            evaluated("D", RecordStatus::Ok, 7.0, 10700.0, 10000.0),
        ];

        let summary = PortfolioAggregator::new().aggregate(&records);

        assert_eq!(summary.top_performers.len(), 3);
        let regions: Vec<&str> = summary
            .top_performers
            .iter()
            .map(|r| r.record.region.as_str())
            .collect();
        assert_eq!(regions, vec!["B", "D", "C"]);
    }

    #[test]
    fn test_sort_tie_break_by_region_product() {
        let records = vec![
            evaluated("Surabaya", RecordStatus::Critical, -20.0, 8000.0, 10000.0),
            evaluated("Bandung", RecordStatus::Critical, -20.0, 8000.0, 10000.0),
            evaluated("Jakarta", RecordStatus::Critical, -20.0, 8000.0, 10000.0),
        ];

        let summary = PortfolioAggregator::new().aggregate(&records);

        let regions: Vec<&str> = summary
            .critical_issues
            .iter()
            .map(|r| r.record.region.as_str())
            .collect();
        assert_eq!(regions, vec!["Bandung", "Jakarta", "Surabaya"]);
    }

    #[test]
    fn test_empty_input_contract() {
        let summary = PortfolioAggregator::new().aggregate(&[]);

        assert_eq!(summary.total_rows, 0);
        assert_eq!(summary.overall_status, RecordStatus::Ok);
        assert_eq!(summary.portfolio_achievement, 0.0);
        assert_eq!(summary.delta_vs_yesterday, 0.0);
        assert!(summary.critical_issues.is_empty());
        assert!(summary.warning_issues.is_empty());
        assert!(summary.top_performers.is_empty());
        assert!(summary.flagged_items.is_empty());
        assert!(!summary.date.is_empty());
        assert!(!summary.day_name.is_empty());
    }

    #[test]
    fn test_custom_caps() {
        let caps = ListCaps {
            critical_issues: 1,
            warning_issues: 1,
            top_performers: 1,
        };
        let records = vec![
            evaluated("A", RecordStatus::Critical, -20.0, 8000.0, 10000.0),
            evaluated("B", RecordStatus::Critical, -30.0, 7000.0, 10000.0),
        ];

        let summary = PortfolioAggregator::with_caps(caps).aggregate(&records);

        assert_eq!(summary.critical_issues.len(), 1);
        assert_eq!(summary.critical_issues[0].record.region, "B");
        // flagged 不截断
        assert_eq!(summary.flagged_items.len(), 2);
    }
}
