// ==========================================
// 销售日报监控系统 - 组合汇总实体
// ==========================================
// 职责: 最新交易日全部评估结果的聚合视图
// 生命周期: 每次运行重建, 构造后不可变
// ==========================================

use crate::domain::record::EvaluatedRecord;
use crate::domain::types::RecordStatus;
use serde::{Deserialize, Serialize};

// ==========================================
// 组合汇总 (Portfolio Summary)
// ==========================================

/// 单日组合汇总: 计数 / 金额合计 / 达成率 / 分级清单
///
/// 子列表持有评估记录的克隆: 记录体量小、每次运行一次性构建,
/// 汇总需独立序列化并可跨线程传递
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioSummary {
    /// 展示用日期 (%Y-%m-%d)
    pub date: String,
    pub day_name: String,
    pub is_weekend: bool,

    // ===== 状态计数 =====
    pub total_rows: usize,
    pub critical_count: usize,
    pub warning_count: usize,
    pub ok_count: usize,

    // ===== 金额指标 =====
    pub total_sales: f64,
    pub total_target: f64,
    /// 组合达成率(%), 目标合计为 0 时定义为 0
    pub portfolio_achievement: f64,
    /// 组合级环比(%), 各行 delta_vs_yesterday 的算术平均
    pub delta_vs_yesterday: f64,

    /// 整体状态: 各行状态的最高严重度归并
    pub overall_status: RecordStatus,

    // ===== 分级清单 =====
    /// 危急清单, 按 delta_vs_target 升序(最差在前), 上限 5
    pub critical_issues: Vec<EvaluatedRecord>,
    /// 警告清单, 按 delta_vs_target 升序, 上限 5
    pub warning_issues: Vec<EvaluatedRecord>,
    /// 最佳表现, OK 记录按 delta_vs_target 降序, 上限 3
    pub top_performers: Vec<EvaluatedRecord>,
    /// 全部非 OK 记录, 保持输入顺序
    pub flagged_items: Vec<EvaluatedRecord>,
}

impl PortfolioSummary {
    /// 汇总是否不含任何非 OK 记录
    pub fn is_clean(&self) -> bool {
        self.critical_count == 0 && self.warning_count == 0
    }
}
