// ==========================================
// 销售日报监控系统 - 销售记录实体
// ==========================================
// 职责: 定义导入暂存记录 / 标准化记录 / 违规 / 评估结果
// 红线: 不含数据访问逻辑,不含引擎逻辑
// ==========================================

use crate::domain::types::{RecordStatus, Severity};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// 原始销售记录 (导入暂存)
// ==========================================

/// 字段映射后、缺省填充前的暂存记录
///
/// 所有业务字段均为 Option, 缺失由 DataCleaner 统一填充
#[derive(Debug, Clone, Default)]
pub struct RawSalesRecord {
    pub date: Option<NaiveDate>,
    pub region: Option<String>,
    pub product: Option<String>,
    pub total_sales: Option<f64>,
    pub target_daily: Option<f64>,
    pub delta_vs_target: Option<f64>,
    pub delta_vs_yesterday: Option<f64>,
    pub avg_7d_sales: Option<f64>,
    pub day_name: Option<String>,
    pub is_weekend: Option<bool>,

    // 元信息: 源文件行号(表头为第 1 行)
    pub row_number: usize,
}

// ==========================================
// 标准化销售记录
// ==========================================

/// 缺省填充后的标准化记录, 引擎唯一的输入形态
///
/// 缺省约定:
/// - 数值字段缺失 → 0
/// - region / product 缺失 → "Unknown"
/// - day_name 缺失 → ""
/// - is_weekend 缺失 → false
/// - avg_7d_sales 缺失 → total_sales (比值恰为 1.0, 视为正常)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesRecord {
    pub date: NaiveDate,
    pub region: String,
    pub product: String,
    pub total_sales: f64,
    pub target_daily: f64,
    pub delta_vs_target: f64,
    pub delta_vs_yesterday: f64,
    pub avg_7d_sales: f64,
    pub day_name: String,
    pub is_weekend: bool,
}

// ==========================================
// 违规 (Violation)
// ==========================================

/// 单条规则违规
///
/// 创建后不可变, 归属且仅归属一条评估结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Violation {
    /// 规则编码, 如 "R1.3"
    pub rule: String,
    pub severity: Severity,
    /// 面向用户的违规描述
    pub message: String,
}

impl Violation {
    pub fn new(rule: &str, severity: Severity, message: String) -> Self {
        Self {
            rule: rule.to_string(),
            severity,
            message,
        }
    }
}

// ==========================================
// 评估结果记录 (Evaluated Record)
// ==========================================

/// 单行评估结果: 标准化记录 + 状态 + 违规列表 + 调整说明
///
/// 每次运行按行重建, 构造后不可变, 不落盘
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluatedRecord {
    #[serde(flatten)]
    pub record: SalesRecord,

    pub status: RecordStatus,

    /// 违规列表, 插入顺序 = 规则评估顺序 (R1, R2, R3)
    ///
    /// 周末降级(R4)只改状态, 不改此列表:
    /// 降级后的 WARNING 记录仍可能携带 CRITICAL 违规
    pub violations: Vec<Violation>,

    /// 仅由周末降级规则设置
    pub adjustment_note: Option<String>,
}

impl EvaluatedRecord {
    /// 首条违规的描述, 无违规时返回通用兜底文案
    pub fn primary_issue_message(&self) -> &str {
        self.violations
            .first()
            .map(|v| v.message.as_str())
            .unwrap_or("Performance below expectations")
    }
}
