// ==========================================
// 销售日报监控系统 - 领域类型定义
// ==========================================
// 规则体系: R1 目标达成 / R2 环比 / R3 趋势 / R4 周末调整
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 违规严重度 (Severity)
// ==========================================
// 顺序: Warning < Critical (用于最高严重度归并)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    Warning,  // 警告
    Critical, // 危急
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "WARNING"),
            Severity::Critical => write!(f, "CRITICAL"),
        }
    }
}

// ==========================================
// 记录状态 (Record Status)
// ==========================================
// 单行与组合级共用的三级分类
// 顺序: Ok < Warning < Critical (用于最高严重度归并)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecordStatus {
    Ok,       // 正常
    Warning,  // 警告
    Critical, // 危急
}

impl fmt::Display for RecordStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordStatus::Ok => write!(f, "OK"),
            RecordStatus::Warning => write!(f, "WARNING"),
            RecordStatus::Critical => write!(f, "CRITICAL"),
        }
    }
}

impl RecordStatus {
    /// 由最高违规严重度归并出状态
    ///
    /// 归并与规则顺序无关: 任一 CRITICAL → CRITICAL,
    /// 否则任一 WARNING → WARNING, 否则 OK
    pub fn from_severity(severity: Option<Severity>) -> Self {
        match severity {
            Some(Severity::Critical) => RecordStatus::Critical,
            Some(Severity::Warning) => RecordStatus::Warning,
            None => RecordStatus::Ok,
        }
    }
}
