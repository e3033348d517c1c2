// ==========================================
// 销售日报监控系统 - 规则配置
// ==========================================
// 职责: 规则阈值与清单容量管理
// 缺省即契约: Default 给出固定规则集的标准取值,
// 可选 JSON 覆写文件仅供部署侧微调
// ==========================================

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// ==========================================
// 规则阈值 (Rule Thresholds)
// ==========================================

/// R1/R2/R3 的阈值全集, 全部为严格小于比较
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleThresholds {
    /// R1: delta_vs_target 低于此值 → CRITICAL
    pub target_critical_pct: f64,
    /// R1: delta_vs_target 低于此值 → WARNING
    pub target_warning_pct: f64,
    /// R2: delta_vs_yesterday 低于此值 → CRITICAL
    pub dod_critical_pct: f64,
    /// R2: delta_vs_yesterday 低于此值 → WARNING
    pub dod_warning_pct: f64,
    /// R3: total_sales / avg_7d_sales 低于此比值 → CRITICAL
    pub trend_critical_ratio: f64,
    /// R3: total_sales / avg_7d_sales 低于此比值 → WARNING
    pub trend_warning_ratio: f64,
}

impl Default for RuleThresholds {
    fn default() -> Self {
        Self {
            target_critical_pct: -10.0,
            target_warning_pct: 0.0,
            dod_critical_pct: -15.0,
            dod_warning_pct: -5.0,
            trend_critical_ratio: 0.70,
            trend_warning_ratio: 0.85,
        }
    }
}

// ==========================================
// 清单容量 (List Caps)
// ==========================================

/// 汇总分级清单的截断上限
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListCaps {
    pub critical_issues: usize,
    pub warning_issues: usize,
    pub top_performers: usize,
}

impl Default for ListCaps {
    fn default() -> Self {
        Self {
            critical_issues: 5,
            warning_issues: 5,
            top_performers: 3,
        }
    }
}

// ==========================================
// EngineConfig - 引擎配置聚合
// ==========================================

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub thresholds: RuleThresholds,
    pub caps: ListCaps,
}

impl EngineConfig {
    /// 从 JSON 文件加载配置
    ///
    /// 文件中缺失的键取 Default 值 (serde default)
    pub fn load_from_path(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("配置读取失败: {}", path.display()))?;
        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("配置解析失败: {}", path.display()))?;
        Ok(config)
    }

    /// 加载配置, 失败时回退 Default 并记录警告
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from_path(path) {
            Ok(config) => {
                tracing::info!(path = %path.display(), "已加载规则配置覆写");
                config
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "配置加载失败,使用缺省配置");
                Self::default()
            }
        }
    }

    /// 默认配置覆写文件位置(系统配置目录下)
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("daily-sales-agent").join("config.json"))
    }
}
