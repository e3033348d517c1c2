// ==========================================
// 销售日报监控系统 - 核心库
// ==========================================
// 系统定位: 决策支持系统 (规则评估 + 汇总 + 日报生成)
// 流水线: 导入快照 → 日度评估 → 组合汇总 → 日报
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 导入层 - 外部数据
pub mod importer;

// 引擎层 - 业务规则
pub mod engine;

// 配置层 - 规则阈值
pub mod config;

// 日志系统
pub mod logging;

// API 层 - 业务接口
pub mod api;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{RecordStatus, Severity};

// 领域实体
pub use domain::{EvaluatedRecord, PortfolioSummary, RawSalesRecord, SalesRecord, Violation};

// 导入
pub use importer::{get_default_data_path, ImportError, ImportResult, SalesDataset};

// 引擎
pub use engine::{
    AnalysisOrchestrator, AnalysisReport, DailyProcessor, InsightComposer, PortfolioAggregator,
    RuleEngine,
};

// 配置
pub use config::{EngineConfig, ListCaps, RuleThresholds};

// API
pub use api::{AlertItem, ApiError, ApiResult, DashboardApi, MetricsView};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "销售日报监控系统";

// ==========================================
// 预编译检查
// ==========================================
