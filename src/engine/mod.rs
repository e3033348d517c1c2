// ==========================================
// 销售日报监控系统 - 引擎层
// ==========================================
// 职责: 实现规则评估与汇总业务逻辑
// 红线: 引擎无状态, 所有规则必须输出可解释的违规描述
// ==========================================

pub mod aggregate;
pub mod daily;
pub mod insight;
pub mod orchestrator;
pub mod rules;

// 重导出核心引擎
pub use aggregate::PortfolioAggregator;
pub use daily::DailyProcessor;
pub use insight::InsightComposer;
pub use orchestrator::{AnalysisOrchestrator, AnalysisReport};
pub use rules::{EvaluationOutcome, RuleEngine, WEEKEND_ADJUSTMENT_NOTE};
