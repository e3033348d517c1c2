// ==========================================
// 销售日报监控系统 - 领域模型层
// ==========================================
// 职责: 定义领域实体与类型
// 红线: 不含数据访问逻辑,不含引擎逻辑
// ==========================================

pub mod record;
pub mod summary;
pub mod types;

// 重导出核心类型
pub use record::{EvaluatedRecord, RawSalesRecord, SalesRecord, Violation};
pub use summary::PortfolioSummary;
pub use types::{RecordStatus, Severity};
