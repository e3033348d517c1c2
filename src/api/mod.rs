// ==========================================
// 销售日报监控系统 - API层
// ==========================================
// 职责: 面向外部表示层的业务接口
// ==========================================

pub mod dashboard_api;
pub mod error;

// 重导出核心类型
pub use dashboard_api::{AlertItem, DashboardApi, MetricsView};
pub use error::{ApiError, ApiResult};
