// ==========================================
// 销售日报监控系统 - 数据清洗器实现
// ==========================================
// 职责: 暂存记录 → 标准化记录, 按字段缺省填充
// ==========================================

use crate::domain::record::{RawSalesRecord, SalesRecord};
use crate::importer::error::{ImportError, ImportResult};

pub struct DataCleaner;

impl DataCleaner {
    /// 缺省填充并标准化
    ///
    /// 缺省表:
    /// - 数值字段 → 0
    /// - region / product → "Unknown"
    /// - day_name → ""
    /// - is_weekend → false
    /// - avg_7d_sales → total_sales (比值恰为 1.0, 视为正常)
    ///
    /// date 为必填: 缺失即数据验证错误, 不做缺省
    pub fn normalize(&self, raw: RawSalesRecord) -> ImportResult<SalesRecord> {
        let date = raw.date.ok_or(ImportError::RequiredFieldMissing {
            row: raw.row_number,
            field: "date".to_string(),
        })?;

        let total_sales = raw.total_sales.unwrap_or(0.0);

        Ok(SalesRecord {
            date,
            region: raw.region.unwrap_or_else(|| "Unknown".to_string()),
            product: raw.product.unwrap_or_else(|| "Unknown".to_string()),
            total_sales,
            target_daily: raw.target_daily.unwrap_or(0.0),
            delta_vs_target: raw.delta_vs_target.unwrap_or(0.0),
            delta_vs_yesterday: raw.delta_vs_yesterday.unwrap_or(0.0),
            avg_7d_sales: raw.avg_7d_sales.unwrap_or(total_sales),
            day_name: raw.day_name.unwrap_or_default(),
            is_weekend: raw.is_weekend.unwrap_or(false),
        })
    }
}
