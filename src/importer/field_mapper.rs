// ==========================================
// 销售日报监控系统 - 字段映射器实现
// ==========================================
// 职责: 源字段 → 标准字段映射 + 类型转换
// 别名解析: 每个逻辑字段一组有序候选列名, 首个命中生效
// ==========================================

use crate::domain::record::RawSalesRecord;
use crate::importer::error::{ImportError, ImportResult};
use chrono::NaiveDate;
use std::collections::HashMap;

// 日期候选格式: ISO 优先, 兼容常见本地格式
const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%Y%m%d"];

pub struct FieldMapper;

impl FieldMapper {
    /// 单行映射: 表头键控的字符串行 → 暂存记录
    ///
    /// 缺失字段保持 None, 由 DataCleaner 统一填充;
    /// 数值/日期解析失败按数据验证错误上抛
    pub fn map_to_raw_record(
        &self,
        row: &HashMap<String, String>,
        row_number: usize,
    ) -> ImportResult<RawSalesRecord> {
        Ok(RawSalesRecord {
            date: self.parse_date(row, "date", row_number)?,

            // 维度字段(带别名)
            region: self.get_string(row, "region"),
            product: self.get_string(row, "product"),

            // 数值指标
            total_sales: self.parse_f64(row, "total_sales", row_number)?,
            target_daily: self.parse_f64(row, "target_daily", row_number)?,
            delta_vs_target: self.parse_f64(row, "delta_vs_target", row_number)?,
            delta_vs_yesterday: self.parse_f64(row, "delta_vs_yesterday", row_number)?,
            avg_7d_sales: self.parse_f64(row, "avg_7d_sales", row_number)?,

            // 日历字段
            day_name: self.get_string(row, "day_name"),
            is_weekend: self.parse_bool(row, "is_weekend"),

            // 元信息
            row_number,
        })
    }

    /// 提取字符串字段（返回 Option），支持多个可能的列名（别名）
    fn get_string(&self, row: &HashMap<String, String>, key: &str) -> Option<String> {
        // 逻辑字段 → 有序候选列名
        let aliases: Vec<&str> = match key {
            "region" => vec!["region", "city"],
            "product" => vec!["product", "product_line"],
            "total_sales" => vec!["total_sales", "sales"],
            _ => vec![key],
        };

        // 按顺序尝试所有候选列名, 首个非空命中生效
        for alias in aliases {
            if let Some(v) = row.get(alias) {
                let trimmed = v.trim();
                if !trimmed.is_empty() {
                    return Some(trimmed.to_string());
                }
            }
        }
        None
    }

    /// 解析浮点数
    fn parse_f64(
        &self,
        row: &HashMap<String, String>,
        key: &str,
        row_number: usize,
    ) -> ImportResult<Option<f64>> {
        match self.get_string(row, key) {
            None => Ok(None),
            Some(value) => value
                .parse::<f64>()
                .map(Some)
                .map_err(|_| ImportError::TypeConversionError {
                    row: row_number,
                    field: key.to_string(),
                    message: format!("无法解析为浮点数: {}", value),
                }),
        }
    }

    /// 解析布尔标志
    ///
    /// 接受 TRUE/FALSE/1/0/YES/NO/Y/N (大小写不敏感);
    /// 其余取值按 false 处理 ("视为正常"的缺省姿态)
    fn parse_bool(&self, row: &HashMap<String, String>, key: &str) -> Option<bool> {
        self.get_string(row, key).map(|value| {
            matches!(
                value.to_uppercase().as_str(),
                "TRUE" | "1" | "YES" | "Y"
            )
        })
    }

    /// 解析日期（多格式兼容）
    fn parse_date(
        &self,
        row: &HashMap<String, String>,
        key: &str,
        row_number: usize,
    ) -> ImportResult<Option<NaiveDate>> {
        match self.get_string(row, key) {
            None => Ok(None),
            Some(value) => {
                for format in DATE_FORMATS {
                    if let Ok(date) = NaiveDate::parse_from_str(&value, format) {
                        return Ok(Some(date));
                    }
                }
                Err(ImportError::DateFormatError {
                    row: row_number,
                    field: key.to_string(),
                    value,
                })
            }
        }
    }
}
