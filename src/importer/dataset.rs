// ==========================================
// 销售日报监控系统 - 数据集快照
// ==========================================
// 职责: 一次加载产出不可变快照, 分析调用显式传入快照
// 红线: 引擎不共享可变的"当前数据集"状态, 并发重入安全
// ==========================================

use crate::domain::record::SalesRecord;
use crate::importer::data_cleaner::DataCleaner;
use crate::importer::field_mapper::FieldMapper;
use crate::importer::error::ImportResult;
use crate::importer::file_parser::{parser_for_path, FileParser};
use chrono::NaiveDate;
use std::path::{Path, PathBuf};
use uuid::Uuid;

// ==========================================
// SalesDataset - 不可变数据集快照
// ==========================================

/// 已加载的销售数据快照
///
/// 构造后不可变; 每次分析从当前快照全量重算
#[derive(Debug, Clone)]
pub struct SalesDataset {
    /// 快照ID, 仅用于日志关联
    snapshot_id: String,
    /// 数据来源描述(文件路径或 "memory")
    source: String,
    records: Vec<SalesRecord>,
    latest_date: Option<NaiveDate>,
}

impl SalesDataset {
    /// 从文件加载数据集 (CSV / Excel, 按扩展名分派)
    ///
    /// # 返回
    /// - Ok(SalesDataset): 加载成功(允许 0 行)
    /// - Err(ImportError): 文件缺失 / 格式不支持 / 记录级验证失败
    pub fn load(file_path: &Path) -> ImportResult<Self> {
        let parser = parser_for_path(file_path)?;
        let rows = parser.parse_to_raw_rows(file_path)?;

        let mapper = FieldMapper;
        let cleaner = DataCleaner;

        let mut records = Vec::with_capacity(rows.len());
        for (idx, row) in rows.iter().enumerate() {
            // 表头为第 1 行, 数据行从第 2 行起
            let raw = mapper.map_to_raw_record(row, idx + 2)?;
            records.push(cleaner.normalize(raw)?);
        }

        let dataset = Self::from_records_with_source(records, file_path.display().to_string());
        tracing::info!(
            snapshot = %dataset.snapshot_id,
            source = %dataset.source,
            rows = dataset.records.len(),
            latest_date = ?dataset.latest_date,
            "数据集加载完成"
        );
        Ok(dataset)
    }

    /// 由内存记录构造快照(测试与上游预加载场景)
    pub fn from_records(records: Vec<SalesRecord>) -> Self {
        Self::from_records_with_source(records, "memory".to_string())
    }

    /// 空快照(数据文件缺失时的软失败路径)
    pub fn empty() -> Self {
        Self::from_records(Vec::new())
    }

    fn from_records_with_source(records: Vec<SalesRecord>, source: String) -> Self {
        let latest_date = records.iter().map(|r| r.date).max();
        Self {
            snapshot_id: Uuid::new_v4().to_string(),
            source,
            records,
            latest_date,
        }
    }

    pub fn snapshot_id(&self) -> &str {
        &self.snapshot_id
    }

    pub fn records(&self) -> &[SalesRecord] {
        &self.records
    }

    /// 数据集中的最大日期 ("最新交易日")
    pub fn latest_date(&self) -> Option<NaiveDate> {
        self.latest_date
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

// ==========================================
// 默认数据路径
// ==========================================

/// 解析默认数据文件路径
///
/// 优先使用工作目录下的 data/daily_sales.csv,
/// 否则回退到系统数据目录
pub fn get_default_data_path() -> PathBuf {
    let local = PathBuf::from("data/daily_sales.csv");
    if local.exists() {
        return local;
    }

    dirs::data_dir()
        .map(|dir| dir.join("daily-sales-agent").join("daily_sales.csv"))
        .unwrap_or(local)
}
