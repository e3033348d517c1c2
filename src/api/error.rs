// ==========================================
// 销售日报监控系统 - API层错误类型
// ==========================================
// 职责: 定义API层错误类型, 将导入层错误转换为用户友好的错误消息
// ==========================================

use crate::importer::ImportError;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ===== 业务规则错误 =====
    #[error("无效输入: {0}")]
    InvalidInput(String),

    // ===== 数据错误 =====
    #[error("数据导入失败: {0}")]
    ImportFailure(String),

    #[error("数据验证失败: {0}")]
    ValidationError(String),

    // ===== 通用错误 =====
    #[error("内部错误: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ==========================================
// 从 ImportError 转换
// 目的: 记录级验证问题与文件级导入问题分开呈现
// ==========================================
impl From<ImportError> for ApiError {
    fn from(err: ImportError) -> Self {
        match err {
            ImportError::TypeConversionError { .. }
            | ImportError::DateFormatError { .. }
            | ImportError::RequiredFieldMissing { .. } => {
                ApiError::ValidationError(err.to_string())
            }
            ImportError::Other(inner) => ApiError::Other(inner),
            other => ApiError::ImportFailure(other.to_string()),
        }
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;
