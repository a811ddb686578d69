// ============================================================================
// Lingo - 错误类型
// ============================================================================
//
// 文件: src/error.rs
// 职责: 库层错误类型定义
// 边界:
//   - ✅ 翻译表加载错误定义
//   - ✅ 配置解析错误定义
//   - ❌ 不应包含缺失翻译键的处理（缺失键不是错误）
//   - ❌ 不应包含 CLI 相关错误提示
//
// ============================================================================

use std::path::PathBuf;

use thiserror::Error;

/// 库层统一结果类型
pub type Result<T> = std::result::Result<T, I18nError>;

/// 翻译表加载与配置相关错误
#[derive(Debug, Error)]
pub enum I18nError {
    /// 文件读写失败
    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON 解析失败
    #[error("invalid JSON translation table: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML 解析失败
    #[error("invalid YAML translation table: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// TOML 解析失败
    #[error("invalid TOML document: {0}")]
    Toml(#[from] toml::de::Error),

    /// 不支持的文件格式
    #[error("unsupported translation file format: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    /// 翻译表结构不合法
    #[error("invalid translation table in {source_name}: {reason}")]
    InvalidTable { source_name: String, reason: String },
}

impl I18nError {
    /// 包装 IO 错误并附带路径
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        I18nError::Io {
            path: path.into(),
            source,
        }
    }
}
