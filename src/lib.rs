// ============================================================================
// Lingo - 库入口
// ============================================================================
//
// 文件: src/lib.rs
// 职责: 翻译运行时的公共 API 导出
// 边界:
//   - ✅ 模块声明
//   - ✅ 常用类型重新导出
//   - ❌ 不应包含 CLI 逻辑
//   - ❌ 不应包含终端输出
//
// ============================================================================

//! 翻译键解析运行时。
//!
//! 按点分键在多语言翻译表中查找模板，经过语言回退、复数选择和占位符插值后
//! 返回最终文本。找不到翻译时返回 `[locale.key]` 形式的标记，查找本身永不失败。
//!
//! ```
//! use lingo::{LookupOptions, Translate, TranslationStore, Translator};
//!
//! let store = TranslationStore::from_json_str(
//!     r#"{"en": {"js": {"files": {"one": "1 file", "other": "%{count} files"}}}}"#,
//! )?;
//! let translator = Translator::builder().store(store).build();
//! assert_eq!(translator.translate("files", &LookupOptions::new().count(3)), "3 files");
//! assert_eq!(translator.t("missing"), "[en.missing]");
//! # Ok::<(), lingo::I18nError>(())
//! ```

pub mod core;
pub mod error;
pub mod models;

pub use crate::core::coverage::{coverage_report, CoverageReport, LocaleCoverage};
pub use crate::core::pluralizer::{PluralRule, PluralRules};
pub use crate::core::resolver::{KeyPath, Resolution};
pub use crate::core::translator::{Translate, Translator, TranslatorBuilder, TranslatorSettings};
pub use crate::core::verbose::{SessionTranslator, VerboseSession, VerboseTranslator};
pub use crate::error::{I18nError, Result};
pub use crate::models::options::{InterpolationValue, LookupOptions, NumberFormatOptions};
pub use crate::models::translation::{PluralForms, TranslationNode, TranslationStore, TranslationTree};
