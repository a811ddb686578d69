// ============================================================================
// Lingo - Core 核心模块
// ============================================================================
//
// 文件: src/core/mod.rs
// 职责: 翻译解析核心逻辑模块入口和导出
// 边界:
//   - ✅ 核心子模块导出
//   - ✅ 常用类型重新导出
//   - ❌ 不应包含具体业务实现
//   - ❌ 不应包含 CLI 相关逻辑
//   - ❌ 不应包含终端输出逻辑
//
// ============================================================================

pub mod coverage;
pub mod interpolator;
pub mod number;
pub mod pluralizer;
pub mod resolver;
pub mod translator;
pub mod verbose;

// 重新导出常用类型
pub use coverage::{coverage_report, CoverageReport, LocaleCoverage};
pub use interpolator::interpolate;
pub use pluralizer::{PluralRule, PluralRules};
pub use resolver::{KeyPath, KeyResolver, Resolution};
pub use translator::{Translate, Translator, TranslatorBuilder, TranslatorSettings};
pub use verbose::{SessionTranslator, VerboseSession, VerboseTranslator};
