// ============================================================================
// Lingo - 翻译覆盖率
// ============================================================================
//
// 文件: src/core/coverage.rs
// 职责: 以参考语言的键为基准，统计各语言缺失的翻译
// 边界:
//   - ✅ 键集合展开与对比
//   - ✅ 覆盖率报告数据结构
//   - ❌ 不应包含报告的终端输出
//   - ❌ 不应包含语言回退（统计的是各语言自身的表）
//
// ============================================================================

use serde::Serialize;
use std::collections::BTreeSet;

use crate::models::translation::TranslationStore;

/// 覆盖率报告
#[derive(Debug, Clone, Serialize)]
pub struct CoverageReport {
    /// 参考语言
    pub reference_locale: String,
    /// 参考语言的键数
    pub total_keys: usize,
    /// 各语言统计，按语言代码排序（不含参考语言）
    pub locales: Vec<LocaleCoverage>,
}

/// 单个语言的覆盖情况
#[derive(Debug, Clone, Serialize)]
pub struct LocaleCoverage {
    pub locale: String,
    /// 已翻译的参考键数
    pub present: usize,
    /// 缺失的参考键（已排序）
    pub missing: Vec<String>,
    /// 参考语言中没有的多余键（已排序）
    pub extra: Vec<String>,
    /// 0.0 - 100.0
    pub coverage_percent: f32,
}

impl CoverageReport {
    /// 所有语言都完整覆盖参考语言
    pub fn is_complete(&self) -> bool {
        self.locales.iter().all(|l| l.missing.is_empty())
    }
}

/// 生成覆盖率报告；参考语言不存在时键集合为空
pub fn coverage_report(store: &TranslationStore, reference_locale: &str) -> CoverageReport {
    let reference: BTreeSet<String> = store
        .locale(reference_locale)
        .map(|tree| tree.leaf_keys().into_iter().collect())
        .unwrap_or_default();
    let total = reference.len();

    let locales = store
        .locales()
        .into_iter()
        .filter(|locale| *locale != reference_locale)
        .map(|locale| {
            let keys: BTreeSet<String> = store
                .locale(locale)
                .map(|tree| tree.leaf_keys().into_iter().collect())
                .unwrap_or_default();
            let missing: Vec<String> = reference.difference(&keys).cloned().collect();
            let extra: Vec<String> = keys.difference(&reference).cloned().collect();
            let present = total.saturating_sub(missing.len());
            let coverage_percent = if total == 0 {
                100.0
            } else {
                (present as f32 / total as f32) * 100.0
            };
            LocaleCoverage {
                locale: locale.to_string(),
                present,
                missing,
                extra,
                coverage_percent,
            }
        })
        .collect();

    CoverageReport {
        reference_locale: reference_locale.to_string(),
        total_keys: total,
        locales,
    }
}
