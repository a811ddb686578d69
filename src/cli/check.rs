// ============================================================================
// Lingo - CLI Check 命令
// ============================================================================
//
// 文件: src/cli/check.rs
// 职责: 翻译覆盖率检查命令的 CLI 接口层
// 边界:
//   - ✅ 命令行参数定义和解析
//   - ✅ 调用覆盖率统计
//   - ✅ 检查结果格式化输出（表格 / JSON）
//   - ❌ 不应包含键集合对比逻辑
//   - ❌ 不应包含翻译文件解析
//
// ============================================================================

use anyhow::Result;
use clap::Args;

use lingo::models::config::Config;
use lingo::{coverage_report, CoverageReport, LocaleCoverage};

use super::context::load_store;
use crate::utils::colors::Colors;
use crate::utils::constants::icons;
use crate::utils::logger::Logger;
use crate::{t, tf};

/// 检查翻译覆盖率
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Reference locale (defaults to the configured default locale)
    #[arg(short, long)]
    pub reference: Option<String>,

    /// 输出格式 (table, json)
    #[arg(short = 'f', long, default_value = "table")]
    pub format: String,

    /// 列出每个缺失和多余的键
    #[arg(long)]
    pub detail: bool,
}

pub fn handle_check(args: CheckArgs) -> Result<()> {
    let config = Config::snapshot()?;
    let reference = args
        .reference
        .clone()
        .unwrap_or_else(|| config.locale.default.clone());

    let store = load_store(&config)?;
    let report = coverage_report(&store, &reference);

    if args.format == "json" {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report, args.detail);
    }

    if !report.is_complete() {
        std::process::exit(1);
    }
    Ok(())
}

/// 表格形式输出
fn print_report(report: &CoverageReport, detail: bool) {
    Logger::info(tf!("check.start", locale = report.reference_locale.as_str()));

    if report.total_keys == 0 {
        Logger::warn(tf!("check.reference_missing", locale = report.reference_locale.as_str()));
    } else {
        Logger::info(tf!("check.total_keys", count = report.total_keys));
    }

    if report.locales.is_empty() {
        Logger::warn(t!("check.no_locales"));
        return;
    }

    for coverage in &report.locales {
        print_locale(coverage, detail);
    }

    if report.is_complete() {
        Logger::success(t!("check.all_good"));
    }
}

fn print_locale(coverage: &LocaleCoverage, detail: bool) {
    let percent = format!("{:.1}", coverage.coverage_percent);
    let locale = coverage.locale.as_str();

    if coverage.missing.is_empty() {
        println!(
            "  {} {}",
            Colors::success(icons::SUCCESS),
            tf!("check.complete", locale = locale, percent = percent.as_str())
        );
    } else {
        println!(
            "  {} {}",
            Colors::error(icons::ERROR),
            tf!(
                "check.missing",
                count = coverage.missing.len(),
                locale = locale,
                percent = percent.as_str()
            )
        );
        if detail {
            for key in &coverage.missing {
                println!("      {} {}", Colors::error(icons::MISSING), key);
            }
        }
    }

    if !coverage.extra.is_empty() {
        println!(
            "  {} {}",
            Colors::warn(icons::WARNING),
            tf!("check.extra", count = coverage.extra.len(), locale = locale)
        );
        if detail {
            for key in &coverage.extra {
                println!("      {} {}", Colors::dim(icons::EXTRA), Colors::dim(key));
            }
        }
    }
}
