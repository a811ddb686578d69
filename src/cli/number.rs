// ============================================================================
// Lingo - Number / HumanSize 命令
// ============================================================================
//
// 文件: src/cli/number.rs
// 职责: 数字格式化命令的 CLI 接口层
// 边界:
//   - ✅ 命令行参数定义和解析
//   - ✅ 选择数字、百分比、货币格式
//   - ✅ 存储大小格式化
//   - ❌ 不应包含格式化算法
//
// ============================================================================

use anyhow::Result;
use clap::{Args, ValueEnum};

use lingo::models::config::Config;
use lingo::NumberFormatOptions;

use super::context::session_translator;

/// 数字样式
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum NumberStyle {
    Number,
    Percentage,
    Currency,
}

/// 格式化数字
#[derive(Debug, Args)]
pub struct NumberArgs {
    /// Number to format
    #[arg(allow_negative_numbers = true)]
    pub value: f64,

    /// Output style
    #[arg(long, value_enum, default_value = "number")]
    pub style: NumberStyle,

    /// Digits after the decimal separator
    #[arg(short, long)]
    pub precision: Option<usize>,

    /// Decimal separator
    #[arg(long)]
    pub separator: Option<String>,

    /// Thousands delimiter
    #[arg(long)]
    pub delimiter: Option<String>,

    /// Drop trailing zeros from the fraction
    #[arg(long)]
    pub strip_zeros: bool,

    /// Currency unit
    #[arg(long)]
    pub unit: Option<String>,

    /// Format template (%n number, %u unit)
    #[arg(long)]
    pub format: Option<String>,
}

/// 格式化存储大小
#[derive(Debug, Args)]
pub struct HumanSizeArgs {
    /// Size in bytes
    pub bytes: f64,
}

pub fn handle_number(args: NumberArgs) -> Result<()> {
    let config = Config::snapshot()?;
    let session = session_translator(&config)?;
    let translator = session.translator();
    let options = build_options(&args);

    let formatted = match args.style {
        NumberStyle::Number => translator.to_number(args.value, &options),
        NumberStyle::Percentage => translator.to_percentage(args.value, &options),
        NumberStyle::Currency => translator.to_currency(args.value, &options),
    };
    println!("{}", formatted);
    Ok(())
}

pub fn handle_human_size(args: HumanSizeArgs) -> Result<()> {
    let config = Config::snapshot()?;
    let session = session_translator(&config)?;
    println!(
        "{}",
        session
            .translator()
            .to_human_size(args.bytes, &NumberFormatOptions::new())
    );
    Ok(())
}

fn build_options(args: &NumberArgs) -> NumberFormatOptions {
    NumberFormatOptions {
        precision: args.precision,
        separator: args.separator.clone(),
        delimiter: args.delimiter.clone(),
        strip_insignificant_zeros: args.strip_zeros.then_some(true),
        format: args.format.clone(),
        unit: args.unit.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Debug, Parser)]
    struct Harness {
        #[command(flatten)]
        args: NumberArgs,
    }

    #[test]
    fn unset_flags_leave_options_empty() {
        let harness = Harness::parse_from(["number", "1234.5"]);
        assert_eq!(harness.args.style, NumberStyle::Number);
        assert_eq!(build_options(&harness.args), NumberFormatOptions::new());
    }

    #[test]
    fn flags_become_options() {
        let harness = Harness::parse_from([
            "number",
            "-5",
            "--style",
            "currency",
            "--unit",
            "€",
            "-p",
            "1",
            "--strip-zeros",
        ]);
        assert_eq!(harness.args.value, -5.0);
        let options = build_options(&harness.args);
        assert_eq!(options.unit.as_deref(), Some("€"));
        assert_eq!(options.precision, Some(1));
        assert_eq!(options.strip_insignificant_zeros, Some(true));
    }
}
