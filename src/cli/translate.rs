// ============================================================================
// Lingo - Translate 命令
// ============================================================================
//
// 文件: src/cli/translate.rs
// 职责: 翻译单个键的 CLI 接口层
// 边界:
//   - ✅ 命令行参数定义和解析
//   - ✅ 插值参数 name=value 解析
//   - ✅ 调用翻译器并输出结果
//   - ❌ 不应包含查找、回退、复数、插值逻辑
//
// ============================================================================

use anyhow::Result;
use clap::Args;

use lingo::models::config::Config;
use lingo::{InterpolationValue, LookupOptions, Translate};

use super::context::session_translator;
use crate::tf;

/// 翻译一个键
#[derive(Debug, Args)]
pub struct TranslateArgs {
    /// Dotted translation key (e.g. topic.title)
    pub key: String,

    /// Key prefix
    #[arg(short, long)]
    pub scope: Option<String>,

    /// Count used for pluralization
    #[arg(short = 'n', long)]
    pub count: Option<f64>,

    /// Template used when the key is missing
    #[arg(long = "default")]
    pub default_value: Option<String>,

    /// Locale for this lookup only
    #[arg(long = "in")]
    pub in_locale: Option<String>,

    /// Interpolation value, repeatable (name=value)
    #[arg(long = "set", value_name = "NAME=VALUE")]
    pub values: Vec<String>,
}

pub fn handle_translate(args: TranslateArgs) -> Result<()> {
    let config = Config::snapshot()?;
    let translator = session_translator(&config)?;
    let options = build_options(&args)?;

    println!("{}", translator.translate(&args.key, &options));
    Ok(())
}

/// 命令参数 -> 查询选项
fn build_options(args: &TranslateArgs) -> Result<LookupOptions> {
    let mut options = LookupOptions::new();
    if let Some(scope) = &args.scope {
        options = options.scope(scope.clone());
    }
    if let Some(count) = args.count {
        options = options.count(count);
    }
    if let Some(default_value) = &args.default_value {
        options = options.default_value(default_value.clone());
    }
    if let Some(locale) = &args.in_locale {
        options = options.locale(locale.clone());
    }
    for raw in &args.values {
        let (name, value) = parse_value(raw)?;
        options = options.with(name, value);
    }
    Ok(options)
}

/// 解析 `name=value`，数字值保持数字类型
fn parse_value(raw: &str) -> Result<(String, InterpolationValue)> {
    let Some((name, value)) = raw.split_once('=') else {
        anyhow::bail!(tf!("error.invalid_value", value = raw));
    };
    if name.is_empty() {
        anyhow::bail!(tf!("error.invalid_value", value = raw));
    }

    let value = if let Ok(integer) = value.parse::<i64>() {
        InterpolationValue::Integer(integer)
    } else if let Some(float) = value.parse::<f64>().ok().filter(|f| f.is_finite()) {
        InterpolationValue::Float(float)
    } else {
        InterpolationValue::Text(value.to_string())
    };
    Ok((name.to_string(), value))
}
