// ============================================================================
// Lingo - CLI 模块
// ============================================================================
//
// 文件: src/cli/mod.rs
// 职责: CLI 命令行接口模块入口和路由
// 边界:
//   - ✅ CLI 结构定义和命令枚举
//   - ✅ 命令行参数解析配置
//   - ✅ 全局配置初始化和运行时参数合并
//   - ✅ 命令路由分发
//   - ❌ 不应包含具体命令实现逻辑
//   - ❌ 不应包含翻译查找逻辑
//
// ============================================================================

pub mod check;
pub mod context;
pub mod init;
pub mod number;
pub mod translate;
pub mod verbose;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::utils::colors::Colors;
use crate::utils::logger::Logger;
use check::{handle_check, CheckArgs};
use init::{handle_init, InitArgs};
use lingo::models::config::{Config, RuntimeArgs, DEFAULT_CONFIG_FILE};
use number::{handle_human_size, handle_number, HumanSizeArgs, NumberArgs};
use translate::{handle_translate, TranslateArgs};
use verbose::{handle_verbose, VerboseArgs};

/// Lingo - Translation key resolution runtime
#[derive(Debug, Parser)]
#[command(name = "lingo")]
#[command(about = "Resolve translation keys with locale fallback, pluralization and interpolation")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Global verbose mode
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Interface language (zh_cn, en_us)
    #[arg(short, long, global = true)]
    pub language: Option<String>,

    /// Configuration file
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Translation directory (overrides config)
    #[arg(short = 'd', long, global = true)]
    pub dir: Option<String>,

    /// Current locale (overrides config)
    #[arg(long, global = true)]
    pub locale: Option<String>,

    /// Disable locale fallbacks
    #[arg(long, global = true)]
    pub no_fallbacks: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Commands
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Translate a key
    Translate(TranslateArgs),
    /// Format a number with the locale's number format
    Number(NumberArgs),
    /// Format a byte count as a human readable size
    HumanSize(HumanSizeArgs),
    /// Report missing translations against a reference locale
    Check(CheckArgs),
    /// Turn verbose localization on or off for this session
    Verbose(VerboseArgs),
    /// Initialize configuration file
    Init(InitArgs),
}

pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();

    Config::initialize(&cli.config)?;
    // Build runtime args to override config
    let runtime_args = build_runtime_args(&cli);
    // Merge runtime args to global config
    Config::merge_runtime_args(runtime_args)?;

    Colors::configure(Config::get_colored());
    Logger::init_tracing(Config::get_verbose());

    match cli.command {
        Commands::Translate(args) => handle_translate(args),
        Commands::Number(args) => handle_number(args),
        Commands::HumanSize(args) => handle_human_size(args),
        Commands::Check(args) => handle_check(args),
        Commands::Verbose(args) => handle_verbose(args),
        Commands::Init(args) => handle_init(args, &cli.config),
    }
}

/// Build runtime args from CLI arguments
fn build_runtime_args(cli: &Cli) -> RuntimeArgs {
    RuntimeArgs {
        verbose: if cli.verbose { Some(true) } else { None },
        colored: if cli.no_color { Some(false) } else { None },
        language: cli.language.clone(),
        locale: cli.locale.clone(),
        no_fallbacks: if cli.no_fallbacks { Some(true) } else { None },
        translations_dir: cli.dir.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn global_flags_map_to_runtime_args() {
        let cli = Cli::parse_from([
            "lingo",
            "--no-color",
            "--locale",
            "de",
            "translate",
            "greeting",
            "--no-fallbacks",
        ]);
        let args = build_runtime_args(&cli);
        assert_eq!(args.colored, Some(false));
        assert_eq!(args.locale.as_deref(), Some("de"));
        assert_eq!(args.no_fallbacks, Some(true));
        assert_eq!(args.verbose, None);
        assert_eq!(cli.config, PathBuf::from(DEFAULT_CONFIG_FILE));
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
