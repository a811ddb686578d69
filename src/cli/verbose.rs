// ============================================================================
// Lingo - Verbose 命令
// ============================================================================
//
// 文件: src/cli/verbose.rs
// 职责: 开启或关闭会话级调试翻译模式
// 边界:
//   - ✅ 命令行参数定义和解析
//   - ✅ 调用会话标志读写
//   - ❌ 不应包含键编号逻辑
//
// ============================================================================

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use lingo::models::config::Config;
use lingo::VerboseSession;

use super::context::build_translator;
use crate::utils::logger::Logger;
use crate::{t, tf};

/// 调试翻译模式
#[derive(Debug, Args)]
pub struct VerboseArgs {
    /// Turn verbose localization off
    #[arg(long)]
    pub off: bool,
}

pub fn handle_verbose(args: VerboseArgs) -> Result<()> {
    let config = Config::snapshot()?;
    let state_file = PathBuf::from(&config.session.state_file);

    if args.off {
        if VerboseSession::is_enabled(&state_file) {
            VerboseSession::disable(&state_file)?;
            Logger::success(t!("verbose.disabled"));
        } else {
            Logger::info(t!("verbose.not_enabled"));
        }
        return Ok(());
    }

    let translator = build_translator(&config)?;
    let (_, message) = VerboseSession::enable(&state_file, translator)?;
    Logger::success(message);
    Logger::info(tf!("verbose.state_file", path = state_file.display().to_string()));
    Ok(())
}
