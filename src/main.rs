// ============================================================================
// Lingo - 程序入口
// ============================================================================
//
// 文件: src/main.rs
// 职责: 命令行程序入口
// 边界:
//   - ✅ 启动 CLI 并处理顶层错误
//   - ❌ 不应包含命令实现
//
// ============================================================================

mod cli;
mod i18n;
mod utils;

use utils::logger::Logger;

fn main() {
    if let Err(e) = cli::run_cli() {
        Logger::error(format!("{:#}", e));
        std::process::exit(1);
    }
}
