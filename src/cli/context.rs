// ============================================================================
// Lingo - 翻译器装配
// ============================================================================
//
// 文件: src/cli/context.rs
// 职责: 按全局配置加载翻译目录并构建翻译器
// 边界:
//   - ✅ 翻译目录存在性检查
//   - ✅ 翻译表加载和翻译器构建
//   - ✅ 按会话标志恢复调试翻译器
//   - ❌ 不应包含命令参数解析
//   - ❌ 不应包含翻译查找逻辑
//
// ============================================================================

use anyhow::Result;

use lingo::models::config::Config;
use lingo::{SessionTranslator, TranslationStore, Translator, VerboseSession};

use crate::utils::logger::Logger;
use crate::{t, tf};

/// 加载配置的翻译目录
pub fn load_store(config: &Config) -> Result<TranslationStore> {
    let dir = std::path::Path::new(&config.translations.dir);
    if !dir.is_dir() {
        anyhow::bail!(tf!("error.translations_not_found", dir = dir.display().to_string()));
    }

    let store = TranslationStore::load_dir(dir, &config.translations.ignore)?;
    if config.output.verbose {
        Logger::info(tf!(
            "load.loaded",
            count = store.locales().len(),
            dir = dir.display().to_string()
        ));
    }
    Ok(store)
}

/// 按配置构建翻译器（不考虑会话标志）
pub fn build_translator(config: &Config) -> Result<Translator> {
    let store = load_store(config)?;
    Ok(Translator::builder()
        .store(store)
        .settings(config.translator_settings())
        .build())
}

/// 按配置构建翻译器，会话标志开启时包装为调试翻译器
pub fn session_translator(config: &Config) -> Result<SessionTranslator> {
    let translator = build_translator(config)?;
    let session = VerboseSession::restore(std::path::Path::new(&config.session.state_file), translator);
    if session.is_verbose() && config.output.verbose {
        Logger::info(t!("load.verbose_active"));
    }
    Ok(session)
}
