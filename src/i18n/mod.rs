// ============================================================================
// Lingo - 国际化模块
// ============================================================================
//
// 文件: src/i18n/mod.rs
// 职责: 命令行界面自身文字的国际化
// 边界:
//   - ✅ 界面翻译表初始化（经由库自身的 Translator）
//   - ✅ 翻译宏定义和实现
//   - ✅ 界面语言切换
//   - ✅ 参数化和复数翻译
//   - ❌ 不应包含具体翻译内容
//   - ❌ 不应包含业务逻辑
//   - ❌ 不应包含文件操作逻辑
//
// ============================================================================

pub mod en_us;
pub mod zh_cn;

use std::sync::OnceLock;

use lingo::models::config::Config;
use lingo::{Translate, TranslationStore, Translator};

pub use lingo::LookupOptions;

/// 界面翻译的命名空间根
const NAMESPACE_ROOT: &str = "cli";

static UI_TRANSLATOR: OnceLock<Translator> = OnceLock::new();

fn ui_translator() -> &'static Translator {
    UI_TRANSLATOR.get_or_init(|| {
        let mut store = TranslationStore::from_pairs("en", NAMESPACE_ROOT, en_us::TRANSLATIONS);
        store.merge(TranslationStore::from_pairs("zh_CN", NAMESPACE_ROOT, zh_cn::TRANSLATIONS));
        Translator::builder()
            .store(store)
            .namespace_root(NAMESPACE_ROOT)
            .default_locale("en")
            .build()
    })
}

/// 界面语言设置 -> 翻译表语言代码
fn locale_for_language(language: &str) -> &'static str {
    match language {
        "zh_cn" => "zh_CN",
        _ => "en",
    }
}

/// 获取翻译文本
pub fn get_translation(key: &str, options: LookupOptions) -> String {
    // 每次都从配置获取语言设置
    let language = Config::get_language().unwrap_or_else(|_| "en_us".to_string());

    let mut translator = ui_translator().clone();
    translator.set_locale(Some(locale_for_language(&language).to_string()));
    translator.translate(key, &options)
}

/// 简单翻译宏
#[macro_export]
macro_rules! t {
    ($key:expr) => {
        $crate::i18n::get_translation($key, $crate::i18n::LookupOptions::new())
    };
}

/// 带参数的翻译宏，`count = n` 会触发复数选择
#[macro_export]
macro_rules! tf {
    ($key:expr, count = $count:expr $(, $name:ident = $value:expr)* $(,)?) => {{
        let options = $crate::i18n::LookupOptions::new()
            .count($count as f64)
            $(.with(stringify!($name), $value))*;
        $crate::i18n::get_translation($key, options)
    }};
    ($key:expr, $($name:ident = $value:expr),+ $(,)?) => {{
        let options = $crate::i18n::LookupOptions::new()
            $(.with(stringify!($name), $value))+;
        $crate::i18n::get_translation($key, options)
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    fn translate_in(language: &str, key: &str, options: LookupOptions) -> String {
        let mut translator = ui_translator().clone();
        translator.set_locale(Some(locale_for_language(language).to_string()));
        translator.translate(key, &options)
    }

    #[test]
    fn every_chinese_key_exists_in_english() {
        let english: Vec<&str> = en_us::TRANSLATIONS.iter().map(|(k, _)| *k).collect();
        for (key, _) in zh_cn::TRANSLATIONS {
            assert!(english.contains(key), "zh_cn key '{}' has no English entry", key);
        }
    }

    #[test]
    fn plural_messages_follow_count() {
        let one = translate_in(
            "en_us",
            "check.missing",
            LookupOptions::new().count(1.0).with("locale", "de").with("percent", "50.0"),
        );
        let many = translate_in(
            "en_us",
            "check.missing",
            LookupOptions::new().count(4.0).with("locale", "de").with("percent", "20.0"),
        );
        assert_eq!(one, "de: 1 missing key (50.0%)");
        assert_eq!(many, "de: 4 missing keys (20.0%)");
    }

    #[test]
    fn interface_language_selects_table() {
        assert_eq!(translate_in("zh_cn", "init.start", LookupOptions::new()), "正在初始化配置文件...");
        assert_eq!(
            translate_in("fr", "init.start", LookupOptions::new()),
            "Initializing configuration file..."
        );
        assert_eq!(
            translate_in(
                "zh_cn",
                "check.missing",
                LookupOptions::new().count(1.0).with("locale", "de").with("percent", "50.0"),
            ),
            "de: 缺失 1 个键 (50.0%)"
        );
    }

    #[test]
    fn macros_read_without_global_config() {
        assert_eq!(crate::t!("init.start"), "Initializing configuration file...");
        assert_eq!(
            crate::tf!("init.config_created", path = "lingo.toml"),
            "Configuration file created: lingo.toml"
        );
    }
}
