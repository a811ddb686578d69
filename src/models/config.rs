// ============================================================================
// Lingo - 配置数据模型
// ============================================================================
//
// 文件: src/models/config.rs
// 职责: 配置文件数据结构定义和操作
// 边界:
//   - ✅ 配置文件数据结构定义
//   - ✅ 配置序列化/反序列化
//   - ✅ 配置默认值
//   - ✅ 配置文件读写操作
//   - ✅ 运行时参数覆盖
//   - ✅ 转换为翻译器设置
//   - ❌ 不应包含翻译查找逻辑
//   - ❌ 不应包含 CLI 参数解析
//
// ============================================================================

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use crate::core::translator::TranslatorSettings;

/// 全局配置管理器
static GLOBAL_CONFIG: std::sync::OnceLock<Arc<RwLock<Config>>> = std::sync::OnceLock::new();

/// 默认配置文件名
pub const DEFAULT_CONFIG_FILE: &str = "lingo.toml";

/// Lingo 配置文件结构
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// 翻译文件配置
    #[serde(default)]
    pub translations: TranslationsConfig,
    /// 语言配置
    #[serde(default)]
    pub locale: LocaleConfig,
    /// 输出配置
    #[serde(default)]
    pub output: OutputConfig,
    /// 界面语言配置
    #[serde(default)]
    pub i18n: I18nConfig,
    /// 会话配置
    #[serde(default)]
    pub session: SessionConfig,
}

/// 翻译文件配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslationsConfig {
    /// 翻译文件目录
    #[serde(default = "Config::default_translations_dir")]
    pub dir: String,
    /// 排除扫描的文件模式
    #[serde(default)]
    pub ignore: Vec<String>,
}

/// 语言配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocaleConfig {
    /// 当前语言（为空时使用默认语言）
    #[serde(default)]
    pub current: Option<String>,
    /// 默认语言
    #[serde(default = "Config::default_locale")]
    pub default: String,
    /// 回退语言
    #[serde(default)]
    pub fallback: Option<String>,
    /// 关闭语言回退
    #[serde(default)]
    pub no_fallbacks: bool,
    /// 命名空间根
    #[serde(default = "Config::default_namespace_root")]
    pub namespace_root: String,
}

/// 输出配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// 是否详细输出
    #[serde(default)]
    pub verbose: bool,
    /// 是否彩色输出
    #[serde(default = "Config::default_colored")]
    pub colored: bool,
}

/// 界面语言配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct I18nConfig {
    /// 界面语言
    #[serde(default = "Config::default_language")]
    pub language: String,
}

/// 会话配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// 调试模式会话标志文件
    #[serde(default = "Config::default_state_file")]
    pub state_file: String,
}

/// CLI 运行时参数（用于覆盖配置文件）
#[derive(Debug, Clone, Default)]
pub struct RuntimeArgs {
    pub verbose: Option<bool>,
    pub colored: Option<bool>,
    pub language: Option<String>,
    pub locale: Option<String>,
    pub no_fallbacks: Option<bool>,
    pub translations_dir: Option<String>,
}

/// 配置默认值 trait - 不依赖全局配置初始化
pub trait ConfigDefaults {
    /// 获取默认翻译目录
    fn default_translations_dir() -> String {
        "locales".to_string()
    }

    /// 获取默认语言
    fn default_locale() -> String {
        "en".to_string()
    }

    /// 获取默认命名空间根
    fn default_namespace_root() -> String {
        "js".to_string()
    }

    /// 获取默认是否彩色输出
    fn default_colored() -> bool {
        true
    }

    /// 获取默认界面语言
    fn default_language() -> String {
        "en_us".to_string()
    }

    /// 获取默认会话标志文件
    fn default_state_file() -> String {
        ".lingo/session.json".to_string()
    }
}

impl ConfigDefaults for Config {}

impl Config {
    /// 初始化全局配置（程序启动时调用）
    pub fn initialize(config_path: &Path) -> anyhow::Result<()> {
        let config = Self::load_config(config_path)?;
        GLOBAL_CONFIG
            .set(Arc::new(RwLock::new(config)))
            .map_err(|_| anyhow::anyhow!("Global config already initialized"))?;
        Ok(())
    }

    /// 加载配置文件，文件不存在时使用默认配置
    pub fn load_config(config_path: &Path) -> anyhow::Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            Self::from_toml_str(&content)
        } else {
            tracing::debug!("{} not found, using default config", config_path.display());
            Ok(Self::default())
        }
    }

    /// 解析 TOML 配置
    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// 合并运行时参数到全局配置
    pub fn merge_runtime_args(args: RuntimeArgs) -> anyhow::Result<()> {
        let global_config = GLOBAL_CONFIG
            .get()
            .ok_or_else(|| anyhow::anyhow!("Global config not initialized"))?;

        let mut config = global_config
            .write()
            .map_err(|_| anyhow::anyhow!("Failed to acquire config write lock"))?;

        config.apply_runtime_args(args);
        Ok(())
    }

    /// 应用运行时参数
    pub fn apply_runtime_args(&mut self, args: RuntimeArgs) {
        if let Some(verbose) = args.verbose {
            self.output.verbose = verbose;
        }
        if let Some(colored) = args.colored {
            self.output.colored = colored;
        }
        if let Some(language) = args.language {
            self.i18n.language = language;
        }
        if let Some(locale) = args.locale {
            self.locale.current = Some(locale);
        }
        if let Some(no_fallbacks) = args.no_fallbacks {
            self.locale.no_fallbacks = no_fallbacks;
        }
        if let Some(dir) = args.translations_dir {
            self.translations.dir = dir;
        }
    }

    /// 保存配置到文件
    pub fn save_to_file(&self, config_path: &Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    /// 生成默认配置模板
    pub fn generate_default_template() -> Self {
        let mut config = Self::default();
        config.locale.fallback = Some(Self::default_locale());
        config.translations.ignore = vec!["*.bak".to_string(), "drafts/".to_string()];
        config
    }

    /// 生成默认配置模板并保存到文件
    pub fn create_default_config_file(config_path: &Path) -> anyhow::Result<()> {
        let default_config = Self::generate_default_template();
        default_config.save_to_file(config_path)?;
        Ok(())
    }

    /// 转换为翻译器设置
    pub fn translator_settings(&self) -> TranslatorSettings {
        TranslatorSettings {
            locale: self.locale.current.clone(),
            default_locale: self.locale.default.clone(),
            fallback_locale: self.locale.fallback.clone(),
            no_fallbacks: self.locale.no_fallbacks,
            namespace_root: self.locale.namespace_root.clone(),
        }
    }

    /// 全局配置快照
    pub fn snapshot() -> anyhow::Result<Config> {
        Self::read_global(Config::clone)
    }

    fn read_global<R>(read: impl FnOnce(&Config) -> R) -> anyhow::Result<R> {
        let global_config = GLOBAL_CONFIG
            .get()
            .ok_or_else(|| anyhow::anyhow!("Global config not initialized"))?;

        let config = global_config
            .read()
            .map_err(|_| anyhow::anyhow!("Failed to acquire config read lock"))?;

        Ok(read(&config))
    }

    /// 获取界面语言
    pub fn get_language() -> anyhow::Result<String> {
        Self::read_global(|config| config.i18n.language.clone())
    }

    /// 获取详细输出设置（带默认值）
    pub fn get_verbose() -> bool {
        Self::read_global(|config| config.output.verbose).unwrap_or(false)
    }

    /// 获取是否彩色输出（带默认值）
    pub fn get_colored() -> bool {
        Self::read_global(|config| config.output.colored).unwrap_or_else(|_| Self::default_colored())
    }

    /// 获取翻译目录（带默认值）
    pub fn get_translations_dir() -> PathBuf {
        Self::read_global(|config| PathBuf::from(&config.translations.dir))
            .unwrap_or_else(|_| PathBuf::from(Self::default_translations_dir()))
    }

    /// 获取会话标志文件（带默认值）
    pub fn get_state_file() -> PathBuf {
        Self::read_global(|config| PathBuf::from(&config.session.state_file))
            .unwrap_or_else(|_| PathBuf::from(Self::default_state_file()))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            translations: TranslationsConfig::default(),
            locale: LocaleConfig::default(),
            output: OutputConfig::default(),
            i18n: I18nConfig::default(),
            session: SessionConfig::default(),
        }
    }
}

impl Default for TranslationsConfig {
    fn default() -> Self {
        Self {
            dir: Config::default_translations_dir(),
            ignore: Vec::new(),
        }
    }
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            current: None,
            default: Config::default_locale(),
            fallback: None,
            no_fallbacks: false,
            namespace_root: Config::default_namespace_root(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            verbose: false,
            colored: Config::default_colored(),
        }
    }
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            language: Config::default_language(),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            state_file: Config::default_state_file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_uses_defaults() {
        let config = Config::from_toml_str(
            r#"
            [locale]
            current = "hu"
            fallback = "de"
            "#,
        )
        .unwrap();
        assert_eq!(config.locale.current.as_deref(), Some("hu"));
        assert_eq!(config.locale.default, "en");
        assert_eq!(config.locale.namespace_root, "js");
        assert_eq!(config.translations.dir, "locales");
        assert!(config.output.colored);
        assert_eq!(config.i18n.language, "en_us");
    }

    #[test]
    fn runtime_args_override_file_values() {
        let mut config = Config::default();
        config.apply_runtime_args(RuntimeArgs {
            locale: Some("ru".into()),
            no_fallbacks: Some(true),
            colored: Some(false),
            ..RuntimeArgs::default()
        });
        let settings = config.translator_settings();
        assert_eq!(settings.locale.as_deref(), Some("ru"));
        assert!(settings.no_fallbacks);
        assert_eq!(settings.default_locale, "en");
        assert!(!config.output.colored);
    }

    #[test]
    fn template_round_trips_through_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_FILE);
        Config::create_default_config_file(&path).unwrap();
        let loaded = Config::load_config(&path).unwrap();
        assert_eq!(loaded, Config::generate_default_template());
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = Config::load_config(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(loaded, Config::default());
    }
}
