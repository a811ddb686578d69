// ============================================================================
// Lingo - 翻译器
// ============================================================================
//
// 文件: src/core/translator.rs
// 职责: 翻译上下文对象，串联查找、语言回退、复数选择和插值
// 边界:
//   - ✅ 当前语言 / 默认语言 / 回退语言管理
//   - ✅ 语言回退链
//   - ✅ 缺失翻译标记
//   - ✅ Translate 接口定义
//   - ❌ 不应包含翻译表解析
//   - ❌ 不应包含调试输出逻辑（见 verbose 模块）
//
// 回退顺序:
// 1. 请求的语言（或当前语言）
// 2. 配置的回退语言
// 3. 默认语言（与当前语言不同时）
// 4. "en"（与当前语言不同时）
//
// ============================================================================

use std::borrow::Cow;
use std::sync::Arc;

use crate::core::interpolator::interpolate;
use crate::core::pluralizer::{self, PluralRule, PluralRules};
use crate::core::resolver::{KeyPath, KeyResolver, Resolution, DEFAULT_NAMESPACE_ROOT};
use crate::models::options::LookupOptions;
use crate::models::translation::{TranslationStore, TranslationTree};

/// 回退链最后一站
pub const ULTIMATE_FALLBACK_LOCALE: &str = "en";

/// 翻译接口
pub trait Translate {
    /// 翻译一个点分键，永不失败
    fn translate(&self, key: &str, options: &LookupOptions) -> String;

    /// 无参数翻译
    fn t(&self, key: &str) -> String {
        self.translate(key, &LookupOptions::default())
    }
}

/// 翻译器的语言设置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslatorSettings {
    /// 当前语言，为空时使用默认语言
    pub locale: Option<String>,
    /// 默认语言
    pub default_locale: String,
    /// 回退语言
    pub fallback_locale: Option<String>,
    /// 关闭语言回退
    pub no_fallbacks: bool,
    /// 命名空间根
    pub namespace_root: String,
}

impl Default for TranslatorSettings {
    fn default() -> Self {
        Self {
            locale: None,
            default_locale: ULTIMATE_FALLBACK_LOCALE.to_string(),
            fallback_locale: None,
            no_fallbacks: false,
            namespace_root: DEFAULT_NAMESPACE_ROOT.to_string(),
        }
    }
}

/// 单次查找的结果
enum Found<'s> {
    /// 可以插值的文本
    Text(Cow<'s, str>),
    /// 找到了节点但无法渲染（子树，或没有计数的复数表），终止回退
    Unrenderable,
}

/// 翻译器
///
/// 翻译表和复数规则在多个翻译器之间通过 `Arc` 共享，构造后只读。
#[derive(Debug, Clone)]
pub struct Translator {
    store: Arc<TranslationStore>,
    rules: Arc<PluralRules>,
    settings: TranslatorSettings,
    defaults: LookupOptions,
}

impl Translator {
    /// 使用内置复数规则创建
    pub fn new(store: Arc<TranslationStore>, settings: TranslatorSettings) -> Self {
        Self {
            store,
            rules: Arc::new(PluralRules::builtin()),
            settings,
            defaults: LookupOptions::default(),
        }
    }

    pub fn builder() -> TranslatorBuilder {
        TranslatorBuilder::default()
    }

    pub fn settings(&self) -> &TranslatorSettings {
        &self.settings
    }

    pub fn store(&self) -> &Arc<TranslationStore> {
        &self.store
    }

    pub fn plural_rules(&self) -> &PluralRules {
        &self.rules
    }

    /// 当前语言：显式设置的语言，否则为默认语言
    pub fn current_locale(&self) -> &str {
        self.settings
            .locale
            .as_deref()
            .unwrap_or(&self.settings.default_locale)
    }

    pub fn set_locale(&mut self, locale: Option<String>) {
        self.settings.locale = locale;
    }

    pub fn set_fallback_locale(&mut self, locale: Option<String>) {
        self.settings.fallback_locale = locale;
    }

    pub fn set_no_fallbacks(&mut self, no_fallbacks: bool) {
        self.settings.no_fallbacks = no_fallbacks;
    }

    /// 以翻译器默认选项补齐调用方选项
    pub fn prepare_options(&self, options: &LookupOptions) -> LookupOptions {
        options.clone().merge(&self.defaults)
    }

    /// 单语言查找，不做回退
    pub fn lookup<'k>(
        &self,
        key: impl Into<KeyPath<'k>>,
        options: &LookupOptions,
    ) -> Option<Resolution<'_>> {
        KeyResolver::new(&self.store, &self.settings.namespace_root).lookup(
            key.into(),
            options,
            self.current_locale(),
        )
    }

    /// 查找一个子树（如 `number.format`），当前语言找不到时不回退
    pub fn lookup_subtree(&self, key: &str) -> Option<&TranslationTree> {
        match self.lookup(key, &LookupOptions::default())? {
            Resolution::Subtree(tree) => Some(tree),
            _ => None,
        }
    }

    /// 查找一个不需要插值的文本，当前语言找不到时不回退
    pub fn lookup_text(&self, key: &str) -> Option<Cow<'_, str>> {
        match self.lookup(key, &LookupOptions::default())? {
            Resolution::Template(text) => Some(text),
            _ => None,
        }
    }

    /// 按计数从解析结果中选择模板
    pub fn pluralize<'a>(
        &self,
        resolution: Resolution<'a>,
        key: &str,
        options: &LookupOptions,
        ignore_missing: bool,
    ) -> Option<Cow<'a, str>> {
        pluralizer::pluralize(
            resolution,
            key,
            options,
            &self.rules,
            self.current_locale(),
            ignore_missing,
        )
    }

    /// 当前语言下的缺失翻译标记
    pub fn missing_translation(&self, key: &str, category: Option<&str>) -> String {
        pluralizer::missing_translation(self.current_locale(), key, category)
    }

    /// 翻译（支持预拆分键）
    pub fn translate_path<'k>(&self, key: impl Into<KeyPath<'k>>, options: &LookupOptions) -> String {
        let key = key.into();
        let dotted = key.to_dotted();
        let mut options = self.prepare_options(options);
        let needs_pluralization = options.count.is_some();
        let fallbacks = !self.settings.no_fallbacks;

        let mut found = self.find_translation(key, &options, needs_pluralization, fallbacks);

        if fallbacks {
            let current = self.current_locale().to_string();

            if found.is_none() {
                if let Some(fallback) = self.settings.fallback_locale.clone() {
                    tracing::debug!("'{}' missing in {}, trying fallback locale {}", dotted, current, fallback);
                    options.locale = Some(fallback);
                    found = self.find_translation(key, &options, needs_pluralization, true);
                }
            }

            let later_steps = [self.settings.default_locale.as_str(), ULTIMATE_FALLBACK_LOCALE];
            for locale in later_steps {
                if found.is_some() {
                    break;
                }
                if locale == current {
                    continue;
                }
                tracing::debug!("'{}' missing, trying locale {}", dotted, locale);
                options.locale = Some(locale.to_string());
                found = self.find_translation(key, &options, needs_pluralization, false);
            }
        }

        match found {
            Some(Found::Text(template)) => interpolate(&template, &options).into_owned(),
            Some(Found::Unrenderable) | None => {
                tracing::debug!("no translation for '{}' in {}", dotted, self.current_locale());
                self.missing_translation(&dotted, None)
            }
        }
    }

    fn find_translation(
        &self,
        key: KeyPath<'_>,
        options: &LookupOptions,
        needs_pluralization: bool,
        ignore_missing: bool,
    ) -> Option<Found<'_>> {
        let resolution = self.lookup(key, options)?;
        if needs_pluralization {
            let dotted = key.to_dotted();
            return self
                .pluralize(resolution, &dotted, options, ignore_missing)
                .map(Found::Text);
        }
        match resolution {
            Resolution::Template(text) => Some(Found::Text(text)),
            Resolution::Forms(_) | Resolution::Subtree(_) => Some(Found::Unrenderable),
        }
    }
}

impl Translate for Translator {
    fn translate(&self, key: &str, options: &LookupOptions) -> String {
        self.translate_path(key, options)
    }
}

/// 翻译器构造器
#[derive(Debug, Default)]
pub struct TranslatorBuilder {
    store: Option<Arc<TranslationStore>>,
    rules: Option<PluralRules>,
    extra_rules: Vec<(String, PluralRule)>,
    settings: TranslatorSettings,
    defaults: LookupOptions,
}

impl TranslatorBuilder {
    pub fn store(mut self, store: TranslationStore) -> Self {
        self.store = Some(Arc::new(store));
        self
    }

    pub fn shared_store(mut self, store: Arc<TranslationStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// 替换整个复数规则注册表
    pub fn plural_rules(mut self, rules: PluralRules) -> Self {
        self.rules = Some(rules);
        self
    }

    /// 为单个语言注册复数规则
    pub fn plural_rule(mut self, locale: impl Into<String>, rule: PluralRule) -> Self {
        self.extra_rules.push((locale.into(), rule));
        self
    }

    pub fn settings(mut self, settings: TranslatorSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.settings.locale = Some(locale.into());
        self
    }

    pub fn default_locale(mut self, locale: impl Into<String>) -> Self {
        self.settings.default_locale = locale.into();
        self
    }

    pub fn fallback_locale(mut self, locale: impl Into<String>) -> Self {
        self.settings.fallback_locale = Some(locale.into());
        self
    }

    pub fn no_fallbacks(mut self, no_fallbacks: bool) -> Self {
        self.settings.no_fallbacks = no_fallbacks;
        self
    }

    pub fn namespace_root(mut self, root: impl Into<String>) -> Self {
        self.settings.namespace_root = root.into();
        self
    }

    /// 每次翻译都会合并进来的默认选项（调用方字段优先）
    pub fn default_options(mut self, defaults: LookupOptions) -> Self {
        self.defaults = defaults;
        self
    }

    pub fn build(self) -> Translator {
        let mut rules = self.rules.unwrap_or_default();
        for (locale, rule) in self.extra_rules {
            rules.register(locale, rule);
        }
        Translator {
            store: self.store.unwrap_or_default(),
            rules: Arc::new(rules),
            settings: self.settings,
            defaults: self.defaults,
        }
    }
}
