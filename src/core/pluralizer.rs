// ============================================================================
// Lingo - 复数选择器
// ============================================================================
//
// 文件: src/core/pluralizer.rs
// 职责: 按语言复数规则从复数表中选择模板
// 边界:
//   - ✅ 内置复数规则定义
//   - ✅ 语言 -> 规则注册表
//   - ✅ 复数形式选择（精确计数优先）
//   - ❌ 不应包含键查找逻辑
//   - ❌ 不应包含插值逻辑
//
// 选择顺序:
// 1. 计数的文本形式（如 "0"）精确匹配
// 2. 规则给出的候选类别，按顺序尝试
// 3. "other"
//
// ============================================================================

use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;

use crate::core::resolver::Resolution;
use crate::models::options::LookupOptions;
use crate::models::translation::{PluralForms, TranslationNode};

/// 复数规则最终的兜底语言
pub const FALLBACK_RULE_LOCALE: &str = "en";

/// 复数规则：数量 -> 按优先级排列的候选类别
#[derive(Clone)]
pub enum PluralRule {
    /// 0 -> zero/none/other，1 -> one，其余 -> other
    English,
    /// 1 -> one，其余 -> other
    OneOther,
    /// 0 和 1 -> one，其余 -> other
    French,
    /// 俄语、乌克兰语等：按个位和十位区分 one/few/many
    EastSlavic,
    /// 波兰语
    Polish,
    /// 捷克语、斯洛伐克语：1 -> one，2-4 -> few
    Czech,
    /// 阿拉伯语：zero/one/two/few/many/other
    Arabic,
    /// 无复数区分
    NoPlural,
    /// 自定义规则
    Custom(fn(f64) -> &'static [&'static str]),
}

impl PluralRule {
    /// 计算候选类别，输入取绝对值
    pub fn categorize(&self, count: f64) -> &'static [&'static str] {
        let n = count.abs();
        match self {
            PluralRule::English => english_rule(n),
            PluralRule::OneOther => one_other_rule(n),
            PluralRule::French => french_rule(n),
            PluralRule::EastSlavic => east_slavic_rule(n),
            PluralRule::Polish => polish_rule(n),
            PluralRule::Czech => czech_rule(n),
            PluralRule::Arabic => arabic_rule(n),
            PluralRule::NoPlural => &["other"],
            PluralRule::Custom(rule) => rule(n),
        }
    }
}

impl fmt::Debug for PluralRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PluralRule::English => write!(f, "PluralRule::English"),
            PluralRule::OneOther => write!(f, "PluralRule::OneOther"),
            PluralRule::French => write!(f, "PluralRule::French"),
            PluralRule::EastSlavic => write!(f, "PluralRule::EastSlavic"),
            PluralRule::Polish => write!(f, "PluralRule::Polish"),
            PluralRule::Czech => write!(f, "PluralRule::Czech"),
            PluralRule::Arabic => write!(f, "PluralRule::Arabic"),
            PluralRule::NoPlural => write!(f, "PluralRule::NoPlural"),
            PluralRule::Custom(_) => write!(f, "PluralRule::Custom(..)"),
        }
    }
}

/// 语言 -> 复数规则注册表
#[derive(Debug, Clone)]
pub struct PluralRules {
    rules: HashMap<String, PluralRule>,
}

impl Default for PluralRules {
    fn default() -> Self {
        Self::builtin()
    }
}

impl PluralRules {
    /// 只包含 `en` 规则的注册表
    pub fn empty() -> Self {
        let mut rules = HashMap::new();
        rules.insert(FALLBACK_RULE_LOCALE.to_string(), PluralRule::English);
        Self { rules }
    }

    /// 常见语言的内置规则
    pub fn builtin() -> Self {
        let mut registry = Self::empty();
        let groups: &[(&[&str], PluralRule)] = &[
            (
                &[
                    "de", "nl", "sv", "da", "nb", "nn", "no", "fi", "et", "hu", "it", "es", "pt",
                    "el", "bg", "ca", "gl", "he", "sq", "ur", "fa_IR",
                ],
                PluralRule::OneOther,
            ),
            (&["fr", "pt_BR", "hy"], PluralRule::French),
            (&["ru", "uk", "be", "sr", "hr", "bs"], PluralRule::EastSlavic),
            (&["pl", "pl_PL"], PluralRule::Polish),
            (&["cs", "sk"], PluralRule::Czech),
            (&["ar"], PluralRule::Arabic),
            (
                &["ja", "ko", "zh", "zh_CN", "zh_TW", "vi", "th", "id", "ms", "tr_TR", "tr"],
                PluralRule::NoPlural,
            ),
        ];
        for (locales, rule) in groups {
            for locale in *locales {
                registry.register(*locale, rule.clone());
            }
        }
        registry
    }

    /// 注册或覆盖一个语言的规则
    pub fn register(&mut self, locale: impl Into<String>, rule: PluralRule) {
        self.rules.insert(locale.into(), rule);
    }

    /// 查找规则：精确语言 -> 主语言子标签 -> `en`
    pub fn rule_for(&self, locale: &str) -> &PluralRule {
        if let Some(rule) = self.rules.get(locale) {
            return rule;
        }
        let primary = locale.split(['-', '_']).next().unwrap_or(locale);
        self.rules
            .get(primary)
            .or_else(|| self.rules.get(FALLBACK_RULE_LOCALE))
            .unwrap_or(&PluralRule::English)
    }
}

/// 从解析结果中按计数选出模板
///
/// 普通模板原样返回。子树按同样的顺序在其字符串子节点中选择。找不到匹配形式时，`ignore_missing` 为真返回 `None`
/// 以便调用方继续尝试其他语言，否则返回缺失标记。
pub fn pluralize<'a>(
    resolution: Resolution<'a>,
    key: &str,
    options: &LookupOptions,
    rules: &PluralRules,
    current_locale: &str,
    ignore_missing: bool,
) -> Option<Cow<'a, str>> {
    let count = options.count.unwrap_or(0.0);
    let locale = options.locale.as_deref().unwrap_or(current_locale);
    let candidates = rules.rule_for(locale).categorize(count);

    let selected = match resolution {
        Resolution::Template(template) => return Some(template),
        Resolution::Forms(forms) => select_form(|name| forms.get(name), options, candidates),
        // 混合子树：只有字符串子节点可以充当复数形式
        Resolution::Subtree(tree) => select_form(
            |name| match tree.get(name) {
                Some(TranslationNode::Literal(text)) => Some(text.as_str()),
                _ => None,
            },
            options,
            candidates,
        ),
    };
    if let Some(template) = selected {
        return Some(Cow::Borrowed(template));
    }

    if ignore_missing {
        return None;
    }
    let category = candidates.first().copied().unwrap_or("other");
    Some(Cow::Owned(missing_translation(current_locale, key, Some(category))))
}

fn select_form<'a>(
    form: impl Fn(&str) -> Option<&'a str>,
    options: &LookupOptions,
    candidates: &[&str],
) -> Option<&'a str> {
    if let Some(exact) = options.count_string().and_then(|count| form(&count)) {
        return Some(exact);
    }
    candidates
        .iter()
        .find_map(|category| form(*category))
        .or_else(|| form("other"))
}

/// 缺失翻译标记：`[<locale>.<key>]` 或 `[<locale>.<key>.<category>]`
pub fn missing_translation(locale: &str, key: &str, category: Option<&str>) -> String {
    match category {
        Some(category) => format!("[{}.{}.{}]", locale, key, category),
        None => format!("[{}.{}]", locale, key),
    }
}

// ── 内置规则 ─────────────────────────────────────────────

fn is_integer(n: f64) -> bool {
    n.fract() == 0.0
}

fn english_rule(n: f64) -> &'static [&'static str] {
    if n == 0.0 {
        &["zero", "none", "other"]
    } else if n == 1.0 {
        &["one"]
    } else {
        &["other"]
    }
}

fn one_other_rule(n: f64) -> &'static [&'static str] {
    if n == 1.0 {
        &["one"]
    } else {
        &["other"]
    }
}

fn french_rule(n: f64) -> &'static [&'static str] {
    if n < 2.0 {
        &["one"]
    } else {
        &["other"]
    }
}

fn east_slavic_rule(n: f64) -> &'static [&'static str] {
    if !is_integer(n) {
        return &["other"];
    }
    let n = n as u64;
    let (mod10, mod100) = (n % 10, n % 100);
    if mod10 == 1 && mod100 != 11 {
        &["one"]
    } else if (2..=4).contains(&mod10) && !(12..=14).contains(&mod100) {
        &["few"]
    } else {
        &["many"]
    }
}

fn polish_rule(n: f64) -> &'static [&'static str] {
    if !is_integer(n) {
        return &["other"];
    }
    let n = n as u64;
    let (mod10, mod100) = (n % 10, n % 100);
    if n == 1 {
        &["one"]
    } else if (2..=4).contains(&mod10) && !(12..=14).contains(&mod100) {
        &["few"]
    } else {
        &["many"]
    }
}

fn czech_rule(n: f64) -> &'static [&'static str] {
    if n == 1.0 {
        &["one"]
    } else if is_integer(n) && (2.0..=4.0).contains(&n) {
        &["few"]
    } else if !is_integer(n) {
        &["many"]
    } else {
        &["other"]
    }
}

fn arabic_rule(n: f64) -> &'static [&'static str] {
    if !is_integer(n) {
        return &["other"];
    }
    let n = n as u64;
    let mod100 = n % 100;
    match n {
        0 => &["zero"],
        1 => &["one"],
        2 => &["two"],
        _ if (3..=10).contains(&mod100) => &["few"],
        _ if (11..=99).contains(&mod100) => &["many"],
        _ => &["other"],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::translation::TranslationTree;

    fn items() -> PluralForms {
        PluralForms::new().with("one", "1 item").with("other", "N items")
    }

    fn select(forms: &PluralForms, locale: &str, count: f64, ignore_missing: bool) -> Option<String> {
        let options = LookupOptions::new().count(count);
        pluralize(
            Resolution::Forms(forms),
            "items",
            &options,
            &PluralRules::builtin(),
            locale,
            ignore_missing,
        )
        .map(Cow::into_owned)
    }

    #[test]
    fn english_categories() {
        let forms = items();
        assert_eq!(select(&forms, "en", 1.0, false).as_deref(), Some("1 item"));
        assert_eq!(select(&forms, "en", 0.0, false).as_deref(), Some("N items"));
        assert_eq!(select(&forms, "en", 5.0, false).as_deref(), Some("N items"));
    }

    #[test]
    fn exact_count_key_wins_over_category() {
        let forms = items().with("0", "no items").with("zero", "zero items");
        assert_eq!(select(&forms, "en", 0.0, false).as_deref(), Some("no items"));
    }

    #[test]
    fn english_zero_prefers_zero_then_none() {
        let forms = items().with("none", "none at all");
        assert_eq!(select(&forms, "en", 0.0, false).as_deref(), Some("none at all"));
    }

    #[test]
    fn negative_counts_use_magnitude() {
        let forms = items();
        assert_eq!(select(&forms, "en", -1.0, false).as_deref(), Some("1 item"));
    }

    #[test]
    fn plain_template_passes_through() {
        let options = LookupOptions::new().count(7);
        let result = pluralize(
            Resolution::Template(Cow::Borrowed("just text")),
            "key",
            &options,
            &PluralRules::builtin(),
            "en",
            false,
        );
        assert_eq!(result.as_deref(), Some("just text"));
    }

    #[test]
    fn missing_form_yields_marker_or_none() {
        let forms = PluralForms::new().with("few", "a few");
        assert_eq!(
            select(&forms, "en", 1.0, false).as_deref(),
            Some("[en.items.one]")
        );
        assert_eq!(select(&forms, "en", 1.0, true), None);
    }

    #[test]
    fn mixed_subtree_selects_literal_children() {
        let map: serde_json::Map<String, serde_json::Value> = serde_json::from_str(
            r#"{"one": "1 topic", "other": "many topics", "title": "Topics", "nested": {"few": "x"}}"#,
        )
        .unwrap();
        let tree = TranslationTree::from_map(&map);
        let pick = |count: f64| {
            pluralize(
                Resolution::Subtree(&tree),
                "topics",
                &LookupOptions::new().count(count),
                &PluralRules::builtin(),
                "en",
                false,
            )
            .map(Cow::into_owned)
        };
        assert_eq!(pick(1.0).as_deref(), Some("1 topic"));
        assert_eq!(pick(4.0).as_deref(), Some("many topics"));

        let ru = pluralize(
            Resolution::Subtree(&tree),
            "topics",
            &LookupOptions::new().count(3),
            &PluralRules::builtin(),
            "ru",
            false,
        );
        assert_eq!(ru.as_deref(), Some("many topics"));
    }

    #[test]
    fn slavic_rules() {
        let forms = PluralForms::new()
            .with("one", "файл")
            .with("few", "файла")
            .with("many", "файлов")
            .with("other", "файла*");
        assert_eq!(select(&forms, "ru", 1.0, false).as_deref(), Some("файл"));
        assert_eq!(select(&forms, "ru", 3.0, false).as_deref(), Some("файла"));
        assert_eq!(select(&forms, "ru", 11.0, false).as_deref(), Some("файлов"));
        assert_eq!(select(&forms, "ru", 21.0, false).as_deref(), Some("файл"));
        assert_eq!(select(&forms, "ru", 1.5, false).as_deref(), Some("файла*"));
    }

    #[test]
    fn unknown_locale_uses_english_rule() {
        let rules = PluralRules::builtin();
        assert_eq!(rules.rule_for("xx").categorize(0.0), &["zero", "none", "other"]);
        assert_eq!(rules.rule_for("de_AT").categorize(0.0), &["other"]);
    }

    #[test]
    fn custom_rule_registration() {
        fn always_few(_: f64) -> &'static [&'static str] {
            &["few", "other"]
        }
        let mut rules = PluralRules::empty();
        rules.register("xx", PluralRule::Custom(always_few));
        assert_eq!(rules.rule_for("xx").categorize(1.0), &["few", "other"]);
    }
}
