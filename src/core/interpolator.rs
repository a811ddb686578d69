// ============================================================================
// Lingo - 插值器
// ============================================================================
//
// 文件: src/core/interpolator.rs
// 职责: 将模板中的 `{{name}}` / `%{name}` 占位符替换为参数值
// 边界:
//   - ✅ 占位符匹配
//   - ✅ 参数值替换和缺失标记
//   - ❌ 不应包含键查找逻辑
//   - ❌ 不应包含复数选择
//
// 替换只对原始模板做一次从左到右的扫描，替换进来的文本不会被再次匹配。
//
// ============================================================================

use regex::{Captures, Regex};
use std::borrow::Cow;
use std::sync::OnceLock;

use crate::models::options::LookupOptions;

/// 占位符模式：`{{name}}` 或 `%{name}`
pub const PLACEHOLDER_PATTERN: &str = r"(?:\{\{|%\{)(.*?)(?:\}\}?)";

static PLACEHOLDER: OnceLock<Regex> = OnceLock::new();

fn placeholder() -> &'static Regex {
    PLACEHOLDER.get_or_init(|| {
        Regex::new(PLACEHOLDER_PATTERN).unwrap_or_else(|e| panic!("invalid placeholder pattern: {e}"))
    })
}

/// 模板中是否含有占位符
pub fn has_placeholders(template: &str) -> bool {
    placeholder().is_match(template)
}

/// 替换模板中的占位符
///
/// 参数缺失时输出 `[missing {{name}} value]`。
pub fn interpolate<'t>(template: &'t str, options: &LookupOptions) -> Cow<'t, str> {
    if !has_placeholders(template) {
        return Cow::Borrowed(template);
    }
    placeholder().replace_all(template, |caps: &Captures<'_>| {
        let literal = &caps[0];
        let name = &caps[1];
        match options.value(name) {
            Some(value) => value.to_string(),
            None => {
                tracing::trace!("no value for placeholder {}", literal);
                format!("[missing {} value]", literal)
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_both_placeholder_styles() {
        let options = LookupOptions::new().with("name", "World").with("site", "Forum");
        assert_eq!(interpolate("Hello {{name}}", &options), "Hello World");
        assert_eq!(interpolate("Welcome to %{site}, %{name}!", &options), "Welcome to Forum, World!");
    }

    #[test]
    fn output_without_placeholders_is_stable() {
        let options = LookupOptions::new().with("name", "World");
        let once = interpolate("Hello {{name}}", &options).into_owned();
        assert_eq!(interpolate(&once, &options), once);
        assert!(!has_placeholders("plain"));
        assert!(matches!(interpolate("plain", &options), Cow::Borrowed("plain")));
        assert!(has_placeholders("{{name}}") && has_placeholders("%{name}"));
    }

    #[test]
    fn missing_values_render_marker() {
        let options = LookupOptions::new();
        assert_eq!(interpolate("Hi {{name}}", &options), "Hi [missing {{name}} value]");
        assert_eq!(interpolate("Hi %{name}", &options), "Hi [missing %{name} value]");
    }

    #[test]
    fn dollar_signs_are_inserted_verbatim() {
        let options = LookupOptions::new().with("a", "$5").with("b", "$1 $$");
        assert_eq!(interpolate("{{a}}", &options), "$5");
        assert_eq!(interpolate("%{b}", &options), "$1 $$");
    }

    #[test]
    fn repeated_placeholders_are_resolved_per_occurrence() {
        let options = LookupOptions::new().with("x", "A");
        assert_eq!(interpolate("{{x}} and %{x} and {{x}}", &options), "A and A and A");
    }

    #[test]
    fn non_string_values_are_displayed() {
        let options = LookupOptions::new().with("n", 42).with("ok", true).with("ratio", 0.5);
        assert_eq!(interpolate("{{n}} {{ok}} {{ratio}}", &options), "42 true 0.5");
        assert_eq!(interpolate("%{count} left", &LookupOptions::new().count(3)), "3 left");
    }

    #[test]
    fn substituted_text_is_not_rescanned() {
        let options = LookupOptions::new().with("a", "{{b}}").with("b", "B");
        assert_eq!(interpolate("{{a}} {{b}}", &options), "{{b}} B");
    }
}
