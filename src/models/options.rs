// ============================================================================
// Lingo - 查询选项数据模型
// ============================================================================
//
// 文件: src/models/options.rs
// 职责: 翻译查询和数字格式化的调用方选项定义
// 边界:
//   - ✅ 翻译查询选项（语言、作用域、计数、默认值）
//   - ✅ 插值参数的类型化定义
//   - ✅ 数字格式化选项
//   - ✅ 选项合并（调用方优先于默认值）
//   - ❌ 不应包含查询逻辑
//   - ❌ 不应包含格式化计算
//
// ============================================================================

use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

use crate::models::translation::{TranslationNode, TranslationTree};

/// 插值参数值
#[derive(Debug, Clone, PartialEq)]
pub enum InterpolationValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
}

impl fmt::Display for InterpolationValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InterpolationValue::Text(s) => write!(f, "{}", s),
            InterpolationValue::Integer(i) => write!(f, "{}", i),
            InterpolationValue::Float(x) => write!(f, "{}", format_count(*x)),
            InterpolationValue::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl Serialize for InterpolationValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            InterpolationValue::Text(s) => serializer.serialize_str(s),
            InterpolationValue::Integer(i) => serializer.serialize_i64(*i),
            InterpolationValue::Float(x) => serializer.serialize_f64(*x),
            InterpolationValue::Bool(b) => serializer.serialize_bool(*b),
        }
    }
}

impl From<&str> for InterpolationValue {
    fn from(value: &str) -> Self {
        InterpolationValue::Text(value.to_string())
    }
}

impl From<String> for InterpolationValue {
    fn from(value: String) -> Self {
        InterpolationValue::Text(value)
    }
}

impl From<i64> for InterpolationValue {
    fn from(value: i64) -> Self {
        InterpolationValue::Integer(value)
    }
}

impl From<i32> for InterpolationValue {
    fn from(value: i32) -> Self {
        InterpolationValue::Integer(i64::from(value))
    }
}

impl From<usize> for InterpolationValue {
    fn from(value: usize) -> Self {
        i64::try_from(value)
            .map(InterpolationValue::Integer)
            .unwrap_or(InterpolationValue::Float(value as f64))
    }
}

impl From<f64> for InterpolationValue {
    fn from(value: f64) -> Self {
        InterpolationValue::Float(value)
    }
}

impl From<bool> for InterpolationValue {
    fn from(value: bool) -> Self {
        InterpolationValue::Bool(value)
    }
}

/// 插值参数表：占位符名 -> 值
pub type InterpolationValues = BTreeMap<String, InterpolationValue>;

/// 翻译查询选项
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LookupOptions {
    /// 覆盖当前语言
    pub locale: Option<String>,
    /// 键前缀
    pub scope: Option<String>,
    /// 复数计数，存在时触发复数选择
    pub count: Option<f64>,
    /// 找不到键时使用的默认模板
    pub default_value: Option<String>,
    /// 插值参数
    pub values: InterpolationValues,
}

impl LookupOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    pub fn scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }

    pub fn count(mut self, count: impl Into<f64>) -> Self {
        self.count = Some(count.into());
        self
    }

    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    /// 添加一个插值参数
    pub fn with(mut self, name: impl Into<String>, value: impl Into<InterpolationValue>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }

    /// 以 `defaults` 补齐未设置的字段，已设置的字段保持不变
    pub fn merge(mut self, defaults: &LookupOptions) -> Self {
        if self.locale.is_none() {
            self.locale = defaults.locale.clone();
        }
        if self.scope.is_none() {
            self.scope = defaults.scope.clone();
        }
        if self.count.is_none() {
            self.count = defaults.count;
        }
        if self.default_value.is_none() {
            self.default_value = defaults.default_value.clone();
        }
        for (name, value) in &defaults.values {
            self.values.entry(name.clone()).or_insert_with(|| value.clone());
        }
        self
    }

    /// 查找插值参数，`count` 也可以作为占位符使用
    pub fn value(&self, name: &str) -> Option<InterpolationValue> {
        if let Some(value) = self.values.get(name) {
            return Some(value.clone());
        }
        match name {
            "count" => self.count.map(InterpolationValue::Float),
            _ => None,
        }
    }

    /// 计数的文本形式（整数不带小数部分）
    pub fn count_string(&self) -> Option<String> {
        self.count.map(format_count)
    }
}

/// 数字格式化选项，未设置的字段按 "调用方 -> 语言表 -> 默认值" 的顺序补齐
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NumberFormatOptions {
    pub precision: Option<usize>,
    pub separator: Option<String>,
    pub delimiter: Option<String>,
    pub strip_insignificant_zeros: Option<bool>,
    /// 包含 `%n`（数字）和 `%u`（单位）的格式模板
    pub format: Option<String>,
    pub unit: Option<String>,
}

impl NumberFormatOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = Some(precision);
        self
    }

    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = Some(separator.into());
        self
    }

    pub fn delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = Some(delimiter.into());
        self
    }

    pub fn strip_insignificant_zeros(mut self, strip: bool) -> Self {
        self.strip_insignificant_zeros = Some(strip);
        self
    }

    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    pub fn unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    /// 从语言表的子树读取格式（如 `number.format`）
    ///
    /// 无法解析的 precision 会被忽略。
    pub fn from_tree(tree: &TranslationTree) -> Self {
        let text = |key: &str| match tree.get(key) {
            Some(TranslationNode::Literal(s)) => Some(s.clone()),
            _ => None,
        };
        Self {
            precision: text("precision").and_then(|p| p.trim().parse().ok()),
            separator: text("separator"),
            delimiter: text("delimiter"),
            strip_insignificant_zeros: text("strip_insignificant_zeros").and_then(|s| s.parse().ok()),
            format: text("format"),
            unit: text("unit"),
        }
    }

    /// 以 `defaults` 补齐未设置的字段
    pub fn merge(mut self, defaults: &NumberFormatOptions) -> Self {
        self.precision = self.precision.or(defaults.precision);
        self.separator = self.separator.or_else(|| defaults.separator.clone());
        self.delimiter = self.delimiter.or_else(|| defaults.delimiter.clone());
        self.strip_insignificant_zeros = self
            .strip_insignificant_zeros
            .or(defaults.strip_insignificant_zeros);
        self.format = self.format.or_else(|| defaults.format.clone());
        self.unit = self.unit.or_else(|| defaults.unit.clone());
        self
    }
}

/// 整数值输出为不带小数的形式，与计数作为复数表键时的写法一致
pub fn format_count(count: f64) -> String {
    if count.is_finite() && count.fract() == 0.0 && count.abs() < 1e15 {
        format!("{}", count as i64)
    } else {
        format!("{}", count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caller_fields_take_precedence() {
        let defaults = LookupOptions::new()
            .locale("de")
            .scope("admin")
            .default_value("fallback")
            .with("name", "Default")
            .with("site", "forum");
        let merged = LookupOptions::new()
            .locale("hu")
            .with("name", "Ann")
            .merge(&defaults);

        assert_eq!(merged.locale.as_deref(), Some("hu"));
        assert_eq!(merged.scope.as_deref(), Some("admin"));
        assert_eq!(merged.default_value.as_deref(), Some("fallback"));
        assert_eq!(merged.values["name"], InterpolationValue::from("Ann"));
        assert_eq!(merged.values["site"], InterpolationValue::from("forum"));
    }

    #[test]
    fn count_is_available_as_placeholder() {
        let options = LookupOptions::new().count(3);
        assert_eq!(options.value("count"), Some(InterpolationValue::Float(3.0)));
        assert_eq!(options.value("count").unwrap().to_string(), "3");
        assert_eq!(options.value("other"), None);
    }

    #[test]
    fn count_string_drops_integral_fraction() {
        assert_eq!(format_count(0.0), "0");
        assert_eq!(format_count(-2.0), "-2");
        assert_eq!(format_count(1.5), "1.5");
    }

    #[test]
    fn number_options_read_from_tree() {
        let mut tree = TranslationTree::new();
        tree.insert_path("precision", "2");
        tree.insert_path("separator", ",");
        tree.insert_path("delimiter", " ");
        let options = NumberFormatOptions::new()
            .separator(".")
            .merge(&NumberFormatOptions::from_tree(&tree));
        assert_eq!(options.precision, Some(2));
        assert_eq!(options.separator.as_deref(), Some("."));
        assert_eq!(options.delimiter.as_deref(), Some(" "));
    }
}
