// ============================================================================
// Lingo - 数字格式化
// ============================================================================
//
// 文件: src/core/number.rs
// 职责: 按语言格式化数字、百分比、货币和存储大小
// 边界:
//   - ✅ 千分位分隔、小数分隔符、固定精度
//   - ✅ 去除无意义的尾随零
//   - ✅ 存储大小单位换算（1024 进制）
//   - ✅ 从语言表读取格式（number.format 等）
//   - ❌ 不应包含日期时间格式化
//   - ❌ 不应包含翻译键回退逻辑
//
// 选项优先级: 调用方选项 -> 语言表中的格式 -> 内置默认值
//
// ============================================================================

use crate::core::translator::{Translate, Translator};
use crate::models::options::{LookupOptions, NumberFormatOptions};

const NUMBER_FORMAT_KEY: &str = "number.format";
const PERCENTAGE_FORMAT_KEY: &str = "number.percentage.format";
const CURRENCY_FORMAT_KEY: &str = "number.currency.format";
const STORAGE_UNITS_KEY: &str = "number.human.storage_units";

/// 存储单位键，下标为除以 1024 的次数
const STORAGE_UNITS: [&str; 5] = ["byte", "kb", "mb", "gb", "tb"];
const KILOBYTE: f64 = 1024.0;
const DEFAULT_STORAGE_FORMAT: &str = "%n %u";

/// `to_number` 的内置默认值
pub fn number_defaults() -> NumberFormatOptions {
    NumberFormatOptions::new()
        .precision(3)
        .separator(".")
        .delimiter(",")
        .strip_insignificant_zeros(false)
}

/// 按已经合并好的选项格式化数字，缺失字段使用内置默认值
pub fn format_number(number: f64, options: &NumberFormatOptions) -> String {
    let options = options.clone().merge(&number_defaults());
    let precision = options.precision.unwrap_or(3);
    let separator = options.separator.as_deref().unwrap_or(".");
    let delimiter = options.delimiter.as_deref().unwrap_or(",");

    let fixed = format!("{:.*}", precision, number.abs());
    let (integer, fraction) = match fixed.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (fixed.as_str(), None),
    };

    let mut formatted = group_thousands(integer, delimiter);
    if let Some(fraction) = fraction.filter(|_| precision > 0) {
        let fraction = if options.strip_insignificant_zeros.unwrap_or(false) {
            fraction.trim_end_matches('0')
        } else {
            fraction
        };
        if !fraction.is_empty() {
            formatted.push_str(separator);
            formatted.push_str(fraction);
        }
    }

    if number < 0.0 {
        formatted.insert(0, '-');
    }
    formatted
}

fn group_thousands(digits: &str, delimiter: &str) -> String {
    let bytes = digits.as_bytes();
    let mut groups = Vec::with_capacity(bytes.len() / 3 + 1);
    let mut end = bytes.len();
    while end > 0 {
        let start = end.saturating_sub(3);
        groups.push(&digits[start..end]);
        end = start;
    }
    groups.reverse();
    groups.join(delimiter)
}

/// 把 `%n` 和 `%u` 填入格式模板
fn apply_format(format: &str, number: &str, unit: &str) -> String {
    format.replace("%u", unit).replace("%n", number)
}

impl Translator {
    fn format_options_from(&self, key: &str) -> NumberFormatOptions {
        self.lookup_subtree(key)
            .map(NumberFormatOptions::from_tree)
            .unwrap_or_default()
    }

    /// 按当前语言的 `number.format` 格式化数字
    pub fn to_number(&self, number: f64, options: &NumberFormatOptions) -> String {
        let options = options
            .clone()
            .merge(&self.format_options_from(NUMBER_FORMAT_KEY))
            .merge(&number_defaults());
        format_number(number, &options)
    }

    /// 百分比：`number.percentage.format` -> `number.format` -> 默认值
    pub fn to_percentage(&self, number: f64, options: &NumberFormatOptions) -> String {
        let defaults = NumberFormatOptions::new()
            .precision(3)
            .separator(".")
            .delimiter("")
            .format("%n%");
        let options = options
            .clone()
            .merge(&self.format_options_from(PERCENTAGE_FORMAT_KEY))
            .merge(&self.format_options_from(NUMBER_FORMAT_KEY))
            .merge(&defaults);
        let formatted = format_number(number, &options);
        apply_format(options.format.as_deref().unwrap_or("%n%"), &formatted, "")
    }

    /// 货币：`number.currency.format` -> `number.format` -> 默认值
    ///
    /// 负数的负号放在整个结果前面，如 `-$5.00`。
    pub fn to_currency(&self, number: f64, options: &NumberFormatOptions) -> String {
        let defaults = NumberFormatOptions::new()
            .unit("$")
            .precision(2)
            .format("%u%n")
            .delimiter(",")
            .separator(".");
        let options = options
            .clone()
            .merge(&self.format_options_from(CURRENCY_FORMAT_KEY))
            .merge(&self.format_options_from(NUMBER_FORMAT_KEY))
            .merge(&defaults);
        let formatted = format_number(number.abs(), &options);
        let result = apply_format(
            options.format.as_deref().unwrap_or("%u%n"),
            &formatted,
            options.unit.as_deref().unwrap_or("$"),
        );
        if number < 0.0 {
            format!("-{}", result)
        } else {
            result
        }
    }

    /// 人类可读的存储大小
    ///
    /// 反复除以 1024（最多 4 次）；字节不保留小数，其他单位整数不保留小数、否则保留 1 位。
    pub fn to_human_size(&self, bytes: f64, options: &NumberFormatOptions) -> String {
        let mut size = bytes;
        let mut iterations = 0;
        while size >= KILOBYTE && iterations < 4 {
            size /= KILOBYTE;
            iterations += 1;
        }

        let units_key = format!("{}.units.{}", STORAGE_UNITS_KEY, STORAGE_UNITS[iterations]);
        let (unit, precision) = if iterations == 0 {
            (self.translate(&units_key, &LookupOptions::new().count(size)), 0)
        } else {
            let precision = if size.fract() == 0.0 { 0 } else { 1 };
            (self.translate(&units_key, &LookupOptions::new()), precision)
        };

        let format = self
            .lookup_text(&format!("{}.format", STORAGE_UNITS_KEY))
            .map(|f| f.into_owned())
            .unwrap_or_else(|| DEFAULT_STORAGE_FORMAT.to_string());
        let computed = NumberFormatOptions::new()
            .precision(precision)
            .delimiter("")
            .format(format);
        let options = options
            .clone()
            .merge(&computed)
            .merge(&self.format_options_from(NUMBER_FORMAT_KEY))
            .merge(&number_defaults());

        let number = format_number(size, &options);
        apply_format(
            options.format.as_deref().unwrap_or(DEFAULT_STORAGE_FORMAT),
            &number,
            &unit,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::translation::TranslationStore;

    fn translator() -> Translator {
        let store = TranslationStore::from_json_str(
            r#"{
                "en": {"js": {"number": {
                    "human": {"storage_units": {
                        "format": "%n %u",
                        "units": {
                            "byte": {"one": "Byte", "other": "Bytes"},
                            "kb": "KB", "mb": "MB", "gb": "GB", "tb": "TB"
                        }
                    }}
                }}},
                "hu": {"js": {"number": {
                    "format": {"separator": ",", "delimiter": " ", "precision": 2},
                    "currency": {"format": {"unit": "Ft", "format": "%n %u", "precision": 0}}
                }}}
            }"#,
        )
        .unwrap();
        Translator::builder().store(store).build()
    }

    #[test]
    fn formats_with_defaults() {
        let t = translator();
        assert_eq!(t.to_number(1234567.891, &NumberFormatOptions::new()), "1,234,567.891");
        assert_eq!(t.to_number(-1234.5, &NumberFormatOptions::new()), "-1,234.500");
        assert_eq!(t.to_number(12.0, &NumberFormatOptions::new().precision(0)), "12");
        assert_eq!(t.to_number(999.0, &NumberFormatOptions::new().precision(0)), "999");
    }

    #[test]
    fn strips_insignificant_zeros() {
        let t = translator();
        let options = NumberFormatOptions::new().strip_insignificant_zeros(true);
        assert_eq!(t.to_number(1.5, &options), "1.5");
        assert_eq!(t.to_number(2.0, &options), "2");
        assert_eq!(t.to_number(100.0, &options.clone().precision(0)), "100");
    }

    #[test]
    fn locale_number_format_applies() {
        let mut t = translator();
        t.set_locale(Some("hu".into()));
        assert_eq!(t.to_number(1234.567, &NumberFormatOptions::new()), "1 234,57");
        assert_eq!(
            t.to_number(1234.567, &NumberFormatOptions::new().precision(1)),
            "1 234,6"
        );
        assert_eq!(t.to_currency(1500.0, &NumberFormatOptions::new()), "1 500 Ft");
    }

    #[test]
    fn currency_and_percentage() {
        let t = translator();
        assert_eq!(t.to_currency(1234.5, &NumberFormatOptions::new()), "$1,234.50");
        assert_eq!(t.to_currency(-5.0, &NumberFormatOptions::new()), "-$5.00");
        assert_eq!(
            t.to_percentage(12.5, &NumberFormatOptions::new().precision(1)),
            "12.5%"
        );
        assert_eq!(t.to_percentage(1000.0, &NumberFormatOptions::new()), "1000.000%");
    }

    #[test]
    fn human_size_thresholds() {
        let t = translator();
        let options = NumberFormatOptions::new();
        assert_eq!(t.to_human_size(1.0, &options), "1 Byte");
        assert_eq!(t.to_human_size(1023.0, &options), "1023 Bytes");
        assert_eq!(t.to_human_size(1024.0, &options), "1 KB");
        assert_eq!(t.to_human_size(1536.0, &options), "1.5 KB");
        assert_eq!(t.to_human_size(1024.0 * 1024.0 * 3.0, &options), "3 MB");
        assert_eq!(t.to_human_size(1024f64.powi(5) * 2.0, &options), "2048 TB");

        let mut hu = translator();
        hu.set_locale(Some("hu".into()));
        assert_eq!(hu.to_human_size(1536.0, &options), "1,5 KB");
        assert_eq!(hu.to_human_size(1024f64.powi(5) * 2.0, &options), "2048 TB");
    }

    #[test]
    fn grouping_handles_short_numbers() {
        assert_eq!(group_thousands("1", ","), "1");
        assert_eq!(group_thousands("1234", ","), "1,234");
        assert_eq!(group_thousands("123456", "."), "123.456");
    }
}
