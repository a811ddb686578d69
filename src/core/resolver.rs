// ============================================================================
// Lingo - 键解析器
// ============================================================================
//
// 文件: src/core/resolver.rs
// 职责: 在单个语言的翻译表中按点分路径查找翻译
// 边界:
//   - ✅ 键路径拼接（作用域前缀、命名空间根）
//   - ✅ 主表逐段查找
//   - ✅ extras 表二次查找
//   - ✅ 默认值兜底
//   - ❌ 不应包含跨语言回退逻辑
//   - ❌ 不应包含复数选择和插值
//
// 算法设计:
// 1. 预拆分的键先用分隔符拼接
// 2. 有作用域时拼接为 "scope.key"
// 3. 拆分后首段不是命名空间根时在前面补上
// 4. 主表查不到时，用未补命名空间根的路径查 extras 表
// 5. 仍查不到时使用默认值
//
// ============================================================================

use std::borrow::Cow;

use crate::models::options::LookupOptions;
use crate::models::translation::{
    PluralForms, TranslationNode, TranslationStore, TranslationTree, SEPARATOR,
};

/// 默认命名空间根
pub const DEFAULT_NAMESPACE_ROOT: &str = "js";

/// 翻译键：点分字符串或预拆分的路径段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPath<'k> {
    Dotted(&'k str),
    Segments(&'k [&'k str]),
}

impl<'k> KeyPath<'k> {
    /// 点分形式
    pub fn to_dotted(&self) -> Cow<'k, str> {
        match self {
            KeyPath::Dotted(key) => Cow::Borrowed(key),
            KeyPath::Segments(segments) => Cow::Owned(segments.join(&SEPARATOR.to_string())),
        }
    }
}

impl<'k> From<&'k str> for KeyPath<'k> {
    fn from(key: &'k str) -> Self {
        KeyPath::Dotted(key)
    }
}

impl<'k> From<&'k String> for KeyPath<'k> {
    fn from(key: &'k String) -> Self {
        KeyPath::Dotted(key.as_str())
    }
}

impl<'k> From<&'k [&'k str]> for KeyPath<'k> {
    fn from(segments: &'k [&'k str]) -> Self {
        KeyPath::Segments(segments)
    }
}

impl<'k, const N: usize> From<&'k [&'k str; N]> for KeyPath<'k> {
    fn from(segments: &'k [&'k str; N]) -> Self {
        KeyPath::Segments(segments.as_slice())
    }
}

/// 查找结果
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution<'a> {
    /// 文本模板（表中的叶子或调用方给的默认值）
    Template(Cow<'a, str>),
    /// 复数形式表
    Forms(&'a PluralForms),
    /// 停在了中间节点
    Subtree(&'a TranslationTree),
}

/// 单语言键解析器
#[derive(Debug, Clone, Copy)]
pub struct KeyResolver<'a> {
    store: &'a TranslationStore,
    namespace_root: &'a str,
}

impl<'a> KeyResolver<'a> {
    pub fn new(store: &'a TranslationStore, namespace_root: &'a str) -> Self {
        Self {
            store,
            namespace_root,
        }
    }

    /// 查找键；`options.locale` 为空时使用 `current_locale`
    pub fn lookup(
        &self,
        key: KeyPath<'_>,
        options: &LookupOptions,
        current_locale: &str,
    ) -> Option<Resolution<'a>> {
        let locale = options.locale.as_deref().unwrap_or(current_locale);

        let mut full_key = key.to_dotted().into_owned();
        if let Some(scope) = options.scope.as_deref() {
            full_key = format!("{}{}{}", scope, SEPARATOR, full_key);
        }

        let original: Vec<&str> = full_key.split(SEPARATOR).collect();
        let mut namespaced = original.clone();
        if namespaced.first() != Some(&self.namespace_root) {
            namespaced.insert(0, self.namespace_root);
        }

        let found = self
            .store
            .locale(locale)
            .and_then(|tree| walk(tree, &namespaced))
            .or_else(|| {
                self.store.extras(locale).and_then(|tree| {
                    tracing::trace!("'{}' not in main table of {}, trying extras", full_key, locale);
                    walk(tree, &original)
                })
            });

        found.or_else(|| {
            options
                .default_value
                .clone()
                .map(|value| Resolution::Template(Cow::Owned(value)))
        })
    }
}

/// 逐段下降；遇到缺失段或提前到达叶子即返回 `None`
fn walk<'t>(tree: &'t TranslationTree, segments: &[&str]) -> Option<Resolution<'t>> {
    let mut current = tree;
    for (index, segment) in segments.iter().enumerate() {
        let is_last = index + 1 == segments.len();
        match current.get(segment)? {
            TranslationNode::Branch(subtree) => current = subtree,
            TranslationNode::Literal(template) if is_last => {
                return Some(Resolution::Template(Cow::Borrowed(template)));
            }
            TranslationNode::Plural(forms) if is_last => return Some(Resolution::Forms(forms)),
            TranslationNode::Plural(forms) if index + 2 == segments.len() => {
                // 直接指向某个复数形式，如 "items.one"
                return forms
                    .get(segments[index + 1])
                    .map(|template| Resolution::Template(Cow::Borrowed(template)));
            }
            TranslationNode::Literal(_) | TranslationNode::Plural(_) => return None,
        }
    }
    Some(Resolution::Subtree(current))
}
