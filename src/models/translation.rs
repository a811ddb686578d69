// ============================================================================
// Lingo - 翻译表数据模型
// ============================================================================
//
// 文件: src/models/translation.rs
// 职责: 多语言翻译表的数据结构定义和加载
// 边界:
//   - ✅ 翻译树节点定义（文本 / 复数表 / 子树）
//   - ✅ 翻译表从 JSON / YAML / TOML 解析
//   - ✅ 翻译目录扫描和合并
//   - ✅ 主表与 extras 表的存储
//   - ❌ 不应包含键解析和回退逻辑
//   - ❌ 不应包含复数规则计算
//   - ❌ 不应包含插值逻辑
//
// 节点类型在加载时一次性确定:
// 1. 字符串、数字、布尔值 -> Literal
// 2. 所有键都是复数类别或整数、所有值都是字符串的对象 -> Plural
// 3. 其他对象 -> Branch
// 4. null 和数组被忽略
//
// ============================================================================

use serde_json::{Map, Value};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use crate::error::{I18nError, Result};

/// 键路径分隔符
pub const SEPARATOR: char = '.';

/// 可以出现在复数表中的类别名
pub const PLURAL_CATEGORIES: &[&str] = &["zero", "none", "one", "two", "few", "many", "other"];

/// extras 翻译文件的文件名后缀（如 `en.extras.yml`）
const EXTRAS_SUFFIX: &str = ".extras";

/// 复数形式表：类别名或精确数字 -> 模板
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PluralForms {
    forms: BTreeMap<String, String>,
}

impl PluralForms {
    pub fn new() -> Self {
        Self::default()
    }

    /// 添加一个复数形式
    pub fn insert(&mut self, category: impl Into<String>, template: impl Into<String>) {
        self.forms.insert(category.into(), template.into());
    }

    /// 链式添加复数形式
    pub fn with(mut self, category: impl Into<String>, template: impl Into<String>) -> Self {
        self.insert(category, template);
        self
    }

    pub fn get(&self, category: &str) -> Option<&str> {
        self.forms.get(category).map(String::as_str)
    }

    pub fn contains(&self, category: &str) -> bool {
        self.forms.contains_key(category)
    }

    pub fn len(&self) -> usize {
        self.forms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forms.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.forms.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// 翻译树节点
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslationNode {
    /// 普通模板
    Literal(String),
    /// 复数形式表
    Plural(PluralForms),
    /// 嵌套子树
    Branch(TranslationTree),
}

/// 单个语言（或其某个子路径）下的嵌套翻译树
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationTree {
    children: BTreeMap<String, TranslationNode>,
}

impl TranslationTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// 从 JSON 对象构建翻译树
    pub fn from_map(map: &Map<String, Value>) -> Self {
        let mut tree = Self::new();
        for (key, value) in map {
            match node_from_value(value) {
                Some(node) => {
                    tree.children.insert(key.clone(), node);
                }
                None => tracing::debug!("skipping non-translatable value at key '{}'", key),
            }
        }
        tree
    }

    pub fn get(&self, segment: &str) -> Option<&TranslationNode> {
        self.children.get(segment)
    }

    pub fn insert(&mut self, segment: impl Into<String>, node: TranslationNode) {
        self.children.insert(segment.into(), node);
    }

    /// 按点分路径插入一个文本模板，中间节点不存在时自动创建
    ///
    /// 路径上已有的非子树节点会被子树替换。
    pub fn insert_path(&mut self, dotted: &str, template: impl Into<String>) {
        let segments: Vec<&str> = dotted.split(SEPARATOR).collect();
        let Some((last, parents)) = segments.split_last() else {
            return;
        };

        let mut current = self;
        for segment in parents {
            let entry = current
                .children
                .entry((*segment).to_string())
                .or_insert_with(|| TranslationNode::Branch(TranslationTree::new()));
            if !matches!(entry, TranslationNode::Branch(_)) {
                *entry = TranslationNode::Branch(TranslationTree::new());
            }
            let TranslationNode::Branch(tree) = entry else {
                return;
            };
            current = tree;
        }
        current
            .children
            .insert((*last).to_string(), TranslationNode::Literal(template.into()));
    }

    /// 深度合并另一棵树，同名叶子以 `other` 为准
    pub fn merge(&mut self, other: TranslationTree) {
        for (key, node) in other.children {
            let incoming = match node {
                TranslationNode::Branch(incoming) => incoming,
                leaf => {
                    self.children.insert(key, leaf);
                    continue;
                }
            };
            if let Some(TranslationNode::Branch(existing)) = self.children.get_mut(&key) {
                existing.merge(incoming);
                continue;
            }
            self.children.insert(key, TranslationNode::Branch(incoming));
        }
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &TranslationNode)> {
        self.children.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// 展开所有叶子键（复数表算作一个键），结果按字典序排列
    pub fn leaf_keys(&self) -> Vec<String> {
        let mut keys = Vec::new();
        self.collect_leaf_keys("", &mut keys);
        keys
    }

    fn collect_leaf_keys(&self, prefix: &str, keys: &mut Vec<String>) {
        for (segment, node) in &self.children {
            let path = if prefix.is_empty() {
                segment.clone()
            } else {
                format!("{}{}{}", prefix, SEPARATOR, segment)
            };
            match node {
                TranslationNode::Branch(tree) => tree.collect_leaf_keys(&path, keys),
                TranslationNode::Literal(_) | TranslationNode::Plural(_) => keys.push(path),
            }
        }
    }
}

/// 所有语言的翻译表：主表 + extras 表
#[derive(Debug, Clone, Default)]
pub struct TranslationStore {
    translations: HashMap<String, TranslationTree>,
    extras: HashMap<String, TranslationTree>,
}

impl TranslationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 从顶层为 `语言 -> 翻译树` 的 JSON 值构建
    pub fn from_value(value: &Value, source_name: &str) -> Result<Self> {
        let mut store = Self::new();
        store.merge_value(value, source_name, false)?;
        Ok(store)
    }

    /// 由 `(点分键, 模板)` 列表构建单个语言的翻译表，键统一挂在 `root` 下
    ///
    /// 与文件加载走同一套节点分类，`x.one` / `x.other` 会组成复数表。
    pub fn from_pairs(locale: &str, root: &str, pairs: &[(&str, &str)]) -> Self {
        let mut table = Map::new();
        for (key, template) in pairs {
            insert_value_path(&mut table, &format!("{}{}{}", root, SEPARATOR, key), template);
        }
        let mut store = Self::new();
        store.add_locale(locale, TranslationTree::from_map(&table));
        store
    }

    /// 解析 JSON 文本
    pub fn from_json_str(content: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(content)?;
        Self::from_value(&value, "<json>")
    }

    /// 解析 YAML 文本
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let value: serde_yaml::Value = serde_yaml::from_str(content)?;
        Self::from_value(&yaml_to_json(value), "<yaml>")
    }

    /// 加载单个翻译文件，格式由扩展名决定
    pub fn load_file(path: &Path) -> Result<Self> {
        let mut store = Self::new();
        store.merge_file(path)?;
        Ok(store)
    }

    /// 递归加载目录下所有翻译文件
    ///
    /// 文件按路径排序后依次合并；隐藏文件和目录不参与扫描，
    /// `ignore` 中的 glob 模式匹配相对路径时跳过。
    pub fn load_dir(dir: &Path, ignore: &[String]) -> Result<Self> {
        if !dir.is_dir() {
            return Err(I18nError::io(
                dir,
                std::io::Error::new(std::io::ErrorKind::NotFound, "translation directory not found"),
            ));
        }

        let patterns: Vec<glob::Pattern> = ignore
            .iter()
            .filter_map(|p| glob::Pattern::new(p).ok())
            .collect();

        let mut files = Vec::new();
        let walker = WalkDir::new(dir)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || !is_hidden(e.file_name()));
        for entry in walker {
            let entry = entry.map_err(|e| {
                let path = e.path().map(Path::to_path_buf).unwrap_or_else(|| dir.to_path_buf());
                I18nError::io(path, e.into())
            })?;
            if !entry.file_type().is_file() {
                continue;
            }
            let relative = entry
                .path()
                .strip_prefix(dir)
                .unwrap_or(entry.path())
                .to_string_lossy()
                .replace('\\', "/");
            if is_ignored(&relative, ignore, &patterns) {
                tracing::debug!("ignoring translation file {}", relative);
                continue;
            }
            if file_format(entry.path()).is_none() {
                tracing::warn!("skipping unsupported file {}", relative);
                continue;
            }
            files.push(entry.into_path());
        }

        let mut store = Self::new();
        for file in &files {
            store.merge_file(file)?;
        }
        tracing::debug!(
            "loaded {} translation files, locales: {:?}",
            files.len(),
            store.locales()
        );
        Ok(store)
    }

    /// 合并一个文件，文件名以 `.extras` 结尾时进入 extras 表
    pub fn merge_file(&mut self, path: &Path) -> Result<()> {
        let format = file_format(path).ok_or_else(|| I18nError::UnsupportedFormat(path.to_path_buf()))?;
        let content = fs::read_to_string(path).map_err(|e| I18nError::io(path, e))?;
        let value = match format {
            FileFormat::Json => serde_json::from_str::<Value>(&content)?,
            FileFormat::Yaml => yaml_to_json(serde_yaml::from_str(&content)?),
            FileFormat::Toml => toml::from_str::<Value>(&content)?,
        };

        let is_extras = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().ends_with(EXTRAS_SUFFIX))
            .unwrap_or(false);
        self.merge_value(&value, &path.display().to_string(), is_extras)
    }

    fn merge_value(&mut self, value: &Value, source_name: &str, extras: bool) -> Result<()> {
        let locales = value.as_object().ok_or_else(|| I18nError::InvalidTable {
            source_name: source_name.to_string(),
            reason: "top level must map locale codes to tables".to_string(),
        })?;

        for (locale, table) in locales {
            let table = table.as_object().ok_or_else(|| I18nError::InvalidTable {
                source_name: source_name.to_string(),
                reason: format!("locale '{}' must map to a table", locale),
            })?;
            let tree = TranslationTree::from_map(table);
            if extras {
                self.add_extras(locale.clone(), tree);
            } else {
                self.add_locale(locale.clone(), tree);
            }
        }
        Ok(())
    }

    /// 添加（或深度合并）一个语言的主表
    pub fn add_locale(&mut self, locale: impl Into<String>, tree: TranslationTree) {
        self.translations.entry(locale.into()).or_default().merge(tree);
    }

    /// 添加（或深度合并）一个语言的 extras 表
    pub fn add_extras(&mut self, locale: impl Into<String>, tree: TranslationTree) {
        self.extras.entry(locale.into()).or_default().merge(tree);
    }

    /// 合并另一个存储
    pub fn merge(&mut self, other: TranslationStore) {
        for (locale, tree) in other.translations {
            self.add_locale(locale, tree);
        }
        for (locale, tree) in other.extras {
            self.add_extras(locale, tree);
        }
    }

    pub fn locale(&self, locale: &str) -> Option<&TranslationTree> {
        self.translations.get(locale)
    }

    pub fn extras(&self, locale: &str) -> Option<&TranslationTree> {
        self.extras.get(locale)
    }

    /// 主表中所有语言代码（已排序）
    pub fn locales(&self) -> Vec<&str> {
        let mut locales: Vec<&str> = self.translations.keys().map(String::as_str).collect();
        locales.sort_unstable();
        locales
    }

    pub fn is_empty(&self) -> bool {
        self.translations.is_empty() && self.extras.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FileFormat {
    Json,
    Yaml,
    Toml,
}

fn file_format(path: &Path) -> Option<FileFormat> {
    let extension = path.extension()?.to_string_lossy().to_lowercase();
    match extension.as_str() {
        "json" => Some(FileFormat::Json),
        "yml" | "yaml" => Some(FileFormat::Yaml),
        "toml" => Some(FileFormat::Toml),
        _ => None,
    }
}

fn is_hidden(name: &std::ffi::OsStr) -> bool {
    name.to_string_lossy().starts_with('.')
}

fn is_ignored(relative: &str, raw: &[String], patterns: &[glob::Pattern]) -> bool {
    patterns.iter().any(|p| p.matches(relative)) || raw.iter().any(|p| relative.starts_with(p.as_str()))
}

fn insert_value_path(map: &mut Map<String, Value>, dotted: &str, template: &str) {
    match dotted.split_once(SEPARATOR) {
        None => {
            map.insert(dotted.to_string(), Value::String(template.to_string()));
        }
        Some((head, rest)) => {
            let entry = map
                .entry(head.to_string())
                .or_insert_with(|| Value::Object(Map::new()));
            if !entry.is_object() {
                *entry = Value::Object(Map::new());
            }
            if let Value::Object(child) = entry {
                insert_value_path(child, rest, template);
            }
        }
    }
}

fn node_from_value(value: &Value) -> Option<TranslationNode> {
    match value {
        Value::String(s) => Some(TranslationNode::Literal(s.clone())),
        Value::Number(n) => Some(TranslationNode::Literal(n.to_string())),
        Value::Bool(b) => Some(TranslationNode::Literal(b.to_string())),
        Value::Null | Value::Array(_) => None,
        Value::Object(map) if is_plural_map(map) => {
            let mut forms = PluralForms::new();
            for (category, template) in map {
                if let Value::String(template) = template {
                    forms.insert(category.clone(), template.clone());
                }
            }
            Some(TranslationNode::Plural(forms))
        }
        Value::Object(map) => Some(TranslationNode::Branch(TranslationTree::from_map(map))),
    }
}

fn is_plural_map(map: &Map<String, Value>) -> bool {
    !map.is_empty() && map.iter().all(|(key, value)| value.is_string() && is_plural_key(key))
}

fn is_plural_key(key: &str) -> bool {
    PLURAL_CATEGORIES.contains(&key) || key.parse::<i64>().is_ok()
}

/// YAML 值转换为 JSON 值，非字符串键转为其文本形式
fn yaml_to_json(value: serde_yaml::Value) -> Value {
    use serde_yaml::Value as Yaml;

    match value {
        Yaml::Null => Value::Null,
        Yaml::Bool(b) => Value::Bool(b),
        Yaml::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::from(i)
            } else if let Some(u) = n.as_u64() {
                Value::from(u)
            } else {
                n.as_f64().map(Value::from).unwrap_or(Value::Null)
            }
        }
        Yaml::String(s) => Value::String(s),
        Yaml::Sequence(items) => Value::Array(items.into_iter().map(yaml_to_json).collect()),
        Yaml::Mapping(mapping) => {
            let mut map = Map::new();
            for (key, value) in mapping {
                let key = match key {
                    Yaml::String(s) => s,
                    Yaml::Number(n) => n.to_string(),
                    Yaml::Bool(b) => b.to_string(),
                    _ => continue,
                };
                map.insert(key, yaml_to_json(value));
            }
            Value::Object(map)
        }
        Yaml::Tagged(tagged) => yaml_to_json(tagged.value),
    }
}
