// ============================================================================
// Lingo - 调试翻译器
// ============================================================================
//
// 文件: src/core/verbose.rs
// 职责: 为每个翻译键编号并在结果后追加编号，便于定位界面文字对应的键
// 边界:
//   - ✅ 翻译器装饰（与 Translator 实现同一接口）
//   - ✅ 键编号和首次出现时的诊断输出
//   - ✅ 会话标志持久化
//   - ❌ 不应包含查找、复数、插值逻辑
//
// 包装后的翻译器关闭语言回退，结果只反映请求语言的真实状态。
//
// ============================================================================

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::{Mutex, PoisonError};

use crate::core::translator::{Translate, Translator};
use crate::error::{I18nError, Result};
use crate::models::options::{InterpolationValue, LookupOptions};

/// 启用会话调试模式后的提示
pub const VERBOSE_SESSION_MESSAGE: &str =
    "Verbose localization is enabled. Delete the session file to turn it off. Restart to see the translation keys.";

#[derive(Debug, Default)]
struct VerboseState {
    counter: u32,
    keys: HashMap<String, u32>,
}

/// 调试翻译器：结果形如 `文本 (#3)`
#[derive(Debug)]
pub struct VerboseTranslator {
    inner: Translator,
    state: Mutex<VerboseState>,
}

impl VerboseTranslator {
    /// 包装一个翻译器并关闭其语言回退
    pub fn new(mut inner: Translator) -> Self {
        inner.set_no_fallbacks(true);
        Self {
            inner,
            state: Mutex::new(VerboseState::default()),
        }
    }

    pub fn inner(&self) -> &Translator {
        &self.inner
    }

    pub fn into_inner(self) -> Translator {
        self.inner
    }

    /// 已编号的键，按编号排序
    pub fn assigned_keys(&self) -> Vec<(String, u32)> {
        let state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        let mut keys: Vec<(String, u32)> = state
            .keys
            .iter()
            .map(|(key, number)| (key.clone(), *number))
            .collect();
        keys.sort_by_key(|(_, number)| *number);
        keys
    }

    /// 获取键的编号，首次出现时分配并输出诊断信息
    fn number_for(&self, key: &str, options: &LookupOptions) -> u32 {
        let number = {
            let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
            if let Some(number) = state.keys.get(key) {
                return *number;
            }
            state.counter += 1;
            let number = state.counter;
            state.keys.insert(key.to_string(), number);
            number
        };

        let mut message = format!("Translation #{}: {}", number, key);
        if let Some(parameters) = describe_parameters(options) {
            message.push_str(", parameters: ");
            message.push_str(&parameters);
        }
        tracing::info!("{}", message);
        number
    }
}

impl Translate for VerboseTranslator {
    fn translate(&self, key: &str, options: &LookupOptions) -> String {
        let number = self.number_for(key, options);
        format!("{} (#{})", self.inner.translate(key, options), number)
    }
}

/// 非空参数序列化为 JSON
fn describe_parameters(options: &LookupOptions) -> Option<String> {
    let mut parameters = options.values.clone();
    if let Some(count) = options.count {
        parameters.insert("count".to_string(), InterpolationValue::Float(count));
    }
    if let Some(locale) = &options.locale {
        parameters.insert("locale".to_string(), InterpolationValue::Text(locale.clone()));
    }
    if let Some(scope) = &options.scope {
        parameters.insert("scope".to_string(), InterpolationValue::Text(scope.clone()));
    }
    if let Some(default_value) = &options.default_value {
        parameters.insert(
            "default_value".to_string(),
            InterpolationValue::Text(default_value.clone()),
        );
    }
    if parameters.is_empty() {
        return None;
    }
    serde_json::to_string(&parameters).ok()
}

/// 会话状态文件内容
#[derive(Debug, Default, Serialize, Deserialize)]
struct SessionState {
    #[serde(default)]
    verbose_localization: bool,
}

/// 带会话持久化的调试模式
pub struct VerboseSession;

impl VerboseSession {
    /// 写入会话标志并返回调试翻译器和提示文字
    pub fn enable(path: &Path, translator: Translator) -> Result<(VerboseTranslator, &'static str)> {
        let state = SessionState {
            verbose_localization: true,
        };
        let content = serde_json::to_string_pretty(&state)?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| I18nError::io(parent, e))?;
        }
        fs::write(path, content).map_err(|e| I18nError::io(path, e))?;
        tracing::debug!("verbose localization flag written to {}", path.display());
        Ok((VerboseTranslator::new(translator), VERBOSE_SESSION_MESSAGE))
    }

    /// 会话标志是否开启；文件不存在或内容损坏时视为关闭
    pub fn is_enabled(path: &Path) -> bool {
        fs::read_to_string(path)
            .ok()
            .and_then(|content| serde_json::from_str::<SessionState>(&content).ok())
            .map(|state| state.verbose_localization)
            .unwrap_or(false)
    }

    /// 删除会话标志
    pub fn disable(path: &Path) -> Result<()> {
        match fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(I18nError::io(path, e)),
        }
    }

    /// 按会话标志决定是否包装翻译器
    pub fn restore(path: &Path, translator: Translator) -> SessionTranslator {
        if Self::is_enabled(path) {
            tracing::debug!("restoring verbose localization from {}", path.display());
            SessionTranslator::Verbose(VerboseTranslator::new(translator))
        } else {
            SessionTranslator::Plain(translator)
        }
    }
}

/// 普通或调试翻译器
#[derive(Debug)]
pub enum SessionTranslator {
    Plain(Translator),
    Verbose(VerboseTranslator),
}

impl SessionTranslator {
    pub fn is_verbose(&self) -> bool {
        matches!(self, SessionTranslator::Verbose(_))
    }

    /// 底层翻译器（数字格式化等不需要编号的场景）
    pub fn translator(&self) -> &Translator {
        match self {
            SessionTranslator::Plain(translator) => translator,
            SessionTranslator::Verbose(verbose) => verbose.inner(),
        }
    }
}

impl Translate for SessionTranslator {
    fn translate(&self, key: &str, options: &LookupOptions) -> String {
        match self {
            SessionTranslator::Plain(translator) => translator.translate(key, options),
            SessionTranslator::Verbose(verbose) => verbose.translate(key, options),
        }
    }
}
