// ============================================================================
// Lingo - 中文翻译表
// ============================================================================
//
// 文件: src/i18n/zh_cn.rs
// 职责: 中文翻译内容定义
// 边界:
//   - ✅ 中文翻译字符串定义
//   - ✅ 翻译键值对维护
//   - ❌ 不应包含翻译逻辑
//   - ❌ 不应包含其他语言的翻译
//
// ============================================================================

/// 中文翻译表（中文没有复数变化，只提供 other）
pub const TRANSLATIONS: &[(&str, &str)] = &[
    // 初始化命令
    ("init.start", "正在初始化配置文件..."),
    ("init.config_exists", "配置文件已存在: %{path}"),
    ("init.use_force_hint", "使用 --force 覆盖已有文件"),
    ("init.config_created", "配置文件已创建: %{path}"),
    ("init.next_steps", "将翻译文件放入配置的目录后运行 'lingo check'"),
    ("init.create_failed", "创建配置文件失败: %{error}"),
    // 翻译加载
    ("load.loaded.other", "已从 %{dir} 加载 %{count} 个语言"),
    ("load.verbose_active", "调试翻译模式已开启，翻译结果带有键编号"),
    // 检查命令
    ("check.start", "正在以 '%{locale}' 为基准检查翻译覆盖率..."),
    ("check.reference_missing", "基准语言 '%{locale}' 没有任何翻译"),
    ("check.total_keys.other", "基准语言共有 %{count} 个键"),
    ("check.complete", "%{locale}: 完整 (%{percent}%)"),
    ("check.missing.other", "%{locale}: 缺失 %{count} 个键 (%{percent}%)"),
    ("check.extra.other", "%{locale}: %{count} 个键不在基准语言中"),
    ("check.no_locales", "没有可以对比的其他语言"),
    ("check.all_good", "所有语言均已完整翻译"),
    // 调试模式命令
    ("verbose.state_file", "会话标志文件: %{path}"),
    ("verbose.disabled", "调试翻译模式已关闭"),
    ("verbose.not_enabled", "调试翻译模式未开启"),
    // 错误
    ("error.translations_not_found", "翻译目录不存在: %{dir}"),
    ("error.invalid_value", "无效的参数 '%{value}'，应为 name=value"),
];
