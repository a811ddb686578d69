// ============================================================================
// Lingo - English Translation Table
// ============================================================================
//
// 文件: src/i18n/en_us.rs
// 职责: English translation content definition
// 边界:
//   - ✅ English translation strings definition
//   - ✅ Translation key-value pairs maintenance
//   - ❌ Should not contain translation logic
//   - ❌ Should not contain other language translations
//
// ============================================================================

/// English translation table
pub const TRANSLATIONS: &[(&str, &str)] = &[
    // Init command
    ("init.start", "Initializing configuration file..."),
    ("init.config_exists", "Configuration file already exists: %{path}"),
    ("init.use_force_hint", "Use --force to overwrite the existing file"),
    ("init.config_created", "Configuration file created: %{path}"),
    (
        "init.next_steps",
        "Put your translation files under the configured directory, then run 'lingo check'",
    ),
    ("init.create_failed", "Failed to create configuration file: %{error}"),
    // Translation loading
    ("load.loaded.one", "Loaded 1 locale from %{dir}"),
    ("load.loaded.other", "Loaded %{count} locales from %{dir}"),
    ("load.verbose_active", "Verbose localization is active, translation keys are numbered"),
    // Check command
    ("check.start", "Checking translation coverage against '%{locale}'..."),
    ("check.reference_missing", "Reference locale '%{locale}' has no translations"),
    ("check.total_keys.one", "Reference locale has 1 key"),
    ("check.total_keys.other", "Reference locale has %{count} keys"),
    ("check.complete", "%{locale}: complete (%{percent}%)"),
    ("check.missing.one", "%{locale}: 1 missing key (%{percent}%)"),
    ("check.missing.other", "%{locale}: %{count} missing keys (%{percent}%)"),
    ("check.extra.one", "%{locale}: 1 key not in the reference locale"),
    ("check.extra.other", "%{locale}: %{count} keys not in the reference locale"),
    ("check.no_locales", "No other locales to compare"),
    ("check.all_good", "All locales are fully translated"),
    // Verbose command
    ("verbose.state_file", "Session flag: %{path}"),
    ("verbose.disabled", "Verbose localization disabled"),
    ("verbose.not_enabled", "Verbose localization is not enabled"),
    // Errors
    ("error.translations_not_found", "Translation directory does not exist: %{dir}"),
    ("error.invalid_value", "Invalid value '%{value}', expected name=value"),
];
