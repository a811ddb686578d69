use std::fs;
use std::path::Path;

use lingo::models::config::Config;
use lingo::{
    coverage_report, LookupOptions, NumberFormatOptions, PluralRule, Translate, TranslationStore,
    Translator, VerboseSession,
};

fn write(dir: &Path, relative: &str, content: &str) {
    let path = dir.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

/// 一个包含 JSON、YAML、extras 和应被忽略文件的翻译目录
fn translation_dir() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "en.yml",
        r#"
en:
  js:
    greeting:
      one: "Hi, %{name}!"
      other: "Hi all, %{name}!"
    topic:
      title: "Topic"
      replies:
        0: "no replies"
        one: "1 reply"
        other: "%{count} replies"
    number:
      human:
        storage_units:
          format: "%n %u"
          units:
            byte:
              one: Byte
              other: Bytes
            kb: KB
            mb: MB
            gb: GB
            tb: TB
"#,
    );
    write(
        dir.path(),
        "de.json",
        r#"{"de": {"js": {"topic": {"title": "Thema"}}}}"#,
    );
    write(
        dir.path(),
        "plugins/polls/de.json",
        r#"{"de": {"js": {"poll": {"vote": "Abstimmen"}}}}"#,
    );
    write(
        dir.path(),
        "en.extras.yml",
        "en:\n  theme:\n    banner: \"Welcome to %{site}\"\n",
    );
    write(dir.path(), "drafts/fr.json", r#"{"fr": {"js": {"topic": {"title": "Sujet"}}}}"#);
    write(dir.path(), "README.md", "not a translation file");
    dir
}

fn load(dir: &Path) -> TranslationStore {
    TranslationStore::load_dir(dir, &["drafts/".to_string()]).unwrap()
}

#[test]
fn end_to_end_greeting() {
    let store = TranslationStore::from_json_str(
        r#"{"en": {"js": {"greeting": {"one": "Hi, %{name}!", "other": "Hi all, %{name}!"}}}}"#,
    )
    .unwrap();
    let translator = Translator::builder().store(store).build();

    assert_eq!(
        translator.translate("greeting", &LookupOptions::new().count(1).with("name", "Ann")),
        "Hi, Ann!"
    );
    assert_eq!(
        translator.translate("greeting", &LookupOptions::new().count(3).with("name", "Team")),
        "Hi all, Team!"
    );
    assert_eq!(translator.t("missing.key"), "[en.missing.key]");
}

#[test]
fn directory_loading_merges_and_ignores() {
    let dir = translation_dir();
    let store = load(dir.path());

    assert_eq!(store.locales(), vec!["de", "en"]);
    assert!(store.locale("fr").is_none());
    assert!(store.extras("en").is_some());

    let translator = Translator::builder().store(store).locale("de").build();
    assert_eq!(translator.t("topic.title"), "Thema");
    assert_eq!(translator.t("poll.vote"), "Abstimmen");
}

#[test]
fn missing_directory_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(TranslationStore::load_dir(&dir.path().join("absent"), &[]).is_err());
}

#[test]
fn extras_are_walked_without_namespace_root() {
    let dir = translation_dir();
    let translator = Translator::builder().store(load(dir.path())).build();
    assert_eq!(
        translator.translate("theme.banner", &LookupOptions::new().with("site", "Meta")),
        "Welcome to Meta"
    );
}

#[test]
fn exact_count_key_wins_over_rule() {
    let dir = translation_dir();
    let translator = Translator::builder().store(load(dir.path())).build();
    assert_eq!(
        translator.translate("topic.replies", &LookupOptions::new().count(0)),
        "no replies"
    );
    assert_eq!(
        translator.translate("topic.replies", &LookupOptions::new().count(1)),
        "1 reply"
    );
    assert_eq!(
        translator.translate("topic.replies", &LookupOptions::new().count(7)),
        "7 replies"
    );
}

#[test]
fn falls_back_to_default_locale() {
    let dir = translation_dir();
    let translator = Translator::builder().store(load(dir.path())).locale("de").build();
    assert_eq!(
        translator.translate("greeting", &LookupOptions::new().count(2).with("name", "Leute")),
        "Hi all, Leute!"
    );
}

#[test]
fn no_fallbacks_returns_marker() {
    let dir = translation_dir();
    let translator = Translator::builder()
        .store(load(dir.path()))
        .locale("de")
        .no_fallbacks(true)
        .build();
    assert_eq!(translator.t("greeting"), "[de.greeting]");
    assert_eq!(
        translator.translate("greeting", &LookupOptions::new().count(1)),
        "[de.greeting]"
    );
}

#[test]
fn scope_and_namespace_resolve_identically() {
    let dir = translation_dir();
    let translator = Translator::builder().store(load(dir.path())).build();
    assert_eq!(translator.t("topic.title"), "Topic");
    assert_eq!(translator.t("js.topic.title"), "Topic");
    assert_eq!(
        translator.translate("title", &LookupOptions::new().scope("topic")),
        "Topic"
    );
    assert_eq!(
        translator.translate_path(&["topic", "title"], &LookupOptions::new()),
        "Topic"
    );
}

#[test]
fn default_value_is_interpolated() {
    let translator = Translator::builder().store(TranslationStore::new()).build();
    assert_eq!(
        translator.translate(
            "nope",
            &LookupOptions::new().default_value("Price: {{amount}}").with("amount", "$5")
        ),
        "Price: $5"
    );
}

#[test]
fn custom_plural_rule_is_used() {
    fn dual(n: f64) -> &'static [&'static str] {
        if n == 2.0 {
            &["two"]
        } else {
            &["other"]
        }
    }
    let store = TranslationStore::from_json_str(
        r#"{"xx": {"js": {"eyes": {"two": "a pair of eyes", "other": "%{count} eyes"}}}}"#,
    )
    .unwrap();
    let translator = Translator::builder()
        .store(store)
        .locale("xx")
        .plural_rule("xx", PluralRule::Custom(dual))
        .build();
    assert_eq!(
        translator.translate("eyes", &LookupOptions::new().count(2)),
        "a pair of eyes"
    );
    assert_eq!(translator.translate("eyes", &LookupOptions::new().count(3)), "3 eyes");
}

#[test]
fn human_sizes_from_loaded_tables() {
    let dir = translation_dir();
    let translator = Translator::builder().store(load(dir.path())).build();
    let options = NumberFormatOptions::new();
    assert_eq!(translator.to_human_size(1023.0, &options), "1023 Bytes");
    assert_eq!(translator.to_human_size(2048.0, &options), "2 KB");
    assert_eq!(translator.to_human_size(1126.4, &options), "1.1 KB");
}

#[test]
fn coverage_of_loaded_directory() {
    let dir = translation_dir();
    let report = coverage_report(&load(dir.path()), "en");
    assert!(!report.is_complete());
    let de = &report.locales[0];
    assert_eq!(de.locale, "de");
    assert!(de.missing.contains(&"js.greeting".to_string()));
    assert_eq!(de.extra, vec!["js.poll.vote"]);
}

#[test]
fn verbose_session_survives_restart() {
    let dir = translation_dir();
    let session_dir = tempfile::tempdir().unwrap();
    let state = session_dir.path().join(".lingo/session.json");

    let (verbose, _) = VerboseSession::enable(
        &state,
        Translator::builder().store(load(dir.path())).locale("de").build(),
    )
    .unwrap();
    assert_eq!(verbose.t("topic.title"), "Thema (#1)");

    let restored = VerboseSession::restore(
        &state,
        Translator::builder().store(load(dir.path())).locale("de").build(),
    );
    assert!(restored.is_verbose());
    assert_eq!(restored.t("greeting"), "[de.greeting] (#1)");
    assert_eq!(restored.t("topic.title"), "Thema (#2)");
}

#[test]
fn config_file_drives_translator_settings() {
    let dir = translation_dir();
    write(
        dir.path(),
        "lingo.toml",
        r#"
[translations]
dir = "."
ignore = ["drafts/", "lingo.toml"]

[locale]
current = "de"
no_fallbacks = true
"#,
    );
    let config = Config::load_config(&dir.path().join("lingo.toml")).unwrap();
    let store = TranslationStore::load_dir(dir.path(), &config.translations.ignore).unwrap();
    let translator = Translator::builder()
        .store(store)
        .settings(config.translator_settings())
        .build();
    assert_eq!(translator.current_locale(), "de");
    assert_eq!(translator.t("topic.title"), "Thema");
    assert_eq!(translator.t("greeting"), "[de.greeting]");
}
