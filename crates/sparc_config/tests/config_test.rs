use sparc_config::{
    EmailFormatMode, GenerationCredentials, SmtpCredentials, SparcConfig, TwitterCredentials,
};
use std::collections::HashMap;
use std::io::Write;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn bundled_defaults_match_documented_values() {
    let config = SparcConfig::from_toml_str("").unwrap();
    assert_eq!(config.generation.max_tokens, 1000);
    assert_eq!(config.generation.temperature, 0.7);
    assert_eq!(config.generation.timeout_secs, 30);
    assert_eq!(
        config.generation.system_prompt,
        "You are an expert marketing content creator."
    );
    assert_eq!(config.channels.short_form_limit, 280);
    assert_eq!(config.channels.default_email_subject, "New Campaign Update");
    assert_eq!(config.channels.email_format, EmailFormatMode::SubjectLine);
    assert_eq!(config.email.smtp_port, 587);
}

#[test]
fn bundled_defaults_agree_with_default_impl() {
    assert_eq!(SparcConfig::from_toml_str("").unwrap(), SparcConfig::default());
}

#[test]
fn overrides_replace_only_named_keys() {
    let config = SparcConfig::from_toml_str(
        r#"
        [channels]
        short_form_limit = 500
        email_format = "json"
        "#,
    )
    .unwrap();
    assert_eq!(config.channels.short_form_limit, 500);
    assert_eq!(config.channels.email_format, EmailFormatMode::Json);
    assert_eq!(config.channels.default_email_subject, "New Campaign Update");
    assert_eq!(config.generation.deployment, "gpt-4");
}

#[test]
fn zero_short_form_limit_is_rejected() {
    let err = SparcConfig::from_toml_str("[channels]\nshort_form_limit = 0\n").unwrap_err();
    assert!(err.to_string().contains("short_form_limit"));
}

#[test]
fn from_file_reads_user_file() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(file, "[database]\npath = \"/tmp/other.db\"").unwrap();

    let config = SparcConfig::from_file(file.path()).unwrap();
    assert_eq!(config.database.path.to_str(), Some("/tmp/other.db"));
}

#[test]
fn from_file_fails_for_missing_file() {
    assert!(SparcConfig::from_file("/definitely/not/here.toml").is_err());
}

#[test]
fn missing_generation_key_is_a_config_error() {
    let err = GenerationCredentials::from_lookup(lookup(&[(
        "AZURE_OPENAI_ENDPOINT",
        "https://x.openai.azure.com",
    )]))
    .unwrap_err();
    assert!(err.to_string().contains("AZURE_OPENAI_API_KEY"));
}

#[test]
fn blank_values_count_as_missing() {
    let result = TwitterCredentials::from_lookup(lookup(&[("TWITTER_BEARER_TOKEN", "  ")]));
    assert!(result.is_err());
}

#[test]
fn smtp_sender_defaults_to_username() {
    let creds = SmtpCredentials::from_lookup(lookup(&[
        ("SMTP_USERNAME", "news@example.com"),
        ("SMTP_PASSWORD", "hunter2"),
    ]))
    .unwrap();
    assert_eq!(creds.sender, "news@example.com");
    assert!(!format!("{:?}", creds).contains("hunter2"));
}
