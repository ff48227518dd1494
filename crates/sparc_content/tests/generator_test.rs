mod test_utils;

use sparc_config::GenerationSettings;
use sparc_content::{ContentGenerator, build_prompt};
use sparc_core::{ContentType, PersonaProfile, Role, Tone};
use sparc_error::{GenerationErrorKind, SparcErrorKind};
use std::sync::Arc;
use test_utils::MockDriver;

fn generator(driver: &MockDriver) -> ContentGenerator {
    ContentGenerator::new(Arc::new(driver.clone()), GenerationSettings::default())
}

#[tokio::test]
async fn custom_generation_uses_defaults_and_system_prompt() {
    let driver = MockDriver::new_success("  Generated text  ");
    let text = generator(&driver).generate_custom("Write something").await.unwrap();

    assert_eq!(text, "Generated text");
    let request = &driver.requests()[0];
    assert_eq!(request.max_tokens, Some(1000));
    assert_eq!(request.temperature, Some(0.7));
    assert_eq!(request.messages[0].role, Role::System);
    assert_eq!(
        request.messages[0].content,
        "You are an expert marketing content creator."
    );
    assert_eq!(request.messages[1].content, "Write something");
}

#[tokio::test]
async fn explicit_limits_are_forwarded() {
    let driver = MockDriver::new_success("ok");
    generator(&driver).generate("p", 64, 0.2).await.unwrap();

    let request = &driver.requests()[0];
    assert_eq!(request.max_tokens, Some(64));
    assert_eq!(request.temperature, Some(0.2));
}

#[tokio::test]
async fn content_generation_goes_through_prompt_builder() {
    let driver = MockDriver::new_success("ok");
    let persona = PersonaProfile::new("Dana", "CTO");
    generator(&driver)
        .generate_content("Win the quarter", &persona, ContentType::LeadershipContent, Tone::Professional)
        .await
        .unwrap();

    assert_eq!(
        driver.prompts()[0],
        build_prompt("Win the quarter", &persona, ContentType::LeadershipContent, Tone::Professional)
    );
}

#[tokio::test]
async fn failures_are_errors_not_text_and_not_retried() {
    for kind in [
        GenerationErrorKind::Timeout(30),
        GenerationErrorKind::Authentication("bad key".to_string()),
        GenerationErrorKind::Quota("429".to_string()),
        GenerationErrorKind::Api {
            status: 500,
            message: "boom".to_string(),
        },
    ] {
        let driver = MockDriver::new_error(kind.clone());
        let err = generator(&driver).generate_custom("p").await.unwrap_err();

        match err.kind() {
            SparcErrorKind::Generation(e) => assert_eq!(e.kind, kind),
            other => panic!("unexpected error {}", other),
        }
        assert_eq!(driver.call_count(), 1);
    }
}

#[tokio::test]
async fn whitespace_only_reply_is_empty_response() {
    let driver = MockDriver::new_success(" \n ");
    let err = generator(&driver).generate_custom("p").await.unwrap_err();
    assert!(matches!(
        err.kind(),
        SparcErrorKind::Generation(e) if e.kind == GenerationErrorKind::EmptyResponse
    ));
}
