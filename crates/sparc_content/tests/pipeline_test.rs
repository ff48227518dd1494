mod test_utils;

use chrono::{Duration, Utc};
use sparc_config::GenerationSettings;
use sparc_content::{
    CampaignPipeline, CampaignTracker, ChannelAdapter, ContentGenerator, ContentRequest,
    InMemoryStore,
};
use sparc_core::{
    ContentType, ExperienceLevel, MetricFilter, MetricKind, NewCampaign, NewMetricRecord,
    PersonaProfile, PersonaUpdate, Platform, ScheduleStatus, TagSet, Tone,
};
use sparc_error::{DeliveryErrorKind, SparcErrorKind};
use sparc_interface::{AnalyticsStore, CampaignStore, ContentStore, PersonaStore, SparcStore};
use std::sync::Arc;
use test_utils::{MockDriver, MockEmailSender, MockPublisher, MockResponse};

struct Fixture {
    pipeline: CampaignPipeline,
    tracker: CampaignTracker,
    store: Arc<InMemoryStore>,
    campaign_id: i32,
    persona_id: i32,
}

async fn fixture(driver: &MockDriver) -> Fixture {
    let store = Arc::new(InMemoryStore::new());
    let campaign = store
        .create_campaign(&NewCampaign::new("Q1 Launch", "Drive sign-ups").with_industries("Finance"))
        .await
        .unwrap();
    let persona = store
        .create_persona(
            &PersonaProfile::new("Dana", "Data Engineer").with_experience(ExperienceLevel::Senior),
        )
        .await
        .unwrap();

    let generator = ContentGenerator::new(Arc::new(driver.clone()), GenerationSettings::default());
    let pipeline = CampaignPipeline::new(
        ChannelAdapter::new(generator),
        store.clone() as Arc<dyn SparcStore>,
        280,
    );

    Fixture {
        pipeline,
        tracker: CampaignTracker::new(store.clone() as Arc<dyn SparcStore>),
        store,
        campaign_id: campaign.id,
        persona_id: persona.id,
    }
}

fn request(f: &Fixture) -> ContentRequest {
    ContentRequest::builder()
        .campaign_id(f.campaign_id)
        .persona_id(f.persona_id)
        .content_type(ContentType::SocialMediaPost)
        .tone(Tone::Conversational)
        .hashtags(TagSet::from_csv("#AI,#Data"))
        .build()
        .unwrap()
}

#[tokio::test]
async fn generate_stores_canonical_content() {
    let driver = MockDriver::new_success("Canonical launch story");
    let f = fixture(&driver).await;

    let content = f.pipeline.generate(&request(&f)).await.unwrap();
    assert_eq!(content.body, "Canonical launch story");
    assert_eq!(content.hashtags.as_slice(), &["#AI", "#Data"]);
    assert!(content.twitter_variant.is_none());

    let prompt = &driver.prompts()[0];
    assert!(prompt.contains("Campaign Goal: Drive sign-ups"));
    assert!(prompt.contains("professionals in Finance."));
}

#[tokio::test]
async fn generate_rejects_unknown_persona_without_calling_model() {
    let driver = MockDriver::new_success("unused");
    let f = fixture(&driver).await;

    let mut req = request(&f);
    req.persona_id = 9999;
    let err = f.pipeline.generate(&req).await.unwrap_err();

    assert!(err.is_referential_integrity());
    assert_eq!(driver.call_count(), 0);
}

#[tokio::test]
async fn generation_failure_stores_nothing() {
    let driver = MockDriver::new_error(sparc_error::GenerationErrorKind::Timeout(30));
    let f = fixture(&driver).await;

    let err = f.pipeline.generate(&request(&f)).await.unwrap_err();
    assert!(err.is_generation_failure());
    assert!(f.store.get_content_by_campaign(f.campaign_id).await.unwrap().is_empty());
}

#[tokio::test]
async fn adaptation_never_touches_canonical_body() {
    let driver = MockDriver::new_sequence(vec![
        MockResponse::Success("Canonical body".to_string()),
        MockResponse::Success("Tweet one #AI".to_string()),
        MockResponse::Success("Subject: Hello\nDear reader".to_string()),
        MockResponse::Success("Tweet two #AI".to_string()),
    ]);
    let f = fixture(&driver).await;
    let content = f.pipeline.generate(&request(&f)).await.unwrap();

    f.pipeline.adapt_short_form(content.id, None).await.unwrap();
    f.pipeline.adapt_email(content.id, None).await.unwrap();
    f.pipeline.adapt_short_form(content.id, None).await.unwrap();

    let stored = f.store.get_content(content.id).await.unwrap().unwrap();
    assert_eq!(stored.body, "Canonical body");
    assert_eq!(stored.twitter_variant.as_deref(), Some("Tweet two #AI"));
    assert_eq!(stored.email_subject.as_deref(), Some("Hello"));
    assert_eq!(stored.email_body.as_deref(), Some("Subject: Hello\nDear reader"));
    assert!(stored.updated_at >= stored.created_at);

    // Every adaptation read the canonical body, not a previous variant.
    for prompt in &driver.prompts()[1..] {
        assert!(prompt.contains("Canonical body"));
    }
}

#[tokio::test]
async fn adapting_missing_content_is_not_found() {
    let driver = MockDriver::new_success("unused");
    let f = fixture(&driver).await;

    let err = f.pipeline.adapt_short_form(4242, None).await.unwrap_err();
    assert!(matches!(err.kind(), SparcErrorKind::Store(_)));
    assert_eq!(driver.call_count(), 0);
}

#[tokio::test]
async fn publish_adapts_when_no_variant_and_seeds_metrics() {
    let driver = MockDriver::new_sequence(vec![
        MockResponse::Success("Canonical body".to_string()),
        MockResponse::Success("Ready to post #AI".to_string()),
    ]);
    let f = fixture(&driver).await;
    let content = f.pipeline.generate(&request(&f)).await.unwrap();
    let publisher = MockPublisher::new();

    let receipt = f
        .pipeline
        .publish_short_form(content.id, &publisher)
        .await
        .unwrap();

    assert_eq!(publisher.posts(), vec!["Ready to post #AI".to_string()]);
    let stored = f.store.get_content(content.id).await.unwrap().unwrap();
    assert_eq!(stored.external_post_url.as_deref(), Some(receipt.url.as_str()));

    let metrics = f
        .store
        .list_metrics(&MetricFilter::default().with_campaign_id(f.campaign_id))
        .await
        .unwrap();
    assert_eq!(metrics.len(), 4);
    assert!(metrics.iter().all(|m| m.value == 0.0 && m.content_id == Some(content.id)));
}

#[tokio::test]
async fn publish_uses_stored_variant() {
    let driver = MockDriver::new_sequence(vec![
        MockResponse::Success("Canonical body".to_string()),
        MockResponse::Success("Stored tweet".to_string()),
    ]);
    let f = fixture(&driver).await;
    let content = f.pipeline.generate(&request(&f)).await.unwrap();
    f.pipeline.adapt_short_form(content.id, None).await.unwrap();

    let publisher = MockPublisher::new();
    f.pipeline
        .publish_short_form(content.id, &publisher)
        .await
        .unwrap();

    assert_eq!(publisher.posts(), vec!["Stored tweet".to_string()]);
    assert_eq!(driver.call_count(), 2);
}

#[tokio::test]
async fn failed_publish_leaves_no_post_url() {
    let driver = MockDriver::new_sequence(vec![
        MockResponse::Success("Canonical body".to_string()),
        MockResponse::Success("Tweet".to_string()),
    ]);
    let f = fixture(&driver).await;
    let content = f.pipeline.generate(&request(&f)).await.unwrap();

    let publisher = MockPublisher::failing(DeliveryErrorKind::Duplicate);
    let err = f
        .pipeline
        .publish_short_form(content.id, &publisher)
        .await
        .unwrap_err();

    assert!(matches!(err.kind(), SparcErrorKind::Delivery(_)));
    let stored = f.store.get_content(content.id).await.unwrap().unwrap();
    assert!(stored.external_post_url.is_none());
}

#[tokio::test]
async fn send_email_requires_recipients() {
    let driver = MockDriver::new_success("Canonical body");
    let f = fixture(&driver).await;
    let content = f.pipeline.generate(&request(&f)).await.unwrap();

    let err = f
        .pipeline
        .send_email(content.id, &[], &MockEmailSender::new())
        .await
        .unwrap_err();
    assert!(err.is_invalid_argument());
    assert_eq!(driver.call_count(), 1);
}

#[tokio::test]
async fn send_email_adapts_then_sends() {
    let driver = MockDriver::new_sequence(vec![
        MockResponse::Success("Canonical body".to_string()),
        MockResponse::Success("Subject: Big News\nHi all".to_string()),
    ]);
    let f = fixture(&driver).await;
    let content = f.pipeline.generate(&request(&f)).await.unwrap();
    let sender = MockEmailSender::new();
    let recipients = vec!["a@example.com".to_string(), "b@example.com".to_string()];

    let draft = f
        .pipeline
        .send_email(content.id, &recipients, &sender)
        .await
        .unwrap();

    assert_eq!(draft.subject, "Big News");
    let sent = sender.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].0, recipients);
    assert_eq!(sent[0].1, "Big News");
}

#[tokio::test]
async fn referenced_persona_cannot_be_deleted() {
    let driver = MockDriver::new_success("Canonical body");
    let f = fixture(&driver).await;
    f.pipeline.generate(&request(&f)).await.unwrap();

    let err = f.store.delete_persona(f.persona_id).await.unwrap_err();
    assert!(err.is_referential_integrity());
    assert!(f.store.get_persona(f.persona_id).await.unwrap().is_some());
}

#[tokio::test]
async fn unreferenced_persona_is_deleted() {
    let driver = MockDriver::new_success("unused");
    let f = fixture(&driver).await;

    assert!(f.store.delete_persona(f.persona_id).await.unwrap());
    assert!(f.store.get_persona(f.persona_id).await.unwrap().is_none());
    assert!(!f.store.delete_persona(f.persona_id).await.unwrap());
}

#[tokio::test]
async fn personas_need_a_role_label() {
    let driver = MockDriver::new_success("unused");
    let f = fixture(&driver).await;

    let err = f
        .store
        .create_persona(&PersonaProfile {
            name: "Roleless".to_string(),
            ..PersonaProfile::default()
        })
        .await
        .unwrap_err();
    assert!(err.is_invalid_argument());

    let err = f
        .store
        .update_persona(f.persona_id, &PersonaUpdate::default().with_roles(vec![" ".to_string()]))
        .await
        .unwrap_err();
    assert!(err.is_invalid_argument());

    f.pipeline.generate(&request(&f)).await.unwrap();
    assert!(driver.prompts()[0].contains("Target Audience: Data Engineer"));
}

#[tokio::test]
async fn schedule_validates_input() {
    let driver = MockDriver::new_success("Canonical body");
    let f = fixture(&driver).await;
    let content = f.pipeline.generate(&request(&f)).await.unwrap();
    let now = Utc::now().naive_utc();

    let err = f
        .tracker
        .schedule(f.campaign_id, content.id, &[], now + Duration::hours(1), now)
        .await
        .unwrap_err();
    assert!(err.is_invalid_argument());

    let err = f
        .tracker
        .schedule(f.campaign_id, content.id, &[Platform::Twitter], now - Duration::hours(1), now)
        .await
        .unwrap_err();
    assert!(err.is_invalid_argument());

    let err = f
        .tracker
        .schedule(f.campaign_id + 100, content.id, &[Platform::Twitter], now + Duration::hours(1), now)
        .await
        .unwrap_err();
    assert!(err.is_invalid_argument());
}

#[tokio::test]
async fn schedule_creates_one_pending_entry_per_platform() {
    let driver = MockDriver::new_success("Canonical body");
    let f = fixture(&driver).await;
    let content = f.pipeline.generate(&request(&f)).await.unwrap();
    let now = Utc::now().naive_utc();

    let entries = f
        .tracker
        .schedule(
            f.campaign_id,
            content.id,
            &[Platform::Email, Platform::Twitter, Platform::Email],
            now + Duration::days(1),
            now,
        )
        .await
        .unwrap();

    assert_eq!(entries.len(), 2);
    assert!(entries.iter().all(|e| e.status == ScheduleStatus::Pending));
}

#[tokio::test]
async fn only_pending_entries_can_be_cancelled() {
    let driver = MockDriver::new_success("Canonical body");
    let f = fixture(&driver).await;
    let content = f.pipeline.generate(&request(&f)).await.unwrap();
    let now = Utc::now().naive_utc();
    let entry = f
        .tracker
        .schedule(f.campaign_id, content.id, &[Platform::Blog], now + Duration::days(1), now)
        .await
        .unwrap()
        .remove(0);

    let cancelled = f.tracker.cancel_schedule(entry.id).await.unwrap();
    assert_eq!(cancelled.status, ScheduleStatus::Cancelled);

    let err = f.tracker.cancel_schedule(entry.id).await.unwrap_err();
    assert!(err.is_invalid_argument());

    let err = f.tracker.cancel_schedule(777).await.unwrap_err();
    assert!(matches!(err.kind(), SparcErrorKind::Store(_)));
}

#[tokio::test]
async fn summary_aggregates_recorded_metrics() {
    let driver = MockDriver::new_success("unused");
    let f = fixture(&driver).await;

    for (metric, value) in [
        (MetricKind::Impressions, 400.0),
        (MetricKind::Clicks, 20.0),
        (MetricKind::Roi, 12.5),
    ] {
        f.tracker
            .record_metric(&NewMetricRecord {
                campaign_id: f.campaign_id,
                content_id: None,
                platform: Platform::Email,
                metric,
                value,
            })
            .await
            .unwrap();
    }

    let summary = f
        .tracker
        .summary(&MetricFilter::default().with_platform(Platform::Email))
        .await
        .unwrap();
    assert_eq!(summary.total_impressions, 400.0);
    assert_eq!(summary.average_ctr, 5.0);
    assert_eq!(summary.average_roi, 12.5);

    let err = f
        .tracker
        .record_metric(&NewMetricRecord {
            campaign_id: f.campaign_id,
            content_id: None,
            platform: Platform::Email,
            metric: MetricKind::Clicks,
            value: f64::NAN,
        })
        .await
        .unwrap_err();
    assert!(err.is_invalid_argument());
}

#[tokio::test]
async fn campaigns_with_content_groups_rows() {
    let driver = MockDriver::new_success("Canonical body");
    let f = fixture(&driver).await;
    f.pipeline.generate(&request(&f)).await.unwrap();
    f.pipeline.generate(&request(&f)).await.unwrap();

    let grouped = f.store.campaigns_with_content().await.unwrap();
    assert_eq!(grouped.len(), 1);
    assert_eq!(grouped[0].content.len(), 2);
    assert!(grouped[0].content[0].id > grouped[0].content[1].id);
}
