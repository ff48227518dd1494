use chrono::{Duration, Utc};
use sparc_core::{
    CampaignStatus, ContentStyle, ContentType, ContentUpdate, ExperienceLevel, MetricFilter,
    MetricKind, NewCampaign, NewContent, NewMetricRecord, NewScheduleEntry, PersonaProfile,
    PersonaUpdate, Platform, ScheduleStatus, TagSet, TechnicalProficiency, Tone,
};
use sparc_database::SqliteStore;
use sparc_interface::{
    AnalyticsStore, CampaignStore, ContentStore, PersonaStore, ScheduleStore, SparcStore,
};
use tempfile::TempDir;

fn open_store() -> (TempDir, SqliteStore) {
    let dir = TempDir::new().expect("temp dir");
    let store = SqliteStore::open(dir.path().join("campaigns.db"), 2).expect("open store");
    (dir, store)
}

async fn seed(store: &SqliteStore) -> (i32, i32) {
    let campaign = store
        .create_campaign(&NewCampaign::new("Launch", "Grow trials").with_industries("Finance, Retail"))
        .await
        .unwrap();
    let persona = store
        .create_persona(
            &PersonaProfile::new("Dana", "Data Engineer")
                .with_experience(ExperienceLevel::Senior)
                .with_proficiency(TechnicalProficiency::Expert)
                .with_style(ContentStyle::Technical)
                .with_pain_points("Slow pipelines"),
        )
        .await
        .unwrap();
    (campaign.id, persona.id)
}

fn new_content(campaign_id: i32, persona_id: i32, body: &str) -> NewContent {
    NewContent::builder()
        .campaign_id(campaign_id)
        .persona_id(persona_id)
        .content_type(ContentType::SocialMediaPost)
        .tone(Tone::Professional)
        .body(body)
        .hashtags(TagSet::from_csv("#AI,#Data"))
        .build()
        .unwrap()
}

#[tokio::test]
async fn persona_round_trips_through_sqlite() {
    let (_dir, store) = open_store();
    let (_, persona_id) = seed(&store).await;

    let persona = store.get_persona(persona_id).await.unwrap().unwrap();
    assert_eq!(persona.profile.name, "Dana");
    assert_eq!(persona.profile.roles, vec!["Data Engineer".to_string()]);
    assert_eq!(persona.profile.experience, Some(ExperienceLevel::Senior));
    assert_eq!(
        persona.profile.technical_proficiency,
        Some(TechnicalProficiency::Expert)
    );
    assert_eq!(persona.profile.content_styles, vec![ContentStyle::Technical]);
    assert_eq!(persona.profile.pain_points.as_deref(), Some("Slow pipelines"));
    assert!(store.get_persona(persona_id + 100).await.unwrap().is_none());
}

#[tokio::test]
async fn update_persona_changes_only_given_fields() {
    let (_dir, store) = open_store();
    let (_, persona_id) = seed(&store).await;

    let update = PersonaUpdate::default().with_name("Dana R.".to_string());
    assert!(store.update_persona(persona_id, &update).await.unwrap());
    assert!(!store.update_persona(persona_id + 100, &update).await.unwrap());

    let persona = store.get_persona(persona_id).await.unwrap().unwrap();
    assert_eq!(persona.profile.name, "Dana R.");
    assert_eq!(persona.profile.experience, Some(ExperienceLevel::Senior));
}

#[tokio::test]
async fn persona_without_roles_is_rejected() {
    let (_dir, store) = open_store();
    let (_, persona_id) = seed(&store).await;

    let err = store
        .create_persona(&PersonaProfile::new("Nobody", " "))
        .await
        .unwrap_err();
    assert!(err.is_invalid_argument());
    assert_eq!(store.list_personas().await.unwrap().len(), 1);

    let update = PersonaUpdate::default()
        .with_name("Dana R.".to_string())
        .with_roles(Vec::new());
    let err = store.update_persona(persona_id, &update).await.unwrap_err();
    assert!(err.is_invalid_argument());

    let persona = store.get_persona(persona_id).await.unwrap().unwrap();
    assert_eq!(persona.profile.name, "Dana");
    assert_eq!(persona.profile.roles, vec!["Data Engineer".to_string()]);
}

#[tokio::test]
async fn referenced_persona_cannot_be_deleted() {
    let (_dir, store) = open_store();
    let (campaign_id, persona_id) = seed(&store).await;
    store
        .save_content(&new_content(campaign_id, persona_id, "Body"))
        .await
        .unwrap();

    let err = store.delete_persona(persona_id).await.unwrap_err();
    assert!(err.is_referential_integrity());
    assert!(store.get_persona(persona_id).await.unwrap().is_some());

    let spare = store
        .create_persona(&PersonaProfile::new("Sam", "Analyst"))
        .await
        .unwrap();
    assert!(store.delete_persona(spare.id).await.unwrap());
    assert!(!store.delete_persona(spare.id).await.unwrap());
}

#[tokio::test]
async fn save_content_requires_existing_campaign_and_persona() {
    let (_dir, store) = open_store();
    let (campaign_id, persona_id) = seed(&store).await;

    let err = store
        .save_content(&new_content(campaign_id + 50, persona_id, "Body"))
        .await
        .unwrap_err();
    assert!(err.is_referential_integrity());

    let err = store
        .save_content(&new_content(campaign_id, persona_id + 50, "Body"))
        .await
        .unwrap_err();
    assert!(err.is_referential_integrity());
    assert!(store.get_content_by_campaign(campaign_id).await.unwrap().is_empty());
}

#[tokio::test]
async fn saved_content_reads_back_unchanged() {
    let (_dir, store) = open_store();
    let (campaign_id, persona_id) = seed(&store).await;

    let id = store
        .save_content(&new_content(campaign_id, persona_id, "Canonical body"))
        .await
        .unwrap();
    let content = store.get_content(id).await.unwrap().unwrap();

    assert_eq!(content.campaign_id, campaign_id);
    assert_eq!(content.persona_id, persona_id);
    assert_eq!(content.content_type, ContentType::SocialMediaPost);
    assert_eq!(content.tone, Tone::Professional);
    assert_eq!(content.body, "Canonical body");
    assert_eq!(content.hashtags.as_slice(), &["#AI", "#Data"]);
    assert!(content.twitter_variant.is_none());
    assert!(content.email_subject.is_none());
}

#[tokio::test]
async fn update_content_leaves_unset_fields_alone() {
    let (_dir, store) = open_store();
    let (campaign_id, persona_id) = seed(&store).await;
    let id = store
        .save_content(&new_content(campaign_id, persona_id, "Canonical body"))
        .await
        .unwrap();

    let update = ContentUpdate::default().with_twitter_variant("Short take #AI".to_string());
    assert!(store.update_content(id, &update).await.unwrap());
    assert!(!store.update_content(id + 100, &update).await.unwrap());

    let content = store.get_content(id).await.unwrap().unwrap();
    assert_eq!(content.body, "Canonical body");
    assert_eq!(content.twitter_variant.as_deref(), Some("Short take #AI"));
    assert!(content.email_body.is_none());
    assert!(content.updated_at >= content.created_at);
}

#[tokio::test]
async fn content_listing_is_scoped_and_newest_first() {
    let (_dir, store) = open_store();
    let (campaign_id, persona_id) = seed(&store).await;
    let other = store
        .create_campaign(&NewCampaign::new("Other", "Retain"))
        .await
        .unwrap();

    let first = store
        .save_content(&new_content(campaign_id, persona_id, "first"))
        .await
        .unwrap();
    let second = store
        .save_content(&new_content(campaign_id, persona_id, "second"))
        .await
        .unwrap();
    store
        .save_content(&new_content(other.id, persona_id, "elsewhere"))
        .await
        .unwrap();

    let ids: Vec<i32> = store
        .get_content_by_campaign(campaign_id)
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.id)
        .collect();
    assert_eq!(ids, vec![second, first]);
}

#[tokio::test]
async fn campaigns_keep_industries_and_status() {
    let (_dir, store) = open_store();
    let (campaign_id, _) = seed(&store).await;

    let campaign = store.get_campaign(campaign_id).await.unwrap().unwrap();
    assert_eq!(campaign.industries.as_slice(), &["Finance", "Retail"]);
    assert_eq!(campaign.status, CampaignStatus::Draft);

    assert!(
        store
            .set_campaign_status(campaign_id, CampaignStatus::Active)
            .await
            .unwrap()
    );
    let campaign = store.get_campaign(campaign_id).await.unwrap().unwrap();
    assert_eq!(campaign.status, CampaignStatus::Active);
    assert!(
        !store
            .set_campaign_status(campaign_id + 10, CampaignStatus::Active)
            .await
            .unwrap()
    );
}

#[tokio::test]
async fn campaigns_with_content_groups_rows() {
    let (_dir, store) = open_store();
    let (campaign_id, persona_id) = seed(&store).await;
    store
        .save_content(&new_content(campaign_id, persona_id, "one"))
        .await
        .unwrap();

    let grouped = store.campaigns_with_content().await.unwrap();
    assert_eq!(grouped.len(), 1);
    assert_eq!(grouped[0].campaign.id, campaign_id);
    assert_eq!(grouped[0].content.len(), 1);
}

#[tokio::test]
async fn schedules_are_ordered_by_time_and_checked_against_campaign() {
    let (_dir, store) = open_store();
    let (campaign_id, persona_id) = seed(&store).await;
    let content_id = store
        .save_content(&new_content(campaign_id, persona_id, "Body"))
        .await
        .unwrap();
    let base = Utc::now().naive_utc() + Duration::days(1);

    let late = store
        .create_schedule(&NewScheduleEntry {
            campaign_id,
            content_id,
            platform: Platform::Email,
            scheduled_time: base + Duration::hours(5),
        })
        .await
        .unwrap();
    let early = store
        .create_schedule(&NewScheduleEntry {
            campaign_id,
            content_id,
            platform: Platform::Twitter,
            scheduled_time: base,
        })
        .await
        .unwrap();
    assert_eq!(early.status, ScheduleStatus::Pending);

    let ids: Vec<i32> = store
        .list_schedules(Some(campaign_id))
        .await
        .unwrap()
        .iter()
        .map(|s| s.id)
        .collect();
    assert_eq!(ids, vec![early.id, late.id]);
    assert!(store.list_schedules(Some(campaign_id + 9)).await.unwrap().is_empty());

    assert!(
        store
            .set_schedule_status(late.id, ScheduleStatus::Cancelled)
            .await
            .unwrap()
    );
    let late = store.get_schedule(late.id).await.unwrap().unwrap();
    assert_eq!(late.status, ScheduleStatus::Cancelled);

    let other = store
        .create_campaign(&NewCampaign::new("Other", "Retain"))
        .await
        .unwrap();
    let err = store
        .create_schedule(&NewScheduleEntry {
            campaign_id: other.id,
            content_id,
            platform: Platform::Blog,
            scheduled_time: base,
        })
        .await
        .unwrap_err();
    assert!(err.is_referential_integrity());
}

#[tokio::test]
async fn metrics_filter_by_campaign_platform_and_time() {
    let (_dir, store) = open_store();
    let (campaign_id, _) = seed(&store).await;
    let other = store
        .create_campaign(&NewCampaign::new("Other", "Retain"))
        .await
        .unwrap();

    for (campaign, platform, metric, value) in [
        (campaign_id, Platform::Twitter, MetricKind::Impressions, 1000.0),
        (campaign_id, Platform::Twitter, MetricKind::Clicks, 50.0),
        (campaign_id, Platform::Email, MetricKind::Roi, 2.5),
        (other.id, Platform::Twitter, MetricKind::Clicks, 7.0),
    ] {
        store
            .record_metric(&NewMetricRecord {
                campaign_id: campaign,
                content_id: None,
                platform,
                metric,
                value,
            })
            .await
            .unwrap();
    }

    let all = store.list_metrics(&MetricFilter::default()).await.unwrap();
    assert_eq!(all.len(), 4);

    let scoped = store
        .list_metrics(&MetricFilter::default().with_campaign_id(campaign_id))
        .await
        .unwrap();
    assert_eq!(scoped.len(), 3);

    let twitter = store
        .list_metrics(
            &MetricFilter::default()
                .with_campaign_id(campaign_id)
                .with_platform(Platform::Twitter),
        )
        .await
        .unwrap();
    assert_eq!(twitter.len(), 2);
    assert!(twitter.iter().all(|m| m.platform == Platform::Twitter));

    let future = store
        .list_metrics(
            &MetricFilter::default().with_since(Utc::now().naive_utc() + Duration::days(1)),
        )
        .await
        .unwrap();
    assert!(future.is_empty());
}

#[tokio::test]
async fn metric_for_missing_campaign_is_rejected() {
    let (_dir, store) = open_store();

    let err = store
        .record_metric(&NewMetricRecord {
            campaign_id: 404,
            content_id: None,
            platform: Platform::Twitter,
            metric: MetricKind::Clicks,
            value: 1.0,
        })
        .await
        .unwrap_err();
    assert!(err.is_referential_integrity());
}

#[tokio::test]
async fn reopening_keeps_data() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("campaigns.db");
    let id = {
        let store = SqliteStore::open(&path, 1).unwrap();
        store
            .create_campaign(&NewCampaign::new("Persisted", "Stay"))
            .await
            .unwrap()
            .id
    };

    let store = SqliteStore::open(&path, 1).unwrap();
    let campaign = store.get_campaign(id).await.unwrap().unwrap();
    assert_eq!(campaign.name, "Persisted");
}
