use chrono::NaiveDate;
use sparc_core::{
    AnalyticsSummary, ContentType, ContentUpdate, ExperienceLevel, GeneratedContent,
    MetricFilter, MetricKind, MetricRecord, PersonaProfile, PersonaUpdate, Platform,
    ReportingPeriod, TagSet, TechnicalProficiency, Tone,
};
use strum::IntoEnumIterator;

fn at(day: u32) -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, day)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

fn content() -> GeneratedContent {
    GeneratedContent {
        id: 1,
        campaign_id: 1,
        persona_id: 1,
        content_type: ContentType::SocialMediaPost,
        tone: Tone::Casual,
        body: "Canonical body".to_string(),
        hashtags: TagSet::from_csv("#AI"),
        keywords: TagSet::new(),
        twitter_variant: None,
        email_subject: None,
        email_body: None,
        external_post_url: None,
        created_at: at(1),
        updated_at: at(1),
    }
}

fn metric(campaign_id: i32, platform: Platform, metric: MetricKind, value: f64, day: u32) -> MetricRecord {
    MetricRecord {
        id: 0,
        campaign_id,
        content_id: None,
        platform,
        metric,
        value,
        recorded_at: at(day),
    }
}

#[test]
fn tag_set_trims_and_drops_duplicates() {
    let mut tags = TagSet::from_csv(" #AI ,#Data, , #AI");
    assert_eq!(tags.as_slice(), &["#AI", "#Data"]);
    assert!(!tags.insert("#Data "));
    assert!(tags.insert("#Cloud"));
    assert_eq!(tags.joined(", "), "#AI, #Data, #Cloud");
}

#[test]
fn tag_set_serializes_as_plain_list() {
    let tags = TagSet::from_csv("a,b");
    assert_eq!(serde_json::to_string(&tags).unwrap(), r#"["a","b"]"#);
}

#[test]
fn tag_set_normalises_deserialized_lists() {
    let tags: TagSet = serde_json::from_str(r#"["a", " a ", "", "b"]"#).unwrap();
    assert_eq!(tags.as_slice(), &["a", "b"]);
}

#[test]
fn content_type_parses_short_and_long_labels() {
    assert_eq!(
        "deep-dive".parse::<ContentType>().unwrap(),
        ContentType::ProductDeepDive
    );
    assert_eq!(
        "customer stories".parse::<ContentType>().unwrap(),
        ContentType::CustomerStory
    );
    for kind in ContentType::iter() {
        assert_eq!(kind.to_string().parse::<ContentType>().unwrap(), kind);
    }
}

#[test]
fn experience_level_accepts_short_form() {
    assert_eq!(
        "lead".parse::<ExperienceLevel>().unwrap(),
        ExperienceLevel::Leadership
    );
    assert_eq!(ExperienceLevel::Mid.to_string(), "Mid Level");
}

#[test]
fn proficiency_is_ordered() {
    let levels: Vec<_> = TechnicalProficiency::iter().collect();
    let mut sorted = levels.clone();
    sorted.sort();
    assert_eq!(levels, sorted);
}

#[test]
fn blank_roles_fall_back_to_not_specified() {
    let profile = PersonaProfile {
        roles: vec!["  ".to_string()],
        ..PersonaProfile::default()
    };
    assert_eq!(profile.roles_label(), "Not specified");
    assert!(!profile.has_role());

    let profile = PersonaProfile {
        roles: vec!["CTO".to_string(), "".to_string(), "Data Lead".to_string()],
        ..PersonaProfile::default()
    };
    assert_eq!(profile.roles_label(), "CTO, Data Lead");
    assert!(profile.has_role());
}

#[test]
fn persona_update_touches_only_set_fields() {
    let mut profile = PersonaProfile::new("Dana", "Analyst").with_pain_points("Slow dashboards");
    let update = PersonaUpdate::default().with_technical_proficiency(TechnicalProficiency::Expert);
    update.apply_to(&mut profile);

    assert_eq!(profile.name, "Dana");
    assert_eq!(profile.pain_points.as_deref(), Some("Slow dashboards"));
    assert_eq!(
        profile.technical_proficiency,
        Some(TechnicalProficiency::Expert)
    );
    assert!(PersonaUpdate::default().is_empty());
}

#[test]
fn content_update_keeps_body_and_bumps_timestamp() {
    let mut row = content();
    ContentUpdate::default()
        .with_twitter_variant("Short #AI".to_string())
        .apply_to(&mut row, at(2));

    assert_eq!(row.body, "Canonical body");
    assert_eq!(row.twitter_variant.as_deref(), Some("Short #AI"));
    assert_eq!(row.updated_at, at(2));
    assert_eq!(row.created_at, at(1));
}

#[test]
fn summary_of_nothing_is_zero() {
    let summary = AnalyticsSummary::from_records(&[]);
    assert_eq!(summary, AnalyticsSummary::default());
}

#[test]
fn summary_averages_roi_and_computes_ctr() {
    let records = vec![
        metric(1, Platform::Twitter, MetricKind::Impressions, 1000.0, 1),
        metric(1, Platform::Twitter, MetricKind::Clicks, 25.0, 1),
        metric(1, Platform::Email, MetricKind::Conversions, 3.0, 2),
        metric(1, Platform::Email, MetricKind::Roi, 10.0, 2),
        metric(1, Platform::Twitter, MetricKind::Roi, 30.0, 3),
    ];
    let summary = AnalyticsSummary::from_records(&records);
    assert_eq!(summary.total_impressions, 1000.0);
    assert_eq!(summary.average_ctr, 2.5);
    assert_eq!(summary.total_conversions, 3.0);
    assert_eq!(summary.average_roi, 20.0);
}

#[test]
fn metric_filter_combines_criteria() {
    let filter = MetricFilter::default()
        .with_campaign_id(1)
        .with_platform(Platform::Twitter)
        .with_since(at(2));

    assert!(filter.matches(&metric(1, Platform::Twitter, MetricKind::Clicks, 1.0, 3)));
    assert!(!filter.matches(&metric(2, Platform::Twitter, MetricKind::Clicks, 1.0, 3)));
    assert!(!filter.matches(&metric(1, Platform::Email, MetricKind::Clicks, 1.0, 3)));
    assert!(!filter.matches(&metric(1, Platform::Twitter, MetricKind::Clicks, 1.0, 1)));
    assert!(MetricFilter::default().matches(&metric(9, Platform::Blog, MetricKind::Roi, 0.0, 1)));
}

#[test]
fn reporting_periods_resolve_lower_bound() {
    let now = at(31);
    assert_eq!(ReportingPeriod::Last7Days.since(now), Some(at(24)));
    assert_eq!(ReportingPeriod::Last30Days.since(now), Some(at(1)));
    assert_eq!(ReportingPeriod::AllTime.since(now), None);
    assert_eq!("7d".parse::<ReportingPeriod>().unwrap(), ReportingPeriod::Last7Days);
}
