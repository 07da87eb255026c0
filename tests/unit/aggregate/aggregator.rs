use super::*;

fn login_record(provider: &str, login: &str, monthly: f64, created_at: &str) -> Sponsorship {
    let mut s = Sponsorship::new(provider, monthly);
    s.sponsor.login = Some(login.to_string());
    s.created_at = Some(created_at.to_string());
    s
}

fn social_record(provider: &str, handle: &str, monthly: f64) -> Sponsorship {
    let mut s = Sponsorship::new(provider, monthly);
    s.sponsor
        .social_logins
        .insert("twitter".to_string(), handle.to_string());
    s
}

#[test]
fn contribution_prefers_total_then_monthly_then_tier_label() {
    let mut s = Sponsorship::new("github", 5.0);
    s.total_dollars = Some(120.0);
    assert_eq!(contribution_amount(&s), 120.0);

    s.total_dollars = Some(0.0);
    assert_eq!(contribution_amount(&s), 5.0);

    s.monthly_dollars = 0.0;
    s.tier_name = Some("$25/mo".to_string());
    assert_eq!(contribution_amount(&s), 25.0);

    s.tier_name = Some("Gold supporter".to_string());
    assert_eq!(contribution_amount(&s), 0.0);
}

#[test]
fn tier_label_amounts_parse_decimals() {
    assert_eq!(parse_tier_amount("$25/mo"), Some(25.0));
    assert_eq!(parse_tier_amount("Sponsor ($ 7.50 a month)"), Some(7.5));
    assert_eq!(parse_tier_amount("25 dollars"), None);
}

#[test]
fn provider_scoped_logins_stay_separate() {
    let records = vec![
        login_record("a", "x", 10.0, "2023-01-01"),
        login_record("b", "x", 5.0, "2023-06-01"),
    ];
    let out = aggregate(&records);
    assert_eq!(out.len(), 2);
    assert_eq!(out[0].total_amount, 10.0);
    assert_eq!(out[1].total_amount, 5.0);
}

#[test]
fn shared_social_login_merges_across_providers() {
    let mut lapsed = social_record("opencollective", "foo", -1.0);
    lapsed.total_dollars = Some(300.0);
    lapsed.created_at = Some("2020-03-01T00:00:00Z".to_string());

    let mut current = social_record("github", "Foo", 20.0);
    current.created_at = Some("2022-05-01T00:00:00Z".to_string());

    let out = aggregate(&[current, lapsed]);
    assert_eq!(out.len(), 1);
    let agg = &out[0];
    assert_eq!(agg.total_amount, 320.0);
    assert_eq!(agg.highest_monthly_dollars, 20.0);
    assert!(agg.is_active);
    assert_eq!(agg.created_at.as_deref(), Some("2020-03-01T00:00:00Z"));
}

#[test]
fn aggregation_is_order_independent() {
    let mut a = social_record("github", "foo", 10.0);
    a.created_at = Some("2023-02-01".to_string());
    let mut b = social_record("patreon", "FOO", 0.0);
    b.tier_name = Some("$15".to_string());
    b.created_at = Some("2021-02-01".to_string());
    let c = login_record("github", "other", 3.0, "2022-01-01");

    let forward = aggregate(&[a.clone(), b.clone(), c.clone()]);
    let backward = aggregate(&[c, b, a]);

    let summarize = |v: &[AggregatedSponsor]| {
        let mut rows: Vec<(String, u64, u64, bool, Option<String>)> = v
            .iter()
            .map(|s| {
                (
                    s.key.to_string(),
                    s.total_amount.to_bits(),
                    s.highest_monthly_dollars.to_bits(),
                    s.is_active,
                    s.created_at.clone(),
                )
            })
            .collect();
        rows.sort();
        rows
    };
    assert_eq!(summarize(&forward[..]), summarize(&backward[..]));
}

#[test]
fn unparseable_dates_never_replace_valid_ones() {
    let first = login_record("github", "x", 1.0, "2023-01-01");
    let second = login_record("github", "x", 1.0, "not a date");
    let third = login_record("github", "x", 1.0, "2022-12-31");

    let out = aggregate(&[first.clone(), second.clone()]);
    assert_eq!(out[0].created_at.as_deref(), Some("2023-01-01"));

    let out = aggregate(&[second, first, third]);
    assert_eq!(out[0].created_at.as_deref(), Some("2022-12-31"));
}

#[test]
fn display_identity_upgrades_to_linked_profile() {
    let mut bare = social_record("opencollective", "foo", 0.0);
    bare.sponsor.name = Some("Foo (OC)".to_string());
    let mut linked = social_record("github", "foo", 5.0);
    linked.sponsor.name = Some("Foo".to_string());
    linked.sponsor.link_url = Some("https://github.com/foo".to_string());
    let mut later = social_record("patreon", "foo", 1.0);
    later.sponsor.name = Some("Foo (Patreon)".to_string());
    later.sponsor.website_url = Some("https://foo.dev".to_string());

    let out = aggregate(&[bare, linked, later]);
    assert_eq!(out[0].sponsor.name.as_deref(), Some("Foo"));
    assert_eq!(out[0].link(), Some("https://github.com/foo"));
}

#[test]
fn reaggregating_merged_records_keeps_totals() {
    let records = vec![
        social_record("github", "foo", 10.0),
        social_record("patreon", "foo", 4.0),
        login_record("github", "bar", 0.0, "2021-01-01"),
    ];
    let first = aggregate(&records);

    let reserialized: Vec<Sponsorship> = first
        .iter()
        .map(|agg| {
            let mut s = Sponsorship::new("merged", if agg.is_active { 1.0 } else { 0.0 });
            s.sponsor = agg.sponsor.clone();
            s.total_dollars = Some(agg.total_amount);
            s.created_at = agg.created_at.clone();
            s
        })
        .collect();
    let second = aggregate(&reserialized);

    assert_eq!(first.len(), second.len());
    for (a, b) in first.iter().zip(&second) {
        assert_eq!(a.total_amount, b.total_amount);
        assert_eq!(a.is_active, b.is_active);
    }
}

#[test]
fn private_only_when_every_record_is_private() {
    let mut a = social_record("github", "foo", 5.0);
    a.privacy_level = crate::model::sponsorship::PrivacyLevel::Private;
    let b = social_record("patreon", "foo", 5.0);

    assert!(aggregate(std::slice::from_ref(&a))[0].is_private);
    assert!(!aggregate(&[a, b])[0].is_private);
}
