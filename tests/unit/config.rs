use super::*;
use crate::foundation::color::Color;

#[test]
fn empty_object_uses_defaults() {
    let config = RenderConfig::from_reader("{}".as_bytes()).unwrap();
    assert_eq!(config, RenderConfig::default());
    assert_eq!(config.width, 800.0);
    assert_eq!(config.theme, Theme::Dark);
    assert_eq!(
        config.sections,
        vec![
            Section::Summary,
            Section::Leaderboard,
            Section::AllTime,
            Section::Past
        ]
    );
    assert!(!config.background);
}

#[test]
fn camel_case_keys_parse() {
    let json = serde_json::json!({
        "width": 960,
        "theme": "light",
        "tiers": [{ "minDollars": 5, "label": "Friend" }],
        "sections": ["tiers", "allTime"],
        "badgeTiers": [
            { "title": "Backers" },
            { "title": "Heroes", "monthlyDollars": 100, "view": "leaderboard" }
        ],
        "background": true
    });
    let config = RenderConfig::from_reader(json.to_string().as_bytes()).unwrap();
    assert_eq!(config.width, 960.0);
    assert_eq!(config.theme, Theme::Light);
    assert_eq!(config.sections, vec![Section::Tiers, Section::AllTime]);
    assert!(config.background);

    let badges = config.badge_tiers.as_ref().unwrap();
    assert_eq!(badges[1].monthly_dollars, Some(100.0));
    assert_eq!(badges[1].view, Some(TableView::Leaderboard));
    assert_eq!(badges[0].view, None);

    assert_eq!(config.classifier().unwrap().classify(1.0), "Friend");
}

#[test]
fn unknown_keys_are_rejected() {
    let err = RenderConfig::from_reader(r#"{"widht": 800}"#.as_bytes()).unwrap_err();
    assert!(err.to_string().starts_with("validation error:"));
}

#[test]
fn narrow_width_is_rejected() {
    let config = RenderConfig {
        width: 599.0,
        ..RenderConfig::default()
    };
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("width"));

    let config = RenderConfig {
        width: f64::NAN,
        ..RenderConfig::default()
    };
    assert!(config.validate().is_err());
    assert!(config.table_renderer().is_err());
}

#[test]
fn empty_tier_lists_are_rejected() {
    let config = RenderConfig {
        tiers: Some(vec![]),
        ..RenderConfig::default()
    };
    assert!(config.validate().is_err());

    let config = RenderConfig {
        badge_tiers: Some(vec![]),
        ..RenderConfig::default()
    };
    assert!(config.validate().is_err());
}

#[test]
fn non_finite_badge_threshold_is_rejected() {
    let config = RenderConfig {
        badge_tiers: Some(vec![BadgeTierConfig {
            title: "Odd".to_string(),
            monthly_dollars: Some(f64::INFINITY),
            view: None,
        }]),
        ..RenderConfig::default()
    };
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("Odd"));
}

#[test]
fn palette_override_wins_over_theme() {
    let mut custom = Palette::light();
    custom.accent = Color::rgb(0xff, 0x00, 0x00);
    let config = RenderConfig {
        theme: Theme::Dark,
        palette: Some(custom.clone()),
        ..RenderConfig::default()
    };
    assert_eq!(config.palette(), custom);
    assert_eq!(RenderConfig::default().palette(), Palette::dark());
}

#[test]
fn badge_tiers_attach_table_views() {
    let config = RenderConfig {
        badge_tiers: Some(vec![
            BadgeTierConfig {
                title: "Backers".to_string(),
                monthly_dollars: None,
                view: None,
            },
            BadgeTierConfig {
                title: "Heroes".to_string(),
                monthly_dollars: Some(100.0),
                view: Some(TableView::Leaderboard),
            },
        ]),
        ..RenderConfig::default()
    };
    let renderer = config.table_renderer().unwrap();
    let tiers = config.badge_tiers(&renderer);
    assert_eq!(tiers.len(), 2);
    assert!(tiers[0].strategy.is_none());
    assert!(tiers[1].strategy.is_some());

    let defaults = RenderConfig::default().badge_tiers(&renderer);
    assert_eq!(defaults.len(), 6);
    assert!(defaults.iter().all(|t| t.strategy.is_none()));
}

#[test]
fn missing_file_reports_path() {
    let err = RenderConfig::from_path("target/does-not-exist/config.json").unwrap_err();
    assert!(err.to_string().contains("does-not-exist"));
}
