use std::cell::RefCell;
use std::rc::Rc;

use super::*;
use crate::{
    compose::{ops::DrawOp, svg::SvgComposer},
    layout::{
        theme::Palette,
        views::{TableRenderer, TableView},
    },
    partition::strategy::{HeadingStrategy, TableStrategy, default_badge_tiers},
    tier::classifier::TierClassifier,
};

fn record(login: &str, monthly: f64) -> Sponsorship {
    let mut s = Sponsorship::new("github", monthly);
    s.sponsor.login = Some(login.to_string());
    s
}

fn titles(partitions: &[Partition<'_>]) -> Vec<String> {
    partitions.iter().map(|p| p.title().to_string()).collect()
}

fn renderer() -> TableRenderer {
    TableRenderer::new(800.0, Palette::dark(), TierClassifier::default())
}

#[test]
fn records_land_in_highest_reached_tier() {
    let tiers = default_badge_tiers();
    let records = vec![
        record("lapsed", -1.0),
        record("zero", 0.0),
        record("five", 5.0),
        record("ten", 10.0),
        record("big", 750.0),
        record("way-below", -50.0),
    ];
    let partitions = partition_sponsors(&records, &tiers);

    let by_title = |title: &str| -> Vec<String> {
        partitions
            .iter()
            .find(|p| p.title() == title)
            .unwrap()
            .sponsors
            .iter()
            .map(|s| s.display_name().to_string())
            .collect()
    };
    assert_eq!(by_title(PAST_MEMBERS), vec!["lapsed", "way-below"]);
    assert_eq!(by_title("Backers"), vec!["zero", "five"]);
    assert_eq!(by_title(MEMBERS), vec!["ten"]);
    assert_eq!(by_title("Platinum Sponsors"), vec!["big"]);
    assert!(by_title("Gold Members").is_empty());
}

#[test]
fn partitions_follow_ascending_thresholds() {
    let mut tiers = default_badge_tiers();
    tiers.reverse();
    let partitions = partition_sponsors(&[], &tiers);
    assert_eq!(
        titles(&partitions),
        vec![
            PAST_MEMBERS,
            "Backers",
            MEMBERS,
            "Silver Members",
            "Gold Members",
            "Platinum Sponsors"
        ]
    );
}

#[test]
fn no_tiers_means_no_partitions() {
    assert!(partition_sponsors(&[record("x", 5.0)], &[]).is_empty());
}

#[test]
fn past_members_move_after_members() {
    let tiers = default_badge_tiers();
    let mut partitions = partition_sponsors(&[], &tiers);
    reorder_partitions(&mut partitions);
    assert_eq!(
        titles(&partitions),
        vec![
            "Backers",
            MEMBERS,
            PAST_MEMBERS,
            "Silver Members",
            "Gold Members",
            "Platinum Sponsors"
        ]
    );
}

#[test]
fn past_members_append_without_members_tier() {
    let tiers = vec![
        BadgeTier::new(PAST_MEMBERS, Some(-1.0)),
        BadgeTier::new("Backers", None),
        BadgeTier::new("Gold", Some(100.0)),
    ];
    let mut partitions = partition_sponsors(&[], &tiers);
    reorder_partitions(&mut partitions);
    assert_eq!(titles(&partitions), vec!["Backers", "Gold", PAST_MEMBERS]);
}

#[test]
fn reorder_without_past_members_is_identity() {
    let tiers = vec![BadgeTier::new("Backers", None), BadgeTier::new(MEMBERS, Some(10.0))];
    let mut partitions = partition_sponsors(&[], &tiers);
    let before = titles(&partitions);
    reorder_partitions(&mut partitions);
    assert_eq!(titles(&partitions), before);
}

struct Recording(Rc<RefCell<Vec<String>>>);

impl TierStrategy for Recording {
    fn compose(&self, _: &mut dyn Composer, partition: &Partition<'_>) -> SponsorboardResult<()> {
        self.0.borrow_mut().push(partition.title().to_string());
        Ok(())
    }
}

#[test]
fn custom_strategies_override_the_fallback() {
    let custom_log = Rc::new(RefCell::new(Vec::new()));
    let fallback_log = Rc::new(RefCell::new(Vec::new()));

    let tiers = vec![
        BadgeTier::new(PAST_MEMBERS, Some(-1.0))
            .with_strategy(Recording(Rc::clone(&custom_log))),
        BadgeTier::new("Backers", None),
        BadgeTier::new(MEMBERS, Some(10.0)),
        BadgeTier::new("Gold", Some(100.0)),
    ];
    let records = vec![record("old", -1.0), record("b", 1.0), record("m", 20.0)];
    let mut partitions = partition_sponsors(&records, &tiers);
    reorder_partitions(&mut partitions);

    let mut c = SvgComposer::new(800.0);
    render_partitions(&mut c, &partitions, &Recording(Rc::clone(&fallback_log))).unwrap();

    assert_eq!(*custom_log.borrow(), vec![PAST_MEMBERS]);
    // "Gold" is empty and skipped entirely.
    assert_eq!(*fallback_log.borrow(), vec!["Backers", MEMBERS]);
}

#[test]
fn table_strategy_renders_partition_as_view() {
    let tiers = vec![
        BadgeTier::new(PAST_MEMBERS, Some(-1.0))
            .with_strategy(TableStrategy::new(renderer(), TableView::Past)),
        BadgeTier::new("Backers", None),
    ];
    let records = vec![record("old", -1.0), record("new", 3.0)];
    let partitions = partition_sponsors(&records, &tiers);

    let mut c = SvgComposer::new(800.0);
    render_partitions(&mut c, &partitions, &HeadingStrategy::new(renderer())).unwrap();

    let texts: Vec<String> = c
        .ops()
        .iter()
        .filter_map(|op| match op {
            DrawOp::Text(t) => Some(t.content.to_string()),
            _ => None,
        })
        .collect();
    let at = |needle: &str| texts.iter().position(|t| t == needle).unwrap();
    // Past Members has the lower threshold, so its table comes first.
    assert!(at("old") < at("Backers (1)"));
    assert!(at("Backers (1)") < at("new"));
    assert!(!texts.contains(&format!("{PAST_MEMBERS} (1)")));
}
