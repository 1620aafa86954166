use anyhow::Result;
use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use discount_facets::{
    DiscountFilter, FacetAggregator, FilterApplier, Item, ItemId, ItemKind, LocalCatalog,
    RangeBucketizer, RawSelection, TomlConfig,
};
use tempfile::TempDir;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 19, 15, 0, 0).unwrap()
}

fn yesterday() -> Option<NaiveDate> {
    Some((now() - Duration::days(1)).date_naive())
}

fn tomorrow() -> Option<NaiveDate> {
    Some((now() + Duration::days(1)).date_naive())
}

/// A 25% off, B 0% off, C a bundle whose sale starts tomorrow.
fn scenario_items() -> Vec<Item> {
    vec![
        Item::new("A", ItemKind::Simple, 200.0).with_special(150.0, yesterday(), None),
        Item::new("B", ItemKind::Simple, 50.0).with_special(50.0, yesterday(), None),
        Item::new("C", ItemKind::Bundle, 0.0)
            .with_regular_price_amount(80.0)
            .with_special(40.0, tomorrow(), None),
    ]
}

#[test]
fn test_scenario_filter_and_facets() {
    let items = scenario_items();

    let applied = FilterApplier::default().apply(&"1-100".into(), &items, now());
    let matched: Vec<&str> = applied.matched_ids.iter().map(|id| id.0.as_str()).collect();
    assert_eq!(matched, vec!["A"]);

    let facets = FacetAggregator::default().build_facets(&items, now());
    let counts: Vec<(&str, usize)> = facets
        .iter()
        .map(|facet| (facet.range.label.as_str(), facet.count))
        .collect();
    assert_eq!(counts, vec![("1-20", 1), ("21-40", 1)]);
}

#[test]
fn test_facets_never_contain_zero_counts() {
    let items = scenario_items();
    let facets = FacetAggregator::default().build_facets(&items, now());
    assert!(facets.iter().all(|facet| facet.count > 0));
}

#[test]
fn test_selection_key_round_trips() {
    let items = scenario_items();
    let applier = FilterApplier::default();

    for range in RangeBucketizer::default().ranges() {
        let applied = applier.apply(&range.selection_key().into(), &items, now());
        let selection = applied.selection.expect("facet key must parse");
        assert_eq!((selection.from, selection.to), (range.from, range.to));
    }
}

#[test]
fn test_apply_is_idempotent() {
    let items = scenario_items();
    let applier = FilterApplier::default();

    let first = applier.apply(&"21-40".into(), &items, now());
    let second = applier.apply(&"21-40".into(), &items, now());
    assert_eq!(first, second);
}

#[test]
fn test_malformed_values_pass_through() {
    let items = scenario_items();
    let applier = FilterApplier::default();
    let all_ids: Vec<ItemId> = items.iter().map(|item| item.id.clone()).collect();

    let raw_values = vec![
        RawSelection::Absent,
        RawSelection::from(""),
        RawSelection::from("abc"),
        RawSelection::from("10"),
        RawSelection::from("10-20-30"),
        RawSelection::from(vec!["1-20".to_string(), "21-40".to_string()]),
    ];

    for raw in raw_values {
        let applied = applier.apply(&raw, &items, now());
        assert!(applied.selection.is_none(), "{:?} should not select", raw);
        assert_eq!(applied.matched_ids.into_iter().collect::<Vec<_>>(), all_ids);
    }
}

#[test]
fn test_filter_and_facets_agree_within_a_pass() {
    let items = scenario_items();
    let filter = DiscountFilter::default();

    let facets = filter.facets(&items, now());
    for facet in facets {
        let applied = filter.apply(&facet.range.selection_key().into(), &items, now());
        assert_eq!(applied.matched_ids.len(), facet.count);
    }
}

#[tokio::test]
async fn test_end_to_end_with_local_catalog() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let catalog_path = temp_dir.path().join("catalog.json");
    let config_path = temp_dir.path().join("facets.toml");

    tokio::fs::write(
        &catalog_path,
        serde_json::to_vec(&serde_json::json!([
            {"id": "A", "kind": "simple", "price": 200.0, "special_price": 150.0, "special_from": "2026-10-18"},
            {"id": "B", "kind": "simple", "price": 50.0, "special_price": 50.0, "special_from": "2026-10-18"},
            {"id": "C", "kind": "bundle", "price": 0.0, "regular_price_amount": 80.0,
             "special_price": 40.0, "special_from": "2026-10-20"},
            {"id": "D", "kind": "configurable", "price": 100.0, "special_price": 10.0,
             "special_from": "2026-09-01", "special_to": "2026-09-30"}
        ]))?,
    )
    .await?;

    tokio::fs::write(
        &config_path,
        r#"
[matching]
window_policy = "start_and_end"

[performance]
parallel = true
"#,
    )
    .await?;

    let config = TomlConfig::from_file(&config_path)?;
    let filter = DiscountFilter::new(&config);
    let catalog = LocalCatalog::new(&catalog_path, None);

    // D's sale ended in September, so only A is discounted.
    let state = filter
        .evaluate_source(&catalog, &RawSelection::Absent, now())
        .await?;
    let values: Vec<String> = state.options().into_iter().map(|o| o.value).collect();
    assert_eq!(values, vec!["1-20", "21-40"]);
    assert_eq!(state.applied.matched_ids.len(), 4);

    let state = filter
        .evaluate_source(&catalog, &"21-40".into(), now())
        .await?;
    assert!(state.facets.is_empty());
    assert_eq!(
        state.applied.matched_ids.into_iter().collect::<Vec<_>>(),
        vec![ItemId::from("A")]
    );

    Ok(())
}
