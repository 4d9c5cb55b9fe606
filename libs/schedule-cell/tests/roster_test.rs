use std::collections::HashMap;

use schedule_cell::models::Pod;
use schedule_cell::services::roster::{
    default_pods, find_practitioner_id, resolve_pods, tokenize_name,
};

fn names(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(id, name)| (id.to_string(), name.to_string()))
        .collect()
}

fn pod(name: &str, practitioners: &[&str]) -> Pod {
    Pod {
        name: name.to_string(),
        practitioners: practitioners.iter().map(|p| p.to_string()).collect(),
    }
}

#[test]
fn test_tokenize_strips_credentials_and_commas() {
    assert_eq!(tokenize_name("Daniel A. Cabanero, PA"), vec!["daniel", "a.", "cabanero"]);
    assert_eq!(tokenize_name("Jane R. Doe, MD"), vec!["jane", "r.", "doe"]);
    assert_eq!(tokenize_name("John Smith N.P."), vec!["john", "smith"]);
    assert_eq!(tokenize_name("  Paul   Oh "), vec!["paul", "oh"]);
}

#[test]
fn test_canonical_tokens_must_all_be_present_in_raw_name() {
    let records = names(&[("p9", "Daniel A. Cabanero, PA")]);

    // Extra middle initial and credential on the raw side are fine
    assert_eq!(
        find_practitioner_id("Daniel Cabanero", &records),
        Some("p9".to_string())
    );
    // A canonical token the raw name lacks sinks the match
    assert_eq!(find_practitioner_id("Daniel Cabanero Jr.", &records), None);
}

#[test]
fn test_raw_name_with_fewer_tokens_never_matches() {
    let records = names(&[("p1", "Daniel")]);
    assert_eq!(find_practitioner_id("Daniel Cabanero", &records), None);
}

#[test]
fn test_empty_canonical_name_matches_nothing() {
    let records = names(&[("p1", "Jane Doe")]);
    assert_eq!(find_practitioner_id("", &records), None);
    assert_eq!(find_practitioner_id(" , MD ", &records), None);
}

#[test]
fn test_ambiguous_matches_resolve_to_smallest_id() {
    let records = names(&[("p2", "Jane Doe, MD"), ("p1", "Jane A. Doe"), ("p3", "Jane Doe")]);
    assert_eq!(
        find_practitioner_id("Jane Doe", &records),
        Some("p1".to_string())
    );
}

#[test]
fn test_unmatched_entries_are_omitted_preserving_order() {
    let pods = vec![pod("Test pod", &["Ann Ames", "Bob Beal", "Cay Cole"])];
    let records = names(&[("p7", "Cay Cole, NP"), ("p3", "Ann M. Ames")]);

    let resolved = resolve_pods(&pods, &records);
    assert_eq!(resolved.len(), 1);
    assert_eq!(resolved[0].name, "Test pod");
    assert_eq!(resolved[0].practitioner_ids, vec!["p3", "p7"]);
}

#[test]
fn test_matching_is_idempotent() {
    let pods = default_pods();
    let records = names(&[
        ("21974", "Daniel Su, MD"),
        ("21975", "Tammy Ho"),
        ("21980", "Poone Shoureshi, MD"),
    ]);

    let first = resolve_pods(&pods, &records);
    let second = resolve_pods(&pods, &records);
    assert_eq!(first, second);
}

#[test]
fn test_default_pods_are_three_ordered_groups() {
    let pods = default_pods();
    assert_eq!(pods.len(), 3);
    assert_eq!(pods[0].name, "North pod");
    assert!(pods.iter().all(|p| !p.practitioners.is_empty()));
}
