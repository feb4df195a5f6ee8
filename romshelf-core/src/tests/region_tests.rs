use super::*;
use crate::record::{RawRow, ingest};

fn records(names: &[&str]) -> Vec<GameRecord> {
    ingest(names.iter().map(|n| RawRow::new(*n)))
}

fn labels(names: &[&str]) -> Vec<String> {
    extract_regions(&records(names)).labels().to_vec()
}

#[test]
fn leading_token_of_region_tags() {
    let got = labels(&[
        "Ico (USA).zip",
        "Tetris (USA, Europe).zip",
        "Ridge Racer V (Japan) (Rev 1).zip",
        "Tekken 4 (Europe, Australia).zip",
        "Ace Combat (Asia) (En,Ja).zip",
    ]);
    assert_eq!(got, vec!["Asia", "Europe", "Japan", "USA"]);
}

#[test]
fn keyword_anywhere_in_tag_counts() {
    // "Europe" appears after the first token, so the token is the label.
    assert_eq!(labels(&["Game (Australia, Europe).zip"]), vec!["Australia"]);
}

#[test]
fn keywords_are_case_sensitive() {
    assert!(labels(&["Game (usa).zip", "Game (japanese).zip"]).is_empty());
}

#[test]
fn non_region_tags_ignored() {
    assert!(labels(&["Game (Rev 1) (En,Fr).zip", "Plain.zip"]).is_empty());
}

#[test]
fn tag_starting_with_separator_adds_nothing() {
    assert!(labels(&["Game ( USA).zip", "Game (,Japan).zip"]).is_empty());
}

#[test]
fn duplicates_collapse_case_insensitively() {
    let got = labels(&["A (World).zip", "B (WORLD USA).zip", "C (World).zip"]);
    // "WORLD" sorts before "World" ordinally, so it is the kept spelling.
    assert_eq!(got, vec!["WORLD"]);
}

#[test]
fn order_independent_and_idempotent() {
    let names = [
        "A (world).zip",
        "B (World).zip",
        "C (Korea).zip",
        "D (Japan, Korea).zip",
        "E (USA).zip",
    ];
    let forward = labels(&names);
    let mut reversed_names = names;
    reversed_names.reverse();
    assert_eq!(labels(&reversed_names), forward);

    let games = records(&names);
    assert_eq!(extract_regions(&games), extract_regions(&games));
}

#[test]
fn choices_start_with_all() {
    let facets = extract_regions(&records(&["A (USA).zip", "B (Japan).zip"]));
    let choices: Vec<_> = facets.choices().collect();
    assert_eq!(
        choices,
        vec![
            RegionChoice::All,
            RegionChoice::Region("Japan"),
            RegionChoice::Region("USA"),
        ]
    );
    assert_eq!(choices[2].filter(), RegionFilter::Only("usa".into()));
    assert_eq!(choices[0].label(), "all");
}

#[test]
fn filter_from_selector_value() {
    assert_eq!(RegionFilter::from_value("all"), RegionFilter::All);
    assert_eq!(RegionFilter::from_value("ALL"), RegionFilter::All);
    assert_eq!(RegionFilter::from_value(""), RegionFilter::All);
    assert_eq!(
        RegionFilter::from_value("Europe"),
        RegionFilter::Only("europe".into())
    );
    assert_eq!(RegionFilter::Only("europe".into()).to_string(), "europe");
}

#[test]
fn contains_checks_folded_labels() {
    let facets = extract_regions(&records(&["A (Europe).zip"]));
    assert!(facets.contains(&RegionFilter::All));
    assert!(facets.contains(&RegionFilter::from_value("EUROPE")));
    assert!(!facets.contains(&RegionFilter::from_value("usa")));
}
