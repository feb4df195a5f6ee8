use super::*;
use crate::record::{RawRow, ingest};

fn dataset(rows: &[(&str, &str)]) -> Vec<GameRecord> {
    ingest(rows.iter().map(|(name, size)| RawRow::new(*name).with_size(*size)))
}

fn names<'a>(games: &[&'a GameRecord]) -> Vec<&'a str> {
    games.iter().map(|g| g.file_name()).collect()
}

#[test]
fn size_desc_then_region() {
    let games = dataset(&[
        ("Game B (Europe).zip", "500 MiB"),
        ("Game A (USA).zip", "1 GiB"),
    ]);

    let by_size = FilterState::new().with_sort(SortOrder::SizeDesc);
    assert_eq!(
        names(&apply(&games, &by_size)),
        vec!["Game A (USA).zip", "Game B (Europe).zip"]
    );

    let europe = by_size.with_region(RegionFilter::from_value("europe"));
    assert_eq!(names(&apply(&games, &europe)), vec!["Game B (Europe).zip"]);
}

#[test]
fn unset_filters_keep_everything() {
    let games = dataset(&[
        ("Zone of the Enders (USA).zip", "1 GiB"),
        ("ape Escape 2 (Europe).zip", "2 GiB"),
        ("Burnout 3 (USA).zip", "3 GiB"),
    ]);
    let result = apply(&games, &FilterState::default());
    assert_eq!(result.len(), games.len());
    assert_eq!(
        names(&result),
        vec![
            "ape Escape 2 (Europe).zip",
            "Burnout 3 (USA).zip",
            "Zone of the Enders (USA).zip",
        ]
    );
}

#[test]
fn alpha_desc_reverses() {
    let games = dataset(&[("b", ""), ("A", ""), ("c", "")]);
    let state = FilterState::new().with_sort(SortOrder::AlphaDesc);
    assert_eq!(names(&apply(&games, &state)), vec!["c", "b", "A"]);
}

#[test]
fn search_is_case_insensitive() {
    let games = dataset(&[
        ("Final Fantasy X (USA).zip", ""),
        ("FINAL FANTASY XII (Japan).zip", ""),
        ("Kingdom Hearts (USA).zip", ""),
    ]);
    let state = FilterState::new().with_search("Fantasy");
    assert_eq!(state.search_term(), "fantasy");
    assert_eq!(
        names(&apply(&games, &state)),
        vec!["Final Fantasy X (USA).zip", "FINAL FANTASY XII (Japan).zip"]
    );
}

#[test]
fn search_without_match_is_empty() {
    let games = dataset(&[("Ico (USA).zip", "")]);
    let state = FilterState::new().with_search("xyzzy");
    assert!(apply(&games, &state).is_empty());
}

#[test]
fn region_requires_opening_paren() {
    let games = dataset(&[
        ("USA Racer (Japan).zip", ""),
        ("Tetris (USA, Europe).zip", ""),
        ("Columns (Europe, USA).zip", ""),
    ]);
    let state = FilterState::new().with_region(RegionFilter::from_value("USA"));
    // Only a tag that starts with the region matches; "Europe, USA" does not.
    assert_eq!(names(&apply(&games, &state)), vec!["Tetris (USA, Europe).zip"]);
}

#[test]
fn region_is_a_prefix_match_on_the_tag() {
    let games = dataset(&[("Game (Japanese Edition).zip", ""), ("Game (Japan).zip", "")]);
    let state = FilterState::new().with_region(RegionFilter::from_value("japan"));
    assert_eq!(apply(&games, &state).len(), 2);
}

#[test]
fn search_and_region_combine() {
    let games = dataset(&[
        ("Gradius V (USA).zip", ""),
        ("Gradius V (Japan).zip", ""),
        ("Ico (Japan).zip", ""),
    ]);
    let state = FilterState::new()
        .with_search("gradius")
        .with_region(RegionFilter::from_value("japan"));
    assert_eq!(names(&apply(&games, &state)), vec!["Gradius V (Japan).zip"]);
}

#[test]
fn size_sort_is_stable() {
    let games = dataset(&[
        ("c", "1 GiB"),
        ("a", "1024 MiB"),
        ("b", "n/a"),
        ("d", "1 GiB"),
        ("e", ""),
    ]);
    let asc = FilterState::new().with_sort(SortOrder::SizeAsc);
    assert_eq!(names(&apply(&games, &asc)), vec!["b", "e", "c", "a", "d"]);

    let desc = FilterState::new().with_sort(SortOrder::SizeDesc);
    assert_eq!(names(&apply(&games, &desc)), vec!["c", "a", "d", "b", "e"]);
}

#[test]
fn missing_sizes_sort_as_smallest() {
    let games = ingest(vec![
        RawRow::new("big").with_size("4 GiB"),
        RawRow::new("unknown"),
        RawRow::new("small").with_size("10 MiB"),
    ]);
    let asc = FilterState::new().with_sort(SortOrder::SizeAsc);
    assert_eq!(names(&apply(&games, &asc)), vec!["unknown", "small", "big"]);
}

#[test]
fn compare_names_orders_like_a_human() {
    assert_eq!(compare_names("apple", "Banana"), Ordering::Less);
    assert_eq!(compare_names("a", "A"), Ordering::Less);
    assert_eq!(compare_names("A", "a"), Ordering::Greater);
    assert_eq!(compare_names("Game", "game 2"), Ordering::Less);
    assert_eq!(compare_names("same", "same"), Ordering::Equal);
}

#[test]
fn sort_order_names() {
    for &order in SortOrder::all() {
        assert_eq!(order.as_str().parse::<SortOrder>(), Ok(order));
    }
    assert_eq!("SIZE-DESC".parse::<SortOrder>(), Ok(SortOrder::SizeDesc));
    assert!("newest".parse::<SortOrder>().is_err());
    assert_eq!(SortOrder::default(), SortOrder::AlphaAsc);
}

#[test]
fn accented_names_sort_with_their_base_letter() {
    let games = dataset(&[
        ("Zone", "1 GiB"),
        ("Pokemon B", "1 GiB"),
        ("Pokémon A", "1 GiB"),
        ("Émile", "1 GiB"),
        ("Fable", "1 GiB"),
    ]);
    assert_eq!(
        names(&apply(&games, &FilterState::default())),
        vec!["Émile", "Fable", "Pokémon A", "Pokemon B", "Zone"]
    );
}

#[test]
fn accent_only_difference_puts_plain_letter_first() {
    assert_eq!(compare_names("Pokemon", "Pokémon"), Ordering::Less);
    assert_eq!(compare_names("école", "Ecole"), Ordering::Greater);
    assert_eq!(compare_names("Éclair", "éclair"), Ordering::Greater);
}

#[test]
fn negative_zero_size_keeps_source_order() {
    let games = dataset(&[("first", "0 MiB"), ("second", "-0 MiB")]);
    let by_size = FilterState::new().with_sort(SortOrder::SizeAsc);
    assert_eq!(names(&apply(&games, &by_size)), vec!["first", "second"]);
}

#[test]
fn every_sort_order_is_described() {
    let mut descriptions: Vec<&str> = SortOrder::all().iter().map(|o| o.description()).collect();
    descriptions.sort_unstable();
    descriptions.dedup();
    assert_eq!(descriptions.len(), SortOrder::all().len());
    assert_eq!(SortOrder::SizeDesc.description(), "Size (largest first)");
}
