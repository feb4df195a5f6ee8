use romshelf_core::{
    FilterState, RawRow, RegionFilter, SortOrder, apply, extract_regions, ingest, paginate, parse,
};

fn listing() -> Vec<RawRow> {
    vec![
        RawRow::new("Parent directory/"),
        RawRow::new("Ratchet & Clank (USA).zip")
            .with_size("2.1 GiB")
            .with_link("https://example.org/rc.zip"),
        RawRow::new("Ratchet & Clank (Europe, Australia) (En,Fr,De).zip").with_size("2 GiB"),
        RawRow::new("Dragon Quest VIII (Japan).zip").with_size("3.8 GiB"),
        RawRow::new("Shin Megami Tensei - Nocturne (USA).zip").with_size("1.1 GiB"),
        RawRow::new("Rez (Japan).zip").with_size("512 MiB"),
        RawRow::new("Ape Escape 3 (Korea).zip"),
        RawRow::new("Disgaea (World) (Beta).zip").with_size("900 MiB"),
        RawRow::new(""),
    ]
}

#[test]
fn ingest_then_facets() {
    let games = ingest(listing());
    assert_eq!(games.len(), 7);
    let facets = extract_regions(&games);
    assert_eq!(
        facets.labels(),
        ["Europe", "Japan", "Korea", "USA", "World"]
    );
}

#[test]
fn size_sort_then_region_filter() {
    let games = ingest(vec![
        RawRow::new("Game A (USA).zip").with_size("1 GiB"),
        RawRow::new("Game B (Europe).zip").with_size("500 MiB"),
    ]);
    let state = FilterState::new().with_sort(SortOrder::SizeDesc);
    let ordered: Vec<String> = apply(&games, &state)
        .iter()
        .map(|g| parse(g.file_name()).title)
        .collect();
    assert_eq!(ordered, vec!["Game A", "Game B"]);

    let europe = state.with_region(RegionFilter::from_value("europe"));
    let only: Vec<&str> = apply(&games, &europe).iter().map(|g| g.file_name()).collect();
    assert_eq!(only, vec!["Game B (Europe).zip"]);
}

#[test]
fn every_page_concatenated_is_the_working_set() {
    let games = ingest(listing());
    for &order in SortOrder::all() {
        for page_size in 1..=4 {
            let state = FilterState::new().with_sort(order);
            let working = apply(&games, &state);
            let page_count = paginate(&working, 1, page_size).page_count;

            let mut rebuilt = Vec::new();
            for page in 1..=page_count {
                rebuilt.extend_from_slice(paginate(&working, page, page_size).items);
            }
            assert_eq!(rebuilt, working, "order {order}, page size {page_size}");
        }
    }
}

#[test]
fn empty_search_result_has_no_pages() {
    let games = ingest(listing());
    let working = apply(&games, &FilterState::new().with_search("no such game"));
    let page = paginate(&working, 1, 50);
    assert_eq!(page.page_count, 0);
    assert!(page.items.is_empty());
}

#[test]
fn region_filter_matches_leading_region_only() {
    let games = ingest(listing());
    let state = FilterState::new().with_region(RegionFilter::from_value("Europe"));
    let names: Vec<&str> = apply(&games, &state).iter().map(|g| g.file_name()).collect();
    assert_eq!(
        names,
        vec!["Ratchet & Clank (Europe, Australia) (En,Fr,De).zip"]
    );
}
