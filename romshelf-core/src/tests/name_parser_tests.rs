use super::*;

#[test]
fn title_and_tags_in_order() {
    let p = parse("Shadow of the Colossus (USA) (En,Fr,De,Es,It).zip");
    assert_eq!(p.title, "Shadow of the Colossus");
    assert_eq!(p.tags, vec!["USA", "En,Fr,De,Es,It"]);
}

#[test]
fn zip_extension_is_case_insensitive() {
    assert_eq!(parse("Ico (Europe).ZIP").title, "Ico");
    assert_eq!(parse("Ico (Europe).Zip").title, "Ico");
}

#[test]
fn other_extensions_are_kept() {
    let p = parse("Ico (Europe).7z");
    assert_eq!(p.title, "Ico .7z");
    assert_eq!(p.tags, vec!["Europe"]);
}

#[test]
fn empty_input() {
    assert_eq!(parse(""), ParsedInfo::default());
}

#[test]
fn tag_only_name() {
    let p = parse("(USA).zip");
    assert_eq!(p.title, "");
    assert_eq!(p.tags, vec!["USA"]);
}

#[test]
fn no_tags() {
    let p = parse("Katamari Damacy.zip");
    assert_eq!(p.title, "Katamari Damacy");
    assert!(p.tags.is_empty());
}

#[test]
fn groups_do_not_nest() {
    let p = parse("Game ((Beta) x).zip");
    assert_eq!(p.tags, vec!["(Beta"]);
    assert_eq!(p.title, "Game  x)");
}

#[test]
fn unclosed_group_is_left_alone() {
    let p = parse("Game (USA");
    assert!(p.tags.is_empty());
    assert_eq!(p.title, "Game (USA");
}

#[test]
fn empty_group_is_not_a_tag() {
    let p = parse("Game () (Japan)");
    assert_eq!(p.tags, vec!["Japan"]);
    assert_eq!(p.title, "Game ()");
}

#[test]
fn tags_between_title_words_are_removed() {
    let p = parse("Tekken (Demo) Tag Tournament (Japan).zip");
    assert_eq!(p.title, "Tekken  Tag Tournament");
    assert_eq!(p.tags, vec!["Demo", "Japan"]);
}

#[test]
fn title_never_keeps_closed_groups() {
    for name in [
        "A (B) (C).zip",
        "(X)(Y)(Z)",
        "Multi (Disc 1) (USA, Europe) (Rev 2).zip",
        "Ünïcödé (Japan) 日本.zip",
    ] {
        let p = parse(name);
        assert!(!p.title.contains('('), "{name} -> {}", p.title);
        assert!(!p.title.contains(')'), "{name} -> {}", p.title);
    }
}

#[test]
fn summary_tags_caps_at_limit() {
    let p = parse("G (A) (B) (C) (D)");
    assert_eq!(p.summary_tags(3), ["A", "B", "C"]);
    assert_eq!(parse("G (A)").summary_tags(3), ["A"]);
}
