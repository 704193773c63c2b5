use super::*;

fn rec(name: &str, total: u64, recent: u64) -> GameActivityRecord {
    GameActivityRecord::new(1, name, total, recent)
}

#[test]
fn summary_totals_recent_time() {
    let games = vec![rec("Portal 2", 900, 95), rec("Half-Life", 10, 30)];
    let s = format_summary(&games);
    assert!(s.starts_with("2 games played"), "{s}");
    assert!(s.contains("Total time: 2h 05min"), "{s}");
    assert!(s.contains("Most played: Portal 2"), "{s}");
}

#[test]
fn summary_of_nothing() {
    assert_eq!(format_summary(&[]), NO_RECENT_GAMES);
}

#[test]
fn table_aligns_columns() {
    let games = vec![rec("Portal 2", 600, 95), rec("Hades", 61, 5)];
    let t = format_games_table("Recent", &games, PlaytimeKind::Recent);
    let lines: Vec<&str> = t.lines().collect();
    assert_eq!(lines[0], "Recent");
    assert_eq!(lines[1], "Name        Playtime");
    assert_eq!(lines[2], "--------  ----------");
    assert_eq!(lines[3], "Portal 2  1 h 35 min");
    assert_eq!(lines[4], "Hades     0 h 05 min");
}

#[test]
fn table_can_show_lifetime_playtime() {
    let games = vec![rec("Hades", 61, 5)];
    let t = format_games_table("All", &games, PlaytimeKind::Total);
    assert!(t.lines().last().unwrap().ends_with("1 h 01 min"));
}

#[test]
fn message_prefixes() {
    assert_eq!(format_error("boom"), "error: boom");
    assert_eq!(format_success("saved"), "done: saved");
}
