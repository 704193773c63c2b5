use super::*;

fn rec(id: u64, total: u64, recent: u64) -> GameActivityRecord {
    GameActivityRecord::new(id, format!("Game {id}"), total, recent)
}

#[test]
fn playtime_formatting() {
    assert_eq!(format_playtime(0), "0min");
    assert_eq!(format_playtime(45), "45min");
    assert_eq!(format_playtime(90), "1h 30min");
    assert_eq!(format_playtime(360), "6h 0min");
    assert_eq!(format_playtime(61), "1h 1min");
}

#[test]
fn truncation_keeps_prefix_and_budget() {
    let name = "A".repeat(32) + "BCDEFGHI";
    assert_eq!(name.chars().count(), 40);
    let out = truncate_name(&name, NAME_BUDGET);
    assert_eq!(out.chars().count(), 35);
    assert!(out.ends_with("..."));
    assert_eq!(&out[..32], &"A".repeat(32));
}

#[test]
fn truncation_leaves_short_names_alone() {
    assert_eq!(truncate_name("Portal 2", NAME_BUDGET), "Portal 2");
    let exact = "x".repeat(35);
    assert_eq!(truncate_name(&exact, NAME_BUDGET), exact);
}

#[test]
fn truncation_counts_characters_not_bytes() {
    let name = "é".repeat(40);
    let out = truncate_name(&name, NAME_BUDGET);
    assert_eq!(out.chars().count(), 35);
    assert!(out.starts_with(&"é".repeat(32)));
}

#[test]
fn derived_hours() {
    let g = rec(1, 90, 30);
    assert!((g.total_hours() - 1.5).abs() < 1e-9);
    assert!((g.recent_hours() - 0.5).abs() < 1e-9);
}

#[test]
fn recently_played_filters_and_sorts_stably() {
    let games = vec![rec(1, 10, 0), rec(2, 10, 30), rec(3, 10, 90), rec(4, 10, 30)];
    let ids: Vec<u64> = recently_played(games).iter().map(|g| g.app_id).collect();
    assert_eq!(ids, vec![3, 2, 4]);
}

#[test]
fn played_filters_and_sorts_by_total() {
    let games = vec![rec(1, 0, 0), rec(2, 50, 0), rec(3, 500, 1)];
    let ids: Vec<u64> = played(games).iter().map(|g| g.app_id).collect();
    assert_eq!(ids, vec![3, 2]);
}

#[test]
fn most_played_takes_first_maximum() {
    let games = vec![rec(1, 300, 90), rec(2, 500, 0), rec(3, 500, 30)];
    assert_eq!(most_played_by_total(&games).map(|g| g.app_id), Some(2));
    assert!(most_played_by_total(&[]).is_none());
}

#[test]
fn deserializes_steam_payload_with_defaults() {
    let g: GameActivityRecord =
        serde_json::from_str(r#"{"appid": 620, "name": "Portal 2", "playtime_forever": 42}"#)
            .unwrap();
    assert_eq!(g.app_id, 620);
    assert_eq!(g.display_name, "Portal 2");
    assert_eq!(g.total_playtime_minutes, 42);
    assert_eq!(g.recent_playtime_minutes, 0);
    assert!(g.img_icon_url.is_none());
}
