//! End-to-end tests for the sheet-text-to-snapshot pipeline
//!
//! These tests drive the full pipeline from raw CSV text through
//! normalization and season filtering, the way the export command does.

use squadsheet::app::services::sheet_fetcher::RawSheets;
use squadsheet::app::services::snapshot::build_snapshot;

fn sample_sheets() -> RawSheets {
    RawSheets {
        // One valid player, one row missing player_id
        players: "player_id,name,pos,active\n\
                  p1,\"Keeper, Ann\",GK,Y\n\
                  ,No Id,DF,yes\n"
            .to_string(),
        // Two matches in different seasons
        matches: "match_id,season,type,round,date,time,opponent,location,status,score_for,score_against\n\
                  m1,2025,LEAGUE,1,2025-09-07,14:00,Rovers,Home,DONE,2,1\n\
                  m2,2026,CUP,2,2026-03-01,19:30,\"United, FC\",Away,SCHEDULED,,\n"
            .to_string(),
        // Stats referencing both matches
        player_stats: "match_id,player_id,attended,goals,assists,yc,rc,clean_sheet\n\
                       m1,p1,1,1,0,0,0,true\n\
                       m2,p1,yes,0,0,0,0,0\n"
            .to_string(),
    }
}

#[test]
fn test_snapshot_scoped_to_first_season() {
    let snapshot = build_snapshot(&sample_sheets(), Some("2025"));

    assert_eq!(snapshot.season.as_deref(), Some("2025"));
    assert_eq!(snapshot.players.len(), 1);
    assert_eq!(snapshot.players[0].name, "Keeper, Ann");
    assert!(snapshot.players[0].active);

    assert_eq!(snapshot.matches.len(), 1);
    assert_eq!(snapshot.matches[0].id, "m1");
    assert_eq!(snapshot.matches[0].score_for, Some(2.0));

    assert_eq!(snapshot.player_match_stats.len(), 1);
    assert_eq!(snapshot.player_match_stats[0].match_id, "m1");
}

#[test]
fn test_snapshot_without_season_keeps_everything() {
    let snapshot = build_snapshot(&sample_sheets(), None);

    assert_eq!(snapshot.season, None);
    assert_eq!(snapshot.matches.len(), 2);
    assert_eq!(snapshot.player_match_stats.len(), 2);
}

#[test]
fn test_stats_follow_their_match_not_their_own_season() {
    // Stat rows carry no season; scoping to 2026 must drop the stat whose
    // match belongs to 2025
    let snapshot = build_snapshot(&sample_sheets(), Some("2026"));

    assert_eq!(snapshot.matches.len(), 1);
    assert_eq!(snapshot.matches[0].id, "m2");
    assert_eq!(snapshot.matches[0].score_for, None);
    assert_eq!(snapshot.player_match_stats.len(), 1);
    assert_eq!(snapshot.player_match_stats[0].match_id, "m2");
}

#[test]
fn test_unknown_season_yields_empty_sets() {
    let snapshot = build_snapshot(&sample_sheets(), Some("1999"));

    assert!(snapshot.matches.is_empty());
    assert!(snapshot.player_match_stats.is_empty());
    assert_eq!(snapshot.players.len(), 1);
}

#[test]
fn test_quoted_cells_survive_the_whole_pipeline() {
    let sheets = RawSheets {
        players: "player_id,name,pos,active\np1,\"He said \"\"hi\"\"\",MF,1\n".to_string(),
        matches: String::new(),
        player_stats: String::new(),
    };

    let snapshot = build_snapshot(&sheets, None);
    assert_eq!(snapshot.players[0].name, "He said \"hi\"");
}

#[test]
fn test_serialized_snapshot_shape() {
    let snapshot = build_snapshot(&sample_sheets(), Some("2026"));
    let json: serde_json::Value = serde_json::to_value(&snapshot).unwrap();

    assert_eq!(json["season"], "2026");
    assert_eq!(json["matches"][0]["type"], "CUP");
    assert!(json["matches"][0]["scoreFor"].is_null());
    assert_eq!(json["playerMatchStats"][0]["playerId"], "p1");
    assert_eq!(json["players"][0]["active"], true);
}
