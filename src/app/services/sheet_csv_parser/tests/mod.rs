//! Test utilities and fixtures for sheet export parsing
//!
//! This module provides shared fixture builders used across the parser
//! test modules.

use std::collections::HashMap;

use super::records::TabularRecord;

// Test modules
mod field_parser_tests;

/// Helper to build a mapped record from (column, value) pairs
pub fn record(fields: &[(&str, &str)]) -> TabularRecord {
    fields
        .iter()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect::<HashMap<_, _>>()
}

/// Helper to create a complete players sheet export
pub fn create_players_csv() -> String {
    "player_id,name,pos,active\n\
     p1,Ann Keeper,GK,y\n\
     p2,Bo Winger,FW,no\n\
     ,Missing Id,DF,yes\n"
        .to_string()
}

/// Helper to create a matches sheet export spanning two seasons
pub fn create_matches_csv() -> String {
    "match_id,season,type,round,date,time,opponent,location,status,score_for,score_against\n\
     m1,2025,LEAGUE,1,2025-09-07,14:00,Rovers,Home,DONE,2,1\n\
     m2,2026,,abc,2026-03-01,19:30,\"United, FC\",Away,,,\n"
        .to_string()
}

/// Helper to create a player stats sheet export referencing both matches
pub fn create_stats_csv() -> String {
    "match_id,player_id,attended,goals,assists,yc,rc,clean_sheet\n\
     m1,p1,1,0,,0,0,true\n\
     m1,p2,yes,2,1,1,0,0\n\
     m2,p1,Y,,,,,1\n"
        .to_string()
}
