//! Win/loss standings derived from raw game records.

use crate::constants::{FINAL_STATUS, conference};
use crate::data_fetcher::models::{Game, Team};
use std::cmp::Ordering;
use std::collections::HashMap;

/// One derived standings line for a team.
#[derive(Debug, Clone, PartialEq)]
pub struct StandingsRow {
    pub name: String,
    pub wins: u32,
    pub losses: u32,
    /// Win percentage in 0-100; 0 when the team has no completed games.
    pub win_pct: f64,
}

/// Standings partitioned by conference. Teams whose conference field is
/// neither of the two recognized literals are excluded from both groups.
#[derive(Debug, Clone, Default)]
pub struct Standings {
    pub east: Vec<StandingsRow>,
    pub west: Vec<StandingsRow>,
}

#[derive(Default)]
struct Record {
    wins: u32,
    losses: u32,
}

/// Computes per-team win/loss records from completed games and partitions
/// them by conference.
///
/// A game is attributed only when its status is the completed marker, both
/// scores are present, and both team ids belong to the supplied team list.
/// The strictly greater score wins; a tied score is neither a win nor a
/// loss for either side, matching the policy that no winner exists on a
/// tie. Each partition is sorted descending by wins, with win percentage
/// breaking ties; the sort is stable, so teams equal on both keys keep
/// their input order.
pub fn aggregate(teams: &[Team], games: &[Game]) -> Standings {
    let mut records: HashMap<i64, Record> = teams
        .iter()
        .map(|team| (team.id, Record::default()))
        .collect();

    for game in games {
        if game.status != FINAL_STATUS {
            continue;
        }
        let (Some(home_score), Some(visitor_score)) =
            (game.home_team_score, game.visitor_team_score)
        else {
            continue;
        };
        let home_id = game.home_team.id;
        let visitor_id = game.visitor_team.id;
        if !records.contains_key(&home_id) || !records.contains_key(&visitor_id) {
            continue;
        }

        match home_score.cmp(&visitor_score) {
            Ordering::Greater => {
                records.entry(home_id).and_modify(|r| r.wins += 1);
                records.entry(visitor_id).and_modify(|r| r.losses += 1);
            }
            Ordering::Less => {
                records.entry(visitor_id).and_modify(|r| r.wins += 1);
                records.entry(home_id).and_modify(|r| r.losses += 1);
            }
            Ordering::Equal => {}
        }
    }

    let mut standings = Standings::default();
    for team in teams {
        let Some(record) = records.get(&team.id) else {
            continue;
        };
        let total = record.wins + record.losses;
        let win_pct = if total > 0 {
            f64::from(record.wins) / f64::from(total) * 100.0
        } else {
            0.0
        };
        let row = StandingsRow {
            name: team.full_name.clone(),
            wins: record.wins,
            losses: record.losses,
            win_pct,
        };
        match team.conference.as_deref() {
            Some(conference::EAST) => standings.east.push(row),
            Some(conference::WEST) => standings.west.push(row),
            _ => {}
        }
    }

    sort_partition(&mut standings.east);
    sort_partition(&mut standings.west);
    standings
}

fn sort_partition(rows: &mut [StandingsRow]) {
    rows.sort_by(|a, b| {
        b.wins.cmp(&a.wins).then_with(|| {
            b.win_pct
                .partial_cmp(&a.win_pct)
                .unwrap_or(Ordering::Equal)
        })
    });
}
