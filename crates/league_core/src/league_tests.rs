use super::*;
use crate::performance::{FixedPerformance, RandomPerformance};
use crate::types::{new_roster, TeamId};
use std::collections::HashSet;

fn config(teams: usize) -> LeagueConfig {
    LeagueConfig {
        teams,
        roster_size: 25,
        squad_size: 11,
    }
}

#[test]
fn pairs_cover_each_unordered_pair_once() {
    for n in 0..12 {
        let pairs: Vec<_> = round_robin_pairs(n).collect();
        assert_eq!(pairs.len(), n * n.saturating_sub(1) / 2);

        let unique: HashSet<_> = pairs.iter().copied().collect();
        assert_eq!(unique.len(), pairs.len());
        assert!(pairs.iter().all(|&(i, j)| i < j && j < n));
    }
}

#[test]
fn league_plays_all_pairs_once() {
    let engine = LeagueEngine::new(config(20));
    let mut teams = new_roster(20, 25);
    let mut source = RandomPerformance::new(11);
    let mut log: Vec<MatchRecord> = Vec::new();

    engine.play(&mut teams, &mut source, &mut log).unwrap();

    assert_eq!(log.len(), 190);
    let mut seen = HashSet::new();
    for record in &log {
        assert_ne!(record.home, record.away, "self-match");
        let key = (record.home.min(record.away), record.home.max(record.away));
        assert!(seen.insert(key), "repeated pair {:?}", key);
    }
}

#[test]
fn points_match_each_teams_records() {
    let engine = LeagueEngine::new(config(10));
    let mut teams = new_roster(10, 25);
    let mut source = RandomPerformance::new(99);
    let mut log: Vec<MatchRecord> = Vec::new();

    engine.play(&mut teams, &mut source, &mut log).unwrap();

    for team in &teams {
        let wins = log.iter().filter(|r| r.winner() == Some(team.id)).count() as u32;
        let draws = log
            .iter()
            .filter(|r| r.outcome == Outcome::Draw && (r.home == team.id || r.away == team.id))
            .count() as u32;
        assert_eq!(team.points, 3 * wins + draws, "team {}", team.id);

        let from_records: u32 = log.iter().filter_map(|r| r.points_for(team.id)).sum();
        assert_eq!(team.points, from_records);
    }
}

#[test]
fn points_never_decrease_during_league() {
    struct Watch {
        totals: Vec<u32>,
    }

    impl MatchLog for Watch {
        type Error = Infallible;

        fn record(&mut self, record: &MatchRecord) -> Result<(), Self::Error> {
            let (home, away) = record.outcome.points();
            self.totals[record.home.index()] += home;
            self.totals[record.away.index()] += away;
            Ok(())
        }
    }

    let engine = LeagueEngine::new(config(8));
    let mut teams = new_roster(8, 25);
    let mut source = RandomPerformance::new(5);
    let mut watch = Watch { totals: vec![0; 8] };

    engine.play(&mut teams, &mut source, &mut watch).unwrap();

    let final_points: Vec<u32> = teams.iter().map(|t| t.points).collect();
    assert_eq!(watch.totals, final_points);
}

#[test]
fn fixed_scores_decide_every_match() {
    let engine = LeagueEngine::new(LeagueConfig {
        teams: 3,
        roster_size: 3,
        squad_size: 2,
    });
    let mut teams = new_roster(3, 3);
    let mut source = FixedPerformance::new()
        .with(TeamId(0), vec![10, 10, 99])
        .with(TeamId(1), vec![50, 50, 1])
        .with(TeamId(2), vec![55, 54, 1]);
    let mut log: Vec<MatchRecord> = Vec::new();

    engine.play(&mut teams, &mut source, &mut log).unwrap();

    // squad scores: 109, 100, 109
    assert_eq!(log[0].outcome, Outcome::HomeWin);
    assert_eq!(log[1].outcome, Outcome::Draw);
    assert_eq!(log[2].outcome, Outcome::AwayWin);
    assert_eq!(
        teams.iter().map(|t| t.points).collect::<Vec<_>>(),
        vec![4, 0, 4]
    );
}

#[test]
fn log_error_stops_league() {
    struct Fails;

    impl MatchLog for Fails {
        type Error = &'static str;

        fn record(&mut self, _record: &MatchRecord) -> Result<(), Self::Error> {
            Err("disk full")
        }
    }

    let engine = LeagueEngine::new(config(4));
    let mut teams = new_roster(4, 25);
    let mut source = RandomPerformance::new(1);

    let result = engine.play(&mut teams, &mut source, &mut Fails);

    assert_eq!(result, Err("disk full"));
    let total: u32 = teams.iter().map(|t| t.points).sum();
    assert!(total == 3 || total == 2, "only the first match was played");
}
