use super::*;

#[test]
fn default_config_is_valid() {
    let config = LeagueConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.match_count(), 190);
}

#[test]
fn squad_must_be_smaller_than_roster() {
    let config = LeagueConfig {
        teams: 4,
        roster_size: 11,
        squad_size: 11,
    };
    assert_eq!(
        config.validate(),
        Err(LeagueConfigError::SquadTooLarge {
            squad: 11,
            roster: 11
        })
    );
}

#[test]
fn empty_squad_rejected() {
    let config = LeagueConfig {
        teams: 4,
        roster_size: 5,
        squad_size: 0,
    };
    assert_eq!(config.validate(), Err(LeagueConfigError::EmptySquad));
}

#[test]
fn single_team_league_rejected() {
    let config = LeagueConfig {
        teams: 1,
        ..Default::default()
    };
    assert_eq!(config.validate(), Err(LeagueConfigError::TooFewTeams(1)));
}
