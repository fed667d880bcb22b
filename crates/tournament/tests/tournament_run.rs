//! End-to-end tournament runs into a temporary directory

use std::collections::HashSet;

use tournament::{
    run_tournament, TournamentConfig, TournamentError, MATCH_LOG_DIR, STANDINGS_DIR,
};

fn small_config(dir: &std::path::Path) -> TournamentConfig {
    TournamentConfig {
        countries: 3,
        teams_per_country: 6,
        output_dir: dir.to_path_buf(),
        seed: Some(2024),
        ..Default::default()
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn full_run_reports_every_country() {
    let dir = tempfile::tempdir().unwrap();
    let config = small_config(dir.path());

    let outcome = run_tournament(&config, 3).await.unwrap();

    assert!(outcome.qualifiers.is_complete());
    assert_eq!(outcome.countries.len(), 3);

    for result in &outcome.countries {
        let [first, second] = outcome.qualifiers.get(result.country).unwrap();
        assert_eq!(result.standings.rows()[0].id, first);
        assert_eq!(result.standings.rows()[1].id, second);
        assert_ne!(first, second);

        let log = dir
            .path()
            .join(MATCH_LOG_DIR)
            .join(format!("log_pais_{}.txt", result.country));
        let table = dir
            .path()
            .join(STANDINGS_DIR)
            .join(format!("tabla_puntuacion_pais_{}.tsv", result.country));
        assert_eq!(std::fs::read_to_string(log).unwrap().lines().count(), 2 + 15);
        assert_eq!(std::fs::read_to_string(table).unwrap().lines().count(), 2 + 6);
    }

    let report = outcome.qualifiers.generate_report();
    assert_eq!(report.lines().count(), 1 + 3);
    assert!(report.contains("País 2: "));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn seeded_runs_are_reproducible() {
    let dir_a = tempfile::tempdir().unwrap();
    let dir_b = tempfile::tempdir().unwrap();

    let a = run_tournament(&small_config(dir_a.path()), 3).await.unwrap();
    let b = run_tournament(&small_config(dir_b.path()), 3).await.unwrap();

    assert_eq!(a.qualifiers, b.qualifiers);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn countries_do_not_share_random_streams() {
    let dir = tempfile::tempdir().unwrap();
    let outcome = run_tournament(&small_config(dir.path()), 3).await.unwrap();

    let tables: HashSet<Vec<(u32, u32)>> = outcome
        .countries
        .iter()
        .map(|c| c.standings.rows().iter().map(|t| (t.id.0, t.points)).collect())
        .collect();
    assert_eq!(tables.len(), 3);
}

#[tokio::test]
async fn wrong_worker_count_runs_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let config = small_config(dir.path());

    let err = run_tournament(&config, 2).await.unwrap_err();

    assert!(matches!(
        err,
        TournamentError::WorkerCountMismatch {
            required: 3,
            actual: 2
        }
    ));
    assert!(!dir.path().join(MATCH_LOG_DIR).exists());
    assert!(!dir.path().join(STANDINGS_DIR).exists());
}

#[tokio::test]
async fn invalid_squad_runs_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let config = TournamentConfig {
        squad_size: 30,
        ..small_config(dir.path())
    };

    let err = run_tournament(&config, 3).await.unwrap_err();
    assert!(matches!(err, TournamentError::League(_)));
}

#[cfg(unix)]
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn unwritable_artifact_fails_the_run() {
    let dir = tempfile::tempdir().unwrap();
    let config = small_config(dir.path());

    // A directory where country 1's standings file should go
    let blocker = dir
        .path()
        .join(STANDINGS_DIR)
        .join("tabla_puntuacion_pais_1.tsv");
    std::fs::create_dir_all(&blocker).unwrap();

    let err = run_tournament(&config, 3).await.unwrap_err();
    assert!(matches!(err, TournamentError::Artifact { .. }));
}
