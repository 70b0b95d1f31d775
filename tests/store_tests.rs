//! Persistence tests - finished sessions flow into the score table

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use blockfall::core::{GameConfig, GameSession, ScriptedSource};
use blockfall::store::{AccountStore, ScoreStore, StoreError, SCORES_FILE, USERS_FILE};
use blockfall::types::{Command, PieceKind};

fn temp_data_dir(tag: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    std::env::temp_dir().join(format!("blockfall_it_{tag}_{nanos}"))
}

#[test]
fn test_report_is_recorded_once() {
    let dir = temp_data_dir("report");
    let scores = ScoreStore::in_dir(&dir);

    let mut s = GameSession::with_source(
        GameConfig::default(),
        "carol",
        ScriptedSource::new([PieceKind::O]),
        0,
    )
    .unwrap();
    s.apply(Command::Quit);

    while let Some(report) = s.take_report() {
        scores.record(&report).unwrap();
    }

    let all = scores.all().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].player, "carol");
    assert_eq!(all[0].score, 0);
    assert!(dir.join(SCORES_FILE).exists());
    let _ = std::fs::remove_dir_all(dir);
}

#[test]
fn test_top_ten_is_sorted_and_bounded() {
    let dir = temp_data_dir("top");
    let scores = ScoreStore::in_dir(&dir);
    for i in 0..12u32 {
        scores.save(&format!("p{i}"), (i % 5) * 100, i).unwrap();
    }

    let top = scores.top(10).unwrap();
    assert_eq!(top.len(), 10);
    assert!(top.windows(2).all(|w| w[0].score >= w[1].score));
    // p4 and p9 both scored 400; the earlier one ranks first.
    assert_eq!(top[0].player, "p4");
    assert_eq!(top[1].player, "p9");
    let _ = std::fs::remove_dir_all(dir);
}

#[test]
fn test_accounts_survive_reopening() {
    let dir = temp_data_dir("accounts");
    AccountStore::in_dir(&dir).register("dave", "s3cret").unwrap();

    let reopened = AccountStore::in_dir(&dir);
    assert!(reopened.login("dave", "s3cret").unwrap());
    assert!(!reopened.login("dave", "S3cret").unwrap());
    assert!(matches!(
        reopened.register("dave", "again"),
        Err(StoreError::UserExists(_))
    ));
    assert!(dir.join(USERS_FILE).exists());
    let _ = std::fs::remove_dir_all(dir);
}
