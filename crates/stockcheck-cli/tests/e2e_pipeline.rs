//! End-to-end tests: the binary writes the log, the library reads it back.
//!
//! Covers the log lifecycle Absent -> Present(1) -> Present(N) -> Absent ->
//! Present(1) across separate process invocations.

use assert_cmd::Command;
use tempfile::TempDir;

use stockcheck_core::model::Grade;
use stockcheck_core::store::{LogState, LogStore, DEFAULT_LOG_FILE};

fn stockcheck(dir: &TempDir) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("stockcheck").unwrap();
    cmd.current_dir(dir.path())
        .env("HOME", dir.path())
        .env_remove("RUST_LOG");
    cmd
}

fn diagnose(dir: &TempDir, name: &str, price: &str, checks: &str) {
    let mut cmd = stockcheck(dir);
    cmd.args(["diagnose", "--name", name, "--price", price]);
    if !checks.is_empty() {
        cmd.args(["--check", checks]);
    }
    cmd.assert().success();
}

#[test]
fn full_log_lifecycle() {
    let dir = TempDir::new().unwrap();
    let store = LogStore::new(dir.path().join(DEFAULT_LOG_FILE));
    assert_eq!(store.read().unwrap(), LogState::Absent);

    diagnose(&dir, "TestCo", "1000", "g1,g2,g3,f1,f2,f3,m1,m2,m3,c1,c2,c3");
    let rows = store.read_all().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].stock_name, "TestCo");
    assert_eq!(rows[0].current_price, 1000);
    assert_eq!(rows[0].score, 100);
    assert_eq!(rows[0].grade, Grade::StrongBuy);
    assert_eq!(
        (
            rows[0].subtotal_growth,
            rows[0].subtotal_fundamental,
            rows[0].subtotal_money,
            rows[0].subtotal_chart
        ),
        (3, 3, 3, 3)
    );

    diagnose(&dir, "에코프로", "250000", "g1,f1,m1,c1,c2,c3");
    diagnose(&dir, "Foo, Inc", "0", "");
    let rows = store.read_all().unwrap();
    let names: Vec<&str> = rows.iter().map(|r| r.stock_name.as_str()).collect();
    assert_eq!(names, ["TestCo", "에코프로", "Foo, Inc"]);
    assert_eq!(rows[1].score, 50);
    assert_eq!(rows[1].grade, Grade::Watch);
    assert_eq!(rows[1].subtotal_chart, 3);
    assert_eq!(rows[2].grade, Grade::Risk);

    stockcheck(&dir).args(["clear", "--yes"]).assert().success();
    assert_eq!(store.read().unwrap(), LogState::Absent);

    diagnose(&dir, "Again", "10", "m1");
    let content = std::fs::read(store.path()).unwrap();
    assert!(content.starts_with(b"\xEF\xBB\xBF"));
    let text = String::from_utf8_lossy(&content[3..]).into_owned();
    assert_eq!(text.lines().count(), 2);
    assert!(text.starts_with("진단일,종목명,현재가,점수,등급,상세_성장성,상세_실적,상세_수급,상세_차트"));

    let rows = store.read_all().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].stock_name, "Again");
    assert_eq!(rows[0].score, 8);
}

#[test]
fn rejected_submission_leaves_existing_log_untouched() {
    let dir = TempDir::new().unwrap();
    let store = LogStore::new(dir.path().join(DEFAULT_LOG_FILE));

    diagnose(&dir, "Kept", "1", "g1");
    let before = std::fs::read(store.path()).unwrap();

    stockcheck(&dir)
        .args(["diagnose", "--name", "   ", "--check", "g1,g2,g3"])
        .assert()
        .failure();

    assert_eq!(std::fs::read(store.path()).unwrap(), before);
    assert_eq!(store.read_all().unwrap().len(), 1);
}
