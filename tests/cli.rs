use assert_cmd::Command;
use predicates::prelude::*;

fn parstat() -> Command {
    Command::cargo_bin("parstat").unwrap()
}

#[test]
fn divide_strategy_prints_a_full_report() {
    let dir = tempfile::tempdir().unwrap();
    let results = dir.path().join("results.csv");

    parstat()
        .args(["-d", "3", "--results"])
        .arg(&results)
        .assert()
        .success()
        .stdout(predicate::str::contains("Strategy: DivideConquer"))
        .stdout(predicate::str::contains("Threads: 8"))
        .stdout(predicate::str::contains("Minimum time:"));

    let row = std::fs::read_to_string(&results).unwrap();
    assert!(row.starts_with("DivideConquer,8,"));
}

#[test]
fn pool_strategy_prints_a_full_report() {
    let dir = tempfile::tempdir().unwrap();
    let results = dir.path().join("results.csv");

    parstat()
        .args(["-p", "4", "--results"])
        .arg(&results)
        .assert()
        .success()
        .stdout(predicate::str::contains("Strategy: ThreadPool"))
        .stdout(predicate::str::contains("Threads: 4"));
}

#[test]
fn metrics_are_identical_across_strategies() {
    let dir = tempfile::tempdir().unwrap();

    let divide = parstat()
        .args(["-d", "2", "--results"])
        .arg(dir.path().join("a.csv"))
        .output()
        .unwrap();
    let pool = parstat()
        .args(["-p", "4", "--results"])
        .arg(dir.path().join("b.csv"))
        .output()
        .unwrap();

    let metric_lines = |out: &[u8]| -> Vec<String> {
        String::from_utf8_lossy(out)
            .lines()
            .filter(|l| {
                l.starts_with("Mode:") || l.starts_with("Std deviation:") || l.starts_with("Sum:")
            })
            .map(str::to_owned)
            .collect()
    };

    assert_eq!(metric_lines(&divide.stdout), metric_lines(&pool.stdout));
}

#[test]
fn selecting_both_strategies_fails() {
    parstat().args(["-d", "2", "-p", "4"]).assert().failure();
}

#[test]
fn selecting_no_strategy_fails() {
    parstat().assert().failure();
}

#[test]
fn out_of_range_exponent_fails_without_a_result() {
    let dir = tempfile::tempdir().unwrap();
    let results = dir.path().join("results.csv");

    parstat()
        .args(["-d", "33", "--results"])
        .arg(&results)
        .assert()
        .failure()
        .stderr(predicate::str::contains("split exponent 33 out of range"));

    assert!(!results.exists(), "a failed run must not log a result");
}

#[test]
fn out_of_range_pool_size_fails() {
    parstat()
        .args(["-p", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("pool size 0 out of range"));
}
