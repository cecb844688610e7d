//! Excelレポート出力の統合テスト

use datasheet_locator::export::{self, excel};
use datasheet_locator::matcher::{ConfidenceLevel, MatchEvent};
use datasheet_locator::report::ReconciliationReport;
use datasheet_locator::scanner::DocumentInfo;
use std::path::PathBuf;
use tempfile::tempdir;

fn sample_report() -> ReconciliationReport {
    let documents = vec![
        DocumentInfo {
            file_name: "ABC123_datasheet".to_string(),
            path: PathBuf::from("/data/ABC123_datasheet.pdf"),
        },
        DocumentInfo {
            file_name: "unrelated_note".to_string(),
            path: PathBuf::from("/data/unrelated_note.pdf"),
        },
    ];

    let mut report = ReconciliationReport::new(&documents);
    report.record(&MatchEvent {
        candidate_index: 0,
        level: ConfidenceLevel::Exact,
        specs: vec!["ABC123".to_string()],
    });
    report.push_missing("NOPE");
    report
}

#[test]
fn test_matched_report_written() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("照合結果.xlsx");

    let report = sample_report();
    let result = excel::write_matched_report(&report.matched, &path);

    assert!(result.is_ok(), "照合表の生成に失敗: {:?}", result.err());
    assert!(path.exists(), "照合表ファイルが作成されていない");

    let metadata = std::fs::metadata(&path).unwrap();
    assert!(metadata.len() > 0, "照合表ファイルが空");
}

#[test]
fn test_missing_report_written() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("not_found.xlsx");

    let report = sample_report();
    let result = excel::write_missing_report(&report.missing, &path);

    assert!(result.is_ok(), "未発見一覧の生成に失敗: {:?}", result.err());
    assert!(path.exists());
    assert!(std::fs::metadata(&path).unwrap().len() > 0);
}

#[test]
fn test_empty_reports_still_written() {
    let dir = tempdir().unwrap();
    let report = ReconciliationReport::new(&[]);

    let matched_path = dir.path().join("empty_matched.xlsx");
    let missing_path = dir.path().join("empty_missing.xlsx");

    assert!(excel::write_matched_report(&report.matched, &matched_path).is_ok());
    assert!(excel::write_missing_report(&report.missing, &missing_path).is_ok());
    assert!(matched_path.exists());
    assert!(missing_path.exists());
}

#[test]
fn test_write_reports_emits_both_files() {
    let dir = tempdir().unwrap();
    let matched_path = dir.path().join("照合結果.xlsx");
    let missing_path = dir.path().join("not_found.xlsx");

    let report = sample_report();
    export::write_reports(&report, &matched_path, &missing_path).unwrap();

    assert!(matched_path.exists());
    assert!(missing_path.exists());
}

#[test]
fn test_all_confidence_levels_render() {
    let dir = tempdir().unwrap();
    let documents: Vec<DocumentInfo> = (0..4)
        .map(|i| DocumentInfo {
            file_name: format!("doc_{}", i),
            path: PathBuf::from(format!("/data/doc_{}.pdf", i)),
        })
        .collect();

    let mut report = ReconciliationReport::new(&documents);
    for (i, level) in [
        ConfidenceLevel::Exact,
        ConfidenceLevel::Fuzzy1,
        ConfidenceLevel::Fuzzy2,
        ConfidenceLevel::Fuzzy3,
    ]
    .into_iter()
    .enumerate()
    {
        report.record(&MatchEvent {
            candidate_index: i,
            level,
            specs: vec![format!("SPEC{}", i)],
        });
    }

    let path = dir.path().join("levels.xlsx");
    let result = excel::write_matched_report(&report.matched, &path);
    assert!(result.is_ok(), "全レベルの出力に失敗: {:?}", result.err());
}
