pub mod excel;

use crate::error::Result;
use crate::report::ReconciliationReport;
use std::path::Path;

/// 照合表と未発見一覧の2ファイルを書き出す
pub fn write_reports(
    report: &ReconciliationReport,
    matched_path: &Path,
    missing_path: &Path,
) -> Result<()> {
    println!("- 照合表を生成中...");
    excel::write_matched_report(&report.matched, matched_path)?;
    println!("✔ 照合表: {}", matched_path.display());

    println!("- 未発見一覧を生成中...");
    excel::write_missing_report(&report.missing, missing_path)?;
    println!("✔ 未発見一覧: {}", missing_path.display());

    Ok(())
}
