//! 照合レポートのExcel生成
//!
//! 一致した行は確度に応じた色で行全体を塗る。

use crate::error::{LocatorError, Result};
use crate::matcher::ConfidenceLevel;
use crate::report::{MatchedRow, MissingRow};
use rust_xlsxwriter::{Color, Format, FormatBorder, Workbook};
use std::path::Path;

const MATCHED_HEADERS: &[&str] = &[
    "No.",
    "ファイル名",
    "ファイルパス",
    "一致レベル",
    "一致した型番",
];
const MISSING_HEADERS: &[&str] = &["No.", "型番"];

/// 確度ごとの行の塗り色
fn fill_color(level: ConfidenceLevel) -> Color {
    match level {
        ConfidenceLevel::Exact => Color::RGB(0x90EE90),  // 緑
        ConfidenceLevel::Fuzzy1 => Color::RGB(0xFFFF00), // 黄
        ConfidenceLevel::Fuzzy2 => Color::RGB(0xFFA500), // 橙
        ConfidenceLevel::Fuzzy3 => Color::RGB(0xFF69B4), // 桃
    }
}

fn header_format() -> Format {
    Format::new()
        .set_bold()
        .set_background_color(Color::RGB(0xF5F5F5))
        .set_border(FormatBorder::Thin)
}

fn row_format(level: Option<ConfidenceLevel>) -> Format {
    match level {
        Some(l) => Format::new().set_background_color(fill_color(l)),
        None => Format::new(),
    }
}

/// 照合表を書き出す
pub fn write_matched_report(rows: &[MatchedRow], output_path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name("照合結果")
        .map_err(|e| LocatorError::ExcelGeneration(format!("シート名設定エラー: {}", e)))?;

    let header = header_format();
    for (col, title) in MATCHED_HEADERS.iter().enumerate() {
        worksheet
            .write_string_with_format(0, col as u16, *title, &header)
            .map_err(|e| LocatorError::ExcelGeneration(format!("見出し書き込みエラー: {}", e)))?;
    }

    // 列幅はだいたいで固定
    for (col, width) in [(0u16, 8.0), (1, 40.0), (2, 60.0), (3, 14.0), (4, 30.0)] {
        worksheet
            .set_column_width(col, width)
            .map_err(|e| LocatorError::ExcelGeneration(format!("列幅設定エラー: {}", e)))?;
    }

    for row in rows {
        let format = row_format(row.level);
        let r = row.index as u32; // 見出しが0行目なのでindexそのまま

        let label = row.level.map(|l| l.label()).unwrap_or("");
        let specs = row.specs.join(", ");

        worksheet
            .write_number_with_format(r, 0, row.index as f64, &format)
            .and_then(|ws| ws.write_string_with_format(r, 1, &row.file_name, &format))
            .and_then(|ws| ws.write_string_with_format(r, 2, &row.path, &format))
            .and_then(|ws| ws.write_string_with_format(r, 3, label, &format))
            .and_then(|ws| ws.write_string_with_format(r, 4, &specs, &format))
            .map_err(|e| LocatorError::ExcelGeneration(format!("行書き込みエラー: {}", e)))?;
    }

    workbook
        .save(output_path)
        .map_err(|e| LocatorError::ExcelGeneration(format!("Excel保存エラー: {}", e)))?;

    Ok(())
}

/// 未発見型番の一覧を書き出す
pub fn write_missing_report(rows: &[MissingRow], output_path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name("未発見")
        .map_err(|e| LocatorError::ExcelGeneration(format!("シート名設定エラー: {}", e)))?;

    let header = header_format();
    for (col, title) in MISSING_HEADERS.iter().enumerate() {
        worksheet
            .write_string_with_format(0, col as u16, *title, &header)
            .map_err(|e| LocatorError::ExcelGeneration(format!("見出し書き込みエラー: {}", e)))?;
    }

    worksheet
        .set_column_width(1, 30.0)
        .map_err(|e| LocatorError::ExcelGeneration(format!("列幅設定エラー: {}", e)))?;

    for row in rows {
        let r = row.index as u32;
        worksheet
            .write_number(r, 0, row.index as f64)
            .and_then(|ws| ws.write_string(r, 1, &row.spec))
            .map_err(|e| LocatorError::ExcelGeneration(format!("行書き込みエラー: {}", e)))?;
    }

    workbook
        .save(output_path)
        .map_err(|e| LocatorError::ExcelGeneration(format!("Excel保存エラー: {}", e)))?;

    Ok(())
}
