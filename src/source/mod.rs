//! 型番リストの読み込み
//!
//! 表形式のリスト文書から、指定した列見出しの下にある値を順番に
//! 集める。対応形式は拡張子で振り分ける（.docx / .xlsx / .xls）。
//! 空セルと見出しの繰り返しはここで落とす。重複除去は呼び出し側。

mod docx;
mod xlsx;

use crate::error::{LocatorError, Result};
use std::path::Path;

/// リスト文書から型番列を抽出する
pub fn extract_specifications(list_path: &Path, column_label: &str) -> Result<Vec<String>> {
    if !list_path.exists() {
        return Err(LocatorError::FileNotFound(list_path.display().to_string()));
    }

    let ext = list_path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "docx" => docx::extract(list_path, column_label),
        "xlsx" | "xlsm" | "xls" => xlsx::extract(list_path, column_label),
        _ => Err(LocatorError::UnsupportedFormat(
            list_path.display().to_string(),
        )),
    }
}

/// 表の行列データから対象列の値を集める（docx / xlsx 共通）
///
/// 先頭行から列見出しを探し、見つかった列の2行目以降を集める。
/// 見出しに一致する表が複数あれば全部つなげる。
fn collect_column(tables: &[Vec<Vec<String>>], column_label: &str) -> Vec<String> {
    let label = column_label.trim().to_lowercase();
    let mut values = Vec::new();

    for table in tables {
        let Some(header_row) = table.first() else {
            continue;
        };
        let Some(column_index) = header_row
            .iter()
            .position(|cell| cell.trim().to_lowercase() == label)
        else {
            continue;
        };

        for row in &table[1..] {
            let Some(cell) = row.get(column_index) else {
                continue;
            };
            let value = cell.trim();
            if !value.is_empty() && value.to_lowercase() != label {
                values.push(value.to_string());
            }
        }
    }

    values
}
