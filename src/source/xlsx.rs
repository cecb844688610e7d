//! Excel形式のリスト読み込み（calamine）

use crate::error::{LocatorError, Result};
use calamine::{open_workbook_auto, Data, Reader};
use std::path::Path;

/// 全シートを表として読み、対象列を集める
pub fn extract(list_path: &Path, column_label: &str) -> Result<Vec<String>> {
    let mut workbook = open_workbook_auto(list_path)
        .map_err(|e| LocatorError::SpecSource(format!("{}: {}", list_path.display(), e)))?;

    let mut tables = Vec::new();
    for (_name, range) in workbook.worksheets() {
        let rows: Vec<Vec<String>> = range
            .rows()
            .map(|row| row.iter().map(cell_text).collect())
            .collect();
        if !rows.is_empty() {
            tables.push(rows);
        }
    }

    Ok(super::collect_column(&tables, column_label))
}

/// セル値を文字列化する。整数で表現できる数値は小数点を付けない
/// （型番が数値として読まれた場合の "74123.0" を避ける）
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.trim().to_string(),
        Data::Float(f) => {
            if f.fract() == 0.0 {
                format!("{}", *f as i64)
            } else {
                f.to_string()
            }
        }
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::DateTimeIso(s) => s.trim().to_string(),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_xlsxwriter::Workbook;

    fn write_fixture(path: &Path, rows: &[&[&str]]) {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        for (r, row) in rows.iter().enumerate() {
            for (c, value) in row.iter().enumerate() {
                worksheet
                    .write_string(r as u32, c as u16, *value)
                    .unwrap();
            }
        }
        workbook.save(path).unwrap();
    }

    #[test]
    fn test_extract_from_generated_workbook() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("部品表.xlsx");
        write_fixture(
            &path,
            &[
                &["品名", "型番"],
                &["抵抗", "RC0603_10k"],
                &["IC", "μPC1093"],
                &["予備", ""],
            ],
        );

        let specs = extract(&path, "型番").unwrap();
        assert_eq!(specs, vec!["RC0603_10k", "μPC1093"]);
    }

    #[test]
    fn test_extract_numeric_cells_keep_integer_form() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("list.xlsx");

        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.write_string(0, 0, "型番").unwrap();
        worksheet.write_number(1, 0, 74123.0).unwrap();
        workbook.save(&path).unwrap();

        let specs = extract(&path, "型番").unwrap();
        assert_eq!(specs, vec!["74123"]);
    }

    #[test]
    fn test_extract_without_matching_header_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("list.xlsx");
        write_fixture(&path, &[&["品名"], &["抵抗"]]);

        let specs = extract(&path, "型番").unwrap();
        assert!(specs.is_empty());
    }
}
