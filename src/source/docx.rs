//! Word形式のリスト読み込み
//!
//! docxはzipアーカイブで、本文は word/document.xml に入っている。
//! ここでは表（w:tbl）のセルテキストだけを素通しで拾う。
//! ネストした表は対象外。

use crate::error::{LocatorError, Result};
use quick_xml::events::Event;
use quick_xml::Reader;
use std::fs::File;
use std::io::Read as IoRead;
use std::path::Path;
use zip::ZipArchive;

pub fn extract(list_path: &Path, column_label: &str) -> Result<Vec<String>> {
    let xml = read_document_xml(list_path)?;
    let tables = parse_tables(&xml)
        .map_err(|e| LocatorError::SpecSource(format!("{}: {}", list_path.display(), e)))?;
    Ok(super::collect_column(&tables, column_label))
}

fn read_document_xml(list_path: &Path) -> Result<String> {
    let file = File::open(list_path)?;
    let mut archive = ZipArchive::new(file)
        .map_err(|e| LocatorError::SpecSource(format!("{}: {}", list_path.display(), e)))?;

    let mut entry = archive.by_name("word/document.xml").map_err(|_| {
        LocatorError::SpecSource(format!(
            "{}: word/document.xml がありません（docxではない？）",
            list_path.display()
        ))
    })?;

    let mut xml = String::new();
    entry.read_to_string(&mut xml)?;
    Ok(xml)
}

/// document.xml から最上位の表を (表 → 行 → セル文字列) で取り出す
fn parse_tables(xml: &str) -> std::result::Result<Vec<Vec<Vec<String>>>, quick_xml::Error> {
    let mut reader = Reader::from_str(xml);

    let mut tables: Vec<Vec<Vec<String>>> = Vec::new();
    let mut current_table: Vec<Vec<String>> = Vec::new();
    let mut current_row: Vec<String> = Vec::new();
    let mut current_cell = String::new();

    let mut table_depth = 0u32;
    let mut in_cell = false;
    let mut in_text = false;

    loop {
        match reader.read_event()? {
            Event::Start(e) => match e.name().as_ref() {
                b"w:tbl" => {
                    table_depth += 1;
                    if table_depth == 1 {
                        current_table = Vec::new();
                    }
                }
                b"w:tr" if table_depth == 1 => {
                    current_row = Vec::new();
                }
                b"w:tc" if table_depth == 1 => {
                    in_cell = true;
                    current_cell = String::new();
                }
                b"w:t" if table_depth == 1 && in_cell => {
                    in_text = true;
                }
                _ => {}
            },
            Event::End(e) => match e.name().as_ref() {
                b"w:tbl" => {
                    if table_depth == 1 {
                        tables.push(std::mem::take(&mut current_table));
                    }
                    table_depth = table_depth.saturating_sub(1);
                }
                b"w:tr" if table_depth == 1 => {
                    current_table.push(std::mem::take(&mut current_row));
                }
                b"w:tc" if table_depth == 1 => {
                    in_cell = false;
                    current_row.push(std::mem::take(&mut current_cell));
                }
                b"w:t" => {
                    in_text = false;
                }
                _ => {}
            },
            Event::Text(t) => {
                if in_text {
                    current_cell.push_str(&t.unescape()?);
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(tables)
}
