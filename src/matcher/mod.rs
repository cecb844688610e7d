//! 照合エンジン
//!
//! 型番リストと資料リストを突き合わせ、照合イベント列と発見済み
//! 型番集合を返す。I/Oは一切行わない（フォルダ作成・コピーは
//! pipeline側の仕事）。

pub mod classify;
pub mod types;

use crate::error::{LocatorError, Result};
use crate::scanner::DocumentInfo;
use std::collections::HashSet;
pub use types::{ConfidenceLevel, MatchEvent, MatchOutcome, SearchMode};

/// 照合を実行する
///
/// specsは空白除去・重複除去済みであること。空の型番が混じって
/// いた場合はエラー（照合途中では発生させない）。
pub fn run_match(
    specs: &[String],
    documents: &[DocumentInfo],
    mode: SearchMode,
    fuzzy_level: u8,
) -> Result<MatchOutcome> {
    if specs.iter().any(|s| s.trim().is_empty()) {
        return Err(LocatorError::InvalidSpecification);
    }

    match mode {
        SearchMode::Exact => Ok(first_match_pass(
            specs,
            documents,
            ConfidenceLevel::Exact,
            |spec, name| classify::exact_match(spec, name),
        )),
        SearchMode::Fuzzy => {
            let level = ConfidenceLevel::from_numeric(fuzzy_level)
                .filter(|l| *l != ConfidenceLevel::Exact)
                .ok_or(LocatorError::InvalidFuzzyLevel(fuzzy_level))?;
            Ok(first_match_pass(specs, documents, level, |spec, name| {
                classify::fuzzy_match(spec, name, fuzzy_level)
            }))
        }
        SearchMode::Smart => Ok(smart_pass(specs, documents)),
    }
}

/// exact / fuzzy 共通の単一パス
///
/// 資料ごとに型番リストを先頭から試し、最初に一致した型番だけを
/// 記録する（1資料は高々1型番に振り分けられる）。発見済みの型番も
/// 試し続けるので、同じ型番に複数の資料が集まることはある。
fn first_match_pass<F>(
    specs: &[String],
    documents: &[DocumentInfo],
    level: ConfidenceLevel,
    matches: F,
) -> MatchOutcome
where
    F: Fn(&str, &str) -> bool,
{
    let mut events = Vec::new();
    let mut found = HashSet::new();

    for (index, doc) in documents.iter().enumerate() {
        for spec in specs {
            if matches(spec, &doc.file_name) {
                found.insert(spec.clone());
                events.push(MatchEvent {
                    candidate_index: index,
                    level,
                    specs: vec![spec.clone()],
                });
                break;
            }
        }
    }

    MatchOutcome { events, found }
}

/// スマート照合：確度の高いレベルから順に掃引する
///
/// レベルを終えるたびに一致済み型番を候補から外すので、強い
/// レベルで見つかった型番が弱いレベルで再登場することはない。
/// レベル内では候補を縮めない（同一レベルで複数の資料が同じ
/// 型番を取ることは許す）。
fn smart_pass(specs: &[String], documents: &[DocumentInfo]) -> MatchOutcome {
    let mut events = Vec::new();
    let mut found: HashSet<String> = HashSet::new();
    let mut remaining: Vec<&String> = specs.iter().collect();

    for numeric in 0..=3u8 {
        if remaining.is_empty() {
            break;
        }
        let level = match ConfidenceLevel::from_numeric(numeric) {
            Some(l) => l,
            None => break,
        };

        let mut matched_this_level: HashSet<String> = HashSet::new();

        for (index, doc) in documents.iter().enumerate() {
            let hits: Vec<String> = remaining
                .iter()
                .filter(|spec| match level {
                    ConfidenceLevel::Exact => classify::exact_match(spec.as_str(), &doc.file_name),
                    _ => classify::fuzzy_match(spec.as_str(), &doc.file_name, numeric),
                })
                .map(|spec| (*spec).clone())
                .collect();

            if !hits.is_empty() {
                matched_this_level.extend(hits.iter().cloned());
                events.push(MatchEvent {
                    candidate_index: index,
                    level,
                    specs: hits,
                });
            }
        }

        remaining.retain(|spec| !matched_this_level.contains(spec.as_str()));
        found.extend(matched_this_level);
    }

    MatchOutcome { events, found }
}
