//! 照合レポートの組み立て
//!
//! 発見・未発見にかかわらず全資料が1行ずつ載る照合表と、
//! 未発見型番の一覧表。Excelへの書き出しはexport側。

use crate::matcher::{ConfidenceLevel, MatchEvent};
use crate::scanner::DocumentInfo;

/// 照合表の1行（資料1件に対応）
#[derive(Debug, Clone)]
pub struct MatchedRow {
    /// 発見順の行番号（1始まり）
    pub index: usize,
    pub file_name: String,
    pub path: String,
    /// 未一致ならNone
    pub level: Option<ConfidenceLevel>,
    pub specs: Vec<String>,
}

/// 未発見一覧の1行
#[derive(Debug, Clone)]
pub struct MissingRow {
    pub index: usize,
    pub spec: String,
}

#[derive(Debug, Default)]
pub struct ReconciliationReport {
    pub matched: Vec<MatchedRow>,
    pub missing: Vec<MissingRow>,
}

impl ReconciliationReport {
    /// 全資料分の行を未一致状態で用意する
    pub fn new(documents: &[DocumentInfo]) -> Self {
        let matched = documents
            .iter()
            .enumerate()
            .map(|(i, doc)| MatchedRow {
                index: i + 1,
                file_name: doc.file_name.clone(),
                path: doc.path.display().to_string(),
                level: None,
                specs: Vec::new(),
            })
            .collect();

        Self {
            matched,
            missing: Vec::new(),
        }
    }

    /// 照合イベントを行に反映する。同じ資料に後から別レベルの
    /// イベントが来たら上書き（最後のイベントが行に残る）
    pub fn record(&mut self, event: &MatchEvent) {
        if let Some(row) = self.matched.get_mut(event.candidate_index) {
            row.level = Some(event.level);
            row.specs = event.specs.clone();
        }
    }

    pub fn push_missing(&mut self, spec: &str) {
        let index = self.missing.len() + 1;
        self.missing.push(MissingRow {
            index,
            spec: spec.to_string(),
        });
    }
}
