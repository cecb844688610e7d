//! 照合パイプライン
//!
//! エンジン（純関数）の照合イベントを受けて、フォルダ作成・
//! ファイルコピー・レポート組み立てを行う。ファイル1件の失敗は
//! 警告して続行し、バッチ全体は止めない。

use crate::allocator::FolderAllocator;
use crate::error::Result;
use crate::matcher::{self, SearchMode};
use crate::report::ReconciliationReport;
use crate::scanner::DocumentInfo;
use filetime::FileTime;
use indicatif::ProgressBar;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

pub struct PipelineOptions {
    pub mode: SearchMode,
    pub fuzzy_level: u8,
    /// 振り分け先のルートフォルダ
    pub dest_root: PathBuf,
    pub verbose: bool,
}

/// 1回の実行の集計
#[derive(Debug)]
pub struct PipelineSummary {
    pub spec_count: usize,
    pub document_count: usize,
    /// 発見できた型番（リスト順）
    pub found: Vec<String>,
    /// 未発見の型番（リスト順）
    pub missing: Vec<String>,
    /// コピー・フォルダ作成の失敗件数（続行した分）
    pub fs_failures: usize,
}

/// 抽出直後のリストを照合用に整える：空白除去、空値の除去、
/// 完全一致の重複除去（初出順を維持）
pub fn normalize_specs(raw: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    raw.iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .filter(|s| seen.insert(s.to_string()))
        .map(|s| s.to_string())
        .collect()
}

pub fn run_pipeline(
    raw_specs: &[String],
    documents: &[DocumentInfo],
    opts: &PipelineOptions,
) -> Result<(ReconciliationReport, PipelineSummary)> {
    let specs = normalize_specs(raw_specs);
    let outcome = matcher::run_match(&specs, documents, opts.mode, opts.fuzzy_level)?;

    fs::create_dir_all(&opts.dest_root)?;

    let mut allocator = FolderAllocator::new();
    let mut report = ReconciliationReport::new(documents);
    let mut fs_failures = 0usize;

    let progress = if opts.verbose || outcome.events.is_empty() {
        None
    } else {
        Some(ProgressBar::new(outcome.events.len() as u64))
    };

    for event in &outcome.events {
        report.record(event);
        let doc = &documents[event.candidate_index];

        for spec in &event.specs {
            let assignment = allocator.assign(spec, false);
            let folder = opts.dest_root.join(&assignment.folder_name);

            if let Err(e) = fs::create_dir_all(&folder) {
                eprintln!("⚠ フォルダ作成に失敗: {}: {}", folder.display(), e);
                fs_failures += 1;
                continue;
            }

            let Some(file_name) = doc.path.file_name() else {
                continue;
            };
            // 同名ファイルは黙って上書き（重複回避はしない）
            let dest = folder.join(file_name);
            match copy_with_mtime(&doc.path, &dest) {
                Ok(()) => {
                    if opts.verbose {
                        println!(
                            "  コピー: {} → {}",
                            doc.path.display(),
                            assignment.folder_name
                        );
                    }
                }
                Err(e) => {
                    eprintln!("⚠ コピーに失敗: {}: {}", doc.path.display(), e);
                    fs_failures += 1;
                }
            }
        }

        if let Some(pb) = &progress {
            pb.inc(1);
        }
    }

    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    // 未発見の型番にはマーカー付きの空フォルダを用意する
    let missing: Vec<String> = specs
        .iter()
        .filter(|s| !outcome.found.contains(*s))
        .cloned()
        .collect();

    for spec in &missing {
        let assignment = allocator.assign(spec, true);
        let folder = opts.dest_root.join(&assignment.folder_name);
        if let Err(e) = fs::create_dir_all(&folder) {
            eprintln!("⚠ 空フォルダ作成に失敗: {}: {}", folder.display(), e);
            fs_failures += 1;
        } else if opts.verbose {
            println!("  空フォルダ: {}", assignment.folder_name);
        }
        report.push_missing(spec);
    }

    let found: Vec<String> = specs
        .iter()
        .filter(|s| outcome.found.contains(*s))
        .cloned()
        .collect();

    let summary = PipelineSummary {
        spec_count: specs.len(),
        document_count: documents.len(),
        found,
        missing,
        fs_failures,
    };

    Ok((report, summary))
}

/// コピーして更新日時を引き継ぐ
fn copy_with_mtime(src: &Path, dest: &Path) -> std::io::Result<()> {
    fs::copy(src, dest)?;
    let metadata = fs::metadata(src)?;
    filetime::set_file_mtime(dest, FileTime::from_last_modification_time(&metadata))
}
