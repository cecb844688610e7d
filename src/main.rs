use clap::Parser;
use datasheet_locator::{cli, config, error, export, matcher, pipeline, scanner, source, wizard};

use cli::{Cli, Commands};
use config::Config;
use error::Result;
use matcher::SearchMode;
use pipeline::PipelineOptions;
use std::path::PathBuf;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Run {
            list,
            folder,
            dest,
            mode,
            fuzzy_level,
            column,
            report,
            missing_report,
        } => {
            let params = RunParams {
                list,
                folder,
                dest,
                mode: mode.unwrap_or(config.default_mode),
                fuzzy_level: fuzzy_level.unwrap_or(config.default_fuzzy_level),
                column: column.unwrap_or_else(|| config.column_label.clone()),
                report,
                missing_report,
            };
            run_reconciliation(&params, cli.verbose)?;
        }

        Commands::Wizard => {
            let request = wizard::collect(&config)?;
            let params = RunParams {
                list: request.list,
                folder: request.folder,
                dest: request.dest,
                mode: request.mode,
                fuzzy_level: request.fuzzy_level,
                column: request.column,
                report: None,
                missing_report: None,
            };
            run_reconciliation(&params, cli.verbose)?;
        }

        Commands::Extract { list, column } => {
            let column = column.unwrap_or_else(|| config.column_label.clone());
            let specs = source::extract_specifications(&list, &column)?;
            println!("抽出された型番: {}件（列見出し: {}）", specs.len(), column);
            for (i, spec) in specs.iter().enumerate() {
                println!("{:4}: {}", i + 1, spec);
            }
        }

        Commands::Scan { folder } => {
            let documents = scanner::scan_folder(&folder)?;
            println!("検出された資料: {}件", documents.len());
            for doc in &documents {
                if cli.verbose {
                    println!("  {} ({})", doc.file_name, doc.path.display());
                } else {
                    println!("  {}", doc.file_name);
                }
            }
        }

        Commands::Config {
            set_column,
            set_mode,
            set_level,
            show,
        } => {
            let mut config = config;

            if let Some(label) = set_column {
                config.set_column_label(label)?;
                println!("✔ 列見出しを設定しました");
            }

            if let Some(mode) = set_mode {
                config.set_default_mode(mode)?;
                println!("✔ 既定の照合モードを設定しました");
            }

            if let Some(level) = set_level {
                config.set_default_fuzzy_level(level)?;
                println!("✔ 既定のあいまいレベルを設定しました");
            }

            if show {
                println!("設定:");
                println!("  列見出し: {}", config.column_label);
                println!("  既定モード: {}", config.default_mode);
                println!("  既定あいまいレベル: {}", config.default_fuzzy_level);
                println!("  設定ファイル: {}", Config::config_path()?.display());
            }
        }
    }

    Ok(())
}

struct RunParams {
    list: PathBuf,
    folder: PathBuf,
    dest: PathBuf,
    mode: SearchMode,
    fuzzy_level: u8,
    column: String,
    report: Option<PathBuf>,
    missing_report: Option<PathBuf>,
}

fn run_reconciliation(params: &RunParams, verbose: bool) -> Result<()> {
    println!("📑 datasheet-locator - 照合処理\n");

    // 1. 型番リスト抽出
    println!("[1/4] 型番リストを読み込み中...");
    let specs = source::extract_specifications(&params.list, &params.column)?;
    println!("✔ {}件の型番を抽出\n", specs.len());
    if specs.is_empty() {
        println!(
            "⚠ 型番が1件も抽出できませんでした（列見出し: {}）。空のレポートを出力します\n",
            params.column
        );
    }

    // 2. 資料スキャン
    println!("[2/4] 資料フォルダをスキャン中...");
    let documents = scanner::scan_folder(&params.folder)?;
    println!("✔ {}件の資料を検出\n", documents.len());
    if documents.is_empty() {
        println!("⚠ 対象拡張子（pdf/doc/docx）の資料が見つかりませんでした\n");
    }

    // 3. 照合・振り分け
    println!("[3/4] 照合・振り分け中... (モード: {})", params.mode);
    let opts = PipelineOptions {
        mode: params.mode,
        fuzzy_level: params.fuzzy_level,
        dest_root: params.dest.clone(),
        verbose,
    };
    let (report, summary) = pipeline::run_pipeline(&specs, &documents, &opts)?;
    println!(
        "✔ 照合完了: 発見 {}件 / 未発見 {}件\n",
        summary.found.len(),
        summary.missing.len()
    );
    if summary.fs_failures > 0 {
        println!("⚠ コピーまたはフォルダ作成の失敗: {}件\n", summary.fs_failures);
    }

    // 4. レポート出力
    println!("[4/4] レポートを出力中...");
    let report_path = params
        .report
        .clone()
        .unwrap_or_else(|| params.dest.join("照合結果.xlsx"));
    let missing_path = params
        .missing_report
        .clone()
        .unwrap_or_else(|| params.dest.join("not_found.xlsx"));
    export::write_reports(&report, &report_path, &missing_path)?;

    println!("\n✅ 処理完了");
    Ok(())
}
