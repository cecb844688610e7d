use crate::matcher::SearchMode;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "datasheet-locator")]
#[command(about = "部品データシート照合・振り分けツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 型番リストと資料フォルダを照合して振り分け
    Run {
        /// 型番リストの文書（.docx / .xlsx / .xls）
        #[arg(required = true)]
        list: PathBuf,

        /// データシートを探索するフォルダ
        #[arg(required = true)]
        folder: PathBuf,

        /// 振り分け先フォルダ
        #[arg(short, long, default_value = "仕分け結果")]
        dest: PathBuf,

        /// 照合モード (exact/fuzzy/smart)（省略時は設定値）
        #[arg(short, long)]
        mode: Option<SearchMode>,

        /// あいまいレベル 1-3（fuzzyモード用、省略時は設定値）
        #[arg(short = 'l', long)]
        fuzzy_level: Option<u8>,

        /// リスト文書の型番列の見出し（省略時は設定値）
        #[arg(short, long)]
        column: Option<String>,

        /// 照合表Excelの出力先（デフォルト: 振り分け先/照合結果.xlsx）
        #[arg(long)]
        report: Option<PathBuf>,

        /// 未発見一覧Excelの出力先（デフォルト: 振り分け先/not_found.xlsx）
        #[arg(long)]
        missing_report: Option<PathBuf>,
    },

    /// 対話形式でパラメータを入力して実行
    Wizard,

    /// 型番リストの抽出結果を表示（確認用）
    Extract {
        /// 型番リストの文書（.docx / .xlsx / .xls）
        #[arg(required = true)]
        list: PathBuf,

        /// 型番列の見出し（省略時は設定値）
        #[arg(short, long)]
        column: Option<String>,
    },

    /// 資料フォルダの走査結果を表示（確認用）
    Scan {
        /// データシートを探索するフォルダ
        #[arg(required = true)]
        folder: PathBuf,
    },

    /// 設定を表示/編集
    Config {
        /// 型番列の見出しを設定
        #[arg(long)]
        set_column: Option<String>,

        /// 既定の照合モードを設定 (exact/fuzzy/smart)
        #[arg(long)]
        set_mode: Option<SearchMode>,

        /// 既定のあいまいレベルを設定 (1-3)
        #[arg(long)]
        set_level: Option<u8>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
