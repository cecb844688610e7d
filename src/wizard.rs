//! 対話形式の実行パラメータ入力
//!
//! 元はGUIで集めていた3つのパス＋モード選択を、端末プロンプトで
//! 集める。照合処理そのものはrunコマンドと同じ経路に流す。

use crate::config::Config;
use crate::error::{LocatorError, Result};
use crate::matcher::SearchMode;
use dialoguer::{Input, Select};
use std::path::PathBuf;

/// 対話で集めた実行パラメータ
pub struct RunRequest {
    pub list: PathBuf,
    pub folder: PathBuf,
    pub dest: PathBuf,
    pub mode: SearchMode,
    pub fuzzy_level: u8,
    pub column: String,
}

pub fn collect(config: &Config) -> Result<RunRequest> {
    println!("📑 対話モード - 入力してください\n");

    let list = prompt_existing_path("型番リストの文書 (.docx/.xlsx)", false)?;
    let folder = prompt_existing_path("データシートを探索するフォルダ", true)?;

    let dest: String = Input::new()
        .with_prompt("振り分け先フォルダ")
        .default("仕分け結果".to_string())
        .interact_text()
        .map_err(|e| LocatorError::CliExecution(e.to_string()))?;

    let column: String = Input::new()
        .with_prompt("型番列の見出し")
        .default(config.column_label.clone())
        .interact_text()
        .map_err(|e| LocatorError::CliExecution(e.to_string()))?;

    let mode_items = &[
        "精確照合 (exact)",
        "あいまい照合 (fuzzy)",
        "スマート照合 (smart)",
    ];
    let default_index = match config.default_mode {
        SearchMode::Exact => 0,
        SearchMode::Fuzzy => 1,
        SearchMode::Smart => 2,
    };
    let selected = Select::new()
        .with_prompt("照合モード")
        .items(mode_items)
        .default(default_index)
        .interact()
        .map_err(|e| LocatorError::CliExecution(e.to_string()))?;

    let mode = match selected {
        0 => SearchMode::Exact,
        1 => SearchMode::Fuzzy,
        _ => SearchMode::Smart,
    };

    // レベル選択はfuzzyのときだけ意味がある
    let fuzzy_level = if mode == SearchMode::Fuzzy {
        let level_items = &["1級（末尾1文字を削る）", "2級（末尾2文字）", "3級（末尾3文字）"];
        let index = Select::new()
            .with_prompt("あいまいレベル")
            .items(level_items)
            .default((config.default_fuzzy_level.saturating_sub(1)).min(2) as usize)
            .interact()
            .map_err(|e| LocatorError::CliExecution(e.to_string()))?;
        index as u8 + 1
    } else {
        config.default_fuzzy_level
    };

    println!();

    Ok(RunRequest {
        list,
        folder,
        dest: PathBuf::from(dest),
        mode,
        fuzzy_level,
        column,
    })
}

/// 存在するパスが入るまで聞き直す
fn prompt_existing_path(prompt: &str, want_dir: bool) -> Result<PathBuf> {
    loop {
        let input: String = Input::new()
            .with_prompt(prompt)
            .interact_text()
            .map_err(|e| LocatorError::CliExecution(e.to_string()))?;

        let path = PathBuf::from(input.trim());
        if want_dir && path.is_dir() {
            return Ok(path);
        }
        if !want_dir && path.is_file() {
            return Ok(path);
        }
        println!("  見つかりません: {}", path.display());
    }
}
