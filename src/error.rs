use thiserror::Error;

#[derive(Error, Debug)]
pub enum LocatorError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("フォルダが見つかりません: {0}")]
    FolderNotFound(String),

    #[error("型番リストの読み込みエラー: {0}")]
    SpecSource(String),

    #[error("未対応のリスト形式です: {0}（.docx / .xlsx / .xls のみ）")]
    UnsupportedFormat(String),

    #[error("空の型番は照合できません")]
    InvalidSpecification,

    #[error("あいまいレベルが不正です: {0}（1〜3で指定してください）")]
    InvalidFuzzyLevel(u8),

    #[error("Excel生成エラー: {0}")]
    ExcelGeneration(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("CLI実行エラー: {0}")]
    CliExecution(String),
}

pub type Result<T> = std::result::Result<T, LocatorError>;
