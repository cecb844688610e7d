use crate::error::{LocatorError, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 発見した資料ファイル
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentInfo {
    /// 拡張子を除いたファイル名（照合対象）
    pub file_name: String,
    pub path: PathBuf,
}

const DOCUMENT_EXTENSIONS: &[&str] = &["pdf", "doc", "docx"];

/// フォルダを再帰的に走査して資料ファイルを集める
///
/// 走査順はディレクトリごとにファイル名順。この順がそのまま
/// レポートの行番号になる。
pub fn scan_folder(folder: &Path) -> Result<Vec<DocumentInfo>> {
    if !folder.exists() {
        return Err(LocatorError::FolderNotFound(folder.display().to_string()));
    }

    let mut documents = Vec::new();

    for entry in WalkDir::new(folder)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        if let Some(ext) = path.extension() {
            let ext_str = ext.to_string_lossy();
            if DOCUMENT_EXTENSIONS
                .iter()
                .any(|e| e.eq_ignore_ascii_case(&ext_str))
            {
                let file_name = path
                    .file_stem()
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_default();

                documents.push(DocumentInfo {
                    file_name,
                    path: path.to_path_buf(),
                });
            }
        }
    }

    Ok(documents)
}

#[cfg(test)]
fn is_document_extension(ext: &str) -> bool {
    DOCUMENT_EXTENSIONS
        .iter()
        .any(|e| e.eq_ignore_ascii_case(ext))
}
