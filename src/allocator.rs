//! 振り分け先フォルダ名の割り当て
//!
//! 型番ごとに連番付きのフォルダ名を一度だけ割り当てる。連番は
//! 発見フォルダと空フォルダで共有するので、フォルダ名が衝突する
//! ことはない。

use std::collections::HashMap;

/// 未発見型番の空フォルダに付けるマーカー
pub const EMPTY_MARKER: &str = "（空）";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderAssignment {
    /// 1始まりの連番（初回割り当て順）
    pub sequence: u32,
    pub folder_name: String,
}

#[derive(Debug)]
pub struct FolderAllocator {
    assignments: HashMap<String, FolderAssignment>,
    next_sequence: u32,
}

impl Default for FolderAllocator {
    fn default() -> Self {
        Self::new()
    }
}

impl FolderAllocator {
    pub fn new() -> Self {
        Self {
            assignments: HashMap::new(),
            next_sequence: 1,
        }
    }

    /// 型番にフォルダ名を割り当てる。2回目以降は初回の結果を返す
    /// （missingフラグは初回のみ反映される）
    pub fn assign(&mut self, spec: &str, missing: bool) -> FolderAssignment {
        if let Some(existing) = self.assignments.get(spec) {
            return existing.clone();
        }

        let sequence = self.next_sequence;
        self.next_sequence += 1;

        let mut folder_name = format!("{:03}-{}", sequence, sanitize(spec));
        if missing {
            folder_name.push_str(EMPTY_MARKER);
        }

        let assignment = FolderAssignment {
            sequence,
            folder_name,
        };
        self.assignments.insert(spec.to_string(), assignment.clone());
        assignment
    }

    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }
}

/// フォルダ名に使えるように型番を整形する
///
/// `/` は `-` に置き換え、それ以外は英数字・空白・`-`・`_` だけを
/// 残す。全部消えても連番プレフィックスがあるので名前は成立する。
fn sanitize(spec: &str) -> String {
    spec.replace('/', "-")
        .chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, ' ' | '-' | '_'))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assign_sequences_in_first_encounter_order() {
        let mut allocator = FolderAllocator::new();
        let a = allocator.assign("ABC123", false);
        let b = allocator.assign("XYZ9", false);

        assert_eq!(a.sequence, 1);
        assert_eq!(a.folder_name, "001-ABC123");
        assert_eq!(b.sequence, 2);
        assert_eq!(b.folder_name, "002-XYZ9");
    }

    #[test]
    fn test_assign_is_idempotent() {
        let mut allocator = FolderAllocator::new();
        let first = allocator.assign("ABC123", false);
        let second = allocator.assign("ABC123", false);
        // missingフラグを変えても既存の割り当てが返る
        let third = allocator.assign("ABC123", true);

        assert_eq!(first, second);
        assert_eq!(first, third);
        assert_eq!(allocator.len(), 1);
    }

    #[test]
    fn test_slash_becomes_hyphen() {
        let mut allocator = FolderAllocator::new();
        let a = allocator.assign("A/B", false);
        assert_eq!(a.folder_name, "001-A-B");
    }

    #[test]
    fn test_forbidden_characters_are_dropped() {
        let mut allocator = FolderAllocator::new();
        let a = allocator.assign("AB:C*12?3", false);
        assert_eq!(a.folder_name, "001-ABC123");
    }

    #[test]
    fn test_all_punctuation_spec_keeps_sequence_prefix() {
        let mut allocator = FolderAllocator::new();
        let a = allocator.assign("***", false);
        assert_eq!(a.folder_name, "001-");
    }

    #[test]
    fn test_missing_marker_suffix() {
        let mut allocator = FolderAllocator::new();
        allocator.assign("ABC123", false);
        let missing = allocator.assign("NOPE", true);
        assert_eq!(missing.folder_name, format!("002-NOPE{}", EMPTY_MARKER));
    }

    #[test]
    fn test_unicode_part_numbers_survive() {
        let mut allocator = FolderAllocator::new();
        let a = allocator.assign("抵抗10kΩ", false);
        assert_eq!(a.folder_name, "001-抵抗10kΩ");
    }
}
