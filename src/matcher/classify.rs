//! 型番1件 × ファイル名1件の照合判定
//!
//! あいまい照合は編集距離ではなく末尾削りの部分一致。型番の
//! 末尾L文字（パッケージ記号やリビジョン記号）だけを許容する。

use super::types::ConfidenceLevel;

/// 精確照合。型番がファイル名に含まれるか（大文字小文字は無視）
pub fn exact_match(spec: &str, name: &str) -> bool {
    name.to_lowercase().contains(&spec.to_lowercase())
}

/// レベルLのあいまい照合。末尾L文字を削った型番で部分一致を試す。
/// 削った結果が空になる場合（型番がL文字以下）は不一致とする。
pub fn fuzzy_match(spec: &str, name: &str, level: u8) -> bool {
    match truncate_suffix(spec, level) {
        Some(probe) => name.to_lowercase().contains(&probe.to_lowercase()),
        None => false,
    }
}

/// スマート照合。完全一致 → 1級 → 2級 → 3級の順で試し、
/// 最初に一致したレベルを返す
pub fn smart_match(spec: &str, name: &str) -> Option<ConfidenceLevel> {
    if exact_match(spec, name) {
        return Some(ConfidenceLevel::Exact);
    }
    for level in 1..=3u8 {
        if fuzzy_match(spec, name, level) {
            return ConfidenceLevel::from_numeric(level);
        }
    }
    None
}

/// 末尾level文字を削った部分文字列。文字数がlevel以下ならNone
///
/// バイトではなく文字単位で削る（型番にΩやμが入ることがある）
fn truncate_suffix(spec: &str, level: u8) -> Option<&str> {
    let count = spec.chars().count();
    if count <= level as usize {
        return None;
    }
    let keep = count - level as usize;
    let end = spec
        .char_indices()
        .nth(keep)
        .map(|(i, _)| i)
        .unwrap_or(spec.len());
    Some(&spec[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match_case_insensitive() {
        assert!(exact_match("ABC123", "abc123_datasheet"));
        assert!(exact_match("abc123", "前置き_ABC123_v2"));
        assert!(!exact_match("ABC124", "abc123_datasheet"));
    }

    #[test]
    fn test_fuzzy_truncation() {
        // "ABC123X" のレベル2 → "ABC12" ... 不一致
        assert!(!fuzzy_match("ABC123X", "ABC1_v2", 2));
        // レベル2 → "ABC12" が "ABC123_v2" に含まれる
        assert!(fuzzy_match("ABC123X", "ABC123_v2", 2));
        // レベル1 → "ABC123" は "ABC12_v2" に含まれない
        assert!(!fuzzy_match("ABC123X", "ABC12_v2", 1));
    }

    #[test]
    fn test_fuzzy_short_spec_never_matches() {
        // 3文字の型番はレベル3で空になる → 不一致
        assert!(!fuzzy_match("ABC", "ABCDEF", 3));
        assert!(!fuzzy_match("AB", "ABCDEF", 2));
        // 1文字残るなら照合する
        assert!(fuzzy_match("ABC", "a_sheet", 2));
    }

    #[test]
    fn test_truncate_suffix_is_char_based() {
        assert_eq!(truncate_suffix("10kΩ抵抗", 2), Some("10kΩ"));
        assert_eq!(truncate_suffix("μPC1093", 6), Some("μ"));
        assert_eq!(truncate_suffix("μP", 2), None);
    }

    #[test]
    fn test_smart_match_prefers_strongest_level() {
        // 完全一致が成立するならレベル0
        assert_eq!(
            smart_match("XYZ1", "XYZ1_sheet"),
            Some(ConfidenceLevel::Exact)
        );
        // "XYZ12" は "XYZ1_sheet" に1級（末尾1文字削り）で一致
        assert_eq!(
            smart_match("XYZ12", "XYZ1_sheet"),
            Some(ConfidenceLevel::Fuzzy1)
        );
        // 3級まで試して駄目ならNone
        assert_eq!(smart_match("QRS999", "XYZ1_sheet"), None);
    }

    #[test]
    fn test_smart_match_level_two_and_three() {
        assert_eq!(
            smart_match("ABC123XY", "ABC123_v2"),
            Some(ConfidenceLevel::Fuzzy2)
        );
        assert_eq!(
            smart_match("ABC123XYZ", "ABC123_v2"),
            Some(ConfidenceLevel::Fuzzy3)
        );
    }
}
