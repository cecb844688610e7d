use serde::{Deserialize, Serialize};

/// 一致の確度。数値が小さいほど確度が高い（0 = 完全一致）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ConfidenceLevel {
    Exact,
    Fuzzy1,
    Fuzzy2,
    Fuzzy3,
}

impl ConfidenceLevel {
    pub fn from_numeric(level: u8) -> Option<Self> {
        match level {
            0 => Some(ConfidenceLevel::Exact),
            1 => Some(ConfidenceLevel::Fuzzy1),
            2 => Some(ConfidenceLevel::Fuzzy2),
            3 => Some(ConfidenceLevel::Fuzzy3),
            _ => None,
        }
    }

    pub fn numeric(&self) -> u8 {
        match self {
            ConfidenceLevel::Exact => 0,
            ConfidenceLevel::Fuzzy1 => 1,
            ConfidenceLevel::Fuzzy2 => 2,
            ConfidenceLevel::Fuzzy3 => 3,
        }
    }

    /// レポートに出す一致レベル名
    pub fn label(&self) -> &'static str {
        match self {
            ConfidenceLevel::Exact => "完全一致",
            ConfidenceLevel::Fuzzy1 => "1級あいまい",
            ConfidenceLevel::Fuzzy2 => "2級あいまい",
            ConfidenceLevel::Fuzzy3 => "3級あいまい",
        }
    }
}

impl std::fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// 照合モード
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    /// 精確照合（型番そのものを部分一致で探す）
    #[default]
    Exact,
    /// 固定レベルのあいまい照合（末尾を削った型番で探す）
    Fuzzy,
    /// スマート照合（確度の高い順にレベルを掃引）
    Smart,
}

impl std::str::FromStr for SearchMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "exact" => Ok(SearchMode::Exact),
            "fuzzy" => Ok(SearchMode::Fuzzy),
            "smart" => Ok(SearchMode::Smart),
            _ => Err(format!("Unknown mode: {}. Use exact, fuzzy, or smart", s)),
        }
    }
}

impl std::fmt::Display for SearchMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchMode::Exact => write!(f, "exact"),
            SearchMode::Fuzzy => write!(f, "fuzzy"),
            SearchMode::Smart => write!(f, "smart"),
        }
    }
}

/// 照合イベント（1資料 × 1レベル）
///
/// exact / fuzzy モードでは specs は常に1件。smart モードでは
/// 同一レベルで一致した型番が全件入る。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchEvent {
    /// 資料の発見順インデックス（0始まり）
    pub candidate_index: usize,
    pub level: ConfidenceLevel,
    pub specs: Vec<String>,
}

/// 照合エンジンの出力
#[derive(Debug, Clone, Default)]
pub struct MatchOutcome {
    pub events: Vec<MatchEvent>,
    pub found: std::collections::HashSet<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confidence_ordering() {
        assert!(ConfidenceLevel::Exact < ConfidenceLevel::Fuzzy1);
        assert!(ConfidenceLevel::Fuzzy1 < ConfidenceLevel::Fuzzy2);
        assert!(ConfidenceLevel::Fuzzy2 < ConfidenceLevel::Fuzzy3);
    }

    #[test]
    fn test_confidence_numeric_roundtrip() {
        for n in 0..=3u8 {
            let level = ConfidenceLevel::from_numeric(n).unwrap();
            assert_eq!(level.numeric(), n);
        }
        assert!(ConfidenceLevel::from_numeric(4).is_none());
    }

    #[test]
    fn test_search_mode_from_str() {
        assert_eq!("exact".parse::<SearchMode>().unwrap(), SearchMode::Exact);
        assert_eq!("FUZZY".parse::<SearchMode>().unwrap(), SearchMode::Fuzzy);
        assert_eq!("Smart".parse::<SearchMode>().unwrap(), SearchMode::Smart);
        assert!("近似".parse::<SearchMode>().is_err());
    }
}
