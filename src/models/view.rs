use crate::errors::{Result, SignalBoardError};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// 看板视图
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisView {
    Overview,
    Technical,
    Fundamental,
    Charts,
}

impl AnalysisView {
    pub const ALL: [AnalysisView; 4] = [
        AnalysisView::Overview,
        AnalysisView::Technical,
        AnalysisView::Fundamental,
        AnalysisView::Charts,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            AnalysisView::Overview => "overview",
            AnalysisView::Technical => "technical",
            AnalysisView::Fundamental => "fundamental",
            AnalysisView::Charts => "charts",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            AnalysisView::Overview => "总览",
            AnalysisView::Technical => "技术面",
            AnalysisView::Fundamental => "基本面",
            AnalysisView::Charts => "图表",
        }
    }
}

impl fmt::Display for AnalysisView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for AnalysisView {
    type Err = SignalBoardError;

    fn from_str(s: &str) -> Result<Self> {
        AnalysisView::ALL
            .iter()
            .copied()
            .find(|view| view.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SignalBoardError::DataError(format!("Unknown view: {}", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_view_case_insensitive() {
        assert_eq!("Charts".parse::<AnalysisView>().unwrap(), AnalysisView::Charts);
        assert_eq!(" technical ".parse::<AnalysisView>().unwrap(), AnalysisView::Technical);
    }

    #[test]
    fn test_parse_unknown_view() {
        let err = "kline".parse::<AnalysisView>().unwrap_err();
        assert!(matches!(err, SignalBoardError::DataError(_)));
    }

    #[test]
    fn test_titles() {
        let titles: Vec<&str> = AnalysisView::ALL.iter().map(|v| v.title()).collect();
        assert_eq!(titles, vec!["总览", "技术面", "基本面", "图表"]);
    }
}
