use crate::config::Config;
use crate::loader::RecordSet;
use crate::models::chart::{RsiChartRow, ScoreChartRow, ValuationPoint};
use crate::models::indicator::{IndicatorSet, ReasonReport};
use crate::models::stock::StockRecord;
use crate::models::view::AnalysisView;
use crate::services::classifier::{self, RSI_OVERBOUGHT, RSI_OVERSOLD};
use crate::util;
use log::{info, warn};

/// 看板状态：记录集、当前选中的股票和当前视图
pub struct DashboardState {
    records: RecordSet,
    selected: Option<usize>,
    view: AnalysisView,
    chart_label_len: usize,
}

impl DashboardState {
    /// 创建看板状态，默认选中第一只股票
    pub fn new(records: RecordSet, config: &Config) -> Self {
        let selected = if records.is_empty() { None } else { Some(0) };
        Self {
            records,
            selected,
            view: config.default_view,
            chart_label_len: config.chart_label_len,
        }
    }

    pub fn records(&self) -> &RecordSet {
        &self.records
    }

    pub fn view(&self) -> AnalysisView {
        self.view
    }

    pub fn set_view(&mut self, view: AnalysisView) {
        self.view = view;
    }

    pub fn selected(&self) -> Option<&StockRecord> {
        self.selected.map(|idx| &self.records.all()[idx])
    }

    /// 按代码切换股票；找不到时清空选中状态并返回false
    pub fn select(&mut self, symbol: &str) -> bool {
        self.selected = self.records.index_of(symbol);
        match self.selected() {
            Some(stock) => {
                info!("Selected {} ({})", stock.name, stock.symbol);
                true
            }
            None => {
                warn!("Stock not found: {}", symbol);
                false
            }
        }
    }

    pub fn indicators(&self) -> Option<IndicatorSet> {
        self.selected().map(classifier::classify)
    }

    /// 未选中股票时两个列表都为空
    pub fn reasons(&self) -> ReasonReport {
        self.selected().map(classifier::reasons).unwrap_or_default()
    }

    fn label(&self, stock: &StockRecord) -> String {
        util::truncate_label(&stock.name, self.chart_label_len)
    }

    pub fn score_chart(&self) -> Vec<ScoreChartRow> {
        self.records
            .all()
            .iter()
            .map(|stock| ScoreChartRow {
                label: self.label(stock),
                price: stock.current_price,
                rsi: stock.rsi,
                pe: stock.pe_ratio,
                pb: stock.pb_ratio,
                technical_score: stock.technical_score,
                fundamental_score: stock.fundamental_score,
                total_score: stock.total_score,
            })
            .collect()
    }

    pub fn rsi_chart(&self) -> Vec<RsiChartRow> {
        self.records
            .all()
            .iter()
            .map(|stock| RsiChartRow {
                label: self.label(stock),
                rsi: stock.rsi,
                overbought: RSI_OVERBOUGHT,
                oversold: RSI_OVERSOLD,
            })
            .collect()
    }

    pub fn valuation_points(&self) -> Vec<ValuationPoint> {
        self.records
            .all()
            .iter()
            .map(|stock| ValuationPoint {
                label: self.label(stock),
                pe: stock.pe_ratio,
                pb: stock.pb_ratio,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::indicator::RsiSignal;

    fn state() -> DashboardState {
        let records = RecordSet::from_text(
            "symbol,name,rsi,pe_ratio,pb_ratio,technical_reasons\n\
             600519.SH,贵州茅台,32.68,19.82,7.45,['缩量回调']\n\
             000568.SZ,泸州老窖股份,75.1,14.2,1.2,\n\
             600809.SH,山西汾酒,28,22,2.5,['RSI超卖'",
        );
        DashboardState::new(records, &Config::new())
    }

    #[test]
    fn test_first_record_selected_by_default() {
        let state = state();
        assert_eq!(state.selected().unwrap().symbol, "600519.SH");
        assert_eq!(state.view(), AnalysisView::Overview);
    }

    #[test]
    fn test_empty_set_has_no_selection() {
        let state = DashboardState::new(RecordSet::from_text("symbol,name"), &Config::new());
        assert!(state.selected().is_none());
        assert!(state.indicators().is_none());
        assert_eq!(state.reasons(), ReasonReport::default());
        assert!(state.rsi_chart().is_empty());
    }

    #[test]
    fn test_select_and_clear() {
        let mut state = state();
        assert!(state.select("000568.SZ"));
        assert_eq!(state.indicators().unwrap().rsi.signal, RsiSignal::Overbought);

        assert!(!state.select("999999.SH"));
        assert!(state.selected().is_none());
        assert!(state.reasons().technical.is_empty());
    }

    #[test]
    fn test_select_duplicate_symbol_takes_first() {
        let records = RecordSet::from_text("symbol,name\nB,乙\nA,甲一\nA,甲二");
        let mut state = DashboardState::new(records, &Config::new());
        assert!(state.select("A"));
        assert_eq!(state.selected().unwrap().name, "甲一");
    }

    #[test]
    fn test_reasons_for_selection() {
        let mut state = state();
        assert_eq!(state.reasons().technical, vec!["缩量回调"]);
        state.select("000568.SZ");
        assert_eq!(state.reasons().technical, vec![""]);
    }

    #[test]
    fn test_set_view() {
        let mut state = state();
        state.set_view(AnalysisView::Charts);
        assert_eq!(state.view(), AnalysisView::Charts);
    }

    #[test]
    fn test_chart_series() {
        let state = state();

        let labels: Vec<String> = state.score_chart().into_iter().map(|r| r.label).collect();
        assert_eq!(labels, vec!["贵州茅台", "泸州老窖", "山西汾酒"]);

        let rsi = state.rsi_chart();
        assert_eq!(rsi[1].rsi, 75.1);
        assert!(rsi.iter().all(|r| r.overbought == 70.0 && r.oversold == 30.0));

        let points = state.valuation_points();
        assert_eq!(points[2].pe, 22.0);
        assert_eq!(points[2].pb, 2.5);
    }

    #[test]
    fn test_chart_label_len_from_config() {
        let config = Config::new().with_chart_label_len(2);
        let state = DashboardState::new(RecordSet::fallback(), &config);
        assert_eq!(state.score_chart()[0].label, "贵州");
    }
}
