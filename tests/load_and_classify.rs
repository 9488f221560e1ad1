//! 从CSV文件加载并生成指标信号的集成测试

use egostrategy_signalboard::config::Config;
use egostrategy_signalboard::loader::{RecordSet, RecordSource};
use egostrategy_signalboard::models::indicator::{PbSignal, PeSignal, RoeTier, RsiSignal};
use egostrategy_signalboard::models::view::AnalysisView;
use egostrategy_signalboard::services::report;
use egostrategy_signalboard::{classify, split_reasons, DashboardState};
use std::path::PathBuf;

fn fixture() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/data/white_wine_stock_analysis_20250701_064525.csv")
}

#[test]
fn test_load_fixture_preserves_order() {
    let set = RecordSet::load_from_file(fixture());
    assert!(!set.is_fallback());
    assert_eq!(set.source(), &RecordSource::File(fixture()));

    let symbols: Vec<&str> = set.all().iter().map(|r| r.symbol.as_str()).collect();
    assert_eq!(symbols, vec!["600519.SH", "002304.SZ", "603369.SH", "600702.SH"]);

    let moutai = set.get_by_symbol("600519.SH").unwrap();
    assert_eq!(moutai.name, "贵州茅台");
    assert_eq!(moutai.current_price, 1405.57);
    assert_eq!(moutai.fundamental_reasons, "['ROE优秀']");
}

#[test]
fn test_fixture_snapshot_time() {
    let set = RecordSet::load_from_file(fixture());
    let snapshot = set.snapshot().unwrap();
    assert_eq!(snapshot.format("%Y-%m-%d %H:%M:%S").to_string(), "2025-07-01 06:45:25");
}

#[test]
fn test_non_numeric_rsi_is_zero() {
    let set = RecordSet::load_from_file(fixture());
    let stock = set.get_by_symbol("600702.SH").unwrap();
    assert_eq!(stock.rsi, 0.0);
    assert_eq!(stock.pe_ratio, 27.8);

    let indicators = classify(stock);
    assert_eq!(indicators.rsi.signal, RsiSignal::Oversold);
    assert_eq!(indicators.pe.signal, PeSignal::Overvalued);
    assert_eq!(indicators.roe.signal, RoeTier::Average);
    assert_eq!(indicators.drawdown.label_zh, "深度回撤");
}

#[test]
fn test_classify_loaded_records() {
    let set = RecordSet::load_from_file(fixture());

    let yanghe = classify(set.get_by_symbol("002304.SZ").unwrap());
    assert_eq!(yanghe.rsi.label, "Oversold");
    assert_eq!(yanghe.pe.signal, PeSignal::Undervalued);
    assert_eq!(yanghe.pb.signal, PbSignal::Low);
    assert_eq!(yanghe.roe.label, "Good");
    assert_eq!(yanghe.drawdown.value, "-61.00%");

    let jinshiyuan = classify(set.get_by_symbol("603369.SH").unwrap());
    assert_eq!(jinshiyuan.rsi.label_zh, "超买");
    assert_eq!(jinshiyuan.pb.signal, PbSignal::High);
    assert_eq!(jinshiyuan.roe.signal, RoeTier::Excellent);
}

#[test]
fn test_minimal_table_from_text() {
    let set = RecordSet::from_text("symbol,name,rsi\n\"600519.SH\",\"贵州茅台\",32.68");
    assert_eq!(set.len(), 1);
    let stock = set.first().unwrap();
    assert_eq!(stock.symbol, "600519.SH");
    assert_eq!(stock.rsi, 32.68);
    // 阈值为严格的 < 30，32.68 落在中性区间
    assert_eq!(classify(stock).rsi.label, "Neutral");
    assert_eq!(classify(stock).rsi.label_zh, "中性");
}

#[test]
fn test_split_reasons_examples() {
    assert_eq!(split_reasons("['a', 'b']"), vec!["a".to_string(), "b".to_string()]);
    assert_eq!(split_reasons(""), vec![String::new()]);
}

#[tokio::test]
async fn test_async_load_and_dashboard() {
    let set = RecordSet::load(fixture()).await;
    let mut state = DashboardState::new(set, &Config::new());

    assert_eq!(state.selected().unwrap().symbol, "600519.SH");
    assert!(state.select("603369.SH"));
    assert_eq!(state.reasons().technical, vec!["RSI超买"]);
    assert_eq!(state.reasons().fundamental, vec![""]);

    state.set_view(AnalysisView::Charts);
    let charts = report::render_view(&state);
    assert!(charts.contains("舍得酒业"));
    assert_eq!(state.rsi_chart().len(), 4);
}

#[tokio::test]
async fn test_unreadable_file_uses_sample() {
    let set = RecordSet::load(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data/missing.csv")).await;
    assert!(set.is_fallback());
    assert_eq!(set.len(), 1);

    let state = DashboardState::new(set, &Config::new());
    let json = report::render_json(&state).unwrap();
    assert!(json.contains("\"symbol\": \"600519.SH\""));
    assert!(json.contains("\"fallback\": true"));
}
