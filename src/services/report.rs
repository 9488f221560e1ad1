use serde::Serialize;

use crate::errors::Result;
use crate::models::indicator::{IndicatorReading, IndicatorSet, ReasonReport, SignalLabel};
use crate::models::view::AnalysisView;
use crate::services::dashboard::DashboardState;

const TITLE: &str = "白酒股票技术指标分析系统";
const USAGE_NOTE: &str = "使用说明: RSI > 70为超买，< 30为超卖；PE < 15为低估，> 25为高估。数据仅供参考，投资有风险，入市需谨慎。";

/// JSON输出的内容
#[derive(Debug, Serialize)]
pub struct SelectionReport<'a> {
    pub symbol: Option<&'a str>,
    pub name: Option<&'a str>,
    pub snapshot: Option<String>,
    pub fallback: bool,
    pub view: AnalysisView,
    pub indicators: Option<IndicatorSet>,
    pub reasons: ReasonReport,
}

/// 以JSON格式输出当前选中的股票
pub fn render_json(state: &DashboardState) -> Result<String> {
    let selected = state.selected();
    let report = SelectionReport {
        symbol: selected.map(|s| s.symbol.as_str()),
        name: selected.map(|s| s.name.as_str()),
        snapshot: state
            .records()
            .snapshot()
            .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string()),
        fallback: state.records().is_fallback(),
        view: state.view(),
        indicators: state.indicators(),
        reasons: state.reasons(),
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

/// 渲染看板标题
pub fn render_header(state: &DashboardState) -> String {
    let mut lines = vec![TITLE.to_string(), format!("{:=<60}", "")];
    if let Some(time) = state.records().snapshot() {
        lines.push(format!("数据快照: {}", time.format("%Y-%m-%d %H:%M:%S")));
    }
    if state.records().is_fallback() {
        lines.push("数据来源: 内置示例数据".to_string());
    }
    lines.push(format!("股票数量: {}", state.records().len()));
    lines.join("\n")
}

/// 渲染当前视图
pub fn render_view(state: &DashboardState) -> String {
    match state.view() {
        AnalysisView::Overview => render_overview(state),
        AnalysisView::Technical => render_reasons(
            "技术面分析",
            &state.reasons().technical,
            "暂无技术面分析数据",
        ),
        AnalysisView::Fundamental => render_reasons(
            "基本面分析",
            &state.reasons().fundamental,
            "暂无基本面分析数据",
        ),
        AnalysisView::Charts => render_charts(state),
    }
}

pub fn render_footer() -> String {
    USAGE_NOTE.to_string()
}

fn indicator_line<S: SignalLabel>(title: &str, reading: &IndicatorReading<S>) -> String {
    match reading.advice {
        Some(advice) => format!(
            "{:<10} {:>10}  {} - {}",
            title,
            reading.value,
            reading.label_zh,
            advice.text_zh()
        ),
        None => format!("{:<10} {:>10}  {}", title, reading.value, reading.label_zh),
    }
}

fn render_overview(state: &DashboardState) -> String {
    let (stock, indicators) = match (state.selected(), state.indicators()) {
        (Some(stock), Some(indicators)) => (stock, indicators),
        _ => return "未选择股票".to_string(),
    };

    let lines = vec![
        format!("{} ({})", stock.name, stock.symbol),
        format!("{:-<60}", ""),
        format!("{:<10} ¥{:.2}", "当前价格:", stock.current_price),
        format!("{:<10} {}/10", "技术评分:", stock.technical_score),
        format!("{:<10} {}/10", "基本面评分:", stock.fundamental_score),
        format!("{:<10} {}/20", "综合评分:", stock.total_score),
        String::new(),
        "关键技术指标".to_string(),
        format!("{:-<60}", ""),
        indicator_line("RSI (14):", &indicators.rsi),
        indicator_line("市盈率:", &indicators.pe),
        indicator_line("市净率:", &indicators.pb),
        indicator_line("ROE:", &indicators.roe),
        indicator_line("最大回撤:", &indicators.drawdown),
    ];
    lines.join("\n")
}

fn render_reasons(title: &str, reasons: &[String], empty_note: &str) -> String {
    let mut lines = vec![title.to_string(), format!("{:-<60}", "")];
    if reasons.is_empty() {
        lines.push(empty_note.to_string());
    } else {
        lines.extend(reasons.iter().map(|reason| format!("  * {}", reason)));
    }
    lines.join("\n")
}

fn render_charts(state: &DashboardState) -> String {
    let mut lines = vec!["RSI相对强弱指标对比".to_string(), format!("{:-<60}", "")];
    lines.push(format!("{:<10} {:>10} {:>10} {:>10}", "名称", "RSI", "超买线", "超卖线"));
    for row in state.rsi_chart() {
        lines.push(format!(
            "{:<10} {:>10.2} {:>10} {:>10}",
            row.label, row.rsi, row.overbought, row.oversold
        ));
    }

    lines.push(String::new());
    lines.push("股票综合评分对比".to_string());
    lines.push(format!("{:-<60}", ""));
    lines.push(format!("{:<10} {:>10} {:>10} {:>10}", "名称", "技术评分", "基本面评分", "综合评分"));
    for row in state.score_chart() {
        lines.push(format!(
            "{:<10} {:>10} {:>10} {:>10}",
            row.label, row.technical_score, row.fundamental_score, row.total_score
        ));
    }

    lines.push(String::new());
    lines.push("PE-PB估值散点图".to_string());
    lines.push(format!("{:-<60}", ""));
    lines.push(format!("{:<10} {:>10} {:>10}", "名称", "PE", "PB"));
    for point in state.valuation_points() {
        lines.push(format!("{:<10} {:>10.2} {:>10.2}", point.label, point.pe, point.pb));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::loader::RecordSet;

    fn fallback_state() -> DashboardState {
        DashboardState::new(RecordSet::fallback(), &Config::new())
    }

    #[test]
    fn test_overview_lines() {
        let text = render_view(&fallback_state());
        assert!(text.contains("贵州茅台 (600519.SH)"));
        assert!(text.contains("¥1405.57"));
        assert!(text.contains("6.5/10"));
        assert!(text.contains("9/10"));
        assert!(text.contains("15.5/20"));
        assert!(text.contains("中性 - 观望"));
        assert!(text.contains("28.00%"));
        assert!(text.contains("中度回撤"));
    }

    #[test]
    fn test_overview_without_selection() {
        let mut state = fallback_state();
        state.select("000000.SZ");
        assert_eq!(render_view(&state), "未选择股票");
    }

    #[test]
    fn test_reason_views() {
        let mut state = fallback_state();
        state.set_view(AnalysisView::Technical);
        // 空理由文本拆分后仍有一个空条目
        assert!(!render_view(&state).contains("暂无技术面分析数据"));

        state.select("000000.SZ");
        state.set_view(AnalysisView::Fundamental);
        assert!(render_view(&state).contains("暂无基本面分析数据"));
    }

    #[test]
    fn test_charts_view() {
        let mut state = fallback_state();
        state.set_view(AnalysisView::Charts);
        let text = render_view(&state);
        assert!(text.contains("RSI相对强弱指标对比"));
        assert!(text.contains("贵州茅台"));
        assert!(text.contains("7.45"));
    }

    #[test]
    fn test_header_marks_fallback() {
        let header = render_header(&fallback_state());
        assert!(header.contains("内置示例数据"));
        assert!(header.contains("股票数量: 1"));
    }

    #[test]
    fn test_json_payload() {
        let json = render_json(&fallback_state()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["symbol"], "600519.SH");
        assert_eq!(value["fallback"], true);
        assert_eq!(value["view"], "overview");
        assert_eq!(value["indicators"]["rsi"]["signal"], "neutral");
        assert_eq!(value["indicators"]["rsi"]["advice"], "watch");
        assert_eq!(value["indicators"]["pb"]["label"], "High");
        assert_eq!(value["indicators"]["roe"]["value"], "28.00%");
        assert!(value["indicators"]["pe"].get("advice").is_none());
        assert_eq!(value["reasons"]["technical"][0], "");
    }
}
