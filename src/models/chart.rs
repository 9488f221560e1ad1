use serde::Serialize;

/// 综合评分柱状图的一行
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreChartRow {
    pub label: String,
    pub price: f64,
    pub rsi: f64,
    pub pe: f64,
    pub pb: f64,
    pub technical_score: f64,
    pub fundamental_score: f64,
    pub total_score: f64,
}

/// RSI对比图的一行，附带超买/超卖参考线
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RsiChartRow {
    pub label: String,
    pub rsi: f64,
    pub overbought: f64,
    pub oversold: f64,
}

/// PE-PB散点
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValuationPoint {
    pub label: String,
    pub pe: f64,
    pub pb: f64,
}
