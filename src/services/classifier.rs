use crate::models::indicator::{
    DrawdownSeverity, IndicatorReading, IndicatorSet, PbSignal, PeSignal, ReasonReport, RoeTier,
    RsiSignal,
};
use crate::models::stock::StockRecord;
use crate::util::{format_fixed, format_percent};

pub const RSI_OVERBOUGHT: f64 = 70.0;
pub const RSI_OVERSOLD: f64 = 30.0;
pub const PE_OVERVALUED: f64 = 25.0;
pub const PE_UNDERVALUED: f64 = 15.0;
pub const PB_HIGH: f64 = 3.0;
pub const PB_LOW: f64 = 1.5;
// ROE与回撤阈值均为百分比
pub const ROE_EXCELLENT_PCT: f64 = 15.0;
pub const ROE_GOOD_PCT: f64 = 10.0;
pub const DRAWDOWN_DEEP_PCT: f64 = -50.0;
pub const DRAWDOWN_MODERATE_PCT: f64 = -30.0;

// 所有阈值比较均为严格不等，边界值落入“其他”分支

pub fn rsi_signal(rsi: f64) -> RsiSignal {
    if rsi > RSI_OVERBOUGHT {
        RsiSignal::Overbought
    } else if rsi < RSI_OVERSOLD {
        RsiSignal::Oversold
    } else {
        RsiSignal::Neutral
    }
}

pub fn pe_signal(pe: f64) -> PeSignal {
    if pe > PE_OVERVALUED {
        PeSignal::Overvalued
    } else if pe < PE_UNDERVALUED {
        PeSignal::Undervalued
    } else {
        PeSignal::Fair
    }
}

pub fn pb_signal(pb: f64) -> PbSignal {
    if pb > PB_HIGH {
        PbSignal::High
    } else if pb < PB_LOW {
        PbSignal::Low
    } else {
        PbSignal::Normal
    }
}

/// `roe_pct` 为百分比数值，如 28.0
pub fn roe_tier(roe_pct: f64) -> RoeTier {
    if roe_pct > ROE_EXCELLENT_PCT {
        RoeTier::Excellent
    } else if roe_pct > ROE_GOOD_PCT {
        RoeTier::Good
    } else {
        RoeTier::Average
    }
}

/// `drawdown_pct` 为百分比数值，如 -35.0
pub fn drawdown_severity(drawdown_pct: f64) -> DrawdownSeverity {
    if drawdown_pct < DRAWDOWN_DEEP_PCT {
        DrawdownSeverity::Deep
    } else if drawdown_pct < DRAWDOWN_MODERATE_PCT {
        DrawdownSeverity::Moderate
    } else {
        DrawdownSeverity::Mild
    }
}

/// 计算一只股票的五项指标信号
pub fn classify(stock: &StockRecord) -> IndicatorSet {
    let rsi = rsi_signal(stock.rsi);

    IndicatorSet {
        rsi: IndicatorReading::new(format_fixed(stock.rsi), rsi).with_advice(rsi.advice()),
        pe: IndicatorReading::new(format_fixed(stock.pe_ratio), pe_signal(stock.pe_ratio)),
        pb: IndicatorReading::new(format_fixed(stock.pb_ratio), pb_signal(stock.pb_ratio)),
        roe: IndicatorReading::new(format_percent(stock.roe), roe_tier(stock.roe * 100.0)),
        drawdown: IndicatorReading::new(
            format_percent(stock.max_drawdown),
            drawdown_severity(stock.max_drawdown * 100.0),
        ),
    }
}

/// 拆分形如 `['a', 'b']` 的理由文本。
///
/// 去掉方括号和单引号后按逗号切分并逐项去空白；空字符串得到 `[""]`。
pub fn split_reasons(text: &str) -> Vec<String> {
    text.replace(&['[', ']', '\''][..], "")
        .split(',')
        .map(|s| s.trim().to_string())
        .collect()
}

pub fn reasons(stock: &StockRecord) -> ReasonReport {
    ReasonReport {
        technical: split_reasons(&stock.technical_reasons),
        fundamental: split_reasons(&stock.fundamental_reasons),
    }
}
