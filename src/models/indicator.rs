use serde::Serialize;

/// 前端配色提示
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorHint {
    Red,
    Green,
    Gray,
    Blue,
    Yellow,
}

impl ColorHint {
    pub fn css_class(&self) -> &'static str {
        match self {
            ColorHint::Red => "text-red-500",
            ColorHint::Green => "text-green-500",
            ColorHint::Gray => "text-gray-500",
            ColorHint::Blue => "text-blue-500",
            ColorHint::Yellow => "text-yellow-500",
        }
    }
}

/// 操作建议（仅RSI给出）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Advice {
    ConsiderSell,
    ConsiderBuy,
    Watch,
}

impl Advice {
    pub fn text(&self) -> &'static str {
        match self {
            Advice::ConsiderSell => "suggest sell",
            Advice::ConsiderBuy => "suggest buy",
            Advice::Watch => "hold/watch",
        }
    }

    pub fn text_zh(&self) -> &'static str {
        match self {
            Advice::ConsiderSell => "考虑卖出",
            Advice::ConsiderBuy => "考虑买入",
            Advice::Watch => "观望",
        }
    }
}

/// 信号标签的公共接口
pub trait SignalLabel {
    fn label(&self) -> &'static str;
    fn label_zh(&self) -> &'static str;
    fn color(&self) -> ColorHint;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RsiSignal {
    Overbought,
    Oversold,
    Neutral,
}

impl RsiSignal {
    pub fn advice(&self) -> Advice {
        match self {
            RsiSignal::Overbought => Advice::ConsiderSell,
            RsiSignal::Oversold => Advice::ConsiderBuy,
            RsiSignal::Neutral => Advice::Watch,
        }
    }
}

impl SignalLabel for RsiSignal {
    fn label(&self) -> &'static str {
        match self {
            RsiSignal::Overbought => "Overbought",
            RsiSignal::Oversold => "Oversold",
            RsiSignal::Neutral => "Neutral",
        }
    }

    fn label_zh(&self) -> &'static str {
        match self {
            RsiSignal::Overbought => "超买",
            RsiSignal::Oversold => "超卖",
            RsiSignal::Neutral => "中性",
        }
    }

    fn color(&self) -> ColorHint {
        match self {
            RsiSignal::Overbought => ColorHint::Red,
            RsiSignal::Oversold => ColorHint::Green,
            RsiSignal::Neutral => ColorHint::Gray,
        }
    }
}

/// 市盈率估值区间
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PeSignal {
    Overvalued,
    Undervalued,
    Fair,
}

impl SignalLabel for PeSignal {
    fn label(&self) -> &'static str {
        match self {
            PeSignal::Overvalued => "Overvalued",
            PeSignal::Undervalued => "Undervalued",
            PeSignal::Fair => "Fair",
        }
    }

    fn label_zh(&self) -> &'static str {
        match self {
            PeSignal::Overvalued => "高估",
            PeSignal::Undervalued => "低估",
            PeSignal::Fair => "合理",
        }
    }

    fn color(&self) -> ColorHint {
        match self {
            PeSignal::Overvalued => ColorHint::Red,
            PeSignal::Undervalued => ColorHint::Green,
            PeSignal::Fair => ColorHint::Blue,
        }
    }
}

/// 市净率区间
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PbSignal {
    High,
    Low,
    Normal,
}

impl SignalLabel for PbSignal {
    fn label(&self) -> &'static str {
        match self {
            PbSignal::High => "High",
            PbSignal::Low => "Low",
            PbSignal::Normal => "Normal",
        }
    }

    fn label_zh(&self) -> &'static str {
        match self {
            PbSignal::High => "偏高",
            PbSignal::Low => "偏低",
            PbSignal::Normal => "正常",
        }
    }

    fn color(&self) -> ColorHint {
        match self {
            PbSignal::High => ColorHint::Red,
            PbSignal::Low => ColorHint::Green,
            PbSignal::Normal => ColorHint::Blue,
        }
    }
}

/// ROE质量档位
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RoeTier {
    Excellent,
    Good,
    Average,
}

impl SignalLabel for RoeTier {
    fn label(&self) -> &'static str {
        match self {
            RoeTier::Excellent => "Excellent",
            RoeTier::Good => "Good",
            RoeTier::Average => "Average",
        }
    }

    fn label_zh(&self) -> &'static str {
        match self {
            RoeTier::Excellent => "优秀",
            RoeTier::Good => "良好",
            RoeTier::Average => "一般",
        }
    }

    fn color(&self) -> ColorHint {
        match self {
            RoeTier::Excellent => ColorHint::Green,
            RoeTier::Good => ColorHint::Blue,
            RoeTier::Average => ColorHint::Gray,
        }
    }
}

/// 最大回撤严重程度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DrawdownSeverity {
    Deep,
    Moderate,
    Mild,
}

impl SignalLabel for DrawdownSeverity {
    fn label(&self) -> &'static str {
        match self {
            DrawdownSeverity::Deep => "Deep pullback",
            DrawdownSeverity::Moderate => "Moderate pullback",
            DrawdownSeverity::Mild => "Mild pullback",
        }
    }

    fn label_zh(&self) -> &'static str {
        match self {
            DrawdownSeverity::Deep => "深度回撤",
            DrawdownSeverity::Moderate => "中度回撤",
            DrawdownSeverity::Mild => "轻微回撤",
        }
    }

    fn color(&self) -> ColorHint {
        match self {
            DrawdownSeverity::Deep => ColorHint::Red,
            DrawdownSeverity::Moderate => ColorHint::Yellow,
            DrawdownSeverity::Mild => ColorHint::Green,
        }
    }
}

/// 单个指标的展示结果
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndicatorReading<S> {
    pub value: String,
    pub signal: S,
    pub label: &'static str,
    pub label_zh: &'static str,
    pub color: ColorHint,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advice: Option<Advice>,
}

impl<S: SignalLabel> IndicatorReading<S> {
    pub fn new(value: String, signal: S) -> Self {
        Self {
            value,
            label: signal.label(),
            label_zh: signal.label_zh(),
            color: signal.color(),
            signal,
            advice: None,
        }
    }

    pub fn with_advice(mut self, advice: Advice) -> Self {
        self.advice = Some(advice);
        self
    }
}

/// 一只股票的五项指标
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndicatorSet {
    pub rsi: IndicatorReading<RsiSignal>,
    pub pe: IndicatorReading<PeSignal>,
    pub pb: IndicatorReading<PbSignal>,
    pub roe: IndicatorReading<RoeTier>,
    pub drawdown: IndicatorReading<DrawdownSeverity>,
}

/// 技术面/基本面理由列表
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ReasonReport {
    pub technical: Vec<String>,
    pub fundamental: Vec<String>,
}
