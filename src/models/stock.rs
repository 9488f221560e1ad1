use serde::Serialize;
use std::collections::BTreeMap;

/// 字段类型：文本或数值
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FieldKind {
    Text,
    Number,
}

/// 文本列
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextField {
    Symbol,
    Name,
    TechnicalReasons,
    FundamentalReasons,
}

/// 数值列
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumberField {
    CurrentPrice,
    Rsi,
    PeRatio,
    PbRatio,
    Roe,
    MaxDrawdown,
    TechnicalScore,
    FundamentalScore,
    TotalScore,
}

/// CSV中已知的列，按类型区分
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordField {
    Text(TextField),
    Number(NumberField),
}

/// 声明式字段表：列名 -> 字段，解析时按表头查一次
pub const RECORD_SCHEMA: [(&str, RecordField); 13] = [
    ("symbol", RecordField::Text(TextField::Symbol)),
    ("name", RecordField::Text(TextField::Name)),
    ("current_price", RecordField::Number(NumberField::CurrentPrice)),
    ("rsi", RecordField::Number(NumberField::Rsi)),
    ("pe_ratio", RecordField::Number(NumberField::PeRatio)),
    ("pb_ratio", RecordField::Number(NumberField::PbRatio)),
    ("roe", RecordField::Number(NumberField::Roe)),
    ("max_drawdown", RecordField::Number(NumberField::MaxDrawdown)),
    ("technical_score", RecordField::Number(NumberField::TechnicalScore)),
    ("fundamental_score", RecordField::Number(NumberField::FundamentalScore)),
    ("total_score", RecordField::Number(NumberField::TotalScore)),
    ("technical_reasons", RecordField::Text(TextField::TechnicalReasons)),
    ("fundamental_reasons", RecordField::Text(TextField::FundamentalReasons)),
];

impl RecordField {
    /// 按列名查找字段，未知列返回None
    pub fn lookup(column: &str) -> Option<RecordField> {
        RECORD_SCHEMA
            .iter()
            .find(|(name, _)| *name == column)
            .map(|(_, field)| *field)
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            RecordField::Text(_) => FieldKind::Text,
            RecordField::Number(_) => FieldKind::Number,
        }
    }
}

/// 单只股票的指标快照
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StockRecord {
    pub symbol: String,
    pub name: String,
    pub current_price: f64,
    pub rsi: f64,
    pub pe_ratio: f64,
    pub pb_ratio: f64,
    pub roe: f64,          // 小数形式，0.28 表示 28%
    pub max_drawdown: f64, // 小数形式，-0.35 表示 -35%
    pub technical_score: f64,
    pub fundamental_score: f64,
    pub total_score: f64,
    pub technical_reasons: String,
    pub fundamental_reasons: String,
    /// 字段表以外的列，原样保留
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<String, String>,
}

impl StockRecord {
    pub(crate) fn set_text(&mut self, field: TextField, value: String) {
        match field {
            TextField::Symbol => self.symbol = value,
            TextField::Name => self.name = value,
            TextField::TechnicalReasons => self.technical_reasons = value,
            TextField::FundamentalReasons => self.fundamental_reasons = value,
        }
    }

    pub(crate) fn set_number(&mut self, field: NumberField, value: f64) {
        match field {
            NumberField::CurrentPrice => self.current_price = value,
            NumberField::Rsi => self.rsi = value,
            NumberField::PeRatio => self.pe_ratio = value,
            NumberField::PbRatio => self.pb_ratio = value,
            NumberField::Roe => self.roe = value,
            NumberField::MaxDrawdown => self.max_drawdown = value,
            NumberField::TechnicalScore => self.technical_score = value,
            NumberField::FundamentalScore => self.fundamental_score = value,
            NumberField::TotalScore => self.total_score = value,
        }
    }

    /// 数据文件无法读取时使用的内置示例
    pub fn sample() -> Self {
        Self {
            symbol: "600519.SH".to_string(),
            name: "贵州茅台".to_string(),
            current_price: 1405.57,
            rsi: 32.68,
            pe_ratio: 19.82,
            pb_ratio: 7.45,
            roe: 0.28,
            max_drawdown: -0.35,
            technical_score: 6.5,
            fundamental_score: 9.0,
            total_score: 15.5,
            ..Default::default()
        }
    }
}
