use chrono::NaiveDateTime;
use log::{debug, error, info};

use crate::errors::Result;
use crate::models::stock::{RecordField, StockRecord};
use crate::util;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// 记录集的来源
#[derive(Debug, Clone, PartialEq)]
pub enum RecordSource {
    File(PathBuf),
    Text,
    Fallback,
}

/// 解析CSV文本为股票记录。
///
/// 按行切分后逐行用逗号切分，不处理引号内的逗号；表头第i列对应数据第i列。
/// 字段表中的数值列解析失败时取0，其余列去掉双引号后按文本保存。空行跳过。
pub fn parse_records(text: &str) -> Vec<StockRecord> {
    let mut lines = text.split('\n').map(|line| line.strip_suffix('\r').unwrap_or(line));

    let headers: Vec<&str> = match lines.next() {
        Some(header) => header.split(',').collect(),
        None => return Vec::new(),
    };

    // 每列只查一次字段表
    let plan: Vec<Option<RecordField>> = headers.iter().map(|h| RecordField::lookup(h)).collect();

    lines
        .filter(|line| !line.trim().is_empty())
        .map(|line| parse_row(&headers, &plan, line))
        .collect()
}

fn parse_row(headers: &[&str], plan: &[Option<RecordField>], line: &str) -> StockRecord {
    let values: Vec<&str> = line.split(',').collect();
    let mut record = StockRecord::default();

    for (index, header) in headers.iter().enumerate() {
        let raw = values.get(index).copied();
        match plan[index] {
            Some(RecordField::Number(field)) => {
                let parsed = raw
                    .map(util::strip_quotes)
                    .and_then(|value| util::parse_leading_number(&value));
                if parsed.is_none() {
                    debug!("Field {} is not numeric ({:?}), defaulting to 0", header, raw);
                }
                record.set_number(field, parsed.unwrap_or(0.0));
            }
            Some(RecordField::Text(field)) => {
                record.set_text(field, raw.map(util::strip_quotes).unwrap_or_default());
            }
            None => {
                record
                    .extra
                    .insert(header.to_string(), raw.map(util::strip_quotes).unwrap_or_default());
            }
        }
    }

    record
}

/// 已加载的股票记录，带代码索引
pub struct RecordSet {
    records: Vec<StockRecord>,
    symbol_index: HashMap<String, usize>,
    source: RecordSource,
    snapshot: Option<NaiveDateTime>,
}

impl RecordSet {
    /// 从CSV文本创建记录集
    pub fn from_text(text: &str) -> Self {
        Self::build(parse_records(text), RecordSource::Text, None)
    }

    /// 内置示例数据，只有一条记录
    pub fn fallback() -> Self {
        Self::build(vec![StockRecord::sample()], RecordSource::Fallback, None)
    }

    /// 同步读取文件，读取失败时退回示例数据
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(text) => Self::from_file_text(path, &text),
            Err(e) => Self::fallback_for(path, e.into()),
        }
    }

    /// 异步读取文件，读取失败时退回示例数据
    pub async fn load<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match read_source(path).await {
            Ok(text) => Self::from_file_text(path, &text),
            Err(e) => Self::fallback_for(path, e),
        }
    }

    fn from_file_text(path: &Path, text: &str) -> Self {
        let records = parse_records(text);
        info!("Loaded {} records from {}", records.len(), path.display());

        let snapshot = match util::snapshot_time_from_path(path) {
            Ok(time) => Some(time),
            Err(e) => {
                debug!("No snapshot time for {}: {}", path.display(), e);
                None
            }
        };

        Self::build(records, RecordSource::File(path.to_path_buf()), snapshot)
    }

    fn fallback_for(path: &Path, err: crate::errors::SignalBoardError) -> Self {
        error!("数据加载失败: {} ({})", path.display(), err);
        info!("Using built-in sample record");
        Self::fallback()
    }

    fn build(records: Vec<StockRecord>, source: RecordSource, snapshot: Option<NaiveDateTime>) -> Self {
        let mut set = Self {
            records,
            symbol_index: HashMap::new(),
            source,
            snapshot,
        };
        set.rebuild_index();
        set
    }

    /// 重建索引，重复代码以第一条为准
    fn rebuild_index(&mut self) {
        self.symbol_index.clear();
        for (i, record) in self.records.iter().enumerate() {
            self.symbol_index.entry(record.symbol.clone()).or_insert(i);
        }
    }

    pub fn all(&self) -> &[StockRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn first(&self) -> Option<&StockRecord> {
        self.records.first()
    }

    /// 代码对应的记录下标，重复代码取第一条
    pub fn index_of(&self, symbol: &str) -> Option<usize> {
        self.symbol_index.get(symbol).copied()
    }

    pub fn get_by_symbol(&self, symbol: &str) -> Option<&StockRecord> {
        self.index_of(symbol).map(|idx| &self.records[idx])
    }

    pub fn source(&self) -> &RecordSource {
        &self.source
    }

    pub fn is_fallback(&self) -> bool {
        self.source == RecordSource::Fallback
    }

    /// 文件名中的数据快照时间
    pub fn snapshot(&self) -> Option<NaiveDateTime> {
        self.snapshot
    }
}

async fn read_source(path: &Path) -> Result<String> {
    Ok(tokio::fs::read_to_string(path).await?)
}
