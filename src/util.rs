use chrono::NaiveDateTime;
use std::path::Path;
use crate::errors::{Result, SignalBoardError};

// 去掉字段中所有的双引号
pub fn strip_quotes(value: &str) -> String {
    value.replace('"', "")
}

/// 解析字符串开头的十进制数字，忽略其后的多余字符。
///
/// `"32.68"` -> 32.68，`" 12abc"` -> 12，`"1e3x"` -> 1000，`"abc"` -> None。
pub fn parse_leading_number(text: &str) -> Option<f64> {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let digits_from = |start: usize| bytes[start..].iter().take_while(|b| b.is_ascii_digit()).count();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }
    if s[end..].starts_with("Infinity") {
        return Some(if bytes[0] == b'-' { f64::NEG_INFINITY } else { f64::INFINITY });
    }

    let int_digits = digits_from(end);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = digits_from(end + 1);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+') | Some(b'-')) {
            exp += 1;
        }
        let exp_digits = digits_from(exp);
        if exp_digits > 0 {
            end = exp + exp_digits;
        }
    }

    s[..end].parse::<f64>().ok()
}

// 保留两位小数
pub fn format_fixed(value: f64) -> String {
    format!("{:.2}", value)
}

// 小数转百分比，保留两位小数
pub fn format_percent(fraction: f64) -> String {
    format!("{:.2}%", fraction * 100.0)
}

/// 名称超过`max_chars`个字符时截断，用作图表标签
pub fn truncate_label(name: &str, max_chars: usize) -> String {
    if name.chars().count() > max_chars {
        name.chars().take(max_chars).collect()
    } else {
        name.to_string()
    }
}

/// 从文件名中提取数据快照时间，如 `xxx_20250701_064525.csv`
pub fn snapshot_time_from_path(path: &Path) -> Result<NaiveDateTime> {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| SignalBoardError::DataError(format!("Invalid file name: {}", path.display())))?;

    let mut parts = stem.rsplitn(3, '_');
    let (time, date) = match (parts.next(), parts.next()) {
        (Some(time), Some(date)) => (time, date),
        _ => {
            return Err(SignalBoardError::DataError(format!(
                "No snapshot timestamp in file name: {}",
                stem
            )))
        }
    };

    Ok(NaiveDateTime::parse_from_str(
        &format!("{}_{}", date, time),
        "%Y%m%d_%H%M%S",
    )?)
}
