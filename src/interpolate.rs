//! 插值：把 `sql` 中的 `?` 依次替换为参数的 SQL 字面量。
//!
//! 安全警告：插值永远不如参数化安全，只应用于日志、调试，或不支持参数化的驱动。

use crate::placeholder::{Segment, for_each_segment};
use crate::value::{Arg, SqlValue};
use crate::valuer::ValuerError;
use time::macros::format_description;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum InterpolateError {
    #[error("not enough args when interpolating")]
    MissingArgs,
    #[error("{0} args left unused after interpolating")]
    UnusedArgs(usize),
    #[error("failed to format datetime arg")]
    Format,
    #[error(transparent)]
    Valuer(#[from] ValuerError),
}

/// 按顺序把每个引号外的 `?` 替换为对应参数；参数个数必须与占位符个数相同。
pub fn interpolate(sql: &str, args: &[Arg]) -> Result<String, InterpolateError> {
    let mut out = String::with_capacity(sql.len() + args.len() * 20);
    let mut rest = args.iter();

    for_each_segment::<InterpolateError>(sql, |seg| {
        match seg {
            Segment::Text(s) => out.push_str(s),
            Segment::Placeholder => {
                let arg = rest.next().ok_or(InterpolateError::MissingArgs)?;
                encode_value(&mut out, &arg.resolve()?)?;
            }
        }
        Ok(())
    })?;

    match rest.len() {
        0 => Ok(out),
        n => Err(InterpolateError::UnusedArgs(n)),
    }
}

fn encode_value(out: &mut String, v: &SqlValue) -> Result<(), InterpolateError> {
    match v {
        SqlValue::Null => out.push_str("NULL"),
        SqlValue::Bool(b) => out.push_str(if *b { "TRUE" } else { "FALSE" }),
        SqlValue::I64(n) => out.push_str(&n.to_string()),
        SqlValue::U64(n) => out.push_str(&n.to_string()),
        SqlValue::F64(n) => out.push_str(&n.to_string()),
        SqlValue::String(s) => quote_string(out, s),
        SqlValue::Bytes(b) => {
            out.push_str("X'");
            push_hex(out, b);
            out.push('\'');
        }
        SqlValue::DateTime(dt) => {
            let s = dt
                .format(format_description!(
                    "[year]-[month]-[day] [hour]:[minute]:[second].[subsecond digits:6]"
                ))
                .map_err(|_| InterpolateError::Format)?;
            out.push('\'');
            out.push_str(&s);
            out.push('\'');
        }
    }
    Ok(())
}

fn push_hex(out: &mut String, data: &[u8]) {
    const HEX: &[u8; 16] = b"0123456789ABCDEF";
    for &b in data {
        out.push(HEX[(b >> 4) as usize] as char);
        out.push(HEX[(b & 0xF) as usize] as char);
    }
}

fn quote_string(out: &mut String, s: &str) {
    out.push('\'');
    for ch in s.chars() {
        match ch {
            '\u{0000}' => out.push_str("\\0"),
            '\u{0008}' => out.push_str("\\b"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{001a}' => out.push_str("\\Z"),
            '\'' => out.push_str("\\'"),
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            _ => out.push(ch),
        }
    }
    out.push('\'');
}
