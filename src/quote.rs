//! 标识符引用风格：控制表名、列名如何加引号。
//!
//! 全局默认值 + builder 级覆盖：builder 在 `new()` 时读取 [`default_quote_style`]，
//! 之后可用 `set_quote_style` 单独修改。

use std::fmt;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Mutex, MutexGuard};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum QuoteStyle {
    /// `` `name` ``（MySQL）。
    #[default]
    Backtick,
    /// `"name"`（ANSI / PostgreSQL / SQLite）。
    DoubleQuote,
    /// 原样输出。
    None,
}

static DEFAULT_QUOTE_STYLE: AtomicU8 = AtomicU8::new(QuoteStyle::Backtick as u8);
static DEFAULT_QUOTE_STYLE_LOCK: Mutex<()> = Mutex::new(());

impl QuoteStyle {
    fn from_u8(v: u8) -> Self {
        match v {
            1 => Self::DoubleQuote,
            2 => Self::None,
            _ => Self::Backtick,
        }
    }

    fn quote_char(self) -> Option<char> {
        match self {
            Self::Backtick => Some('`'),
            Self::DoubleQuote => Some('"'),
            Self::None => None,
        }
    }

    /// 为标识符加引号。
    ///
    /// 按 `.` 拆分逐段处理（`db.user` => `` `db`.`user` ``）；`*` 与已加引号的段保持原样。
    pub fn quote(self, name: &str) -> String {
        let Some(q) = self.quote_char() else {
            return name.to_string();
        };

        let mut out = String::with_capacity(name.len() + 4);
        for (i, part) in name.split('.').enumerate() {
            if i > 0 {
                out.push('.');
            }
            if part == "*" || part.is_empty() || (part.starts_with(q) && part.ends_with(q)) {
                out.push_str(part);
            } else {
                out.push(q);
                out.push_str(part);
                out.push(q);
            }
        }
        out
    }
}

impl fmt::Display for QuoteStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Backtick => "Backtick",
            Self::DoubleQuote => "DoubleQuote",
            Self::None => "None",
        };
        f.write_str(s)
    }
}

/// 当前全局默认引用风格。
pub fn default_quote_style() -> QuoteStyle {
    QuoteStyle::from_u8(DEFAULT_QUOTE_STYLE.load(Ordering::Relaxed))
}

/// 设置全局默认引用风格，返回旧值。
pub fn set_default_quote_style(style: QuoteStyle) -> QuoteStyle {
    let old = DEFAULT_QUOTE_STYLE.swap(style as u8, Ordering::Relaxed);
    QuoteStyle::from_u8(old)
}

/// 作用域内修改默认引用风格的 RAII guard（持有全局锁，避免并行测试互相干扰）。
pub struct DefaultQuoteStyleGuard {
    _lock: MutexGuard<'static, ()>,
    old: QuoteStyle,
}

impl Drop for DefaultQuoteStyleGuard {
    fn drop(&mut self) {
        set_default_quote_style(self.old);
    }
}

pub fn set_default_quote_style_scoped(style: QuoteStyle) -> DefaultQuoteStyleGuard {
    let lock = DEFAULT_QUOTE_STYLE_LOCK
        .lock()
        .unwrap_or_else(|e| e.into_inner());
    let old = set_default_quote_style(style);
    DefaultQuoteStyleGuard { _lock: lock, old }
}
