//! 语句构建错误。

use std::fmt;

/// 语句种类，用于错误信息。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatementKind {
    Select,
    Insert,
    Update,
    Delete,
}

impl fmt::Display for StatementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Select => "select",
            Self::Insert => "insert",
            Self::Update => "update",
            Self::Delete => "delete",
        };
        f.write_str(s)
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("{0} statements must specify a table")]
    MissingTable(StatementKind),

    #[error("{kind} statements must have {clause}")]
    MissingClause {
        kind: StatementKind,
        clause: &'static str,
    },

    /// INSERT 的某一行值个数与列数（或第一行的值个数）不一致。
    #[error("insert row {row} has {values} values but expects {expected}")]
    RowLength {
        row: usize,
        expected: usize,
        values: usize,
    },

    #[error("sql has {placeholders} placeholders but {args} args")]
    PlaceholderMismatch { placeholders: usize, args: usize },

    /// 输出端写入失败；缓冲区里已写的内容不可用。
    #[error("failed to write sql: {0}")]
    Write(#[from] fmt::Error),
}
