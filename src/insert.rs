//! InsertBuilder：构建 INSERT 语句。

use crate::args::Args;
use crate::case::Operand;
use crate::clause::Clause;
use crate::error::{BuildError, StatementKind};
use crate::fragment::Raw;
use crate::macros::{IntoStrings, collect_into_strings};
use crate::quote::{QuoteStyle, default_quote_style};
use crate::statement::Statement;
use crate::value::Arg;
use std::fmt;

#[derive(Debug, Clone)]
pub struct InsertBuilder {
    quote: QuoteStyle,

    prefixes: Clause,
    options: Clause,
    table: Option<String>,
    columns: Vec<String>,
    rows: Vec<Vec<Operand>>,
    suffixes: Clause,
}

impl Default for InsertBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl InsertBuilder {
    pub fn new() -> Self {
        Self {
            quote: default_quote_style(),
            prefixes: Clause::new(),
            options: Clause::new(),
            table: None,
            columns: Vec::new(),
            rows: Vec::new(),
            suffixes: Clause::new(),
        }
    }

    /// 由 `(列, 值)` 序列构造单行插入，列顺序即迭代顺序。
    pub fn from_pairs<K, V>(
        table: impl Into<String>,
        pairs: impl IntoIterator<Item = (K, V)>,
    ) -> Self
    where
        K: Into<String>,
        V: Into<Operand>,
    {
        let mut ib = Self::new();
        ib.table(table);
        let mut row = Vec::new();
        for (k, v) in pairs {
            ib.columns.push(k.into());
            row.push(v.into());
        }
        ib.rows.push(row);
        ib
    }

    pub fn set_quote_style(&mut self, style: QuoteStyle) -> QuoteStyle {
        std::mem::replace(&mut self.quote, style)
    }

    pub fn quote_style(&self) -> QuoteStyle {
        self.quote
    }

    pub fn prefix(
        &mut self,
        sql: impl Into<String>,
        args: impl IntoIterator<Item = impl Into<Arg>>,
    ) -> &mut Self {
        self.prefixes.push(Raw::new(sql, args));
        self
    }

    /// `INSERT` 之后的修饰，例如 `IGNORE`、`LOW_PRIORITY`。
    pub fn options<T: IntoStrings>(&mut self, options: T) -> &mut Self {
        for o in collect_into_strings(options) {
            self.options.push(Raw::new(o, std::iter::empty::<Arg>()));
        }
        self
    }

    pub fn table(&mut self, table: impl Into<String>) -> &mut Self {
        self.table = Some(table.into());
        self
    }

    pub fn columns<T: IntoStrings>(&mut self, columns: T) -> &mut Self {
        self.columns.extend(collect_into_strings(columns));
        self
    }

    pub fn column(&mut self, column: impl Into<String>) -> &mut Self {
        self.columns.push(column.into());
        self
    }

    /// 追加一行值。字面值渲染为 `?`，片段（如子查询、`NOW()`）原样展开。
    pub fn values(&mut self, values: impl IntoIterator<Item = impl Into<Operand>>) -> &mut Self {
        self.rows.push(values.into_iter().map(Into::into).collect());
        self
    }

    /// 同时追加一列和第一行中对应的值。
    ///
    /// 只作用于第一行；已有多行时其余行的值个数会与列数不一致，
    /// 渲染时报 [`BuildError::RowLength`]。
    pub fn set(&mut self, column: impl Into<String>, value: impl Into<Operand>) -> &mut Self {
        self.columns.push(column.into());
        if self.rows.is_empty() {
            self.rows.push(Vec::new());
        }
        self.rows[0].push(value.into());
        self
    }

    /// 写在语句末尾，例如 `ON DUPLICATE KEY UPDATE ...`。
    pub fn suffix(
        &mut self,
        sql: impl Into<String>,
        args: impl IntoIterator<Item = impl Into<Arg>>,
    ) -> &mut Self {
        self.suffixes.push(Raw::new(sql, args));
        self
    }
}

impl Statement for InsertBuilder {
    fn write_to(&self, w: &mut dyn fmt::Write, args: &mut Args) -> Result<(), BuildError> {
        let Some(table) = self.table.as_deref().filter(|t| !t.trim().is_empty()) else {
            return Err(BuildError::MissingTable(StatementKind::Insert));
        };
        if self.rows.is_empty() {
            return Err(BuildError::MissingClause {
                kind: StatementKind::Insert,
                clause: "at least one set of values",
            });
        }
        if self.rows.iter().any(Vec::is_empty) {
            return Err(BuildError::MissingClause {
                kind: StatementKind::Insert,
                clause: "at least one value in every row",
            });
        }
        let expected = match self.columns.len() {
            0 => self.rows[0].len(),
            n => n,
        };
        if let Some((row, values)) = self
            .rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, n)| n != expected)
        {
            return Err(BuildError::RowLength {
                row,
                expected,
                values,
            });
        }

        self.prefixes.write_wrapped(w, "", " ", " ", args)?;
        w.write_str("INSERT ")?;
        self.options.write_wrapped(w, "", " ", " ", args)?;
        w.write_str("INTO ")?;
        w.write_str(&self.quote.quote(table))?;

        if !self.columns.is_empty() {
            w.write_str(" (")?;
            for (i, c) in self.columns.iter().enumerate() {
                if i > 0 {
                    w.write_str(", ")?;
                }
                w.write_str(&self.quote.quote(c))?;
            }
            w.write_char(')')?;
        }

        w.write_str(" VALUES ")?;
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                w.write_str(", ")?;
            }
            w.write_char('(')?;
            for (j, v) in row.iter().enumerate() {
                if j > 0 {
                    w.write_str(", ")?;
                }
                v.write_to(w, args)?;
            }
            w.write_char(')')?;
        }

        self.suffixes.write_wrapped(w, " ", " ", "", args)?;
        Ok(())
    }
}
