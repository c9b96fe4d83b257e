//! SelectBuilder：构建 SELECT 语句。
//!
//! 子句顺序：前缀、`SELECT`、选项、列、FROM、JOIN、WHERE、GROUP BY、HAVING、
//! ORDER BY、LIMIT、OFFSET、后缀。所有子句共享一次渲染的同一个参数累加器。

use crate::args::Args;
use crate::clause::Clause;
use crate::error::{BuildError, StatementKind};
use crate::fragment::{Fragment, Raw};
use crate::macros::{IntoStrings, collect_into_strings};
use crate::quote::{QuoteStyle, default_quote_style};
use crate::statement::Statement;
use crate::table::{Join, TableRef, write_joins, write_list, write_number, write_tables};
use crate::value::Arg;
use std::fmt;

#[derive(Debug, Clone)]
pub struct SelectBuilder {
    quote: QuoteStyle,

    prefixes: Clause,
    options: Clause,
    columns: Clause,
    from: Vec<TableRef>,
    joins: Vec<Join>,
    wheres: Clause,
    group_bys: Vec<String>,
    havings: Clause,
    order_bys: Vec<String>,
    limit: Option<u64>,
    offset: Option<u64>,
    suffixes: Clause,
}

impl Default for SelectBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectBuilder {
    pub fn new() -> Self {
        Self {
            quote: default_quote_style(),
            prefixes: Clause::new(),
            options: Clause::new(),
            columns: Clause::new(),
            from: Vec::new(),
            joins: Vec::new(),
            wheres: Clause::new(),
            group_bys: Vec::new(),
            havings: Clause::new(),
            order_bys: Vec::new(),
            limit: None,
            offset: None,
            suffixes: Clause::new(),
        }
    }

    pub fn set_quote_style(&mut self, style: QuoteStyle) -> QuoteStyle {
        std::mem::replace(&mut self.quote, style)
    }

    pub fn quote_style(&self) -> QuoteStyle {
        self.quote
    }

    /// 写在 `SELECT` 之前，例如 `WITH ...`。
    pub fn prefix(
        &mut self,
        sql: impl Into<String>,
        args: impl IntoIterator<Item = impl Into<Arg>>,
    ) -> &mut Self {
        self.prefixes.push(Raw::new(sql, args));
        self
    }

    /// `SELECT` 之后的修饰，例如 `DISTINCT`、`SQL_CALC_FOUND_ROWS`。
    pub fn options<T: IntoStrings>(&mut self, options: T) -> &mut Self {
        for o in collect_into_strings(options) {
            self.options.push(Raw::new(o, std::iter::empty::<Arg>()));
        }
        self
    }

    /// 追加若干列名（原样输出）。
    pub fn selects<T: IntoStrings>(&mut self, columns: T) -> &mut Self {
        for c in collect_into_strings(columns) {
            self.columns.push(Raw::new(c, std::iter::empty::<Arg>()));
        }
        self
    }

    /// 追加一个列表达式，可以带参数，例如 CASE 或子查询。
    pub fn select(&mut self, column: impl Into<Fragment>) -> &mut Self {
        self.columns.push(column);
        self
    }

    pub fn from(&mut self, table: impl Into<String>) -> &mut Self {
        self.from.push(TableRef::new(table, None));
        self
    }

    /// `FROM `table` AS alias`。
    pub fn from_as(&mut self, table: impl Into<String>, alias: impl Into<String>) -> &mut Self {
        self.from.push(TableRef::new(table, Some(alias.into())));
        self
    }

    /// `<kind> `table` <suffix>`，`suffix` 一般是 `ON ...` / `USING (...)`。
    pub fn join(
        &mut self,
        kind: impl Into<String>,
        table: impl Into<String>,
        suffix: impl Into<String>,
        args: impl IntoIterator<Item = impl Into<Arg>>,
    ) -> &mut Self {
        self.joins.push(Join::new(kind, table, suffix, args));
        self
    }

    pub fn left_join(
        &mut self,
        table: impl Into<String>,
        suffix: impl Into<String>,
        args: impl IntoIterator<Item = impl Into<Arg>>,
    ) -> &mut Self {
        self.join("LEFT JOIN", table, suffix, args)
    }

    pub fn right_join(
        &mut self,
        table: impl Into<String>,
        suffix: impl Into<String>,
        args: impl IntoIterator<Item = impl Into<Arg>>,
    ) -> &mut Self {
        self.join("RIGHT JOIN", table, suffix, args)
    }

    pub fn inner_join(
        &mut self,
        table: impl Into<String>,
        suffix: impl Into<String>,
        args: impl IntoIterator<Item = impl Into<Arg>>,
    ) -> &mut Self {
        self.join("INNER JOIN", table, suffix, args)
    }

    /// 追加一个 WHERE 条件；多个条件之间用 `AND` 连接。
    pub fn where_(&mut self, cond: impl Into<Fragment>) -> &mut Self {
        self.wheres.push(cond);
        self
    }

    pub fn where_sql(
        &mut self,
        sql: impl Into<String>,
        args: impl IntoIterator<Item = impl Into<Arg>>,
    ) -> &mut Self {
        self.where_(Raw::new(sql, args))
    }

    pub fn group_by<T: IntoStrings>(&mut self, columns: T) -> &mut Self {
        self.group_bys.extend(collect_into_strings(columns));
        self
    }

    pub fn having(&mut self, cond: impl Into<Fragment>) -> &mut Self {
        self.havings.push(cond);
        self
    }

    pub fn having_sql(
        &mut self,
        sql: impl Into<String>,
        args: impl IntoIterator<Item = impl Into<Arg>>,
    ) -> &mut Self {
        self.having(Raw::new(sql, args))
    }

    pub fn order_by<T: IntoStrings>(&mut self, columns: T) -> &mut Self {
        self.order_bys.extend(collect_into_strings(columns));
        self
    }

    pub fn limit(&mut self, limit: u64) -> &mut Self {
        self.limit = Some(limit);
        self
    }

    pub fn offset(&mut self, offset: u64) -> &mut Self {
        self.offset = Some(offset);
        self
    }

    /// 写在语句末尾，例如 `FOR UPDATE`。
    pub fn suffix(
        &mut self,
        sql: impl Into<String>,
        args: impl IntoIterator<Item = impl Into<Arg>>,
    ) -> &mut Self {
        self.suffixes.push(Raw::new(sql, args));
        self
    }
}

impl Statement for SelectBuilder {
    fn write_to(&self, w: &mut dyn fmt::Write, args: &mut Args) -> Result<(), BuildError> {
        if self.columns.is_empty() {
            return Err(BuildError::MissingClause {
                kind: StatementKind::Select,
                clause: "at least one result column",
            });
        }

        self.prefixes.write_wrapped(w, "", " ", " ", args)?;
        w.write_str("SELECT ")?;
        self.options.write_wrapped(w, "", " ", " ", args)?;
        self.columns.write_to(w, ", ", args)?;

        if !self.from.is_empty() {
            w.write_str(" FROM ")?;
            write_tables(w, &self.from, self.quote)?;
        }

        write_joins(w, &self.joins, self.quote, args)?;
        self.wheres.write_wrapped(w, " WHERE ", " AND ", "", args)?;
        write_list(w, " GROUP BY ", &self.group_bys)?;
        self.havings
            .write_wrapped(w, " HAVING ", " AND ", "", args)?;
        write_list(w, " ORDER BY ", &self.order_bys)?;
        write_number(w, " LIMIT ", self.limit)?;
        write_number(w, " OFFSET ", self.offset)?;
        self.suffixes.write_wrapped(w, " ", " ", "", args)?;
        Ok(())
    }
}
