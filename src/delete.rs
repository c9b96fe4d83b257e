//! DeleteBuilder：构建 DELETE 语句。
//!
//! 出于安全考虑，没有 WHERE 条件（或条件全部为空）的 DELETE 会直接报错，
//! 不会生成整表删除语句。

use crate::args::Args;
use crate::clause::Clause;
use crate::error::{BuildError, StatementKind};
use crate::fragment::{Fragment, Raw};
use crate::macros::{IntoStrings, collect_into_strings};
use crate::quote::{QuoteStyle, default_quote_style};
use crate::statement::Statement;
use crate::table::{Join, write_joins, write_list, write_number};
use crate::value::Arg;
use std::fmt;

#[derive(Debug, Clone)]
pub struct DeleteBuilder {
    quote: QuoteStyle,

    prefixes: Clause,
    options: Clause,
    aliases: Vec<String>,
    tables: Vec<String>,
    using: Option<String>,
    joins: Vec<Join>,
    wheres: Clause,
    order_bys: Vec<String>,
    limit: Option<u64>,
    offset: Option<u64>,
    suffixes: Clause,
}

impl Default for DeleteBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DeleteBuilder {
    pub fn new() -> Self {
        Self {
            quote: default_quote_style(),
            prefixes: Clause::new(),
            options: Clause::new(),
            aliases: Vec::new(),
            tables: Vec::new(),
            using: None,
            joins: Vec::new(),
            wheres: Clause::new(),
            order_bys: Vec::new(),
            limit: None,
            offset: None,
            suffixes: Clause::new(),
        }
    }

    /// 只影响 JOIN 的表名；`table` 的内容原样输出。
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

    pub fn options<T: IntoStrings>(&mut self, options: T) -> &mut Self {
        for o in collect_into_strings(options) {
            self.options.push(Raw::new(o, std::iter::empty::<Arg>()));
        }
        self
    }

    /// 多表删除时要删除的别名：`DELETE u, p FROM ...`。
    pub fn alias<T: IntoStrings>(&mut self, aliases: T) -> &mut Self {
        self.aliases.extend(collect_into_strings(aliases));
        self
    }

    /// 替换 FROM 的表列表；空表名被忽略。
    pub fn table<T: IntoStrings>(&mut self, tables: T) -> &mut Self {
        self.tables = collect_into_strings(tables);
        self.tables.retain(|t| !t.trim().is_empty());
        self
    }

    pub fn using(&mut self, sql: impl Into<String>) -> &mut Self {
        self.using = Some(sql.into());
        self
    }

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

    pub fn suffix(
        &mut self,
        sql: impl Into<String>,
        args: impl IntoIterator<Item = impl Into<Arg>>,
    ) -> &mut Self {
        self.suffixes.push(Raw::new(sql, args));
        self
    }
}

impl Statement for DeleteBuilder {
    fn write_to(&self, w: &mut dyn fmt::Write, args: &mut Args) -> Result<(), BuildError> {
        if self.tables.iter().all(|t| t.trim().is_empty()) {
            return Err(BuildError::MissingTable(StatementKind::Delete));
        }
        if self.wheres.is_empty() {
            return Err(BuildError::MissingClause {
                kind: StatementKind::Delete,
                clause: "a WHERE condition",
            });
        }

        self.prefixes.write_wrapped(w, "", " ", " ", args)?;
        w.write_str("DELETE ")?;
        self.options.write_wrapped(w, "", " ", " ", args)?;
        if !self.aliases.is_empty() {
            w.write_str(&self.aliases.join(", "))?;
            w.write_char(' ')?;
        }
        w.write_str("FROM ")?;
        w.write_str(&self.tables.join(", "))?;

        if let Some(using) = &self.using {
            w.write_str(" USING ")?;
            w.write_str(using)?;
        }

        write_joins(w, &self.joins, self.quote, args)?;
        self.wheres.write_wrapped(w, " WHERE ", " AND ", "", args)?;
        write_list(w, " ORDER BY ", &self.order_bys)?;
        write_number(w, " LIMIT ", self.limit)?;
        write_number(w, " OFFSET ", self.offset)?;
        self.suffixes.write_wrapped(w, " ", " ", "", args)?;
        Ok(())
    }
}
