//! UpdateBuilder：构建 UPDATE 语句。
//!
//! 表名与列名原样输出（允许 `user AS u`、`u.name` 这类写法）。

use crate::args::Args;
use crate::case::Operand;
use crate::clause::Clause;
use crate::error::{BuildError, StatementKind};
use crate::fragment::{Fragment, Raw};
use crate::macros::{IntoStrings, collect_into_strings};
use crate::statement::Statement;
use crate::table::write_number;
use crate::value::Arg;
use std::fmt;

#[derive(Debug, Clone, Default)]
pub struct UpdateBuilder {
    prefixes: Clause,
    options: Clause,
    tables: Vec<String>,
    assignments: Vec<(String, Operand)>,
    wheres: Clause,
    order_bys: Clause,
    limit: Option<u64>,
    offset: Option<u64>,
    suffixes: Clause,
}

impl UpdateBuilder {
    pub fn new() -> Self {
        Self::default()
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

    /// 替换要更新的表；空表名被忽略。
    pub fn table<T: IntoStrings>(&mut self, tables: T) -> &mut Self {
        self.tables = collect_into_strings(tables);
        self.tables.retain(|t| !t.trim().is_empty());
        self
    }

    /// `column=?`；值为片段时展开为 `column=<片段>`，例如 `hits=hits+?`。
    pub fn set(&mut self, column: impl Into<String>, value: impl Into<Operand>) -> &mut Self {
        self.assignments.push((column.into(), value.into()));
        self
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

    pub fn order_by(
        &mut self,
        sql: impl Into<String>,
        args: impl IntoIterator<Item = impl Into<Arg>>,
    ) -> &mut Self {
        self.order_bys.push(Raw::new(sql, args));
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

impl Statement for UpdateBuilder {
    fn write_to(&self, w: &mut dyn fmt::Write, args: &mut Args) -> Result<(), BuildError> {
        if self.tables.iter().all(|t| t.trim().is_empty()) {
            return Err(BuildError::MissingTable(StatementKind::Update));
        }
        if self.assignments.is_empty() {
            return Err(BuildError::MissingClause {
                kind: StatementKind::Update,
                clause: "at least one SET assignment",
            });
        }

        self.prefixes.write_wrapped(w, "", " ", " ", args)?;
        w.write_str("UPDATE ")?;
        self.options.write_wrapped(w, "", " ", " ", args)?;
        w.write_str(&self.tables.join(", "))?;

        w.write_str(" SET ")?;
        for (i, (column, value)) in self.assignments.iter().enumerate() {
            if i > 0 {
                w.write_str(", ")?;
            }
            w.write_str(column)?;
            w.write_char('=')?;
            value.write_to(w, args)?;
        }

        self.wheres.write_wrapped(w, " WHERE ", " AND ", "", args)?;
        self.order_bys
            .write_wrapped(w, " ORDER BY ", ", ", "", args)?;
        write_number(w, " LIMIT ", self.limit)?;
        write_number(w, " OFFSET ", self.offset)?;
        self.suffixes.write_wrapped(w, " ", " ", "", args)?;
        Ok(())
    }
}
