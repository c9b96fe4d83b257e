//! 表引用与 JOIN。表名在渲染时按 builder 的 [`QuoteStyle`] 加引号。

use crate::args::Args;
use crate::error::BuildError;
use crate::fragment::Raw;
use crate::quote::QuoteStyle;
use crate::value::Arg;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TableRef {
    name: String,
    alias: Option<String>,
}

impl TableRef {
    pub(crate) fn new(name: impl Into<String>, alias: Option<String>) -> Self {
        Self {
            name: name.into(),
            alias,
        }
    }

    pub(crate) fn write_to<W>(&self, w: &mut W, quote: QuoteStyle) -> Result<(), BuildError>
    where
        W: fmt::Write + ?Sized,
    {
        w.write_str(&quote.quote(&self.name))?;
        if let Some(alias) = &self.alias {
            w.write_str(" AS ")?;
            w.write_str(alias)?;
        }
        Ok(())
    }
}

pub(crate) fn write_tables<W>(
    w: &mut W,
    tables: &[TableRef],
    quote: QuoteStyle,
) -> Result<(), BuildError>
where
    W: fmt::Write + ?Sized,
{
    for (i, t) in tables.iter().enumerate() {
        if i > 0 {
            w.write_str(", ")?;
        }
        t.write_to(w, quote)?;
    }
    Ok(())
}

/// `<kind> <table> <suffix>`，例如 `LEFT JOIN `role` ON role.id = user.role_id`。
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Join {
    kind: String,
    table: String,
    suffix: Raw,
}

impl Join {
    pub(crate) fn new(
        kind: impl Into<String>,
        table: impl Into<String>,
        suffix: impl Into<String>,
        args: impl IntoIterator<Item = impl Into<Arg>>,
    ) -> Self {
        Self {
            kind: kind.into(),
            table: table.into(),
            suffix: Raw::new(suffix, args),
        }
    }

    pub(crate) fn write_to<W>(
        &self,
        w: &mut W,
        quote: QuoteStyle,
        args: &mut Args,
    ) -> Result<(), BuildError>
    where
        W: fmt::Write + ?Sized,
    {
        w.write_str(&self.kind)?;
        w.write_char(' ')?;
        w.write_str(&quote.quote(&self.table))?;
        if !self.suffix.is_empty() {
            w.write_char(' ')?;
        }
        self.suffix.write_to(w, args)
    }
}

pub(crate) fn write_joins<W>(
    w: &mut W,
    joins: &[Join],
    quote: QuoteStyle,
    args: &mut Args,
) -> Result<(), BuildError>
where
    W: fmt::Write + ?Sized,
{
    if joins.is_empty() {
        return Ok(());
    }
    for j in joins {
        w.write_char(' ')?;
        j.write_to(w, quote, args)?;
    }
    Ok(())
}

/// ` <keyword> a, b, c`；列表为空时什么都不写。
pub(crate) fn write_list<W>(w: &mut W, keyword: &str, items: &[String]) -> Result<(), BuildError>
where
    W: fmt::Write + ?Sized,
{
    if items.is_empty() {
        return Ok(());
    }
    w.write_str(keyword)?;
    w.write_str(&items.join(", "))?;
    Ok(())
}

/// ` LIMIT n` / ` OFFSET n`。
pub(crate) fn write_number<W>(w: &mut W, keyword: &str, n: Option<u64>) -> Result<(), BuildError>
where
    W: fmt::Write + ?Sized,
{
    if let Some(n) = n {
        write!(w, "{keyword}{n}")?;
    }
    Ok(())
}
