//! `col IN (?, ?, ...)` / `col NOT IN (...)`。

use crate::args::Args;
use crate::error::BuildError;
use crate::value::Arg;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct InList {
    column: String,
    values: Vec<Arg>,
    negated: bool,
}

impl InList {
    pub fn new(
        column: impl Into<String>,
        values: impl IntoIterator<Item = impl Into<Arg>>,
    ) -> Self {
        Self {
            column: column.into(),
            values: values.into_iter().map(Into::into).collect(),
            negated: false,
        }
    }

    pub fn negate(mut self) -> Self {
        self.negated = !self.negated;
        self
    }

    pub fn column(&self) -> &str {
        &self.column
    }

    pub fn values(&self) -> &[Arg] {
        &self.values
    }

    /// 空列表：`IN` 渲染为恒假 `0 = 1`，`NOT IN` 渲染为恒真 `0 = 0`，均不产生参数。
    pub fn write_to<W>(&self, w: &mut W, args: &mut Args) -> Result<(), BuildError>
    where
        W: fmt::Write + ?Sized,
    {
        if self.values.is_empty() {
            w.write_str(if self.negated { "0 = 0" } else { "0 = 1" })?;
            return Ok(());
        }

        w.write_str(&self.column)?;
        w.write_str(if self.negated { " NOT IN (" } else { " IN (" })?;
        for i in 0..self.values.len() {
            if i > 0 {
                w.write_str(", ")?;
            }
            w.write_char('?')?;
        }
        w.write_char(')')?;
        args.extend(&self.values);
        Ok(())
    }
}

pub fn in_(column: impl Into<String>, values: impl IntoIterator<Item = impl Into<Arg>>) -> InList {
    InList::new(column, values)
}

pub fn not_in(
    column: impl Into<String>,
    values: impl IntoIterator<Item = impl Into<Arg>>,
) -> InList {
    InList::new(column, values).negate()
}
