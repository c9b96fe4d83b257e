//! `CASE [subject] WHEN ... THEN ... [ELSE ...] END`。

use crate::args::Args;
use crate::error::BuildError;
use crate::fragment::{Fragment, Group, Raw};
use crate::in_list::InList;
use crate::value::{Arg, SqlValue};
use crate::valuer::SqlValuer;
use std::fmt;

/// CASE 分支、INSERT 值、UPDATE 赋值中的一个操作数：字面值或嵌套片段。
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    /// 渲染为 `?`，并贡献一个参数。
    Value(Arg),
    /// 递归渲染，贡献片段自己的文本与参数。
    Fragment(Fragment),
}

impl Operand {
    pub(crate) fn write_to<W>(&self, w: &mut W, args: &mut Args) -> Result<(), BuildError>
    where
        W: fmt::Write + ?Sized,
    {
        match self {
            Self::Value(v) => {
                w.write_char('?')?;
                args.add(v.clone());
                Ok(())
            }
            Self::Fragment(f) => f.write_nested(w, args),
        }
    }
}

macro_rules! impl_from_for_operand {
    (values: $($v:ty),* ; fragments: $($f:ty),* $(,)?) => {
        $(
            impl From<$v> for Operand {
                fn from(v: $v) -> Self {
                    Self::Value(v.into())
                }
            }
        )*
        $(
            impl From<$f> for Operand {
                fn from(v: $f) -> Self {
                    Self::Fragment(v.into())
                }
            }
        )*
    };
}

impl_from_for_operand! {
    values: Arg, SqlValue, Box<dyn SqlValuer>, (), bool, i8, i16, i32, i64, isize, u8, u16, u32,
        u64, usize, f32, f64, String, &'static str, Vec<u8>, time::OffsetDateTime;
    fragments: Fragment, Raw, Group, InList, Case,
}

impl<T> From<Option<T>> for Operand
where
    T: Into<SqlValue>,
{
    fn from(v: Option<T>) -> Self {
        Self::Value(v.into())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Case {
    subject: String,
    branches: Vec<(Operand, Operand)>,
    default: Option<Box<Operand>>,
}

impl Case {
    /// `subject` 为空时生成 searched CASE（`CASE WHEN cond THEN ...`）。
    pub fn new(subject: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            branches: Vec::new(),
            default: None,
        }
    }

    pub fn when(&mut self, cond: impl Into<Operand>, result: impl Into<Operand>) -> &mut Self {
        self.branches.push((cond.into(), result.into()));
        self
    }

    /// 重复调用时后者覆盖前者。
    pub fn else_(&mut self, default: impl Into<Operand>) -> &mut Self {
        self.default = Some(Box::new(default.into()));
        self
    }

    pub fn write_to<W>(&self, w: &mut W, args: &mut Args) -> Result<(), BuildError>
    where
        W: fmt::Write + ?Sized,
    {
        w.write_str("CASE")?;
        if !self.subject.is_empty() {
            w.write_char(' ')?;
            w.write_str(&self.subject)?;
        }

        for (cond, result) in &self.branches {
            w.write_str(" WHEN ")?;
            cond.write_to(w, args)?;
            w.write_str(" THEN ")?;
            result.write_to(w, args)?;
        }

        if let Some(d) = &self.default {
            w.write_str(" ELSE ")?;
            d.write_to(w, args)?;
        }

        w.write_str(" END")?;
        Ok(())
    }
}

pub fn case(subject: impl Into<String>) -> Case {
    Case::new(subject)
}
