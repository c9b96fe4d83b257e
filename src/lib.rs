//! halo-stmt：可组合的 SQL 片段与语句 builder。
//!
//! 片段（[`Fragment`]）可以任意嵌套；渲染时文本与参数在同一次深度优先遍历中产生，
//! 因此输出文本中第 N 个 `?` 永远对应参数列表中的第 N 个值。
//!
//! ```
//! use halo_stmt::{QuoteStyle, SelectBuilder, Statement, in_, or, sql};
//!
//! let mut sb = SelectBuilder::new();
//! sb.set_quote_style(QuoteStyle::None);
//! sb.selects(["id", "name"])
//!     .from("user")
//!     .where_(in_("status", [1, 2]))
//!     .where_(or!(sql("age > ?", [18]), sql!("vip = ?", true)));
//!
//! let (text, args) = sb.to_sql().unwrap();
//! assert_eq!(
//!     text,
//!     "SELECT id, name FROM user WHERE status IN (?, ?) AND (age > ? OR vip = ?)"
//! );
//! assert_eq!(args.len(), 4);
//! ```

pub mod args;
pub mod case;
#[cfg(test)]
mod case_tests;
pub mod clause;
pub mod delete;
pub mod error;
pub mod exec;
pub mod fragment;
pub mod in_list;
pub mod insert;
#[cfg(test)]
mod insert_tests;
pub mod interpolate;
#[cfg(test)]
mod interpolate_tests;
pub mod macros;
pub mod placeholder;
pub mod quote;
pub mod select;
pub mod statement;
mod table;
pub mod update;
pub mod value;
pub mod valuer;

pub use crate::args::Args;
pub use crate::case::{Case, Operand, case};
pub use crate::clause::Clause;
pub use crate::delete::DeleteBuilder;
pub use crate::error::{BuildError, StatementKind};
pub use crate::exec::Executor;
pub use crate::fragment::{Fragment, Group, Joiner, Raw, and, or, raw, sql};
pub use crate::in_list::{InList, in_, not_in};
pub use crate::insert::InsertBuilder;
pub use crate::interpolate::{InterpolateError, interpolate};
pub use crate::macros::IntoStrings;
pub use crate::placeholder::{check_parity, count_placeholders};
pub use crate::quote::{
    DefaultQuoteStyleGuard, QuoteStyle, default_quote_style, set_default_quote_style,
    set_default_quote_style_scoped,
};
pub use crate::select::SelectBuilder;
pub use crate::statement::Statement;
pub use crate::update::UpdateBuilder;
pub use crate::value::{Arg, SqlValue};
pub use crate::valuer::{SqlValuer, ValuerError, valuer};
