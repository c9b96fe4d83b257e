//! Statement：四种语句 builder 的公共接口。

use crate::args::Args;
use crate::error::BuildError;
use crate::exec::Executor;
use crate::fragment::Raw;
use crate::placeholder::check_parity;
use crate::value::Arg;
use std::fmt;

pub trait Statement {
    /// 校验必需子句后，按固定顺序把每个子句写入 `w`，参数追加到共享的 `args`。
    ///
    /// 校验失败时不会写出任何内容。
    fn write_to(&self, w: &mut dyn fmt::Write, args: &mut Args) -> Result<(), BuildError>;

    /// 渲染为最终的 `(sql, args)`。
    fn to_sql(&self) -> Result<(String, Vec<Arg>), BuildError> {
        let mut buf = String::new();
        let mut args = Args::new();
        if let Err(err) = self.write_to(&mut buf, &mut args) {
            tracing::debug!(error = %err, "failed to build statement");
            return Err(err);
        }
        tracing::debug!(sql = %buf, args = args.len(), "statement built");
        Ok((buf, args.into_values()))
    }

    /// 同 [`Statement::to_sql`]，并校验引号外的 `?` 个数与参数个数一致。
    fn to_sql_checked(&self) -> Result<(String, Vec<Arg>), BuildError> {
        let (sql, args) = self.to_sql()?;
        check_parity(&sql, args.len())?;
        Ok((sql, args))
    }

    /// 渲染为带括号的子查询片段 `(<sql>)`，可放进 WHERE、VALUES 或 CASE。
    fn to_fragment(&self) -> Result<Raw, BuildError> {
        let mut buf = String::from("(");
        let mut args = Args::new();
        self.write_to(&mut buf, &mut args)?;
        buf.push(')');
        Ok(Raw::new(buf, args.into_values()))
    }

    /// 渲染后原样交给执行器。
    fn exec<E>(&self, executor: &mut E) -> Result<E::Output, E::Error>
    where
        Self: Sized,
        E: Executor,
    {
        let (sql, args) = self.to_sql()?;
        tracing::trace!(sql = %sql, "dispatching statement to executor");
        executor.execute(&sql, &args)
    }
}
