//! Executor：把渲染好的 `(sql, args)` 交给驱动执行的适配接口。
//!
//! 本库不管理连接、不解析结果集；实现方负责把 [`Arg`] 转成驱动需要的参数类型
//! （可借助 [`Arg::resolve`]）。

use crate::error::BuildError;
use crate::value::Arg;

pub trait Executor {
    type Output;
    type Error: From<BuildError>;

    /// `sql` 与 `args` 保持 builder 生成时的样子，不做任何改写。
    fn execute(&mut self, sql: &str, args: &[Arg]) -> Result<Self::Output, Self::Error>;
}

impl<E: Executor + ?Sized> Executor for &mut E {
    type Output = E::Output;
    type Error = E::Error;

    fn execute(&mut self, sql: &str, args: &[Arg]) -> Result<Self::Output, Self::Error> {
        (**self).execute(sql, args)
    }
}
