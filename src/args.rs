//! Args：一次渲染共享的参数累加器。
//!
//! 顶层 `to_sql()` 只创建一个 `Args`，并以 `&mut` 传给每一层递归渲染。
//! 每个片段在写出自己的文本的同时把参数追加进来，因此文本中第 N 个 `?`
//! 永远对应 `Args` 中第 N 个值。

use crate::value::Arg;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Args {
    values: Vec<Arg>,
}

impl Args {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(n: usize) -> Self {
        Self {
            values: Vec::with_capacity(n),
        }
    }

    /// 追加一个参数。
    pub fn add(&mut self, arg: impl Into<Arg>) {
        self.values.push(arg.into());
    }

    /// 按顺序追加一组参数。
    pub fn extend<'a>(&mut self, args: impl IntoIterator<Item = &'a Arg>) {
        self.values.extend(args.into_iter().cloned());
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[Arg] {
        &self.values
    }

    pub fn into_values(self) -> Vec<Arg> {
        self.values
    }
}

impl From<Args> for Vec<Arg> {
    fn from(a: Args) -> Self {
        a.values
    }
}
