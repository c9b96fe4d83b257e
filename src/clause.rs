//! Clause：语句中的一个子句（列、WHERE 条件、前缀……），按分隔符连接多个片段。

use crate::args::Args;
use crate::error::BuildError;
use crate::fragment::Fragment;
use std::fmt;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Clause {
    items: Vec<Fragment>,
}

impl Clause {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, item: impl Into<Fragment>) {
        self.items.push(item.into());
    }

    pub fn extend(&mut self, items: impl IntoIterator<Item = impl Into<Fragment>>) {
        self.items.extend(items.into_iter().map(Into::into));
    }

    pub fn items(&self) -> &[Fragment] {
        &self.items
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// 所有成员都渲染为空文本（包括没有成员）。
    pub fn is_empty(&self) -> bool {
        self.items.iter().all(Fragment::is_empty)
    }

    /// 逐个渲染成员，相邻的非空成员之间写入 `sep`；空成员只贡献参数。
    ///
    /// 多于一个非空成员时，多项的 AND/OR 组合加括号。
    pub fn write_to<W>(&self, w: &mut W, sep: &str, args: &mut Args) -> Result<(), BuildError>
    where
        W: fmt::Write + ?Sized,
    {
        let nested = self.items.iter().filter(|f| !f.is_empty()).count() > 1;
        let mut first = true;
        for item in &self.items {
            if item.is_empty() {
                item.write_to(w, args)?;
                continue;
            }
            if !first {
                w.write_str(sep)?;
            }
            first = false;
            if nested {
                item.write_nested(w, args)?;
            } else {
                item.write_to(w, args)?;
            }
        }
        Ok(())
    }

    /// 非空时写出 `lead` + 成员 + `trail`；为空时不写任何文本。
    pub fn write_wrapped<W>(
        &self,
        w: &mut W,
        lead: &str,
        sep: &str,
        trail: &str,
        args: &mut Args,
    ) -> Result<(), BuildError>
    where
        W: fmt::Write + ?Sized,
    {
        if self.is_empty() {
            return self.write_to(w, sep, args);
        }
        w.write_str(lead)?;
        self.write_to(w, sep, args)?;
        w.write_str(trail)?;
        Ok(())
    }
}

impl<F: Into<Fragment>> FromIterator<F> for Clause {
    fn from_iter<I: IntoIterator<Item = F>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().map(Into::into).collect(),
        }
    }
}
