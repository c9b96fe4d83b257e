//! Fragment：SQL 片段树与递归渲染。
//!
//! 片段是一个封闭的变体集合：
//!
//! - [`Raw`]：原始 SQL 模板 + 按位置对应 `?` 的参数；
//! - [`Group`]：若干子片段，用 `AND` / `OR` 连接；
//! - [`InList`]：`col IN (?, ?, ...)`；
//! - [`Case`]：`CASE ... WHEN ... THEN ... ELSE ... END`。
//!
//! `Raw`/`Group`/`Case` 本身是可追加的构建器；放进父节点或子句时转换为不可变的
//! [`Fragment`]。渲染时文本写入 `fmt::Write`，参数追加到同一个 [`Args`]，
//! 两者的遍历顺序完全一致。

use crate::args::Args;
use crate::case::Case;
use crate::error::BuildError;
use crate::in_list::InList;
use crate::placeholder::check_parity;
use crate::value::Arg;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Fragment {
    Raw(Raw),
    Group(Group),
    In(InList),
    Case(Case),
}

impl Fragment {
    /// 把片段写入 `w`，参数追加到 `args`。
    ///
    /// 写入失败时立即返回；此时 `w` 与 `args` 中的部分内容都不可再用。
    pub fn write_to<W>(&self, w: &mut W, args: &mut Args) -> Result<(), BuildError>
    where
        W: fmt::Write + ?Sized,
    {
        match self {
            Self::Raw(r) => r.write_to(w, args),
            Self::Group(g) => g.write_to(w, args),
            Self::In(l) => l.write_to(w, args),
            Self::Case(c) => c.write_to(w, args),
        }
    }

    /// 渲染为独立的 `(sql, args)`。
    pub fn to_sql(&self) -> Result<(String, Vec<Arg>), BuildError> {
        let mut buf = String::new();
        let mut args = Args::new();
        self.write_to(&mut buf, &mut args)?;
        Ok((buf, args.into_values()))
    }

    /// 渲染结果是否为空文本（空模板、空的 AND/OR 组合）。
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Raw(r) => r.is_empty(),
            Self::Group(g) => g.is_empty(),
            Self::In(_) | Self::Case(_) => false,
        }
    }

    /// 作为子节点写出：多于一项的 AND/OR 组合加括号，使优先级始终显式。
    pub(crate) fn write_nested<W>(&self, w: &mut W, args: &mut Args) -> Result<(), BuildError>
    where
        W: fmt::Write + ?Sized,
    {
        if let Self::Group(g) = self
            && g.terms() > 1
        {
            w.write_char('(')?;
            g.write_to(w, args)?;
            w.write_char(')')?;
            return Ok(());
        }
        self.write_to(w, args)
    }
}

/// 原始 SQL 片段。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Raw {
    sql: String,
    args: Vec<Arg>,
}

impl Raw {
    /// 不校验占位符个数。
    pub fn new(sql: impl Into<String>, args: impl IntoIterator<Item = impl Into<Arg>>) -> Self {
        Self {
            sql: sql.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// 同 [`Raw::new`]，但要求引号外的 `?` 个数与参数个数一致。
    pub fn try_new(
        sql: impl Into<String>,
        args: impl IntoIterator<Item = impl Into<Arg>>,
    ) -> Result<Self, BuildError> {
        let raw = Self::new(sql, args);
        check_parity(&raw.sql, raw.args.len())?;
        Ok(raw)
    }

    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn args(&self) -> &[Arg] {
        &self.args
    }

    /// 文本为空。空文本仍会贡献自己的参数，但不占用连接符。
    pub fn is_empty(&self) -> bool {
        self.sql.is_empty()
    }

    /// 以单个空格连接一段 SQL，并追加它的参数。
    pub fn append(
        &mut self,
        sql: impl AsRef<str>,
        args: impl IntoIterator<Item = impl Into<Arg>>,
    ) -> &mut Self {
        self.append_with(" ", sql, args)
    }

    /// 以 `sep` 连接一段 SQL（自身为空时不写分隔符），并追加它的参数。
    pub fn append_with(
        &mut self,
        sep: &str,
        sql: impl AsRef<str>,
        args: impl IntoIterator<Item = impl Into<Arg>>,
    ) -> &mut Self {
        let sql = sql.as_ref();
        if !self.sql.is_empty() && !sql.is_empty() {
            self.sql.push_str(sep);
        }
        self.sql.push_str(sql);
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn write_to<W>(&self, w: &mut W, args: &mut Args) -> Result<(), BuildError>
    where
        W: fmt::Write + ?Sized,
    {
        w.write_str(&self.sql)?;
        args.extend(&self.args);
        Ok(())
    }
}

/// AND / OR 连接符。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Joiner {
    And,
    Or,
}

impl Joiner {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::And => " AND ",
            Self::Or => " OR ",
        }
    }
}

/// 逻辑组合：所有参数都来自子节点。
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    joiner: Joiner,
    children: Vec<Fragment>,
}

impl Group {
    pub fn new(joiner: Joiner) -> Self {
        Self {
            joiner,
            children: Vec::new(),
        }
    }

    pub fn joiner(&self) -> Joiner {
        self.joiner
    }

    pub fn children(&self) -> &[Fragment] {
        &self.children
    }

    /// 追加一段原始 SQL 作为子节点。
    pub fn append(
        &mut self,
        sql: impl Into<String>,
        args: impl IntoIterator<Item = impl Into<Arg>>,
    ) -> &mut Self {
        self.children.push(Fragment::Raw(Raw::new(sql, args)));
        self
    }

    /// 追加一个已构建好的片段。
    pub fn push(&mut self, child: impl Into<Fragment>) -> &mut Self {
        self.children.push(child.into());
        self
    }

    pub fn extend(&mut self, children: impl IntoIterator<Item = impl Into<Fragment>>) -> &mut Self {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    /// 非空子节点个数。
    pub fn terms(&self) -> usize {
        self.children.iter().filter(|c| !c.is_empty()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.terms() == 0
    }

    pub fn write_to<W>(&self, w: &mut W, args: &mut Args) -> Result<(), BuildError>
    where
        W: fmt::Write + ?Sized,
    {
        let mut first = true;
        for child in &self.children {
            if child.is_empty() {
                child.write_to(w, args)?;
                continue;
            }
            if !first {
                w.write_str(self.joiner.as_str())?;
            }
            first = false;
            child.write_nested(w, args)?;
        }
        Ok(())
    }
}

impl From<Raw> for Fragment {
    fn from(v: Raw) -> Self {
        Self::Raw(v)
    }
}

impl From<Group> for Fragment {
    fn from(v: Group) -> Self {
        Self::Group(v)
    }
}

impl From<InList> for Fragment {
    fn from(v: InList) -> Self {
        Self::In(v)
    }
}

impl From<Case> for Fragment {
    fn from(v: Case) -> Self {
        Self::Case(v)
    }
}

/// 原始 SQL + 参数。
pub fn sql(sql: impl Into<String>, args: impl IntoIterator<Item = impl Into<Arg>>) -> Raw {
    Raw::new(sql, args)
}

/// 不带参数的原始 SQL。
pub fn raw(sql: impl Into<String>) -> Raw {
    Raw::new(sql, std::iter::empty::<Arg>())
}

/// `c1 AND c2 AND ...`
pub fn and(children: impl IntoIterator<Item = impl Into<Fragment>>) -> Group {
    let mut g = Group::new(Joiner::And);
    g.extend(children);
    g
}

/// `c1 OR c2 OR ...`
pub fn or(children: impl IntoIterator<Item = impl Into<Fragment>>) -> Group {
    let mut g = Group::new(Joiner::Or);
    g.extend(children);
    g
}
