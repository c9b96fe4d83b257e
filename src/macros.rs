//! 可变参数的便捷写法。
//!
//! - `sql!("a = ? AND b = ?", 1, "x")`：参数类型可以各不相同；
//! - `and!(f1, f2, ...)` / `or!(f1, f2, ...)`：子节点类型可以各不相同；
//! - [`IntoStrings`]：让 `selects`、`order_by` 等方法同时接受 `&str`、数组、`Vec`。

/// 构造 [`Raw`](crate::Raw) 片段，每个参数各自 `Into<Arg>`。
#[macro_export]
macro_rules! sql {
    ($sql:expr $(,)?) => {
        $crate::Raw::new($sql, ::std::iter::empty::<$crate::Arg>())
    };
    ($sql:expr, $($arg:expr),+ $(,)?) => {
        $crate::Raw::new($sql, [$($crate::Arg::from($arg)),+])
    };
}

/// 构造参数数组：`args![1, "x", None::<i64>]`。
#[macro_export]
macro_rules! args {
    () => {
        ::std::vec::Vec::<$crate::Arg>::new()
    };
    ($($arg:expr),+ $(,)?) => {
        ::std::vec![$($crate::Arg::from($arg)),+]
    };
}

/// `and!(a, b, ...)`：子节点可以是任意 `Into<Fragment>` 的类型。
#[macro_export]
macro_rules! and {
    ($($child:expr),* $(,)?) => {
        {
            let children: ::std::vec::Vec<$crate::Fragment> =
                ::std::vec![$($crate::Fragment::from($child)),*];
            $crate::and(children)
        }
    };
}

/// `or!(a, b, ...)`：子节点可以是任意 `Into<Fragment>` 的类型。
#[macro_export]
macro_rules! or {
    ($($child:expr),* $(,)?) => {
        {
            let children: ::std::vec::Vec<$crate::Fragment> =
                ::std::vec![$($crate::Fragment::from($child)),*];
            $crate::or(children)
        }
    };
}

pub trait IntoStrings {
    fn extend_into_strings(self, dst: &mut Vec<String>);
}

impl IntoStrings for String {
    fn extend_into_strings(self, dst: &mut Vec<String>) {
        dst.push(self);
    }
}

impl IntoStrings for &str {
    fn extend_into_strings(self, dst: &mut Vec<String>) {
        dst.push(self.to_string());
    }
}

impl<const N: usize, T> IntoStrings for [T; N]
where
    T: Into<String>,
{
    fn extend_into_strings(self, dst: &mut Vec<String>) {
        dst.extend(self.into_iter().map(Into::into));
    }
}

impl<T> IntoStrings for &[T]
where
    T: Into<String> + Clone,
{
    fn extend_into_strings(self, dst: &mut Vec<String>) {
        dst.extend(self.iter().cloned().map(Into::into));
    }
}

impl<T> IntoStrings for Vec<T>
where
    T: Into<String>,
{
    fn extend_into_strings(self, dst: &mut Vec<String>) {
        dst.extend(self.into_iter().map(Into::into));
    }
}

#[doc(hidden)]
pub fn collect_into_strings<T>(value: T) -> Vec<String>
where
    T: IntoStrings,
{
    let mut dst = Vec::new();
    value.extend_into_strings(&mut dst);
    dst
}
