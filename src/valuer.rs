//! SqlValuer：在插值或执行前才求值的参数。
//!
//! 典型场景是自定义类型（金额、枚举、加密字段……）希望自行决定最终写入数据库的值。

use crate::value::SqlValue;

/// Valuer 求值失败。
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("sql valuer error: {0}")]
pub struct ValuerError(pub String);

/// 可延迟计算实际值的参数。
pub trait SqlValuer: dyn_clone::DynClone + std::fmt::Debug {
    fn value(&self) -> Result<SqlValue, ValuerError>;
}

dyn_clone::clone_trait_object!(SqlValuer);

/// 把任意 `SqlValuer` 装箱为参数。
pub fn valuer(v: impl SqlValuer + 'static) -> crate::value::Arg {
    crate::value::Arg::Valuer(Box::new(v))
}
