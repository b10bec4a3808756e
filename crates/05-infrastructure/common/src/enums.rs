//! 基础状态枚举
//!
//! [`COMPONENT_NOT_EXIST`] 是查询路径使用的"组件不存在"标记，只能按地址比较。

use std::fmt;
use std::ptr;

/// 唯一标识对象
///
/// 字段私有且不可克隆，crate 外部无法构造出与之相等的值。
pub struct UniqueIdentifier {
    description: &'static str,
}

impl UniqueIdentifier {
    const fn new(description: &'static str) -> Self {
        Self { description }
    }

    pub fn description(&self) -> &'static str {
        self.description
    }
}

impl PartialEq for UniqueIdentifier {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self, other)
    }
}

impl Eq for UniqueIdentifier {}

impl fmt::Debug for UniqueIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UniqueIdentifier({})", self.description)
    }
}

impl fmt::Display for UniqueIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description)
    }
}

/// 组件不存在
pub static COMPONENT_NOT_EXIST: UniqueIdentifier = UniqueIdentifier::new("Component not exist");
