//! # Components Common
//!
//! 组件注册表各 crate 共用的基础类型。
//!
//! ## 核心类型
//!
//! - [`Component`] - 类型擦除的组件实例
//! - [`ComponentName`] - 组件名称
//! - [`Singleton`] - 组件查询结果
//! - [`enums::COMPONENT_NOT_EXIST`] - "组件不存在"哨兵
//! - [`ComponentError`] - 注册与注入错误

pub mod component;
pub mod enums;
pub mod errors;
pub mod name;

pub use component::*;
pub use enums::{UniqueIdentifier, COMPONENT_NOT_EXIST};
pub use errors::*;
pub use name::*;
