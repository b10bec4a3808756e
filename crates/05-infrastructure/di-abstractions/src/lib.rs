//! # Dependency Injection Abstractions
//!
//! 依赖注入抽象层，定义组件注册和依赖解析的核心接口。
//!
//! ## 核心接口
//!
//! - [`ComponentRegistry`] - 组件注册表接口
//! - [`ComponentLookup`] - 按名称查询组件
//! - [`Factory`] - 组件工厂接口
//! - [`Signature`] - 工厂声明的依赖名称
//! - [`inject`] - 依赖注入
//!
//! ## 使用示例
//!
//! ```rust
//! use di_abstractions::{factory, inject, Component, Signature};
//! use std::collections::HashMap;
//! use std::sync::Arc;
//!
//! let mut components = HashMap::new();
//! components.insert("a".to_owned(), Component::new(1_i32));
//! components.insert("b".to_owned(), Component::new(2_i32));
//!
//! let pair = factory(Signature::parse("(b, a)"), |b: Arc<i32>, a: Arc<i32>| (*b, *a));
//! let component = inject(&components, &pair).unwrap();
//! assert_eq!(component.downcast_ref::<(i32, i32)>(), Some(&(2, 1)));
//! ```

pub mod batch;
pub mod factory;
pub mod registry;
pub mod resolver;
pub mod signature;

pub use batch::*;
pub use factory::*;
pub use registry::*;
pub use resolver::*;
pub use signature::*;

pub use components_common::{
    enums, Component, ComponentError, ComponentName, ComponentResult, Singleton,
    UniqueIdentifier, COMPONENT_NOT_EXIST,
};
