//! # 依赖注入具体实现
//!
//! 提供线程安全的组件注册表、注册表配置以及可选的进程级注册表。
//!
//! ```rust
//! use di_impl::{factory, ComponentRegistry, ComponentRegistryImpl, Signature};
//! use std::sync::Arc;
//!
//! let registry = ComponentRegistryImpl::new();
//! registry.register_instance("greeting", String::from("你好")).unwrap();
//! registry
//!     .register(
//!         "message",
//!         factory(Signature::parse("(greeting)"), |greeting: Arc<String>| {
//!             format!("{greeting}, 世界")
//!         }),
//!     )
//!     .unwrap();
//!
//! let message = registry.get_singleton("message").downcast::<String>().unwrap();
//! assert_eq!(message.as_str(), "你好, 世界");
//! ```

pub mod global;
pub mod options;
pub mod registry;

pub use global::global;
pub use options::{RegistryBuilder, RegistryOptions};
pub use registry::ComponentRegistryImpl;

pub use di_abstractions::{
    enums, extract_parameter_names, factory, inject, try_factory, Argument, Component,
    ComponentError, ComponentLookup, ComponentName, ComponentRegistry, ComponentResult, Factory,
    Instance, Signature, Singleton, COMPONENT_NOT_EXIST,
};
