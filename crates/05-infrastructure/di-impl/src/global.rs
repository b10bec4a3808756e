//! 进程级注册表
//!
//! 首次访问时创建，进程结束前一直存在。需要隔离的场景（例如测试）应自行创建
//! [`ComponentRegistryImpl`]。

use crate::options::RegistryBuilder;
use crate::registry::ComponentRegistryImpl;
use once_cell::sync::Lazy;

/// 全局组件注册表
static GLOBAL_COMPONENT_REGISTRY: Lazy<ComponentRegistryImpl> =
    Lazy::new(|| RegistryBuilder::new().label("global").build());

/// 获取全局组件注册表
pub fn global() -> &'static ComponentRegistryImpl {
    &GLOBAL_COMPONENT_REGISTRY
}
