//! 依赖解析
//!
//! 按工厂签名逐个查询依赖并调用工厂。解析本身不持有状态。

use crate::factory::{Factory, ResolvedDependency};
use crate::signature::Signature;
use components_common::{Component, ComponentError, ComponentResult, Singleton};
use std::collections::HashMap;
use std::hash::BuildHasher;
use tracing::{debug, trace};

/// 按名称查询组件
pub trait ComponentLookup {
    /// 查询组件，不存在时返回 [`Singleton::NotExist`]
    fn lookup(&self, name: &str) -> Singleton;
}

impl<S> ComponentLookup for HashMap<String, Component, S>
where
    S: BuildHasher,
{
    fn lookup(&self, name: &str) -> Singleton {
        Singleton::from(self.get(name).cloned())
    }
}

/// 按签名顺序解析全部依赖
///
/// 遇到第一个缺失的依赖立即返回 [`ComponentError::MissingDependency`]。
pub fn resolve_dependencies<L>(
    lookup: &L,
    signature: &Signature,
) -> ComponentResult<Vec<ResolvedDependency>>
where
    L: ComponentLookup + ?Sized,
{
    signature
        .iter()
        .map(|name| match lookup.lookup(name) {
            Singleton::Found(component) => {
                trace!(dependency = name, type_name = component.type_name(), "依赖已解析");
                Ok(ResolvedDependency::new(name, component))
            }
            Singleton::NotExist(_) => {
                debug!(dependency = name, "依赖缺失");
                Err(ComponentError::missing_dependency(name))
            }
        })
        .collect()
}

/// 向工厂注入依赖并执行
///
/// 工厂声明的依赖数量与其参数个数不一致时返回 [`ComponentError::InvalidFactory`]。
pub fn inject<L, F>(lookup: &L, factory: &F) -> ComponentResult<Component>
where
    L: ComponentLookup + ?Sized,
    F: Factory + ?Sized,
{
    let signature = factory.signature();
    let arity = factory.arity();
    if signature.len() != arity {
        return Err(ComponentError::invalid_factory(format!(
            "声明的依赖 {signature} 有 {} 个, 工厂参数有 {arity} 个",
            signature.len()
        )));
    }

    let dependencies = resolve_dependencies(lookup, &signature)?;
    factory.invoke(dependencies)
}
