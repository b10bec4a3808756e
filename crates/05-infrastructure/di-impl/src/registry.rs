//! 组件注册表实现

use crate::options::{RegistryBuilder, RegistryOptions};
use components_common::{Component, ComponentError, ComponentName, ComponentResult, Singleton};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use di_abstractions::{ComponentLookup, ComponentRegistry, Factory};
use parking_lot::ReentrantMutex;
use std::fmt;
use tracing::{debug, info, warn};

/// 具体的组件注册表实现
///
/// 查询可以并发进行；注册在临界区内完成"检查名称、创建实例、保存实例"，
/// 同一线程上的工厂可以在创建过程中继续注册其他组件。
pub struct ComponentRegistryImpl {
    /// 已创建的组件实例
    components: DashMap<ComponentName, Component>,
    /// 注册临界区
    registration: ReentrantMutex<()>,
    options: RegistryOptions,
}

impl ComponentRegistryImpl {
    /// 使用默认配置创建注册表
    pub fn new() -> Self {
        Self::with_options(RegistryOptions::default())
    }

    /// 使用指定配置创建注册表
    pub fn with_options(options: RegistryOptions) -> Self {
        Self {
            components: DashMap::with_capacity(options.initial_capacity),
            registration: ReentrantMutex::new(()),
            options,
        }
    }

    /// 创建注册表构建器
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// 注册表配置
    pub fn options(&self) -> &RegistryOptions {
        &self.options
    }

    /// 已注册的组件数量
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// 是否没有任何组件
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// 已注册的组件名称（按字典序）
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .components
            .iter()
            .map(|entry| entry.key().to_string())
            .collect();
        names.sort_unstable();
        names
    }
}

impl Default for ComponentRegistryImpl {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ComponentRegistryImpl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentRegistryImpl")
            .field("label", &self.options.label)
            .field("components", &self.names())
            .finish()
    }
}

impl ComponentLookup for ComponentRegistryImpl {
    fn lookup(&self, name: &str) -> Singleton {
        Singleton::from(self.components.get(name).map(|entry| entry.value().clone()))
    }
}

impl ComponentRegistry for ComponentRegistryImpl {
    fn exists(&self, name: &str) -> bool {
        self.components.contains_key(name)
    }

    fn register<F>(&self, name: &str, factory: F) -> ComponentResult<Component>
    where
        F: Factory,
    {
        let name = ComponentName::new(name)?;
        let _guard = self.registration.lock();

        if self.exists(name.as_str()) {
            warn!(registry = %self.options.label, component = %name, "组件已存在, 拒绝重复注册");
            return Err(ComponentError::duplicate_name(name));
        }

        debug!(
            registry = %self.options.label,
            component = %name,
            dependencies = %factory.signature(),
            "注册组件"
        );
        let component = self.depends(&factory)?;

        if component.is_sentinel() {
            return Err(ComponentError::invalid_factory(format!(
                "组件 {name} 的工厂返回了 COMPONENT_NOT_EXIST"
            )));
        }

        // 工厂执行期间可能在同一线程上注册了同名组件
        match self.components.entry(name) {
            Entry::Occupied(entry) => {
                warn!(registry = %self.options.label, component = %entry.key(), "组件在创建期间被注册");
                Err(ComponentError::duplicate_name(entry.key().as_str()))
            }
            Entry::Vacant(entry) => {
                info!(
                    registry = %self.options.label,
                    component = %entry.key(),
                    type_name = component.type_name(),
                    "组件注册完成"
                );
                entry.insert(component.clone());
                Ok(component)
            }
        }
    }
}
