//! 组件注册表抽象接口

use crate::batch::{validate_register_all_signature, Argument};
use crate::factory::{Factory, Instance};
use crate::resolver::{inject, ComponentLookup};
use components_common::{Component, ComponentResult, Singleton};
use tracing::debug;

/// 组件注册表 trait
///
/// 名称到单例组件的映射。组件在注册时立即创建，只能依赖此前已注册的组件。
pub trait ComponentRegistry: ComponentLookup {
    /// 检查名称是否已注册
    fn exists(&self, name: &str) -> bool;

    /// 注册组件
    ///
    /// 名称已存在时返回 [`ComponentError::DuplicateName`](components_common::ComponentError::DuplicateName)，
    /// 否则解析依赖、调用工厂并保存其返回值。
    fn register<F>(&self, name: &str, factory: F) -> ComponentResult<Component>
    where
        F: Factory;

    /// 注册已创建好的实例
    fn register_instance<T>(&self, name: &str, value: T) -> ComponentResult<Component>
    where
        T: Send + Sync + 'static,
    {
        self.register(name, Instance::new(value))
    }

    /// 获取组件，不存在时返回携带 `COMPONENT_NOT_EXIST` 的结果
    fn get_singleton(&self, name: &str) -> Singleton {
        self.lookup(name)
    }

    /// 向工厂注入依赖并执行，不注册结果
    fn depends<F>(&self, factory: &F) -> ComponentResult<Component>
    where
        F: Factory + ?Sized,
    {
        inject(self, factory)
    }

    /// 向动态参数注入依赖，参数不是工厂时失败
    fn depends_argument(&self, argument: Argument) -> ComponentResult<Component> {
        let factory = argument.into_factory()?;
        self.depends(&factory)
    }

    /// 按 `(名称, 工厂), ...` 的顺序批量注册
    ///
    /// 参数先整体校验，校验失败时不注册任何组件；之后从左到右逐个注册，
    /// 后面的工厂可以依赖前面注册的组件。
    fn register_all(&self, arguments: Vec<Argument>) -> ComponentResult<()> {
        let pairs = validate_register_all_signature(arguments)?;
        debug!(count = pairs.len(), "批量注册组件");

        for (name, argument) in pairs {
            let factory = argument.into_factory()?;
            self.register(name.as_str(), factory)?;
        }

        Ok(())
    }
}
