//! 组件工厂抽象接口
//!
//! 工厂声明依赖名称，并用解析好的依赖实例创建组件。
//! 普通闭包通过 [`factory`] / [`try_factory`] 搭配显式的依赖名称列表成为工厂。

use crate::signature::Signature;
use components_common::{Component, ComponentError, ComponentResult};
use std::marker::PhantomData;
use std::sync::Arc;

/// 已解析的依赖
#[derive(Debug, Clone)]
pub struct ResolvedDependency {
    /// 声明的依赖名称
    pub name: String,
    /// 注册表中的组件实例
    pub component: Component,
}

impl ResolvedDependency {
    pub fn new(name: impl Into<String>, component: Component) -> Self {
        Self {
            name: name.into(),
            component,
        }
    }
}

/// 组件工厂 trait
pub trait Factory {
    /// 按参数顺序声明的依赖名称
    fn signature(&self) -> Signature;

    /// 工厂实际接受的参数个数
    fn arity(&self) -> usize {
        self.signature().len()
    }

    /// 使用按声明顺序排列的依赖创建组件实例
    fn invoke(&self, dependencies: Vec<ResolvedDependency>) -> ComponentResult<Component>;
}

impl<F> Factory for Box<F>
where
    F: Factory + ?Sized,
{
    fn signature(&self) -> Signature {
        (**self).signature()
    }

    fn arity(&self) -> usize {
        (**self).arity()
    }

    fn invoke(&self, dependencies: Vec<ResolvedDependency>) -> ComponentResult<Component> {
        (**self).invoke(dependencies)
    }
}

/// 从已解析依赖中取出工厂参数
pub trait FromComponent: Sized {
    fn from_dependency(dependency: ResolvedDependency) -> ComponentResult<Self>;
}

impl<T> FromComponent for Arc<T>
where
    T: Send + Sync + 'static,
{
    fn from_dependency(dependency: ResolvedDependency) -> ComponentResult<Self> {
        dependency
            .component
            .downcast::<T>()
            .ok_or_else(|| ComponentError::DependencyTypeMismatch {
                expected: std::any::type_name::<T>(),
                actual: dependency.component.type_name(),
                name: dependency.name,
            })
    }
}

impl FromComponent for Component {
    fn from_dependency(dependency: ResolvedDependency) -> ComponentResult<Self> {
        Ok(dependency.component)
    }
}

/// 按顺序取出下一个依赖并转换为参数类型
#[doc(hidden)]
pub fn take_dependency<T, I>(dependencies: &mut I) -> ComponentResult<T>
where
    T: FromComponent,
    I: Iterator<Item = ResolvedDependency>,
{
    dependencies
        .next()
        .ok_or_else(|| ComponentError::invalid_factory("提供的依赖少于工厂参数"))
        .and_then(T::from_dependency)
}

/// 可作为工厂调用的函数
///
/// 为最多 8 个参数的 `Fn` 实现，每个参数类型都需要实现 [`FromComponent`]。
pub trait FactoryFn<Args> {
    type Output;

    const ARITY: usize;

    fn call(&self, dependencies: Vec<ResolvedDependency>) -> ComponentResult<Self::Output>;
}

macro_rules! count {
    () => { 0_usize };
    ($head:ident $($tail:ident)*) => { 1_usize + count!($($tail)*) };
}

macro_rules! impl_factory_fn {
    ($($arg:ident),*) => {
        impl<Func, Out, $($arg,)*> FactoryFn<($($arg,)*)> for Func
        where
            Func: Fn($($arg),*) -> Out,
            $($arg: FromComponent,)*
        {
            type Output = Out;

            const ARITY: usize = count!($($arg)*);

            #[allow(non_snake_case, unused_mut, unused_variables)]
            fn call(&self, dependencies: Vec<ResolvedDependency>) -> ComponentResult<Out> {
                let mut dependencies = dependencies.into_iter();
                $(let $arg = take_dependency::<$arg, _>(&mut dependencies)?;)*
                Ok((self)($($arg),*))
            }
        }
    };
}

impl_factory_fn!();
impl_factory_fn!(A1);
impl_factory_fn!(A1, A2);
impl_factory_fn!(A1, A2, A3);
impl_factory_fn!(A1, A2, A3, A4);
impl_factory_fn!(A1, A2, A3, A4, A5);
impl_factory_fn!(A1, A2, A3, A4, A5, A6);
impl_factory_fn!(A1, A2, A3, A4, A5, A6, A7);
impl_factory_fn!(A1, A2, A3, A4, A5, A6, A7, A8);

/// 闭包工厂
///
/// 闭包的返回值成为组件实例；返回 [`Component`] 时直接复用该实例。
pub struct FnFactory<F, Args> {
    signature: Signature,
    func: F,
    _args: PhantomData<fn(Args)>,
}

impl<F, Args> Factory for FnFactory<F, Args>
where
    F: FactoryFn<Args>,
    F::Output: Send + Sync + 'static,
{
    fn signature(&self) -> Signature {
        self.signature.clone()
    }

    fn arity(&self) -> usize {
        F::ARITY
    }

    fn invoke(&self, dependencies: Vec<ResolvedDependency>) -> ComponentResult<Component> {
        self.func.call(dependencies).map(Component::wrap)
    }
}

/// 可失败的闭包工厂
///
/// 闭包返回 `Err` 时注入失败并返回 [`ComponentError::FactoryFailed`]。
pub struct TryFnFactory<F, Args> {
    signature: Signature,
    func: F,
    _args: PhantomData<fn(Args)>,
}

impl<F, Args, T, E> Factory for TryFnFactory<F, Args>
where
    F: FactoryFn<Args, Output = Result<T, E>>,
    T: Send + Sync + 'static,
    E: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    fn signature(&self) -> Signature {
        self.signature.clone()
    }

    fn arity(&self) -> usize {
        F::ARITY
    }

    fn invoke(&self, dependencies: Vec<ResolvedDependency>) -> ComponentResult<Component> {
        self.func
            .call(dependencies)?
            .map(Component::wrap)
            .map_err(ComponentError::factory_failed)
    }
}

/// 用显式依赖名称列表包装一个闭包
///
/// ```
/// use di_abstractions::{factory, Factory};
/// use std::sync::Arc;
///
/// let greeter = factory(["name"], |name: Arc<String>| format!("你好, {name}"));
/// assert_eq!(greeter.signature().parameters(), ["name"]);
/// ```
pub fn factory<F, Args>(signature: impl Into<Signature>, func: F) -> FnFactory<F, Args>
where
    F: FactoryFn<Args>,
{
    FnFactory {
        signature: signature.into(),
        func,
        _args: PhantomData,
    }
}

/// 用显式依赖名称列表包装一个返回 `Result` 的闭包
pub fn try_factory<F, Args>(signature: impl Into<Signature>, func: F) -> TryFnFactory<F, Args>
where
    F: FactoryFn<Args>,
{
    TryFnFactory {
        signature: signature.into(),
        func,
        _args: PhantomData,
    }
}

/// 已创建好的实例
///
/// 无依赖的工厂，每次调用都返回同一个实例句柄。
#[derive(Debug, Clone)]
pub struct Instance {
    component: Component,
}

impl Instance {
    pub fn new<T>(value: T) -> Self
    where
        T: Send + Sync + 'static,
    {
        Self {
            component: Component::wrap(value),
        }
    }

    pub fn from_component(component: Component) -> Self {
        Self { component }
    }
}

impl Factory for Instance {
    fn signature(&self) -> Signature {
        Signature::empty()
    }

    fn arity(&self) -> usize {
        0
    }

    fn invoke(&self, _dependencies: Vec<ResolvedDependency>) -> ComponentResult<Component> {
        Ok(self.component.clone())
    }
}
