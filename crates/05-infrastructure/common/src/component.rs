//! 组件实例与查询结果
//!
//! 注册表不关心组件的具体类型，所有实例都以类型擦除的共享指针保存。

use crate::enums::{UniqueIdentifier, COMPONENT_NOT_EXIST};
use std::any::{type_name, Any};
use std::fmt;
use std::sync::Arc;

/// 组件实例
///
/// 工厂返回值的类型擦除句柄。克隆只复制句柄，不复制实例本身。
#[derive(Clone)]
pub struct Component {
    value: Arc<dyn Any + Send + Sync>,
    type_name: &'static str,
}

impl Component {
    /// 包装一个组件实例
    pub fn new<T>(value: T) -> Self
    where
        T: Send + Sync + 'static,
    {
        Self::from_arc(Arc::new(value))
    }

    /// 包装一个已共享的组件实例，不会再分配
    pub fn from_arc<T>(value: Arc<T>) -> Self
    where
        T: Send + Sync + 'static,
    {
        Self {
            value,
            type_name: type_name::<T>(),
        }
    }

    /// 包装工厂返回值，返回值本身已是 [`Component`] 时直接复用
    pub fn wrap<T>(value: T) -> Self
    where
        T: Send + Sync + 'static,
    {
        match (&value as &dyn Any).downcast_ref::<Self>() {
            Some(component) => component.clone(),
            None => Self::new(value),
        }
    }

    /// 组件实例的类型名称
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// 检查组件实例是否为指定类型
    pub fn is<T: 'static>(&self) -> bool {
        self.value.is::<T>()
    }

    /// 以共享指针取出指定类型的实例
    pub fn downcast<T>(&self) -> Option<Arc<T>>
    where
        T: Send + Sync + 'static,
    {
        self.value.clone().downcast::<T>().ok()
    }

    /// 以引用取出指定类型的实例
    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        self.value.downcast_ref::<T>()
    }

    /// 两个句柄是否指向同一个实例
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.value, &other.value)
    }

    /// 组件实例是否携带 [`COMPONENT_NOT_EXIST`] 哨兵
    ///
    /// 哨兵的引用和未命中的查询结果 [`Singleton::NotExist`] 都算作哨兵。
    pub fn is_sentinel(&self) -> bool {
        if let Some(singleton) = self.downcast_ref::<Singleton>() {
            return singleton.is_not_exist();
        }
        self.downcast_ref::<&'static UniqueIdentifier>()
            .is_some_and(|identifier| *identifier == &COMPONENT_NOT_EXIST)
    }
}

impl fmt::Debug for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Component")
            .field("type_name", &self.type_name)
            .finish_non_exhaustive()
    }
}

/// 组件查询结果
///
/// 查询路径从不报错：组件不存在时返回携带 [`COMPONENT_NOT_EXIST`] 的 `NotExist`。
#[derive(Clone, Debug)]
pub enum Singleton {
    /// 已注册的组件
    Found(Component),
    /// 组件不存在，携带哨兵
    NotExist(&'static UniqueIdentifier),
}

impl Singleton {
    /// 未找到组件时的查询结果
    pub fn not_exist() -> Self {
        Self::NotExist(&COMPONENT_NOT_EXIST)
    }

    /// 是否为未找到的查询结果
    pub fn is_not_exist(&self) -> bool {
        matches!(self, Self::NotExist(_))
    }

    /// 借用找到的组件
    pub fn component(&self) -> Option<&Component> {
        match self {
            Self::Found(component) => Some(component),
            Self::NotExist(_) => None,
        }
    }

    /// 取出找到的组件
    pub fn into_component(self) -> Option<Component> {
        match self {
            Self::Found(component) => Some(component),
            Self::NotExist(_) => None,
        }
    }

    /// 以共享指针取出指定类型的实例
    pub fn downcast<T>(&self) -> Option<Arc<T>>
    where
        T: Send + Sync + 'static,
    {
        self.component().and_then(Component::downcast::<T>)
    }
}

impl From<Option<Component>> for Singleton {
    fn from(component: Option<Component>) -> Self {
        component.map_or_else(Self::not_exist, Self::Found)
    }
}

impl PartialEq<UniqueIdentifier> for Singleton {
    fn eq(&self, other: &UniqueIdentifier) -> bool {
        match self {
            Self::NotExist(identifier) => *identifier == other,
            Self::Found(_) => false,
        }
    }
}
