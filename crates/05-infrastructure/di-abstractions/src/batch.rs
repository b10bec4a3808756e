//! 批量注册参数
//!
//! 参数列表按 `(名称, 工厂), ...` 排列，列表而非映射是为了保留注册顺序。

use crate::factory::Factory;
use components_common::{Component, ComponentError, ComponentName, ComponentResult};
use std::fmt;

/// 批量注册参数
pub enum Argument {
    /// 组件名称
    Name(String),
    /// 组件工厂
    Factory(Box<dyn Factory>),
    /// 任意值（不是工厂）
    Value(Component),
}

impl Argument {
    pub fn name(name: impl Into<String>) -> Self {
        Self::Name(name.into())
    }

    pub fn factory<F>(factory: F) -> Self
    where
        F: Factory + 'static,
    {
        Self::Factory(Box::new(factory))
    }

    pub fn value<T>(value: T) -> Self
    where
        T: Send + Sync + 'static,
    {
        Self::Value(Component::wrap(value))
    }

    /// 参数种类，用于错误信息
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Name(_) => "名称",
            Self::Factory(_) => "工厂",
            Self::Value(_) => "值",
        }
    }

    /// 取出工厂，参数不是工厂时返回 [`ComponentError::InvalidFactory`]
    pub fn into_factory(self) -> ComponentResult<Box<dyn Factory>> {
        match self {
            Self::Factory(factory) => Ok(factory),
            Self::Name(name) => Err(ComponentError::invalid_factory(format!(
                "名称 \"{name}\" 不是工厂"
            ))),
            Self::Value(component) => Err(ComponentError::invalid_factory(format!(
                "{} 类型的值不是工厂",
                component.type_name()
            ))),
        }
    }
}

impl fmt::Debug for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => f.debug_tuple("Name").field(name).finish(),
            Self::Factory(factory) => f
                .debug_tuple("Factory")
                .field(&factory.signature().to_string())
                .finish(),
            Self::Value(component) => f.debug_tuple("Value").field(component).finish(),
        }
    }
}

/// 校验批量注册参数并按顺序配对
///
/// 参数个数为奇数，或偶数位置（从 0 开始）不是非空名称时返回
/// [`ComponentError::InvalidArguments`]。奇数位置的值在注册时才检查。
pub fn validate_register_all_signature(
    arguments: Vec<Argument>,
) -> ComponentResult<Vec<(ComponentName, Argument)>> {
    if arguments.len() % 2 == 1 {
        return Err(ComponentError::invalid_arguments(format!(
            "参数个数必须为偶数, 实际为 {}",
            arguments.len()
        )));
    }

    let mut pairs = Vec::with_capacity(arguments.len() / 2);
    let mut arguments = arguments.into_iter().enumerate();

    while let Some((position, name)) = arguments.next() {
        let name = match name {
            Argument::Name(name) => ComponentName::new(name).map_err(|_| {
                ComponentError::invalid_arguments(format!("第 {position} 个参数是空名称"))
            })?,
            other => {
                return Err(ComponentError::invalid_arguments(format!(
                    "第 {position} 个参数应为名称, 实际为{}",
                    other.kind()
                )))
            }
        };

        // 个数已校验为偶数
        if let Some((_, value)) = arguments.next() {
            pairs.push((name, value));
        }
    }

    Ok(pairs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factory::{factory, Instance};
    use crate::signature::Signature;

    #[test]
    fn test_odd_count_is_rejected() {
        let arguments = vec![
            Argument::name("a"),
            Argument::factory(Instance::new(1_i32)),
            Argument::name("b"),
        ];

        let error = validate_register_all_signature(arguments).unwrap_err();
        assert!(matches!(error, ComponentError::InvalidArguments { .. }));
    }

    #[test]
    fn test_non_name_at_even_position_is_rejected() {
        let arguments = vec![
            Argument::value(42_i32),
            Argument::factory(Instance::new(1_i32)),
        ];

        let error = validate_register_all_signature(arguments).unwrap_err();
        assert!(matches!(error, ComponentError::InvalidArguments { ref reason } if reason.contains('0')));
    }

    #[test]
    fn test_empty_name_is_rejected() {
        let arguments = vec![Argument::name(""), Argument::factory(Instance::new(()))];

        assert!(validate_register_all_signature(arguments).is_err());
    }

    #[test]
    fn test_pairs_keep_order() {
        let arguments = vec![
            Argument::name("first"),
            Argument::factory(factory(Signature::empty(), || 1_i32)),
            Argument::name("second"),
            Argument::value("不是工厂"),
        ];

        let pairs = validate_register_all_signature(arguments).unwrap();
        let names: Vec<_> = pairs.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, ["first", "second"]);
    }

    #[test]
    fn test_empty_list_is_valid() {
        assert!(validate_register_all_signature(Vec::new()).unwrap().is_empty());
    }

    #[test]
    fn test_into_factory_rejects_values() {
        let error = Argument::value(3_u8).into_factory().err().unwrap();
        assert!(matches!(error, ComponentError::InvalidFactory { .. }));
        assert!(Argument::factory(Instance::new(3_u8)).into_factory().is_ok());
    }
}
