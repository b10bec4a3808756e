//! 错误类型定义

use thiserror::Error;

/// 组件注册与依赖注入错误类型
#[derive(Error, Debug)]
pub enum ComponentError {
    #[error("组件注册失败: {name} 已存在")]
    DuplicateName { name: String },

    #[error("无法向非工厂对象注入依赖: {reason}")]
    InvalidFactory { reason: String },

    #[error("依赖注入失败: \"{name}\"")]
    MissingDependency { name: String },

    #[error("批量注册参数无效: {reason}")]
    InvalidArguments { reason: String },

    #[error("依赖类型不匹配: {name}, 期望 {expected}, 实际 {actual}")]
    DependencyTypeMismatch {
        name: String,
        expected: &'static str,
        actual: &'static str,
    },

    #[error("组件工厂执行失败: {source}")]
    FactoryFailed {
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl ComponentError {
    /// 创建重复注册错误
    pub fn duplicate_name(name: impl Into<String>) -> Self {
        Self::DuplicateName { name: name.into() }
    }

    /// 创建无效工厂错误
    pub fn invalid_factory(reason: impl Into<String>) -> Self {
        Self::InvalidFactory {
            reason: reason.into(),
        }
    }

    /// 创建依赖缺失错误
    pub fn missing_dependency(name: impl Into<String>) -> Self {
        Self::MissingDependency { name: name.into() }
    }

    /// 创建批量注册参数错误
    pub fn invalid_arguments(reason: impl Into<String>) -> Self {
        Self::InvalidArguments {
            reason: reason.into(),
        }
    }

    /// 包装工厂自身返回的错误
    pub fn factory_failed<E>(error: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Self::FactoryFailed {
            source: error.into(),
        }
    }

    /// 出错的组件名称（如果错误与某个名称相关）
    pub fn component_name(&self) -> Option<&str> {
        match self {
            Self::DuplicateName { name }
            | Self::MissingDependency { name }
            | Self::DependencyTypeMismatch { name, .. } => Some(name),
            _ => None,
        }
    }
}

/// 结果类型别名
pub type ComponentResult<T> = Result<T, ComponentError>;
