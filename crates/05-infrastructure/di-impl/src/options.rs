//! 注册表配置

use crate::registry::ComponentRegistryImpl;
use serde::{Deserialize, Serialize};

/// 注册表配置
///
/// 可直接嵌入宿主应用的配置文件，缺省字段使用默认值。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryOptions {
    /// 注册表标签，出现在日志字段中
    pub label: String,
    /// 预分配的组件容量
    pub initial_capacity: usize,
}

impl Default for RegistryOptions {
    fn default() -> Self {
        Self {
            label: "default".to_string(),
            initial_capacity: 0,
        }
    }
}

/// 注册表构建器
#[derive(Debug, Clone, Default)]
pub struct RegistryBuilder {
    options: RegistryOptions,
}

impl RegistryBuilder {
    /// 创建新的注册表构建器
    pub fn new() -> Self {
        Self::default()
    }

    /// 使用已有配置
    pub fn with_options(options: RegistryOptions) -> Self {
        Self { options }
    }

    /// 设置标签
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.options.label = label.into();
        self
    }

    /// 设置预分配容量
    pub fn initial_capacity(mut self, capacity: usize) -> Self {
        self.options.initial_capacity = capacity;
        self
    }

    pub fn build(self) -> ComponentRegistryImpl {
        ComponentRegistryImpl::with_options(self.options)
    }
}
