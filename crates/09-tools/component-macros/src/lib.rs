//! # Component Macros
//!
//! 这个 crate 提供了从函数签名生成组件工厂的过程宏。
//!
//! ## 核心宏
//!
//! - [`factory`] - 把函数包装为 `di_abstractions::Factory`，参数名即依赖名称
//!
//! ## 使用示例
//!
//! ```rust,ignore
//! use component_macros::factory;
//! use di_impl::{ComponentRegistry, ComponentRegistryImpl};
//! use std::sync::Arc;
//!
//! #[factory]
//! fn greeting(prefix: Arc<String>, /* 用户名 */ user: Arc<String>) -> String {
//!     format!("{prefix}, {user}")
//! }
//!
//! let registry = ComponentRegistryImpl::new();
//! registry.register_instance("prefix", String::from("你好")).unwrap();
//! registry.register_instance("user", String::from("张三")).unwrap();
//! registry.register("greeting", GreetingFactory).unwrap();
//! ```

use proc_macro::TokenStream;

mod factory;
mod utils;

// Re-exports are not allowed in proc-macro crates

/// 组件工厂宏
///
/// 保留原函数，并生成一个实现了 `di_abstractions::Factory` 的单元结构体
/// （默认名称为函数名的帕斯卡形式加 `Factory` 后缀）。
/// 参数名按顺序成为依赖名称，注释不会进入签名。
///
/// # 参数
///
/// - `name = "CustomFactory"` - 自定义生成的结构体名称
/// - `fallible` / `infallible` - 指定返回值是否按 `Result` 处理（默认根据返回类型判断）
///
/// 参数上的 `#[dependency("name")]` 可以指定不是合法标识符的依赖名称。
///
/// # 示例
///
/// ```rust,ignore
/// #[factory(name = "ServerFactory")]
/// fn build_server(#[dependency("http.port")] port: Arc<u16>) -> std::io::Result<Server> {
///     Server::bind(*port)
/// }
/// ```
///
/// 生成的代码引用 `::di_abstractions`，使用方需要依赖该 crate。
#[proc_macro_attribute]
pub fn factory(args: TokenStream, input: TokenStream) -> TokenStream {
    factory::factory_impl(args, input)
}
