//! 组件注册表演示
//!
//! 从 TOML 读取注册表配置，按顺序注册几个相互依赖的组件。

use component_macros::factory;
use di_impl::{
    factory as closure_factory, Argument, ComponentRegistry, ComponentRegistryImpl,
    RegistryOptions, Signature, COMPONENT_NOT_EXIST,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

const CONFIG: &str = r#"
[registry]
label = "demo"
initial_capacity = 8

[app]
greeting = "你好"
audience = "世界"
"#;

#[derive(Debug, Deserialize)]
struct DemoConfig {
    registry: RegistryOptions,
    app: AppSettings,
}

#[derive(Debug, Clone, Deserialize)]
struct AppSettings {
    greeting: String,
    audience: String,
}

#[derive(Debug)]
struct Greeter {
    greeting: String,
}

impl Greeter {
    fn greet(&self, audience: &str) -> String {
        format!("{}, {audience}!", self.greeting)
    }
}

#[factory]
fn greeter(settings: Arc<AppSettings>) -> Greeter {
    Greeter {
        greeting: settings.greeting.clone(),
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
        .with_target(false)
        .init();

    let config: DemoConfig = toml::from_str(CONFIG)?;
    let registry = ComponentRegistryImpl::with_options(config.registry);

    registry.register_all(vec![
        Argument::name("settings"),
        Argument::factory(di_impl::Instance::new(config.app)),
        Argument::name("greeter"),
        Argument::factory(GreeterFactory),
        Argument::name("message"),
        Argument::factory(closure_factory(
            Signature::parse("|greeter, settings|"),
            |greeter: Arc<Greeter>, settings: Arc<AppSettings>| greeter.greet(&settings.audience),
        )),
    ])?;

    if let Some(message) = registry.get_singleton("message").downcast::<String>() {
        info!(message = %message, "组件已就绪");
    }

    if registry.get_singleton("mailer") == COMPONENT_NOT_EXIST {
        info!("mailer 未注册");
    }

    if let Err(error) = registry.register("greeter", GreeterFactory) {
        info!(%error, "重复注册被拒绝");
    }

    info!(components = ?registry.names(), "演示结束");
    Ok(())
}
