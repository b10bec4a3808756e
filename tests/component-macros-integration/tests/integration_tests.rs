//! Centralized integration tests for component-macros crate

use component_macros::factory;
use di_abstractions::{extract_parameter_names, Factory};
use di_impl::{Component, ComponentError, ComponentRegistry, ComponentRegistryImpl};
use std::sync::Arc;

#[derive(Debug)]
pub struct Database {
    pub url: String,
}

#[derive(Debug)]
pub struct Mailer {
    pub sender: String,
    pub database: Arc<Database>,
}

#[factory]
fn database() -> Database {
    Database {
        url: "postgres://localhost/mail".to_string(),
    }
}

#[factory]
fn mailer(
    // 发件人地址
    sender: Arc<String>,
    /* 持久化 */ database: Arc<Database>,
) -> Mailer {
    Mailer {
        sender: sender.to_string(),
        database,
    }
}

#[factory(name = "ReversedPair")]
fn pair(b: Arc<i32>, a: Arc<i32>) -> (i32, i32) {
    (*b, *a)
}

#[factory]
fn port(#[dependency("http.port")] raw: Arc<String>) -> Result<u16, std::num::ParseIntError> {
    raw.parse()
}

#[factory]
fn alias(r#type: Component) -> Component {
    r#type
}

#[test]
fn test_parameter_names_follow_declaration() {
    assert_eq!(extract_parameter_names(&MailerFactory), ["sender", "database"]);
    assert_eq!(extract_parameter_names(&ReversedPair), ["b", "a"]);
    assert!(extract_parameter_names(&DatabaseFactory).is_empty());
    assert_eq!(MailerFactory.arity(), 2);
}

#[test]
fn test_dependency_attribute_and_raw_identifiers() {
    assert_eq!(extract_parameter_names(&PortFactory), ["http.port"]);
    assert_eq!(extract_parameter_names(&AliasFactory), ["type"]);
}

#[test]
fn test_generated_factories_register() -> anyhow::Result<()> {
    let registry = ComponentRegistryImpl::new();
    registry.register_instance("sender", String::from("noreply@example.com"))?;
    registry.register("database", DatabaseFactory)?;
    registry.register("mailer", MailerFactory)?;

    let mailer = registry
        .get_singleton("mailer")
        .downcast::<Mailer>()
        .ok_or_else(|| anyhow::anyhow!("mailer 未注册"))?;
    let database = registry
        .get_singleton("database")
        .downcast::<Database>()
        .ok_or_else(|| anyhow::anyhow!("database 未注册"))?;

    assert_eq!(mailer.sender, "noreply@example.com");
    assert!(Arc::ptr_eq(&mailer.database, &database));
    assert_eq!(database.url, "postgres://localhost/mail");
    Ok(())
}

#[test]
fn test_positional_order() -> anyhow::Result<()> {
    let registry = ComponentRegistryImpl::new();
    registry.register_instance("a", 1_i32)?;
    registry.register_instance("b", 2_i32)?;

    let component = registry.depends(&ReversedPair)?;
    assert_eq!(component.downcast_ref::<(i32, i32)>(), Some(&(2, 1)));
    Ok(())
}

#[test]
fn test_missing_dependency_from_generated_factory() {
    let registry = ComponentRegistryImpl::new();

    let error = registry.register("mailer", MailerFactory).unwrap_err();
    assert!(matches!(error, ComponentError::MissingDependency { ref name } if name == "sender"));
}

#[test]
fn test_result_returning_factory() -> anyhow::Result<()> {
    let registry = ComponentRegistryImpl::new();
    registry.register_instance("http.port", String::from("not-a-port"))?;

    let error = registry.register("port", PortFactory).unwrap_err();
    assert!(matches!(error, ComponentError::FactoryFailed { .. }));
    assert!(!registry.exists("port"));

    let other = ComponentRegistryImpl::new();
    other.register_instance("http.port", String::from("8080"))?;
    other.register("port", PortFactory)?;
    assert_eq!(other.get_singleton("port").downcast::<u16>().as_deref(), Some(&8080));
    Ok(())
}

#[test]
fn test_original_function_is_still_callable() {
    let value = pair(Arc::new(5), Arc::new(6));
    assert_eq!(value, (5, 6));
}
