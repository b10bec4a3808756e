//! Centralized integration tests for di-impl crate

use components_common::{enums, ComponentError};
use di_abstractions::{factory, inject, ComponentLookup, ComponentRegistry, Signature};
use di_impl::{global, ComponentRegistryImpl, RegistryBuilder, RegistryOptions};
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Barrier, Once};
use std::thread;

static INIT_LOGGER: Once = Once::new();

/// 初始化测试日志系统（只初始化一次）
fn init_test_logger() {
    INIT_LOGGER.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter("debug")
            .with_test_writer()
            .try_init()
            .ok();
    });
}

/// 测试组件
#[derive(Debug)]
struct Settings {
    region: String,
}

#[derive(Debug)]
struct Client {
    settings: Arc<Settings>,
    id: usize,
}

#[derive(Debug, Deserialize)]
struct ServiceConfig {
    registry: RegistryOptions,
}

#[test]
fn test_concurrent_registration_has_single_winner() {
    init_test_logger();
    let registry = Arc::new(ComponentRegistryImpl::new());
    let invocations = Arc::new(AtomicUsize::new(0));
    let threads = 8;
    let barrier = Arc::new(Barrier::new(threads));

    let handles: Vec<_> = (0..threads)
        .map(|id| {
            let registry = registry.clone();
            let invocations = invocations.clone();
            let barrier = barrier.clone();
            thread::spawn(move || {
                barrier.wait();
                registry
                    .register(
                        "shared",
                        factory(Signature::empty(), move || {
                            invocations.fetch_add(1, Ordering::SeqCst);
                            id
                        }),
                    )
                    .is_ok()
            })
        })
        .collect();

    let winners = handles
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .filter(|won| *won)
        .count();

    assert_eq!(winners, 1);
    assert_eq!(invocations.load(Ordering::SeqCst), 1);
    assert!(registry.get_singleton("shared").downcast::<usize>().is_some());
}

#[test]
fn test_concurrent_lookups_see_same_instance() -> anyhow::Result<()> {
    init_test_logger();
    let registry = Arc::new(ComponentRegistryImpl::new());
    registry.register_instance(
        "settings",
        Settings {
            region: "cn-shanghai".to_string(),
        },
    )?;

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let registry = registry.clone();
            thread::spawn(move || registry.get_singleton("settings").downcast::<Settings>())
        })
        .collect();

    let resolved: Vec<Arc<Settings>> = handles
        .into_iter()
        .filter_map(|handle| handle.join().ok().flatten())
        .collect();

    assert_eq!(resolved.len(), 4);
    assert!(resolved.windows(2).all(|pair| Arc::ptr_eq(&pair[0], &pair[1])));
    assert_eq!(resolved[0].region, "cn-shanghai");
    Ok(())
}

#[test]
fn test_registries_are_isolated() -> anyhow::Result<()> {
    init_test_logger();
    let first = RegistryBuilder::new().label("first").build();
    let second = RegistryBuilder::new().label("second").build();

    first.register_instance("only-here", 1_i32)?;

    assert!(first.exists("only-here"));
    assert!(second.get_singleton("only-here") == enums::COMPONENT_NOT_EXIST);
    Ok(())
}

#[test]
fn test_registry_options_from_service_config() -> anyhow::Result<()> {
    init_test_logger();
    let config: ServiceConfig = toml::from_str(
        r#"
        [registry]
        label = "billing"
        initial_capacity = 8
        "#,
    )?;

    let registry = ComponentRegistryImpl::with_options(config.registry);
    assert_eq!(registry.options().label, "billing");
    assert!(format!("{registry:?}").contains("billing"));
    Ok(())
}

#[test]
fn test_global_registry_accumulates() -> anyhow::Result<()> {
    init_test_logger();
    let registry = global();
    registry.register_instance("integration::settings", Settings {
        region: "eu-west".to_string(),
    })?;
    registry.register(
        "integration::client",
        factory(["integration::settings"], |settings: Arc<Settings>| Client {
            settings,
            id: 7,
        }),
    )?;

    let client = global()
        .get_singleton("integration::client")
        .downcast::<Client>()
        .ok_or_else(|| anyhow::anyhow!("client 未注册"))?;
    assert_eq!(client.id, 7);
    assert_eq!(client.settings.region, "eu-west");

    let error = global()
        .register_instance("integration::settings", 0_u8)
        .unwrap_err();
    assert!(matches!(error, ComponentError::DuplicateName { .. }));
    Ok(())
}

#[test]
fn test_registry_and_plain_map_resolve_alike() -> anyhow::Result<()> {
    init_test_logger();
    let registry = ComponentRegistryImpl::new();
    registry.register_instance("left", 3_i32)?;
    registry.register_instance("right", 4_i32)?;

    let map: HashMap<String, _> = ["left", "right"]
        .into_iter()
        .filter_map(|name| registry.lookup(name).into_component().map(|c| (name.to_owned(), c)))
        .collect();

    let sum = factory(Signature::parse("|left, right|"), |l: Arc<i32>, r: Arc<i32>| *l + *r);
    let from_registry = registry.depends(&sum)?;
    let from_map = inject(&map, &sum)?;

    assert_eq!(from_registry.downcast_ref::<i32>(), Some(&7));
    assert_eq!(from_map.downcast_ref::<i32>(), Some(&7));
    Ok(())
}

#[test]
fn test_factory_can_register_more_components() -> anyhow::Result<()> {
    init_test_logger();
    let registry = Arc::new(ComponentRegistryImpl::new());
    let inner = registry.clone();

    registry.register(
        "bootstrap",
        factory(Signature::empty(), move || {
            inner
                .register_instance("settings", Settings {
                    region: "us-east".to_string(),
                })
                .is_ok()
        }),
    )?;

    assert_eq!(registry.get_singleton("bootstrap").downcast::<bool>().as_deref(), Some(&true));
    assert!(registry.exists("settings"));
    assert_eq!(registry.names(), ["bootstrap", "settings"]);
    Ok(())
}
