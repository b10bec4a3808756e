use component_macros::factory;
use di_abstractions::Factory;
use std::sync::Arc;

#[derive(Debug)]
pub struct Config {
    pub name: String,
}

#[factory]
fn banner(config: Arc<Config>) -> String {
    format!("== {} ==", config.name)
}

#[factory(name = "StartupFactory")]
pub fn startup() -> std::io::Result<u32> {
    Ok(1)
}

fn main() {
    assert_eq!(BannerFactory.arity(), 1);
    assert_eq!(StartupFactory.signature().len(), 0);
}
