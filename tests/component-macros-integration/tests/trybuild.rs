//! trybuild compile-time tests for component_macros

#[test]
fn trybuild_factory_macro() {
    let t = trybuild::TestCases::new();
    t.pass("tests/trybuild/factory_ok.rs");
}
