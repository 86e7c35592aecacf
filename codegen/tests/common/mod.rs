use stencil_blocks::Template;
use stencil_test::read_shared_resource;

#[ctor::ctor]
fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Reads a template fixture from the shared test resources.
pub fn read_template(name: &str) -> Template {
    let json = read_shared_resource(name);
    Template::from_json(&json).unwrap_or_else(|e| panic!("Invalid template {}: {}", name, e))
}

/// Returns the position of `needle`, failing the test when it is missing.
pub fn position(haystack: &str, needle: &str) -> usize {
    haystack
        .find(needle)
        .unwrap_or_else(|| panic!("missing {:?} in\n{}", needle, haystack))
}
