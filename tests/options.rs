//! Tests for the options carrier and its three data channels.

use std::sync::Arc;

use transom::options::{DialogOptions, Options, ParameterMap};

#[test]
fn test_parameter_map_typed_access() {
    let mut map = ParameterMap::new();
    map.insert("id", 42_i64);
    map.insert("title", "Edit record".to_string());
    map.insert("read_only", false);

    assert_eq!(map.get::<i64>("id"), Some(&42));
    assert_eq!(map.get::<String>("title"), Some(&"Edit record".to_string()));
    assert_eq!(map.get::<bool>("read_only"), Some(&false));

    // Wrong type or absent name both come back empty.
    assert_eq!(map.get::<String>("id"), None);
    assert_eq!(map.get::<i64>("missing"), None);

    assert!(map.contains("id"));
    assert!(!map.contains("missing"));
    assert_eq!(map.len(), 3);
    assert!(!map.is_empty());

    let mut names: Vec<&str> = map.names().collect();
    names.sort_unstable();
    assert_eq!(names, vec!["id", "read_only", "title"]);
}

#[test]
fn test_parameter_map_insert_replaces() {
    let mut map = ParameterMap::new();
    map.insert("id", 1_i64);
    map.insert("id", 2_i64);

    assert_eq!(map.len(), 1);
    assert_eq!(map.get::<i64>("id"), Some(&2));
}

#[test]
fn test_options_channels_are_independent() {
    let options = Options::new()
        .param("id", 7_i64)
        .shell_option("width", "600px".to_string())
        .with_data(vec![1_i32, 2, 3]);

    assert_eq!(options.control_parameters().get::<i64>("id"), Some(&7));
    assert!(!options.control_parameters().contains("width"));

    assert_eq!(
        options.shell_options().get::<String>("width"),
        Some(&"600px".to_string())
    );
    assert!(!options.shell_options().contains("id"));

    let data = options.data().expect("payload set");
    assert_eq!(data.downcast_ref::<Vec<i32>>(), Some(&vec![1, 2, 3]));
}

#[test]
fn test_empty_options_have_empty_channels() {
    let options = Options::new();
    assert!(options.control_parameters().is_empty());
    assert!(options.shell_options().is_empty());
    assert!(options.data().is_none());
}

/// Carrier that only transports shell concerns, as an overlay shell would
/// define it.
struct OverlayOptions {
    shell: ParameterMap,
}

impl OverlayOptions {
    fn new(width: &str, close_on_backdrop: bool) -> Self {
        let mut shell = ParameterMap::new();
        shell.insert("width", width.to_string());
        shell.insert("close_on_backdrop", close_on_backdrop);
        Self { shell }
    }
}

impl DialogOptions for OverlayOptions {
    fn shell_options(&self) -> &ParameterMap {
        &self.shell
    }
}

/// Carrier for a sheet-style shell that only cares about a size class.
struct SheetOptions {
    shell: ParameterMap,
}

impl SheetOptions {
    fn new(size: &str) -> Self {
        let mut shell = ParameterMap::new();
        shell.insert("size", size.to_string());
        Self { shell }
    }
}

impl DialogOptions for SheetOptions {
    fn shell_options(&self) -> &ParameterMap {
        &self.shell
    }
}

/// Carrier with no overridden channels at all.
struct BareOptions;

impl DialogOptions for BareOptions {}

#[test]
fn test_custom_carrier_overrides_only_its_channels() {
    let options = OverlayOptions::new("600px", true);

    assert_eq!(
        options.shell_options().get::<String>("width"),
        Some(&"600px".to_string())
    );
    assert_eq!(options.shell_options().get::<bool>("close_on_backdrop"), Some(&true));

    // The untouched channels fall back to the trait defaults.
    assert!(options.control_parameters().is_empty());
    assert!(options.data().is_none());
}

#[test]
fn test_default_carrier_channels_are_empty() {
    let options = BareOptions;
    assert!(options.control_parameters().is_empty());
    assert!(options.shell_options().is_empty());
    assert!(options.data().is_none());
}

#[test]
fn test_carriers_read_back_through_trait_object() {
    let carriers: Vec<Arc<dyn DialogOptions>> = vec![
        Arc::new(Options::new().param("id", 3_i64)),
        Arc::new(OverlayOptions::new("400px", false)),
        Arc::new(SheetOptions::new("large")),
        Arc::new(BareOptions),
    ];

    assert_eq!(carriers[0].control_parameters().get::<i64>("id"), Some(&3));
    assert_eq!(
        carriers[1].shell_options().get::<String>("width"),
        Some(&"400px".to_string())
    );
    assert_eq!(
        carriers[2].shell_options().get::<String>("size"),
        Some(&"large".to_string())
    );
    assert!(carriers[3].control_parameters().is_empty());
}
