//! Property checks for layer parsing

use proptest::prelude::*;
use rodlayout_core::Layer;

proptest! {
    #[test]
    fn test_layer_display_parse_roundtrip(
        name in "[A-Za-z][A-Za-z0-9_]{0,8}",
        purpose in "[a-z][a-z0-9]{0,8}",
    ) {
        let layer = Layer::new(name.clone(), purpose.clone());
        let parsed: Layer = layer.to_string().parse().unwrap();
        prop_assert_eq!(parsed.name(), name.as_str());
        prop_assert_eq!(parsed.purpose(), purpose.as_str());
    }

    #[test]
    fn test_name_only_defaults_to_drawing(name in "[A-Za-z][A-Za-z0-9_]{0,8}") {
        let parsed: Layer = name.parse().unwrap();
        prop_assert_eq!(parsed.purpose(), "drawing");
    }
}
