//! Property tests for the `#RRGGBB` color check.

use proptest::prelude::*;
use serde_json::json;

use branding_check::application::check::check_colors;
use branding_check::domain::{is_hex_color, quote, strip};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Every `#` + six hex digits is accepted, whatever the case
    /// and surrounding whitespace.
    #[test]
    fn property_well_formed_colors_accepted(
        digits in "[0-9A-Fa-f]{6}",
        pad_left in "[ \t]{0,3}",
        pad_right in "[ \t\n]{0,3}",
    ) {
        let value = format!("{}#{}{}", pad_left, digits, pad_right);
        prop_assert!(is_hex_color(&value));

        let doc = json!({"branding": {"primaryColor": value, "accentColor": "#000000"}});
        prop_assert!(check_colors(&doc).is_empty());
    }

    /// PROPERTY: Any string that is not a well-formed color yields exactly one
    /// issue naming the field and the value.
    #[test]
    fn property_malformed_colors_reported(
        value in "(?s).{0,12}"
    ) {
        let trimmed = strip(&value);
        let well_formed = trimmed.len() == 7
            && trimmed.starts_with('#')
            && trimmed[1..].chars().all(|c| c.is_ascii_hexdigit());
        prop_assume!(!well_formed);

        let doc = json!({"branding": {"primaryColor": "#ffffff", "accentColor": value.clone()}});
        let issues = check_colors(&doc);

        prop_assert_eq!(issues.len(), 1);
        prop_assert!(issues[0].contains("branding.accentColor"));
        prop_assert!(issues[0].contains(&quote(&value)));
        prop_assert!(!issues[0].contains('\n'));
    }
}
