#![no_main]

use libfuzzer_sys::fuzz_target;

use branding_check::application::check::{check_colors, check_required_keys};

fuzz_target!(|data: &[u8]| {
    if let Ok(value) = serde_json::from_slice::<serde_json::Value>(data) {
        // Key and color checks must accept any parsed document
        let _ = check_required_keys(&value);
        let _ = check_colors(&value);
    }
});
