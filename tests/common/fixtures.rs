//! Test fixtures - reusable branding documents.

use serde_json::{json, Value};

/// A complete branding document that passes every JSON check
pub fn valid_branding() -> Value {
    json!({
        "identifiers": {
            "androidBundleId": "com.acme.shop",
            "iosBundleId": "com.acme.shop",
            "webAppDomain": "shop.acme.com",
            "deepLinkScheme": "acmeshop"
        },
        "api": {
            "apiBaseUrl": "https://api.acme.com",
            "apiVersion": "v1",
            "websocketUrl": "wss://ws.acme.com",
            "cdnBaseUrl": "https://cdn.acme.com",
            "imageBaseUrl": "https://img.acme.com"
        },
        "branding": {
            "appName": "Acme Shop",
            "companyName": "Acme Inc.",
            "primaryColor": "#0A84FF",
            "accentColor": "#ff9f0a",
            "logoUrl": "logo.png",
            "logoDarkUrl": "logo_dark.png",
            "supportEmail": "help@acme.com",
            "supportUrl": "https://acme.com/help",
            "privacyPolicyUrl": "https://acme.com/privacy",
            "termsUrl": "https://acme.com/terms"
        },
        "stores": {
            "iosAppStoreId": "1234567890",
            "androidPlayStoreId": "com.acme.shop"
        }
    })
}

/// `valid_branding()` with one dotted field replaced
pub fn branding_with(dotted: &str, value: Value) -> Value {
    let mut doc = valid_branding();
    let (section, key) = dotted.split_once('.').expect("dotted path");
    doc[section][key] = value;
    doc
}

/// `valid_branding()` with one dotted field removed
pub fn branding_without(dotted: &str) -> Value {
    let mut doc = valid_branding();
    let (section, key) = dotted.split_once('.').expect("dotted path");
    doc[section]
        .as_object_mut()
        .expect("section object")
        .remove(key);
    doc
}
