//! Fixed requirement tables
//!
//! These tables are the whole schema. They are not user-extensible.

use super::environment::Environment;

/// Placeholder substituted with the environment name in path templates
pub const ENV_PLACEHOLDER: &str = "{env}";

/// Dotted key paths that must resolve to a present, non-empty value
pub const REQUIRED_JSON_PATHS: &[&str] = &[
    // identifiers
    "identifiers.androidBundleId",
    "identifiers.iosBundleId",
    "identifiers.webAppDomain",
    "identifiers.deepLinkScheme",
    // api
    "api.apiBaseUrl",
    "api.apiVersion",
    "api.websocketUrl",
    "api.cdnBaseUrl",
    "api.imageBaseUrl",
    // branding
    "branding.appName",
    "branding.companyName",
    "branding.primaryColor",
    "branding.accentColor",
    "branding.logoUrl",
    "branding.logoDarkUrl",
    "branding.supportEmail",
    "branding.supportUrl",
    "branding.privacyPolicyUrl",
    "branding.termsUrl",
    // stores
    "stores.iosAppStoreId",
    "stores.androidPlayStoreId",
];

/// Files that must exist (as regular files) under the repo root
pub const REQUIRED_FILES_BY_ENV: &[&str] = &[
    "{env}.json",
    // iOS AppIcon set
    "asset/{env}/appicon/Assets.xcassets/AppIcon.appiconset/Contents.json",
    "asset/{env}/appicon/Assets.xcassets/AppIcon.appiconset/29.png",
    "asset/{env}/appicon/Assets.xcassets/AppIcon.appiconset/40.png",
    "asset/{env}/appicon/Assets.xcassets/AppIcon.appiconset/57.png",
    "asset/{env}/appicon/Assets.xcassets/AppIcon.appiconset/58.png",
    "asset/{env}/appicon/Assets.xcassets/AppIcon.appiconset/60.png",
    "asset/{env}/appicon/Assets.xcassets/AppIcon.appiconset/80.png",
    "asset/{env}/appicon/Assets.xcassets/AppIcon.appiconset/87.png",
    "asset/{env}/appicon/Assets.xcassets/AppIcon.appiconset/1024.png",
    "asset/{env}/appicon/Assets.xcassets/AppIcon.appiconset/114.png",
    "asset/{env}/appicon/Assets.xcassets/AppIcon.appiconset/120.png",
    "asset/{env}/appicon/Assets.xcassets/AppIcon.appiconset/180.png",
    // store icons
    "asset/{env}/appicon/appstore.png",
    "asset/{env}/appicon/playstore.png",
    // Android launcher icons
    "asset/{env}/appicon/android/mipmap-mdpi/ic_launcher.png",
    "asset/{env}/appicon/android/mipmap-hdpi/ic_launcher.png",
    "asset/{env}/appicon/android/mipmap-xhdpi/ic_launcher.png",
    "asset/{env}/appicon/android/mipmap-xxhdpi/ic_launcher.png",
    "asset/{env}/appicon/android/mipmap-xxxhdpi/ic_launcher.png",
    // fonts
    "asset/{env}/fonts/brand.ttf",
    // splash
    "asset/{env}/splashscreen/splashscreen.png",
];

/// Fields that must hold `#RRGGBB` colors when they are strings
pub const COLOR_FIELDS: &[&str] = &["branding.primaryColor", "branding.accentColor"];

/// Fields cross-checked against `asset/{env}/images/` when logo checks are on
pub const LOGO_FIELDS: &[&str] = &["branding.logoUrl", "branding.logoDarkUrl"];

/// Directory template logo file names are resolved against
pub const LOGO_IMAGE_DIR: &str = "asset/{env}/images";

/// Substitute the environment name into a path template
pub fn render_template(template: &str, env: Environment) -> String {
    template.replace(ENV_PLACEHOLDER, env.as_str())
}

/// Repo-relative path where a logo file name is expected to live
pub fn logo_path(env: Environment, file_name: &str) -> String {
    format!("{}/{}", render_template(LOGO_IMAGE_DIR, env), file_name)
}

/// All required file paths for one environment, in table order
pub fn required_files(env: Environment) -> Vec<String> {
    REQUIRED_FILES_BY_ENV
        .iter()
        .map(|template| render_template(template, env))
        .collect()
}
