//! Application-wide constants.

/// The binary name of the application.
pub const APP_BINARY_NAME: &str = "keymapc";

/// Directory name under the platform config directory.
pub const APP_DIR_NAME: &str = "keymapc";

/// Config file name inside [`APP_DIR_NAME`].
pub const CONFIG_FILE_NAME: &str = "config.toml";
