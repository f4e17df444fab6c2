mod loader;
mod settings;

pub use loader::{load_settings_file, LoadedSettings, SettingsFile, SETTINGS_FILE_NAME};
pub use settings::{
    ClientSettings, Region, DEFAULT_CONNECT_TIMEOUT, DEFAULT_REQUEST_TIMEOUT, USER_SETTINGS_PATH,
};
