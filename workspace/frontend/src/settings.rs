use log::Level;
use web_sys::{window, Location, Storage};

const KEY_API_HOST: &str = "storefront_api_host";
const KEY_API_PORT: &str = "storefront_api_port";
const KEY_API_PATH: &str = "storefront_api_path";
const KEY_API_USE_HTTPS: &str = "storefront_api_use_https";
const KEY_LOG_LEVEL: &str = "storefront_log_level";
const KEY_CURRENCY: &str = "storefront_currency";
const KEY_LOGIN_PATH: &str = "storefront_login_path";

/// Global application settings
#[derive(Debug, Clone, PartialEq)]
pub struct AppSettings {
    /// Backend API host (e.g., "localhost" or "shop.example.com")
    pub api_host: String,

    /// Backend API port, `None` for the scheme's default port
    pub api_port: Option<u16>,

    /// API path prefix (e.g., "/api")
    pub api_path: String,

    /// Use HTTPS for API requests
    pub api_use_https: bool,

    /// Default log level for the application
    pub log_level: Level,

    /// ISO 4217 code used to display prices
    pub currency_code: String,

    /// Where the session check sends signed-out admins
    pub login_path: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api_host: "localhost".to_string(),
            api_port: Some(3000),
            api_path: "/api".to_string(),
            api_use_https: false,
            log_level: Level::Info,
            currency_code: storefront_common::DEFAULT_CURRENCY.to_string(),
            login_path: "/login".to_string(),
        }
    }
}

impl AppSettings {
    /// Create settings from the page origin, then apply localStorage overrides
    pub fn from_environment() -> Self {
        let mut settings = Self::default();

        let Some(window) = window() else {
            return settings;
        };

        settings.apply_location(&window.location());

        if let Ok(Some(storage)) = window.local_storage() {
            settings.apply_storage(&storage);
        }

        settings
    }

    fn apply_location(&mut self, location: &Location) {
        if let Ok(hostname) = location.hostname() {
            if hostname == "localhost" || hostname == "127.0.0.1" {
                self.log_level = Level::Debug;
            }
            self.api_host = hostname;
        }

        if let Ok(protocol) = location.protocol() {
            self.api_use_https = protocol == "https:";
        }

        // An empty port means the scheme default
        if let Ok(port) = location.port() {
            self.api_port = port.parse::<u16>().ok();
        }
    }

    fn apply_storage(&mut self, storage: &Storage) {
        let read = |key: &str| storage.get_item(key).ok().flatten();

        if let Some(api_host) = read(KEY_API_HOST) {
            self.api_host = api_host;
        }

        if let Some(api_port) = read(KEY_API_PORT) {
            if let Ok(port_val) = api_port.parse::<u16>() {
                self.api_port = Some(port_val);
            }
        }

        if let Some(api_path) = read(KEY_API_PATH) {
            self.api_path = api_path;
        }

        if let Some(use_https) = read(KEY_API_USE_HTTPS) {
            self.api_use_https = use_https.eq_ignore_ascii_case("true");
        }

        if let Some(log_level) = read(KEY_LOG_LEVEL) {
            self.log_level = parse_level(&log_level).unwrap_or(self.log_level);
        }

        if let Some(currency) = read(KEY_CURRENCY) {
            self.currency_code = currency.to_uppercase();
        }

        if let Some(login_path) = read(KEY_LOGIN_PATH) {
            self.login_path = login_path;
        }
    }

    /// Get the base API URL (protocol + host + port + path prefix)
    pub fn api_base_url(&self) -> String {
        let protocol = if self.api_use_https { "https" } else { "http" };
        match self.api_port {
            Some(port) => format!("{}://{}:{}{}", protocol, self.api_host, port, self.api_path),
            None => format!("{}://{}{}", protocol, self.api_host, self.api_path),
        }
    }

    /// Get the full API URL for an endpoint
    pub fn api_url(&self, endpoint: &str) -> String {
        format!("{}{}", self.api_base_url(), endpoint)
    }
}

fn parse_level(value: &str) -> Option<Level> {
    match value.to_lowercase().as_str() {
        "error" => Some(Level::Error),
        "warn" => Some(Level::Warn),
        "info" => Some(Level::Info),
        "debug" => Some(Level::Debug),
        "trace" => Some(Level::Trace),
        _ => None,
    }
}

// Global settings instance using thread_local
use std::cell::RefCell;

thread_local! {
    // Browser values are loaded by `init_settings`, so nothing touches `window` before startup.
    static SETTINGS: RefCell<AppSettings> = RefCell::new(AppSettings::default());
}

/// Get a copy of the current settings
pub fn get_settings() -> AppSettings {
    SETTINGS.with(|s| s.borrow().clone())
}

/// Initialize settings (call this at app startup)
pub fn init_settings() {
    SETTINGS.with(|s| {
        *s.borrow_mut() = AppSettings::from_environment();
    });
}
