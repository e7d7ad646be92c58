//! Application constants

/// Loading overlay shipped in `index.html`, removed once WASM is running.
pub const LOADING_SCREEN_ID: &str = "app-loading";

/// Optional `<script type="application/json">` block overriding effect settings.
pub const CONFIG_SCRIPT_ID: &str = "portfolio-config";

// Background containers
pub const STARFIELD_ID: &str = "starfield";
pub const PARTICLES_ID: &str = "particles";

// Session storage (localStorage)
pub const SESSION_STORAGE_KEY: &str = "portfolio.session";
pub const ACCOUNTS_STORAGE_KEY: &str = "portfolio.accounts";

// Resume download
pub const RESUME_FILENAME: &str = "DigitalRebel_Resume.txt";
pub const TEXT_FILE_MIME_TYPE: &str = "text/plain";

/// Fallback when `window.innerWidth/innerHeight` cannot be read.
pub const FALLBACK_VIEWPORT: (f64, f64) = (800.0, 600.0);

/// How often a torn-down effect checks its stop flag to cancel in-flight animations.
pub const STOP_POLL_MS: u32 = 100;
