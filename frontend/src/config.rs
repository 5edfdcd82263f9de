use lazy_static::lazy_static;
use web_sys::window;

lazy_static! {
    pub static ref BACKEND_URL: String = backend_url();
}

/// Runtime configuration comes from a `window.ENV_CONFIG` object injected by
/// the hosting page, so one build can be deployed against any backend.
fn env_var(key: &str) -> Option<String> {
    let window = window()?;
    let env_config = js_sys::Reflect::get(&window, &"ENV_CONFIG".into()).ok()?;
    if env_config.is_undefined() {
        log::warn!("ENV_CONFIG is undefined - environment variables not loaded");
        return None;
    }

    let value = js_sys::Reflect::get(&env_config, &key.into()).ok()?;
    if value.is_undefined() {
        log::warn!("Environment variable '{}' is undefined", key);
        return None;
    }
    value.as_string()
}

fn backend_url() -> String {
    env_var("BACKEND_URL").unwrap_or_else(|| "http://localhost:8000".to_string())
}
