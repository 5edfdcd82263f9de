mod bottom_nav;
mod filter_bar;
mod header;
mod niche_selector;
mod video_card;
mod video_grid;
mod voice_search;

pub use bottom_nav::BottomNavigation;
pub use filter_bar::FilterBar;
pub use header::Header;
pub use niche_selector::NicheSelector;
pub use video_card::VideoCard;
pub use video_grid::{Layout, VideoGrid};
pub use voice_search::VoiceSearchModal;

use js_sys::Reflect;
use wasm_bindgen::JsValue;
use web_sys::Event;

// Helper to read "value" from any event target without HtmlSelectElement.
pub(crate) fn event_value(e: &Event) -> Option<String> {
    let target = e.target()?;
    let js_value = Reflect::get(target.as_ref(), &JsValue::from_str("value")).ok()?;
    js_value.as_string()
}
