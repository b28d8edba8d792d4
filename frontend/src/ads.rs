use js_sys::{Function, Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::window;

/// Global installed by the ad network's script tag.
const AD_BREAK_FN: &str = "show_9692552";

/// Shows a full-screen ad and resolves once it closes. Fails when the ad
/// script is missing, throws, or the ad is dismissed with an error.
pub async fn show_ad_break() -> Result<(), JsValue> {
    let window = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let show = Reflect::get(&window, &JsValue::from_str(AD_BREAK_FN))?
        .dyn_into::<Function>()
        .map_err(|_| JsValue::from_str("ad script not loaded"))?;

    let result = show.call0(&JsValue::NULL)?;
    if let Ok(promise) = result.dyn_into::<Promise>() {
        JsFuture::from(promise).await?;
    }
    Ok(())
}

/// Ad break inside the auto-spin loop: a failure is logged and the loop goes on.
pub async fn show_ad_break_or_continue() {
    if let Err(err) = show_ad_break().await {
        log::warn!("Ad failed during auto-spin, continuing: {:?}", err);
    }
}
