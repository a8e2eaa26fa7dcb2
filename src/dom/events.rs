// ============================================================================
// EVENT HANDLING
// ============================================================================
// Listeners live as long as the page: controllers are mounted once per
// document, so closure.forget() does not accumulate.
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, MouseEvent};

/// Submit listener that always cancels the browser's own navigation
pub fn on_submit<F>(form: &Element, mut handler: F) -> Result<(), JsValue>
where
    F: FnMut() + 'static,
{
    let closure = Closure::wrap(Box::new(move |e: Event| {
        e.prevent_default();
        handler();
    }) as Box<dyn FnMut(Event)>);

    form.add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Delegated click: `handler` gets the value of `attr` on the closest
/// ancestor of the click target carrying it
pub fn on_delegated_click<F>(container: &Element, attr: &str, mut handler: F) -> Result<(), JsValue>
where
    F: FnMut(String) + 'static,
{
    let selector = format!("[{}]", attr);
    let attr = attr.to_string();

    let closure = Closure::wrap(Box::new(move |e: MouseEvent| {
        let Some(target) = e.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
            return;
        };
        if let Ok(Some(matched)) = target.closest(&selector) {
            if let Some(value) = matched.get_attribute(&attr) {
                handler(value);
            }
        }
    }) as Box<dyn FnMut(MouseEvent)>);

    container.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}
