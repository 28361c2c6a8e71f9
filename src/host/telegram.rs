//! Telegram WebApp bridge over `window.Telegram.WebApp`.

use js_sys::{Function, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use super::{ContactOutcome, HostBridge, HostIdentity, HostUser, InitData};

const DATA_UPDATED_EVENT: &str = "web_app_data_updated";

fn get(target: &JsValue, key: &str) -> Option<JsValue> {
    Reflect::get(target, &JsValue::from_str(key))
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
}

fn get_path(target: &JsValue, path: &[&str]) -> Option<JsValue> {
    path.iter().try_fold(target.clone(), |value, key| get(&value, key))
}

fn web_app() -> Option<JsValue> {
    let window = web_sys::window()?;
    get_path(&window.into(), &["Telegram", "WebApp"])
}

fn method(target: &JsValue, name: &str) -> Option<Function> {
    get(target, name)?.dyn_into::<Function>().ok()
}

fn pushed_phone(web_app: &JsValue) -> Option<String> {
    get_path(web_app, &["initDataUnsafe", "user", "phone_number"])?
        .as_string()
        .filter(|p| !p.is_empty())
}

/// Reads everything live from the global object, so it is a unit struct
#[derive(Debug, Clone, Copy, Default)]
pub struct TelegramBridge;

impl HostBridge for TelegramBridge {
    fn ready(&self) {
        let Some(app) = web_app() else { return };
        if let Some(ready) = method(&app, "ready") {
            if let Err(e) = ready.call0(&app) {
                log::warn!("[Host] ready() failed: {:?}", e);
            }
        }
    }

    fn identity(&self) -> Option<HostIdentity> {
        let app = web_app()?;
        let init_data = get(&app, "initData")?.as_string().filter(|s| !s.is_empty())?;
        let user = get_path(&app, &["initDataUnsafe", "user"])
            .and_then(|value| serde_wasm_bindgen::from_value::<HostUser>(value).ok())
            .or_else(|| InitData::parse(&init_data).user())?;
        Some(HostIdentity { init_data, user })
    }

    fn supports_contact_request(&self) -> bool {
        web_app().and_then(|app| method(&app, "requestContact")).is_some()
    }

    fn request_contact(&self, on_result: Box<dyn FnOnce(ContactOutcome)>) {
        let Some((app, request)) = web_app().and_then(|app| {
            let request = method(&app, "requestContact")?;
            Some((app, request))
        }) else {
            on_result(ContactOutcome::Declined);
            return;
        };

        let callback = Closure::once_into_js(move |shared: JsValue, response: JsValue| {
            let outcome = if shared.as_bool() != Some(true) {
                ContactOutcome::Declined
            } else {
                match get_path(&response, &["responseUnsafe", "contact", "phone_number"])
                    .and_then(|p| p.as_string())
                {
                    Some(phone) => ContactOutcome::Shared(phone),
                    None => ContactOutcome::Pending,
                }
            };
            on_result(outcome);
        });

        if let Err(e) = request.call1(&app, &callback) {
            log::error!("[Host] requestContact failed: {:?}", e);
        }
    }

    fn on_phone_pushed(&self, handler: Box<dyn Fn(String)>) {
        let Some(app) = web_app() else { return };
        let Some(on_event) = method(&app, "onEvent") else { return };

        let source = app.clone();
        let listener = Closure::<dyn FnMut()>::new(move || {
            log::debug!("[Host] {} received", DATA_UPDATED_EVENT);
            if let Some(phone) = pushed_phone(&source) {
                handler(phone);
            }
        })
        // lives as long as the page
        .into_js_value();

        if let Err(e) = on_event.call2(&app, &JsValue::from_str(DATA_UPDATED_EVENT), &listener) {
            log::error!("[Host] onEvent failed: {:?}", e);
        }
    }
}
