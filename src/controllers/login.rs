// ============================================================================
// LOGIN CONTROLLER - Form submit -> POST -> navigate or show error
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::config::CONFIG;
use crate::dom::{input_value, navigate, on_submit, page_url, read_cookie, require_element};
use crate::error::ClientError;
use crate::models::LoginOutcome;
use crate::services::ApiClient;
use crate::state::ReactiveState;
use crate::utils::{ERROR_MESSAGE_ID, LOGIN_FORM_ID, PASSWORD_INPUT_ID, USERNAME_INPUT_ID};
use crate::viewmodels::LoginViewModel;
use crate::views::render_error_banner;

pub struct LoginController {
    vm: ReactiveState<LoginViewModel>,
    api: ApiClient,
    /// Pending auto-hide; replacing it drops (and so cancels) the old one
    dismiss_timer: RefCell<Option<Timeout>>,
}

impl LoginController {
    pub fn new(api: ApiClient) -> Self {
        Self {
            vm: ReactiveState::new(LoginViewModel::new(CONFIG.login_landing_path.clone())),
            api,
            dismiss_timer: RefCell::new(None),
        }
    }

    /// Bind to `#loginForm`
    pub fn mount() -> Result<(), JsValue> {
        let form = require_element(LOGIN_FORM_ID)?;
        let error_element = require_element(ERROR_MESSAGE_ID)?;
        let controller = Rc::new(Self::new(ApiClient::new()));

        Self::bind_render(&controller.vm, error_element);

        let submit_controller = controller.clone();
        on_submit(&form, move || Self::submit(&submit_controller))?;

        log::info!("✅ [LOGIN] Login form bound");
        Ok(())
    }

    fn bind_render(vm: &ReactiveState<LoginViewModel>, element: Element) {
        let reader = vm.clone();
        vm.subscribe(move || {
            let result = reader.with(|vm| render_error_banner(vm.banner(), &element));
            if let Err(e) = result {
                log::error!("❌ [LOGIN] Error rendering banner: {:?}", e);
            }
        });
    }

    fn submit(this: &Rc<Self>) {
        let username = input_value(USERNAME_INPUT_ID);
        let password = input_value(PASSWORD_INPUT_ID);
        let csrf_token = read_cookie(&CONFIG.csrf_cookie_name);

        let request = match this.vm.with(|vm| vm.prepare(&username, &password, csrf_token)) {
            Ok(request) => request,
            Err(err) => {
                log::warn!("⚠️ [LOGIN] {}", err);
                Self::show_error(this, &err);
                return;
            }
        };

        let page_url = match page_url() {
            Ok(url) => url,
            Err(e) => {
                log::error!("❌ [LOGIN] Cannot read page URL: {:?}", e);
                Self::show_error(this, &ClientError::Network("page URL unavailable".into()));
                return;
            }
        };

        let this = this.clone();
        spawn_local(async move {
            let result = this.api.submit_login(&page_url, &request).await;
            drop(request);

            match &result {
                Ok(response) => log::debug!(
                    "🔐 [LOGIN] HTTP {} from {} (redirected: {})",
                    response.status,
                    response.url,
                    response.redirected
                ),
                Err(err) => log::error!("❌ [LOGIN] Login error: {}", err),
            }

            match this.vm.with(|vm| vm.resolve(result)) {
                LoginOutcome::Navigate(url) => {
                    if let Err(e) = navigate(&url) {
                        log::error!("❌ [LOGIN] Navigation failed: {:?}", e);
                    }
                }
                LoginOutcome::ShowError(err) => Self::show_error(&this, &err),
                LoginOutcome::NoChange => {
                    log::debug!("🔐 [LOGIN] Empty response body, nothing to do");
                }
            }
        });
    }

    /// Show `error` and (re)start the hide timer
    fn show_error(this: &Rc<Self>, error: &ClientError) {
        let token = this.vm.update(|vm| vm.show_error(error));

        let vm = this.vm.clone();
        let timeout = Timeout::new(CONFIG.error_display_ms, move || {
            if vm.update_silent(|vm| vm.dismiss_error(token)) {
                vm.notify();
            }
        });

        *this.dismiss_timer.borrow_mut() = Some(timeout);
    }
}
