//! WASM application implementation
//!
//! Browser side of the enrollment button: a controller mounted once at page
//! load that wires click listeners onto the (independently optional) paid and
//! free buttons and drives the flow through the fetch client.

use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{
    Document, Element, Event, HtmlButtonElement, HtmlInputElement, ScrollBehavior,
    ScrollIntoViewOptions, ScrollLogicalPosition,
};

use crate::app::{classify_click, error_banner_text, resolve_outcome, ClickAction};
use crate::client::gloo::WasmClient;
use crate::error::{ErrorKind, Result};
use crate::interface::{EnrollApi, HttpClient};
use crate::model::dtos::{ClickParams, EnrollParams};

const PAID_BUTTON_ID: &str = "enrollButton";
const FREE_BUTTON_ID: &str = "enrollFreeButton";
const ERROR_BANNER_ID: &str = "enroll-error";
const BUSY_LABEL: &str = "<span class=\"spinner-border spinner-border-sm me-2\" \
     role=\"status\" aria-hidden=\"true\"></span>Processing...";

/// Owns the page handles for the lifetime of the page; never torn down.
pub struct EnrollmentController {
    document: Document,
    stripe_public_key: String,
}

#[wasm_bindgen(start)]
pub fn start() {
    let _ = console_log::init_with_level(log::Level::Debug);

    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };

    if let Err(e) = EnrollmentController::mount(&document) {
        // Enrollment stays disabled; the rest of the page is unaffected.
        log::error!("{e}");
    }
}

impl EnrollmentController {
    /// Read the page data and attach click listeners to whichever enrollment
    /// buttons exist. Fails with `SetupError` when the payment provider key
    /// is missing from the body.
    pub fn mount(document: &Document) -> Result<Rc<Self>> {
        let stripe_public_key = document
            .body()
            .and_then(|body| body.get_attribute("data-stripe-public-key"))
            .filter(|key| !key.is_empty())
            .ok_or_else(|| ErrorKind::SetupError("Stripe public key is missing".to_string()))?;

        let controller = Rc::new(Self {
            document: document.clone(),
            stripe_public_key,
        });

        Self::attach(&controller, PAID_BUTTON_ID)?;
        Self::attach(&controller, FREE_BUTTON_ID)?;

        Ok(controller)
    }

    /// Key the payment page collaborator is initialized with.
    pub fn stripe_public_key(&self) -> &str {
        &self.stripe_public_key
    }

    fn attach(controller: &Rc<Self>, button_id: &str) -> Result<()> {
        let Some(button) = controller.document.get_element_by_id(button_id) else {
            return Ok(());
        };

        let controller = Rc::clone(controller);
        let listener = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            Self::handle_click(&controller, &event);
        });

        button
            .add_event_listener_with_callback("click", listener.as_ref().unchecked_ref())
            .map_err(|e| ErrorKind::DomError(format!("{e:?}")))?;

        // The listener lives as long as the page does.
        listener.forget();

        Ok(())
    }

    fn handle_click(controller: &Rc<Self>, event: &Event) {
        let Some(button) = event
            .current_target()
            .and_then(|target| target.dyn_into::<Element>().ok())
        else {
            return;
        };

        let course_id = button.get_attribute("data-course-id").unwrap_or_default();
        let params = ClickParams {
            course_id: &course_id,
            authenticated: button.get_attribute("data-authenticated").as_deref() == Some("true"),
            free_course: button.id() == FREE_BUTTON_ID,
        };

        let action = classify_click(&params);
        if action == ClickAction::PassThrough {
            // Default navigation opens the login modal.
            return;
        }
        event.prevent_default();

        let original_label = button.inner_html();
        set_busy(&button);

        match action {
            ClickAction::RedirectToPayment(url) => {
                // The payment page owns the rest of the flow, failures included.
                if let Err(e) = navigate(&url) {
                    log::error!("payment redirect failed: {e}");
                }
            }
            ClickAction::EnrollFree => {
                let controller = Rc::clone(controller);
                spawn_local(async move {
                    if let Err(e) = controller.enroll_free(&course_id).await {
                        log::error!("Enrollment error: {e}");
                        controller.show_error(&error_banner_text(&e));
                        restore(&button, &original_label);
                    }
                });
            }
            ClickAction::PassThrough => {}
        }
    }

    /// On success this navigates away, so there is nothing to restore.
    async fn enroll_free(&self, course_id: &str) -> Result<()> {
        let csrf_token = self.csrf_token();
        let params = EnrollParams {
            course_id,
            csrf_token: &csrf_token,
        };
        params.validate()?;

        let client = WasmClient::new().await?;
        let reply = client.enroll(params).await?;
        let target = resolve_outcome(course_id, reply)?;

        navigate(&target)
    }

    fn csrf_token(&self) -> String {
        self.document
            .query_selector("[name=csrfmiddlewaretoken]")
            .ok()
            .flatten()
            .and_then(|field| {
                field
                    .dyn_ref::<HtmlInputElement>()
                    .map(|input| input.value())
            })
            .unwrap_or_default()
    }

    /// Show `message` in the one inline banner slot, replacing any previous
    /// banner. Falls back to a blocking dialog when no button is on the page.
    fn show_error(&self, message: &str) {
        if let Some(existing) = self.document.get_element_by_id(ERROR_BANNER_ID) {
            existing.remove();
        }

        let Ok(banner) = self.document.create_element("div") else {
            return;
        };
        banner.set_id(ERROR_BANNER_ID);
        banner.set_class_name("alert alert-danger mt-3");
        banner.set_text_content(Some(message));

        let anchor = self
            .document
            .query_selector(".enroll-btn")
            .ok()
            .flatten()
            .and_then(|button| button.parent_node().map(|parent| (parent, button)));

        match anchor {
            Some((parent, button)) => {
                if parent
                    .insert_before(&banner, button.next_sibling().as_ref())
                    .is_err()
                {
                    return;
                }

                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                options.set_block(ScrollLogicalPosition::Center);
                banner.scroll_into_view_with_scroll_into_view_options(&options);
            }
            None => {
                if let Some(window) = web_sys::window() {
                    let _ = window.alert_with_message(message);
                }
            }
        }
    }
}

fn set_busy(button: &Element) {
    set_disabled(button, true);
    button.set_inner_html(BUSY_LABEL);
}

fn restore(button: &Element, original_label: &str) {
    set_disabled(button, false);
    button.set_inner_html(original_label);
}

fn set_disabled(button: &Element, disabled: bool) {
    if let Some(button) = button.dyn_ref::<HtmlButtonElement>() {
        button.set_disabled(disabled);
    } else if disabled {
        let _ = button.set_attribute("disabled", "disabled");
    } else {
        let _ = button.remove_attribute("disabled");
    }
}

fn navigate(url: &str) -> Result<()> {
    let window = web_sys::window().ok_or_else(|| ErrorKind::DomError("no window".to_string()))?;
    window
        .location()
        .set_href(url)
        .map_err(|e| ErrorKind::DomError(format!("{e:?}")))?;

    Ok(())
}
