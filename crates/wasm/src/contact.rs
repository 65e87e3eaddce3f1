//! Contact form submission.

use crate::dom;
use crate::error::WebError;
use crate::events::{listen, set_timeout};
use folio_core::widgets::contact::{STATE_CLASSES, failure_message};
use folio_core::widgets::{ContactForm, SubmitState};
use folio_core::{SiteConfig, guard};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::{
    Event, FormData, Headers, HtmlButtonElement, HtmlFormElement, Request, RequestInit,
    RequestMode, Response, Window,
};

/// Everything a submission touches, shared between the listener and the
/// request future.
struct Submission {
    window: Window,
    form: HtmlFormElement,
    button: Option<HtmlButtonElement>,
    endpoint: String,
    reset_ms: u32,
    state: RefCell<ContactForm>,
}

pub(crate) fn install(window: &Window, config: &SiteConfig) -> Result<(), WebError> {
    let document = window
        .document()
        .ok_or_else(|| WebError::platform("No document available"))?;
    let Some(form) = dom::query(&document, &config.selectors.contact_form)
        .and_then(|e| e.dyn_into::<HtmlFormElement>().ok())
    else {
        return Ok(());
    };

    let endpoint = config
        .contact
        .endpoint
        .clone()
        .or_else(|| form.get_attribute("action"))
        .filter(|e| !e.trim().is_empty());
    let Some(endpoint) = endpoint else {
        log::info!("Contact form skipped: no endpoint configured");
        return Ok(());
    };

    let button = form
        .query_selector(&config.selectors.submit_button)
        .ok()
        .flatten()
        .and_then(|e| e.dyn_into::<HtmlButtonElement>().ok());

    let submission = Rc::new(Submission {
        window: window.clone(),
        form: form.clone(),
        button,
        endpoint,
        reset_ms: config.contact.reset_ms,
        state: RefCell::new(ContactForm::default()),
    });

    listen(&form, "submit", move |event: Event| {
        event.prevent_default();
        let Some(state) = guard("Contact form", || {
            submission.state.borrow_mut().begin().cloned()
        }) else {
            return;
        };
        submission.render(&state);

        let submission = Rc::clone(&submission);
        spawn_local(async move {
            let outcome = submission.send().await.map_err(|e| e.to_string()).and_then(|r| r);
            submission.complete(outcome);
        });
    })?;
    Ok(())
}

impl Submission {
    /// Posts the form. The outer error is a transport failure, the inner one
    /// a message from the relay.
    async fn send(&self) -> Result<Result<(), String>, WebError> {
        let body = FormData::new_with_form(&self.form)?;
        let headers = Headers::new()?;
        headers.set("Accept", "application/json")?;

        let init = RequestInit::new();
        init.set_method("POST");
        init.set_mode(RequestMode::Cors);
        init.set_headers(&headers);
        init.set_body(&body);

        let request = Request::new_with_str_and_init(&self.endpoint, &init)?;
        let response: Response = JsFuture::from(self.window.fetch_with_request(&request))
            .await?
            .dyn_into()?;
        if response.ok() {
            return Ok(Ok(()));
        }

        let text = JsFuture::from(response.text()?)
            .await?
            .as_string()
            .unwrap_or_default();
        Ok(Err(failure_message(response.status(), &text)))
    }

    fn complete(self: Rc<Self>, outcome: Result<(), String>) {
        let sent = outcome.is_ok();
        let state = self.state.borrow_mut().finish(outcome).clone();
        self.render(&state);
        if sent {
            self.form.reset();
        }

        let reset_ms = self.reset_ms;
        let window = self.window.clone();
        guard("Contact form reset", || {
            set_timeout(&window, reset_ms, move || {
                let state = self.state.borrow_mut().reset().clone();
                self.render(&state);
            })
        });
    }

    fn render(&self, state: &SubmitState) {
        let Some(button) = self.button.as_ref() else {
            return;
        };
        let classes = button.class_list();
        for class in STATE_CLASSES {
            classes.remove_1(class).ok();
        }
        if let Some(class) = state.class() {
            classes.add_1(class).ok();
        }
        button.set_text_content(Some(state.label()));
        button.set_disabled(state.disabled());
    }
}
