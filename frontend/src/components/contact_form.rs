use yew::prelude::*;
use gloo_net::http::Request;
use gloo_console::log;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

use crate::config;
use crate::models::{ContactPayload, ContactSubmission, ErrorResponse, PROJECT_TYPES};

#[derive(Clone, PartialEq)]
enum FormStatus {
    Idle,
    Sending,
    Sent(String),
    Failed(String),
}

async fn send_contact(payload: ContactPayload) -> Result<ContactSubmission, ErrorResponse> {
    let request = Request::post(&config::contact_endpoint())
        .json(&payload)
        .map_err(|e| ErrorResponse {
            error: format!("Could not encode the form: {}", e),
            ..Default::default()
        })?;

    let response = request.send().await.map_err(|e| ErrorResponse {
        error: format!("Request failed: {}", e),
        ..Default::default()
    })?;

    if response.ok() {
        return response.json::<ContactSubmission>().await.map_err(|e| ErrorResponse {
            error: format!("Failed to parse response: {}", e),
            ..Default::default()
        });
    }

    log!("Contact submission failed with status:", response.status());
    match response.json::<ErrorResponse>().await {
        Ok(err) => Err(err),
        Err(_) => Err(ErrorResponse {
            error: "Sending failed, please try again".to_string(),
            ..Default::default()
        }),
    }
}

#[function_component]
pub fn ContactForm() -> Html {
    let payload = use_state(ContactPayload::default);
    let errors = use_state(ErrorResponse::default);
    let status = use_state(|| FormStatus::Idle);

    let on_name = {
        let payload = payload.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            payload.set(ContactPayload { name: input.value(), ..(*payload).clone() });
        })
    };
    let on_email = {
        let payload = payload.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            payload.set(ContactPayload { email: input.value(), ..(*payload).clone() });
        })
    };
    let on_project_type = {
        let payload = payload.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            payload.set(ContactPayload { project_type: select.value(), ..(*payload).clone() });
        })
    };
    let on_message = {
        let payload = payload.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            payload.set(ContactPayload { message: area.value(), ..(*payload).clone() });
        })
    };

    let on_submit = {
        let payload = payload.clone();
        let errors = errors.clone();
        let status = status.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *status == FormStatus::Sending {
                return;
            }
            status.set(FormStatus::Sending);
            let submitted = (*payload).clone();
            let payload = payload.clone();
            let errors = errors.clone();
            let status = status.clone();
            spawn_local(async move {
                match send_contact(submitted).await {
                    Ok(stored) => {
                        errors.set(ErrorResponse::default());
                        payload.set(ContactPayload::default());
                        status.set(FormStatus::Sent(stored.name));
                    }
                    Err(err) => {
                        status.set(FormStatus::Failed(err.error.clone()));
                        errors.set(err);
                    }
                }
            });
        })
    };

    let field_error = |name: &str| -> Html {
        match errors.field(name) {
            Some(message) => html! { <p class="field-error">{message}</p> },
            None => html! {},
        }
    };

    let sending = *status == FormStatus::Sending;

    html! {
        <form class="contact-form" onsubmit={on_submit} novalidate=true>
            <label>
                {"Name"}
                <input type="text" value={payload.name.clone()} oninput={on_name} />
            </label>
            { field_error("name") }
            <label>
                {"Email"}
                <input type="email" value={payload.email.clone()} oninput={on_email} />
            </label>
            { field_error("email") }
            <label>
                {"Project type"}
                <select onchange={on_project_type}>
                    <option value="" selected={payload.project_type.is_empty()}>{"Choose one"}</option>
                    { for PROJECT_TYPES.iter().map(|kind| html! {
                        <option value={*kind} selected={payload.project_type == *kind}>{*kind}</option>
                    }) }
                </select>
            </label>
            { field_error("projectType") }
            <label>
                {"Message"}
                <textarea rows="5" value={payload.message.clone()} oninput={on_message} />
            </label>
            { field_error("message") }
            <button type="submit" class="hero-cta" disabled={sending}>
                { if sending { "Sending..." } else { "Send inquiry" } }
            </button>
            {
                match &*status {
                    FormStatus::Sent(name) => html! {
                        <p class="success-message">{format!("Thanks {}, we will be in touch shortly.", name)}</p>
                    },
                    FormStatus::Failed(message) => html! {
                        <p class="error-message">{message}</p>
                    },
                    _ => html! {},
                }
            }
        </form>
    }
}
