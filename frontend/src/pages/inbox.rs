use yew::prelude::*;
use gloo_net::http::Request;
use gloo_console::log;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;

use crate::config;
use crate::models::{ContactSubmission, ErrorResponse};

#[derive(Clone, PartialEq)]
enum InboxState {
    Locked,
    Loading,
    Loaded(Vec<ContactSubmission>),
    Failed(String),
}

async fn fetch_submissions(token: String) -> Result<Vec<ContactSubmission>, String> {
    let response = Request::get(&config::contact_endpoint())
        .header("Authorization", &format!("Bearer {}", token))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    match response.status() {
        200 => response
            .json::<Vec<ContactSubmission>>()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e)),
        401 => Err("That token was not accepted".to_string()),
        503 => Err("The inbox is not enabled on this server".to_string()),
        status => {
            log!("Inbox request failed with status:", status);
            let message = response
                .json::<ErrorResponse>()
                .await
                .map(|err| err.error)
                .unwrap_or_else(|_| "Could not load submissions".to_string());
            Err(message)
        }
    }
}

#[function_component]
pub fn Inbox() -> Html {
    let token = use_state(String::new);
    let state = use_state(|| InboxState::Locked);

    let on_token = {
        let token = token.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            token.set(input.value());
        })
    };

    let on_submit = {
        let token = token.clone();
        let state = state.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let supplied = token.trim().to_string();
            if supplied.is_empty() {
                state.set(InboxState::Failed("Enter the inbox token first".to_string()));
                return;
            }
            state.set(InboxState::Loading);
            let state = state.clone();
            spawn_local(async move {
                match fetch_submissions(supplied).await {
                    Ok(submissions) => state.set(InboxState::Loaded(submissions)),
                    Err(message) => state.set(InboxState::Failed(message)),
                }
            });
        })
    };

    let body = match &*state {
        InboxState::Locked => html! {},
        InboxState::Loading => html! { <p>{"Loading submissions..."}</p> },
        InboxState::Failed(message) => html! { <p class="error-message">{message}</p> },
        InboxState::Loaded(submissions) if submissions.is_empty() => html! {
            <p>{"No submissions yet."}</p>
        },
        InboxState::Loaded(submissions) => html! {
            <ul class="inbox-list">
                { for submissions.iter().map(|s| html! {
                    <li key={s.id.clone()} class="inbox-item">
                        <div class="inbox-meta">
                            <strong>{&s.name}</strong>
                            {" · "}
                            <a href={format!("mailto:{}", s.email)}>{&s.email}</a>
                            {" · "}
                            <span>{&s.project_type}</span>
                            <span class="inbox-date">{s.created_at.format("%Y-%m-%d %H:%M UTC").to_string()}</span>
                        </div>
                        <p>{&s.message}</p>
                    </li>
                }) }
            </ul>
        },
    };

    html! {
        <div class="inbox-page">
            <h1>{"Inbox"}</h1>
            <form class="inbox-unlock" onsubmit={on_submit}>
                <input type="password" placeholder="Inbox token" value={(*token).clone()} oninput={on_token} />
                <button type="submit" class="hero-cta" disabled={*state == InboxState::Loading}>{"Load"}</button>
            </form>
            { body }
            <style>
                {r#"
                    .inbox-page {
                        max-width: 860px;
                        margin: 0 auto;
                        padding: 6rem 2rem;
                        color: #f2f2f2;
                    }
                    .inbox-unlock {
                        display: flex;
                        gap: 1rem;
                        margin-bottom: 2rem;
                    }
                    .inbox-unlock input {
                        flex: 1;
                        background: rgba(30, 30, 30, 0.7);
                        border: 1px solid rgba(126, 178, 255, 0.2);
                        border-radius: 8px;
                        color: #fff;
                        padding: 0.75rem;
                    }
                    .inbox-list {
                        list-style: none;
                        padding: 0;
                    }
                    .inbox-item {
                        border-bottom: 1px solid rgba(255, 255, 255, 0.1);
                        padding: 1rem 0;
                    }
                    .inbox-date {
                        float: right;
                        color: rgba(255, 255, 255, 0.5);
                    }
                    .inbox-item p {
                        white-space: pre-wrap;
                    }
                "#}
            </style>
        </div>
    }
}
