use crate::app::{Route, api_base_url, store_token};
use crate::core::auth::encode_basic_token;
use crate::core::error::ApiError;
use crate::core::store::{AppStore, push_toast};
use crate::models::ToastKind;
use crate::services::api::probe_credentials;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::Dispatch;

/// Login screen: derives the credential token from the entered pair and
/// probes the list endpoint with it before persisting anything.
#[function_component(LoginPage)]
pub(crate) fn login_page() -> Html {
    let navigator = use_navigator();
    let dispatch = Dispatch::<AppStore>::new();
    let username = use_state(String::new);
    let password = use_state(String::new);
    let busy = use_state(|| false);

    let on_username = {
        let username = username.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() {
                username.set(input.value());
            }
        })
    };
    let on_password = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() {
                password.set(input.value());
            }
        })
    };

    let on_submit = {
        let username = username.clone();
        let password = password.clone();
        let busy = busy.clone();
        let navigator = navigator.clone();
        let dispatch = dispatch.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(token) = encode_basic_token(&username, &password) else {
                dispatch.reduce_mut(|store| {
                    push_toast(store, ToastKind::Error, "Enter a username and a password");
                });
                return;
            };
            busy.set(true);
            let busy = busy.clone();
            let navigator = navigator.clone();
            let dispatch = dispatch.clone();
            yew::platform::spawn_local(async move {
                match probe_credentials(&api_base_url(), &token).await {
                    Ok(()) => {
                        store_token(&token);
                        dispatch.reduce_mut(|store| {
                            push_toast(store, ToastKind::Success, "Signed in");
                        });
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::Channels);
                        }
                    }
                    Err(err) if err.is_unauthorized() => {
                        dispatch.reduce_mut(|store| {
                            push_toast(store, ToastKind::Error, "Invalid credentials");
                        });
                    }
                    Err(err) => {
                        dispatch.reduce_mut(|store| {
                            push_toast(
                                store,
                                ToastKind::Error,
                                format!("Could not reach the server: {err}"),
                            );
                        });
                    }
                }
                busy.set(false);
            });
        })
    };

    html! {
        <div class="container narrow">
            <h1>{"Sign in"}</h1>
            <form onsubmit={on_submit} class="stack">
                <label class="stack">
                    <span>{"Username"}</span>
                    <input value={(*username).clone()} oninput={on_username} required=true />
                </label>
                <label class="stack">
                    <span>{"Password"}</span>
                    <input type="password" value={(*password).clone()} oninput={on_password} required=true />
                </label>
                <button type="submit" class="solid" disabled={*busy}>
                    {if *busy { "Signing in…" } else { "Sign in" }}
                </button>
            </form>
        </div>
    }
}
