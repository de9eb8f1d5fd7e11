//! Create/edit screen with the connectivity-check gate on the chat id.

use crate::app::{ApiCtx, Route, api_base_url};
use crate::core::store::{AppStore, push_toast};
use crate::features::channel_form::state::{ChatCheck, FormState};
use crate::models::ToastKind;
use gloo::console;
use telepost_api_models::ParseMode;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::Dispatch;

/// Route-level props; `None` means create mode.
#[derive(Properties, PartialEq)]
pub(crate) struct ChannelFormProps {
    /// Channel id from the edit route, unparsed.
    pub id: Option<String>,
}

#[function_component(ChannelFormPage)]
pub(crate) fn channel_form_page(props: &ChannelFormProps) -> Html {
    let navigator = use_navigator();
    let dispatch = Dispatch::<AppStore>::new();
    let api_ctx = use_context::<ApiCtx>().unwrap_or_else(|| ApiCtx::new(api_base_url()));
    let edit_id = props.id.as_deref().and_then(|raw| raw.parse::<i64>().ok());
    let form = use_state(FormState::create);

    {
        // Edit mode hydrates the form from the backend once per id.
        let form = form.setter();
        let dispatch = dispatch.clone();
        let client = api_ctx.client.clone();
        use_effect_with_deps(
            move |id: &Option<i64>| {
                if let Some(id) = *id {
                    yew::platform::spawn_local(async move {
                        match client.fetch_channel(id).await {
                            Ok(channel) => form.set(FormState::edit(&channel)),
                            Err(err) => {
                                console::error!("channel load failed", id, err.to_string());
                                dispatch.reduce_mut(|store| {
                                    push_toast(store, ToastKind::Error, "Failed to load the channel");
                                });
                            }
                        }
                    });
                }
                || ()
            },
            edit_id,
        );
    }

    let on_name = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() {
                let mut next = (*form).clone();
                next.set_name(input.value());
                form.set(next);
            }
        })
    };
    let on_chat_id = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() {
                let mut next = (*form).clone();
                next.set_chat_id(input.value());
                form.set(next);
            }
        })
    };
    let on_parse_mode = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<web_sys::HtmlSelectElement>() {
                if let Some(mode) = ParseMode::from_label(&select.value()) {
                    let mut next = (*form).clone();
                    next.set_parse_mode(mode);
                    form.set(next);
                }
            }
        })
    };
    let on_interval = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() {
                let mut next = (*form).clone();
                next.set_interval(input.value());
                form.set(next);
            }
        })
    };

    let on_check = {
        let form = form.clone();
        let dispatch = dispatch.clone();
        let client = api_ctx.client.clone();
        Callback::from(move |_| {
            let Some(chat_id) = form.check_target() else {
                dispatch.reduce_mut(|store| {
                    push_toast(store, ToastKind::Error, "Enter a numeric chat id");
                });
                return;
            };
            let form = form.clone();
            let dispatch = dispatch.clone();
            let client = client.clone();
            yew::platform::spawn_local(async move {
                match client.check_chat(chat_id).await {
                    Ok(reachable) => {
                        let mut next = (*form).clone();
                        next.record_check(reachable);
                        form.set(next);
                        dispatch.reduce_mut(|store| {
                            if reachable {
                                push_toast(store, ToastKind::Success, "Chat is reachable");
                            } else {
                                push_toast(store, ToastKind::Error, "The bot cannot post to this chat");
                            }
                        });
                    }
                    Err(err) => {
                        console::error!("chat check failed", err.to_string());
                        dispatch.reduce_mut(|store| {
                            push_toast(store, ToastKind::Error, "Could not check the chat");
                        });
                    }
                }
            });
        })
    };

    let on_submit = {
        let form = form.clone();
        let dispatch = dispatch.clone();
        let navigator = navigator.clone();
        let client = api_ctx.client.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let payload = match form.submit_payload() {
                Ok(payload) => payload,
                Err(err) => {
                    dispatch.reduce_mut(|store| {
                        push_toast(store, ToastKind::Error, err.to_string());
                    });
                    return;
                }
            };
            let dispatch = dispatch.clone();
            let navigator = navigator.clone();
            let client = client.clone();
            yew::platform::spawn_local(async move {
                let result = match edit_id {
                    Some(id) => client.update_channel(id, &payload).await,
                    None => client.create_channel(&payload).await,
                };
                match result {
                    Ok(()) => {
                        dispatch.reduce_mut(|store| {
                            push_toast(store, ToastKind::Success, "Channel saved");
                        });
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::Channels);
                        }
                    }
                    // The form keeps its values so the user can retry.
                    Err(err) => {
                        console::error!("channel save failed", err.to_string());
                        dispatch.reduce_mut(|store| {
                            push_toast(store, ToastKind::Error, "Failed to save channel");
                        });
                    }
                }
            });
        })
    };

    let on_cancel = {
        let navigator = navigator.clone();
        Callback::from(move |_| {
            if let Some(navigator) = navigator.clone() {
                navigator.push(&Route::Channels);
            }
        })
    };

    let chat_id_class = match form.check {
        ChatCheck::Unchecked => "field",
        ChatCheck::Verified => "field field-ok",
        ChatCheck::Failed => "field field-bad",
    };
    let title = if form.is_edit() { "Edit channel" } else { "New channel" };

    html! {
        <div class="container form-card">
            <h1>{title}</h1>
            <form onsubmit={on_submit}>
                <label class="field">
                    {"Name"}
                    <input
                        value={form.name.clone()}
                        oninput={on_name}
                        readonly={form.is_edit()}
                    />
                </label>
                <label class={chat_id_class}>
                    {"Chat ID"}
                    <div class="field-row">
                        <input value={form.chat_id.clone()} oninput={on_chat_id} />
                        <button type="button" class="ghost" onclick={on_check}>{"Check"}</button>
                    </div>
                </label>
                <label class="field">
                    {"Content type"}
                    <select onchange={on_parse_mode}>
                        {for ParseMode::all().iter().map(|&mode| html! {
                            <option
                                value={mode.as_str()}
                                selected={form.parse_mode == mode}
                            >
                                {mode.as_str()}
                            </option>
                        })}
                    </select>
                </label>
                <label class="field">
                    {"Interval (minutes)"}
                    <input value={form.interval.clone()} oninput={on_interval} />
                </label>
                <div class="toolbar-group">
                    <button type="submit" class="solid">{"Save"}</button>
                    <button type="button" class="ghost" onclick={on_cancel}>{"Cancel"}</button>
                </div>
            </form>
        </div>
    }
}
