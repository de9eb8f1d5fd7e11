//! List screen: table, search, pagination, bulk actions, and polling.

use crate::app::{ApiCtx, Route, api_base_url, clear_token};
use crate::components::confirm::ConfirmDelete;
use crate::components::status::ChannelStatus;
use crate::core::store::{AppStore, push_toast};
use crate::features::channels::state::{
    ChannelRow, ChannelsState, PAGE_SIZES, POLL_INTERVAL_MS, cancel_delete, edit_target,
    finish_delete, has_next_page, has_prev_page, next_page, page_count, pending_delete_ids,
    prev_page, request_delete, reset_transient, run_bulk, set_page_size, set_rows, set_search,
    toggle_selection, toggle_targets, visible_rows,
};
use crate::models::ToastKind;
use gloo::console;
use gloo::timers::callback::Interval;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

#[function_component(ChannelsPage)]
pub(crate) fn channels_page() -> Html {
    let navigator = use_navigator();
    let dispatch = Dispatch::<AppStore>::new();
    let api_ctx = use_context::<ApiCtx>().unwrap_or_else(|| ApiCtx::new(api_base_url()));
    let channels = use_selector(|store: &AppStore| store.channels.clone());
    let state = (*channels).clone();

    let refresh = {
        let dispatch = dispatch.clone();
        let client = api_ctx.client.clone();
        Callback::from(move |()| {
            let dispatch = dispatch.clone();
            let client = client.clone();
            yew::platform::spawn_local(async move {
                match client.fetch_channels().await {
                    // Replace-on-refresh: the fetched snapshot is the single
                    // writer of the collection.
                    Ok(rows) => dispatch.reduce_mut(|store| set_rows(&mut store.channels, rows)),
                    Err(err) => {
                        console::error!("channel list refresh failed", err.to_string());
                        dispatch.reduce_mut(|store| {
                            push_toast(store, ToastKind::Error, "Failed to load channels");
                        });
                    }
                }
            });
        })
    };

    {
        // Initial load plus the fixed 30s poll; the interval handle lives in
        // the effect and is dropped on unmount, taking the timer with it.
        let refresh = refresh.clone();
        let dispatch = dispatch.clone();
        use_effect_with_deps(
            move |_| {
                refresh.emit(());
                let poll = {
                    let refresh = refresh.clone();
                    Interval::new(POLL_INTERVAL_MS, move || refresh.emit(()))
                };
                move || {
                    drop(poll);
                    dispatch.reduce_mut(|store| reset_transient(&mut store.channels));
                }
            },
            (),
        );
    }

    let on_search = {
        let dispatch = dispatch.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() {
                dispatch.reduce_mut(|store| set_search(&mut store.channels, input.value()));
            }
        })
    };
    let on_clear_search = {
        let dispatch = dispatch.clone();
        Callback::from(move |_| {
            dispatch.reduce_mut(|store| set_search(&mut store.channels, String::new()));
        })
    };

    let on_select = {
        let dispatch = dispatch.clone();
        Callback::from(move |id: i64| {
            dispatch.reduce_mut(|store| toggle_selection(&mut store.channels, id));
        })
    };

    let on_create = {
        let navigator = navigator.clone();
        Callback::from(move |_| {
            if let Some(navigator) = navigator.clone() {
                navigator.push(&Route::ChannelNew);
            }
        })
    };

    let on_edit = {
        let dispatch = dispatch.clone();
        let navigator = navigator.clone();
        Callback::from(move |_| match edit_target(&dispatch.get().channels) {
            Some(id) => {
                if let Some(navigator) = navigator.clone() {
                    navigator.push(&Route::ChannelEdit { id: id.to_string() });
                }
            }
            None => dispatch.reduce_mut(|store| {
                push_toast(store, ToastKind::Error, "Select exactly one channel to edit");
            }),
        })
    };

    let on_toggle_active = {
        let dispatch = dispatch.clone();
        let client = api_ctx.client.clone();
        let refresh = refresh.clone();
        Callback::from(move |_| {
            let targets = toggle_targets(&dispatch.get().channels);
            if targets.is_empty() {
                return;
            }
            let dispatch = dispatch.clone();
            let client = client.clone();
            let refresh = refresh.clone();
            yew::platform::spawn_local(async move {
                let outcome = run_bulk(targets, |(id, active)| {
                    let client = client.clone();
                    async move {
                        client.set_active(id, active).await.map_err(|err| {
                            console::error!("status toggle failed", id, err.to_string());
                        })
                    }
                })
                .await;
                dispatch.reduce_mut(|store| {
                    if outcome.is_clean() {
                        push_toast(
                            store,
                            ToastKind::Success,
                            format!("Updated {} channels", outcome.total),
                        );
                    } else {
                        push_toast(
                            store,
                            ToastKind::Error,
                            format!(
                                "Failed to update {} of {} channels",
                                outcome.failed, outcome.total
                            ),
                        );
                    }
                });
                refresh.emit(());
            });
        })
    };

    let on_request_delete = {
        let dispatch = dispatch.clone();
        Callback::from(move |_| {
            dispatch.reduce_mut(|store| {
                if !request_delete(&mut store.channels) {
                    push_toast(store, ToastKind::Error, "Select channels to delete first");
                }
            });
        })
    };

    let on_confirm_delete = {
        let dispatch = dispatch.clone();
        let client = api_ctx.client.clone();
        let refresh = refresh.clone();
        Callback::from(move |()| {
            let ids = pending_delete_ids(&dispatch.get().channels);
            let dispatch = dispatch.clone();
            let client = client.clone();
            let refresh = refresh.clone();
            yew::platform::spawn_local(async move {
                // A failed delete does not stop the rest; the refresh below
                // reconciles whatever the backend actually applied.
                let outcome = run_bulk(ids, |id| {
                    let client = client.clone();
                    async move {
                        client.delete_channel(id).await.map_err(|err| {
                            console::error!("delete failed", id, err.to_string());
                        })
                    }
                })
                .await;
                dispatch.reduce_mut(|store| {
                    if outcome.is_clean() {
                        push_toast(
                            store,
                            ToastKind::Success,
                            format!("Deleted {} channels", outcome.total),
                        );
                    } else {
                        push_toast(
                            store,
                            ToastKind::Error,
                            format!(
                                "Failed to delete {} of {} channels",
                                outcome.failed, outcome.total
                            ),
                        );
                    }
                });
                refresh.emit(());
                dispatch.reduce_mut(|store| finish_delete(&mut store.channels));
            });
        })
    };

    let on_cancel_delete = {
        let dispatch = dispatch.clone();
        Callback::from(move |()| {
            dispatch.reduce_mut(|store| cancel_delete(&mut store.channels));
        })
    };

    let on_logout = {
        let dispatch = dispatch.clone();
        let navigator = navigator.clone();
        Callback::from(move |_| {
            clear_token();
            dispatch.reduce_mut(|store| reset_transient(&mut store.channels));
            if let Some(navigator) = navigator.clone() {
                navigator.push(&Route::Login);
            }
        })
    };

    let on_prev = {
        let dispatch = dispatch.clone();
        Callback::from(move |_| dispatch.reduce_mut(|store| prev_page(&mut store.channels)))
    };
    let on_next = {
        let dispatch = dispatch.clone();
        Callback::from(move |_| dispatch.reduce_mut(|store| next_page(&mut store.channels)))
    };

    let selection_count = state.selected.len();
    let rows = visible_rows(&state);

    html! {
        <div class="container">
            <h1>{"Channel administration"}</h1>

            <div class="toolbar">
                <div class="toolbar-group">
                    <div class="search">
                        <input
                            placeholder="Search…"
                            value={state.search.clone()}
                            oninput={on_search}
                        />
                        {if state.search.is_empty() { html!{} } else {
                            html! { <button class="ghost" aria-label="Clear search" onclick={on_clear_search}>{"✕"}</button> }
                        }}
                    </div>
                    <button class="ghost" onclick={on_logout}>{"Log out"}</button>
                </div>
                <div class="toolbar-group">
                    <button class="solid" onclick={on_create}>{"Create"}</button>
                    <button class="ghost" onclick={on_edit} disabled={selection_count != 1}>{"Edit"}</button>
                    <button class="danger" onclick={on_request_delete}>{"Delete"}</button>
                    <button class="ghost" onclick={on_toggle_active} disabled={selection_count == 0}>
                        {"Toggle active"}
                    </button>
                </div>
            </div>

            <table class="channel-table">
                <thead>
                    <tr>
                        <th>{"Select"}</th>
                        <th>{"ID"}</th>
                        <th>{"Status"}</th>
                        <th>{"Name"}</th>
                        <th>{"Chat ID"}</th>
                        <th>{"Content type"}</th>
                        <th>{"Interval (min)"}</th>
                    </tr>
                </thead>
                <tbody>
                    {for rows.iter().map(|row| render_row(row, &state, &on_select))}
                </tbody>
            </table>

            {render_pagination(&state, &dispatch, &on_prev, &on_next)}

            {if state.confirm_open {
                html! {
                    <ConfirmDelete
                        count={state.pending_delete.len()}
                        on_confirm={on_confirm_delete}
                        on_cancel={on_cancel_delete}
                    />
                }
            } else { html!{} }}
        </div>
    }
}

fn render_row(row: &ChannelRow, state: &ChannelsState, on_select: &Callback<i64>) -> Html {
    let id = row.id;
    let selected = state.selected.contains(&id);
    let on_row_click = {
        let on_select = on_select.clone();
        Callback::from(move |_| on_select.emit(id))
    };
    let on_checkbox = {
        let on_select = on_select.clone();
        Callback::from(move |e: MouseEvent| {
            // The row handler would fire too; let exactly one of them toggle.
            e.stop_propagation();
            on_select.emit(id);
        })
    };

    html! {
        <tr
            key={id.to_string()}
            class={classes!(selected.then_some("selected"))}
            onclick={on_row_click}
        >
            <td><input type="checkbox" checked={selected} onclick={on_checkbox} /></td>
            <td>{id}</td>
            <td><ChannelStatus active={row.active} /></td>
            <td>{row.name.clone()}</td>
            <td>{row.chat_id}</td>
            <td>{row.parse_mode.as_str()}</td>
            <td>{row.interval}</td>
        </tr>
    }
}

fn render_pagination(
    state: &ChannelsState,
    dispatch: &Dispatch<AppStore>,
    on_prev: &Callback<MouseEvent>,
    on_next: &Callback<MouseEvent>,
) -> Html {
    html! {
        <div class="pagination">
            <div class="toolbar-group">
                <button class="ghost" onclick={on_prev.clone()} disabled={!has_prev_page(state)}>
                    {"Previous"}
                </button>
                <button class="ghost" onclick={on_next.clone()} disabled={!has_next_page(state)}>
                    {"Next"}
                </button>
                <span class="muted">{format!("Page {}/{}", state.page, page_count(state))}</span>
            </div>
            <div class="toolbar-group">
                {for PAGE_SIZES.iter().map(|&size| {
                    let dispatch = dispatch.clone();
                    let onclick = Callback::from(move |_| {
                        dispatch.reduce_mut(|store| set_page_size(&mut store.channels, size));
                    });
                    let class = if state.page_size == size { "solid" } else { "ghost" };
                    html! { <button {class} {onclick}>{size}</button> }
                })}
            </div>
        </div>
    }
}
