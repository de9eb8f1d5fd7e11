//! App shell: router, session gate, and shared context wiring.

use crate::components::auth::LoginPage;
use crate::components::toast::ToastHost;
use crate::core::store::{AppStore, dismiss_toast};
use crate::features::channel_form::view::ChannelFormPage;
use crate::features::channels::view::ChannelsPage;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

mod api;
mod routes;
pub(crate) mod session;

pub(crate) use api::ApiCtx;
pub(crate) use routes::Route;
pub(crate) use session::{api_base_url, clear_token, load_token, store_token};

#[function_component(TelepostApp)]
pub(crate) fn telepost_app() -> Html {
    let api_ctx = use_memo(|_| ApiCtx::new(api_base_url()), ());
    let toasts = use_selector(|store: &AppStore| store.toasts.clone());
    let dispatch = Dispatch::<AppStore>::new();
    let on_dismiss = Callback::from(move |id: u64| {
        dispatch.reduce_mut(|store| dismiss_toast(store, id));
    });

    html! {
        <ContextProvider<ApiCtx> context={(*api_ctx).clone()}>
            <BrowserRouter>
                <Switch<Route> render={switch} />
                <ToastHost toasts={(*toasts).clone()} on_dismiss={on_dismiss} />
            </BrowserRouter>
        </ContextProvider<ApiCtx>>
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Login => html! { <LoginPage /> },
        Route::Home => html! { <Guard><Redirect<Route> to={Route::Channels} /></Guard> },
        Route::Channels => html! { <Guard><ChannelsPage /></Guard> },
        Route::ChannelNew => html! { <Guard><ChannelFormPage id={None::<String>} /></Guard> },
        Route::ChannelEdit { id } => html! { <Guard><ChannelFormPage id={Some(id)} /></Guard> },
        Route::NotFound => html! { <Guard><Redirect<Route> to={Route::Channels} /></Guard> },
    }
}

#[derive(Properties, PartialEq)]
struct GuardProps {
    pub children: Children,
}

/// Session gate: guarded screens render only with a credential present.
///
/// The check runs on every render of a guarded route rather than being
/// cached, so a logout or eviction in another tab takes effect on the next
/// navigation.
#[function_component(Guard)]
fn guard(props: &GuardProps) -> Html {
    if load_token().is_none() {
        return html! { <Redirect<Route> to={Route::Login} /> };
    }
    html! { <>{ props.children.clone() }</> }
}

/// Entrypoint invoked by Trunk for wasm32 builds.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<TelepostApp>::with_root(root).render();
    } else {
        yew::Renderer::<TelepostApp>::new().render();
    }
}
