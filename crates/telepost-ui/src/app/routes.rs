//! Routing definitions for the console.
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq, Eq, Debug)]
pub(crate) enum Route {
    #[at("/login")]
    Login,
    #[at("/")]
    Home,
    #[at("/channels")]
    Channels,
    #[at("/channels/new")]
    ChannelNew,
    #[at("/channels/:id/edit")]
    ChannelEdit { id: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}
