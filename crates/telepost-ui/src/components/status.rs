use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ChannelStatusProps {
    pub active: bool,
}

/// Colored dot plus label reflecting the backend scheduler state for a row.
#[function_component(ChannelStatus)]
pub(crate) fn channel_status(props: &ChannelStatusProps) -> Html {
    let (dot, label) = if props.active {
        ("status-dot active", "Active")
    } else {
        ("status-dot inactive", "Inactive")
    };
    html! {
        <span class="channel-status">
            <span class={dot}></span>
            <span class="muted">{label}</span>
        </span>
    }
}
