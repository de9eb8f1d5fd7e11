use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ConfirmDeleteProps {
    /// Number of channels queued for deletion.
    pub count: usize,
    pub on_confirm: Callback<()>,
    pub on_cancel: Callback<()>,
}

/// Modal confirmation shown before a bulk delete is issued.
#[function_component(ConfirmDelete)]
pub(crate) fn confirm_delete(props: &ConfirmDeleteProps) -> Html {
    let confirm = {
        let on_confirm = props.on_confirm.clone();
        Callback::from(move |_| on_confirm.emit(()))
    };
    let cancel = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_| on_cancel.emit(()))
    };
    let title = if props.count == 1 {
        "Delete the selected channel?".to_string()
    } else {
        format!("Delete the {} selected channels?", props.count)
    };

    html! {
        <div class="modal-overlay" role="dialog" aria-modal="true">
            <div class="card">
                <header>
                    <h3>{title}</h3>
                </header>
                <p class="muted">
                    {"The backend removes the channel configuration; already published posts are not affected."}
                </p>
                <div class="actions">
                    <button class="ghost" onclick={cancel}>{"Cancel"}</button>
                    <button class="danger" onclick={confirm}>{"Delete"}</button>
                </div>
            </div>
        </div>
    }
}
