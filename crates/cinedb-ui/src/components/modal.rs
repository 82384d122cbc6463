use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ModalProps {
    pub open: bool,
    pub title: AttrValue,
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub on_close: Callback<()>,
}

/// Dialog with a gradient header; the backdrop closes it.
#[function_component(Modal)]
pub(crate) fn modal(props: &ModalProps) -> Html {
    if !props.open {
        return html! {};
    }
    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_| on_close.emit(()))
    };

    html! {
        <div class="modal modal-open" role="dialog" aria-modal="true">
            <div class="modal-box p-0 max-w-md max-h-[90vh] overflow-y-auto">
                <div class="bg-gradient-to-r from-primary to-secondary text-white p-6">
                    <h3 class="text-2xl font-semibold">{props.title.clone()}</h3>
                </div>
                { for props.children.iter() }
            </div>
            <button class="modal-backdrop" aria-label="Cerrar" onclick={on_close}></button>
        </div>
    }
}
