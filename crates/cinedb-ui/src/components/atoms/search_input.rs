//! Search box for the dashboard toolbar.
//!
//! # Design
//! - Controlled input: the caller owns the text and receives every keystroke.

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct SearchInputProps {
    #[prop_or_default]
    pub value: AttrValue,
    #[prop_or_default]
    pub placeholder: Option<AttrValue>,
    #[prop_or_default]
    pub on_search: Callback<String>,
}

#[function_component(SearchInput)]
pub(crate) fn search_input(props: &SearchInputProps) -> Html {
    let oninput = {
        let on_search = props.on_search.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<web_sys::HtmlInputElement>() {
                on_search.emit(input.value());
            }
        })
    };

    html! {
        <label class="input input-bordered flex items-center gap-2">
            <span class="text-base-content/60">{"🔍"}</span>
            <input
                type="text"
                class="grow"
                placeholder={props.placeholder.clone()}
                aria-label={props.placeholder.clone()}
                value={props.value.clone()}
                {oninput}
            />
        </label>
    }
}
