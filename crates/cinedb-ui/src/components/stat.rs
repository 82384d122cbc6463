use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct StatProps {
    pub title: AttrValue,
    pub value: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Stat)]
pub(crate) fn stat(props: &StatProps) -> Html {
    html! {
        <div class="stat place-items-center">
            <div class={classes!("stat-value", "text-2xl", props.class.clone())}>{props.value.clone()}</div>
            <div class="stat-title">{props.title.clone()}</div>
        </div>
    }
}
