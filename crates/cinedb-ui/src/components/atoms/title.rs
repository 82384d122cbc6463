use crate::core::ui::{TitleLevel, TitleVariant};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct TitleProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub level: TitleLevel,
    #[prop_or_default]
    pub variant: TitleVariant,
    #[prop_or_default]
    pub center: bool,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Title)]
pub(crate) fn title(props: &TitleProps) -> Html {
    let classes = classes!(
        props.level.size_class(),
        props.variant.as_class(),
        props.center.then_some("text-center"),
        props.class.clone()
    );
    html! {
        <@{props.level.tag()} class={classes}>
            { for props.children.iter() }
        </@>
    }
}
