//! Empty state panel for the movie grid.
//!
//! # Design
//! - Keep copy and actions entirely prop-driven.
//! - Render optional actions only when provided.

use crate::components::atoms::Title;
use crate::core::ui::TitleLevel;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct EmptyStateProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub description: Option<AttrValue>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(EmptyState)]
pub(crate) fn empty_state(props: &EmptyStateProps) -> Html {
    let has_actions = props.children.iter().next().is_some();
    html! {
        <div class="text-center py-12 bg-base-100 rounded-xl shadow-sm">
            <span class="text-6xl mb-4 block">{"🎭"}</span>
            <Title level={TitleLevel::H3} class="mb-2">{props.title.clone()}</Title>
            {props.description.clone().map(|text| html! {
                <p class="text-base-content/70 mb-6">{text}</p>
            }).unwrap_or_default()}
            {if has_actions {
                html! { <div class="flex justify-center">{ for props.children.iter() }</div> }
            } else {
                html! {}
            }}
        </div>
    }
}
