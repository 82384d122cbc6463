//! Movie card for the dashboard grid.

use crate::components::atoms::Button;
use crate::core::ui::{ButtonSize, ButtonVariant};
use crate::features::movies::actions::MovieAction;
use crate::features::movies::logic::{RatingBand, genre_badge_class, rating_percent};
use crate::models::Movie;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct MovieCardProps {
    pub movie: Movie,
    /// Disables the card actions while a delete is in flight.
    #[prop_or_default]
    pub busy: bool,
    pub on_action: Callback<MovieAction>,
}

#[function_component(MovieCard)]
pub(crate) fn movie_card(props: &MovieCardProps) -> Html {
    let movie = &props.movie;
    let id = movie.id;
    let on_edit = props
        .on_action
        .reform(move |_: MouseEvent| MovieAction::Edit(id));
    let on_delete = props
        .on_action
        .reform(move |_: MouseEvent| MovieAction::Delete(id));
    let band = RatingBand::for_rating(movie.rating);
    let bar_style = format!("width: {:.0}%", rating_percent(movie.rating));

    html! {
        <div class="card bg-base-100 shadow-lg hover:shadow-xl transition-shadow overflow-hidden">
            <div class="bg-gradient-to-r from-primary to-secondary px-6 py-4">
                <h3 class="text-xl font-bold text-white truncate">{movie.title.clone()}</h3>
                <p class="text-white/80 text-sm">{format!("Año: {}", movie.year)}</p>
            </div>
            <div class="card-body">
                <span class={classes!("badge", genre_badge_class(&movie.genre))}>
                    {movie.genre.to_string()}
                </span>
                <div class="flex items-center justify-between mt-2">
                    <span class="font-medium text-base-content/70">{"Calificación:"}</span>
                    <span class={classes!("badge", "badge-lg", "font-bold", band.as_class())}>
                        {format!("{}/10", movie.rating)}
                    </span>
                </div>
                <div class="w-full bg-base-300 rounded-full h-2">
                    <div class="bg-gradient-to-r from-primary to-secondary h-2 rounded-full" style={bar_style}></div>
                </div>
                <div class="card-actions mt-4">
                    <Button variant={ButtonVariant::Primary} size={ButtonSize::Small} class="flex-1" disabled={props.busy} onclick={on_edit}>
                        {"✏️ Editar"}
                    </Button>
                    <Button variant={ButtonVariant::Danger} size={ButtonSize::Small} class="flex-1" disabled={props.busy} onclick={on_delete}>
                        {"🗑️ Eliminar"}
                    </Button>
                </div>
            </div>
            <div class="px-6 pb-2">
                <span class="text-xs text-base-content/50">{format!("ID: {}", movie.id)}</span>
            </div>
        </div>
    }
}
