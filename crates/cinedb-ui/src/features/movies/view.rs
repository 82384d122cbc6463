//! Movie dashboard view.
//!
//! # Design
//! - Filters and statistics are derived from the fetched list on every render.
//! - The editor state machine decides create vs update; the view only issues the request.
//! - Every mutation goes through [`after_mutation`] so refetch and toast follow the outcome.

use crate::app::api::ApiCtx;
use crate::app::config;
use crate::components::atoms::{Button, EmptyState, SearchInput, Title};
use crate::components::card::MovieCard;
use crate::components::message::Message;
use crate::components::modal::Modal;
use crate::components::stat::Stat;
use crate::components::toast::ToastHost;
use crate::core::toast::{ToastAction, ToastSlot};
use crate::core::ui::{ButtonVariant, MessageKind, TitleLevel, TitleVariant};
use crate::features::movies::actions::{MovieAction, MutationKind, confirm_delete};
use crate::features::movies::api::after_mutation;
use crate::features::movies::logic::{
    MovieFilters, MovieStats, filter_movies, genre_filter_from_value,
};
use crate::features::movies::state::{MIN_YEAR, MovieEditor, SubmitPlan, max_year};
use crate::hooks::{use_delete_movie, use_fetch_list, use_save_movie};
use crate::models::{Genre, Movie};
use yew::prelude::*;

#[function_component(DashboardPage)]
pub(crate) fn dashboard_page() -> Html {
    let api_ctx = use_context::<ApiCtx>().unwrap_or_else(ApiCtx::from_config);
    let movies = use_fetch_list::<Movie>(api_ctx.client.clone());
    let saver = use_save_movie(api_ctx.client.clone());
    let deleter = use_delete_movie(api_ctx.client.clone());
    let editor = use_state(MovieEditor::default);
    let filters = use_state(MovieFilters::default);
    let toasts = use_reducer(ToastSlot::default);

    let stats = MovieStats::from_movies(&movies.data);
    let visible = filter_movies(&movies.data, &filters);
    let current_year = config::current_year();
    let toast_sink = {
        let toasts = toasts.dispatcher();
        Callback::from(move |action: ToastAction| toasts.dispatch(action))
    };

    let on_search = {
        let filters = filters.clone();
        Callback::from(move |search: String| {
            update_state(&filters, |next| next.search = search);
        })
    };
    let on_genre = {
        let filters = filters.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<web_sys::HtmlSelectElement>() {
                update_state(&filters, |next| {
                    next.genre = genre_filter_from_value(&select.value());
                });
            }
        })
    };

    let on_action = {
        let editor = editor.clone();
        let deleter = deleter.clone();
        let data = movies.data.clone();
        let refetch = movies.refetch.clone();
        let toasts = toast_sink.clone();
        Callback::from(move |action: MovieAction| match action {
            MovieAction::New => update_state(&editor, MovieEditor::open_create),
            MovieAction::Edit(id) => {
                if let Some(movie) = data.iter().find(|movie| movie.id == id) {
                    update_state(&editor, |next| next.open_edit(movie));
                }
            }
            MovieAction::Delete(id) => {
                let Some(id) = confirm_delete(id, gloo::dialogs::confirm) else {
                    return;
                };
                let deleter = deleter.clone();
                let refetch = refetch.clone();
                let toasts = toasts.clone();
                yew::platform::spawn_local(async move {
                    after_mutation(
                        MutationKind::Delete,
                        deleter.delete_movie(id),
                        &refetch,
                        &toasts,
                    )
                    .await;
                });
            }
        })
    };
    let on_new = on_action.reform(|_: MouseEvent| MovieAction::New);

    let on_close = {
        let editor = editor.clone();
        let saving = saver.loading();
        Callback::from(move |()| {
            if !saving {
                editor.set(MovieEditor::default());
            }
        })
    };

    let on_submit = {
        let editor = editor.clone();
        let saver = saver.clone();
        let refetch = movies.refetch.clone();
        let toasts = toast_sink.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let mut next = (*editor).clone();
            let plan = next.submit(current_year);
            editor.set(next);
            let Some(plan) = plan else {
                return;
            };
            let editor = editor.clone();
            let saver = saver.clone();
            let refetch = refetch.clone();
            let toasts = toasts.clone();
            yew::platform::spawn_local(async move {
                let saved = match plan {
                    SubmitPlan::Create(input) => {
                        after_mutation(
                            MutationKind::Create,
                            saver.create_movie(input),
                            &refetch,
                            &toasts,
                        )
                        .await
                    }
                    SubmitPlan::Update { id, input } => {
                        after_mutation(
                            MutationKind::Update,
                            saver.update_movie(id, input),
                            &refetch,
                            &toasts,
                        )
                        .await
                    }
                };
                if saved.is_some() {
                    editor.set(MovieEditor::default());
                }
            });
        })
    };

    let on_expire = toast_sink.reform(ToastAction::Expire);
    let on_dismiss = toast_sink.reform(|()| ToastAction::Dismiss);

    let genre_value = filters
        .genre
        .as_ref()
        .map(|genre| genre.as_str().to_string())
        .unwrap_or_default();

    let body = if movies.loading {
        html! {
            <div class="text-center py-12">
                <span class="loading loading-spinner loading-lg text-primary"></span>
                <p class="text-base-content/70 mt-4">{"Cargando películas..."}</p>
            </div>
        }
    } else if let Some(error) = movies.error.clone() {
        html! {
            <Message kind={MessageKind::Error}>
                {format!("Error al cargar las películas: {error}")}
            </Message>
        }
    } else if visible.is_empty() {
        if movies.data.is_empty() {
            html! {
                <EmptyState
                    title="No hay películas registradas"
                    description="Comienza agregando tu primera película favorita"
                >
                    <Button onclick={on_new.clone()}>{"➕ Agregar Primera Película"}</Button>
                </EmptyState>
            }
        } else {
            html! {
                <EmptyState
                    title="No se encontraron películas"
                    description="Intenta con otros términos de búsqueda"
                />
            }
        }
    } else {
        html! {
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4 gap-6">
                { for visible.iter().map(|movie| html! {
                    <MovieCard
                        key={movie.id}
                        movie={(*movie).clone()}
                        busy={deleter.loading()}
                        on_action={on_action.clone()}
                    />
                }) }
            </div>
        }
    };

    let delete_error = deleter.error().map(|error| {
        html! {
            <Message kind={MessageKind::Warning}>
                {format!("Última eliminación fallida: {error}")}
            </Message>
        }
    });

    html! {
        <div class="min-h-screen bg-base-200">
            <ToastHost
                toast={toasts.current().cloned()}
                on_expire={on_expire}
                on_dismiss={on_dismiss}
            />
            <header class="bg-gradient-to-r from-primary to-secondary text-white py-8 px-4">
                <div class="max-w-7xl mx-auto">
                    <Title level={TitleLevel::H1} variant={TitleVariant::White} center=true>
                        {"🎬 CineDB - Tu Base de Datos de Películas"}
                    </Title>
                    <p class="text-center text-white/80 mt-2">
                        {"Organiza, califica y descubre tus películas favoritas"}
                    </p>
                </div>
            </header>
            <div class="max-w-7xl mx-auto px-4 py-8">
                <div class="bg-base-100 rounded-xl shadow-sm p-6 mb-8">
                    <div class="flex flex-col md:flex-row gap-4 items-center justify-between">
                        <div class="flex flex-col sm:flex-row gap-4 flex-1">
                            <SearchInput
                                value={filters.search.clone()}
                                placeholder="Buscar película..."
                                on_search={on_search}
                            />
                            <select class="select select-bordered" aria-label="Filtrar por género" onchange={on_genre}>
                                <option value="" selected={genre_value.is_empty()}>{"Todos los géneros"}</option>
                                { for Genre::ALL.iter().map(|genre| html! {
                                    <option value={genre.as_str().to_string()} selected={genre.as_str() == genre_value}>
                                        {genre.as_str().to_string()}
                                    </option>
                                }) }
                            </select>
                        </div>
                        <Button class="whitespace-nowrap" onclick={on_new}>{"➕ Agregar Película"}</Button>
                    </div>
                    <div class="stats stats-vertical sm:stats-horizontal w-full mt-6 pt-6 border-t border-base-300">
                        <Stat title="Total Películas" value={stats.total.to_string()} class="text-primary" />
                        <Stat title="Promedio" value={stats.average_label()} class="text-success" />
                        <Stat title="Excelentes (8+)" value={stats.excellent.to_string()} class="text-secondary" />
                        <Stat title="Géneros" value={stats.genres.to_string()} class="text-warning" />
                    </div>
                </div>
                {delete_error.unwrap_or_default()}
                {body}
            </div>
            {render_editor(&editor, saver.loading(), saver.error(), current_year, on_submit, on_close)}
        </div>
    }
}

fn render_editor(
    editor: &UseStateHandle<MovieEditor>,
    saving: bool,
    save_error: Option<String>,
    current_year: i32,
    on_submit: Callback<SubmitEvent>,
    on_close: Callback<()>,
) -> Html {
    let editing = editor.editing().is_some();
    let title = if editing {
        "✏️ Editar Película"
    } else {
        "➕ Nueva Película"
    };
    let submit_label = if saving {
        "⏳ Guardando..."
    } else if editing {
        "💾 Actualizar"
    } else {
        "➕ Crear"
    };
    let form = &editor.form;
    let errors = &editor.errors;
    let on_cancel = on_close.reform(|_: MouseEvent| ());

    html! {
        <Modal open={editor.is_open()} title={title} on_close={on_close}>
            <form class="p-6" onsubmit={on_submit} novalidate=true>
                {save_error.map(|error| html! {
                    <Message kind={MessageKind::Error}>{error}</Message>
                }).unwrap_or_default()}
                <label class="form-control mb-4">
                    <span class="label-text font-medium mb-2">{"Título de la Película *"}</span>
                    <input
                        type="text"
                        class="input input-bordered w-full"
                        placeholder="Ej: Avengers"
                        value={form.title.clone()}
                        oninput={form_input(editor, |next, value| next.form.title = value)}
                    />
                    {field_error(errors.title.as_deref())}
                </label>
                <label class="form-control mb-4">
                    <span class="label-text font-medium mb-2">{"Género *"}</span>
                    <select
                        class="select select-bordered w-full"
                        onchange={form_select(editor, |next, value| next.form.genre = value)}
                    >
                        <option value="" selected={form.genre.is_empty()}>{"Selecciona un género"}</option>
                        { for Genre::ALL.iter().map(|genre| html! {
                            <option value={genre.as_str().to_string()} selected={genre.as_str() == form.genre}>
                                {genre.as_str().to_string()}
                            </option>
                        }) }
                    </select>
                    {field_error(errors.genre.as_deref())}
                </label>
                <label class="form-control mb-4">
                    <span class="label-text font-medium mb-2">{"Año de Estreno *"}</span>
                    <input
                        type="number"
                        class="input input-bordered w-full"
                        placeholder="Ej: 2020"
                        min={MIN_YEAR.to_string()}
                        max={max_year(current_year).to_string()}
                        value={form.year.clone()}
                        oninput={form_input(editor, |next, value| next.form.year = value)}
                    />
                    {field_error(errors.year.as_deref())}
                </label>
                <label class="form-control mb-6">
                    <span class="label-text font-medium mb-2">{"Calificación (1-10) *"}</span>
                    <input
                        type="number"
                        step="0.1"
                        class="input input-bordered w-full"
                        placeholder="Ej: 9.0"
                        value={form.rating.clone()}
                        oninput={form_input(editor, |next, value| next.form.rating = value)}
                    />
                    {field_error(errors.rating.as_deref())}
                </label>
                <div class="flex gap-3">
                    <Button r#type="submit" class="flex-1" disabled={saving}>{submit_label}</Button>
                    <Button variant={ButtonVariant::Secondary} class="flex-1" disabled={saving} onclick={on_cancel}>
                        {"❌ Cancelar"}
                    </Button>
                </div>
            </form>
        </Modal>
    }
}

fn field_error(message: Option<&str>) -> Html {
    message
        .map(|message| html! { <p class="text-error text-sm mt-1">{message.to_string()}</p> })
        .unwrap_or_default()
}

fn form_input(
    editor: &UseStateHandle<MovieEditor>,
    apply: impl Fn(&mut MovieEditor, String) + 'static,
) -> Callback<InputEvent> {
    let editor = editor.clone();
    Callback::from(move |event: InputEvent| {
        if let Some(input) = event.target_dyn_into::<web_sys::HtmlInputElement>() {
            update_state(&editor, |next| apply(next, input.value()));
        }
    })
}

fn form_select(
    editor: &UseStateHandle<MovieEditor>,
    apply: impl Fn(&mut MovieEditor, String) + 'static,
) -> Callback<Event> {
    let editor = editor.clone();
    Callback::from(move |event: Event| {
        if let Some(select) = event.target_dyn_into::<web_sys::HtmlSelectElement>() {
            update_state(&editor, |next| apply(next, select.value()));
        }
    })
}

fn update_state<T: Clone + 'static>(state: &UseStateHandle<T>, update: impl FnOnce(&mut T)) {
    let mut next = (**state).clone();
    update(&mut next);
    state.set(next);
}
