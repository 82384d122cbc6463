//! Welcome page view.
//!
//! # Design
//! - The interval is created when counting starts and dropped on any exit from counting or on unmount.
//! - Navigation happens in an effect reacting to the navigated phase.

use crate::app::Route;
use crate::components::atoms::{Button, Title};
use crate::core::ui::{ButtonSize, ButtonVariant, TitleLevel, TitleVariant};
use crate::features::welcome::state::{CountdownAction, TICK_MS, WelcomeCountdown};
use gloo::console;
use gloo_timers::callback::Interval;
use yew::prelude::*;
use yew_router::prelude::*;

const FEATURES: [(&str, &str); 3] = [
    ("📝", "Registra películas con detalles completos"),
    ("⭐", "Califica y organiza por género"),
    ("🔍", "Consulta tu historial fácilmente"),
];

#[function_component(WelcomePage)]
pub(crate) fn welcome_page() -> Html {
    let countdown = use_reducer(WelcomeCountdown::default);
    let navigator = use_navigator();

    {
        let dispatcher = countdown.dispatcher();
        use_effect_with_deps(
            move |counting: &bool| {
                let interval = counting.then(|| {
                    Interval::new(TICK_MS, move || dispatcher.dispatch(CountdownAction::Tick))
                });
                move || drop(interval)
            },
            countdown.is_counting(),
        );
    }

    {
        use_effect_with_deps(
            move |navigated: &bool| {
                if *navigated && let Some(navigator) = navigator {
                    console::debug!("welcome countdown finished, opening dashboard");
                    navigator.push(&Route::Dashboard);
                }
                || ()
            },
            countdown.is_navigated(),
        );
    }

    let go_now = {
        let dispatcher = countdown.dispatcher();
        Callback::from(move |_| dispatcher.dispatch(CountdownAction::GoNow))
    };
    let cancel = {
        let dispatcher = countdown.dispatcher();
        Callback::from(move |_| dispatcher.dispatch(CountdownAction::Cancel))
    };

    let redirect = if countdown.is_counting() {
        html! {
            <>
                <p class="text-white/90 mb-4">{"Serás redirigido automáticamente en:"}</p>
                <div class="text-4xl font-bold text-white mb-4 animate-pulse">
                    {countdown.remaining()}
                </div>
                <div class="flex gap-3 justify-center">
                    <Button variant={ButtonVariant::Primary} onclick={go_now}>
                        {"Ir ahora 🚀"}
                    </Button>
                    <Button variant={ButtonVariant::Secondary} onclick={cancel}>
                        {"Cancelar"}
                    </Button>
                </div>
            </>
        }
    } else {
        html! {
            <>
                <p class="text-white/90 mb-4">
                    {"¿Listo para comenzar tu experiencia cinematográfica?"}
                </p>
                <Button variant={ButtonVariant::Primary} size={ButtonSize::Large} class="rounded-full" onclick={go_now}>
                    {"Ingresar a CineDB 🎬"}
                </Button>
            </>
        }
    };

    html! {
        <div class="min-h-screen bg-gradient-to-br from-blue-900 via-purple-900 to-indigo-900 flex items-center justify-center p-4">
            <div class="max-w-4xl mx-auto text-center">
                <div class="mb-8 animate-bounce">
                    <div class="inline-block p-6 bg-white/10 rounded-full">
                        <span class="text-6xl">{"🎬"}</span>
                    </div>
                </div>
                <Title level={TitleLevel::H1} variant={TitleVariant::White} center=true class="mb-4">
                    {"¡Bienvenido a CineDB!"}
                </Title>
                <Title level={TitleLevel::H3} variant={TitleVariant::White} center=true class="mb-8 opacity-90 font-normal">
                    {"Tu base de datos personal de películas"}
                </Title>
                <div class="bg-white/10 rounded-2xl p-8 mb-8 max-w-2xl mx-auto">
                    <p class="text-white/90 text-lg leading-relaxed mb-6">
                        {"Descubre, organiza y califica tus películas favoritas. Lleva un registro completo de tus experiencias cinematográficas."}
                    </p>
                    <div class="grid md:grid-cols-3 gap-4 text-sm">
                        { for FEATURES.iter().map(|(icon, text)| html! {
                            <div class="bg-white/5 rounded-lg p-4">
                                <span class="text-2xl mb-2 block">{*icon}</span>
                                <p class="text-white/80">{*text}</p>
                            </div>
                        }) }
                    </div>
                </div>
                <div class="bg-white/10 rounded-2xl p-6 max-w-md mx-auto">
                    {redirect}
                </div>
                <div class="mt-12 text-white/60 text-sm">
                    <p>{"Desarrollado con ❤️ para los amantes del cine"}</p>
                </div>
            </div>
        </div>
    }
}
