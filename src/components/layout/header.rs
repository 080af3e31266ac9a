use yew::prelude::*;
use yew_router::prelude::*;

use super::NAV_LINKS;
use crate::app::Route;

#[function_component(Header)]
pub fn header() -> Html {
    html! {
        <header class="sticky top-0 z-50 bg-linear-to-br from-shadow to-midnight border-b border-mist py-6 px-4 shadow-deep backdrop-blur-sm">
            <div class="max-w-4xl mx-auto flex flex-col gap-4 md:flex-row md:items-center md:justify-between">
                <div class="flex-1">
                    <Link<Route> to={Route::Home} classes={classes!("inline-block", "group")}>
                        <h1 class="font-spooky text-3xl md:text-4xl text-pumpkin tracking-widest animate-text-shimmer group-hover:brightness-125 transition-all duration-200">
                            { "Obscura" }
                        </h1>
                    </Link<Route>>
                    <p class="font-eerie text-fog text-sm md:text-base opacity-80 flex items-center gap-2">
                        <span aria-hidden="true">{ "👻" }</span>
                        { "Tales from the shadows" }
                    </p>
                </div>

                <nav class="flex gap-4" aria-label="Main navigation">
                    { for NAV_LINKS.iter().map(|(route, label)| html! {
                        <Link<Route>
                            to={route.clone()}
                            classes={classes!("font-eerie", "text-fog", "text-sm", "hover:text-pumpkin", "transition-colors", "duration-200")}
                        >
                            { *label }
                        </Link<Route>>
                    }) }
                </nav>
            </div>
        </header>
    }
}
