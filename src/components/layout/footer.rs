use chrono::{Datelike, Local};
use yew::prelude::*;
use yew_router::prelude::*;

use super::NAV_LINKS;
use crate::app::Route;

/// Year shown in the copyright line, read from the local clock at render time.
pub fn copyright_year() -> i32 {
    Local::now().year()
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = copyright_year();

    html! {
        <footer class="mt-auto bg-linear-to-br from-shadow to-midnight border-t border-mist py-8 px-4 shadow-deep">
            <div class="max-w-4xl mx-auto">
                <div class="flex flex-col md:flex-row gap-8 mb-6">
                    <div class="flex-1">
                        <Link<Route> to={Route::Home} classes={classes!("inline-block", "group", "mb-3")}>
                            <h2 class="font-spooky text-2xl text-pumpkin tracking-widest group-hover:brightness-125 transition-all duration-200">
                                { "Obscura" }
                            </h2>
                        </Link<Route>>
                        <p class="font-eerie text-fog text-sm opacity-70 max-w-xs">
                            { "Where stories emerge from the shadows and mysteries unfold in the moonlight." }
                        </p>
                    </div>

                    <div class="flex-1">
                        <h3 class="font-spooky text-lg text-moonlight mb-3 tracking-wide">{ "Quick Links" }</h3>
                        <nav class="flex flex-col gap-2" aria-label="Footer navigation">
                            { for NAV_LINKS.iter().map(|(route, label)| html! {
                                <Link<Route>
                                    to={route.clone()}
                                    classes={classes!("font-eerie", "text-fog", "text-sm", "hover:text-pumpkin", "hover:translate-x-1", "transition-all", "duration-200")}
                                >
                                    { *label }
                                </Link<Route>>
                            }) }
                        </nav>
                    </div>

                    <div class="flex-1">
                        <h3 class="font-spooky text-lg text-moonlight mb-3 tracking-wide">{ "Connect" }</h3>
                        <p class="font-eerie text-fog text-sm opacity-70">
                            { "Join us in the shadows and share your own tales of mystery and wonder." }
                        </p>
                    </div>
                </div>

                <div class="border-t border-mist my-6"></div>

                <div class="flex flex-col md:flex-row justify-between items-center gap-4 text-sm">
                    <p class="font-eerie text-fog opacity-60 flex items-center gap-2">
                        <span>{ format!("© {year} Obscura.") }</span>
                        <span class="hidden md:inline">{ "All mysteries reserved." }</span>
                    </p>
                    <p class="font-eerie text-fog opacity-60">
                        { "Crafted with ♥ in the darkness" }
                    </p>
                </div>
            </div>
        </footer>
    }
}
