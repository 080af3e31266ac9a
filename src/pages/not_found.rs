use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::components::layout::{Footer, Header, Section, SectionVariant};

/// Shown for any path outside the route table.
#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="min-h-screen bg-midnight flex flex-col">
            <Header />
            <main class="flex-1 py-12 px-4">
                <div class="max-w-3xl mx-auto">
                    <Section variant={SectionVariant::CardBlood} class="text-center space-y-4" aria_label="Page not found">
                        <h1 class="font-spooky text-4xl text-pumpkin tracking-widest">{ "Lost in the Fog" }</h1>
                        <p class="font-eerie text-fog">
                            { "Whatever you were looking for has slipped back into the shadows." }
                        </p>
                        <Link<Route> to={Route::Home} classes={classes!("font-eerie", "text-pumpkin", "hover:underline")}>
                            { "Return home" }
                        </Link<Route>>
                    </Section>
                </div>
            </main>
            <Footer />
        </div>
    }
}
