use yew::prelude::*;

use crate::components::layout::{Footer, Header, Section, SectionVariant};

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <div class="min-h-screen bg-midnight flex flex-col">
            <Header />
            <main class="flex-1 py-12 px-4">
                <div class="max-w-3xl mx-auto space-y-8">
                    <Section variant={SectionVariant::Hero}>
                        <div class="flex justify-center mb-6 text-6xl animate-float" aria-hidden="true">
                            { "👻" }
                        </div>
                        <h1 class="font-spooky text-4xl md:text-5xl text-pumpkin tracking-widest animate-text-shimmer">
                            { "About Obscura" }
                        </h1>
                        <p class="font-eerie text-fog text-lg md:text-xl opacity-90 max-w-2xl mx-auto">
                            { "Where tales emerge from the shadows and mysteries linger in the moonlight" }
                        </p>
                    </Section>

                    <Section variant={SectionVariant::Card}>
                        <h2 class="font-spooky text-2xl md:text-3xl text-moonlight tracking-wide mb-4">
                            { "Our Story" }
                        </h2>
                        <div class="font-eerie text-fog space-y-4 text-base md:text-lg leading-relaxed">
                            <p>
                                { "In the depths of the digital night, Obscura was born: a sanctuary for those who find beauty in the eerie, comfort in the uncanny, and wonder in the unknown. Every tale is carefully curated to ignite your imagination and send delightful shivers down your spine." }
                            </p>
                            <p>
                                { "We believe the best stories are those whispered in shadowed corners, the ones that make you glance over your shoulder, the tales that linger like fog long after the final word fades into darkness." }
                            </p>
                            <p>
                                { "Whether you seek spine-tingling horror, atmospheric mysteries, or whimsical encounters with the supernatural, you will find a home here among the shadows." }
                            </p>
                            <p class="border-t border-mist pt-4 mt-6">
                                { "Crafted with passion by one devoted storyteller, Obscura invites you to explore, share, and revel in the magic of the unknown. Join us, if you dare, and let your own stories emerge from the darkness." }
                            </p>
                            <p class="text-moonlight italic opacity-80">
                                { "Best regards from the shadows," }
                                <br />
                                <span class="text-ghost not-italic font-semibold">{ "Tim Barland" }</span>
                                <br />
                                <span class="text-sm text-fog opacity-70">{ "Lead Developer & Curator of the Uncanny" }</span>
                            </p>
                        </div>
                    </Section>
                </div>
            </main>
            <Footer />
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::test_util::render_routed;

    #[tokio::test]
    async fn renders_hero_and_our_story() {
        let out = render_routed(|| html! { <About /> }).await;

        assert!(out.contains("About Obscura"));
        assert!(out.contains("Where tales emerge from the shadows and mysteries linger in the moonlight"));
        assert!(out.contains("Our Story"));
        assert!(out.contains("In the depths of the digital night"));
        assert!(out.contains("spine-tingling horror, atmospheric mysteries, or whimsical encounters"));
    }

    #[tokio::test]
    async fn renders_signature() {
        let out = render_routed(|| html! { <About /> }).await;

        assert!(out.contains("Tim Barland"));
        assert!(out.contains("Lead Developer &amp; Curator of the Uncanny"));
    }

    #[tokio::test]
    async fn uses_sections_inside_main_with_chrome() {
        let out = render_routed(|| html! { <About /> }).await;

        assert!(out.matches("<section").count() >= 2);
        assert!(out.contains("<main"));
        assert!(out.contains("max-w-3xl"));
        assert!(out.contains("<header"));
        assert!(out.contains("<footer"));
    }
}
