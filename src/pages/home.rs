use yew::prelude::*;

use crate::components::layout::{Footer, Header, Section, SectionElement, SectionVariant};
use crate::features::stories::StoryList;

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="min-h-screen bg-midnight flex flex-col">
            <Header />
            <main class="flex-1 py-12 px-4">
                <div class="max-w-4xl mx-auto space-y-8">
                    <Section variant={SectionVariant::Hero} aria_label="Introduction">
                        <h1 class="font-spooky text-4xl md:text-5xl text-pumpkin tracking-widest animate-text-shimmer">
                            { "Recent Tales" }
                        </h1>
                        <p class="font-eerie text-fog text-lg opacity-90 max-w-2xl mx-auto">
                            { "Short stories whispered from the dark corners of the night" }
                        </p>
                    </Section>

                    <Section element={SectionElement::Div} test_id="story-feed">
                        <StoryList />
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
    async fn composes_chrome_hero_and_story_list() {
        let out = render_routed(|| html! { <Home /> }).await;

        assert!(out.contains("<header"));
        assert!(out.contains("<footer"));
        assert!(out.contains("Recent Tales"));
        assert!(out.contains(r#"data-testid="story-feed""#));
        assert_eq!(out.matches("<article").count(), 5);
    }

    #[tokio::test]
    async fn hero_comes_before_the_stories() {
        let out = render_routed(|| html! { <Home /> }).await;

        let hero = out.find("Recent Tales").unwrap();
        let first = out.find("The Midnight Garden").unwrap();
        let last = out.find("Ghostlight").unwrap();
        assert!(hero < first && first < last);
    }
}
