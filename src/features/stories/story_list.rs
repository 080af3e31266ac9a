use yew::prelude::*;

use super::story::mock_stories;
use super::story_card::StoryCard;

/// Renders the fixed story collection, one card per record, in order.
#[function_component(StoryList)]
pub fn story_list() -> Html {
    let stories = use_memo((), |_| mock_stories());

    html! {
        <div class="space-y-4 max-w-4xl mx-auto px-4">
            { for stories.iter().map(|story| html! {
                <StoryCard
                    key={story.id.clone()}
                    id={story.id.clone()}
                    title={story.title.clone()}
                    content={story.content.clone()}
                    author={story.author.clone()}
                    tags={story.tags.iter().cloned().map(AttrValue::from).collect::<Vec<_>>()}
                    created_at={story.created_at.clone()}
                />
            }) }
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::features::stories::Story;
    use yew::ServerRenderer;

    async fn render_list() -> String {
        ServerRenderer::<StoryList>::new()
            .hydratable(false)
            .render()
            .await
    }

    #[tokio::test]
    async fn renders_one_card_per_story_in_order() {
        let out = render_list().await;
        let stories = mock_stories();

        assert_eq!(out.matches("<article").count(), stories.len());

        let positions: Vec<usize> = stories
            .iter()
            .map(|s| {
                out.find(&format!(r#"data-testid="story-card-{}""#, s.id))
                    .unwrap_or_else(|| panic!("missing card for story {}", s.id))
            })
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[tokio::test]
    async fn renders_titles_authors_and_tags() {
        let out = render_list().await;

        for Story { title, author, tags, .. } in mock_stories() {
            assert!(out.contains(&title));
            assert!(out.contains(&format!("By {author}")));
            for tag in tags {
                assert!(out.contains(&format!("#{tag}")));
            }
        }
    }

    #[tokio::test]
    async fn every_fixture_card_offers_read_more() {
        let out = render_list().await;

        assert_eq!(out.matches("Click to read more").count(), 5);
    }

    #[tokio::test]
    async fn cards_are_staggered_by_id() {
        let out = render_list().await;

        for delay in [0, 100, 200, 300, 400] {
            assert!(out.contains(&format!("animation-delay: {delay}ms")));
        }
    }

    #[tokio::test]
    async fn container_carries_spacing_classes() {
        let out = render_list().await;

        assert!(out.contains("space-y-4 max-w-4xl mx-auto"));
    }
}
