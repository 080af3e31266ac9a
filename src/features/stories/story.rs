use serde::Deserialize;

/// One story as any data source must supply it.
///
/// `createdAt` is a plain `YYYY-MM-DD` calendar date. Unknown fields are
/// rejected rather than carried along.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Story {
    pub id: String,
    pub title: String,
    pub content: String,
    pub author: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub created_at: String,
}

impl Story {
    fn fixture(
        id: &str,
        title: &str,
        content: &str,
        author: &str,
        tags: &[&str],
        created_at: &str,
    ) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            content: content.to_string(),
            author: author.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            created_at: created_at.to_string(),
        }
    }
}

/// The five tales shown on the home page, in display order.
pub fn mock_stories() -> Vec<Story> {
    vec![
        Story::fixture(
            "1",
            "The Midnight Garden",
            "A winding path of moonlit flowers and whispered secrets unfolds before you. Each bloom seems to glow with an inner light, casting strange shadows on the twisted roots beneath. Perfect for a short, eerie vignette about curiosity and the cost of knowing too much.",
            "M. Night",
            &["mystery", "short"],
            "2025-10-01",
        ),
        Story::fixture(
            "2",
            "Blood Moon Rising",
            "Under the red moon the town changed. Small kindnesses turned sharp and bitter, old promises came due with interest, and the streets that once felt familiar became a labyrinth of possibility and dread. Nothing would ever be quite the same again.",
            "A. Nightingale",
            &["horror", "thriller"],
            "2025-09-18",
        ),
        Story::fixture(
            "3",
            "Fog Over the Harbor",
            "Boats moved like ghosts across the water, each carrying a story no one had the courage to tell aloud. The fog grew thicker with each passing hour, until the entire world became a murky, timeless place where nothing felt real and everything felt possible.",
            "C. Harrow",
            &["atmospheric", "maritime"],
            "2025-08-30",
        ),
        Story::fixture(
            "4",
            "Pumpkin Letters",
            "A stack of letters tied with orange twine arrived at the doorstep and everything in the house remembered how to laugh. Inside were secrets from summers long past, confessions written in fading ink, and the kind of joy that only comes from being remembered.",
            "E. Holloway",
            &["whimsy", "seasonal"],
            "2025-10-10",
        ),
        Story::fixture(
            "5",
            "Ghostlight",
            "A stray flare in the alley that only appeared to those who needed to find something they had lost. It never spoke, never beckoned, but somehow it always led you exactly where you needed to go, revealing truths you didn't know you were searching for.",
            "R. Vale",
            &["speculative", "short"],
            "2025-07-21",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn fixture_has_five_stories_with_sequential_ids() {
        let ids: Vec<_> = mock_stories().into_iter().map(|s| s.id).collect();
        assert_eq!(ids, ["1", "2", "3", "4", "5"]);
    }

    #[test]
    fn fixture_ids_are_unique_and_titles_non_empty() {
        let stories = mock_stories();
        let ids: HashSet<_> = stories.iter().map(|s| s.id.as_str()).collect();

        assert_eq!(ids.len(), stories.len());
        assert!(stories.iter().all(|s| !s.title.is_empty()));
    }

    #[test]
    fn deserializes_camel_case_record() {
        let story: Story = serde_json::from_str(
            r#"{
                "id": "7",
                "title": "The Haunted Manor",
                "content": "A spine-chilling tale.",
                "author": "Jane Doe",
                "tags": ["horror", "classic"],
                "createdAt": "2025-10-29"
            }"#,
        )
        .unwrap();

        assert_eq!(story.created_at, "2025-10-29");
        assert_eq!(story.tags, ["horror", "classic"]);
    }

    #[test]
    fn missing_tags_default_to_empty() {
        let story: Story = serde_json::from_str(
            r#"{"id":"1","title":"t","content":"c","author":"a","createdAt":"2025-01-01"}"#,
        )
        .unwrap();

        assert!(story.tags.is_empty());
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = serde_json::from_str::<Story>(
            r#"{"id":"1","title":"t","content":"c","author":"a","createdAt":"2025-01-01","mood":"grim"}"#,
        )
        .unwrap_err();

        assert!(err.to_string().contains("unknown field `mood`"));
    }
}
