//! Story records and the cards that display them.

mod story;
mod story_card;
mod story_list;

pub use story::{mock_stories, Story};
pub use story_card::{
    format_created_at, needs_read_more, stagger_delay_ms, tag_class, StoryCard, StoryCardProps,
    READ_MORE_THRESHOLD, STAGGER_STEP_MS, TAG_PALETTE,
};
pub use story_list::StoryList;
