use chrono::NaiveDate;
use yew::prelude::*;

/// Content longer than this many UTF-16 units gets a "read more" button.
pub const READ_MORE_THRESHOLD: usize = 100;

/// Entrance animation offset between consecutive cards.
pub const STAGGER_STEP_MS: u32 = 100;

/// Tag colours, cycled by tag position.
pub const TAG_PALETTE: [&str; 3] = [
    "bg-blood text-ghost",
    "bg-pumpkin text-midnight",
    "bg-mist text-moonlight",
];

/// Length is measured the way the browser measures string length.
pub fn needs_read_more(content: &str) -> bool {
    content.encode_utf16().count() > READ_MORE_THRESHOLD
}

/// `(id - 1) * 100` ms. Ids that are not positive integers start at once.
pub fn stagger_delay_ms(id: &str) -> u32 {
    id.trim()
        .parse::<u32>()
        .map(|n| n.saturating_sub(1).saturating_mul(STAGGER_STEP_MS))
        .unwrap_or(0)
}

/// Formats a `YYYY-MM-DD` date as "Oct 1, 2025".
///
/// The date is parsed as a bare calendar date, so there is no time zone to
/// shift it. Anything unparseable is shown as written.
pub fn format_created_at(created_at: &str) -> String {
    NaiveDate::parse_from_str(created_at.trim(), "%Y-%m-%d")
        .map(|date| date.format("%b %-d, %Y").to_string())
        .unwrap_or_else(|_| created_at.to_string())
}

pub fn tag_class(index: usize) -> &'static str {
    TAG_PALETTE[index % TAG_PALETTE.len()]
}

#[derive(Properties, PartialEq, Clone)]
pub struct StoryCardProps {
    pub id: AttrValue,
    pub title: AttrValue,
    pub content: AttrValue,
    pub author: AttrValue,
    #[prop_or_default]
    pub tags: Vec<AttrValue>,
    pub created_at: AttrValue,
    /// Fired with the story id when "read more" is clicked.
    #[prop_or_default]
    pub on_read_more: Option<Callback<AttrValue>>,
}

#[function_component(StoryCard)]
pub fn story_card(props: &StoryCardProps) -> Html {
    let delay = stagger_delay_ms(&props.id);
    let date = format_created_at(&props.created_at);

    let on_read_more = {
        let id = props.id.clone();
        let cb = props.on_read_more.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(cb) = &cb {
                cb.emit(id.clone());
            }
        })
    };

    html! {
        <article
            class="bg-midnight text-ghost shadow-eerie p-3 sm:p-4 md:p-6 rounded-lg border-l-4 border-pumpkin animate-fade-in hover:shadow-lg hover:-translate-y-0.5 transition-all duration-300"
            style={format!("animation-delay: {delay}ms")}
            data-testid={format!("story-card-{}", props.id)}
            aria-label={format!("Story titled {}", props.title)}
        >
            <h2 class="font-spooky text-lg sm:text-xl md:text-2xl text-pumpkin tracking-widest mb-2 hover:text-orange-400 transition-colors">
                { props.title.clone() }
            </h2>
            <p class="font-eerie text-fog text-xs sm:text-sm mb-3 sm:mb-4 line-clamp-3">
                { props.content.clone() }
            </p>

            <div class="border-t border-moonlight opacity-20 my-3"></div>

            <div class="flex flex-col gap-2 sm:flex-row sm:justify-between sm:items-center text-xs text-moonlight mb-3">
                <span>{ format!("By {}", props.author) }</span>
                <time datetime={props.created_at.clone()}>{ date }</time>
            </div>

            if !props.tags.is_empty() {
                <div class="flex flex-wrap gap-1 sm:gap-2">
                    { for props.tags.iter().enumerate().map(|(i, tag)| html! {
                        <span class={classes!(tag_class(i), "px-2.5", "py-1.5", "rounded-sm", "text-xs", "whitespace-nowrap")}>
                            { format!("#{tag}") }
                        </span>
                    }) }
                </div>
            }

            if needs_read_more(&props.content) {
                <button
                    type="button"
                    class="mt-3 font-eerie text-xs text-pumpkin hover:underline cursor-pointer"
                    aria-label={format!("Read full story: {}", props.title)}
                    onclick={on_read_more}
                >
                    { "Click to read more" }
                </button>
            }
        </article>
    }
}
