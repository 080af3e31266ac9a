use yew::prelude::*;

/// Style preset applied by [`Section`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SectionVariant {
    Hero,
    Card,
    CardBlood,
    #[default]
    Plain,
}

impl SectionVariant {
    pub const fn classes(self) -> &'static str {
        match self {
            Self::Hero => "text-center space-y-4",
            Self::Card => {
                "bg-linear-to-br from-shadow to-midnight border border-mist rounded-lg p-6 md:p-8 shadow-deep"
            }
            Self::CardBlood => {
                "bg-linear-to-br from-midnight to-shadow border border-blood rounded-lg p-6 md:p-8 shadow-deep"
            }
            Self::Plain => "",
        }
    }
}

/// Element emitted around a section's children.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SectionElement {
    #[default]
    Section,
    Div,
    Article,
}

impl SectionElement {
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Section => "section",
            Self::Div => "div",
            Self::Article => "article",
        }
    }
}

/// Variant classes followed by the caller's own, trimmed.
pub fn combined_classes(variant: SectionVariant, custom: &str) -> String {
    format!("{} {}", variant.classes(), custom).trim().to_string()
}

#[derive(Properties, PartialEq)]
pub struct SectionProps {
    #[prop_or_default]
    pub children: Html,
    #[prop_or_default]
    pub variant: SectionVariant,
    #[prop_or_default]
    pub element: SectionElement,
    /// Extra classes appended after the variant's.
    #[prop_or_default]
    pub class: AttrValue,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub aria_label: Option<AttrValue>,
    #[prop_or_default]
    pub test_id: Option<AttrValue>,
}

/// Layout wrapper that keeps the repeated style strings in one place.
#[function_component(Section)]
pub fn section(props: &SectionProps) -> Html {
    let class = combined_classes(props.variant, &props.class);

    html! {
        <@{props.element.tag()}
            id={props.id.clone()}
            class={class}
            aria-label={props.aria_label.clone()}
            data-testid={props.test_id.clone()}
        >
            { props.children.clone() }
        </@>
    }
}
