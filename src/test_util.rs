//! Host-side rendering helpers for component tests.

use yew::prelude::*;
use yew::ServerRenderer;
use yew_router::history::{AnyHistory, MemoryHistory};
use yew_router::Router;

#[derive(Properties, PartialEq)]
pub(crate) struct RoutedProps {
    pub children: Html,
}

/// Supplies the router context that `Link` needs.
#[function_component(Routed)]
fn routed(props: &RoutedProps) -> Html {
    let history = AnyHistory::from(MemoryHistory::new());

    html! {
        <Router history={history}>
            { props.children.clone() }
        </Router>
    }
}

/// Renders `view` inside a router and returns the markup.
pub(crate) async fn render_routed(view: fn() -> Html) -> String {
    ServerRenderer::<Routed>::with_props(move || RoutedProps { children: view() })
        .hydratable(false)
        .render()
        .await
}
