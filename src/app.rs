use yew::prelude::*;
use yew_router::history::{AnyHistory, History, MemoryHistory};
use yew_router::prelude::*;

use crate::pages::{About, Home, NotFound};

#[derive(Clone, Debug, PartialEq, Eq, Routable)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/stories")]
    Stories,
    #[at("/about")]
    About,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Maps a matched route to its page.
pub fn switch(route: Route) -> Html {
    match route {
        // TODO: give /stories its own page once tag filtering exists.
        Route::Home | Route::Stories => html! { <Home /> },
        Route::About => html! { <About /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

/// Browser root: routes follow `window.location`.
#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

#[derive(Properties, PartialEq)]
pub struct StaticAppProps {
    pub path: AttrValue,
}

/// Renders the page for `path` from an in-memory history.
///
/// Used where there is no browser location to read, e.g. rendering a page
/// to a string on the host. The history lives as long as the component, so
/// links keep navigating within it.
#[function_component(StaticApp)]
pub fn static_app(props: &StaticAppProps) -> Html {
    let history = use_memo(props.path.clone(), |path| {
        let history = AnyHistory::from(MemoryHistory::new());
        history.push(&**path);
        history
    });

    html! {
        <Router history={(*history).clone()}>
            <Switch<Route> render={switch} />
        </Router>
    }
}
