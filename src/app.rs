//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::toast_tray::ToastTray;
use crate::pages::home::HomePage;
use crate::state::analysis::AnalysisState;
use crate::state::toast::ToastState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the analysis and toast state contexts and sets up routing. State
/// is page-instance-local: there is no process-wide singleton.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let analysis = RwSignal::new(AnalysisState::default());
    let toasts = RwSignal::new(ToastState::default());

    provide_context(analysis);
    provide_context(toasts);

    view! {
        <Stylesheet id="leptos" href="/pkg/leafscan.css"/>
        <Title text="Potato Disease Detector"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
        <ToastTray/>
    }
}
