//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{
    admin::AdminPage, coach::CoachPage, home::HomePage, messages::MessagesPage, parent::ParentPage,
    progress::ProgressPage,
};
use crate::state::{auth::AuthState, messages::MessagesState, ui::UiState};

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
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let ui = RwSignal::new(UiState::default());
    let messages = RwSignal::new(MessagesState::default());

    provide_context(auth);
    provide_context(ui);
    provide_context(messages);

    // The stored session blob and theme are browser-only; read them after hydration.
    Effect::new(move || {
        auth.set(AuthState::from_user(crate::util::session::load_user()));
        let dark = crate::util::dark_mode::read_preference();
        crate::util::dark_mode::apply(dark);
        ui.update(|u| u.dark_mode = dark);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/academy-portal.css"/>
        <Title text="Academy Portal"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("admin") view=AdminPage/>
                <Route path=StaticSegment("coach") view=CoachPage/>
                <Route path=StaticSegment("parent") view=ParentPage/>
                <Route path=StaticSegment("messages") view=MessagesPage/>
                <Route path=(StaticSegment("progress"), ParamSegment("child_id")) view=ProgressPage/>
            </Routes>
        </Router>
    }
}
