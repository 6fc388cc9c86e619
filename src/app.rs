//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::nav_bar::NavBar;
use crate::pages::{
    buses::BusesPage, dashboard::DashboardPage, forgot_password::ForgotPasswordPage,
    login::LoginPage, register::RegisterPage, reset_password::ResetPasswordPage,
    route_wizard::RouteWizardPage, routes::RoutesPage, schedules::SchedulesPage,
    search::SearchPage, verify_email::VerifyEmailPage,
};
use crate::state::{
    auth::AuthState, buses::BusesState, routes::RoutesState, schedules::SchedulesState,
    search::SearchState, ui::UiState, wizard::WizardState,
};

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
/// Provides all shared state contexts, runs the initial session check, and
/// sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let ui = RwSignal::new(UiState::default());
    let search = RwSignal::new(SearchState::default());
    let buses = RwSignal::new(BusesState::default());
    let routes = RwSignal::new(RoutesState::default());
    let schedules = RwSignal::new(SchedulesState::default());
    let wizard = RwSignal::new(WizardState::default());

    provide_context(auth);
    provide_context(ui);
    provide_context(search);
    provide_context(buses);
    provide_context(routes);
    provide_context(schedules);
    provide_context(wizard);

    // One-time browser init: theme, then the session check.
    let booted = RwSignal::new(false);
    Effect::new(move || {
        if booted.get() {
            return;
        }
        booted.set(true);
        let dark = crate::util::dark_mode::read_preference();
        crate::util::dark_mode::apply(dark);
        ui.update(|u| u.dark_mode = dark);
        #[cfg(feature = "hydrate")]
        crate::state::auth::check_session(auth);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/busline.css"/>
        <Title text="Busline"/>

        <Router>
            <NavBar/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=SearchPage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("forgot-password") view=ForgotPasswordPage/>
                <Route path=StaticSegment("reset-password") view=ResetPasswordPage/>
                <Route path=StaticSegment("verify-email") view=VerifyEmailPage/>
                <Route path=StaticSegment("operator") view=DashboardPage/>
                <Route
                    path=(StaticSegment("operator"), StaticSegment("buses"))
                    view=BusesPage
                />
                <Route
                    path=(StaticSegment("operator"), StaticSegment("routes"))
                    view=RoutesPage
                />
                <Route
                    path=(StaticSegment("operator"), StaticSegment("routes"), StaticSegment("new"))
                    view=RouteWizardPage
                />
                <Route
                    path=(StaticSegment("operator"), StaticSegment("schedules"))
                    view=SchedulesPage
                />
            </Routes>
        </Router>
    }
}
