use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

pub mod tour_map;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="India Tour"/>

        <Router>
            <nav class="navbar">
                <div class="container">
                    <span class="navbar-brand">"India Tour"</span>
                </div>
            </nav>

            <main class="container">
                <Routes fallback=|| "Page not found.">
                    <Route path=StaticSegment("") view=tour_map::TourPage/>
                </Routes>
            </main>
        </Router>
    }
}
