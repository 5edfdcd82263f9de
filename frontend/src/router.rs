use crate::pages::{AnalyticsPage, DiscoverPage, IdeasPage, TrendingPage};
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Discover,
    #[at("/trending")]
    Trending,
    #[at("/analytics")]
    Analytics,
    #[at("/ideas")]
    Ideas,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(routes: Route) -> Html {
    match routes {
        Route::Discover => html! { <DiscoverPage /> },
        Route::Trending => html! { <TrendingPage /> },
        Route::Analytics => html! { <AnalyticsPage /> },
        Route::Ideas => html! { <IdeasPage /> },
        Route::NotFound => html! {
            <div class="min-h-screen flex items-center justify-center">
                <div class="bg-white p-8 rounded-lg shadow-lg text-center">
                    <h1 class="text-2xl font-bold text-gray-800 mb-4">{"404 - Page Not Found"}</h1>
                    <Link<Route> to={Route::Discover} classes="text-blue-600 hover:underline">
                        {"Back to discover"}
                    </Link<Route>>
                </div>
            </div>
        },
    }
}

/// Open the platform's canonical watch page in a new browsing context.
pub fn open_watch_page(video_id: &str) {
    if let Some(window) = web_sys::window() {
        let url = format!("https://www.youtube.com/watch?v={video_id}");
        let _ = window.open_with_url_and_target(&url, "_blank");
    }
}
