use crate::router::Route;
use yew::prelude::*;
use yew_router::prelude::*;

const TABS: [(Route, &str, &str); 4] = [
    (Route::Discover, "🏠", "Discover"),
    (Route::Trending, "🔥", "Trending"),
    (Route::Analytics, "📊", "Analytics"),
    (Route::Ideas, "💡", "Ideas"),
];

#[function_component(BottomNavigation)]
pub fn bottom_navigation() -> Html {
    let current = use_route::<Route>();

    html! {
        <nav class="fixed bottom-0 left-0 right-0 bg-white border-t border-gray-200 flex justify-around py-2 z-10">
            { for TABS.into_iter().map(|(route, icon, label)| {
                let active = current.as_ref() == Some(&route);
                let classes = if active {
                    "flex flex-col items-center text-xs text-red-600 font-medium"
                } else {
                    "flex flex-col items-center text-xs text-gray-500 hover:text-gray-800"
                };
                html! {
                    <Link<Route> to={route} classes={classes}>
                        <span class="text-xl">{ icon }</span>
                        <span>{ label }</span>
                    </Link<Route>>
                }
            })}
        </nav>
    }
}
