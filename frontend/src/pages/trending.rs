use std::rc::Rc;

use crate::api::fetch_trending;
use crate::components::{BottomNavigation, Layout, VideoGrid};
use crate::filters::matches_query;
use crate::models::Video;
use crate::request_seq::RequestSeq;
use crate::router::open_watch_page;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[function_component(TrendingPage)]
pub fn trending_page() -> Html {
    let videos = use_state(Vec::<Video>::new);
    let next_page_token = use_state(|| None::<String>);
    let loading = use_state(|| false);
    let error_message = use_state(|| None::<String>);
    let filter_query = use_state(String::new);
    let seq = use_state(RequestSeq::new);

    let load = {
        let videos = videos.clone();
        let next_page_token = next_page_token.clone();
        let loading = loading.clone();
        let error_message = error_message.clone();
        let seq = seq.clone();
        Rc::new(move |page_token: Option<String>| {
            let ticket = seq.issue();
            loading.set(true);
            error_message.set(None);

            let videos = videos.clone();
            let next_page_token = next_page_token.clone();
            let loading = loading.clone();
            let error_message = error_message.clone();
            let seq = seq.clone();
            spawn_local(async move {
                let append = page_token.is_some();
                let result = fetch_trending(page_token.as_deref()).await;
                if !seq.is_current(ticket) {
                    return;
                }
                loading.set(false);
                match result {
                    Ok(page) => {
                        next_page_token.set(page.next_page_token);
                        if append {
                            let mut merged = (*videos).clone();
                            merged.extend(page.videos);
                            videos.set(merged);
                        } else {
                            videos.set(page.videos);
                        }
                    }
                    Err(message) => error_message.set(Some(message)),
                }
            });
        })
    };

    {
        let load = load.clone();
        use_effect_with((), move |_| {
            load(None);
            || ()
        });
    }

    // Search within the already-fetched list. An empty query restores the
    // unfiltered page from the backend.
    let on_filter_submit = {
        let load = load.clone();
        let videos = videos.clone();
        let filter_query = filter_query.clone();
        Callback::from(move |e: web_sys::SubmitEvent| {
            e.prevent_default();
            let query = (*filter_query).clone();
            if query.trim().is_empty() {
                load(None);
            } else {
                let narrowed: Vec<Video> = videos
                    .iter()
                    .filter(|video| matches_query(video, &query))
                    .cloned()
                    .collect();
                videos.set(narrowed);
            }
        })
    };

    let on_filter_input = {
        let filter_query = filter_query.clone();
        Callback::from(move |e: InputEvent| {
            filter_query.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };

    let on_load_more = {
        let load = load.clone();
        let next_page_token = next_page_token.clone();
        Callback::from(move |_| {
            if next_page_token.is_some() {
                load((*next_page_token).clone());
            }
        })
    };

    let on_retry = {
        let load = load.clone();
        Callback::from(move |_| load(None))
    };

    let on_video_click = Callback::from(|id: String| open_watch_page(&id));

    html! {
        <div class="min-h-screen bg-gray-50 pb-20">
            <header class="sticky top-0 bg-white border-b border-gray-200 z-10">
                <div class="max-w-6xl mx-auto px-4 py-3 flex items-center gap-4">
                    <h1 class="text-xl font-bold text-gray-900">{"🔥 Trending"}</h1>
                    <form onsubmit={on_filter_submit} class="flex flex-grow max-w-md ml-auto">
                        <input
                            type="text"
                            class="flex-grow p-2 border border-gray-300 rounded-l-full text-sm focus:outline-none focus:ring-2 focus:ring-red-500"
                            placeholder="Filter trending videos..."
                            value={(*filter_query).clone()}
                            oninput={on_filter_input}
                        />
                        <button
                            type="submit"
                            class="bg-gray-100 border border-l-0 border-gray-300 px-4 rounded-r-full hover:bg-gray-200"
                        >
                            {"🔍"}
                        </button>
                    </form>
                </div>
            </header>
            <main class="max-w-6xl mx-auto px-4">
                if let Some(message) = &*error_message {
                    <div class="mt-8 text-center">
                        <p class="text-red-600 mb-4">{ message }</p>
                        <button
                            class="px-6 py-2 bg-red-600 text-white rounded-full hover:bg-red-700"
                            onclick={on_retry}
                        >
                            {"Retry"}
                        </button>
                    </div>
                } else {
                    <VideoGrid
                        videos={(*videos).clone()}
                        layout={Layout::Grid}
                        loading={*loading}
                        has_more={next_page_token.is_some()}
                        on_video_click={on_video_click}
                        on_load_more={on_load_more}
                    />
                }
            </main>
            <BottomNavigation />
        </div>
    }
}
