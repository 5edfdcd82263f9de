use std::rc::Rc;

use crate::api::{fetch_feed, search_videos};
use crate::components::{
    BottomNavigation, FilterBar, Header, Layout, NicheSelector, VideoGrid, VoiceSearchModal,
};
use crate::filters::{filter_videos, sort_videos, FilterState, SortKey};
use crate::models::{Niche, SearchPage, Video};
use crate::request_seq::RequestSeq;
use crate::router::open_watch_page;
use chrono::Utc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

const PAGE_SIZE: u32 = 20;

#[function_component(DiscoverPage)]
pub fn discover_page() -> Html {
    let selected_niche = use_state(|| Niche::Entertainment);
    let search_query = use_state(String::new);
    let videos = use_state(Vec::<Video>::new);
    let next_page_token = use_state(|| None::<String>);
    let sort_key = use_state(|| SortKey::Relevance);
    let filters = use_state(FilterState::default);
    let layout = use_state(|| Layout::Grid);
    let loading = use_state(|| false);
    let error_message = use_state(|| None::<String>);
    let voice_open = use_state(|| false);
    let seq = use_state(RequestSeq::new);

    // Shared fetch path for the initial load, niche/query changes and
    // pagination. A ticket from `seq` guards against a slow older response
    // overwriting a newer one.
    let load = {
        let videos = videos.clone();
        let next_page_token = next_page_token.clone();
        let loading = loading.clone();
        let error_message = error_message.clone();
        let seq = seq.clone();
        Rc::new(move |query: String, niche: Niche, page_token: Option<String>| {
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
                let result = if query.trim().is_empty() && !append {
                    // No query yet: show the cross-niche discovery feed.
                    fetch_feed().await.map(|videos| SearchPage {
                        videos,
                        next_page_token: None,
                    })
                } else {
                    search_videos(
                        &query,
                        niche.display_name(),
                        PAGE_SIZE,
                        page_token.as_deref(),
                    )
                    .await
                };

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
        use_effect_with(
            (*selected_niche, (*search_query).clone()),
            move |(niche, query): &(Niche, String)| {
                load(query.clone(), *niche, None);
                || ()
            },
        );
    }

    let on_search = {
        let search_query = search_query.clone();
        Callback::from(move |query: String| search_query.set(query))
    };

    let on_niche_change = {
        let selected_niche = selected_niche.clone();
        Callback::from(move |niche: Niche| selected_niche.set(niche))
    };

    let on_sort_change = {
        let sort_key = sort_key.clone();
        let videos = videos.clone();
        Callback::from(move |key: SortKey| {
            let mut sorted = (*videos).clone();
            sort_videos(&mut sorted, key);
            videos.set(sorted);
            sort_key.set(key);
        })
    };

    let on_filter_change = {
        let filters = filters.clone();
        let videos = videos.clone();
        Callback::from(move |state: FilterState| {
            videos.set(filter_videos(&videos[..], &state, Utc::now()));
            filters.set(state);
        })
    };

    let on_layout_change = {
        let layout = layout.clone();
        Callback::from(move |next: Layout| layout.set(next))
    };

    let on_load_more = {
        let load = load.clone();
        let search_query = search_query.clone();
        let selected_niche = selected_niche.clone();
        let next_page_token = next_page_token.clone();
        Callback::from(move |_| {
            if let Some(token) = (*next_page_token).clone() {
                load((*search_query).clone(), *selected_niche, Some(token));
            }
        })
    };

    let on_retry = {
        let load = load.clone();
        let search_query = search_query.clone();
        let selected_niche = selected_niche.clone();
        Callback::from(move |_| load((*search_query).clone(), *selected_niche, None))
    };

    let on_video_click = Callback::from(|id: String| open_watch_page(&id));

    let open_voice = {
        let voice_open = voice_open.clone();
        Callback::from(move |_| voice_open.set(true))
    };
    let close_voice = {
        let voice_open = voice_open.clone();
        Callback::from(move |_| voice_open.set(false))
    };
    let on_voice_result = {
        let search_query = search_query.clone();
        Callback::from(move |query: String| search_query.set(query))
    };

    html! {
        <div class="min-h-screen bg-gray-50 pb-20">
            <Header
                query={(*search_query).clone()}
                on_search={on_search}
                on_voice={open_voice}
            />
            <main class="max-w-6xl mx-auto px-4">
                <NicheSelector
                    selected={*selected_niche}
                    on_change={on_niche_change}
                />
                <FilterBar
                    sort_key={*sort_key}
                    on_sort_change={on_sort_change}
                    filters={(*filters).clone()}
                    on_filter_change={on_filter_change}
                    layout={*layout}
                    on_layout_change={on_layout_change}
                />
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
                        layout={*layout}
                        loading={*loading}
                        has_more={next_page_token.is_some()}
                        on_video_click={on_video_click}
                        on_load_more={on_load_more}
                    />
                }
            </main>
            <VoiceSearchModal
                open={*voice_open}
                on_close={close_voice}
                on_result={on_voice_result}
            />
            <BottomNavigation />
        </div>
    }
}
