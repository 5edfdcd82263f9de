use crate::api::fetch_analytics;
use crate::components::BottomNavigation;
use crate::models::{AnalyticsResponse, Video};
use crate::router::open_watch_page;
use crate::utils::{format_compact, format_number};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

fn summary_card(label: &str, value: String) -> Html {
    html! {
        <div class="bg-white rounded-lg border border-gray-200 p-4">
            <p class="text-xs text-gray-500 uppercase">{ label.to_string() }</p>
            <p class="text-2xl font-bold text-gray-900 mt-1">{ value }</p>
        </div>
    }
}

fn ranked_list(title: &str, videos: &[Video], stat: fn(&Video) -> u64) -> Html {
    html! {
        <div class="bg-white rounded-lg border border-gray-200 p-4">
            <h2 class="text-sm font-semibold text-gray-800 mb-3">{ title.to_string() }</h2>
            <ol class="space-y-3">
                { for videos.iter().enumerate().map(|(rank, video)| {
                    let id = video.id.clone();
                    html! {
                        <li
                            class="flex items-center gap-3 cursor-pointer hover:bg-gray-50 rounded p-1"
                            onclick={move |_| open_watch_page(&id)}
                        >
                            <span class="text-lg font-bold text-gray-400 w-6 text-center">
                                { rank + 1 }
                            </span>
                            <div class="min-w-0">
                                <p class="text-sm text-gray-900 truncate">{ &video.title }</p>
                                <p class="text-xs text-gray-500">
                                    { format!("{} · {}", video.channel_name, format_compact(stat(video))) }
                                </p>
                            </div>
                        </li>
                    }
                })}
            </ol>
        </div>
    }
}

#[function_component(AnalyticsPage)]
pub fn analytics_page() -> Html {
    let data = use_state(|| None::<AnalyticsResponse>);
    let loading = use_state(|| true);
    let error_message = use_state(|| None::<String>);

    let load = {
        let data = data.clone();
        let loading = loading.clone();
        let error_message = error_message.clone();
        move || {
            let data = data.clone();
            let loading = loading.clone();
            let error_message = error_message.clone();
            loading.set(true);
            error_message.set(None);
            spawn_local(async move {
                match fetch_analytics().await {
                    Ok(response) => data.set(Some(response)),
                    Err(message) => error_message.set(Some(message)),
                }
                loading.set(false);
            });
        }
    };

    {
        let load = load.clone();
        use_effect_with((), move |_| {
            load();
            || ()
        });
    }

    let on_retry = Callback::from(move |_| load());

    html! {
        <div class="min-h-screen bg-gray-50 pb-20">
            <header class="sticky top-0 bg-white border-b border-gray-200 z-10">
                <div class="max-w-6xl mx-auto px-4 py-3">
                    <h1 class="text-xl font-bold text-gray-900">{"📊 Analytics"}</h1>
                </div>
            </header>
            <main class="max-w-6xl mx-auto px-4 mt-4">
                if *loading {
                    <p class="text-center text-gray-500 mt-12">{"Crunching the numbers..."}</p>
                } else if let Some(message) = &*error_message {
                    <div class="mt-8 text-center">
                        <p class="text-red-600 mb-4">{ message }</p>
                        <button
                            class="px-6 py-2 bg-red-600 text-white rounded-full hover:bg-red-700"
                            onclick={on_retry}
                        >
                            {"Retry"}
                        </button>
                    </div>
                } else if let Some(analytics) = &*data {
                    <div class="space-y-6">
                        <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                            { summary_card("Avg views", format_number(analytics.summary.avg_views)) }
                            { summary_card("Avg likes", format_number(analytics.summary.avg_likes)) }
                            { summary_card("Avg comments", format_number(analytics.summary.avg_comments)) }
                            { summary_card("Engagement", format!("{:.2}%", analytics.summary.engagement_rate)) }
                        </div>
                        <div class="bg-white rounded-lg border border-gray-200 p-4 overflow-x-auto">
                            <h2 class="text-sm font-semibold text-gray-800 mb-3">{"Per-niche breakdown"}</h2>
                            <table class="w-full text-sm">
                                <thead>
                                    <tr class="text-left text-xs text-gray-500 uppercase">
                                        <th class="py-2">{"Niche"}</th>
                                        <th class="py-2">{"Videos"}</th>
                                        <th class="py-2">{"Avg views"}</th>
                                        <th class="py-2">{"Avg likes"}</th>
                                        <th class="py-2">{"Engagement"}</th>
                                    </tr>
                                </thead>
                                <tbody class="divide-y divide-gray-100">
                                    { for analytics.niches.iter().map(|stats| html! {
                                        <tr>
                                            <td class="py-2 font-medium">{ stats.niche.display_name() }</td>
                                            <td class="py-2">{ stats.video_count }</td>
                                            <td class="py-2">{ format_number(stats.avg_views) }</td>
                                            <td class="py-2">{ format_number(stats.avg_likes) }</td>
                                            <td class="py-2">{ format!("{:.2}%", stats.engagement_rate) }</td>
                                        </tr>
                                    })}
                                </tbody>
                            </table>
                        </div>
                        <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                            { ranked_list("Most viewed", &analytics.top_viewed, |v| v.view_count) }
                            { ranked_list("Most liked", &analytics.most_liked, |v| v.like_count) }
                            { ranked_list("Most commented", &analytics.most_commented, |v| v.comment_count) }
                        </div>
                    </div>
                }
            </main>
            <BottomNavigation />
        </div>
    }
}
