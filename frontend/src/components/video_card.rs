use crate::models::Video;
use crate::utils::{format_compact, format_date};
use yew::prelude::*;

use super::video_grid::Layout;

#[derive(Properties, PartialEq)]
pub struct VideoCardProps {
    pub video: Video,
    pub layout: Layout,
    pub on_click: Callback<String>,
}

#[function_component(VideoCard)]
pub fn video_card(props: &VideoCardProps) -> Html {
    let video = &props.video;
    let onclick = {
        let on_click = props.on_click.clone();
        let id = video.id.clone();
        Callback::from(move |_| on_click.emit(id.clone()))
    };

    let thumbnail = html! {
        <div class="relative flex-shrink-0">
            <img
                src={video.thumbnail_url.clone()}
                alt={video.title.clone()}
                class="w-full h-full object-cover rounded-lg bg-gray-200"
                loading="lazy"
            />
            <span class="absolute bottom-1 right-1 bg-black bg-opacity-80 text-white text-xs px-1.5 py-0.5 rounded">
                { &video.duration }
            </span>
        </div>
    };

    let details = html! {
        <div class="flex gap-3 mt-2 min-w-0">
            <img
                src={video.channel_avatar.clone()}
                alt={video.channel_name.clone()}
                class="w-9 h-9 rounded-full flex-shrink-0 bg-gray-100"
                loading="lazy"
            />
            <div class="min-w-0">
                <h3 class="text-sm font-semibold text-gray-900 line-clamp-2">{ &video.title }</h3>
                <p class="text-xs text-gray-600 mt-1">{ &video.channel_name }</p>
                <p class="text-xs text-gray-500">
                    { format!(
                        "{} views · 👍 {} · {}",
                        format_compact(video.view_count),
                        format_compact(video.like_count),
                        format_date(&video.published_at)
                    )}
                </p>
                <span class="inline-block mt-1 text-xs px-2 py-0.5 rounded-full bg-gray-100 text-gray-700">
                    { video.niche.display_name() }
                </span>
            </div>
        </div>
    };

    match props.layout {
        Layout::Grid => html! {
            <div class="cursor-pointer" {onclick}>
                { thumbnail }
                { details }
            </div>
        },
        Layout::List => html! {
            <div class="cursor-pointer flex gap-4 items-start" {onclick}>
                <div class="w-48">{ thumbnail }</div>
                <div class="flex-grow min-w-0">{ details }</div>
            </div>
        },
    }
}
