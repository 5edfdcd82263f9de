use crate::models::Video;
use yew::prelude::*;

use super::VideoCard;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    Grid,
    List,
}

#[derive(Properties, PartialEq)]
pub struct VideoGridProps {
    pub videos: Vec<Video>,
    pub layout: Layout,
    pub loading: bool,
    pub has_more: bool,
    pub on_video_click: Callback<String>,
    pub on_load_more: Callback<()>,
}

#[function_component(VideoGrid)]
pub fn video_grid(props: &VideoGridProps) -> Html {
    if props.loading && props.videos.is_empty() {
        return html! {
            <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4 gap-6 mt-4">
                { for (0..8).map(|i| html! {
                    <div key={i} class="animate-pulse">
                        <div class="bg-gray-200 rounded-lg aspect-video"></div>
                        <div class="h-4 bg-gray-200 rounded mt-3 w-3/4"></div>
                        <div class="h-3 bg-gray-200 rounded mt-2 w-1/2"></div>
                    </div>
                })}
            </div>
        };
    }

    if props.videos.is_empty() {
        return html! {
            <p class="text-center text-gray-500 mt-12">
                {"No videos found. Try another search or loosen the filters."}
            </p>
        };
    }

    let container_classes = match props.layout {
        Layout::Grid => "grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4 gap-6 mt-4",
        Layout::List => "flex flex-col gap-4 mt-4",
    };

    html! {
        <div>
            <div class={container_classes}>
                { for props.videos.iter().map(|video| html! {
                    <VideoCard
                        key={video.id.clone()}
                        video={video.clone()}
                        layout={props.layout}
                        on_click={props.on_video_click.clone()}
                    />
                })}
            </div>
            if props.has_more {
                <div class="flex justify-center mt-8 mb-4">
                    <button
                        onclick={let on_load_more = props.on_load_more.clone(); move |_| on_load_more.emit(())}
                        disabled={props.loading}
                        class="px-6 py-2 bg-red-600 text-white rounded-full hover:bg-red-700 disabled:opacity-50"
                    >
                        { if props.loading { "Loading..." } else { "Load more" } }
                    </button>
                </div>
            }
        </div>
    }
}
