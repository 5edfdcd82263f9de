use crate::filters::{DateBucket, FilterState, SortKey};
use web_sys::{Event, HtmlInputElement};
use yew::prelude::*;

use super::event_value;
use super::video_grid::Layout;

#[derive(Properties, PartialEq)]
pub struct FilterBarProps {
    pub sort_key: SortKey,
    pub on_sort_change: Callback<SortKey>,
    pub filters: FilterState,
    pub on_filter_change: Callback<FilterState>,
    pub layout: Layout,
    pub on_layout_change: Callback<Layout>,
}

#[function_component(FilterBar)]
pub fn filter_bar(props: &FilterBarProps) -> Html {
    let expanded = use_state(|| false);
    let draft = use_state(|| props.filters.clone());

    let on_sort_change = {
        let on_sort_change = props.on_sort_change.clone();
        Callback::from(move |e: Event| {
            if let Some(value) = event_value(&e) {
                on_sort_change.emit(SortKey::from_key(&value));
            }
        })
    };

    let on_bucket_change = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            if let Some(value) = event_value(&e) {
                let mut next = (*draft).clone();
                next.upload_date = DateBucket::from_key(&value);
                draft.set(next);
            }
        })
    };

    // Number inputs all funnel through the same draft-update shape.
    let number_input = |apply: fn(&mut FilterState, u64)| {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let value = e
                .target_unchecked_into::<HtmlInputElement>()
                .value()
                .parse::<u64>()
                .unwrap_or(0);
            let mut next = (*draft).clone();
            apply(&mut next, value);
            draft.set(next);
        })
    };
    let on_min_duration = number_input(|f, v| f.duration_minutes.0 = v as u32);
    let on_max_duration = number_input(|f, v| f.duration_minutes.1 = v as u32);
    let on_min_views = number_input(|f, v| f.min_views = v);
    let on_min_likes = number_input(|f, v| f.min_likes = v);
    let on_min_comments = number_input(|f, v| f.min_comments = v);

    let on_apply = {
        let draft = draft.clone();
        let on_filter_change = props.on_filter_change.clone();
        Callback::from(move |_| on_filter_change.emit((*draft).clone()))
    };

    let on_reset = {
        let draft = draft.clone();
        let on_filter_change = props.on_filter_change.clone();
        Callback::from(move |_| {
            let defaults = FilterState::default();
            draft.set(defaults.clone());
            on_filter_change.emit(defaults);
        })
    };

    let toggle_expanded = {
        let expanded = expanded.clone();
        Callback::from(move |_| expanded.set(!*expanded))
    };

    let layout_button = |layout: Layout, icon: &'static str| {
        let on_layout_change = props.on_layout_change.clone();
        let active = props.layout == layout;
        let classes = if active {
            "px-3 py-1 rounded bg-red-600 text-white"
        } else {
            "px-3 py-1 rounded bg-gray-100 text-gray-700 hover:bg-gray-200"
        };
        html! {
            <button class={classes} onclick={move |_| on_layout_change.emit(layout)}>
                { icon }
            </button>
        }
    };

    html! {
        <div class="bg-white rounded-lg border border-gray-200 p-3 mt-2">
            <div class="flex flex-wrap items-center gap-3">
                <label class="text-sm text-gray-700 flex items-center gap-2">
                    {"Sort by"}
                    <select
                        class="border border-gray-300 rounded p-1 text-sm"
                        value={props.sort_key.key().to_string()}
                        onchange={on_sort_change}
                    >
                        { for SortKey::all().into_iter().map(|key| html! {
                            <option value={key.key()} selected={key == props.sort_key}>
                                { key.display_name() }
                            </option>
                        })}
                    </select>
                </label>
                <button
                    class="text-sm text-gray-700 px-3 py-1 rounded bg-gray-100 hover:bg-gray-200"
                    onclick={toggle_expanded}
                >
                    { if *expanded { "Hide filters" } else { "Filters" } }
                </button>
                <div class="ml-auto flex gap-1">
                    { layout_button(Layout::Grid, "⊞") }
                    { layout_button(Layout::List, "☰") }
                </div>
            </div>
            if *expanded {
                <div class="grid grid-cols-2 md:grid-cols-3 gap-3 mt-3 text-sm">
                    <label class="flex flex-col gap-1">
                        {"Min duration (min)"}
                        <input type="number" min="0"
                            class="border border-gray-300 rounded p-1"
                            value={draft.duration_minutes.0.to_string()}
                            oninput={on_min_duration}
                        />
                    </label>
                    <label class="flex flex-col gap-1">
                        {"Max duration (min)"}
                        <input type="number" min="0"
                            class="border border-gray-300 rounded p-1"
                            value={draft.duration_minutes.1.to_string()}
                            oninput={on_max_duration}
                        />
                    </label>
                    <label class="flex flex-col gap-1">
                        {"Upload date"}
                        <select
                            class="border border-gray-300 rounded p-1"
                            value={draft.upload_date.key().to_string()}
                            onchange={on_bucket_change}
                        >
                            { for DateBucket::all().into_iter().map(|bucket| html! {
                                <option value={bucket.key()} selected={bucket == draft.upload_date}>
                                    { bucket.display_name() }
                                </option>
                            })}
                        </select>
                    </label>
                    <label class="flex flex-col gap-1">
                        {"Min views"}
                        <input type="number" min="0"
                            class="border border-gray-300 rounded p-1"
                            value={draft.min_views.to_string()}
                            oninput={on_min_views}
                        />
                    </label>
                    <label class="flex flex-col gap-1">
                        {"Min likes"}
                        <input type="number" min="0"
                            class="border border-gray-300 rounded p-1"
                            value={draft.min_likes.to_string()}
                            oninput={on_min_likes}
                        />
                    </label>
                    <label class="flex flex-col gap-1">
                        {"Min comments"}
                        <input type="number" min="0"
                            class="border border-gray-300 rounded p-1"
                            value={draft.min_comments.to_string()}
                            oninput={on_min_comments}
                        />
                    </label>
                    <div class="col-span-2 md:col-span-3 flex gap-2">
                        <button
                            class="px-4 py-1 bg-red-600 text-white rounded hover:bg-red-700"
                            onclick={on_apply}
                        >
                            {"Apply"}
                        </button>
                        <button
                            class="px-4 py-1 bg-gray-100 text-gray-700 rounded hover:bg-gray-200"
                            onclick={on_reset}
                        >
                            {"Reset"}
                        </button>
                    </div>
                </div>
            }
        </div>
    }
}
