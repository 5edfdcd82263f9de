use crate::api::{fetch_ideas, generate_idea};
use crate::components::BottomNavigation;
use crate::models::ContentIdea;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

fn idea_matches(idea: &ContentIdea, query: &str) -> bool {
    let query = query.to_lowercase();
    idea.title.to_lowercase().contains(&query)
        || idea.description.to_lowercase().contains(&query)
        || idea.tags.iter().any(|tag| tag.to_lowercase().contains(&query))
}

fn clipboard_text(idea: &ContentIdea) -> String {
    let mut text = format!(
        "Title: {}\nDescription: {}\nTags: {}\nDifficulty: {}\nEstimated Time: {}",
        idea.title,
        idea.description,
        idea.tags.join(", "),
        idea.difficulty.display_name(),
        idea.estimated_time,
    );
    if let Some(source) = &idea.inspiration_source {
        text.push_str(&format!("\nInspiration: {source}"));
    }
    text
}

fn copy_to_clipboard(idea: &ContentIdea) {
    if let Some(window) = web_sys::window() {
        let _ = window.navigator().clipboard().write_text(&clipboard_text(idea));
    }
}

#[derive(Properties, PartialEq)]
struct IdeaCardProps {
    idea: ContentIdea,
}

#[function_component(IdeaCard)]
fn idea_card(props: &IdeaCardProps) -> Html {
    let idea = &props.idea;
    let on_copy = {
        let idea = idea.clone();
        Callback::from(move |_| copy_to_clipboard(&idea))
    };

    html! {
        <div class="bg-white rounded-lg border border-gray-200 p-4 flex flex-col gap-3">
            <div class="flex items-start justify-between gap-2">
                <h2 class="text-sm font-semibold text-gray-900">{ &idea.title }</h2>
                <span class={format!("text-xs px-2 py-0.5 rounded-full whitespace-nowrap {}", idea.difficulty.badge_class())}>
                    { idea.difficulty.display_name() }
                </span>
            </div>
            <p class="text-sm text-gray-600">{ &idea.description }</p>
            <div class="flex flex-wrap gap-1">
                { for idea.tags.iter().map(|tag| html! {
                    <span class="text-xs px-2 py-0.5 rounded-full bg-gray-100 text-gray-700">
                        { format!("#{tag}") }
                    </span>
                })}
            </div>
            <p class="text-xs text-gray-500">
                { format!("⏱️ {}", idea.estimated_time) }
                { match &idea.inspiration_source {
                    Some(source) => format!(" · Inspired by: {source}"),
                    None => String::new(),
                }}
            </p>
            if !idea.related_videos.is_empty() {
                <details class="text-xs text-gray-600">
                    <summary class="cursor-pointer">
                        { format!("{} related videos", idea.related_videos.len()) }
                    </summary>
                    <ul class="mt-1 list-disc list-inside">
                        { for idea.related_videos.iter().map(|video| html! {
                            <li class="truncate">{ &video.title }</li>
                        })}
                    </ul>
                </details>
            }
            <button
                class="self-start text-xs px-3 py-1 bg-gray-100 text-gray-700 rounded hover:bg-gray-200"
                onclick={on_copy}
            >
                {"📋 Copy"}
            </button>
        </div>
    }
}

#[function_component(IdeasPage)]
pub fn ideas_page() -> Html {
    let ideas = use_state(Vec::<ContentIdea>::new);
    let loading = use_state(|| true);
    let error_message = use_state(|| None::<String>);
    let topic = use_state(String::new);
    let generating = use_state(|| false);
    let generate_notice = use_state(|| None::<String>);
    let search = use_state(String::new);

    let load = {
        let ideas = ideas.clone();
        let loading = loading.clone();
        let error_message = error_message.clone();
        move || {
            let ideas = ideas.clone();
            let loading = loading.clone();
            let error_message = error_message.clone();
            loading.set(true);
            error_message.set(None);
            spawn_local(async move {
                match fetch_ideas().await {
                    Ok(fetched) => ideas.set(fetched),
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

    let on_topic_input = {
        let topic = topic.clone();
        Callback::from(move |e: InputEvent| {
            topic.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };

    let on_generate = {
        let topic = topic.clone();
        let ideas = ideas.clone();
        let generating = generating.clone();
        let generate_notice = generate_notice.clone();
        Callback::from(move |e: web_sys::SubmitEvent| {
            e.prevent_default();
            let query = topic.trim().to_string();
            if query.is_empty() || *generating {
                return;
            }
            generating.set(true);
            generate_notice.set(None);

            let ideas = ideas.clone();
            let generating = generating.clone();
            let generate_notice = generate_notice.clone();
            spawn_local(async move {
                match generate_idea(&query).await {
                    Ok(Some(idea)) => {
                        let mut next = vec![idea];
                        next.extend((*ideas).clone());
                        ideas.set(next);
                    }
                    Ok(None) => generate_notice.set(Some(
                        "No videos found for this topic. Try a different topic.".to_string(),
                    )),
                    Err(message) => generate_notice.set(Some(message)),
                }
                generating.set(false);
            });
        })
    };

    let on_search_input = {
        let search = search.clone();
        Callback::from(move |e: InputEvent| {
            search.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };

    let visible: Vec<ContentIdea> = if search.trim().is_empty() {
        (*ideas).clone()
    } else {
        ideas
            .iter()
            .filter(|idea| idea_matches(idea, &search))
            .cloned()
            .collect()
    };

    html! {
        <div class="min-h-screen bg-gray-50 pb-20">
            <header class="sticky top-0 bg-white border-b border-gray-200 z-10">
                <div class="max-w-6xl mx-auto px-4 py-3 flex items-center gap-4">
                    <h1 class="text-xl font-bold text-gray-900">{"💡 Content ideas"}</h1>
                    <input
                        type="text"
                        class="ml-auto max-w-xs flex-grow p-2 border border-gray-300 rounded-full text-sm focus:outline-none focus:ring-2 focus:ring-red-500"
                        placeholder="Search ideas..."
                        value={(*search).clone()}
                        oninput={on_search_input}
                    />
                </div>
            </header>
            <main class="max-w-6xl mx-auto px-4 mt-4">
                <form onsubmit={on_generate} class="flex gap-2 mb-6">
                    <input
                        type="text"
                        class="flex-grow p-2 border border-gray-300 rounded-l-full focus:outline-none focus:ring-2 focus:ring-red-500"
                        placeholder="Generate an idea for a topic..."
                        value={(*topic).clone()}
                        oninput={on_topic_input}
                        disabled={*generating}
                    />
                    <button
                        type="submit"
                        class="px-6 py-2 bg-red-600 text-white rounded-r-full hover:bg-red-700 disabled:opacity-50"
                        disabled={*generating}
                    >
                        { if *generating { "Generating..." } else { "Generate" } }
                    </button>
                </form>
                if let Some(notice) = &*generate_notice {
                    <p class="text-sm text-amber-700 bg-amber-50 border border-amber-200 rounded p-3 mb-4">
                        { notice }
                    </p>
                }
                if *loading {
                    <p class="text-center text-gray-500 mt-12">{"Gathering inspiration..."}</p>
                } else if let Some(message) = &*error_message {
                    <div class="mt-12 text-center">
                        <p class="text-red-600 mb-4">{ message }</p>
                        <button
                            class="px-6 py-2 bg-red-600 text-white rounded-full hover:bg-red-700"
                            onclick={on_retry}
                        >
                            {"Retry"}
                        </button>
                    </div>
                } else if visible.is_empty() {
                    <p class="text-center text-gray-500 mt-12">{"No ideas yet."}</p>
                } else {
                    <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4">
                        { for visible.iter().map(|idea| html! {
                            <IdeaCard key={idea.id.clone()} idea={idea.clone()} />
                        })}
                    </div>
                }
            </main>
            <BottomNavigation />
        </div>
    }
}
