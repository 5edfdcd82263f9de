use crate::api::fetch_suggestions;
use crate::request_seq::RequestSeq;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

const MIN_SUGGEST_CHARS: usize = 2;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub query: String,
    pub on_search: Callback<String>,
    pub on_voice: Callback<()>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let current_input = use_state(|| props.query.clone());
    let suggestions = use_state(Vec::<String>::new);
    let seq = use_state(RequestSeq::new);

    // Queries set by the parent (voice transcripts) must show up in the
    // input, not just trigger the search.
    {
        let current_input = current_input.clone();
        use_effect_with(props.query.clone(), move |query: &String| {
            current_input.set(query.clone());
            || ()
        });
    }

    // This Callback handles when the user types into the input field.
    let on_input = {
        let current_input = current_input.clone();
        let suggestions = suggestions.clone();
        let seq = seq.clone();
        Callback::from(move |e: InputEvent| {
            let input_value = e.target_unchecked_into::<HtmlInputElement>().value();
            current_input.set(input_value.clone());

            let ticket = seq.issue();
            if input_value.trim().len() < MIN_SUGGEST_CHARS {
                suggestions.set(Vec::new());
                return;
            }
            let suggestions = suggestions.clone();
            let seq = seq.clone();
            spawn_local(async move {
                let fetched = fetch_suggestions(&input_value).await.unwrap_or_default();
                // A slower response for an older keystroke must not clobber
                // the dropdown for the current one.
                if seq.is_current(ticket) {
                    suggestions.set(fetched);
                }
            });
        })
    };

    // This Callback handles form submission.
    let on_submit = {
        let on_search = props.on_search.clone();
        let current_input = current_input.clone();
        let suggestions = suggestions.clone();
        Callback::from(move |e: web_sys::SubmitEvent| {
            e.prevent_default(); // Prevent default form submission (page reload)
            suggestions.set(Vec::new());
            on_search.emit((*current_input).clone());
        })
    };

    let on_voice = {
        let on_voice = props.on_voice.clone();
        Callback::from(move |_| on_voice.emit(()))
    };

    html! {
        <header class="sticky top-0 bg-white border-b border-gray-200 z-10">
            <div class="max-w-6xl mx-auto px-4 py-3 flex items-center gap-4">
                <h1 class="text-xl font-bold text-red-600">{"Tubio"}</h1>
                <div class="relative flex-grow">
                    <form onsubmit={on_submit} class="flex">
                        <input
                            type="text"
                            class="flex-grow p-2 border border-gray-300 rounded-l-full focus:outline-none focus:ring-2 focus:ring-red-500"
                            placeholder="Search videos..."
                            value={(*current_input).clone()}
                            oninput={on_input}
                        />
                        <button
                            type="submit"
                            class="bg-gray-100 border border-l-0 border-gray-300 px-4 rounded-r-full hover:bg-gray-200"
                        >
                            {"🔍"}
                        </button>
                        <button
                            type="button"
                            onclick={on_voice}
                            class="ml-2 px-3 rounded-full bg-gray-100 hover:bg-gray-200"
                            title="Voice search"
                        >
                            {"🎤"}
                        </button>
                    </form>
                    if !suggestions.is_empty() {
                        <ul class="absolute left-0 right-0 mt-1 bg-white border border-gray-200 rounded-lg shadow-lg overflow-hidden">
                            { for suggestions.iter().map(|suggestion| {
                                let on_search = props.on_search.clone();
                                let current_input = current_input.clone();
                                let suggestions = suggestions.clone();
                                let value = suggestion.clone();
                                html! {
                                    <li
                                        class="px-4 py-2 text-sm hover:bg-gray-100 cursor-pointer"
                                        onclick={move |_| {
                                            current_input.set(value.clone());
                                            suggestions.set(Vec::new());
                                            on_search.emit(value.clone());
                                        }}
                                    >
                                        { suggestion }
                                    </li>
                                }
                            })}
                        </ul>
                    }
                </div>
            </div>
        </header>
    }
}
