use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{SpeechRecognition, SpeechRecognitionEvent};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct VoiceSearchModalProps {
    pub open: bool,
    pub on_close: Callback<()>,
    pub on_result: Callback<String>,
}

/// Dictation dialog backed by the browser's speech recognition engine.
/// Interim transcripts stream into the dialog while the user speaks; the
/// query is only submitted when they confirm it.
#[function_component(VoiceSearchModal)]
pub fn voice_search_modal(props: &VoiceSearchModalProps) -> Html {
    let transcript = use_state(String::new);
    let listening = use_state(|| false);
    let error_message = use_state(|| None::<String>);
    let recognition = use_mut_ref(|| None::<SpeechRecognition>);

    let stop_recognition = {
        let recognition = recognition.clone();
        let listening = listening.clone();
        move || {
            if let Some(rec) = recognition.borrow().as_ref() {
                let _ = rec.stop();
            }
            listening.set(false);
        }
    };

    let on_start = {
        let transcript = transcript.clone();
        let listening = listening.clone();
        let error_message = error_message.clone();
        let recognition = recognition.clone();
        Callback::from(move |_| {
            let rec = match SpeechRecognition::new() {
                Ok(rec) => rec,
                Err(_) => {
                    error_message.set(Some(
                        "Speech recognition is not supported in your browser.".to_string(),
                    ));
                    return;
                }
            };
            rec.set_lang("en-US");
            rec.set_continuous(false);
            rec.set_interim_results(true);

            let onresult = {
                let transcript = transcript.clone();
                let listening = listening.clone();
                Closure::<dyn FnMut(SpeechRecognitionEvent)>::new(
                    move |e: SpeechRecognitionEvent| {
                        let Some(results) = e.results() else {
                            return;
                        };
                        if let Some(result) = results.get(e.result_index()) {
                            if let Some(alternative) = result.get(0) {
                                transcript.set(alternative.transcript());
                            }
                            if result.is_final() {
                                listening.set(false);
                            }
                        }
                    },
                )
            };
            rec.set_onresult(Some(onresult.as_ref().unchecked_ref()));
            onresult.forget();

            let onerror = {
                let error_message = error_message.clone();
                let listening = listening.clone();
                Closure::<dyn FnMut(web_sys::Event)>::new(move |_: web_sys::Event| {
                    error_message.set(Some(
                        "Could not access the microphone. Check browser permissions.".to_string(),
                    ));
                    listening.set(false);
                })
            };
            rec.set_onerror(Some(onerror.as_ref().unchecked_ref()));
            onerror.forget();

            let onend = {
                let listening = listening.clone();
                Closure::<dyn FnMut(web_sys::Event)>::new(move |_: web_sys::Event| {
                    listening.set(false);
                })
            };
            rec.set_onend(Some(onend.as_ref().unchecked_ref()));
            onend.forget();

            transcript.set(String::new());
            error_message.set(None);
            let _ = rec.start();
            *recognition.borrow_mut() = Some(rec);
            listening.set(true);
        })
    };

    let on_stop = {
        let stop_recognition = stop_recognition.clone();
        Callback::from(move |_| stop_recognition())
    };

    let on_cancel = {
        let stop_recognition = stop_recognition.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |_| {
            stop_recognition();
            on_close.emit(());
        })
    };

    let on_submit = {
        let stop_recognition = stop_recognition.clone();
        let transcript = transcript.clone();
        let on_result = props.on_result.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |_| {
            stop_recognition();
            on_result.emit((*transcript).clone());
            on_close.emit(());
        })
    };

    if !props.open {
        return html! {};
    }

    html! {
        <div class="fixed inset-0 bg-black bg-opacity-50 flex items-center justify-center z-20">
            <div class="bg-white rounded-lg shadow-xl p-6 w-full max-w-md mx-4">
                <h2 class="text-lg font-semibold text-gray-800 mb-4">{"Voice search"}</h2>
                <div class="flex flex-col items-center gap-4">
                    <div class={if *listening {
                        "w-16 h-16 rounded-full bg-red-600 text-white flex items-center justify-center text-2xl animate-pulse"
                    } else {
                        "w-16 h-16 rounded-full bg-gray-200 text-gray-600 flex items-center justify-center text-2xl"
                    }}>
                        {"🎤"}
                    </div>
                    <p class="text-sm text-gray-500 min-h-[1.25rem]">
                        { if *listening { "Listening..." } else { "Press start and speak" } }
                    </p>
                    if !transcript.is_empty() {
                        <p class="text-gray-900 text-center">{ (*transcript).clone() }</p>
                    }
                    if let Some(message) = &*error_message {
                        <p class="text-sm text-red-600 text-center">{ message }</p>
                    }
                </div>
                <div class="flex justify-center gap-2 mt-6">
                    { if *listening {
                        html! {
                            <button
                                class="px-4 py-2 bg-gray-100 text-gray-700 rounded hover:bg-gray-200"
                                onclick={on_stop}
                            >
                                {"Stop"}
                            </button>
                        }
                    } else {
                        html! {
                            <button
                                class="px-4 py-2 bg-red-600 text-white rounded hover:bg-red-700"
                                onclick={on_start}
                            >
                                {"Start"}
                            </button>
                        }
                    }}
                    <button
                        class="px-4 py-2 bg-blue-600 text-white rounded hover:bg-blue-700 disabled:opacity-50"
                        disabled={transcript.is_empty()}
                        onclick={on_submit}
                    >
                        {"Search"}
                    </button>
                    <button
                        class="px-4 py-2 bg-gray-100 text-gray-700 rounded hover:bg-gray-200"
                        onclick={on_cancel}
                    >
                        {"Cancel"}
                    </button>
                </div>
            </div>
        </div>
    }
}
