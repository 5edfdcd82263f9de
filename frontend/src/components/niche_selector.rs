use crate::models::Niche;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct NicheSelectorProps {
    pub selected: Niche,
    pub on_change: Callback<Niche>,
}

#[function_component(NicheSelector)]
pub fn niche_selector(props: &NicheSelectorProps) -> Html {
    html! {
        <div class="flex gap-2 overflow-x-auto py-3">
            { for Niche::all().into_iter().map(|niche| {
                let on_change = props.on_change.clone();
                let active = niche == props.selected;
                let classes = if active {
                    "px-4 py-2 rounded-full text-sm font-medium whitespace-nowrap bg-red-600 text-white"
                } else {
                    "px-4 py-2 rounded-full text-sm font-medium whitespace-nowrap bg-gray-100 text-gray-700 hover:bg-gray-200"
                };
                html! {
                    <button
                        class={classes}
                        onclick={move |_| on_change.emit(niche)}
                    >
                        { niche.display_name() }
                    </button>
                }
            })}
        </div>
    }
}
