//! Sport tab strip with an inline "add sport" field.
//!
//! SYSTEM CONTEXT
//! ==============
//! Tabs come from `ProgressState::sports`. Adding a sport only appends a tab;
//! nothing is sent to the backend until a skill under it is edited.

use leptos::prelude::*;

use crate::state::progress::ProgressState;

#[component]
pub fn SportTabs(progress: RwSignal<ProgressState>) -> impl IntoView {
    let new_sport = RwSignal::new(String::new());

    let submit = Callback::new(move |()| {
        let name = new_sport.get_untracked();
        let mut added = false;
        progress.update(|p| added = p.add_sport(&name));
        if added {
            new_sport.set(String::new());
        }
    });

    view! {
        <div class="sport-tabs" role="tablist">
            {move || {
                let state = progress.get();
                state
                    .sports
                    .iter()
                    .map(|sport| {
                        let is_active = *sport == state.active_sport;
                        let name = sport.clone();
                        view! {
                            <button
                                class="sport-tabs__tab"
                                class:sport-tabs__tab--active=is_active
                                role="tab"
                                aria-selected=is_active.to_string()
                                on:click=move |_| progress.update(|p| p.select_sport(&name))
                            >
                                {sport.clone()}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
            <form
                class="sport-tabs__add"
                on:submit=move |ev: leptos::ev::SubmitEvent| {
                    ev.prevent_default();
                    submit.run(());
                }
            >
                <input
                    class="sport-tabs__input"
                    type="text"
                    placeholder="Add sport"
                    prop:value=move || new_sport.get()
                    on:input=move |ev| new_sport.set(event_target_value(&ev))
                />
                <button class="btn" type="submit">"+"</button>
            </form>
        </div>
    }
}
