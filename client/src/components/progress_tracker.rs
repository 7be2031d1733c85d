//! Tabbed skill-progress editor for one child.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders the merged skill list for the active sport from `ProgressState`.
//! Persistence is the page's job: edits are reported through `on_update` and
//! `on_add_skill`.

use leptos::prelude::*;

use crate::components::skill_row::SkillRow;
use crate::components::sport_tabs::SportTabs;
use crate::state::progress::ProgressState;

#[component]
pub fn ProgressTracker(
    progress: RwSignal<ProgressState>,
    on_update: Callback<(String, f64, String)>,
    on_add_skill: Callback<String>,
) -> impl IntoView {
    let new_skill = RwSignal::new(String::new());

    let rows = move || {
        let state = progress.get();
        state
            .skills()
            .into_iter()
            .map(|skill| state.skill_progress(&skill))
            .collect::<Vec<_>>()
    };

    view! {
        <section class="progress-tracker">
            <SportTabs progress=progress/>
            <Show when=move || progress.get().error.is_some()>
                <p class="progress-tracker__error" role="alert">
                    {move || progress.get().error.unwrap_or_default()}
                </p>
            </Show>
            <Show
                when=move || !progress.get().loading
                fallback=move || view! { <p>"Loading progress..."</p> }
            >
                <div class="progress-tracker__skills">
                    // Keyed on contents: a resync must rebuild rows holding stale drafts.
                    <For
                        each=rows
                        key=|r| (r.sport_name.clone(), r.skill_name.clone(), r.percentage, r.notes.clone())
                        children=move |record| view! { <SkillRow record=record on_update=on_update/> }
                    />
                    <Show when=move || progress.get().skills().is_empty()>
                        <p class="progress-tracker__empty">"No skills yet for this sport."</p>
                    </Show>
                </div>
                <form
                    class="progress-tracker__add-skill"
                    on:submit=move |ev: leptos::ev::SubmitEvent| {
                        ev.prevent_default();
                        let name = new_skill.get_untracked();
                        if !name.trim().is_empty() {
                            on_add_skill.run(name);
                            new_skill.set(String::new());
                        }
                    }
                >
                    <input
                        class="progress-tracker__input"
                        type="text"
                        placeholder="Add skill"
                        prop:value=move || new_skill.get()
                        on:input=move |ev| new_skill.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" type="submit">"Add Skill"</button>
                </form>
            </Show>
        </section>
    }
}
