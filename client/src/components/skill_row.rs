//! One skill's slider and notes editor.
//!
//! The row keeps its own draft of the notes so typing does not write through
//! on every keystroke; a change commits both values via `on_update`.

use leptos::prelude::*;

use crate::net::types::ProgressRecord;

/// Editable progress row. `on_update` receives `(skill, percentage, notes)`.
#[component]
pub fn SkillRow(record: ProgressRecord, on_update: Callback<(String, f64, String)>) -> impl IntoView {
    let skill = record.skill_name.clone();
    let percentage = RwSignal::new(f64::from(record.percentage));
    let notes = RwSignal::new(record.notes.clone());
    let last_updated = record.last_updated.clone();

    let commit = {
        let skill = skill.clone();
        move || on_update.run((skill.clone(), percentage.get_untracked(), notes.get_untracked()))
    };
    let commit_slider = commit.clone();

    view! {
        <div class="skill-row">
            <div class="skill-row__header">
                <span class="skill-row__name">{skill.clone()}</span>
                <span class="skill-row__value">{move || format!("{:.0}%", percentage.get())}</span>
            </div>
            <input
                class="skill-row__slider"
                type="range"
                min="0"
                max="100"
                step="5"
                prop:value=move || percentage.get().to_string()
                on:input=move |ev| {
                    if let Ok(value) = event_target_value(&ev).parse::<f64>() {
                        percentage.set(value);
                    }
                }
                on:change=move |_| commit_slider()
            />
            <textarea
                class="skill-row__notes"
                placeholder="Notes"
                prop:value=move || notes.get()
                on:input=move |ev| notes.set(event_target_value(&ev))
                on:change=move |_| commit()
            ></textarea>
            {last_updated
                .map(|ts| view! { <span class="skill-row__updated">"Updated " {ts}</span> })}
        </div>
    }
}
