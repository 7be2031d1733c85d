//! Read-only tables over REST collections, with optional row delete.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages own the `ListState` signals and the requests; these components only
//! render rows and report delete clicks by row id.

#[cfg(test)]
#[path = "tables_test.rs"]
mod tables_test;

use leptos::prelude::*;

use crate::net::types::{Child, Coach, Event, Program, Video};
use crate::state::lists::ListState;

/// Status line shared by every table: loading text or the last error.
#[component]
fn TableStatus(loading: Signal<bool>, error: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || loading.get()>
            <p class="table__loading">"Loading..."</p>
        </Show>
        <Show when=move || error.get().is_some()>
            <p class="table__error" role="alert">{move || error.get().unwrap_or_default()}</p>
        </Show>
    }
}

#[component]
fn DeleteButton(id: String, list_deleting: Signal<Option<String>>, on_delete: Callback<String>) -> impl IntoView {
    let busy_id = id.clone();
    view! {
        <button
            class="btn btn--danger btn--small"
            disabled=move || list_deleting.get().as_deref() == Some(busy_id.as_str())
            on:click=move |_| on_delete.run(id.clone())
        >
            "Delete"
        </button>
    }
}

fn or_dash(value: Option<String>) -> String {
    value.filter(|v| !v.is_empty()).unwrap_or_else(|| "—".to_owned())
}

/// Athlete table. `show_progress` adds a link to each child's tracker.
#[component]
pub fn ChildrenTable(
    list: RwSignal<ListState<Child>>,
    #[prop(optional)] on_delete: Option<Callback<String>>,
    #[prop(optional)] show_progress: bool,
) -> impl IntoView {
    let loading = Signal::derive(move || list.get().loading);
    let error = Signal::derive(move || list.get().error);
    let deleting = Signal::derive(move || list.get().deleting);

    view! {
        <TableStatus loading=loading error=error/>
        <table class="data-table">
            <thead>
                <tr>
                    <th>"Name"</th>
                    <th>"Age"</th>
                    <th>"Sport"</th>
                    <th>"Actions"</th>
                </tr>
            </thead>
            <tbody>
                {move || {
                    list.get()
                        .items
                        .into_iter()
                        .map(|child| {
                            let progress_href = format!("/progress/{}", child.id);
                            let id = child.id.clone();
                            view! {
                                <tr>
                                    <td>{child.name}</td>
                                    <td>{or_dash(child.age.map(|a| a.to_string()))}</td>
                                    <td>{or_dash(child.sport)}</td>
                                    <td class="data-table__actions">
                                        {show_progress
                                            .then(|| view! { <a class="btn btn--small" href=progress_href>"Progress"</a> })}
                                        {on_delete
                                            .map(|cb| view! { <DeleteButton id=id list_deleting=deleting on_delete=cb/> })}
                                    </td>
                                </tr>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </tbody>
        </table>
    }
}

#[component]
pub fn CoachesTable(list: RwSignal<ListState<Coach>>, on_delete: Callback<String>) -> impl IntoView {
    let loading = Signal::derive(move || list.get().loading);
    let error = Signal::derive(move || list.get().error);
    let deleting = Signal::derive(move || list.get().deleting);

    view! {
        <TableStatus loading=loading error=error/>
        <table class="data-table">
            <thead>
                <tr>
                    <th>"Name"</th>
                    <th>"Email"</th>
                    <th>"Specialty"</th>
                    <th>"Actions"</th>
                </tr>
            </thead>
            <tbody>
                {move || {
                    list.get()
                        .items
                        .into_iter()
                        .map(|coach| {
                            view! {
                                <tr>
                                    <td>{coach.name}</td>
                                    <td>{or_dash(coach.email)}</td>
                                    <td>{or_dash(coach.specialty)}</td>
                                    <td class="data-table__actions">
                                        <DeleteButton id=coach.id list_deleting=deleting on_delete=on_delete/>
                                    </td>
                                </tr>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </tbody>
        </table>
    }
}

#[component]
pub fn ProgramsTable(list: RwSignal<ListState<Program>>, on_delete: Callback<String>) -> impl IntoView {
    let loading = Signal::derive(move || list.get().loading);
    let error = Signal::derive(move || list.get().error);
    let deleting = Signal::derive(move || list.get().deleting);

    view! {
        <TableStatus loading=loading error=error/>
        <table class="data-table">
            <thead>
                <tr>
                    <th>"Program"</th>
                    <th>"Sport"</th>
                    <th>"Price"</th>
                    <th>"Actions"</th>
                </tr>
            </thead>
            <tbody>
                {move || {
                    list.get()
                        .items
                        .into_iter()
                        .map(|program| {
                            view! {
                                <tr>
                                    <td title=program.description.clone().unwrap_or_default()>{program.name}</td>
                                    <td>{or_dash(program.sport)}</td>
                                    <td>{or_dash(program.price.map(format_price))}</td>
                                    <td class="data-table__actions">
                                        <DeleteButton id=program.id list_deleting=deleting on_delete=on_delete/>
                                    </td>
                                </tr>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </tbody>
        </table>
    }
}

/// Event table; delete is omitted for read-only viewers.
#[component]
pub fn EventsTable(
    list: RwSignal<ListState<Event>>,
    #[prop(optional)] on_delete: Option<Callback<String>>,
) -> impl IntoView {
    let loading = Signal::derive(move || list.get().loading);
    let error = Signal::derive(move || list.get().error);
    let deleting = Signal::derive(move || list.get().deleting);

    view! {
        <TableStatus loading=loading error=error/>
        <table class="data-table">
            <thead>
                <tr>
                    <th>"Event"</th>
                    <th>"Date"</th>
                    <th>"Location"</th>
                    <th>"Actions"</th>
                </tr>
            </thead>
            <tbody>
                {move || {
                    list.get()
                        .items
                        .into_iter()
                        .map(|event| {
                            let id = event.id.clone();
                            view! {
                                <tr>
                                    <td title=event.description.clone().unwrap_or_default()>{event.title}</td>
                                    <td>{format_date(&event.date)}</td>
                                    <td>{or_dash(event.location)}</td>
                                    <td class="data-table__actions">
                                        {on_delete
                                            .map(|cb| view! { <DeleteButton id=id list_deleting=deleting on_delete=cb/> })}
                                    </td>
                                </tr>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </tbody>
        </table>
    }
}

#[component]
pub fn VideosTable(list: RwSignal<ListState<Video>>, on_delete: Callback<String>) -> impl IntoView {
    let loading = Signal::derive(move || list.get().loading);
    let error = Signal::derive(move || list.get().error);
    let deleting = Signal::derive(move || list.get().deleting);

    view! {
        <TableStatus loading=loading error=error/>
        <table class="data-table">
            <thead>
                <tr>
                    <th>"Video"</th>
                    <th>"Uploaded"</th>
                    <th>"Actions"</th>
                </tr>
            </thead>
            <tbody>
                {move || {
                    list.get()
                        .items
                        .into_iter()
                        .map(|video| {
                            view! {
                                <tr>
                                    <td>
                                        <a href=video.url target="_blank" rel="noopener">{video.title}</a>
                                    </td>
                                    <td>{or_dash(video.uploaded_at.as_deref().map(format_date))}</td>
                                    <td class="data-table__actions">
                                        <DeleteButton id=video.id list_deleting=deleting on_delete=on_delete/>
                                    </td>
                                </tr>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </tbody>
        </table>
    }
}

/// Calendar date part of an ISO 8601 timestamp.
pub fn format_date(raw: &str) -> String {
    raw.split('T').next().unwrap_or(raw).to_owned()
}

pub fn format_price(price: f64) -> String {
    format!("${price:.2}")
}
