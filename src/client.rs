//! Browser view layer for the lobby, compiled under the `client` feature.
//!
//! State ownership mirrors the dispatch model in [`crate::lobby`]: the
//! root component holds the roster, the form holds its own draft, and
//! everything below receives signals and callbacks.

use crate::Position;
use crate::lobby::*;
use leptos::ev::Event;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_meta::Title;
use leptos_meta::provide_meta_context;

/// Root container. Owns the roster and funnels every mutation through
/// [`Roster::apply`].
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    let roster = RwSignal::new(Roster::new());
    let entries = Signal::derive(move || roster.with(|r| r.entries().to_vec()));
    let on_submit = Callback::new(move |draft: Draft| {
        roster.update(|r| r.apply(Message::Submit(draft)));
    });
    let on_remove = Callback::new(move |position: Position| {
        roster.update(|r| r.apply(Message::Remove(position)));
    });
    view! {
        <Title text="Play texas hold'em"/>
        <main class="container">
            <h1>"Play texas hold'em"</h1>
            <p>"What's your name and how many people do you want to play against?"</p>
            <EntryTable entries on_remove/>
            <h3>"Join the game"</h3>
            <EntryForm on_submit/>
        </main>
    }
}

/// Join form. The draft never leaves this component except as the
/// snapshot forwarded on submit, after which the inputs clear.
#[component]
fn EntryForm(on_submit: Callback<Draft>) -> impl IntoView {
    let draft = RwSignal::new(Draft::default());
    let edit = move |field: Field| {
        move |ev: Event| draft.update(|d| d.edit(field, event_target_value(&ev)))
    };
    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let snapshot = draft.get_untracked();
        draft.set(Draft::default());
        on_submit.run(snapshot);
    };
    view! {
        <form on:submit=submit>
            <label>"Name"</label>
            <input
                type="text"
                prop:value=move || draft.with(|d| d.name.clone())
                on:input=edit(Field::Name)
            />
            <label>"Number of opponents"</label>
            <input
                type="text"
                prop:value=move || draft.with(|d| d.opponents.clone())
                on:input=edit(Field::Opponents)
            />
            <button type="submit">"Play"</button>
        </form>
    }
}

/// Participant list. Rows are addressed by their current position, so
/// the delete control always reports the index the roster sees.
#[component]
fn EntryTable(entries: Signal<Vec<Entry>>, on_remove: Callback<Position>) -> impl IntoView {
    view! {
        <table>
            <thead>
                <tr>
                    <th>"Name"</th>
                    <th>"Opponents"</th>
                    <th></th>
                </tr>
            </thead>
            <tbody>
                {move || {
                    entries
                        .get()
                        .into_iter()
                        .enumerate()
                        .map(|(position, entry)| {
                            view! {
                                <tr>
                                    <td>{entry.name}</td>
                                    <td>{entry.opponents}</td>
                                    <td>
                                        <button on:click=move |_| on_remove.run(position)>
                                            "Delete"
                                        </button>
                                    </td>
                                </tr>
                            }
                        })
                        .collect_view()
                }}
            </tbody>
        </table>
    }
}
