//! Task Column Component
//!
//! One ordered list with drag-and-drop support. Every row is a drop slot, and
//! the tail below the last row is the slot for appending.

use leptos::prelude::*;

use crate::board::Column;
use crate::components::TaskCard;
use crate::store::{use_board_store, BoardStateStoreFields};

use leptos_dragdrop::*;

#[component]
pub fn TaskColumn(column: Column, emp_id: i64) -> impl IntoView {
    let store = use_board_store();
    let dnd = expect_context::<DndSignals<Column>>();

    let rows = move || {
        store.lists().get().list(column).iter().cloned().enumerate().collect::<Vec<_>>()
    };
    let count = move || store.lists().get().list(column).len();

    view! {
        <section class="task-column">
            <h2>{column.title()} " (" {count} ")"</h2>

            <div class="task-list">
                <For
                    each=rows
                    // Index is part of the key so moved rows rebind their slot
                    key=|(index, item)| (*index, item.id.clone())
                    children=move |(index, item)| {
                        let slot = Slot::new(column, index);

                        // DnD handlers
                        let on_mousedown = make_on_mousedown(dnd, slot);
                        let on_mouseenter = make_on_slot_mouseenter(dnd, slot);
                        let on_mouseleave = make_on_mouseleave(dnd);

                        let row_class = move || {
                            let mut c = String::from("task-row");
                            if dnd.is_dragging(slot) { c.push_str(" dragging"); }
                            if dnd.is_drop_target(slot) { c.push_str(" drop-target"); }
                            c
                        };

                        view! {
                            <div
                                class=row_class
                                on:mousedown=on_mousedown
                                on:mouseenter=on_mouseenter
                                on:mouseleave=on_mouseleave
                            >
                                <TaskCard item=item emp_id=emp_id />
                            </div>
                        }
                    }
                />

                {move || {
                    let len = count();
                    let slot = Slot::new(column, len);
                    let on_mouseenter = make_on_slot_mouseenter(dnd, slot);
                    let on_mouseleave = make_on_mouseleave(dnd);
                    let tail_class = move || {
                        let mut c = String::from("drop-tail");
                        if !dnd.is_active() { c.push_str(" idle"); }
                        if dnd.is_drop_target(slot) { c.push_str(" active"); }
                        c
                    };
                    view! {
                        <div class=tail_class on:mouseenter=on_mouseenter on:mouseleave=on_mouseleave>
                            {(len == 0).then(|| "No tasks")}
                        </div>
                    }
                }}
            </div>
        </section>
    }
}
