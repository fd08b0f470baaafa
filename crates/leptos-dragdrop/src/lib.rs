//! Leptos DragDrop Utilities
//! 
//! Simple drag-and-drop between ordered lists for Leptos using mouse events.
//! Uses movement threshold to distinguish click from drag.
//!
//! A position is a [`Slot`]: a list key plus an index in that list. Rows are
//! slots, and so is the empty tail of each list (`index == len`). On mouseup
//! the source and target slots are resolved into a [`DropMove`].

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// A position in one of the lists
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Slot<L> {
    pub list: L,
    pub index: usize,
}

impl<L> Slot<L> {
    pub fn new(list: L, index: usize) -> Self {
        Self { list, index }
    }
}

/// Outcome of a completed drag
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropMove<L> {
    /// Move within one list
    Reorder { list: L, from: usize, to: usize },
    /// Move from one list into another
    Transfer { from_list: L, to_list: L, from: usize, to: usize },
}

/// Turn a drag from `source` onto `target` into a move.
///
/// Returns `None` when the item was dropped where it started.
pub fn resolve_drop<L: Copy + PartialEq>(source: Slot<L>, target: Slot<L>) -> Option<DropMove<L>> {
    if source.list == target.list {
        if source.index == target.index {
            return None;
        }
        Some(DropMove::Reorder {
            list: source.list,
            from: source.index,
            to: target.index,
        })
    } else {
        Some(DropMove::Transfer {
            from_list: source.list,
            to_list: target.list,
            from: source.index,
            to: target.index,
        })
    }
}

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals<L: Send + Sync + 'static> {
    pub dragging_read: ReadSignal<Option<Slot<L>>>,
    pub dragging_write: WriteSignal<Option<Slot<L>>>,
    pub drop_target_read: ReadSignal<Option<Slot<L>>>,
    pub drop_target_write: WriteSignal<Option<Slot<L>>>,
    pub drag_just_ended_read: ReadSignal<bool>,
    pub drag_just_ended_write: WriteSignal<bool>,
    /// Pending slot (mousedown but not yet dragging)
    pub pending_read: ReadSignal<Option<Slot<L>>>,
    pub pending_write: WriteSignal<Option<Slot<L>>>,
    /// Start position for movement detection
    pub start_x_read: ReadSignal<i32>,
    pub start_x_write: WriteSignal<i32>,
    pub start_y_read: ReadSignal<i32>,
    pub start_y_write: WriteSignal<i32>,
}

/// Movement threshold in pixels to start dragging
const DRAG_THRESHOLD_PX: i32 = 5;

pub fn create_dnd_signals<L>() -> DndSignals<L>
where
    L: Copy + Send + Sync + 'static,
{
    let (dragging_read, dragging_write) = signal(None::<Slot<L>>);
    let (drop_target_read, drop_target_write) = signal(None::<Slot<L>>);
    let (drag_just_ended_read, drag_just_ended_write) = signal(false);
    let (pending_read, pending_write) = signal(None::<Slot<L>>);
    let (start_x_read, start_x_write) = signal(0i32);
    let (start_y_read, start_y_write) = signal(0i32);
    DndSignals {
        dragging_read,
        dragging_write,
        drop_target_read,
        drop_target_write,
        drag_just_ended_read,
        drag_just_ended_write,
        pending_read,
        pending_write,
        start_x_read,
        start_x_write,
        start_y_read,
        start_y_write,
    }
}

impl<L> DndSignals<L>
where
    L: Copy + PartialEq + Send + Sync + 'static,
{
    /// Whether the row at `slot` is being dragged (tracked)
    pub fn is_dragging(&self, slot: Slot<L>) -> bool {
        self.dragging_read.get() == Some(slot)
    }

    /// Whether `slot` is the current drop target (tracked)
    pub fn is_drop_target(&self, slot: Slot<L>) -> bool {
        self.drop_target_read.get() == Some(slot)
    }

    /// Whether any drag is in progress (tracked)
    pub fn is_active(&self) -> bool {
        self.dragging_read.get().is_some()
    }
}

/// End drag operation
pub fn end_drag<L>(dnd: &DndSignals<L>)
where
    L: Copy + Send + Sync + 'static,
{
    dnd.dragging_write.set(None);
    dnd.drop_target_write.set(None);
    dnd.pending_write.set(None);
    dnd.drag_just_ended_write.set(true);
    
    if let Some(win) = web_sys::window() {
        let clear = dnd.drag_just_ended_write;
        let cb = wasm_bindgen::closure::Closure::<dyn FnMut()>::new(move || {
            clear.set(false);
        });
        let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(cb.as_ref().unchecked_ref(), 100);
        cb.forget();
    }
}

/// Create mousedown handler for draggable rows
/// Records pending drag with start position
pub fn make_on_mousedown<L>(dnd: DndSignals<L>, slot: Slot<L>) -> impl Fn(web_sys::MouseEvent) + Copy + 'static
where
    L: Copy + Send + Sync + 'static,
{
    move |ev: web_sys::MouseEvent| {
        if ev.button() == 0 {
            // Ignore if target is input or button
            if let Some(target) = ev.target() {
                if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
                if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
            }
            dnd.pending_write.set(Some(slot));
            dnd.start_x_write.set(ev.client_x());
            dnd.start_y_write.set(ev.client_y());
        }
    }
}

/// Create mousemove handler for document - starts drag if moved enough
pub fn bind_global_mousemove<L>(dnd: DndSignals<L>)
where
    L: Copy + Send + Sync + 'static,
{
    use wasm_bindgen::closure::Closure;
    
    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let pending = dnd.pending_read.get_untracked();
        
        if pending.is_some() && dnd.dragging_read.get_untracked().is_none() {
            let dx = (ev.client_x() - dnd.start_x_read.get_untracked()).abs();
            let dy = (ev.client_y() - dnd.start_y_read.get_untracked()).abs();
            
            if dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX {
                dnd.dragging_write.set(pending);
            }
        }
    });
    
    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
        }
    }
    on_mousemove.forget();
}

/// Create mouseenter handler for a row or list tail
pub fn make_on_slot_mouseenter<L>(dnd: DndSignals<L>, slot: Slot<L>) -> impl Fn(web_sys::MouseEvent) + Copy + 'static
where
    L: Copy + Send + Sync + 'static,
{
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_read.get_untracked().is_some() {
            dnd.drop_target_write.set(Some(slot));
        }
    }
}

/// Create mouseleave handler
pub fn make_on_mouseleave<L>(dnd: DndSignals<L>) -> impl Fn(web_sys::MouseEvent) + Copy + 'static
where
    L: Copy + Send + Sync + 'static,
{
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_read.get_untracked().is_some() {
            dnd.drop_target_write.set(None);
        }
    }
}

/// Bind global mouseup handler for drop detection
///
/// `on_drop` only runs for real moves; a drop back onto the source slot or
/// outside every slot just ends the drag.
pub fn bind_global_mouseup<L, F>(dnd: DndSignals<L>, on_drop: F)
where
    L: Copy + PartialEq + Send + Sync + 'static,
    F: Fn(DropMove<L>) + 'static,
{
    use wasm_bindgen::closure::Closure;
    
    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let source = dnd.dragging_read.get_untracked();
        let target = dnd.drop_target_read.get_untracked();
        
        end_drag(&dnd);
        
        if let (Some(source), Some(target)) = (source, target) {
            if let Some(mv) = resolve_drop(source, target) {
                on_drop(mv);
            }
        }
    });
    
    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
        }
    }
    on_mouseup.forget();
    
    bind_global_mousemove(dnd);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    enum List {
        Left,
        Right,
    }

    #[test]
    fn drop_on_source_is_no_move() {
        let slot = Slot::new(List::Left, 2);
        assert_eq!(resolve_drop(slot, slot), None);
    }

    #[test]
    fn same_list_is_reorder() {
        let mv = resolve_drop(Slot::new(List::Left, 0), Slot::new(List::Left, 3));
        assert_eq!(mv, Some(DropMove::Reorder { list: List::Left, from: 0, to: 3 }));
    }

    #[test]
    fn other_list_is_transfer() {
        let mv = resolve_drop(Slot::new(List::Left, 1), Slot::new(List::Right, 0));
        assert_eq!(
            mv,
            Some(DropMove::Transfer { from_list: List::Left, to_list: List::Right, from: 1, to: 0 })
        );
    }

    #[test]
    fn same_index_in_other_list_is_still_transfer() {
        let mv = resolve_drop(Slot::new(List::Right, 0), Slot::new(List::Left, 0));
        assert!(matches!(mv, Some(DropMove::Transfer { .. })));
    }
}
