//! Leptos DragDrop Utilities
//!
//! Simple drag-to-reorder for Leptos using mouse events.
//! Uses movement threshold along the list axis to distinguish click from drag.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Direction the list is laid out in
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Axis {
    #[default]
    Vertical,
    Horizontal,
}

impl Axis {
    /// Distance moved along this axis
    pub fn travel(&self, dx: i32, dy: i32) -> i32 {
        match self {
            Axis::Vertical => dy.abs(),
            Axis::Horizontal => dx.abs(),
        }
    }
}

/// Drop target types
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropTarget {
    /// Drop on an entry (take its place)
    Item(u32),
    /// Drop on the gap before index `n` (`n == len` is the end)
    Slot(usize),
}

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    pub axis: Axis,
    pub dragging_id_read: ReadSignal<Option<u32>>,
    pub dragging_id_write: WriteSignal<Option<u32>>,
    pub drop_target_read: ReadSignal<Option<DropTarget>>,
    pub drop_target_write: WriteSignal<Option<DropTarget>>,
    /// Pending id (mousedown but not yet dragging)
    pub pending_id_read: ReadSignal<Option<u32>>,
    pub pending_id_write: WriteSignal<Option<u32>>,
    /// Start position for movement detection
    pub start_x_read: ReadSignal<i32>,
    pub start_x_write: WriteSignal<i32>,
    pub start_y_read: ReadSignal<i32>,
    pub start_y_write: WriteSignal<i32>,
}

/// Movement threshold in pixels to start dragging
const DRAG_THRESHOLD_PX: i32 = 5;

pub fn create_dnd_signals(axis: Axis) -> DndSignals {
    let (dragging_id_read, dragging_id_write) = signal(None::<u32>);
    let (drop_target_read, drop_target_write) = signal(None::<DropTarget>);
    let (pending_id_read, pending_id_write) = signal(None::<u32>);
    let (start_x_read, start_x_write) = signal(0i32);
    let (start_y_read, start_y_write) = signal(0i32);
    DndSignals {
        axis,
        dragging_id_read,
        dragging_id_write,
        drop_target_read,
        drop_target_write,
        pending_id_read,
        pending_id_write,
        start_x_read,
        start_x_write,
        start_y_read,
        start_y_write,
    }
}

/// End drag operation
pub fn end_drag(dnd: &DndSignals) {
    dnd.dragging_id_write.set(None);
    dnd.drop_target_write.set(None);
    dnd.pending_id_write.set(None);
}

/// Create mousedown handler for draggable entries
/// Records pending drag with start position
pub fn make_on_mousedown(dnd: DndSignals, id: u32) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() == 0 {
            // Ignore if target is input or button
            if let Some(target) = ev.target() {
                if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
                if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
            }
            dnd.pending_id_write.set(Some(id));
            dnd.start_x_write.set(ev.client_x());
            dnd.start_y_write.set(ev.client_y());
        }
    }
}

/// Bind mousemove on document - starts drag once moved far enough along the axis
pub fn bind_global_mousemove(dnd: DndSignals) {
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let pending = dnd.pending_id_read.get_untracked();

        if pending.is_some() && dnd.dragging_id_read.get_untracked().is_none() {
            let dx = ev.client_x() - dnd.start_x_read.get_untracked();
            let dy = ev.client_y() - dnd.start_y_read.get_untracked();

            if dnd.axis.travel(dx, dy) > DRAG_THRESHOLD_PX {
                dnd.dragging_id_write.set(pending);
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

/// Create mouseenter handler for entries (take their place)
pub fn make_on_item_mouseenter(dnd: DndSignals, id: u32) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if let Some(dragging) = dnd.dragging_id_read.get_untracked() {
            // Don't allow dropping on self
            if dragging != id {
                dnd.drop_target_write.set(Some(DropTarget::Item(id)));
            }
        }
    }
}

/// Create mouseenter handler for gap zones
pub fn make_on_zone_mouseenter(dnd: DndSignals, slot: usize) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_id_read.get_untracked().is_some() {
            dnd.drop_target_write.set(Some(DropTarget::Slot(slot)));
        }
    }
}

/// Create mouseleave handler
pub fn make_on_mouseleave(dnd: DndSignals) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_id_read.get_untracked().is_some() {
            dnd.drop_target_write.set(None);
        }
    }
}

/// Bind global mouseup handler for drop detection
pub fn bind_global_mouseup<F>(dnd: DndSignals, on_drop: F)
where
    F: Fn(u32, DropTarget) + Clone + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let dragging_id = dnd.dragging_id_read.get_untracked();
        let drop_target = dnd.drop_target_read.get_untracked();

        dnd.pending_id_write.set(None);

        // Only a real drag produces a drop; plain clicks fall through
        end_drag(&dnd);
        if let (Some(dragged), Some(target)) = (dragging_id, drop_target) {
            on_drop(dragged, target);
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
        }
    }
    on_mouseup.forget();

    // Also bind global mousemove
    bind_global_mousemove(dnd);
}

/// Compute the full new order after dropping `dragged` on `target`.
///
/// Returns `None` when the drop references an id or slot that is not in
/// `items`. Dropping on an entry moves the dragged one into that entry's
/// position; dropping on a slot inserts at that gap of the original list.
pub fn reorder_by_key<T, K>(items: &[T], key: K, dragged: u32, target: DropTarget) -> Option<Vec<T>>
where
    T: Clone,
    K: Fn(&T) -> u32,
{
    let from = items.iter().position(|it| key(it) == dragged)?;
    let slot = match target {
        DropTarget::Item(id) => {
            let to = items.iter().position(|it| key(it) == id)?;
            if to > from { to + 1 } else { to }
        }
        DropTarget::Slot(slot) if slot <= items.len() => slot,
        DropTarget::Slot(_) => return None,
    };

    let mut result = items.to_vec();
    let moving = result.remove(from);
    let insert_at = if slot > from { slot - 1 } else { slot };
    result.insert(insert_at, moving);
    Some(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(v: &[u32]) -> Vec<u32> {
        v.to_vec()
    }

    #[test]
    fn test_slot_moves_down() {
        let order = reorder_by_key(&[1, 2, 3, 4], |x| *x, 1, DropTarget::Slot(3)).unwrap();
        assert_eq!(order, ids(&[2, 3, 1, 4]));
    }

    #[test]
    fn test_slot_moves_up() {
        let order = reorder_by_key(&[1, 2, 3, 4], |x| *x, 4, DropTarget::Slot(0)).unwrap();
        assert_eq!(order, ids(&[4, 1, 2, 3]));
    }

    #[test]
    fn test_slot_at_end() {
        let order = reorder_by_key(&[1, 2, 3], |x| *x, 1, DropTarget::Slot(3)).unwrap();
        assert_eq!(order, ids(&[2, 3, 1]));
    }

    #[test]
    fn test_drop_on_item_takes_its_place() {
        let down = reorder_by_key(&[1, 2, 3], |x| *x, 1, DropTarget::Item(3)).unwrap();
        assert_eq!(down, ids(&[2, 3, 1]));

        let up = reorder_by_key(&[1, 2, 3], |x| *x, 3, DropTarget::Item(1)).unwrap();
        assert_eq!(up, ids(&[3, 1, 2]));
    }

    #[test]
    fn test_own_gap_is_noop() {
        let order = reorder_by_key(&[1, 2, 3], |x| *x, 2, DropTarget::Slot(2)).unwrap();
        assert_eq!(order, ids(&[1, 2, 3]));
    }

    #[test]
    fn test_unknown_ids_or_slots() {
        assert!(reorder_by_key(&[1, 2], |x| *x, 9, DropTarget::Slot(0)).is_none());
        assert!(reorder_by_key(&[1, 2], |x| *x, 1, DropTarget::Item(9)).is_none());
        assert!(reorder_by_key(&[1, 2], |x| *x, 1, DropTarget::Slot(3)).is_none());
    }

    #[test]
    fn test_end_drag_clears_state() {
        let dnd = create_dnd_signals(Axis::Vertical);
        dnd.pending_id_write.set(Some(2));
        dnd.dragging_id_write.set(Some(2));
        dnd.drop_target_write.set(Some(DropTarget::Slot(0)));

        end_drag(&dnd);

        assert_eq!(dnd.pending_id_read.get_untracked(), None);
        assert_eq!(dnd.dragging_id_read.get_untracked(), None);
        assert_eq!(dnd.drop_target_read.get_untracked(), None);
    }

    #[test]
    fn test_axis_travel() {
        assert_eq!(Axis::Vertical.travel(40, -3), 3);
        assert_eq!(Axis::Horizontal.travel(-7, 40), 7);
    }
}
