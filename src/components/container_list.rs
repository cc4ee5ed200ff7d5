//! Container List Component
//!
//! Vertical list of container cards, reorderable by dragging.
//! Uses leptos-dragdrop with drop zones in the gaps between cards.

use leptos::prelude::*;
use leptos_dragdrop::*;

use crate::components::ContainerCard;
use crate::context::use_board;

#[component]
pub fn ContainerList() -> impl IntoView {
    let ctx = use_board();

    let dnd = create_dnd_signals(Axis::Vertical);
    bind_global_mouseup(dnd, move |dragged_id, target| {
        ctx.move_container(dragged_id, target);
    });

    let entries = move || {
        ctx.board.with(|b| b.containers().iter().copied().enumerate().collect::<Vec<_>>())
    };
    let count = move || ctx.board.with(|b| b.containers().len());

    view! {
        <div class="container-list">
            <For
                each=entries
                key=|(slot, container)| (container.id, *slot)
                children=move |(slot, container)| {
                    let id = container.id;
                    let on_mousedown = make_on_mousedown(dnd, id);
                    let on_mouseenter = make_on_item_mouseenter(dnd, id);
                    let on_mouseleave = make_on_mouseleave(dnd);

                    let is_dragging = move || dnd.dragging_id_read.get() == Some(id);
                    let is_drop_target = move || {
                        matches!(dnd.drop_target_read.get(), Some(DropTarget::Item(tid)) if tid == id)
                    };
                    let wrapper_class = move || {
                        let mut c = String::from("container-wrapper");
                        if is_dragging() { c.push_str(" dragging"); }
                        if is_drop_target() { c.push_str(" drop-target"); }
                        c
                    };

                    view! {
                        <DropZone dnd=dnd position=slot />
                        <div
                            class=wrapper_class
                            on:mousedown=on_mousedown
                            on:mouseenter=on_mouseenter
                            on:mouseleave=on_mouseleave
                        >
                            <ContainerCard container=container />
                        </div>
                    }
                }
            />
            // Trailing zone: drop at the end
            {move || view! { <DropZone dnd=dnd position=count() /> }}
        </div>
    }
}

/// Drop zone component - a horizontal gap before the card at `position`
#[component]
pub fn DropZone(
    dnd: DndSignals,
    position: usize,
) -> impl IntoView {
    let on_mouseenter = make_on_zone_mouseenter(dnd, position);
    let on_mouseleave = make_on_mouseleave(dnd);

    let is_active = move || {
        matches!(dnd.drop_target_read.get(), Some(DropTarget::Slot(s)) if s == position)
    };

    // Only show when dragging
    let is_dragging = move || dnd.dragging_id_read.get().is_some();

    let zone_class = move || zone_class(is_dragging(), is_active());

    view! {
        <div
            class=zone_class
            on:mouseenter=on_mouseenter
            on:mouseleave=on_mouseleave
        />
    }
}

fn zone_class(dragging: bool, active: bool) -> String {
    let mut c = String::from("drop-zone");
    if !dragging { c.push_str(" hidden"); }
    if active { c.push_str(" active"); }
    c
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_class() {
        assert_eq!(zone_class(false, false), "drop-zone hidden");
        assert_eq!(zone_class(true, false), "drop-zone");
        assert_eq!(zone_class(true, true), "drop-zone active");
    }
}
