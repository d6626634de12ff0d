//! Builder für Mapping-Views aus dem MappingState.

use super::queries;
use crate::app::MappingState;
use crate::core::MappingNode;
use crate::shared::{MappingView, NodeView, PoolView, SlotView};

/// Baut eine MappingView aus dem aktuellen MappingState.
pub fn build(state: &MappingState) -> MappingView {
    let node_view = |node: &MappingNode| NodeView {
        node: node.clone(),
        selected: queries::is_selected(state, &node.id),
    };

    let free_pool = PoolView {
        label: state.options.free_slot_label.clone(),
        nodes: queries::free_nodes(state)
            .into_iter()
            .map(node_view)
            .collect(),
    };

    let slots = state
        .registry
        .visible_slots()
        .map(|slot| {
            let nodes: Vec<NodeView> = queries::nodes_in_slot(state, &slot.id)
                .into_iter()
                .map(node_view)
                .collect();
            SlotView {
                slot: slot.clone(),
                missing_required: slot.required && nodes.is_empty(),
                droppable: queries::can_drop_to_slot(state, slot),
                nodes,
            }
        })
        .collect();

    MappingView {
        free_pool,
        slots,
        selection_len: state.selection.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::build;
    use crate::app::MappingState;
    use crate::core::{Mapping, MappingNode, SlotSpec};

    #[test]
    fn build_marks_selection_and_hides_invisible_slots() {
        let mut state = MappingState::from_data(
            vec![MappingNode::new("n1", "A"), MappingNode::new("n2", "B")],
            vec![
                SlotSpec {
                    required: Some(true),
                    ..SlotSpec::new("s1", "S1")
                },
                SlotSpec {
                    visible: Some(false),
                    ..SlotSpec::new("s2", "S2")
                },
            ],
            Some(Mapping::from_entries([("s2", vec!["n2"])])),
        );
        state.options.free_slot_label = "Frei".to_string();
        state.selection.nodes_mut().push(MappingNode::new("n1", "A"));

        let view = build(&state);

        assert_eq!(view.free_pool.label, "Frei");
        assert_eq!(view.free_pool.nodes.len(), 1);
        assert!(view.free_pool.nodes[0].selected);
        assert_eq!(view.slots.len(), 1);
        assert!(view.slot("s2").is_none());

        let s1 = view.slot("s1").expect("s1 sollte sichtbar sein");
        assert!(s1.missing_required);
        assert!(s1.droppable);
        assert!(!view.is_complete());
        assert_eq!(view.selection_len, 1);
    }
}
