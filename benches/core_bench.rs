use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use data_mapping_core::app::queries;
use data_mapping_core::{
    build_mapping_view, reduce, Mapping, MappingCommand, MappingNode, MappingState, SlotSpec,
};
use std::hint::black_box;

const SLOT_COUNT: usize = 50;

fn build_synthetic_state(node_count: usize) -> MappingState {
    let nodes = (0..node_count)
        .map(|index| MappingNode::new(format!("n{index}"), format!("Node {index}")))
        .collect();
    let slots = (0..SLOT_COUNT)
        .map(|index| SlotSpec::new(format!("s{index}"), format!("Slot {index}")))
        .collect();

    // Jeder zweite Node ist zugeordnet, reihum auf die Slots verteilt.
    let mapping = Mapping::from_entries((0..SLOT_COUNT).map(|slot| {
        let ids: Vec<String> = (slot * 2..node_count)
            .step_by(SLOT_COUNT * 2)
            .map(|index| format!("n{index}"))
            .collect();
        (format!("s{slot}"), ids)
    }));

    MappingState::from_data(nodes, slots, Some(mapping))
}

fn bench_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("queries");

    for &node_count in &[1_000usize, 10_000usize] {
        let state = build_synthetic_state(node_count);

        group.bench_with_input(
            BenchmarkId::new("free_nodes", node_count),
            &state,
            |b, state| b.iter(|| black_box(queries::free_nodes(black_box(state)).len())),
        );

        group.bench_with_input(
            BenchmarkId::new("build_view", node_count),
            &state,
            |b, state| b.iter(|| black_box(build_mapping_view(black_box(state)).slots.len())),
        );
    }

    group.finish();
}

fn bench_assign(c: &mut Criterion) {
    let mut group = c.benchmark_group("assign_to_slot");

    for &node_count in &[1_000usize, 10_000usize] {
        let state = build_synthetic_state(node_count);
        let batch: Vec<String> = (1..node_count)
            .step_by(node_count / 32)
            .map(|index| format!("n{index}"))
            .collect();

        group.bench_with_input(
            BenchmarkId::new("batch_32", node_count),
            &state,
            |b, state| {
                b.iter(|| {
                    let next = reduce(
                        state.clone(),
                        MappingCommand::AssignToSlot {
                            node_ids: batch.clone(),
                            slot_id: "s0".to_string(),
                        },
                    );
                    black_box(next.mapping.node_ids("s0").len())
                })
            },
        );
    }

    group.finish();
}

criterion_group!(core_benches, bench_queries, bench_assign);
criterion_main!(core_benches);
