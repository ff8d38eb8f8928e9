//! Criterion benchmarks for the daily stepper and bed forecast.
//!
//! Benchmarks:
//!   - advance_day vs advance_day_par over beds of 64 and 4096 plants
//!   - forecast_bed over a 64x64 bed
//!
//! Run with: cargo bench --bench day_step

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use garden_sim::model::GrowthStage;
use garden_sim::{
    advance_day, advance_day_par, forecast_bed, Catalog, GridPosition, PlantedInstance, Relationship,
    RelationshipKind, Species,
};

const SPECIES: [&str; 4] = ["tomato", "basil", "fennel", "carrot"];

fn square_bed(side: i32) -> Vec<PlantedInstance> {
    let mut plants = Vec::with_capacity((side * side) as usize);
    for y in 0..side {
        for x in 0..side {
            let species = SPECIES[((x + y) as usize) % SPECIES.len()];
            let id = format!("plant-{}-{}-{}-1", species, x, y);
            let mut plant = PlantedInstance::new(id, species, GridPosition::new(x, y), 1);
            // spread starting hydration so every branch of the stepper runs
            plant.set_levels(((x * 7 + y * 13) % 101) as f64, ((x * 3 + y) % 60) as f64);
            plants.push(plant);
        }
    }
    plants
}

// ---------------------------------------------------------------------------
// Benchmark: one simulated day
// ---------------------------------------------------------------------------

fn bench_advance_day(c: &mut Criterion) {
    let mut group = c.benchmark_group("advance_day");

    for side in [8, 64] {
        let bed = square_bed(side);
        let count = bed.len();

        group.bench_with_input(BenchmarkId::new("sequential", count), &bed, |b, bed| {
            b.iter_batched_ref(
                || bed.clone(),
                |plants| black_box(advance_day(plants, black_box(1))),
                criterion::BatchSize::SmallInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("parallel", count), &bed, |b, bed| {
            b.iter_batched_ref(
                || bed.clone(),
                |plants| black_box(advance_day_par(plants, black_box(1))),
                criterion::BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

// ---------------------------------------------------------------------------
// Benchmark: bed forecast
// ---------------------------------------------------------------------------

fn bench_forecast_bed(c: &mut Criterion) {
    let mut group = c.benchmark_group("forecast_bed");

    let species = SPECIES
        .iter()
        .map(|id| {
            Species::new(*id, *id).with_stages(vec![GrowthStage::new("seedling", 14), GrowthStage::new("fruiting", 40)])
        })
        .collect();
    let catalog = Catalog::new(
        species,
        vec![
            Relationship::new("tomato", "basil", RelationshipKind::Beneficial),
            Relationship::new("tomato", "fennel", RelationshipKind::Antagonistic),
            Relationship::new("carrot", "basil", RelationshipKind::Neutral),
        ],
    );
    let index = catalog.relationship_index();
    let bed = square_bed(64);

    group.bench_function("bed_64x64", |b| {
        b.iter(|| black_box(forecast_bed(black_box(&bed), &catalog, &index)));
    });

    group.finish();
}

// ---------------------------------------------------------------------------
// Register groups
// ---------------------------------------------------------------------------

criterion_group!(benches, bench_advance_day, bench_forecast_bed);
criterion_main!(benches);
