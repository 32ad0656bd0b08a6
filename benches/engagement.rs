use criterion::{black_box, criterion_group, criterion_main, Criterion};

use creature_sim::core::EncounterRng;
use creature_sim::creature::{Conjurer, Elf, Weapon};
use creature_sim::engagement::{do_engagement, EngagementRules};
use creature_sim::simulation::Roster;

fn bench_single_engagement(c: &mut Criterion) {
    let mut rng = EncounterRng::new(42);
    c.bench_function("elf_vs_conjurer", |b| {
        b.iter(|| {
            let mut elf = Elf::new("1", "Eowyn", Weapon::Arrow);
            let mut conj = Conjurer::new("2", "Gandalf", Weapon::Magic);
            black_box(do_engagement(&mut elf, &mut conj, &mut rng))
        })
    });
}

fn bench_sample_round(c: &mut Criterion) {
    let mut rng = EncounterRng::new(42);
    let rules = EngagementRules::default();
    c.bench_function("sample_roster_round", |b| {
        b.iter(|| {
            let mut roster = Roster::sample(&mut rng);
            black_box(roster.run_round(&mut rng, &rules))
        })
    });
}

criterion_group!(benches, bench_single_engagement, bench_sample_round);
criterion_main!(benches);
