use criterion::{Criterion, criterion_group, criterion_main};
use domain::{Event, GameMeta, GameRecord, PitchData, RosterEntry, RunnerData, TeamRoster};
use lookup::CategoryDomain;
use search::{IndexBuilder, QueryEngine};
use std::hint::black_box;

fn roster(prefix: &str) -> TeamRoster {
    TeamRoster::new(std::array::from_fn(|i| {
        RosterEntry::new(format!("{prefix}{i}"))
    }))
}

/// Builds a synthetic n-event match with a spread of counts, pitches,
/// and runners.
fn synthetic_record(n: u32) -> GameRecord {
    let meta = GameMeta {
        game_id: 1,
        format_version: "1.9.2".to_string(),
        stadium: "Mario Stadium".to_string(),
        away_player: "VisitorPlayer".to_string(),
        home_player: "HostPlayer".to_string(),
        start_time: None,
        end_time: None,
        innings_selected: 9,
        innings_played: 9,
        away_score: 6,
        home_score: 6,
        quitter: None,
    };

    let events = (0..n)
        .map(|i| {
            let mut builder = Event::builder()
                .event_num(i)
                .inning((i % 9 + 1) as u8)
                .half_inning((i % 2) as u8)
                .count((i % 4) as u8, (i % 3) as u8, (i % 3) as u8)
                .score(i as u32 % 7, (i as u32 + 3) % 7)
                .pitcher_stamina((10 - i % 11) as u8)
                .batter_slot((i % 9) as u8)
                .pitcher_slot(((i + 4) % 9) as u8);

            if i % 3 == 0 {
                builder = builder.pitch(PitchData {
                    pitch_type: ["Curve", "Charge", "ChangeUp"][(i / 3 % 3) as usize].to_string(),
                    strikezone_position: (i as f32 % 2.0) - 1.0,
                    ..PitchData::default()
                });
            }
            if i % 4 == 0 {
                builder = builder.runner_first(RunnerData {
                    initial_base: 1,
                    ..RunnerData::default()
                });
            }
            if i % 7 == 0 {
                builder = builder.outcome("Single").rbi((i % 3) as u8);
            }
            builder.build()
        })
        .collect();

    GameRecord::new(meta, roster("Away"), roster("Home"), events)
}

fn bench_build_200_events(c: &mut Criterion) {
    let record = synthetic_record(200);
    let domain = CategoryDomain::default();

    c.bench_function("search/build_200_events", |b| {
        b.iter(|| IndexBuilder::build(black_box(&record), black_box(&domain)).unwrap());
    });
}

fn bench_build_1000_events(c: &mut Criterion) {
    let record = synthetic_record(1000);
    let domain = CategoryDomain::default();

    c.bench_function("search/build_1000_events", |b| {
        b.iter(|| IndexBuilder::build(black_box(&record), black_box(&domain)).unwrap());
    });
}

fn bench_composite_queries(c: &mut Criterion) {
    let record = synthetic_record(1000);
    let engine = QueryEngine::build(&record, &CategoryDomain::default()).unwrap();

    c.bench_function("search/runner_query_1000_events", |b| {
        b.iter(|| engine.runner_on_base_events(black_box(&[1, -2])).unwrap());
    });

    c.bench_function("search/threshold_query_1000_events", |b| {
        b.iter(|| engine.strike_events(black_box(&[-1])).unwrap());
    });
}

criterion_group!(
    benches,
    bench_build_200_events,
    bench_build_1000_events,
    bench_composite_queries
);
criterion_main!(benches);
