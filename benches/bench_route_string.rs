use criterion::{Criterion, criterion_group, criterion_main};
use typeahead::{AssistConfig, InputRouter, SAMPLE_VOCABULARY};

fn bench_route_string(c: &mut Criterion) {
    let text_content = "This is a short sntence about neurla netwoks and machne lerning models for natral langauge procesing.";

    let router = InputRouter::from_vocabulary(&SAMPLE_VOCABULARY, AssistConfig::default())
        .expect("default config is valid");

    // every prefix of the text, as if typed one keystroke at a time
    let lines: Vec<String> = text_content
        .char_indices()
        .map(|(i, c)| text_content[..i + c.len_utf8()].to_string())
        .collect();

    c.bench_function("route_keystrokes", |b| {
        b.iter(|| {
            for line in &lines {
                let _ = router.handle_input(line);
            }
        })
    });

    c.bench_function("route_keystrokes_parallel", |b| {
        b.iter(|| {
            let _ = router.handle_many(&lines);
        })
    });
}

criterion_group!(benches, bench_route_string);
criterion_main!(benches);
