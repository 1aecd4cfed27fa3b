// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, Criterion};
use iced_gallery::infrastructure::pixabay::parse_response;
use std::hint::black_box;

/// Builds a search response body with `count` hits.
fn response_body(count: usize) -> Vec<u8> {
    let hits: Vec<String> = (0..count)
        .map(|id| {
            format!(
                r#"{{"id":{id},"pageURL":"https://pixabay.com/photos/{id}/","type":"photo","tags":"sky, clouds, blue","previewURL":"https://cdn.pixabay.com/{id}_150.jpg","webformatURL":"https://pixabay.com/get/{id}_640.jpg","largeImageURL":"https://pixabay.com/get/{id}_1280.jpg","imageWidth":4000,"imageHeight":3000,"views":1200,"downloads":800,"likes":42,"user":"someone"}}"#
            )
        })
        .collect();
    format!(
        r#"{{"total":{count},"totalHits":{count},"hits":[{}]}}"#,
        hits.join(",")
    )
    .into_bytes()
}

fn response_parsing_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("response_parsing");

    for count in [12, 200] {
        let body = response_body(count);
        group.bench_function(format!("parse_{count}_hits"), |b| {
            b.iter(|| {
                let _ = black_box(parse_response(black_box(&body)));
            });
        });
    }

    group.finish();
}

criterion_group!(benches, response_parsing_benchmark);
criterion_main!(benches);
