use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use garden_svg_renderer::config::RenderOptions;
use garden_svg_renderer::parser::parse_garden;
use garden_svg_renderer::render::render_garden_svg;
use garden_svg_renderer::theme::Theme;
use std::hint::black_box;

fn dense_snapshot_source(locations: usize, formations_per_location: usize) -> String {
    let mut loc_entries = Vec::with_capacity(locations);
    for i in 0..locations {
        let x = (i % 10) as f64 * 120.0;
        let y = (i / 10) as f64 * 120.0;
        let mut formations = Vec::with_capacity(formations_per_location);
        for j in 0..formations_per_location {
            let fy = y + j as f64 * 30.0;
            formations.push(format!(
                r#"{{"draft": false, "plantSpacing": 25,
                    "shape": {{"segments": [
                        {{"start": {{"x": {x}, "y": {fy}}}}},
                        {{"start": {{"x": {x2}, "y": {fy}}}}},
                        {{"start": {{"x": {x2}, "y": {fy2}}}}},
                        {{"start": {{"x": {x}, "y": {fy2}}}}}
                    ]}},
                    "clusters": [{{"plantCount": 5, "rows": [
                        {{"start": {{"x": {x}, "y": {fy}}}, "end": {{"x": {x2}, "y": {fy}}}}}
                    ]}}],
                    "gardenCrop": {{"title": "Crop {i}-{j}", "cropName": "Crop",
                                    "color": "#6b8e23",
                                    "seedingDate": "2026-03-01",
                                    "harvestingDate": "2026-06-15"}}}}"#,
                x = x,
                x2 = x + 100.0,
                fy = fy,
                fy2 = fy + 25.0,
                i = i,
                j = j,
            ));
        }
        loc_entries.push(format!(
            r#"{{"name": "Bed {i}", "index": {i},
                "shape": {{"segments": [
                    {{"start": {{"x": {x}, "y": {y}}}}},
                    {{"start": {{"x": {x2}, "y": {y}}}}},
                    {{"start": {{"x": {x2}, "y": {y2}}}}},
                    {{"start": {{"x": {x}, "y": {y2}}}}}
                ]}},
                "plantingFormations": {{"nodes": [{formations}]}}}}"#,
            i = i,
            x = x,
            y = y,
            x2 = x + 100.0,
            y2 = y + 100.0,
            formations = formations.join(","),
        ));
    }
    format!(
        r#"{{"gardenPlan": {{"width": 1280, "height": 1280,
            "plantingLocations": {{"nodes": [{}]}}}}}}"#,
        loc_entries.join(",")
    )
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    for (locations, formations) in [(4usize, 2usize), (20, 4), (60, 6)] {
        let name = format!("plan_{}_{}", locations, formations);
        let input = dense_snapshot_source(locations, formations);
        group.bench_with_input(BenchmarkId::from_parameter(name), &input, |b, data| {
            b.iter(|| {
                let garden = parse_garden(black_box(data)).expect("parse failed");
                black_box(garden.garden_plan.is_some());
            });
        });
    }
    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_svg");
    let theme = Theme::garden_default();
    let options = RenderOptions::default();
    for (locations, formations) in [(4usize, 2usize), (20, 4), (60, 6)] {
        let name = format!("plan_{}_{}", locations, formations);
        let garden =
            parse_garden(&dense_snapshot_source(locations, formations)).expect("parse failed");
        group.bench_with_input(BenchmarkId::from_parameter(name), &garden, |b, data| {
            b.iter(|| {
                let svg = render_garden_svg(black_box(data), &theme, &options);
                black_box(svg.len());
            });
        });
    }
    group.finish();
}

fn bench_end_to_end(c: &mut Criterion) {
    let mut group = c.benchmark_group("end_to_end");
    let theme = Theme::garden_default();
    let options = RenderOptions::default();
    for (locations, formations) in [(4usize, 2usize), (20, 4), (60, 6)] {
        let name = format!("plan_{}_{}", locations, formations);
        let input = dense_snapshot_source(locations, formations);
        group.bench_with_input(BenchmarkId::from_parameter(name), &input, |b, data| {
            b.iter(|| {
                let garden = parse_garden(black_box(data)).expect("parse failed");
                let svg = render_garden_svg(&garden, &theme, &options);
                black_box(svg.len());
            });
        });
    }
    group.finish();
}

criterion_group!(
    name = benches;
    config = Criterion::default();
    targets = bench_parse, bench_render, bench_end_to_end
);
criterion_main!(benches);
