use std::collections::BTreeSet;

use scopechart::{
    build_chart, ChartConfig, ChartView, ColorToken, EmissionsByScope, OutputFormat, Scope,
    NO_DATA_MESSAGE,
};

fn positive_scopes(e: &EmissionsByScope) -> BTreeSet<Scope> {
    Scope::ALL
        .iter()
        .copied()
        .filter(|s| e.raw(*s).map(|v| v > 0.0).unwrap_or(false))
        .collect()
}

fn sample_triples() -> Vec<(f64, f64, f64)> {
    let values = [0.0, 1.0, 3.0, 7.5, 100.0, 2_500_000.0];
    let mut out = Vec::new();
    for a in values {
        for b in values {
            for c in values {
                out.push((a, b, c));
            }
        }
    }
    out
}

#[test]
fn segments_are_exactly_the_positive_scopes() {
    for (a, b, c) in sample_triples() {
        let e = EmissionsByScope::new(a, b, c);
        let view = build_chart(&e);
        let expected = positive_scopes(&e);
        let got: BTreeSet<Scope> = view.segments().iter().map(|s| s.segment.scope).collect();
        assert_eq!(got, expected, "input {:?}", (a, b, c));

        if let ChartView::Pie(pie) = &view {
            let legend: BTreeSet<Scope> = pie.legend().iter().map(|l| l.scope).collect();
            assert_eq!(legend, expected);
        } else {
            assert!(expected.is_empty());
        }
    }
}

#[test]
fn proportions_sum_to_one_and_labels_stay_close_to_100() {
    for (a, b, c) in sample_triples() {
        let ChartView::Pie(pie) = build_chart(&EmissionsByScope::new(a, b, c)) else {
            continue;
        };
        let sum: f64 = pie.segments.iter().map(|s| s.proportion).sum();
        assert!((sum - 1.0).abs() < 1e-9, "input {:?} sums to {}", (a, b, c), sum);
        let shown = pie.percent_total() as i64;
        assert!((shown - 100).abs() <= 2, "input {:?} shows {}%", (a, b, c), shown);
    }
}

#[test]
fn scope_colors_never_depend_on_values() {
    for (a, b, c) in sample_triples() {
        for s in build_chart(&EmissionsByScope::new(a, b, c)).segments() {
            let expected = match s.segment.scope {
                Scope::One => ColorToken::Red500,
                Scope::Two => ColorToken::Amber500,
                Scope::Three => ColorToken::Blue500,
            };
            assert_eq!(s.segment.color, expected);
        }
    }
}

#[test]
fn all_zero_renders_placeholder_on_every_surface() {
    let e = EmissionsByScope::new(0.0, 0.0, 0.0);
    assert_eq!(
        build_chart(&e),
        ChartView::Empty {
            message: NO_DATA_MESSAGE
        }
    );

    for format in [OutputFormat::Svg, OutputFormat::Text] {
        let r = scopechart::new_renderer(ChartConfig {
            format,
            ..Default::default()
        })
        .unwrap();
        let out = r.render(&e).unwrap();
        assert_eq!(out.segment_count, 0);
        assert!(out.body.contains(NO_DATA_MESSAGE));
        assert!(!out.body.contains("class=\"slice\""));
    }
}

#[test]
fn scope_two_missing_gives_quarter_and_three_quarters() {
    let view = build_chart(&EmissionsByScope::new(100.0, 0.0, 300.0));
    let s = view.segments();
    assert_eq!(s.len(), 2);
    assert_eq!((s[0].segment.scope, s[0].percent_label), (Scope::One, 25));
    assert_eq!((s[1].segment.scope, s[1].percent_label), (Scope::Three, 75));

    let svg = scopechart::new_renderer(ChartConfig::default())
        .unwrap()
        .render(&EmissionsByScope::new(100.0, 0.0, 300.0))
        .unwrap()
        .body;
    assert!(svg.contains(">Scope 1<"));
    assert!(svg.contains(">Scope 3<"));
    assert!(!svg.contains("Scope 2"));
    assert!(!svg.contains("amber-500"));
}

#[test]
fn equal_halves() {
    let view = build_chart(&EmissionsByScope::new(50.0, 50.0, 0.0));
    let s = view.segments();
    assert_eq!(s.len(), 2);
    assert!(s.iter().all(|x| x.percent_label == 50));
    assert_eq!(s[0].segment.scope, Scope::One);
    assert_eq!(s[1].segment.scope, Scope::Two);
}

#[test]
fn tooltip_is_tonne_scaled_in_svg() {
    let svg = scopechart::new_renderer(ChartConfig::default())
        .unwrap()
        .render(&EmissionsByScope::new(2_500_000.0, 2_500_000.0, 0.0))
        .unwrap()
        .body;
    assert!(svg.contains("<title>Scope 1: 2,500 t CO2e</title>"));
    assert!(!svg.contains("2500000"));
}

#[test]
fn renderer_is_shareable_across_threads() {
    let renderer = std::sync::Arc::new(scopechart::new_renderer(ChartConfig::default()).unwrap());
    let handles: Vec<_> = (1..=4)
        .map(|i| {
            let r = renderer.clone();
            std::thread::spawn(move || {
                r.render(&EmissionsByScope::new(i as f64, 0.0, 10.0))
                    .unwrap()
                    .segment_count
            })
        })
        .collect();
    for h in handles {
        assert_eq!(h.join().unwrap(), 2);
    }
}
