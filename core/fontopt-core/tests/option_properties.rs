use proptest::prelude::*;

use fontopt_core::config::parse_config;
use fontopt_core::options::FontOptions;
use fontopt_core::tags::AxisTag;
use fontopt_core::typeface::{MetricsKind, StaticTypeface, TypefaceMetrics};
use fontopt_core::variation::AxisSetting;

fn baseline() -> FontOptions {
    FontOptions::from_name_and_style("Inter", "Medium", 13.0)
        .with_fallbacks(vec!["Noto Sans".into(), "Symbola".into()])
        .with_kerning_factor(0.02)
        .with_horizontal_scale(0.9)
        .with_ascent_override(Some(0.8))
        .with_variation(AxisTag::new(b"wght"), 500.0)
}

fn axis_tag() -> impl Strategy<Value = AxisTag> {
    "[a-zA-Z]{4}".prop_map(|s| AxisTag::parse(&s).expect("generated tag"))
}

#[test]
fn pixel_height_clears_point_height_and_back() {
    let opts = baseline().with_point_height(11.0);
    assert_eq!(opts.height(), None);
    assert_eq!(opts.point_height(), Some(11.0));

    let opts = opts.with_height(22.0);
    assert_eq!(opts.height(), Some(22.0));
    assert_eq!(opts.point_height(), None);
}

#[test]
fn mutators_only_touch_their_own_field() {
    let base = baseline();

    let changed = base.clone().with_kerning_factor(0.5);
    assert_eq!(changed.clone().with_kerning_factor(0.02), base);

    let changed = base.clone().with_horizontal_scale(2.0);
    assert_eq!(changed.clone().with_horizontal_scale(0.9), base);

    let changed = base.clone().with_underline(true);
    assert_eq!(changed.clone().with_underline(false), base);

    let changed = base.clone().with_fallback_enabled(false);
    assert_eq!(changed.clone().with_fallback_enabled(true), base);

    let changed = base.clone().with_metrics_kind(MetricsKind::Legacy);
    assert_eq!(changed.clone().with_metrics_kind(MetricsKind::Portable), base);

    let changed = base.clone().with_descent_override(Some(0.2));
    assert_eq!(changed.clone().with_descent_override(None), base);

    let changed = base.clone().with_fallbacks(Vec::new());
    assert_eq!(
        changed.with_fallbacks(vec!["Noto Sans".into(), "Symbola".into()]),
        base
    );

    let changed = base.clone().with_name("X");
    assert_eq!(changed.name(), "X");
    assert_eq!(changed.with_name("Inter"), base);

    let changed = base.clone().with_style("Thin");
    assert_eq!(changed.style(), "Thin");
    assert_eq!(changed.with_style("Medium"), base);

    let changed = base.clone().with_variations(Vec::new());
    assert!(changed.variations().is_empty());
    assert_eq!(
        changed.with_variations(vec![AxisSetting::new(AxisTag::new(b"wght"), 500.0)]),
        base
    );

    let changed = base.clone().with_point_height(9.0);
    assert_eq!(changed.clone().with_height(13.0), base);

    let changed = base.clone().with_height(30.0);
    assert_eq!(changed.with_height(13.0), base);
}

#[test]
fn typeface_round_trip_leaves_other_fields_alone() {
    let base = baseline();
    let face = StaticTypeface::new(
        "Source Serif",
        "Semibold",
        TypefaceMetrics {
            ascent: 0.9,
            descent: 0.3,
        },
    )
    .into_handle();

    let attached = base.clone().with_typeface(Some(face));
    assert!(attached.typeface().is_some());
    assert_eq!(attached.fallbacks(), base.fallbacks());
    assert_eq!(attached.height(), base.height());
    assert_eq!(attached.kerning_factor(), base.kerning_factor());
    assert_eq!(attached.horizontal_scale(), base.horizontal_scale());
    assert_eq!(attached.ascent_override(), base.ascent_override());
    assert_eq!(attached.variations(), base.variations());

    let detached = attached.with_typeface(None);
    assert!(detached.typeface().is_none());
    assert_eq!(detached.with_name("Inter").with_style("Medium"), base);
}

#[test]
fn typeface_names_win_and_stick() {
    let face = StaticTypeface::new(
        "Source Serif",
        "Semibold",
        TypefaceMetrics {
            ascent: 0.9,
            descent: 0.3,
        },
    )
    .into_handle();

    let opts = baseline().with_typeface(Some(face));
    assert_eq!(opts.name(), "Source Serif");
    assert_eq!(opts.style(), "Semibold");

    let renamed = opts.clone().with_name("X");
    assert_eq!(renamed.name(), "Source Serif");
    assert_eq!(renamed, opts);
}

proptest! {
    #[test]
    fn height_setters_report_what_they_set(px in 0.5f32..500.0, pt in 0.5f32..500.0) {
        let opts = FontOptions::new().with_height(px);
        prop_assert_eq!(opts.height(), Some(px));
        prop_assert_eq!(opts.point_height(), None);

        let opts = opts.with_point_height(pt);
        prop_assert_eq!(opts.point_height(), Some(pt));
        prop_assert_eq!(opts.height(), None);
    }

    #[test]
    fn repeated_variation_keeps_one_entry_in_place(
        tags in proptest::collection::vec(axis_tag(), 1..6),
        pick in any::<prop::sample::Index>(),
        v1 in -1000f32..1000.0,
        v2 in -1000f32..1000.0,
    ) {
        let mut opts = FontOptions::new();
        for (i, tag) in tags.iter().enumerate() {
            opts = opts.with_variation(*tag, i as f32);
        }
        let before: Vec<AxisTag> = opts.variations().iter().map(|s| s.tag).collect();

        let tag = tags[pick.index(tags.len())];
        let opts = opts.with_variation(tag, v1).with_variation(tag, v2);

        let after: Vec<AxisTag> = opts.variations().iter().map(|s| s.tag).collect();
        prop_assert_eq!(&after, &before);
        prop_assert_eq!(after.iter().filter(|t| **t == tag).count(), 1);
        prop_assert_eq!(opts.variation(tag), Some(v2));
    }

    #[test]
    fn new_variation_appends(existing in axis_tag(), fresh in axis_tag(), value in -10f32..10.0) {
        prop_assume!(existing != fresh);
        let opts = FontOptions::new()
            .with_variation(existing, 1.0)
            .with_variation(fresh, value);
        prop_assert_eq!(
            opts.variations(),
            &[AxisSetting::new(existing, 1.0), AxisSetting::new(fresh, value)][..]
        );
    }

    #[test]
    fn overrides_present_exactly_when_non_negative(value in -5f32..5.0) {
        let opts = FontOptions::new()
            .with_ascent_override(Some(value))
            .with_descent_override(Some(value));
        let expected = if value >= 0.0 { Some(value) } else { None };
        prop_assert_eq!(opts.ascent_override(), expected);
        prop_assert_eq!(opts.descent_override(), expected);
    }

    #[test]
    fn ordering_is_reflexive_and_path_independent(
        height in 1f32..100.0,
        tracking in -1f32..1.0,
        underline in any::<bool>(),
    ) {
        let chained = FontOptions::new()
            .with_name("Inter")
            .with_style("Bold")
            .with_height(height)
            .with_kerning_factor(tracking)
            .with_underline(underline);
        let direct = FontOptions::from_name_and_style("Inter", "Bold", height)
            .with_underline(underline)
            .with_kerning_factor(tracking);

        prop_assert_eq!(&chained, &chained.clone());
        prop_assert_eq!(&chained, &direct);
        prop_assert!(chained <= direct && chained >= direct);
    }

    #[test]
    fn any_tag_survives_json(raw in any::<u32>(), value in -1000f32..1000.0) {
        let opts = FontOptions::new().with_variation(AxisTag::from_u32(raw), value);
        let json = serde_json::to_string(&opts.to_config()).expect("serialize");
        let back = parse_config(&json).expect("parse");
        prop_assert_eq!(back.variation(AxisTag::from_u32(raw)), Some(value));
        prop_assert_eq!(back, opts);
    }

    #[test]
    fn tag_string_round_trip(raw in "[ -~]{1,4}") {
        let tag = AxisTag::parse(&raw).expect("printable ascii");
        let rendered = tag.to_string();
        prop_assert_eq!(rendered.len(), 4);
        prop_assert!(rendered.starts_with(&raw));
        prop_assert_eq!(AxisTag::from_u32(tag.to_u32()), tag);
    }
}
