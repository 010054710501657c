use proptest::prelude::*;
use rgb::RGB8;
use tableau_palettes::{color_pal, resolve, shape_pal, ColorRange, ColorVariant,
                       Direction, DiscretePalette, Error, Registry, RGBColor,
                       ShapeVariant, Variant};

fn all_color_palettes() -> Vec<(ColorVariant, &'static str)> {
    let reg = Registry::tableau();
    ColorVariant::ALL.iter()
        .flat_map(|&v| reg.names(v).into_iter().map(move |name| (v, name)))
        .collect()
}

fn shape_variant() -> impl Strategy<Value = ShapeVariant> {
    prop::sample::select(ShapeVariant::ALL.to_vec())
}

fn direction() -> impl Strategy<Value = Direction> {
    prop_oneof![Just(Direction::Forward), Just(Direction::Reverse)]
}

#[test]
fn max_n_is_table_length_everywhere() {
    let reg = Registry::tableau();
    for (v, name) in all_color_palettes() {
        let len = reg.color_values(v, name).unwrap().len();
        assert_eq!(color_pal(name, v, 1).unwrap().max_n(), len, "{name}");
        assert_eq!(color_pal(name, v, -1).unwrap().max_n(), len, "{name}");
        assert_eq!(color_pal(name, v, 1).unwrap().apply(len).unwrap(),
                   reg.color_values(v, name).unwrap());
    }
    for v in ShapeVariant::ALL {
        let pal = shape_pal(v);
        assert_eq!(reg.names(v), [v.name()]);
        assert_eq!(pal.apply(pal.max_n()).unwrap().len(), pal.max_n());
    }
}

proptest! {
    #[test]
    fn apply_returns_a_prefix(
        (v, name) in prop::sample::select(all_color_palettes()),
        dir in direction(),
        m in 0_usize ..= 20,
        n in 0_usize ..= 20,
    ) {
        let pal = color_pal(name, v, dir).unwrap();
        let (m, n) = (m.min(pal.max_n()), n.min(pal.max_n()));
        let (m, n) = (m.min(n), m.max(n));
        let short = pal.apply(m).unwrap();
        let long = pal.apply(n).unwrap();
        prop_assert_eq!(short.len(), m);
        prop_assert_eq!(long.len(), n);
        prop_assert_eq!(&short[..], &long[.. m]);
    }

    #[test]
    fn reverse_takes_from_the_end(
        (v, name) in prop::sample::select(all_color_palettes()),
        n in 0_usize ..= 20,
    ) {
        let fwd = color_pal(name, v, 1).unwrap();
        let rev = color_pal(name, v, -1).unwrap();
        let n = n.min(fwd.max_n());
        let mut all = fwd.apply(fwd.max_n()).unwrap();
        all.reverse();
        prop_assert_eq!(rev.apply(n).unwrap(), all[.. n].to_vec());
    }

    #[test]
    fn shape_apply_is_a_prefix_in_both_directions(
        v in shape_variant(),
        m in 0_usize ..= 10,
        n in 0_usize ..= 10,
    ) {
        let fwd = resolve("shape", v.name(), v.name(), 1).unwrap();
        let rev = resolve("shape", v.name(), v.name(), -1).unwrap();
        let max_n = fwd.max_n();
        prop_assert_eq!(rev.max_n(), max_n);
        let (m, n) = (m.min(max_n), n.min(max_n));
        let (m, n) = (m.min(n), m.max(n));
        let long = fwd.apply(n).unwrap();
        prop_assert_eq!(&fwd.apply(m).unwrap()[..], &long[.. m]);
        let mut all = fwd.apply(max_n).unwrap();
        all.reverse();
        prop_assert_eq!(rev.apply(m).unwrap(), all[.. m].to_vec());
    }

    #[test]
    fn shape_capacity_is_a_hard_limit(
        v in shape_variant(),
        dir in direction(),
        extra in 1_usize .. 100,
    ) {
        let pal = resolve("shape", v.name(), v.name(), dir).unwrap();
        let n = pal.max_n() + extra;
        prop_assert_eq!(pal.apply(n).unwrap_err(),
                        Error::InsufficientPaletteCapacity { max_n: pal.max_n(), n });
    }

    #[test]
    fn capacity_is_a_hard_limit(
        (v, name) in prop::sample::select(all_color_palettes()),
        dir in direction(),
        extra in 1_usize .. 100,
    ) {
        let pal = color_pal(name, v, dir).unwrap();
        let n = pal.max_n() + extra;
        prop_assert_eq!(pal.apply(n).unwrap_err(),
                        Error::InsufficientPaletteCapacity { max_n: pal.max_n(), n });
    }

    #[test]
    fn unknown_names_list_the_variant(
        v in prop::sample::select(ColorVariant::ALL.to_vec()),
        name in "[a-z]{1,12}",
    ) {
        // Palette names are capitalized, so lowercase names never match.
        let reg = Registry::tableau();
        match color_pal(&name, v, 1) {
            Err(Error::NameNotFound { variant, name: got, valid }) => {
                prop_assert_eq!(variant, Variant::Color(v));
                prop_assert_eq!(got, name);
                prop_assert_eq!(valid, reg.names(v));
            }
            other => prop_assert!(false, "unexpected {:?}", other.map(|p| p.name())),
        }
    }

    #[test]
    fn numeric_direction_sign(d in -1000_i32 .. 1000) {
        let expected = if d < 0 { Direction::Reverse } else { Direction::Forward };
        prop_assert_eq!(Direction::from(d), expected);
        prop_assert_eq!(Direction::from(d as f64), expected);
    }

    #[test]
    fn gradient_ends_are_the_palette_ends(
        (v, name) in prop::sample::select(all_color_palettes()),
        dir in direction(),
        t in -0.5_f64 ..= 1.5,
    ) {
        let pal = color_pal(name, v, dir).unwrap();
        let colors = pal.apply(pal.max_n()).unwrap();
        let g = pal.gradient::<RGB8>();
        if t <= 0. {
            prop_assert_eq!(g.rgb(t), colors[0]);
        } else if t >= 1. {
            prop_assert_eq!(g.rgb(t), colors[colors.len() - 1]);
        }
        let c = g.rgb(t);
        prop_assert_eq!(c.to_hex().len(), 7);
    }
}
