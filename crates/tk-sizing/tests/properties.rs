use proptest::prelude::*;
use tk_core::units::{m, to_m, to_m3};
use tk_core::{Tolerances, nearly_equal};
use tk_sizing::constants::{SERIES_HEIGHT_FACTORS, STANDARD_PLATE_THICKNESSES_MM};
use tk_sizing::{
    DesignRequest, compute_shell_thickness, cylinder_volume_m3, design_tank,
    generate_thickness_series, round_to_standard_plate,
};

fn request_strategy() -> impl Strategy<Value = DesignRequest> {
    (
        1.0_f64..2000.0,
        1.0_f64..60.0,
        600.0_f64..2000.0,
        0.5_f64..=1.0,
        0.0_f64..6.0,
        1u32..6,
        0.0_f64..0.3,
    )
        .prop_map(|(rate, days, rho, fill, ca, tanks, margin)| {
            DesignRequest::builder(rate, days)
                .density_kg_m3(rho)
                .max_fill_fraction(fill)
                .corrosion_allowance_mm(ca)
                .num_tanks(tanks)
                .design_margin(margin)
                .build()
                .unwrap()
        })
}

fn is_plate_size(t: f64, required: f64) -> bool {
    STANDARD_PLATE_THICKNESSES_MM.contains(&t) || (t % 6.0 == 0.0 && t >= required)
}

proptest! {
    #[test]
    fn per_tank_volumes_sum_to_geometric(req in request_strategy()) {
        let result = design_tank(&req).unwrap();
        let total = to_m3(result.storage.volume_per_tank) * f64::from(req.num_tanks);
        let tol = Tolerances { abs: 1e-9, rel: 1e-12 };
        prop_assert!(nearly_equal(total, to_m3(result.storage.geometric_volume), tol));
    }

    #[test]
    fn actual_volume_reproducible_from_dimensions(req in request_strategy()) {
        let dims = design_tank(&req).unwrap().dimensions;
        let d = to_m(dims.diameter);
        let h = to_m(dims.height);
        prop_assert_eq!(to_m3(dims.actual_volume), cylinder_volume_m3(d, h));
        prop_assert!(to_m3(dims.actual_volume) > 0.0);
    }

    #[test]
    fn shell_is_stock_plate_and_covers_requirement(req in request_strategy()) {
        let shell = design_tank(&req).unwrap().shell;
        prop_assert!(shell.required_thickness_mm >= 0.0);
        prop_assert!(shell.shell_thickness_mm >= shell.required_thickness_mm);
        prop_assert!(is_plate_size(shell.shell_thickness_mm, shell.required_thickness_mm));
    }

    #[test]
    fn bund_is_110_percent_of_actual(req in request_strategy()) {
        let result = design_tank(&req).unwrap();
        let expected = to_m3(result.dimensions.actual_volume) * 1.1;
        let tol = Tolerances { abs: 1e-9, rel: 1e-12 };
        prop_assert!(nearly_equal(to_m3(result.bund_volume), expected, tol));
    }

    #[test]
    fn head_thickness_monotone_in_height(
        req in request_strategy(),
        d in 1.0_f64..40.0,
        h in 0.0_f64..30.0,
        dh in 0.0_f64..10.0,
    ) {
        let low = compute_shell_thickness(m(d), m(h), &req);
        let high = compute_shell_thickness(m(d), m(h + dh), &req);
        prop_assert!(high.design_thickness_mm >= low.design_thickness_mm);
        prop_assert!(high.test_thickness_mm >= low.test_thickness_mm);
    }

    #[test]
    fn plate_rounding_never_rounds_down(t in 0.0_f64..200.0) {
        let plate = round_to_standard_plate(t);
        prop_assert!(plate >= t);
        prop_assert!(is_plate_size(plate, t));
    }

    #[test]
    fn series_follows_height_progression(req in request_strategy()) {
        let base = to_m(design_tank(&req).unwrap().dimensions.height);
        let series = generate_thickness_series(&req).unwrap();
        prop_assert!(series.points.len() <= SERIES_HEIGHT_FACTORS.len());
        for p in &series.points {
            prop_assert_eq!(to_m(p.height), base * p.height_factor);
        }
    }
}
