use super::util::cross;
use super::*;
use nalgebra::{vector, Vector2};
use proptest::prelude::*;

fn unit_square_cloud() -> Vec<Vector2<f64>> {
    vec![
        vector![0.0, 0.0],
        vector![1.0, 0.0],
        vector![1.0, 1.0],
        vector![0.0, 1.0],
        vector![0.5, 0.5],
    ]
}

fn l_shape() -> Polygon {
    Polygon::new(vec![
        vector![0.0, 0.0],
        vector![2.0, 0.0],
        vector![2.0, 1.0],
        vector![1.0, 1.0],
        vector![1.0, 2.0],
        vector![0.0, 2.0],
    ])
}

#[test]
fn unit_square_hull_and_membership() {
    let cfg = GeomCfg::default();
    let hull = convex_hull(&unit_square_cloud(), cfg);
    assert_eq!(
        hull.verts,
        vec![
            vector![0.0, 0.0],
            vector![1.0, 0.0],
            vector![1.0, 1.0],
            vector![0.0, 1.0]
        ]
    );
    let outside = outside_point(&hull, cfg).expect("non-empty hull");
    assert!(outside.x < -999.0 && outside.y < -700.0);
    assert!(is_inside(&hull, vector![0.5, 0.5], outside, cfg));
    assert!(!is_inside(&hull, vector![2.0, 2.0], outside, cfg));
}

#[test]
fn degenerate_inputs() {
    let cfg = GeomCfg::default();
    assert!(convex_hull(&[], cfg).is_empty());

    let one = convex_hull(&[vector![3.0, -1.0]], cfg);
    assert_eq!(one.verts, vec![vector![3.0, -1.0]]);

    let two = convex_hull(&[vector![4.0, 4.0], vector![1.0, 2.0]], cfg);
    assert_eq!(two.verts, vec![vector![1.0, 2.0], vector![4.0, 4.0]]);
    assert!(two.is_degenerate());
}

#[test]
fn collinear_input_keeps_extremes() {
    let cfg = GeomCfg::default();
    let pts: Vec<_> = (0..7).map(|k| vector![k as f64, 2.0 * k as f64]).rev().collect();
    let hull = convex_hull(&pts, cfg);
    assert_eq!(hull.verts, vec![vector![0.0, 0.0], vector![6.0, 12.0]]);
}

#[test]
fn duplicates_do_not_stall_the_sweep() {
    let cfg = GeomCfg::default();
    let mut pts = Vec::new();
    for _ in 0..5 {
        pts.extend(unit_square_cloud());
    }
    let hull = convex_hull(&pts, cfg);
    assert_eq!(hull.len(), 4);
    assert_eq!(hull.verts[0], vector![0.0, 0.0]);

    let same = convex_hull(&[vector![1.0, 1.0]; 6], cfg);
    assert!(same.len() <= 2);
    assert!(same.verts.iter().all(|p| *p == vector![1.0, 1.0]));
}

#[test]
fn edge_points_are_dropped_by_distance_tie_break() {
    let cfg = GeomCfg::default();
    let pts = vec![
        vector![1.0, 0.0],
        vector![2.0, 2.0],
        vector![0.0, 1.0],
        vector![2.0, 0.0],
        vector![1.0, 1.0],
        vector![0.0, 0.0],
        vector![0.0, 2.0],
        vector![2.0, 1.0],
        vector![1.0, 2.0],
    ];
    let hull = convex_hull(&pts, cfg);
    assert_eq!(
        hull.verts,
        vec![
            vector![0.0, 0.0],
            vector![2.0, 0.0],
            vector![2.0, 2.0],
            vector![0.0, 2.0]
        ]
    );
}

#[test]
fn outside_point_requires_vertices() {
    let cfg = GeomCfg::default();
    assert!(outside_point(&Polygon::default(), cfg).is_none());
    let poly = Polygon::new(vec![vector![5.0, 7.0], vector![-2.0, 9.0], vector![3.0, 3.0]]);
    let o = outside_point(&poly, cfg).unwrap();
    assert!((o.x - (-2.0 - 1000.0)).abs() < 1e-9);
    assert!((o.y - (3.0 - 1000.0 * std::f64::consts::FRAC_1_SQRT_2)).abs() < 1e-9);

    let near = GeomCfg {
        outside_margin: 10.0,
        ..cfg
    };
    let o = outside_point(&poly, near).unwrap();
    assert!((o.x + 12.0).abs() < 1e-9);
}

#[test]
fn empty_and_degenerate_polygons_contain_nothing() {
    let cfg = GeomCfg::default();
    let q = vector![0.0, 0.0];
    assert!(!contains(&Polygon::default(), q, cfg));
    assert!(!is_inside(&Polygon::default(), q, vector![-10.0, -10.0], cfg));
    let seg = Polygon::new(vec![vector![-1.0, 0.0], vector![1.0, 0.0]]);
    assert!(!contains(&seg, q, cfg));
    assert_eq!(winding_number(&seg, q), 0);
}

#[test]
fn concave_polygon_membership() {
    let cfg = GeomCfg::default();
    let poly = l_shape();
    assert!(contains(&poly, vector![0.5, 1.5], cfg));
    assert!(contains(&poly, vector![1.5, 0.5], cfg));
    assert!(!contains(&poly, vector![1.5, 1.5], cfg));
    assert!(!contains(&poly, vector![3.0, 0.5], cfg));

    assert_eq!(winding_number(&poly, vector![0.5, 1.5]), 1);
    assert_eq!(winding_number(&poly, vector![1.5, 1.5]), 0);
}

#[test]
fn winding_sign_follows_orientation() {
    let mut poly = l_shape();
    poly.verts.reverse();
    assert_eq!(winding_number(&poly, vector![0.5, 0.5]), -1);
}

#[test]
fn filter_inside_keeps_input_order() {
    let cfg = GeomCfg::default();
    let poly = l_shape();
    let queries = vec![
        vector![1.5, 0.5],
        vector![5.0, 5.0],
        vector![0.5, 1.5],
        vector![1.5, 1.5],
        vector![0.25, 0.25],
    ];
    let expected = vec![vector![1.5, 0.5], vector![0.5, 1.5], vector![0.25, 0.25]];
    assert_eq!(
        filter_inside(&poly, &queries, MembershipRule::RayCast, cfg),
        expected
    );
    assert_eq!(
        filter_inside(&poly, &queries, MembershipRule::Winding, cfg),
        expected
    );
    assert!(filter_inside(&Polygon::default(), &queries, MembershipRule::RayCast, cfg).is_empty());
}

#[test]
fn sampled_cloud_lies_in_its_hull() {
    let cfg = GeomCfg::default();
    let pts = sample::draw_points_in_disk(
        sample::SampleCfg {
            count: 300,
            radius: 5.0,
            ..Default::default()
        },
        sample::ReplayToken { seed: 11, index: 0 },
    );
    let hull = convex_hull(&pts, cfg);
    assert!(hull.len() >= 3);
    for p in &pts {
        for (a, b) in hull.edges() {
            assert!(cross(a, b, *p) >= -1e-9);
        }
    }
}

#[test]
fn shallow_vertex_next_to_a_long_edge_survives() {
    let cfg = GeomCfg::default();
    let triangle = convex_hull(
        &[vector![0.0, 0.0], vector![1.0, 0.001], vector![1000.0, 0.0]],
        cfg,
    );
    assert_eq!(
        triangle.verts,
        vec![vector![0.0, 0.0], vector![1000.0, 0.0], vector![1.0, 0.001]]
    );

    let quad = convex_hull(
        &[
            vector![0.0, 0.0],
            vector![1000.0, 0.0],
            vector![1.0, 0.001],
            vector![1000.0, 0.5],
        ],
        cfg,
    );
    assert_eq!(
        quad.verts,
        vec![
            vector![0.0, 0.0],
            vector![1000.0, 0.0],
            vector![1000.0, 0.5],
            vector![1.0, 0.001],
        ]
    );
}

#[test]
fn shallow_vertex_near_straight_angle_survives() {
    let pts = [
        vector![0.0, 0.0],
        vector![10.0, 0.0],
        vector![10.0, 10.0],
        vector![-1.0, 0.0004],
        vector![-1000.0, 0.5],
    ];
    let hull = convex_hull(&pts, GeomCfg::default());
    assert_eq!(
        hull.verts,
        vec![
            vector![0.0, 0.0],
            vector![10.0, 0.0],
            vector![10.0, 10.0],
            vector![-1000.0, 0.5],
            vector![-1.0, 0.0004],
        ]
    );
    for p in &pts {
        for (a, b) in hull.edges() {
            assert!(cross(a, b, *p) >= 0.0);
        }
    }
}

/// Half-integer grid points: exact arithmetic, many duplicates and collinear runs.
fn grid_points() -> impl Strategy<Value = Vec<Vector2<f64>>> {
    prop::collection::vec((-20i32..=20, -20i32..=20), 0..40).prop_map(|v| {
        v.into_iter()
            .map(|(x, y)| Vector2::new(x as f64 * 0.5, y as f64 * 0.5))
            .collect()
    })
}

proptest! {
    #[test]
    fn hull_contains_every_input_point(pts in grid_points()) {
        let hull = convex_hull(&pts, GeomCfg::default());
        prop_assert_eq!(hull.is_empty(), pts.is_empty());
        match hull.len() {
            0 => {}
            1 => prop_assert!(pts.iter().all(|p| *p == hull.verts[0])),
            2 => {
                let (a, b) = (hull.verts[0], hull.verts[1]);
                prop_assert!(pts.iter().all(|p| cross(a, b, *p) == 0.0));
            }
            _ => {
                for p in &pts {
                    for (a, b) in hull.edges() {
                        prop_assert!(cross(a, b, *p) >= 0.0);
                    }
                }
            }
        }
    }

    #[test]
    fn hull_is_strictly_convex_and_minimal(pts in grid_points()) {
        let hull = convex_hull(&pts, GeomCfg::default());
        prop_assume!(hull.len() >= 3);
        let n = hull.len();
        for i in 0..n {
            let (a, b, c) = (hull.verts[i], hull.verts[(i + 1) % n], hull.verts[(i + 2) % n]);
            prop_assert!(cross(a, b, c) > 0.0);
        }
        for v in &hull.verts {
            prop_assert!(pts.contains(v));
        }
        // Re-running on its own output is a fixed point.
        prop_assert_eq!(convex_hull(&hull.verts, GeomCfg::default()), hull);
    }

    #[test]
    fn hull_interior_and_far_points_classify(pts in grid_points()) {
        let cfg = GeomCfg::default();
        let hull = convex_hull(&pts, cfg);
        prop_assume!(hull.len() >= 3);
        let centroid = hull.verts.iter().sum::<Vector2<f64>>() / hull.len() as f64;
        prop_assert!(contains(&hull, centroid, cfg));
        prop_assert_eq!(winding_number(&hull, centroid), 1);
        prop_assert!(!contains(&hull, vector![100.0, 100.0], cfg));
        prop_assert!(!contains(&hull, vector![-100.0, 3.0], cfg));
    }

    #[test]
    fn hull_of_continuous_points_contains_and_turns_left(pts in shallow_points()) {
        let cfg = GeomCfg::default();
        let hull = convex_hull(&pts, cfg);
        prop_assert!(hull.len() >= 3);
        prop_assert_eq!(hull.verts[0], vector![0.0, 0.0]);
        // Only points within eps of a ray from the anchor may be reordered.
        for p in &pts {
            for (a, b) in hull.edges() {
                prop_assert!(cross(a, b, *p) >= -cfg.eps);
            }
        }
        let n = hull.len();
        for i in 0..n {
            let (a, b, c) = (hull.verts[i], hull.verts[(i + 1) % n], hull.verts[(i + 2) % n]);
            prop_assert!(cross(a, b, c) > 0.0);
        }
    }
}

/// Continuous coordinates around a unique lowest anchor at the origin: shallow
/// points `(±x, δ)` with x spread over three orders of magnitude, plus a
/// general cloud above the axis.
fn shallow_points() -> impl Strategy<Value = Vec<Vector2<f64>>> {
    let shallow = (0.0f64..3.0, any::<bool>(), 1e-5f64..1e-3).prop_map(|(exp, left, dy)| {
        let x = 10f64.powf(exp);
        vector![if left { -x } else { x }, dy]
    });
    let general = (-100.0f64..100.0, 1e-5f64..100.0).prop_map(|(x, y)| vector![x, y]);
    (
        prop::collection::vec(shallow, 1..12),
        prop::collection::vec(general, 1..12),
    )
        .prop_map(|(mut pts, general)| {
            pts.extend(general);
            pts.push(vector![0.0, 0.0]);
            pts
        })
}
