//! Benchmarks for Weierstrass reduction.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use toric_poly::{Monomial, PolyRing, SparsePoly, Var};
use toric_polygon::{PolygonClassifier, ReflexiveEmbedder, ReflexivePolygon};
use toric_rings::{Ring, Q};
use toric_weierstrass::{Family, Reducer};

/// The sum of all sections of a reference polygon, with varying coefficients.
fn full_section(polygon: ReflexivePolygon) -> SparsePoly<Q> {
    let terms = polygon
        .lattice_points()
        .into_iter()
        .enumerate()
        .map(|(k, [i, j])| {
            let m = Monomial::from_exponents(&[i as u32, j as u32]);
            (m, Q::from_integer((k as i64 % 7) + 1))
        })
        .collect();
    SparsePoly::new(terms)
}

/// A plane cubic whose coefficients are polynomials in one parameter.
fn parametric_cubic() -> SparsePoly<Q> {
    let ring = PolyRing::new(&["x", "y", "a"]);
    let g = ring.gens::<Q>();
    let (x, y, a) = (&g[0], &g[1], &g[2]);
    let terms = [
        x.pow(3),
        &a.pow(2) * &y.pow(3),
        a * &(x * y),
        &(a + &SparsePoly::one()) * x,
        SparsePoly::one(),
    ];
    terms.iter().fold(SparsePoly::zero(), |acc, t| &acc + t)
}

fn bench_reduction(c: &mut Criterion) {
    let mut group = c.benchmark_group("weierstrass_form");
    let reducer = Reducer::new();
    let xy: &[Var] = &[Var(0), Var(1)];

    for polygon in ReflexivePolygon::ALL {
        let p = full_section(polygon);
        let family = Family::from_polygon(polygon);

        group.bench_with_input(BenchmarkId::new("direct", polygon), &p, |b, p| {
            b.iter(|| black_box(family.weierstrass_form(p, xy)))
        });
        group.bench_with_input(BenchmarkId::new("classified", polygon), &p, |b, p| {
            b.iter(|| black_box(reducer.weierstrass_form(p, Some(xy))))
        });
    }

    let p = parametric_cubic();
    group.bench_function("parametric_cubic", |b| {
        b.iter(|| black_box(reducer.weierstrass_form(&p, Some(xy))))
    });

    group.finish();
}

fn bench_classification(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify");
    let embedder = ReflexiveEmbedder::new();

    for polygon in ReflexivePolygon::ALL {
        // A sheared copy forces the exhaustive search.
        let points: Vec<Vec<i64>> = polygon
            .lattice_points()
            .iter()
            .map(|&[x, y]| vec![x + 2 * y, y])
            .collect();

        group.bench_with_input(BenchmarkId::new("sheared", polygon), &points, |b, points| {
            b.iter(|| black_box(embedder.classify(points)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_reduction, bench_classification);
criterion_main!(benches);
