use float_cmp::assert_approx_eq;
use poisson::error::*;
use poisson::grid::*;
use poisson::partition::*;
use poisson::solver::*;
use poisson::source::*;
use poisson::util::*;

fn center_impulse(n: usize) -> Field<f64> {
    generate_source(n, SourceType::Impulse { magnitude: 1.0 }).unwrap()
}

#[test]
fn deterministic_across_threads() {
    let n = 11;
    let source = generate_source::<f64>(
        n,
        SourceType::Rand {
            max_val: 1.0,
            seed: 5,
        },
    )
    .unwrap();
    let expected = solve(SolverConfig::new(n, 12), &source).unwrap();
    for threads in 2..=n {
        let config = SolverConfig {
            threads,
            ..SolverConfig::new(n, 12)
        };
        assert_eq!(solve(config, &source).unwrap(), expected, "{threads}");
    }
}

#[test]
fn reflective_n3_by_hand() {
    let source = center_impulse(3);
    let config = SolverConfig {
        threads: 3,
        ..SolverConfig::new(3, 4)
    };
    let r = solve(config, &source).unwrap();
    let b = r.buffer();
    assert_approx_eq!(f64, b[13], -2.0 / 9.0, epsilon = 1e-12);

    // Faces, edges and corners by symmetry class
    for z in 0..3 {
        for y in 0..3 {
            for x in 0..3 {
                let on_boundary = [x, y, z].iter().filter(|c| **c != 1).count();
                let e = match on_boundary {
                    0 => -2.0 / 9.0,
                    1 => -8.0 / 81.0,
                    _ => -1.0 / 27.0,
                };
                assert_approx_eq!(
                    f64,
                    r.get(x, y, z),
                    e,
                    epsilon = 1e-12
                );
            }
        }
    }
}

#[test]
fn fixed_n3_by_hand() {
    let source = Field::<f64>::zeroed(3).unwrap();
    let config = SolverConfig {
        boundary: BoundaryCondition::Fixed(2.0),
        threads: 2,
        ..SolverConfig::new(3, 1)
    };
    let r = solve(config, &source).unwrap();
    assert_approx_eq!(f64, r.get(0, 0, 0), 1.0);
    assert_approx_eq!(f64, r.get(1, 0, 0), 2.0 / 3.0);
    assert_approx_eq!(f64, r.get(1, 1, 0), 1.0 / 3.0);
    assert_approx_eq!(f64, r.get(1, 1, 1), 0.0);
}

#[test]
fn symmetric_source_symmetric_result() {
    let n = 5;
    let source = center_impulse(n);
    for boundary in
        [BoundaryCondition::Reflective, BoundaryCondition::Fixed(0.5)]
    {
        let config = SolverConfig {
            boundary,
            threads: 2,
            ..SolverConfig::new(n, 10)
        };
        let r = solve(config, &source).unwrap();
        let m = n - 1;
        for z in 0..n {
            for y in 0..n {
                for x in 0..n {
                    let v = r.get(x, y, z);
                    for mirrored in [
                        r.get(y, x, z),
                        r.get(x, z, y),
                        r.get(z, y, x),
                        r.get(m - x, y, z),
                        r.get(x, m - y, z),
                        r.get(x, y, m - z),
                    ] {
                        assert_approx_eq!(f64, v, mirrored, epsilon = 1e-12);
                    }
                }
            }
        }
    }
}

#[test]
fn constant_field_is_fixed_point() {
    let n = 6;
    let value = 0.75;
    let source = Field::<f64>::zeroed(n).unwrap();
    let initial = Field::try_constant(n, value, "initial").unwrap();
    for boundary in
        [BoundaryCondition::Fixed(value), BoundaryCondition::Reflective]
    {
        let config = SolverConfig {
            boundary,
            threads: 3,
            ..SolverConfig::new(n, 20)
        };
        let r = solve_from(config, &source, initial.clone()).unwrap();
        assert_eq!(r, initial);
    }
}

#[test]
fn resume_matches_single_run() {
    let n = 7;
    let source = center_impulse(n);
    let config = |iterations| SolverConfig {
        threads: 3,
        ..SolverConfig::new(n, iterations)
    };
    let whole = solve(config(9), &source).unwrap();
    let first = solve(config(4), &source).unwrap();
    let resumed = solve_from(config(5), &source, first).unwrap();
    assert_eq!(resumed, whole);
}

#[test]
fn wavefront_matches_full_sweep() {
    let n = 13;
    let source = center_impulse(n);
    for iterations in [1, 3, 6, 7, 20] {
        let with = SolverConfig {
            threads: 4,
            ..SolverConfig::new(n, iterations)
        };
        let without = SolverConfig {
            wavefront: false,
            ..with
        };
        assert_eq!(
            solve(with, &source).unwrap(),
            solve(without, &source).unwrap(),
            "{iterations} iterations"
        );
    }
}

#[test]
fn impulse_spreads_one_cell_per_iteration() {
    let n = 9;
    let source = center_impulse(n);
    let r = solve(SolverConfig::new(n, 3), &source).unwrap();
    let support = r.support().unwrap();
    assert_eq!(support.min(), vector![2, 2, 2]);
    assert_eq!(support.max(), vector![6, 6, 6]);
}

#[test]
fn partition_completeness() {
    for n in 1..64 {
        for threads in 1..=n {
            let ranges = partition(n, threads);
            let mut owner = vec![0usize; n];
            for r in ranges.iter() {
                for z in r.clone() {
                    owner[z] += 1;
                }
            }
            assert!(owner.iter().all(|c| *c == 1));
            let sizes: Vec<usize> = ranges.iter().map(|r| r.len()).collect();
            let largest = sizes.iter().max().unwrap();
            let smallest = sizes.iter().min().unwrap();
            assert!(largest - smallest <= 1, "{n} over {threads}");
        }
    }
}

#[test]
fn invalid_configurations() {
    let source = center_impulse(4);
    let ok = SolverConfig::new(4, 1);
    let cases = [
        (
            SolverConfig { n: 0, ..ok },
            SolverError::InvalidGridSize { n: 0 },
        ),
        (
            SolverConfig { threads: 0, ..ok },
            SolverError::InvalidThreadCount { threads: 0 },
        ),
        (
            SolverConfig { threads: 5, ..ok },
            SolverError::ThreadsExceedGrid { threads: 5, n: 4 },
        ),
        (
            SolverConfig { delta: -1.0, ..ok },
            SolverError::InvalidDelta { delta: -1.0 },
        ),
        (
            SolverConfig { n: 5, ..ok },
            SolverError::FieldSizeMismatch {
                what: "source",
                expected: 125,
                actual: 64,
            },
        ),
    ];
    for (config, error) in cases {
        assert_eq!(solve(config, &source), Err(error));
    }
}
