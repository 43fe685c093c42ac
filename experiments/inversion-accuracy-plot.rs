// Sweep the root-finder tolerance over randomly sampled curves and measure
// how tightly the recovered parameter reproduces the requested coordinate.
//
// Control points are drawn uniformly from the unit square, a grid of x
// targets is inverted at every tolerance setting, and the worst residual
// per tolerance is plotted on a log-log chart.

use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use plotters::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Uniform};
use unit_bezier_rs::{Axis, UnitBezier};

const CURVE_SAMPLES: usize = 200;
const TARGETS_PER_CURVE: usize = 64;
const TOLERANCES: [f64; 6] = [1e-2, 1e-4, 1e-6, 1e-8, 1e-10, 1e-12];
const OUTPUT_PATH: &str = "inversion-accuracy.png";
const RNG_SEED: u64 = 47;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    info!(
        "Sampling {} random curves, {} targets each, {} tolerance settings",
        CURVE_SAMPLES,
        TARGETS_PER_CURVE,
        TOLERANCES.len()
    );

    let mut rng = StdRng::seed_from_u64(RNG_SEED);
    let unit = Uniform::new_inclusive(0.0f64, 1.0);

    let curves: Vec<UnitBezier> = (0..CURVE_SAMPLES)
        .map(|_| {
            UnitBezier::new(
                unit.sample(&mut rng),
                unit.sample(&mut rng),
                unit.sample(&mut rng),
                unit.sample(&mut rng),
            )
            .expect("unit-square samples are valid control points")
        })
        .collect();

    let pb = ProgressBar::new((TOLERANCES.len() * CURVE_SAMPLES) as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(
                "{spinner:.green} Curves [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})",
            )?
            .progress_chars("#>-"),
    );

    let mut series = Vec::with_capacity(TOLERANCES.len());
    for &tolerance in &TOLERANCES {
        let mut worst: f64 = 0.0;
        let mut total = 0.0;
        let mut samples = 0usize;

        for curve in &curves {
            for j in 1..TARGETS_PER_CURVE {
                let x = j as f64 / TARGETS_PER_CURVE as f64;
                let t = curve.parameter_for_x(x, tolerance)?;
                let residual = (curve.coordinate_for_t(t, Axis::X) - x).abs();
                worst = worst.max(residual);
                total += residual;
                samples += 1;
            }
            pb.inc(1);
        }

        info!(
            "tolerance {:e}: worst residual {:.3e}, mean {:.3e}",
            tolerance,
            worst,
            total / samples as f64
        );
        series.push((tolerance, worst.max(1e-16)));
    }
    pb.finish_and_clear();

    let root = BitMapBackend::new(OUTPUT_PATH, (900, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Inversion accuracy vs. solver tolerance", ("sans-serif", 28))
        .margin(24)
        .x_label_area_size(48)
        .y_label_area_size(64)
        .build_cartesian_2d(
            (1e-13f64..1e-1f64).log_scale(),
            (1e-17f64..1e-1f64).log_scale(),
        )?;

    chart
        .configure_mesh()
        .x_desc("requested tolerance")
        .y_desc("worst |x(t) - x|")
        .draw()?;

    chart
        .draw_series(LineSeries::new(series.iter().copied(), &BLUE))?
        .label("worst residual")
        .legend(|(x, y)| PathElement::new(vec![(x - 12, y), (x, y)], BLUE));

    chart.draw_series(
        series
            .iter()
            .map(|&(tolerance, residual)| Circle::new((tolerance, residual), 3, BLUE.filled())),
    )?;

    chart.configure_series_labels().border_style(BLACK).draw()?;

    root.present()?;
    info!("Wrote {}", OUTPUT_PATH);

    Ok(())
}
