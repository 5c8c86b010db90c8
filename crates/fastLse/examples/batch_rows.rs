//! Batch log-sum-exp over matrix rows.
//!
//! Normalizes each row of a matrix of unnormalized log-weights into a
//! log-probability distribution.

use fastLse::prelude::*;
use ndarray::{Array2, Axis};

fn main() -> Result<(), LseError> {
    // 1000 rows of 50 unnormalized log-weights each
    let log_w = Array2::from_shape_fn((1000, 50), |(i, j)| {
        -(((i * 31 + j * 17) % 97) as f64) * 0.25
    });

    let runner = Lse::new().parallel(true).build()?;

    // Row sums are computed on a scratch copy, which is left sorted
    let mut scratch = log_w.clone();
    let log_z = runner.rows(&mut scratch)?;

    let log_p = &log_w - &log_z.insert_axis(Axis(1));

    let mut check = log_p.clone();
    let totals = runner.rows(&mut check)?;
    let worst = totals.iter().fold(0.0_f64, |acc, t| acc.max(t.abs()));

    println!("Rows normalized: {}", log_p.nrows());
    println!("Largest |log(sum(p))| after normalizing: {worst:.3e}");

    Ok(())
}
