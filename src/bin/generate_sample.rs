//! Writes deterministic demo versions of the two startup files,
//! `data/diamonds.csv` and `data/regression.csv`.

use anyhow::{Context, Result};
use serde::Serialize;

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }

    fn choice<'a>(&mut self, items: &[&'a str]) -> &'a str {
        let i = (self.next_f64() * items.len() as f64) as usize;
        items[i.min(items.len() - 1)]
    }
}

#[derive(Serialize)]
struct DiamondRow {
    carat: f64,
    x: f64,
    y: f64,
    z: f64,
    depth: f64,
    table_pct: f64,
    price: f64,
    clarity: String,
    color: String,
    cut: String,
}

#[derive(Serialize)]
struct RegressionSample {
    xdimension: f64,
    price: f64,
}

const CUTS: [&str; 5] = ["Fair", "Good", "Very Good", "Premium", "Ideal"];
const COLORS: [&str; 7] = ["D", "E", "F", "G", "H", "I", "J"];
const CLARITIES: [&str; 8] = ["I1", "SI2", "SI1", "VS2", "VS1", "VVS2", "VVS1", "IF"];

fn cut_factor(cut: &str) -> f64 {
    match cut {
        "Ideal" => 1.25,
        "Premium" => 1.15,
        "Very Good" => 1.05,
        "Good" => 0.95,
        _ => 0.8,
    }
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);
    std::fs::create_dir_all("data").context("creating data directory")?;

    // ---- Observation table ----
    let mut writer = csv::Writer::from_path("data/diamonds.csv")?;
    let n_rows = 240;
    for _ in 0..n_rows {
        // carat skews small, like real inventories
        let carat = round2(0.2 + 2.3 * rng.next_f64().powi(2));
        // face-up width grows with the cube root of mass
        let x = 6.47 * carat.cbrt() + rng.gauss(0.0, 0.08);
        let y = x + rng.gauss(0.0, 0.05);
        let z = 0.62 * x + rng.gauss(0.0, 0.05);
        let cut = rng.choice(&CUTS);
        let price = (3800.0 * carat * carat + 900.0 * carat) * cut_factor(cut)
            + rng.gauss(0.0, 150.0);

        writer.serialize(DiamondRow {
            carat,
            x: round2(x),
            y: round2(y),
            z: round2(z),
            depth: round2(61.8 + rng.gauss(0.0, 1.2)),
            table_pct: round2(57.0 + rng.gauss(0.0, 2.0)),
            price: price.max(300.0).round(),
            clarity: rng.choice(&CLARITIES).to_string(),
            color: rng.choice(&COLORS).to_string(),
            cut: cut.to_string(),
        })?;
    }
    writer.flush()?;

    // ---- Regression table: price quadratic in the x dimension ----
    let mut writer = csv::Writer::from_path("data/regression.csv")?;
    let n_samples = 80;
    for i in 0..n_samples {
        let xdimension = 4.0 + 5.0 * i as f64 / (n_samples - 1) as f64;
        let price = 160.0 * xdimension * xdimension - 1900.0 + rng.gauss(0.0, 350.0);
        writer.serialize(RegressionSample {
            xdimension: round2(xdimension),
            price: price.max(200.0).round(),
        })?;
    }
    writer.flush()?;

    println!("Wrote {n_rows} diamonds and {n_samples} regression samples under data/");
    Ok(())
}
