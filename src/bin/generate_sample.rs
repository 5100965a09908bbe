use anyhow::{Context, Result};

/// Widths the benchmark sweeps: 256 up to 2048, doubling.
const WIDTHS: [u32; 4] = [256, 512, 1024, 2048];
/// Timed repetitions per width.
const REPETITIONS: usize = 16;

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
}

/// Simulated time for one pass over eight `width`×`width` float images.
/// Queue profiling slows every pass down by a constant factor.
fn sample_time(width: u32, profiling: bool, rng: &mut SimpleRng) -> f64 {
    let pixels = f64::from(width) * f64::from(width);
    let base = 8.0 * pixels * 2.5e-9;
    let slowdown = if profiling { 1.2 } else { 1.0 };
    let jitter = 1.0 + 0.1 * (rng.next_f64() - 0.5);
    base * slowdown * jitter
}

fn render(rng: &mut SimpleRng) -> String {
    let mut out = String::from("# profiling? width height avg min max\n");
    for profiling in [true, false] {
        for &width in &WIDTHS {
            let times: Vec<f64> = (0..REPETITIONS)
                .map(|_| sample_time(width, profiling, rng))
                .collect();
            let avg = times.iter().sum::<f64>() / REPETITIONS as f64;
            let min = times.iter().cloned().fold(f64::INFINITY, f64::min);
            let max = times.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
            out.push_str(&format!(
                "{} {width} {width} {avg:.6} {min:.6} {max:.6}\n",
                u8::from(profiling)
            ));
        }
    }
    out
}

fn main() -> Result<()> {
    let output_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "sample_qperf.txt".to_string());

    let mut rng = SimpleRng::new(42);
    let text = render(&mut rng);
    std::fs::write(&output_path, text)
        .with_context(|| format!("writing {output_path}"))?;

    println!(
        "Wrote {} rows ({} widths × 2 profiling modes) to {output_path}",
        WIDTHS.len() * 2,
        WIDTHS.len()
    );
    Ok(())
}
