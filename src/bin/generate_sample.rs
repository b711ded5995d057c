use anyhow::{Context, Result};

const SITES: [&str; 4] = ["CCAFS LC-40", "VAFB SLC-4E", "KSC LC-39A", "CCAFS SLC-40"];

/// Booster generations in launch order: category, success rate, typical payload (kg).
const BOOSTERS: [(&str, f64, f64); 5] = [
    ("v1.0", 0.2, 700.0),
    ("v1.1", 0.35, 2500.0),
    ("FT", 0.7, 5000.0),
    ("B4", 0.6, 6500.0),
    ("B5", 0.9, 7500.0),
];

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

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[(self.next_u64() % items.len() as u64) as usize]
    }
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);
    let output_path = "spacex_launch_dash.csv";

    let mut writer = csv::Writer::from_path(output_path)
        .with_context(|| format!("creating {output_path}"))?;
    writer.write_record([
        "",
        "Flight Number",
        "Launch Site",
        "class",
        "Payload Mass (kg)",
        "Booster Version",
        "Booster Version Category",
    ])?;

    let launches_per_booster = 12;
    let mut row: usize = 0;
    for (generation, &(category, success_rate, typical_payload)) in BOOSTERS.iter().enumerate() {
        for serial in 0..launches_per_booster {
            let site = rng.pick(&SITES[..]);
            // Payloads spread ±60% around the generation's typical mass, rounded to 10 kg.
            let spread = (rng.next_f64() * 1.2 - 0.6) * typical_payload;
            let payload = ((typical_payload + spread).clamp(0.0, 9600.0) / 10.0).round() * 10.0;
            let class = u8::from(rng.next_f64() < success_rate);
            let booster_version = format!("F9 {category} B{}", 1000 + generation * 20 + serial);

            writer.write_record([
                row.to_string(),
                (row + 1).to_string(),
                site.to_string(),
                class.to_string(),
                format!("{payload:.1}"),
                booster_version,
                category.to_string(),
            ])?;
            row += 1;
        }
    }
    writer.flush().context("flushing CSV")?;

    println!("Wrote {row} launches to {output_path}");
    Ok(())
}
