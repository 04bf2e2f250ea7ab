use std::fs::File;
use std::io::Write;

use chrono::NaiveDate;

/// Minimal deterministic PRNG (splitmix64)
struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        SimpleRng { state: seed }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn below(&mut self, n: u64) -> u64 {
        self.next_u64() % n
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

const PREAMBLE: &[&str] = &[
    "Universidad Nacional Autonoma de Mexico",
    "Servicio Sismologico Nacional (datos sinteticos)",
    "Fecha de consulta: 2025-11-25",
    "Magnitud minima: 5.5",
];

const HEADER: &[&str] = &[
    "Fecha",
    "Hora",
    "Magnitud",
    "Latitud",
    "Longitud",
    "Profundidad",
    "Referencia de localizacion",
];

const PLACES: &[&str] = &[
    "32 km al SUR de PINOTEPA NACIONAL, OAX",
    "45 km al SUROESTE de CD HIDALGO, CHIS",
    "18 km al NORESTE de PETATLAN, GRO",
    "60 km al OESTE de TECOMAN, COL",
];

/// Render a date in one of the layouts seen in real exports, sometimes garbled.
fn format_date(date: NaiveDate, rng: &mut SimpleRng) -> String {
    match rng.below(20) {
        0..=11 => date.format("%Y-%m-%d").to_string(),
        12..=14 => date.format("%d/%m/%Y").to_string(),
        15..=16 => date.format("%Y/%m/%d").to_string(),
        17..=18 => date.format("%d-%m-%Y").to_string(),
        _ if rng.below(4) == 0 => "sin fecha".to_string(),
        _ => date.format("%Y-%m-%d").to_string(),
    }
}

fn main() {
    let output_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "sample_catalog.csv".to_string());
    let mut rng = SimpleRng::new(42);

    let mut file = File::create(&output_path).expect("Failed to create output file");
    for line in PREAMBLE {
        writeln!(file, "{line}").expect("Failed to write preamble");
    }

    let mut writer = csv::Writer::from_writer(file);
    writer.write_record(HEADER).expect("Failed to write header");

    let mut rows = 0usize;
    for year in 1990..=2024 {
        // slowly rising yearly rate with noise
        let expected = 8.0 + 0.4 * f64::from(year - 1990);
        let events = rng.gauss(expected, 3.0).round().max(0.0) as u32;

        for _ in 0..events {
            let day_of_year = 1 + rng.below(365) as u32;
            let date = NaiveDate::from_yo_opt(year, day_of_year).expect("valid ordinal day");
            let hour = format!(
                "{:02}:{:02}:{:02}",
                rng.below(24),
                rng.below(60),
                rng.below(60)
            );
            let magnitude = format!("{:.1}", 5.5 + rng.next_f64() * 2.0);
            let lat = format!("{:.4}", 14.5 + rng.next_f64() * 4.0);
            let lon = format!("{:.4}", -105.0 + rng.next_f64() * 12.0);
            let depth = format!("{}", 5 + rng.below(80));
            let place = PLACES[rng.below(PLACES.len() as u64) as usize];
            let date_text = format_date(date, &mut rng);

            writer
                .write_record([
                    date_text.as_str(),
                    hour.as_str(),
                    magnitude.as_str(),
                    lat.as_str(),
                    lon.as_str(),
                    depth.as_str(),
                    place,
                ])
                .expect("Failed to write row");
            rows += 1;
        }
    }
    writer.flush().expect("Failed to flush output");

    println!("Wrote {rows} synthetic events (1990-2024) to {output_path}");
}
