//! Example: Estimate the key of a chroma vector
//!
//! ```text
//! cargo run --example estimate_key -- jazz 0.9 0.1 0.5 0.1 0.7 0.6 0.1 0.8 0.1 0.5 0.1 0.3
//! ```
//!
//! With no arguments, a C major triad is analyzed with every genre profile.

use stratum_tonal::{estimate_key, Genre, KeyEstimate, KeyEstimator};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.is_empty() {
        let mut chroma = [0.05; 12];
        chroma[0] = 1.0;
        chroma[4] = 0.8;
        chroma[7] = 0.9;

        for genre in Genre::ALL {
            let estimate = KeyEstimator::new(genre).estimate_slice(&chroma)?;
            println!("{:>9}: {}", genre, estimate);
        }
        return Ok(());
    }

    let genre = &args[0];
    let chroma = args[1..]
        .iter()
        .map(|s| s.parse::<f64>())
        .collect::<Result<Vec<_>, _>>()?;

    let estimate = estimate_key(genre, &chroma)?;

    println!("Genre: {}", Genre::from_name(genre));
    match &estimate {
        KeyEstimate::Determined { key, strength, label } => {
            let signature = key.key_signature();
            println!("  Key: {} (strength: {:.3})", label, strength);
            println!("  Key signature: {:+} fifths", signature.fifths);
        }
        KeyEstimate::Undetermined => println!("  Key: undetermined (no tonal content)"),
    }
    println!("{}", serde_json::to_string_pretty(&estimate)?);

    Ok(())
}
