//! Check Suitability
//!
//! Prints a markdown suitability report for one submission, or for a set of
//! sample submissions when no arguments are given.
//!
//! Run with: cargo run --bin check_suitability -- <crop> <soil> <month> <rainfall>
//!
//! `<rainfall>` is either a millimeter value or light / moderate / heavy.

use cropsmart::form::FormSubmission;
use cropsmart::suitability::{assess, render_markdown};
use cropsmart::screening::screen_rainfall;

/// Sample submissions: (crop, soil, month, rainfall)
const SAMPLES: &[(&str, &str, &str, &str)] = &[
    ("Rice", "Clay", "July", "150"),           // everything ideal
    ("Wheat", "Sandy", "June", "light"),       // poor on every factor
    ("Tomatoes", "Loam", "February", "moderate"),
];

fn submission(crop: &str, soil: &str, month: &str, rainfall: &str) -> FormSubmission {
    let is_category = rainfall.parse::<f64>().is_err();
    FormSubmission {
        crop: crop.to_string(),
        soil: soil.to_string(),
        month: month.to_string(),
        measurement_type: if is_category { "category" } else { "exact" }.to_string(),
        rainfall_category: if is_category { rainfall.to_string() } else { String::new() },
        exact_rainfall: if is_category { String::new() } else { rainfall.to_string() },
    }
}

fn report(form: &FormSubmission) -> anyhow::Result<()> {
    let request = form.validate().map_err(|e| {
        anyhow::anyhow!("{} ({})", e.user_message(), e)
    })?;
    let assessment = assess(&request);

    println!("{}", render_markdown(&assessment));
    println!();

    let screen = screen_rainfall(assessment.rainfall_mm);
    println!("> Rainfall screen: {} - {}", screen.headline(), screen.message);
    println!();
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    match args.as_slice() {
        [crop, soil, month, rainfall] => report(&submission(crop, soil, month, rainfall)),
        [] => {
            println!("CropSmart Suitability Samples\n");
            println!("=============================\n");
            for (crop, soil, month, rainfall) in SAMPLES {
                report(&submission(crop, soil, month, rainfall))?;
            }
            Ok(())
        }
        _ => anyhow::bail!("usage: check_suitability <crop> <soil> <month> <rainfall>"),
    }
}
