//! # Coilcut CLI Application
//!
//! Terminal front end for the coil slitting calculator. Prompts for coil
//! geometry, metal, and a comma-separated cut list, then prints the derived
//! metrics, the cut table, and a JSON dump for LLM/API use.

use std::io::{self, BufRead, Write};

use coil_core::calculations::coil::{calculate, CoilInput};
use coil_core::calculations::cuts::{parse_cut_list, plan_cuts, CutMode, CutRequest};
use coil_core::materials::Metal;

fn prompt_line(prompt: &str) -> String {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return String::new();
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_string()
}

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    prompt_line(prompt).parse().unwrap_or(default)
}

fn prompt_metal(prompt: &str, default: Metal) -> Metal {
    let raw = prompt_line(prompt);
    if raw.is_empty() {
        return default;
    }
    Metal::from_str_flexible(&raw).unwrap_or_else(|_| {
        println!("Unknown metal '{}', using {}", raw, default);
        default
    })
}

fn main() {
    println!("Coilcut CLI - Coil Slitting Calculator");
    println!("======================================");
    println!();

    let inner_radius_mm = prompt_f64("Inner radius (mm) [300]: ", 300.0);
    let outer_radius_mm = prompt_f64("Outer radius (mm) [800]: ", 800.0);
    let width_mm = prompt_f64("Coil width (mm) [300]: ", 300.0);
    let thickness_mm = prompt_f64("Strip thickness (mm, 0 = unknown) [0]: ", 0.0);
    let metal = prompt_metal("Metal (steel/copper/alu/brass/zinc) [steel]: ", Metal::Steel);
    let cut_raw = prompt_line("Cut widths (mm, comma-separated) []: ");
    let scale = prompt_line("Scale cuts to fit coil width? (y/N): ");

    let input = CoilInput {
        label: "CLI-Demo".to_string(),
        inner_radius_mm,
        outer_radius_mm,
        width_mm,
        metal,
        thickness_mm: (thickness_mm > 0.0).then_some(thickness_mm),
    };

    let parsed = parse_cut_list(&cut_raw);
    let request = CutRequest {
        widths_mm: parsed.widths_mm.clone(),
        mode: if scale.eq_ignore_ascii_case("y") {
            CutMode::ScaleToFit
        } else {
            CutMode::Remainder
        },
    };

    println!();
    let metrics = match calculate(&input) {
        Ok(m) => m,
        Err(e) => {
            report_error(&e);
            return;
        }
    };

    println!("═══════════════════════════════════════");
    println!("  COIL CALCULATION RESULTS");
    println!("═══════════════════════════════════════");
    println!();
    println!("Input:");
    println!("  Bore radius:  {:.1} mm", input.inner_radius_mm);
    println!("  Outer radius: {:.1} mm", input.outer_radius_mm);
    println!("  Width:        {:.1} mm", input.width_mm);
    println!("  Metal:        {} ({:.2} g/cm³)", metal, metal.density_g_cm3());
    println!();
    println!("Metrics:");
    println!("  Volume:     {:.0} mm³", metrics.volume_mm3);
    println!("  Weight:     {:.1} kg", metrics.weight_kg);
    println!("  Per mm:     {:.3} kg/mm", metrics.weight_per_mm_kg);
    match metrics.unwound_length_m {
        Some(len) => println!("  Strip:      {:.1} m unwound", len),
        None => println!("  Strip:      (no thickness given)"),
    }

    if parsed.has_rejections() {
        println!();
        println!(
            "Warning: skipped cut entries: {}",
            parsed.rejected.join(", ")
        );
    }

    let plan = match plan_cuts(&input, &metrics, &request) {
        Ok(p) => p,
        Err(e) => {
            report_error(&e);
            return;
        }
    };

    println!();
    println!("Cut plan ({}):", request.mode);
    println!("  {:<8} {:>12} {:>12}", "Slice", "Width (mm)", "Weight (kg)");
    for entry in &plan.entries {
        println!(
            "  {:<8} {:>12.1} {:>12.1}",
            entry.label, entry.width_mm, entry.weight_kg
        );
    }

    if plan.over_allocated {
        println!();
        println!(
            "Warning: requested {:.1} mm but only {:.1} mm available ({:.1} mm over)",
            plan.requested_mm, plan.available_mm, plan.excess_mm
        );
    }

    if let Some(scale) = plan.scale_factor {
        println!();
        println!("Widths rescaled by factor {:.4} to fill the coil exactly", scale);
    }

    println!();
    println!("═══════════════════════════════════════");

    println!();
    println!("JSON Output (for LLM/API use):");
    if let Ok(json) = serde_json::to_string_pretty(&(&metrics, &plan)) {
        println!("{}", json);
    }
}

fn report_error(e: &coil_core::CalcError) {
    eprintln!("Error: {}", e);
    if let Ok(json) = serde_json::to_string_pretty(e) {
        eprintln!();
        eprintln!("Error JSON:");
        eprintln!("{}", json);
    }
}
