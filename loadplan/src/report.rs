use airload_hold::genomics::{Allocation, Manifest};
use airload_hold::summary::LoadSummary;

use std::fmt::{self, Write};

const RULE: &str = "####################################################";

/// Renders the best load: tons per cargo and compartment,
/// compartment usage, hold totals, fitness and profit.
pub fn render(allocation: &Allocation, manifest: &Manifest) -> Result<String, fmt::Error> {
    let summary = LoadSummary::new(allocation, manifest);
    let mut out = String::new();

    writeln!(out, "{}", RULE)?;
    writeln!(out, "\nBest load found (tons of each cargo per compartment)\n")?;
    write!(out, "{:<8}", "")?;
    for compartment in &manifest.compartments {
        write!(out, "{:>12}", compartment.name)?;
    }
    writeln!(out)?;
    for (cargo, row) in manifest.cargo_types.iter().zip(allocation.rows()) {
        write!(out, "{:<8}", cargo.name)?;
        for tons in row {
            write!(out, "{:>12.3}", tons)?;
        }
        writeln!(out)?;
    }

    writeln!(out, "\nCompartment usage\n")?;
    writeln!(out, "{:<8}{:>24}{:>28}", "", "weight (t)", "volume (m³)")?;
    for c in &summary.compartments {
        writeln!(
            out,
            "{:<8}{:>24}{:>28}",
            c.name,
            format!(
                "{:.2} / {} ({:.0}%)",
                c.weight,
                c.weight_capacity,
                c.weight_utilization() * 100.0
            ),
            format!(
                "{:.2} / {} ({:.0}%)",
                c.volume,
                c.volume_capacity,
                c.volume_utilization() * 100.0
            ),
        )?;
    }

    writeln!(
        out,
        "\nTotal weight: {:.2} t / {} t",
        summary.total_weight, summary.total_weight_capacity
    )?;
    writeln!(
        out,
        "Total volume: {:.2} m³ / {} m³",
        summary.total_volume, summary.total_volume_capacity
    )?;
    writeln!(out, "\nFitness: {:.2}", summary.fitness)?;
    writeln!(out, "Profit: {:.2}", summary.profit)?;
    writeln!(out, "\n{}", RULE)?;
    Ok(out)
}
