use std::fmt::Write;

use super::accumulator::Posteriors;

/// Renders posteriors the way the console report has always looked:
/// gene counts from two down to zero, then trait true/false, four decimals.
pub fn render_report(posteriors: &Posteriors) -> String {
    let mut out = String::new();
    for person in posteriors.iter() {
        let _ = writeln!(out, "{}:", person.name);
        let _ = writeln!(out, "  Gene:");
        let _ = writeln!(out, "    2: {:.4}", person.gene.two);
        let _ = writeln!(out, "    1: {:.4}", person.gene.one);
        let _ = writeln!(out, "    0: {:.4}", person.gene.zero);
        let _ = writeln!(out, "  Trait:");
        let _ = writeln!(out, "    True: {:.4}", person.has_trait.present);
        let _ = writeln!(out, "    False: {:.4}", person.has_trait.absent);
    }
    out
}

pub fn render_json(posteriors: &Posteriors) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(posteriors)
}
