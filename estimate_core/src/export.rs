//! # Export Formatting
//!
//! Turns a computed [`Estimate`](crate::calculations::Estimate) into the
//! two deliverable formats: a per-room CSV table and a plain-text
//! multi-section summary.
//!
//! Numeric conventions: areas and currency to 2 decimal places, unit
//! counts as integers, mud gallons to 1 decimal.
//!
//! Writing the strings to disk is the front end's concern; see
//! [`crate::file_io::write_text`].

use crate::calculations::Estimate;
use crate::job::Job;

/// Fixed column header for the per-room CSV export.
pub const CSV_HEADER: &str = "room,length_ft,width_ft,height_ft,wall_area_net_ft2,\
ceiling_area_ft2,total_area_ft2,total_area_m2,total_with_waste_ft2,total_with_waste_m2";

/// Quote a CSV field when it contains a delimiter, quote, or newline.
fn csv_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Render the per-room breakdown as CSV.
pub fn per_room_csv(estimate: &Estimate) -> String {
    let mut out = String::from(CSV_HEADER);
    out.push('\n');
    for room in &estimate.rooms {
        out.push_str(&format!(
            "{},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2}\n",
            csv_field(&room.name),
            room.length_ft,
            room.width_ft,
            room.height_ft,
            room.wall_area_net_ft2,
            room.ceiling_area_ft2,
            room.total_area_ft2,
            room.total_area_m2,
            room.total_with_waste_ft2,
            room.total_with_waste_m2,
        ));
    }
    out
}

/// Render the multi-section plain-text summary.
///
/// Sections: per-room geometry, grand totals, material takeoff, high
/// parts, and pricing, in the order a client reads a quote.
pub fn summary_txt(estimate: &Estimate, job: &Job) -> String {
    let settings = &job.settings;
    let mut lines: Vec<String> = Vec::new();

    lines.push("Drywall Estimate Summary (per room)".to_string());
    for room in &estimate.rooms {
        lines.push(format!(
            "- {}: Walls {:.2} ft^2, Ceiling {:.2} ft^2, Total {:.2} ft^2 ({:.2} m^2)",
            room.name,
            room.wall_area_net_ft2,
            room.ceiling_area_ft2,
            room.total_area_ft2,
            room.total_area_m2,
        ));
    }

    let totals = &estimate.totals;
    lines.push(String::new());
    lines.push(format!(
        "Grand Total: {:.2} ft^2 ({:.2} m^2)",
        totals.total_area_ft2, totals.total_area_m2
    ));
    lines.push(format!(
        "Grand Total w/ waste: {:.2} ft^2 ({:.2} m^2)",
        totals.total_with_waste_ft2, totals.total_with_waste_m2
    ));

    let takeoff = &estimate.takeoff;
    lines.push(String::new());
    lines.push("Material Takeoff:".to_string());
    lines.push(format!(
        "- Board: {:.0} ft^2 -> {} sheets ({})",
        takeoff.board_area_ft2,
        takeoff.sheets,
        settings.sheet.display_name(),
    ));
    lines.push(format!(
        "- Mud: {:.1} gal (~{} pails @ {} gal)",
        takeoff.mud_gal, takeoff.mud_pails, settings.factors.mud_pail_gal,
    ));
    lines.push(format!(
        "- Tape: {} rolls (~{:.0} ft^2/roll)",
        takeoff.tape_rolls, settings.factors.tape_ft2_per_roll,
    ));
    lines.push(format!(
        "- Screws: {} pcs (~{} boxes @ {} pcs)",
        takeoff.screws, takeoff.screw_boxes, settings.factors.screws_per_box,
    ));
    lines.push(format!(
        "- Corner bead: {} pcs (~{:.0} lf, {} ft pieces)",
        takeoff.corner_bead_pieces, takeoff.corner_bead_lf, settings.factors.corner_bead_piece_ft,
    ));
    if settings.channel.include {
        lines.push(format!(
            "- Resilient channel: {} pcs (~{:.0} lf, {} ft pieces)",
            takeoff.channel_pieces, takeoff.channel_lf, settings.channel.piece_ft,
        ));
    } else {
        lines.push("- Resilient channel: not included".to_string());
    }

    let high = &estimate.high_parts;
    lines.push(String::new());
    lines.push("High Parts:".to_string());
    if high.qualifying_count > 0 {
        lines.push(format!(
            "- Qualifying: {} parts, {:.2} ft^2",
            high.qualifying_count, high.qualifying_area_ft2,
        ));
    } else {
        lines.push("- Qualifying: none".to_string());
    }

    let pricing = &estimate.pricing;
    lines.push(String::new());
    lines.push("Pricing:".to_string());
    lines.push(format!(
        "- Chargeable area: {:.2} ft^2 ({:.2} m^2)",
        pricing.chargeable_area_ft2, pricing.chargeable_area_m2,
    ));
    lines.push(format!(
        "- Area labour ({}): ${:.2}",
        pricing.area_rate_label, pricing.area_labour_cost,
    ));
    lines.push(format!(
        "- High-part labour: ${:.2}",
        pricing.high_part_labour_cost,
    ));
    lines.push(format!(
        "- Pot lights: {} x ${:.2} = ${:.2}",
        settings.pot_light_qty,
        settings.costs.pot_light,
        f64::from(settings.pot_light_qty) * settings.costs.pot_light,
    ));
    lines.push(format!("- Materials: ${:.2}", pricing.material_subtotal));
    lines.push(format!(
        "- Subtotal (no tax): ${:.2}",
        pricing.subtotal_no_tax
    ));
    lines.push(format!(
        "- Total with tax ({:.1}%): ${:.2}",
        settings.tax_pct, pricing.total_with_tax,
    ));
    lines.push(format!("- Cash price (no tax): ${:.2}", pricing.cash_price));

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::{compute, HighPartEntry, RoomSpec};

    fn demo_job() -> Job {
        let mut job = Job::new("Test Estimator", "TEST-001", "Test Client");
        job.settings.waste_pct = 10.0;
        job.add_room(RoomSpec::new("Main Room").with_dimensions(10.0, 10.0, 8.0));
        job
    }

    #[test]
    fn test_csv_header_and_row() {
        let job = demo_job();
        let csv = per_room_csv(&compute(&job));
        let mut lines = csv.lines();

        assert_eq!(lines.next().unwrap(), CSV_HEADER);
        let row = lines.next().unwrap();
        assert!(row.starts_with("Main Room,10.00,10.00,8.00,320.00,100.00,420.00,"));
        assert!(row.contains("462.00"));
        assert!(lines.next().is_none());
    }

    #[test]
    fn test_csv_escapes_room_names() {
        let mut job = demo_job();
        job.add_room(RoomSpec::new("Hall, upper \"landing\"").with_dimensions(6.0, 3.0, 8.0));
        let csv = per_room_csv(&compute(&job));
        assert!(csv.contains("\"Hall, upper \"\"landing\"\"\""));
    }

    #[test]
    fn test_txt_sections_present() {
        let mut job = demo_job();
        job.high_parts.push(HighPartEntry::new(12.0, 100.0));
        job.settings.labour.per_ft2 = 2.0;

        let txt = summary_txt(&compute(&job), &job);
        assert!(txt.starts_with("Drywall Estimate Summary (per room)"));
        assert!(txt.contains("Grand Total: 420.00 ft^2"));
        assert!(txt.contains("Grand Total w/ waste: 462.00 ft^2"));
        assert!(txt.contains("Material Takeoff:"));
        assert!(txt.contains("- Board: 462 ft^2 -> 15 sheets (4x8 (32 ft^2))"));
        assert!(txt.contains("- Resilient channel: not included"));
        assert!(txt.contains("High Parts:"));
        assert!(txt.contains("- Qualifying: 1 parts, 100.00 ft^2"));
        assert!(txt.contains("Pricing:"));
        assert!(txt.contains("- Chargeable area: 562.00 ft^2"));
        assert!(txt.contains("- Cash price (no tax):"));
    }

    #[test]
    fn test_txt_channel_line_when_included() {
        let mut job = demo_job();
        job.settings.channel.include = true;
        let txt = summary_txt(&compute(&job), &job);
        // 8 rows x 10 ft = 80 lf -> ceil(80 / 12) = 7 pcs
        assert!(txt.contains("- Resilient channel: 7 pcs (~80 lf, 12 ft pieces)"));
    }

    #[test]
    fn test_txt_mud_line_formatting() {
        let job = demo_job();
        let txt = summary_txt(&compute(&job), &job);
        // 462 ft^2 -> 4.389 gal -> "4.4 gal", 1 pail at 4.5 gal
        assert!(txt.contains("- Mud: 4.4 gal (~1 pails @ 4.5 gal)"));
    }
}
