//! Plain-text rendering of rooms, bills, and audit results.

use hotelier_billing::{AuditIssue, Bill, BillSection};
use hotelier_core::Room;
use std::fmt::Write;

/// Render the room inventory as an aligned table.
#[must_use]
pub fn render_rooms(rooms: &[Room]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:<8} {:<8} {:<10} {:>12}", "Room", "Type", "Status", "Price/Night");
    for room in rooms {
        let _ = writeln!(
            out,
            "{:<8} {:<8} {:<10} {:>12}",
            room.number,
            room.room_type,
            room.status,
            format!("\u{20b9}{}", room.price_per_night),
        );
    }
    out
}

/// Render an itemized bill.
///
/// Categories with nothing to show are suppressed; warnings from degraded
/// ledger reads are printed after the total.
#[must_use]
pub fn render_bill(bill: &Bill) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Bill for {}", bill.guest);
    if let Some(room) = &bill.room_number {
        let _ = writeln!(out, "Room: {room}");
    }
    let _ = writeln!(out, "{}", "=".repeat(44));
    let _ = writeln!(out, "BILL SUMMARY");
    let _ = writeln!(out, "{}", "=".repeat(44));

    section(&mut out, "Room Charges", &bill.room);
    section(&mut out, "Food Orders", &bill.food);
    section(&mut out, "Services", &bill.services);
    section(&mut out, "Housekeeping", &bill.housekeeping);

    let _ = writeln!(out, "{}", "=".repeat(44));
    let _ = writeln!(out, "GRAND TOTAL: \u{20b9}{}", bill.grand_total);
    for warning in &bill.warnings {
        let _ = writeln!(out, "warning: {warning}");
    }
    out
}

fn section(out: &mut String, title: &str, section: &BillSection) {
    if section.is_zero() {
        return;
    }
    let _ = writeln!(out, "{title}:");
    for line in &section.lines {
        let _ = writeln!(
            out,
            "  {:<32} {:>9}",
            line.description,
            format!("\u{20b9}{}", line.amount)
        );
    }
    let _ = writeln!(out, "  {:<32} {:>9}", "Subtotal", format!("\u{20b9}{}", section.total));
}

/// Render audit findings, one per line, followed by a summary.
#[must_use]
pub fn render_audit(issues: &[AuditIssue]) -> String {
    let mut out = String::new();
    for issue in issues {
        let severity = if issue.code.is_warning() {
            "warning"
        } else {
            "error"
        };
        let _ = writeln!(out, "{severity}[{}]: {}", issue.code, issue.message);
    }

    let errors = issues.iter().filter(|i| !i.code.is_warning()).count();
    let warnings = issues.len() - errors;
    if errors == 0 && warnings == 0 {
        let _ = writeln!(out, "\u{2713} No inconsistencies found");
    } else {
        let _ = writeln!(out, "\u{2717} {errors} error(s), {warnings} warning(s)");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use hotelier_billing::{compute_bill, ChargeSource};
    use hotelier_core::{timestamp, GuestId, Occupancy, OrderCharge, RoomType};
    use rust_decimal_macros::dec;

    fn sample_bill() -> Bill {
        let guest = GuestId::new("Ann", "P1");
        let stay = Occupancy::new(
            &guest,
            "101",
            RoomType::Normal,
            2,
            dec!(1000),
            "",
            timestamp::now(),
        );
        let food = vec![OrderCharge::new(
            &guest,
            "101",
            "Pizza",
            1,
            dec!(450),
            timestamp::now(),
        )];
        compute_bill(
            &guest,
            Some(&stay),
            &ChargeSource::available(food),
            &ChargeSource::available(vec![]),
            &ChargeSource::available(vec![]),
        )
    }

    #[test]
    fn test_zero_sections_are_suppressed() {
        let rendered = render_bill(&sample_bill());
        assert!(rendered.contains("Room Charges:"));
        assert!(rendered.contains("Food Orders:"));
        assert!(!rendered.contains("Services:"));
        assert!(!rendered.contains("Housekeeping:"));
        assert!(rendered.contains("GRAND TOTAL: \u{20b9}2450"));
    }

    #[test]
    fn test_audit_summary_line() {
        assert!(render_audit(&[]).contains("No inconsistencies found"));
    }
}
