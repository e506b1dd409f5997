//! # Receipt Renderer
//!
//! Pure transform from a submitted sale to a printable HTML document.
//!
//! ## Rendering Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  Receipt - S-000123                       ← header: sale number     │
//! │  Date: 2024-05-04 14:32:10                ← header: timestamp       │
//! │  ┌──────────────┬─────┬───────┬─────────┐                           │
//! │  │ Product      │ Qty │ Unit  │ Total   │ ← ordered item table,     │
//! │  │ Coca-Cola    │  2  │ 10.00 │ 20.00   │   server-confirmed        │
//! │  │ Bread        │  1  │  5.00 │  4.00   │   totalPrice per line     │
//! │  └──────────────┴─────┴───────┴─────────┘                           │
//! │  Subtotal / Tax / Total                   ← footer totals           │
//! │  Cash Received / Change                                             │
//! │  Thank you for your purchase.                                       │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Line totals come from each item's server-confirmed `total_price`, never
//! a client recomputation; the backend's arithmetic is authoritative once
//! a sale exists. An empty item list still renders a syntactically valid
//! (visually empty) table.
//!
//! Rendering is pure. Opening the print surface and triggering the
//! platform print action is champ-shell's job.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::SubmittedSale;

// =============================================================================
// Receipt Totals
// =============================================================================

/// Footer figures for the receipt, captured from the draft at submit time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ReceiptTotals {
    pub subtotal: Money,
    pub tax: Money,
    pub total: Money,
    pub cash_received: Money,
    pub change: Money,
}

// =============================================================================
// Rendering
// =============================================================================

/// Renders a submitted sale as a standalone printable HTML document.
pub fn render_receipt(sale: &SubmittedSale, totals: &ReceiptTotals) -> String {
    let mut rows = String::new();
    for item in &sale.items {
        rows.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            escape_html(&item.product.name),
            item.quantity,
            decimal(item.unit_price()),
            decimal(item.total_price()),
        ));
    }

    format!(
        concat!(
            "<!doctype html><html><head><title>Receipt</title>",
            "<style>body{{font-family:Arial,Helvetica,sans-serif;padding:20px}}",
            "table{{width:100%;border-collapse:collapse}}",
            "td,th{{padding:6px;border-bottom:1px solid #ddd}}</style></head><body>",
            "<h2>Receipt - {sale_number}</h2>",
            "<p>Date: {date}</p>",
            "<table><thead><tr><th>Product</th><th>Qty</th><th>Unit</th>",
            "<th>Total (CFA)</th></tr></thead><tbody>{rows}</tbody></table>",
            "<p>Subtotal: CFA {subtotal}</p>",
            "<p>Tax: CFA {tax}</p>",
            "<p><strong>Total: CFA {total}</strong></p>",
            "<p>Cash Received: CFA {cash_received}</p>",
            "<p>Change: CFA {change}</p>",
            "<p>Thank you for your purchase.</p>",
            "</body></html>"
        ),
        sale_number = escape_html(&sale.sale_number),
        date = sale.created_at.format("%Y-%m-%d %H:%M:%S"),
        rows = rows,
        subtotal = decimal(totals.subtotal),
        tax = decimal(totals.tax),
        total = decimal(totals.total),
        cash_received = decimal(totals.cash_received),
        change = decimal(totals.change),
    )
}

/// Bare two-decimal amount for table cells and footer lines
/// (the `CFA` prefix is part of the surrounding markup).
fn decimal(amount: Money) -> String {
    let sign = if amount.is_negative() { "-" } else { "" };
    format!("{}{}.{:02}", sign, amount.major().abs(), amount.minor())
}

/// Minimal HTML escaping for text interpolated into the document.
fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{
        PaymentDetails, PaymentMethod, ProductSnapshot, SaleStatus, SubmittedItem,
    };
    use chrono::{TimeZone, Utc};

    fn sample_sale() -> SubmittedSale {
        SubmittedSale {
            id: "65a1".into(),
            sale_number: "S-000123".into(),
            created_at: Utc.with_ymd_and_hms(2024, 5, 4, 14, 32, 10).unwrap(),
            items: vec![
                SubmittedItem {
                    product: ProductSnapshot {
                        id: "p1".into(),
                        name: "Coca-Cola 330ml".into(),
                    },
                    quantity: 2,
                    unit_price_cents: 1000,
                    total_price_cents: 2000,
                },
                SubmittedItem {
                    product: ProductSnapshot {
                        id: "p2".into(),
                        name: "Bread & Butter".into(),
                    },
                    quantity: 1,
                    unit_price_cents: 500,
                    total_price_cents: 400,
                },
            ],
            subtotal_cents: 2400,
            tax_cents: 200,
            total_cents: 2600,
            payment_method: PaymentMethod::Cash,
            payment_details: PaymentDetails {
                cash_received_cents: Some(3000),
                change_cents: Some(400),
            },
            status: SaleStatus::Completed,
        }
    }

    fn sample_totals() -> ReceiptTotals {
        ReceiptTotals {
            subtotal: Money::from_cents(2400),
            tax: Money::from_cents(200),
            total: Money::from_cents(2600),
            cash_received: Money::from_cents(3000),
            change: Money::from_cents(400),
        }
    }

    #[test]
    fn test_header_has_sale_number_and_date() {
        let html = render_receipt(&sample_sale(), &sample_totals());
        assert!(html.contains("<h2>Receipt - S-000123</h2>"));
        assert!(html.contains("<p>Date: 2024-05-04 14:32:10</p>"));
    }

    #[test]
    fn test_items_use_server_confirmed_totals() {
        let html = render_receipt(&sample_sale(), &sample_totals());
        // Second line: server says 4.00 even though 1 × 5.00 would be 5.00
        assert!(html.contains("<td>1</td><td>5.00</td><td>4.00</td>"));
    }

    #[test]
    fn test_item_order_preserved() {
        let html = render_receipt(&sample_sale(), &sample_totals());
        let first = html.find("Coca-Cola 330ml").unwrap();
        let second = html.find("Bread &amp; Butter").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_footer_totals() {
        let html = render_receipt(&sample_sale(), &sample_totals());
        assert!(html.contains("<p>Subtotal: CFA 24.00</p>"));
        assert!(html.contains("<p>Tax: CFA 2.00</p>"));
        assert!(html.contains("<strong>Total: CFA 26.00</strong>"));
        assert!(html.contains("<p>Cash Received: CFA 30.00</p>"));
        assert!(html.contains("<p>Change: CFA 4.00</p>"));
    }

    #[test]
    fn test_empty_items_still_valid_table() {
        let mut sale = sample_sale();
        sale.items.clear();
        let html = render_receipt(&sale, &sample_totals());
        assert!(html.contains("<tbody></tbody>"));
        assert!(html.contains("</table>"));
    }

    #[test]
    fn test_product_names_are_escaped() {
        let mut sale = sample_sale();
        sale.items[0].product.name = "<script>alert(1)</script>".into();
        let html = render_receipt(&sale, &sample_totals());
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
