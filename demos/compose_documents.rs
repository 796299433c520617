//! Compose a sample bill note and credit note and print them
//!
//! ```text
//! RUST_LOG=composer=debug cargo run -p composer --example compose_documents
//! ```

use composer::{
    parse_bill_note_request, parse_credit_note_request, resolve, DocumentComposer, EntitySchema,
};
use tracing_subscriber::EnvFilter;

const CUSTOMERS: &str = r#"[
    { "idx": 41, "personid": "PC0041", "customer_name": "หจก. ทองดี" },
    { "idx": 42, "personid": "PC0042", "customer_name": "บริษัท สมบูรณ์ จำกัด" }
]"#;

const BILL_NOTE: &str = r#"{
    "header": {
        "document_date": "2025-01-22",
        "customer": {
            "person_id": "PC0042",
            "name": "บริษัท สมบูรณ์ จำกัด",
            "address": "99 ถ.พหลโยธิน กรุงเทพฯ",
            "tax_id": "0105555000123",
            "branch": "head_office"
        }
    },
    "invoices": [
        { "invoice_number": "IV6801-001", "invoice_date": "2025-01-05", "due_date": "2025-02-04", "amount": "12500.00" },
        { "invoice_number": "IV6801-002", "invoice_date": "2025-01-09", "due_date": "2025-02-08", "amount": "8421.75" },
        { "invoice_number": "IV6801-003", "invoice_date": "2025-01-15", "due_date": "2025-02-14", "amount": "1021.01" }
    ]
}"#;

const CREDIT_NOTE: &str = r#"{
    "header": { "document_number": "CN6801-0003", "document_date": "2025-01-25" },
    "items": [
        { "invoice_number": "IV6801-001", "invoice_date": "2025-01-05",
          "cf_itemname": "ข้าวโพดเลี้ยงสัตว์", "base_price": "9.80", "fine": "0.35", "quantity": "1250" },
        { "invoice_number": "IV6801-002", "invoice_date": "2025-01-09",
          "cf_itemname": "มันสำปะหลัง", "base_price": "3.10", "fine": "", "quantity": "2000" }
    ]
}"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let customers = EntitySchema::customers().load_str(CUSTOMERS)?;
    let customer = resolve("PC0042|บริษัท สมบูรณ์ จำกัด", &customers);
    tracing::info!(
        label = %customer.canonical_label,
        resolved = customer.is_resolved(),
        "customer search box"
    );

    let composer = DocumentComposer::default();

    let mut bill_note = parse_bill_note_request(BILL_NOTE)?;
    bill_note.customer_id = customer.resolved_id.clone();
    let document = composer.compose_bill_note(&bill_note)?;

    println!("{} {}", document.header.title, document.header.document_number);
    for page in &document.pages {
        println!("-- page {}", page.label());
        for row in &page.items {
            println!(
                "{:>3}  {}  {}  {}  {:>12}",
                row.seq,
                row.item.invoice_number,
                row.item.invoice_date,
                row.item.due_date,
                row.item.amount_display
            );
        }
    }
    println!(
        "รวม {} ({})",
        document.summary.grand_total_display, document.summary.grand_total_text
    );

    let mut credit_note = parse_credit_note_request(CREDIT_NOTE)?;
    credit_note.customer_id = customer.resolved_id;
    let document = composer.compose_credit_note(&credit_note)?;

    println!();
    println!("{} {}", document.header.title, document.header.document_number);
    for row in document.pages.iter().flat_map(|p| &p.items) {
        println!(
            "{:>3}  {}  {}  {:>12} -> {:>12}",
            row.seq,
            row.item.invoice_number,
            row.item.description,
            row.item.old_amount_display,
            row.item.new_amount_display
        );
    }
    println!("{}", serde_json::to_string_pretty(&document.summary)?);

    Ok(())
}
