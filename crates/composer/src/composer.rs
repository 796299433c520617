//! Document assembly

use crate::adjust::{adjust_line, credit_totals, sum_amounts, with_vat};
use crate::config::ComposerConfig;
use crate::paginate::paginate;
use crate::schema::*;
use crate::{ComposeError, Result};
use rust_decimal::Decimal;
use thai_text::{
    format_be_date, format_be_date_short, format_thai_baht, format_thai_date_long, render_amount,
};

/// Placeholder for blank header fields
const BLANK: &str = "-";

/// Bill note number shown before the document is saved
const UNSAVED_BILL_NOTE: &str = "(ยังไม่ได้บันทึก)";

/// Credit note number shown before the document is saved
const UNSAVED_CREDIT_NOTE: &str = "—";

/// Lays out bill notes and credit notes
#[derive(Debug, Clone, Default)]
pub struct DocumentComposer {
    config: ComposerConfig,
}

impl DocumentComposer {
    /// Create a composer with the given configuration
    pub fn new(config: ComposerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ComposerConfig {
        &self.config
    }

    /// Compose a bill note: one row per invoice, summary with the invoice total
    pub fn compose_bill_note(
        &self,
        request: &BillNoteRequest,
    ) -> Result<ComposedDocument<BillNoteRow>> {
        let kind = DocumentKind::BillNote;
        let customer_id = require_context(
            kind,
            !request.invoices.is_empty(),
            request.header.as_ref(),
            request.customer_id.as_ref(),
        )?;

        let rows: Vec<BillNoteRow> = request
            .invoices
            .iter()
            .map(|inv| BillNoteRow {
                invoice_number: inv.invoice_number.trim().to_string(),
                invoice_date: format_be_date_short(inv.invoice_date),
                due_date: format_be_date_short(inv.due_date),
                amount: inv.amount,
                amount_display: self.display(inv.amount),
            })
            .collect();

        let total = sum_amounts(rows.iter().map(|r| r.amount));
        let summary = self.summarize(total, total, None, total)?;
        let pages = paginate(rows, self.config.bill_note.items_per_page);

        tracing::debug!(
            kind = ?kind,
            customer = %customer_id,
            items = request.invoices.len(),
            pages = pages.len(),
            "composed document"
        );

        Ok(ComposedDocument {
            kind,
            customer_id,
            header: header_view(kind, request.header.as_ref()),
            pages,
            summary,
            reason: None,
        })
    }

    /// Compose a credit note: rows show old and adjusted values, the summary
    /// carries the total reduction plus VAT
    pub fn compose_credit_note(
        &self,
        request: &CreditNoteRequest,
    ) -> Result<ComposedDocument<CreditNoteRow>> {
        let kind = DocumentKind::CreditNote;
        let customer_id = require_context(
            kind,
            !request.items.is_empty(),
            request.header.as_ref(),
            request.customer_id.as_ref(),
        )?;
        let vat_rate = self.config.credit_note.vat_rate;

        let rows: Vec<CreditNoteRow> = request
            .items
            .iter()
            .map(|item| {
                let line = adjust_line(&item.base_price, &item.fine, &item.quantity);
                CreditNoteRow {
                    invoice_number: item.invoice_number.trim().to_string(),
                    invoice_date: item.invoice_date.map(format_be_date).unwrap_or_default(),
                    description: item.description.trim().to_string(),
                    quantity: line.quantity,
                    unit_price: line.unit_price,
                    adjusted_unit_price: line.adjusted_unit_price,
                    old_amount: line.old_amount,
                    new_amount: line.new_amount,
                    reduction: line.reduction,
                    old_amount_with_vat: with_vat(line.old_amount, vat_rate),
                    new_amount_with_vat: with_vat(line.new_amount, vat_rate),
                    old_amount_display: self.display(line.old_amount),
                    new_amount_display: self.display(line.new_amount),
                }
            })
            .collect();

        let line_total = sum_amounts(rows.iter().map(|r| r.new_amount));
        let totals = credit_totals(rows.iter().map(|r| r.reduction), vat_rate);
        let summary = self.summarize(
            line_total,
            totals.subtotal,
            Some(totals.vat),
            totals.grand_total,
        )?;
        let pages = paginate(rows, self.config.credit_note.items_per_page);

        let reason = request
            .reason
            .as_deref()
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .unwrap_or(&self.config.credit_note.reason)
            .to_string();

        tracing::debug!(
            kind = ?kind,
            customer = %customer_id,
            items = request.items.len(),
            pages = pages.len(),
            "composed document"
        );

        Ok(ComposedDocument {
            kind,
            customer_id,
            header: header_view(kind, request.header.as_ref()),
            pages,
            summary,
            reason: Some(reason),
        })
    }

    /// Build the totals block; the grand total is spelled out in Thai
    fn summarize(
        &self,
        line_total: Decimal,
        subtotal: Decimal,
        vat: Option<Decimal>,
        grand_total: Decimal,
    ) -> Result<Summary> {
        Ok(Summary {
            line_total,
            subtotal,
            vat,
            grand_total,
            grand_total_display: self.display(grand_total),
            grand_total_text: format_thai_baht(grand_total)?,
        })
    }

    fn display(&self, amount: Decimal) -> String {
        render_amount(&self.config.amount_format, amount)
    }
}

/// Enforce the preconditions for building a document and return the customer id
fn require_context(
    kind: DocumentKind,
    has_items: bool,
    header: Option<&DocumentHeader>,
    customer_id: Option<&EntityId>,
) -> Result<EntityId> {
    if !has_items && header.is_none() {
        return Err(ComposeError::EmptyDocument);
    }

    customer_id.cloned().ok_or_else(|| {
        ComposeError::UnresolvedEntity(format!("{} requires a resolved customer", kind.title()))
    })
}

/// Header fields as printed on every page
fn header_view(kind: DocumentKind, header: Option<&DocumentHeader>) -> HeaderView {
    let customer = header.and_then(|h| h.customer.as_ref());
    let customer_field = |f: fn(&CustomerInfo) -> String| {
        customer
            .map(f)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| BLANK.to_string())
    };

    let document_number = header
        .and_then(|h| h.document_number.as_deref())
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| {
            match kind {
                DocumentKind::BillNote => UNSAVED_BILL_NOTE,
                DocumentKind::CreditNote => UNSAVED_CREDIT_NOTE,
            }
            .to_string()
        });

    let document_date = header
        .map(|h| match kind {
            DocumentKind::BillNote => format_thai_date_long(h.document_date),
            DocumentKind::CreditNote => format_be_date(h.document_date),
        })
        .unwrap_or_else(|| BLANK.to_string());

    HeaderView {
        title: kind.title().to_string(),
        document_number,
        document_date,
        person_id: customer_field(|c| c.person_id.clone()),
        customer_name: customer_field(|c| c.name.clone()),
        address: customer_field(|c| c.address.clone()),
        tax_id: customer_field(|c| c.tax_id.clone()),
        branch: customer_field(|c| c.branch.to_string()),
    }
}
