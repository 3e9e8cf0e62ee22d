//! Backend routing table: every operation maps onto one of these paths.

pub(crate) const CERTIFICATES: &str = "certificates";
pub(crate) const INVOICES: &str = "invoice-customers";
pub(crate) const INVOICE_CALCULATE: &str = "invoice-customers/calculate";
pub(crate) const INVOICE_IMPORT: &str = "invoices/import";
pub(crate) const PRINT_SEFAZ: &str = "tools/printSefaz";

pub(crate) fn invoice(id: u64) -> String {
    format!("{INVOICES}/{id}")
}

pub(crate) fn invoice_danfce(id: u64) -> String {
    format!("{INVOICES}/{id}/danfce")
}

pub(crate) fn invoice_xml(id: u64) -> String {
    format!("{INVOICES}/{id}/xml")
}

pub(crate) fn invoice_cancel(id: u64) -> String {
    format!("{INVOICES}/{id}/cancel")
}

pub(crate) fn invoice_cancel_pdf(id: u64) -> String {
    format!("{INVOICES}/{id}/cancel/pdf")
}
