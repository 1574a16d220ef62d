//! `810` Invoice.

use x12_segment::{format_cents, Body};
use x12_types::datetime::ccyymmdd;
use x12_types::segment;

use super::{push_party, GeneratedBody};
use crate::context::{party_id, GenContext};
use crate::error::TxnResult;
use crate::pool::{ADDRESSES, COMPANY_NAMES, PAYMENT_TERMS, PRODUCTS};

pub fn generate(count: Option<usize>, ctx: &mut GenContext<'_>) -> TxnResult<GeneratedBody> {
    let item_count = ctx.count_or(count, 2, 6);
    let invoice_number = format!("INV-{}", ctx.digits(7));
    let po_number = format!("PO-{}", ctx.digits(7));
    let age = i64::from(ctx.between(10, 30));
    let po_date = ctx.days_from_now(-age);

    let buyer = *ctx.pick("companies", COMPANY_NAMES)?;
    let seller = *ctx.pick_other("companies", COMPANY_NAMES, &buyer)?;
    let remit_to = ctx.pick("addresses", ADDRESSES)?;
    let (terms_code, _) = *ctx.pick("payment terms", PAYMENT_TERMS)?;

    let mut body = Body::new();
    body.push(segment!(
        "BIG",
        ccyymmdd(&ctx.now),
        invoice_number,
        ccyymmdd(&po_date),
        po_number
    ));
    body.push(segment!("REF", "DP", ctx.digits(4)));
    let remit_id = ctx.digits(10);
    push_party(&mut body, "RE", seller, &remit_id, remit_to);
    body.push(segment!("N1", "BY", buyer, "92", ctx.digits(10)));
    body.push(segment!("ITD", terms_code, "3", "", "", "", "", "30"));

    for (line, product) in ctx.pick_many("products", PRODUCTS, item_count)?.into_iter().enumerate() {
        let qty = i64::from(ctx.between(1, 100));
        let it1 = segment!(
            "IT1",
            line + 1,
            qty,
            product.unit,
            format_cents(product.unit_price_cents),
            "",
            "VP",
            product.sku
        );
        body.push_line(it1, qty * product.unit_price_cents);
        body.push(segment!("PID", "F", "", "", "", product.description));
    }

    // TDS01 carries an implied two-decimal amount.
    body.defer(|totals| segment!("TDS", totals.amount_cents));
    body.defer(|totals| segment!("CTT", totals.lines));

    Ok(GeneratedBody {
        segments: body.finish()?,
        sender_id: party_id(seller),
        receiver_id: party_id(buyer),
    })
}
