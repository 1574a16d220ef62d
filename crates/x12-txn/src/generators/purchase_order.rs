//! `850` Purchase Order.

use x12_segment::{format_cents, Body};
use x12_types::datetime::ccyymmdd;
use x12_types::segment;

use super::{push_party, GeneratedBody};
use crate::context::{party_id, GenContext};
use crate::error::TxnResult;
use crate::pool::{ADDRESSES, CARRIERS, COMPANY_NAMES, PAYMENT_TERMS, PRODUCTS};

pub fn generate(count: Option<usize>, ctx: &mut GenContext<'_>) -> TxnResult<GeneratedBody> {
    let item_count = ctx.count_or(count, 2, 6);
    let po_number = format!("PO-{}", ctx.digits(7));
    let back = i64::from(ctx.between(0, 5));
    let po_date = ctx.days_from_now(-back);
    let lead = i64::from(ctx.between(14, 45));
    let delivery_date = po_date + chrono::Duration::days(lead);

    let buyer = *ctx.pick("companies", COMPANY_NAMES)?;
    let seller = *ctx.pick_other("companies", COMPANY_NAMES, &buyer)?;
    let ship_to = ctx.pick("addresses", ADDRESSES)?;
    let bill_to = ctx.pick("addresses", ADDRESSES)?;
    let (carrier_code, carrier_name) = *ctx.pick("carriers", CARRIERS)?;
    let (terms_code, _) = *ctx.pick("payment terms", PAYMENT_TERMS)?;

    let mut body = Body::new();
    body.push(segment!("BEG", "00", "NE", &po_number, "", ccyymmdd(&po_date)));
    body.push(segment!("CUR", "BY", "USD"));
    body.push(segment!("REF", "DP", ctx.digits(4)));
    body.push(segment!(
        "PER",
        "BD",
        "PURCHASING DEPT",
        "TE",
        format!("555{}", ctx.between(1_000_000, 9_999_999))
    ));
    body.push(segment!("ITD", terms_code, "3", "", "", "", "", "30"));
    body.push(segment!("DTM", "002", ccyymmdd(&delivery_date)));
    body.push(segment!("TD5", "", "2", carrier_code, "", carrier_name));

    let ship_to_id = ctx.digits(10);
    push_party(&mut body, "ST", buyer, &ship_to_id, ship_to);
    let bill_to_id = ctx.digits(10);
    push_party(&mut body, "BT", buyer, &bill_to_id, bill_to);
    body.push(segment!("N1", "VN", seller, "92", ctx.digits(10)));

    for (line, product) in ctx.pick_many("products", PRODUCTS, item_count)?.into_iter().enumerate() {
        let qty = i64::from(ctx.between(1, 100));
        let po1 = segment!(
            "PO1",
            line + 1,
            qty,
            product.unit,
            format_cents(product.unit_price_cents),
            "PE",
            "VP",
            product.sku
        );
        body.push_line(po1, qty * product.unit_price_cents);
        body.push(segment!("PID", "F", "", "", "", product.description));
    }

    body.defer(|totals| segment!("CTT", totals.lines));
    body.defer(|totals| segment!("AMT", "TT", totals.amount_decimal()));

    Ok(GeneratedBody {
        segments: body.finish()?,
        sender_id: party_id(buyer),
        receiver_id: party_id(seller),
    })
}

#[cfg(test)]
mod tests {
    use super::super::testing::*;
    use x12_types::TransactionType;

    #[test]
    fn one_po1_and_pid_per_item() {
        let body = run(TransactionType::PurchaseOrder, Some(4), 1);
        assert_eq!(count_of(&body, "PO1"), 4);
        assert_eq!(count_of(&body, "PID"), 4);
        assert_eq!(first(&body, "CTT").get(1), Some("4"));
    }

    #[test]
    fn amount_is_sum_of_lines() {
        let body = run(TransactionType::PurchaseOrder, Some(5), 2);
        let total: i64 = body
            .segments
            .iter()
            .filter(|s| s.id() == "PO1")
            .map(|s| {
                let qty: i64 = s.get(2).unwrap().parse().unwrap();
                let price: i64 = s.get(4).unwrap().replace('.', "").parse().unwrap();
                qty * price
            })
            .sum();
        assert_eq!(first(&body, "AMT").get(2), Some(x12_segment::format_cents(total).as_str()));
    }

    #[test]
    fn totals_close_the_body() {
        let body = run(TransactionType::PurchaseOrder, None, 3);
        let ids = ids(&body);
        assert_eq!(ids[0], "BEG");
        assert_eq!(&ids[ids.len() - 2..], ["CTT", "AMT"]);
        let items = count_of(&body, "PO1");
        assert!((2..=6).contains(&items));
    }

    #[test]
    fn zero_items() {
        let body = run(TransactionType::PurchaseOrder, Some(0), 4);
        assert_eq!(count_of(&body, "PO1"), 0);
        assert_eq!(first(&body, "CTT").get(1), Some("0"));
        assert_eq!(first(&body, "AMT").get(2), Some("0.00"));
    }

    #[test]
    fn buyer_and_seller_differ() {
        let body = run(TransactionType::PurchaseOrder, None, 5);
        let n1: Vec<_> = body.segments.iter().filter(|s| s.id() == "N1").collect();
        assert_eq!(n1.len(), 3);
        assert_eq!(n1[0].get(2), n1[1].get(2));
        assert_ne!(n1[0].get(2), n1[2].get(2));
    }

    #[test]
    fn more_items_than_products_repeat() {
        let body = run(TransactionType::PurchaseOrder, Some(25), 6);
        assert_eq!(count_of(&body, "PO1"), 25);
    }
}
