//! `856` Advance Ship Notice.
//!
//! Shipment, order and item levels form a three-tier HL tree:
//! one `S`, one `O` beneath it, and one `I` per shipped product.

use x12_hl::LevelCode;
use x12_segment::Body;
use x12_types::datetime::{ccyymmdd, hhmm};
use x12_types::segment;

use super::{push_party, GeneratedBody};
use crate::context::{party_id, GenContext};
use crate::error::TxnResult;
use crate::pool::{ADDRESSES, CARRIERS, COMPANY_NAMES, PRODUCTS};

pub fn generate(count: Option<usize>, ctx: &mut GenContext<'_>) -> TxnResult<GeneratedBody> {
    let item_count = ctx.count_or(count, 2, 5);
    let shipment_id = format!("SH-{}", ctx.digits(8));
    let po_number = format!("PO-{}", ctx.digits(7));
    let ship_date = ctx.now;

    let shipper = *ctx.pick("companies", COMPANY_NAMES)?;
    let receiver = *ctx.pick_other("companies", COMPANY_NAMES, &shipper)?;
    let ship_from = ctx.pick("addresses", ADDRESSES)?;
    let ship_to = ctx.pick_other("addresses", ADDRESSES, ship_from)?;
    let (carrier_code, carrier_name) = *ctx.pick("carriers", CARRIERS)?;

    let mut body = Body::new();
    body.push(segment!(
        "BSN",
        "00",
        &shipment_id,
        ccyymmdd(&ship_date),
        hhmm(&ship_date),
        "0001"
    ));

    let shipment = body.open_level(None, LevelCode::Shipment)?;
    let weight_tenths = ctx.between(100, 5000);
    body.push(segment!(
        "TD1",
        "CTN25",
        item_count,
        "",
        "",
        "",
        "G",
        format!("{}.{}", weight_tenths / 10, weight_tenths % 10),
        "LB"
    ));
    body.push(segment!("TD5", "", "2", carrier_code, "", carrier_name));
    body.push(segment!("TD3", "TL", "", ctx.alnum(8)));
    body.push(segment!("REF", "BM", &shipment_id));
    body.push(segment!("REF", "CN", format!("1Z{}", ctx.digits(16))));
    body.push(segment!("DTM", "011", ccyymmdd(&ship_date)));
    let from_id = ctx.digits(10);
    push_party(&mut body, "SH", shipper, &from_id, ship_from);
    let to_id = ctx.digits(10);
    push_party(&mut body, "ST", receiver, &to_id, ship_to);

    let order = body.open_level(Some(shipment), LevelCode::Order)?;
    body.push(segment!("PRF", po_number));

    for (line, product) in ctx.pick_many("products", PRODUCTS, item_count)?.into_iter().enumerate() {
        body.open_level(Some(order), LevelCode::Item)?;
        body.push(segment!("LIN", line + 1, "VP", product.sku));
        body.push_line(
            segment!("SN1", line + 1, ctx.between(1, 50), product.unit),
            0,
        );
        body.push(segment!("PID", "F", "", "", "", product.description));
    }

    // CTT01 counts HL levels in a ship notice, not line items.
    body.defer(|totals| segment!("CTT", totals.hl_levels));

    Ok(GeneratedBody {
        segments: body.finish()?,
        sender_id: party_id(shipper),
        receiver_id: party_id(receiver),
    })
}
