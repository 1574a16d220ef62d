//! `997` Functional Acknowledgment of a previously received purchase order,
//! invoice or ship notice.

use x12_envelope::{ControlNumbers, EnvelopeSpec};
use x12_segment::Body;
use x12_types::{segment, TransactionType};

use super::GeneratedBody;
use crate::context::{party_id, GenContext};
use crate::error::TxnResult;
use crate::pool::COMPANY_NAMES;

/// Transaction types a generated 997 may acknowledge.
pub const ACKNOWLEDGEABLE: [TransactionType; 3] = [
    TransactionType::PurchaseOrder,
    TransactionType::Invoice,
    TransactionType::ShipNotice,
];

/// `AK501` codes; accepted three times as often as accepted-with-errors.
const ACK_CODES: [&str; 4] = ["A", "A", "A", "E"];

pub fn generate(ctx: &mut GenContext<'_>) -> TxnResult<GeneratedBody> {
    let original = ControlNumbers::generate(&mut *ctx.rng);
    let acknowledged = EnvelopeSpec::for_type(*ctx.pick("acknowledged types", &ACKNOWLEDGEABLE)?);
    let status = *ctx.pick("ack codes", &ACK_CODES)?;

    let sender = *ctx.pick("companies", COMPANY_NAMES)?;
    let receiver = *ctx.pick_other("companies", COMPANY_NAMES, &sender)?;

    let mut body = Body::new();
    body.push(segment!("AK1", acknowledged.functional_id, original.group));
    body.push(segment!("AK2", acknowledged.set_id, original.transaction_set));
    body.push(segment!("AK5", status));
    // The group as a whole is always accepted; only AK5 carries errors.
    body.push(segment!("AK9", "A", "1", "1", "1"));

    Ok(GeneratedBody {
        segments: body.finish()?,
        sender_id: party_id(sender),
        receiver_id: party_id(receiver),
    })
}
