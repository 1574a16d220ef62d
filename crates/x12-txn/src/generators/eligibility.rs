//! `270` Eligibility, Coverage or Benefit Inquiry (`005010X279A1`).

use x12_hl::LevelCode;
use x12_segment::Body;
use x12_types::datetime::{ccyymmdd, hhmm};
use x12_types::segment;

use super::{GeneratedBody, Member};
use crate::context::{party_id, GenContext};
use crate::error::TxnResult;
use crate::pool::PROVIDERS;

/// `EQ01` service type codes.
const SERVICE_TYPES: [&str; 4] = ["30", "1", "33", "98"];

pub fn generate(count: Option<usize>, ctx: &mut GenContext<'_>) -> TxnResult<GeneratedBody> {
    let subscriber_count = ctx.count_or(count, 1, 3);

    let pool = ctx.pool;
    let payer = ctx.pick("payers", pool.payers())?;
    let provider = ctx.pick("providers", PROVIDERS)?;

    let mut body = Body::new();
    body.push(segment!(
        "BHT",
        "0022",
        "13",
        ctx.alnum(10),
        ccyymmdd(&ctx.now),
        hhmm(&ctx.now)
    ));

    let source = body.open_level(None, LevelCode::InformationSource)?;
    body.push(segment!("NM1", "PR", "2", payer.name, "", "", "", "", "PI", payer.payer_id));

    let receiver = body.open_level(Some(source), LevelCode::InformationReceiver)?;
    body.push(segment!("NM1", "1P", "2", provider.name, "", "", "", "", "XX", provider.npi));

    let trace_origin = format!("9{}", ctx.digits(9));
    for _ in 0..subscriber_count {
        let member = Member::draw(ctx)?;
        body.open_level(Some(receiver), LevelCode::Subscriber)?;
        body.push(segment!("TRN", "1", ctx.digits(12), &trace_origin));
        body.push(member.name_segment());
        body.push(member.demographics());
        body.push(segment!("DTP", "291", "D8", ccyymmdd(&ctx.now)));
        body.push(segment!("EQ", *ctx.pick("service types", &SERVICE_TYPES)?));
    }

    Ok(GeneratedBody {
        segments: body.finish()?,
        sender_id: party_id(provider.name),
        receiver_id: party_id(payer.name),
    })
}
