//! `837` Health Care Claim: Professional (`005010X222A1`).
//!
//! One billing-provider level (`20`) with a subscriber level (`22`) beneath it
//! per insured member. Claims hang off their subscriber without levels of
//! their own, so the count hint is spread round-robin over the subscribers.

use x12_hl::LevelCode;
use x12_segment::{format_cents, Body};
use x12_types::datetime::{ccyymmdd, hhmm};
use x12_types::segment;

use super::{push_address, GeneratedBody, Member};
use crate::context::{party_id, GenContext};
use crate::error::TxnResult;
use crate::pool::{ADDRESSES, DIAGNOSES, PLACES_OF_SERVICE, PROCEDURES, PROVIDERS};

/// Claims assigned to subscriber `index` of `subscribers` when `claims` are
/// dealt round-robin.
fn claims_for(index: usize, subscribers: usize, claims: usize) -> usize {
    claims / subscribers + usize::from(index < claims % subscribers)
}

pub fn generate(count: Option<usize>, ctx: &mut GenContext<'_>) -> TxnResult<GeneratedBody> {
    let claim_count = ctx.count_or(count, 1, 4);
    let subscriber_count = match claim_count {
        0 => 1,
        n => (ctx.between(1, 3) as usize).min(n),
    };

    let pool = ctx.pool;
    let payer = ctx.pick("payers", pool.payers())?;
    let provider = ctx.pick("providers", PROVIDERS)?;
    let provider_address = ctx.pick("addresses", ADDRESSES)?;
    let tax_id = ctx.digits(9);

    let mut body = Body::new();
    body.push(segment!(
        "BHT",
        "0019",
        "00",
        ctx.alnum(10),
        ccyymmdd(&ctx.now),
        hhmm(&ctx.now),
        "CH"
    ));
    body.push(segment!("NM1", "41", "2", provider.name, "", "", "", "", "46", &tax_id));
    body.push(segment!(
        "PER",
        "IC",
        "BILLING OFFICE",
        "TE",
        format!("555{}", ctx.digits(7))
    ));
    body.push(segment!("NM1", "40", "2", payer.name, "", "", "", "", "46", payer.payer_id));

    let billing = body.open_level(None, LevelCode::InformationSource)?;
    body.push(segment!("PRV", "BI", "PXC", provider.taxonomy));
    body.push(segment!("NM1", "85", "2", provider.name, "", "", "", "", "XX", provider.npi));
    push_address(&mut body, provider_address);
    body.push(segment!("REF", "EI", &tax_id));

    let filing_code = payer.line_of_business.claim_filing_code();
    for index in 0..subscriber_count {
        let member = Member::draw(ctx)?;
        body.open_level(Some(billing), LevelCode::Subscriber)?;
        body.push(segment!("SBR", "P", "18", ctx.alnum(8), "", "", "", "", "", filing_code));
        body.push(member.name_segment());
        push_address(&mut body, member.address);
        body.push(member.demographics());
        body.push(segment!("NM1", "PR", "2", payer.name, "", "", "", "", "PI", payer.payer_id));

        for _ in 0..claims_for(index, subscriber_count, claim_count) {
            push_claim(&mut body, ctx)?;
        }
    }

    Ok(GeneratedBody {
        segments: body.finish()?,
        sender_id: party_id(provider.name),
        receiver_id: party_id(payer.name),
    })
}

fn push_claim(body: &mut Body, ctx: &mut GenContext<'_>) -> TxnResult<()> {
    let delimiters = ctx.delimiters;
    let claim_id = format!("CLM{}", ctx.digits(8));
    let (place, _) = *ctx.pick("places of service", PLACES_OF_SERVICE)?;
    let line_count = ctx.between(1, 3) as usize;
    let mut lines = Vec::with_capacity(line_count);
    for procedure in ctx.pick_many("procedures", PROCEDURES, line_count)? {
        let units = i64::from(ctx.between(1, 2));
        let back = i64::from(ctx.between(1, 30));
        lines.push((procedure, units, procedure.charge_cents * units, ctx.days_from_now(-back)));
    }
    let claim_total: i64 = lines.iter().map(|(_, _, charge, _)| charge).sum();

    body.push(segment!(
        "CLM",
        claim_id,
        format_cents(claim_total),
        "",
        "",
        delimiters.composite(&[place, "B", "1"]),
        "Y",
        "A",
        "Y",
        "Y"
    ));

    let diagnosis_count = ctx.between(1, 3) as usize;
    let diagnoses = ctx.pick_many("diagnoses", DIAGNOSES, diagnosis_count)?;
    let mut hi = segment!("HI");
    for (i, code) in diagnoses.into_iter().enumerate() {
        let qualifier = if i == 0 { "ABK" } else { "ABF" };
        hi.push(delimiters.composite(&[qualifier, *code]));
    }
    body.push(hi);

    for (n, (procedure, units, charge, service_date)) in lines.into_iter().enumerate() {
        body.push(segment!("LX", n + 1));
        body.push_line(
            segment!(
                "SV1",
                delimiters.composite(&["HC", procedure.code]),
                format_cents(charge),
                "UN",
                units,
                "",
                "",
                "1"
            ),
            charge,
        );
        body.push(segment!("DTP", "472", "D8", ccyymmdd(&service_date)));
    }
    Ok(())
}
