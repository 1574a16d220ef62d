//! `835` Health Care Claim Payment/Advice (`005010X221A1`).
//!
//! `BPR02` is the total actually paid across every claim, which is only known
//! after the claims are generated, so it is pushed as a deferred segment.
//! Each service line balances: paid plus the contractual adjustment equals
//! the charge.

use x12_segment::{format_cents, Body};
use x12_types::datetime::ccyymmdd;
use x12_types::segment;

use super::{push_address, GeneratedBody, Member};
use crate::context::{party_id, GenContext};
use crate::error::TxnResult;
use crate::pool::{ADDRESSES, PROCEDURES, PROVIDERS};

pub fn generate(count: Option<usize>, ctx: &mut GenContext<'_>) -> TxnResult<GeneratedBody> {
    let claim_count = ctx.count_or(count, 1, 5);
    let delimiters = ctx.delimiters;

    let pool = ctx.pool;
    let payer = ctx.pick("payers", pool.payers())?;
    let payer_address = ctx.pick("addresses", ADDRESSES)?;
    let provider = ctx.pick("providers", PROVIDERS)?;
    let provider_address = ctx.pick_other("addresses", ADDRESSES, payer_address)?;

    let payer_tin = format!("1{}", ctx.digits(9));
    let check_number = ctx.digits(10);
    let payment_date = ccyymmdd(&ctx.now);
    let sender_account = ctx.digits(10);
    let receiver_account = ctx.digits(10);

    let mut body = Body::new();
    {
        let payer_tin = payer_tin.clone();
        let payment_date = payment_date.clone();
        body.defer(move |totals| {
            segment!(
                "BPR",
                "I",
                totals.amount_decimal(),
                "C",
                "ACH",
                "CCP",
                "01",
                "011000015",
                "DA",
                sender_account,
                payer_tin,
                "",
                "01",
                "021000021",
                "DA",
                receiver_account,
                payment_date
            )
        });
    }
    body.push(segment!("TRN", "1", &check_number, &payer_tin));
    body.push(segment!("DTM", "405", &payment_date));

    body.push(segment!("N1", "PR", payer.name));
    push_address(&mut body, payer_address);
    body.push(segment!("REF", "2U", payer.payer_id));
    body.push(segment!("N1", "PE", provider.name, "XX", provider.npi));
    push_address(&mut body, provider_address);
    body.push(segment!("REF", "TJ", ctx.digits(9)));

    let filing_code = payer.line_of_business.claim_filing_code();
    body.push(segment!("LX", "1"));
    for _ in 0..claim_count {
        let member = Member::draw(ctx)?;
        let line_count = ctx.between(1, 3) as usize;
        let mut lines = Vec::with_capacity(line_count);
        for procedure in ctx.pick_many("procedures", PROCEDURES, line_count)? {
            let charge = procedure.charge_cents;
            let paid = charge * i64::from(ctx.between(60, 100)) / 100;
            lines.push((procedure, charge, paid));
        }
        let charged: i64 = lines.iter().map(|(_, charge, _)| charge).sum();
        let paid: i64 = lines.iter().map(|(_, _, paid)| paid).sum();

        body.push(segment!(
            "CLP",
            format!("CLM{}", ctx.digits(8)),
            "1",
            format_cents(charged),
            format_cents(paid),
            "0.00",
            filing_code,
            ctx.digits(12),
            "11",
            "1"
        ));
        body.push(segment!(
            "NM1", "QC", "1", member.last, member.first, "", "", "", "MI", &member.member_id
        ));
        let back = i64::from(ctx.between(5, 40));
        let service_date = ctx.days_from_now(-back);
        body.push(segment!("DTM", "232", ccyymmdd(&service_date)));

        for (procedure, charge, line_paid) in lines {
            body.push_line(
                segment!(
                    "SVC",
                    delimiters.composite(&["HC", procedure.code]),
                    format_cents(charge),
                    format_cents(line_paid),
                    "",
                    "1"
                ),
                line_paid,
            );
            body.push(segment!("DTM", "472", ccyymmdd(&service_date)));
            if charge > line_paid {
                body.push(segment!("CAS", "CO", "45", format_cents(charge - line_paid)));
            }
        }
    }

    Ok(GeneratedBody {
        segments: body.finish()?,
        sender_id: party_id(payer.name),
        receiver_id: party_id(provider.name),
    })
}

#[cfg(test)]
mod tests {
    use super::super::testing::*;
    use x12_types::TransactionType;

    fn cents(value: &str) -> i64 {
        value.replace('.', "").parse().unwrap()
    }

    #[test]
    fn bpr_comes_first_and_sums_paid_lines() {
        for seed in 0..10 {
            let body = run(TransactionType::ClaimPayment, None, seed);
            assert_eq!(body.segments[0].id(), "BPR");
            let paid: i64 = body
                .segments
                .iter()
                .filter(|s| s.id() == "SVC")
                .map(|s| cents(s.get(3).unwrap()))
                .sum();
            assert_eq!(cents(body.segments[0].get(2).unwrap()), paid);
        }
    }

    #[test]
    fn clp_totals_match_service_lines() {
        let body = run(TransactionType::ClaimPayment, Some(1), 41);
        let clp = first(&body, "CLP");
        let svc: Vec<_> = body.segments.iter().filter(|s| s.id() == "SVC").collect();
        let charged: i64 = svc.iter().map(|s| cents(s.get(2).unwrap())).sum();
        let paid: i64 = svc.iter().map(|s| cents(s.get(3).unwrap())).sum();
        assert_eq!(cents(clp.get(3).unwrap()), charged);
        assert_eq!(cents(clp.get(4).unwrap()), paid);
    }

    #[test]
    fn service_lines_balance() {
        let body = run(TransactionType::ClaimPayment, Some(5), 42);
        let segs = &body.segments;
        for (i, seg) in segs.iter().enumerate().filter(|(_, s)| s.id() == "SVC") {
            let charge = cents(seg.get(2).unwrap());
            let paid = cents(seg.get(3).unwrap());
            let adjustment = segs[i + 1..]
                .iter()
                .take_while(|s| s.id() != "SVC" && s.id() != "CLP")
                .find(|s| s.id() == "CAS")
                .map(|s| cents(s.get(3).unwrap()))
                .unwrap_or(0);
            assert_eq!(paid + adjustment, charge);
        }
    }

    #[test]
    fn zero_claims_pays_nothing() {
        let body = run(TransactionType::ClaimPayment, Some(0), 43);
        assert_eq!(count_of(&body, "CLP"), 0);
        assert_eq!(first(&body, "BPR").get(2), Some("0.00"));
    }

    #[test]
    fn payer_sends_to_provider() {
        let body = run(TransactionType::ClaimPayment, None, 44);
        let payer = first(&body, "N1");
        assert_eq!(payer.get(1), Some("PR"));
        assert!(payer.get(2).unwrap().replace(' ', "").starts_with(&body.sender_id));
    }
}
