//! One body generator per transaction type.
//!
//! Every generator has the same shape: it takes an optional count hint and a
//! [`GenContext`] and returns the ordered body segments together with the two
//! interchange party identifiers.

pub mod claim_payment;
pub mod eligibility;
pub mod functional_ack;
pub mod invoice;
pub mod professional_claim;
pub mod purchase_order;
pub mod ship_notice;

use chrono::NaiveDateTime;
use serde::Serialize;
use tracing::debug;

use x12_segment::Body;
use x12_types::datetime::ccyymmdd;
use x12_types::{segment, Segment, TransactionType};

use crate::context::GenContext;
use crate::error::TxnResult;
use crate::pool::{Address, ADDRESSES, FIRST_NAMES, LAST_NAMES};

/// A transaction-set body ready for enveloping.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GeneratedBody {
    pub segments: Vec<Segment>,
    /// `ISA06` / `GS02` party.
    pub sender_id: String,
    /// `ISA08` / `GS03` party.
    pub receiver_id: String,
}

/// Produce the body for `transaction`.
///
/// `count` fixes the number of repeating items (line items, claims or
/// subscribers, depending on the type); `None` lets the generator pick from
/// its default range. The functional acknowledgment ignores it.
pub fn generate_body(
    transaction: TransactionType,
    count: Option<usize>,
    ctx: &mut GenContext<'_>,
) -> TxnResult<GeneratedBody> {
    let body = match transaction {
        TransactionType::PurchaseOrder => purchase_order::generate(count, ctx),
        TransactionType::Invoice => invoice::generate(count, ctx),
        TransactionType::ShipNotice => ship_notice::generate(count, ctx),
        TransactionType::FunctionalAck => functional_ack::generate(ctx),
        TransactionType::ProfessionalClaim => professional_claim::generate(count, ctx),
        TransactionType::ClaimPayment => claim_payment::generate(count, ctx),
        TransactionType::EligibilityInquiry => eligibility::generate(count, ctx),
    }?;
    debug!(
        transaction = %transaction,
        segments = body.segments.len(),
        sender = %body.sender_id,
        receiver = %body.receiver_id,
        "generated body"
    );
    Ok(body)
}

/// `N1`/`N3`/`N4` party loop with an assigned-by-buyer identifier.
pub(crate) fn push_party(body: &mut Body, entity: &str, name: &str, id: &str, address: &Address) {
    body.push(segment!("N1", entity, name, "92", id));
    push_address(body, address);
}

pub(crate) fn push_address(body: &mut Body, address: &Address) {
    body.push(segment!("N3", address.street));
    body.push(segment!(
        "N4",
        address.city,
        address.state,
        address.postal_code,
        "US"
    ));
}

/// A randomly drawn insured person.
pub(crate) struct Member {
    pub first: &'static str,
    pub last: &'static str,
    pub member_id: String,
    pub birth_date: NaiveDateTime,
    pub gender: &'static str,
    pub address: &'static Address,
}

impl Member {
    pub fn draw(ctx: &mut GenContext<'_>) -> TxnResult<Self> {
        let first = *ctx.pick("first names", FIRST_NAMES)?;
        let last = *ctx.pick("last names", LAST_NAMES)?;
        let member_id = format!("{}{}", ctx.alnum(3), ctx.digits(9));
        let age_days = i64::from(ctx.between(18 * 365, 85 * 365));
        let birth_date = ctx.days_from_now(-age_days);
        let gender = *ctx.pick("genders", &["F", "M"])?;
        let address = ctx.pick("addresses", ADDRESSES)?;
        Ok(Self {
            first,
            last,
            member_id,
            birth_date,
            gender,
            address,
        })
    }

    /// `NM1*IL` subscriber name.
    pub fn name_segment(&self) -> Segment {
        segment!("NM1", "IL", "1", self.last, self.first, "", "", "", "MI", &self.member_id)
    }

    pub fn demographics(&self) -> Segment {
        segment!("DMG", "D8", ccyymmdd(&self.birth_date), self.gender)
    }
}
