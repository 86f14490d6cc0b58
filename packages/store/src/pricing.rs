//! Ticket pricing for a booking draft.

/// Fixed convenience surcharge applied to the subtotal.
pub const CONVENIENCE_FEE_RATE: f64 = 0.02;

/// Derived totals for a number of tickets at a per-ticket price.
///
/// Always computed from the current price and count; the booking flow never
/// stores one.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pricing {
    pub price_per_ticket: f64,
    pub tickets: u32,
    pub subtotal: f64,
    pub convenience_fee: f64,
    pub total: f64,
}

impl Pricing {
    /// `subtotal = price × tickets`, `fee = round(subtotal × 0.02)`,
    /// `total = subtotal + fee`.
    ///
    /// `f64::round` rounds half away from zero, which matches the browser's
    /// `Math.round` for the non-negative amounts seen here.
    pub fn compute(price_per_ticket: f64, tickets: u32) -> Self {
        let subtotal = price_per_ticket * tickets as f64;
        let convenience_fee = (subtotal * CONVENIENCE_FEE_RATE).round();
        Self {
            price_per_ticket,
            tickets,
            subtotal,
            convenience_fee,
            total: subtotal + convenience_fee,
        }
    }
}
