//! Acquisition models
//!
//! An [`Acquisition`] turns a purchase price into a [`PaymentSchedule`]: a
//! monthly stream of (principal, interest) pairs. The first value is what
//! changes hands at closing; once the obligation is paid off the stream
//! yields [`Payment::ZERO`] forever.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::meterable::Meterable;

/// One month's payment split
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Payment {
    pub principal: f64,
    pub interest: f64,
}

impl Payment {
    pub const ZERO: Payment = Payment {
        principal: 0.0,
        interest: 0.0,
    };

    pub fn new(principal: f64, interest: f64) -> Self {
        Self {
            principal,
            interest,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.principal == 0.0 && self.interest == 0.0
    }

    pub fn total(&self) -> f64 {
        self.principal + self.interest
    }
}

/// How the airplane is paid for
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Acquisition {
    /// Full price at closing
    Cash,
    /// Amortizing loan
    /// - `down_payment`: fraction of price paid at closing, e.g. 0.15
    /// - `term_months`: number of monthly payments after closing; zero
    ///   pays the whole balance off in the first month after closing
    /// - `annual_rate`: nominal yearly rate, e.g. 0.0625
    Mortgage {
        down_payment: f64,
        term_months: u32,
        annual_rate: f64,
    },
}

impl Acquisition {
    #[must_use]
    pub fn mortgage(down_payment: f64, term_months: u32, annual_rate: f64) -> Self {
        Acquisition::Mortgage {
            down_payment,
            term_months,
            annual_rate,
        }
    }

    /// Payment schedule for a given purchase price
    pub fn schedule(&self, price: f64) -> PaymentSchedule {
        PaymentSchedule {
            acquisition: *self,
            price,
        }
    }
}

impl fmt::Display for Acquisition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Acquisition::Cash => write!(f, "all cash"),
            Acquisition::Mortgage {
                down_payment,
                term_months,
                annual_rate,
            } => write!(
                f,
                "{term_months} month mortgage, rate: {:.2}%, down payment: {:.2}%",
                annual_rate * 100.0,
                down_payment * 100.0
            ),
        }
    }
}

/// Fixed monthly payment for a fully amortizing loan
///
/// A zero rate degenerates to straight principal repayment, and a zero
/// term to a single payment.
pub fn monthly_payment(annual_rate: f64, term_months: u32, balance: f64) -> f64 {
    let term_months = term_months.max(1);
    let r = annual_rate / 12.0;
    if r == 0.0 {
        return balance / term_months as f64;
    }
    let growth = (1.0 + r).powi(term_months as i32);
    balance * r * growth / (growth - 1.0)
}

/// A purchase price bound to an acquisition model
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaymentSchedule {
    acquisition: Acquisition,
    price: f64,
}

impl Meterable for PaymentSchedule {
    type Item = Payment;
    type Stream = PaymentStream;

    fn produce(&self) -> PaymentStream {
        match self.acquisition {
            Acquisition::Cash => PaymentStream::Cash {
                due: Some(self.price),
            },
            Acquisition::Mortgage {
                down_payment,
                term_months,
                annual_rate,
            } => {
                let down = self.price * down_payment;
                let balance = self.price - down;
                PaymentStream::Mortgage(AmortizationStream {
                    down_payment: Some(down),
                    balance,
                    monthly_rate: annual_rate / 12.0,
                    payment: monthly_payment(annual_rate, term_months, balance),
                    remaining: term_months.max(1),
                })
            }
        }
    }
}

/// Running state of a payment schedule
#[derive(Debug, Clone)]
pub enum PaymentStream {
    Cash { due: Option<f64> },
    Mortgage(AmortizationStream),
}

impl Iterator for PaymentStream {
    type Item = Payment;

    fn next(&mut self) -> Option<Payment> {
        match self {
            PaymentStream::Cash { due } => Some(
                due.take()
                    .map(|price| Payment::new(price, 0.0))
                    .unwrap_or(Payment::ZERO),
            ),
            PaymentStream::Mortgage(amortization) => amortization.next(),
        }
    }
}

/// Loan amortization recurrence: only the balance and months left are tracked
#[derive(Debug, Clone)]
pub struct AmortizationStream {
    down_payment: Option<f64>,
    balance: f64,
    monthly_rate: f64,
    payment: f64,
    remaining: u32,
}

impl Iterator for AmortizationStream {
    type Item = Payment;

    fn next(&mut self) -> Option<Payment> {
        if let Some(down) = self.down_payment.take() {
            return Some(Payment::new(down, 0.0));
        }
        if self.remaining == 0 {
            return Some(Payment::ZERO);
        }
        self.remaining -= 1;

        let interest = self.monthly_rate * self.balance;
        let principal = self.payment - interest;
        self.balance -= principal;
        Some(Payment::new(principal, interest))
    }
}
