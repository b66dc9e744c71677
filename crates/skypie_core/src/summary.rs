//! Profit and tax summaries over a populated balance sheet
//!
//! Only the commercial share of operating costs and depreciation is
//! deductible; personal (part 91) flying is not a business expense.

use crate::ledger::{BalanceSheet, EntryKind, Filter};

/// Tax assumptions for [`tax_adjusted_profit`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TaxParams {
    /// Fraction of flying that is personal and therefore not deductible
    pub part91_percentage: f64,
    /// Flat rate applied to taxable profit
    pub tax_rate: f64,
}

impl Default for TaxParams {
    /// Entirely personal use, 25% tax rate
    fn default() -> Self {
        Self {
            part91_percentage: 1.0,
            tax_rate: 0.25,
        }
    }
}

/// Every intermediate of the after-tax profit calculation
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ProfitSummary {
    /// CapEx + OpEx
    pub expenses: f64,
    /// Income
    pub revenue: f64,
    /// Deductible share of OpEx + Depreciation
    pub deductions: f64,
    /// revenue - expenses
    pub profit: f64,
    /// max(profit - deductions, 0)
    pub taxable: f64,
    pub tax: f64,
    pub after_tax: f64,
}

impl ProfitSummary {
    pub fn compute(sheet: &BalanceSheet, filter: &Filter, params: &TaxParams) -> Self {
        let with_kinds = |kinds: &[EntryKind]| filter.clone().kinds(kinds.iter().copied());

        let expenses = sheet.sum(&with_kinds(&[EntryKind::CapEx, EntryKind::OpEx]));
        let revenue = sheet.sum(&with_kinds(&[EntryKind::Income]));
        let deductions = sheet.sum(&with_kinds(&[EntryKind::OpEx, EntryKind::Depreciation]))
            * (1.0 - params.part91_percentage);

        let profit = revenue - expenses;
        let taxable = (profit - deductions).max(0.0);
        let tax = taxable * params.tax_rate;

        Self {
            expenses,
            revenue,
            deductions,
            profit,
            taxable,
            tax,
            after_tax: profit - tax,
        }
    }
}

/// After-tax profit (negative for a net cost) of the filtered ledger
pub fn tax_adjusted_profit(sheet: &BalanceSheet, filter: &Filter, params: &TaxParams) -> f64 {
    ProfitSummary::compute(sheet, filter, params).after_tax
}

/// Share of hours flown for personal use; all personal when nothing is flown
pub fn part91_fraction(part91_hours: f64, part135_hours: f64) -> f64 {
    let total = part91_hours + part135_hours;
    if total > 0.0 { part91_hours / total } else { 1.0 }
}
