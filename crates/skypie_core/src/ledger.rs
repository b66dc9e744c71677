//! The balance sheet - a month-indexed ledger of ownership costs
//!
//! The simulation appends [`LedgerEntry`] values to the current month and
//! advances the month with [`BalanceSheet::tick`]. Readers query it with a
//! [`Filter`]; matching scalar entries are summed per kind, while assets are
//! passed through as recorded.

use std::collections::BTreeMap;
use std::fmt;
use std::ops::AddAssign;

use serde::{Deserialize, Serialize};

use crate::depreciation::DepreciationModel;
use crate::meterable::Meterable;

/// A depreciable thing the owner holds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    /// Purchase price, the depreciable basis
    pub price: f64,
    /// Market value at purchase; resale is this times the depreciation curve
    pub value: f64,
    pub depreciation: DepreciationModel,
}

impl Asset {
    pub fn new(price: f64, depreciation: DepreciationModel) -> Self {
        Self {
            price,
            value: price,
            depreciation,
        }
    }

    #[must_use]
    pub fn with_value(mut self, value: f64) -> Self {
        self.value = value;
        self
    }

    /// Resale value after `months` of ownership
    pub fn value_after(&self, months: u32) -> f64 {
        self.value * self.depreciation.at(months)
    }
}

/// Fieldless discriminant of [`LedgerEntry`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EntryKind {
    Asset,
    CapEx,
    OpEx,
    Income,
    Hobby,
    Depreciation,
}

impl EntryKind {
    /// Kinds that carry a summable cash value, in aggregation order
    pub const SCALAR: [EntryKind; 5] = [
        EntryKind::CapEx,
        EntryKind::OpEx,
        EntryKind::Income,
        EntryKind::Hobby,
        EntryKind::Depreciation,
    ];

    fn entry(self, value: f64) -> Option<LedgerEntry> {
        match self {
            EntryKind::Asset => None,
            EntryKind::CapEx => Some(LedgerEntry::CapEx(value)),
            EntryKind::OpEx => Some(LedgerEntry::OpEx(value)),
            EntryKind::Income => Some(LedgerEntry::Income(value)),
            EntryKind::Hobby => Some(LedgerEntry::Hobby(value)),
            EntryKind::Depreciation => Some(LedgerEntry::Depreciation(value)),
        }
    }
}

/// One line of the balance sheet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum LedgerEntry {
    Asset(Asset),
    /// Capital expenditure: down payment, principal, taxes on purchase, overhauls
    CapEx(f64),
    /// Operating expenditure: interest, insurance, inspections, commercial fuel
    OpEx(f64),
    Income(f64),
    /// Imputed cost of personal flying
    Hobby(f64),
    /// Depreciation charge claimed for tax purposes
    Depreciation(f64),
}

impl LedgerEntry {
    pub fn kind(&self) -> EntryKind {
        match self {
            LedgerEntry::Asset(_) => EntryKind::Asset,
            LedgerEntry::CapEx(_) => EntryKind::CapEx,
            LedgerEntry::OpEx(_) => EntryKind::OpEx,
            LedgerEntry::Income(_) => EntryKind::Income,
            LedgerEntry::Hobby(_) => EntryKind::Hobby,
            LedgerEntry::Depreciation(_) => EntryKind::Depreciation,
        }
    }

    /// Cash value, `None` for assets
    pub fn amount(&self) -> Option<f64> {
        match self {
            LedgerEntry::Asset(_) => None,
            LedgerEntry::CapEx(v)
            | LedgerEntry::OpEx(v)
            | LedgerEntry::Income(v)
            | LedgerEntry::Hobby(v)
            | LedgerEntry::Depreciation(v) => Some(*v),
        }
    }
}

impl fmt::Display for LedgerEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LedgerEntry::Asset(asset) => write!(
                f,
                "Asset({:.2} [price: {:.2}], {})",
                asset.value, asset.price, asset.depreciation
            ),
            other => write!(
                f,
                "{:?}({:.2})",
                other.kind(),
                other.amount().unwrap_or_default()
            ),
        }
    }
}

/// Selection criteria for [`BalanceSheet::select`]; unset fields match all
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
    pub month: Option<u32>,
    pub year: Option<u32>,
    pub kinds: Option<Vec<EntryKind>>,
}

impl Filter {
    /// Matches everything
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn month(mut self, month: u32) -> Self {
        self.month = Some(month);
        self
    }

    /// Months `[12 * year, 12 * year + 12)`
    #[must_use]
    pub fn year(mut self, year: u32) -> Self {
        self.year = Some(year);
        self
    }

    #[must_use]
    pub fn kind(self, kind: EntryKind) -> Self {
        self.kinds([kind])
    }

    #[must_use]
    pub fn kinds(mut self, kinds: impl IntoIterator<Item = EntryKind>) -> Self {
        self.kinds = Some(kinds.into_iter().collect());
        self
    }

    fn matches(&self, month: u32, entry: &LedgerEntry) -> bool {
        if self.month.is_some_and(|m| m != month) {
            return false;
        }
        if self.year.is_some_and(|y| month / 12 != y) {
            return false;
        }
        match &self.kinds {
            Some(kinds) => kinds.contains(&entry.kind()),
            None => true,
        }
    }
}

/// Append-only month-indexed ledger
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BalanceSheet {
    month: u32,
    items: BTreeMap<u32, Vec<LedgerEntry>>,
}

impl BalanceSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current month; new entries land here
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Append an entry to the current month
    pub fn record(&mut self, entry: LedgerEntry) {
        self.items.entry(self.month).or_default().push(entry);
    }

    /// Advance to the next month
    pub fn tick(&mut self) {
        self.month += 1;
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Entries recorded in `month`, in recording order
    pub fn entries(&self, month: u32) -> &[LedgerEntry] {
        self.items.get(&month).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Every asset with the month it was recorded in
    pub fn assets(&self) -> impl Iterator<Item = (u32, &Asset)> {
        self.items.iter().flat_map(|(month, entries)| {
            entries.iter().filter_map(move |entry| match entry {
                LedgerEntry::Asset(asset) => Some((*month, asset)),
                _ => None,
            })
        })
    }

    /// Matching entries, aggregated: assets individually (first), then one
    /// summed entry for each scalar kind that matched at least once
    pub fn select(&self, filter: &Filter) -> Vec<LedgerEntry> {
        let mut assets = Vec::new();
        let mut totals: [Option<f64>; 5] = [None; 5];

        for (month, entries) in &self.items {
            for entry in entries.iter().filter(|e| filter.matches(*month, e)) {
                match (entry, scalar_slot(entry.kind())) {
                    (LedgerEntry::Asset(asset), _) => {
                        assets.push(LedgerEntry::Asset(asset.clone()))
                    }
                    (scalar, Some(slot)) => {
                        *totals[slot].get_or_insert(0.0) += scalar.amount().unwrap_or_default();
                    }
                    (_, None) => {}
                }
            }
        }

        assets.extend(
            EntryKind::SCALAR
                .iter()
                .zip(totals)
                .filter_map(|(kind, total)| total.and_then(|v| kind.entry(v))),
        );
        assets
    }

    /// Sum of the selection's cash values; assets carry none and are skipped
    pub fn sum(&self, filter: &Filter) -> f64 {
        self.select(filter)
            .iter()
            .filter_map(LedgerEntry::amount)
            .sum()
    }
}

impl AddAssign<LedgerEntry> for BalanceSheet {
    fn add_assign(&mut self, entry: LedgerEntry) {
        self.record(entry);
    }
}

fn scalar_slot(kind: EntryKind) -> Option<usize> {
    EntryKind::SCALAR.iter().position(|k| *k == kind)
}
