//! Fixed vocabularies: partner categories, calendar months and quarters.
//!
//! Every per-category dataset enumerates `Category::ALL` in this exact
//! order. Order matters for stacking and colour assignment downstream.

use crate::error::DatagenError;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

// ----------------------------------------------------------------------------
// Partner categories
// ----------------------------------------------------------------------------

/// Partner channel a revenue amount is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    AlliancePartner,
    EmbeddedPartner,
    ReferralPartner,
    VcPartner,
    AmManagedPartner,
    DistributionPartner,
    ReferralOthers,
    Tpi,
}

impl Category {
    /// All categories in display and stacking order.
    pub const ALL: [Category; 8] = [
        Category::AlliancePartner,
        Category::EmbeddedPartner,
        Category::ReferralPartner,
        Category::VcPartner,
        Category::AmManagedPartner,
        Category::DistributionPartner,
        Category::ReferralOthers,
        Category::Tpi,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::AlliancePartner => "Alliance Partner",
            Category::EmbeddedPartner => "Embedded Partner",
            Category::ReferralPartner => "Referral Partner",
            Category::VcPartner => "VC Partner",
            Category::AmManagedPartner => "AM Managed Partner",
            Category::DistributionPartner => "Distribution Partner",
            Category::ReferralOthers => "Referral Others",
            Category::Tpi => "TPI",
        }
    }

    /// Position within `Category::ALL`.
    pub fn index(&self) -> usize {
        *self as usize
    }
}

// ----------------------------------------------------------------------------
// Calendar
// ----------------------------------------------------------------------------

/// Calendar month of the fixed 12-month demo year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Month {
    Jan,
    Feb,
    Mar,
    Apr,
    May,
    Jun,
    Jul,
    Aug,
    Sep,
    Oct,
    Nov,
    Dec,
}

impl Month {
    pub const ALL: [Month; 12] = [
        Month::Jan,
        Month::Feb,
        Month::Mar,
        Month::Apr,
        Month::May,
        Month::Jun,
        Month::Jul,
        Month::Aug,
        Month::Sep,
        Month::Oct,
        Month::Nov,
        Month::Dec,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Month::Jan => "Jan",
            Month::Feb => "Feb",
            Month::Mar => "Mar",
            Month::Apr => "Apr",
            Month::May => "May",
            Month::Jun => "Jun",
            Month::Jul => "Jul",
            Month::Aug => "Aug",
            Month::Sep => "Sep",
            Month::Oct => "Oct",
            Month::Nov => "Nov",
            Month::Dec => "Dec",
        }
    }

    /// The first `n` months of the year (all 12 when `n >= 12`).
    pub fn first(n: usize) -> &'static [Month] {
        &Month::ALL[..n.min(Month::ALL.len())]
    }

    pub fn quarter(&self) -> Quarter {
        Quarter::ALL[(*self as usize) / 3]
    }
}

/// Calendar quarter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Quarter {
    Q1,
    Q2,
    Q3,
    Q4,
}

impl Quarter {
    pub const ALL: [Quarter; 4] = [Quarter::Q1, Quarter::Q2, Quarter::Q3, Quarter::Q4];

    pub fn as_str(&self) -> &'static str {
        match self {
            Quarter::Q1 => "Q1",
            Quarter::Q2 => "Q2",
            Quarter::Q3 => "Q3",
            Quarter::Q4 => "Q4",
        }
    }

    pub fn index(&self) -> usize {
        *self as usize
    }
}

// ----------------------------------------------------------------------------
// Shared trait impls
// ----------------------------------------------------------------------------

fn parse_label<T: Copy>(
    kind: &'static str,
    all: &[T],
    as_str: fn(&T) -> &'static str,
    value: &str,
) -> Result<T, DatagenError> {
    let needle = value.trim();
    all.iter()
        .copied()
        .find(|item| as_str(item).eq_ignore_ascii_case(needle))
        .ok_or_else(|| DatagenError::UnknownLabel {
            kind,
            value: value.to_string(),
        })
}

impl FromStr for Category {
    type Err = DatagenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_label("category", &Category::ALL, Category::as_str, s)
    }
}

impl FromStr for Month {
    type Err = DatagenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_label("month", &Month::ALL, Month::as_str, s)
    }
}

impl FromStr for Quarter {
    type Err = DatagenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_label("quarter", &Quarter::ALL, Quarter::as_str, s)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Quarter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl Serialize for Month {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl Serialize for Quarter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_category_order_and_cardinality() {
        assert_eq!(Category::ALL.len(), 8);
        assert_eq!(Category::ALL[0].as_str(), "Alliance Partner");
        assert_eq!(Category::ALL[7].as_str(), "TPI");
        for (i, c) in Category::ALL.iter().enumerate() {
            assert_eq!(c.index(), i);
        }
        let labels: HashSet<_> = Category::ALL.iter().map(|c| c.as_str()).collect();
        assert_eq!(labels.len(), 8);
    }

    #[test]
    fn test_parse_labels() {
        assert_eq!("VC Partner".parse::<Category>().unwrap(), Category::VcPartner);
        assert_eq!("tpi".parse::<Category>().unwrap(), Category::Tpi);
        assert_eq!(" mar ".parse::<Month>().unwrap(), Month::Mar);
        assert_eq!("Q3".parse::<Quarter>().unwrap(), Quarter::Q3);

        let err = "Reseller".parse::<Category>().unwrap_err();
        assert!(err.to_string().contains("Unknown category label"));
    }

    #[test]
    fn test_month_helpers() {
        assert_eq!(Month::first(6).len(), 6);
        assert_eq!(Month::first(6)[5], Month::Jun);
        assert_eq!(Month::first(40).len(), 12);
        assert_eq!(Month::Feb.quarter(), Quarter::Q1);
        assert_eq!(Month::Jul.quarter(), Quarter::Q3);
        assert_eq!(Month::Dec.quarter(), Quarter::Q4);
    }

    #[test]
    fn test_serialize_as_label() {
        let json = serde_json::to_string(&Category::AmManagedPartner).unwrap();
        assert_eq!(json, "\"AM Managed Partner\"");
        assert_eq!(serde_json::to_string(&Month::Sep).unwrap(), "\"Sep\"");
        assert_eq!(serde_json::to_string(&Quarter::Q2).unwrap(), "\"Q2\"");
    }
}
