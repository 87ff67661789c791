//! Catalog attributes derived from a provider display name and price.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenominationType {
    Pulsa,
    Data,
    Utility,
    Diamonds,
    Crystals,
    Opals,
    Vouchers,
    Other,
}

impl DenominationType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pulsa => "pulsa",
            Self::Data => "data",
            Self::Utility => "utility",
            Self::Diamonds => "diamonds",
            Self::Crystals => "crystals",
            Self::Opals => "opals",
            Self::Vouchers => "vouchers",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for DenominationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Keywords checked in order against the lowercased name; first hit wins.
const DENOMINATION_KEYWORDS: &[(&str, DenominationType)] = &[
    ("data", DenominationType::Data),
    ("pln", DenominationType::Utility),
    ("diamonds", DenominationType::Diamonds),
    ("crystals", DenominationType::Crystals),
    ("opals", DenominationType::Opals),
    ("vouchers", DenominationType::Vouchers),
    ("pulsa", DenominationType::Pulsa),
    ("telkomsel", DenominationType::Pulsa),
    ("xl", DenominationType::Pulsa),
];

/// First run of ASCII digits in `name`, or `"0"`.
#[must_use]
pub fn denomination(name: &str) -> String {
    let digits: String = name
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(char::is_ascii_digit)
        .collect();

    if digits.is_empty() {
        "0".to_string()
    } else {
        digits
    }
}

#[must_use]
pub fn denomination_type(name: &str) -> DenominationType {
    let name = name.to_lowercase();

    DENOMINATION_KEYWORDS
        .iter()
        .find(|(keyword, _)| name.contains(keyword))
        .map_or(DenominationType::Other, |&(_, kind)| kind)
}

/// Price tier: up to 10 000 is 1, up to 50 000 is 2, anything above is 3.
#[must_use]
pub fn sort_order(price: i32) -> i32 {
    match price {
        ..=10_000 => 1,
        10_001..=50_000 => 2,
        _ => 3,
    }
}
