use serde::{Deserialize, Serialize};

/// Federal filing status, selecting which bracket schedule and standard
/// deduction apply to a computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FilingStatus {
    Single,
    MarriedFilingJointly,
    MarriedFilingSeparately,
    HeadOfHousehold,
    QualifyingWidow,
}

impl FilingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::MarriedFilingJointly => "married_filing_jointly",
            Self::MarriedFilingSeparately => "married_filing_separately",
            Self::HeadOfHousehold => "head_of_household",
            Self::QualifyingWidow => "qualifying_widow",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "single" => Some(Self::Single),
            "married_filing_jointly" => Some(Self::MarriedFilingJointly),
            "married_filing_separately" => Some(Self::MarriedFilingSeparately),
            "head_of_household" => Some(Self::HeadOfHousehold),
            "qualifying_widow" => Some(Self::QualifyingWidow),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parse_roundtrips_every_status() {
        for status in [
            FilingStatus::Single,
            FilingStatus::MarriedFilingJointly,
            FilingStatus::MarriedFilingSeparately,
            FilingStatus::HeadOfHousehold,
            FilingStatus::QualifyingWidow,
        ] {
            assert_eq!(FilingStatus::parse(status.as_str()), Some(status));
        }
    }

    #[test]
    fn parse_rejects_unknown_code() {
        assert_eq!(FilingStatus::parse("married"), None);
    }
}
