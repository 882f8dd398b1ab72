use serde::{Deserialize, Serialize};

/// A taxing jurisdiction: the federal government or a single state.
///
/// The engine never apportions income across jurisdictions; a computation
/// names exactly one state alongside the federal schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Jurisdiction {
    Federal,
    State(UsState),
}

impl Jurisdiction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Federal => "federal",
            Self::State(state) => state.as_str(),
        }
    }
}

/// US states by two-letter postal code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum UsState {
    Al, Ak, Az, Ar, Ca, Co, Ct, De, Fl, Ga,
    Hi, Id, Il, In, Ia, Ks, Ky, La, Me, Md,
    Ma, Mi, Mn, Ms, Mo, Mt, Ne, Nv, Nh, Nj,
    Nm, Ny, Nc, Nd, Oh, Ok, Or, Pa, Ri, Sc,
    Sd, Tn, Tx, Ut, Vt, Va, Wa, Wv, Wi, Wy,
}

impl UsState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Al => "AL", Self::Ak => "AK", Self::Az => "AZ", Self::Ar => "AR",
            Self::Ca => "CA", Self::Co => "CO", Self::Ct => "CT", Self::De => "DE",
            Self::Fl => "FL", Self::Ga => "GA", Self::Hi => "HI", Self::Id => "ID",
            Self::Il => "IL", Self::In => "IN", Self::Ia => "IA", Self::Ks => "KS",
            Self::Ky => "KY", Self::La => "LA", Self::Me => "ME", Self::Md => "MD",
            Self::Ma => "MA", Self::Mi => "MI", Self::Mn => "MN", Self::Ms => "MS",
            Self::Mo => "MO", Self::Mt => "MT", Self::Ne => "NE", Self::Nv => "NV",
            Self::Nh => "NH", Self::Nj => "NJ", Self::Nm => "NM", Self::Ny => "NY",
            Self::Nc => "NC", Self::Nd => "ND", Self::Oh => "OH", Self::Ok => "OK",
            Self::Or => "OR", Self::Pa => "PA", Self::Ri => "RI", Self::Sc => "SC",
            Self::Sd => "SD", Self::Tn => "TN", Self::Tx => "TX", Self::Ut => "UT",
            Self::Vt => "VT", Self::Va => "VA", Self::Wa => "WA", Self::Wv => "WV",
            Self::Wi => "WI", Self::Wy => "WY",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "AL" => Some(Self::Al), "AK" => Some(Self::Ak), "AZ" => Some(Self::Az),
            "AR" => Some(Self::Ar), "CA" => Some(Self::Ca), "CO" => Some(Self::Co),
            "CT" => Some(Self::Ct), "DE" => Some(Self::De), "FL" => Some(Self::Fl),
            "GA" => Some(Self::Ga), "HI" => Some(Self::Hi), "ID" => Some(Self::Id),
            "IL" => Some(Self::Il), "IN" => Some(Self::In), "IA" => Some(Self::Ia),
            "KS" => Some(Self::Ks), "KY" => Some(Self::Ky), "LA" => Some(Self::La),
            "ME" => Some(Self::Me), "MD" => Some(Self::Md), "MA" => Some(Self::Ma),
            "MI" => Some(Self::Mi), "MN" => Some(Self::Mn), "MS" => Some(Self::Ms),
            "MO" => Some(Self::Mo), "MT" => Some(Self::Mt), "NE" => Some(Self::Ne),
            "NV" => Some(Self::Nv), "NH" => Some(Self::Nh), "NJ" => Some(Self::Nj),
            "NM" => Some(Self::Nm), "NY" => Some(Self::Ny), "NC" => Some(Self::Nc),
            "ND" => Some(Self::Nd), "OH" => Some(Self::Oh), "OK" => Some(Self::Ok),
            "OR" => Some(Self::Or), "PA" => Some(Self::Pa), "RI" => Some(Self::Ri),
            "SC" => Some(Self::Sc), "SD" => Some(Self::Sd), "TN" => Some(Self::Tn),
            "TX" => Some(Self::Tx), "UT" => Some(Self::Ut), "VT" => Some(Self::Vt),
            "VA" => Some(Self::Va), "WA" => Some(Self::Wa), "WV" => Some(Self::Wv),
            "WI" => Some(Self::Wi), "WY" => Some(Self::Wy),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parse_roundtrips_postal_codes() {
        for state in [UsState::Ca, UsState::Ny, UsState::Tx, UsState::Wy] {
            assert_eq!(UsState::parse(state.as_str()), Some(state));
        }
    }

    #[test]
    fn parse_rejects_unknown_code() {
        assert_eq!(UsState::parse("ZZ"), None);
        assert_eq!(UsState::parse("ca"), None);
    }

    #[test]
    fn jurisdiction_as_str_covers_both_variants() {
        assert_eq!(Jurisdiction::Federal.as_str(), "federal");
        assert_eq!(Jurisdiction::State(UsState::Ca).as_str(), "CA");
    }
}
