/// The budget choices offered by the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetRange {
    Unspecified,
    From5kTo15k,
    From15kTo30k,
    From30kTo50k,
    Over50k,
}

impl BudgetRange {
    pub fn parse(s: &str) -> Result<BudgetRange, String> {
        match s.trim() {
            "" => Ok(Self::Unspecified),
            "5k-15k" => Ok(Self::From5kTo15k),
            "15k-30k" => Ok(Self::From15kTo30k),
            "30k-50k" => Ok(Self::From30kTo50k),
            "50k+" => Ok(Self::Over50k),
            other => Err(format!("{} is not a known budget range", other)),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unspecified => "",
            Self::From5kTo15k => "5k-15k",
            Self::From15kTo30k => "15k-30k",
            Self::From30kTo50k => "30k-50k",
            Self::Over50k => "50k+",
        }
    }
}

impl Default for BudgetRange {
    fn default() -> Self {
        Self::Unspecified
    }
}
