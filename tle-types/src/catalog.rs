use derive_more::Display;

pub type CatalogId = u32;

/// Satellite catalog number, possibly in Alpha-5 form
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Display)]
#[display(fmt = "{}", "id")]
pub struct CatalogNumber {
    /// Columns 3-7 of line 1, trimmed
    pub raw: String,

    /// Resolved numeric id
    pub id: CatalogId,
}

impl CatalogNumber {
    /// True when the raw field uses a leading letter to exceed 99999
    pub fn is_alpha5(&self) -> bool {
        self.raw
            .chars()
            .next()
            .map(|c| c.is_ascii_alphabetic())
            .unwrap_or(false)
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Display)]
pub enum Classification {
    #[display(fmt = "U")]
    Unclassified,
    #[display(fmt = "C")]
    Classified,
    #[display(fmt = "S")]
    Secret,
    #[display(fmt = "{}", _0)]
    Unknown(char),
}

impl From<char> for Classification {
    fn from(value: char) -> Self {
        use Classification::*;
        match value {
            'U' => Unclassified,
            'C' => Classified,
            'S' => Secret,
            _ => Unknown(value),
        }
    }
}

impl From<Classification> for char {
    fn from(value: Classification) -> Self {
        use Classification::*;
        match value {
            Unclassified => 'U',
            Classified => 'C',
            Secret => 'S',
            Unknown(c) => c,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_char_conversion() {
        for c in ['U', 'C', 'S', 'X', ' '] {
            assert_eq!(char::from(Classification::from(c)), c);
        }
        assert_eq!(Classification::from('U'), Classification::Unclassified);
        assert_eq!(Classification::from('x'), Classification::Unknown('x'));
        assert_eq!(Classification::Secret.to_string(), "S");
    }

    #[test]
    fn alpha5_detection() {
        let n = CatalogNumber {
            raw: "Z5544".to_owned(),
            id: 335544,
        };
        assert!(n.is_alpha5());
        assert_eq!(n.to_string(), "335544");

        let n = CatalogNumber {
            raw: "25544".to_owned(),
            id: 25544,
        };
        assert!(!n.is_alpha5());
    }
}
