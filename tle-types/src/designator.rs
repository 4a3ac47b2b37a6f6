use derive_more::Display;

/// COSPAR launch designator
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default, Display)]
#[display(fmt = "{}", "raw")]
pub struct InternationalDesignator {
    /// Columns 10-17 of line 1, trimmed
    pub raw: String,

    /// Last two digits of the launch year
    pub launch_year: String,

    /// Launch number of the year
    pub launch_number: String,

    /// Piece of the launch
    pub launch_piece: String,
}

impl InternationalDesignator {
    /// Analyst objects and some debris carry a blank designator
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }
}
