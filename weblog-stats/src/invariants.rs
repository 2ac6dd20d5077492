use std::str::FromStr;

use derive_more::{AsRef, Debug, Display};

#[derive(Debug, Display, AsRef, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[display("{_0:02}")]
pub struct Hour(u8);

impl Hour {
    pub fn get(self) -> u8 {
        self.0
    }
}

impl FromStr for Hour {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}
