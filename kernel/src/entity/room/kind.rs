use std::fmt::{Display, Formatter};
use std::str::FromStr;

use error_stack::Report;
use serde::{Deserialize, Serialize};

use crate::KernelError;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum RoomType {
    #[serde(rename = "Q")]
    SingleQueen,
    #[serde(rename = "K")]
    SingleKing,
    #[serde(rename = "QD")]
    DoubleQueen,
    #[serde(rename = "KD")]
    DoubleKing,
    #[serde(rename = "QS")]
    QueenSuite,
    #[serde(rename = "KS")]
    KingSuite,
}

impl RoomType {
    pub fn code(&self) -> &'static str {
        match self {
            RoomType::SingleQueen => "Q",
            RoomType::SingleKing => "K",
            RoomType::DoubleQueen => "QD",
            RoomType::DoubleKing => "KD",
            RoomType::QueenSuite => "QS",
            RoomType::KingSuite => "KS",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RoomType::SingleQueen => "Single Queen",
            RoomType::SingleKing => "Single King",
            RoomType::DoubleQueen => "Double Queen",
            RoomType::DoubleKing => "Double King",
            RoomType::QueenSuite => "Queen Suite",
            RoomType::KingSuite => "King Suite",
        }
    }
}

impl Display for RoomType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for RoomType {
    type Err = Report<KernelError>;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        match code {
            "Q" => Ok(RoomType::SingleQueen),
            "K" => Ok(RoomType::SingleKing),
            "QD" => Ok(RoomType::DoubleQueen),
            "KD" => Ok(RoomType::DoubleKing),
            "QS" => Ok(RoomType::QueenSuite),
            "KS" => Ok(RoomType::KingSuite),
            _ => Err(Report::new(KernelError::InvalidRoom)
                .attach_printable(format!("unknown room type: {code}"))),
        }
    }
}
