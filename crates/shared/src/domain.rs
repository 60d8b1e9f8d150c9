use std::{fmt, str::FromStr, time::Duration};

use serde::{Deserialize, Serialize};

use crate::error::ParseOptionError;

/// Maximum number of flowers across every group of one bouquet.
pub const CAP: u32 = 15;

/// How long a clamp notice stays visible after its latest trigger.
pub const NOTICE_DURATION: Duration = Duration::from_millis(3000);

pub const ADD_GROUP_LABEL: &str = "+ Add Flower Type";
pub const NO_FLOWERS_PLACEHOLDER: &str = "No flowers selected";

pub fn limit_reached_label() -> String {
    format!("Limit Reached ({CAP})")
}

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(pub i64);
    };
}

id_newtype!(GroupId);

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "group-{}", self.0)
    }
}

/// Declares a closed option set with its display labels, kept in menu order.
macro_rules! option_enum {
    ($name:ident, $kind:literal, { $($variant:ident => $label:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            #[default]
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl FromStr for $name {
            type Err = ParseOptionError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = normalize_option(s);
                Self::ALL
                    .iter()
                    .copied()
                    .find(|option| normalize_option(option.label()) == wanted)
                    .ok_or_else(|| ParseOptionError::UnknownOption {
                        kind: $kind,
                        value: s.trim().to_string(),
                    })
            }
        }
    };
}

fn normalize_option(raw: &str) -> String {
    raw.trim()
        .chars()
        .filter(|c| !matches!(c, ' ' | '_' | '-'))
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

option_enum!(FlowerType, "flower type", {
    Roses => "Roses",
    Tulips => "Tulips",
    Bluebonnets => "Bluebonnets",
    Lilies => "Lilies",
    Daisies => "Daisies",
});

option_enum!(FlowerColor, "color", {
    Red => "Red",
    Yellow => "Yellow",
    Blue => "Blue",
    Pink => "Pink",
    White => "White",
    Purple => "Purple",
});

option_enum!(StemColor, "stem color", {
    Green => "Green",
    Brown => "Brown",
    LightGreen => "Light Green",
});

/// A single categorical edit on a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum GroupAttribute {
    Type(FlowerType),
    Color(FlowerColor),
    Stem(StemColor),
}

impl GroupAttribute {
    /// Parses a `field value` pair as typed at the presentation boundary.
    pub fn parse(field: &str, value: &str) -> Result<Self, ParseOptionError> {
        match field.trim().to_ascii_lowercase().as_str() {
            "type" | "flower" => Ok(Self::Type(value.parse()?)),
            "color" | "colour" => Ok(Self::Color(value.parse()?)),
            "stem" => Ok(Self::Stem(value.parse()?)),
            other => Err(ParseOptionError::UnknownField(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowerGroup {
    pub id: GroupId,
    pub quantity: u32,
    pub flower_type: FlowerType,
    pub color: FlowerColor,
    pub stem: StemColor,
}

impl FlowerGroup {
    pub fn new(id: GroupId) -> Self {
        Self {
            id,
            quantity: 1,
            flower_type: FlowerType::default(),
            color: FlowerColor::default(),
            stem: StemColor::default(),
        }
    }

    pub fn apply(&mut self, attribute: GroupAttribute) {
        match attribute {
            GroupAttribute::Type(flower_type) => self.flower_type = flower_type,
            GroupAttribute::Color(color) => self.color = color,
            GroupAttribute::Stem(stem) => self.stem = stem,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    #[default]
    Start,
    Selector,
    Result,
}

#[cfg(test)]
#[path = "tests/domain_tests.rs"]
mod tests;
