//! The closed option sets the registry form offers in its dropdowns
//!

use std::str::FromStr;

use enum_iterator::{all, Sequence};
use serde::{Deserialize, Serialize};

use crate::error::RegistryError;

/// A closed set of selectable values, each with the label the form shows.
pub trait Choice: Sequence + Copy + 'static {
    /// The label shown in the dropdown, which is also the serialized value
    fn label(&self) -> &'static str;

    fn from_label(label: &str) -> Option<Self> {
        all::<Self>().find(|choice| choice.label() == label)
    }

    /// Every option, in the order the form lists them
    fn options() -> Vec<Self> {
        all::<Self>().collect()
    }
}

macro_rules! choice_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $( $variant:ident => $label:literal ),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize, Sequence)]
        pub enum $name {
            $(
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl Choice for $name {
            fn label(&self) -> &'static str {
                match self {
                    $( $name::$variant => $label, )+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.label())
            }
        }

        impl FromStr for $name {
            type Err = RegistryError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::from_label(s).ok_or_else(|| {
                    RegistryError::Other(format!("{:?} is not a valid {}", s, stringify!($name)))
                })
            }
        }
    };
}

choice_enum!(
    /// Name prefix / honorific
    Prefix {
        Mr => "นาย",
        Miss => "นางสาว",
        Mrs => "นาง",
    }
);

choice_enum!(
    /// Cabinet position, used for both the primary and secondary role
    Position {
        PrimeMinister => "นายกรัฐมนตรี",
        DeputyPrimeMinister => "รองนายกรัฐมนตรี",
        Minister => "รัฐมนตรีว่าการ",
        DeputyMinister => "รัฐมนตรีช่วย",
        PermanentSecretary => "ปลัดกระทรวง",
        NoPosition => "ไม่มีตำแหน่ง",
    }
);

choice_enum!(
    /// The ministry a member is assigned to
    Ministry {
        Interior => "กระทรวงมหาดไทย",
        Education => "กระทรวงศึกษาธิการ",
        PublicHealth => "กระทรวงสาธารณสุข",
        Other => "อื่นๆ",
    }
);

choice_enum!(
    /// Political party affiliation
    Party {
        MoveForward => "พรรคก้าวไกล",
        PheuThai => "พรรคเพื่อไทย",
        ChartThaiPattana => "ชาติไทยพัฒนา",
        UnitedThaiNation => "พรรครวมไทยสร้างชาติ",
        KlaTham => "พรรคกล้าธรรม",
        Democrat => "พรรคประชาธิปัตย์",
        Prachachat => "พรรคประชาชาติ",
        ChartPattana => "พรรคชาติพัฒนา",
        Independent => "อิสระ",
    }
);
