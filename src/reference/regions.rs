//! The sixteen first-level administrative regions of Ghana

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::OutbreakError;
use crate::reference::climate::{ClimateProfile, WaterBodyProximity};

/// A region, the unit of risk aggregation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Region {
    #[serde(rename = "Greater Accra")]
    GreaterAccra,
    Ashanti,
    Central,
    Eastern,
    Western,
    Volta,
    Northern,
    #[serde(rename = "Upper East")]
    UpperEast,
    #[serde(rename = "Upper West")]
    UpperWest,
    Bono,
    #[serde(rename = "Bono East")]
    BonoEast,
    Ahafo,
    Savannah,
    #[serde(rename = "North East")]
    NorthEast,
    Oti,
    #[serde(rename = "Western North")]
    WesternNorth,
}

impl Region {
    /// Every region, in snapshot order
    pub const ALL: [Self; 16] = [
        Self::GreaterAccra,
        Self::Ashanti,
        Self::Central,
        Self::Eastern,
        Self::Western,
        Self::Volta,
        Self::Northern,
        Self::UpperEast,
        Self::UpperWest,
        Self::Bono,
        Self::BonoEast,
        Self::Ahafo,
        Self::Savannah,
        Self::NorthEast,
        Self::Oti,
        Self::WesternNorth,
    ];

    /// Display label, identical to the serialized form
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::GreaterAccra => "Greater Accra",
            Self::Ashanti => "Ashanti",
            Self::Central => "Central",
            Self::Eastern => "Eastern",
            Self::Western => "Western",
            Self::Volta => "Volta",
            Self::Northern => "Northern",
            Self::UpperEast => "Upper East",
            Self::UpperWest => "Upper West",
            Self::Bono => "Bono",
            Self::BonoEast => "Bono East",
            Self::Ahafo => "Ahafo",
            Self::Savannah => "Savannah",
            Self::NorthEast => "North East",
            Self::Oti => "Oti",
            Self::WesternNorth => "Western North",
        }
    }

    /// Resident population used as the symptom density denominator
    #[must_use]
    pub const fn population(self) -> u32 {
        match self {
            Self::GreaterAccra => 5_455_692,
            Self::Ashanti => 5_440_463,
            Self::Central => 2_859_821,
            Self::Eastern => 2_916_778,
            Self::Western => 2_060_585,
            Self::Volta => 2_323_431,
            Self::Northern => 2_479_461,
            Self::UpperEast => 1_301_440,
            Self::UpperWest => 897_484,
            Self::Bono => 1_208_649,
            Self::BonoEast => 1_175_046,
            Self::Ahafo => 563_677,
            Self::Savannah => 519_478,
            Self::NorthEast => 599_274,
            Self::Oti => 598_303,
            Self::WesternNorth => 890_080,
        }
    }

    /// Static climate baseline for the region
    #[must_use]
    pub const fn climate(self) -> ClimateProfile {
        use WaterBodyProximity::{High, Low, Medium, VeryHigh};

        match self {
            Self::GreaterAccra => ClimateProfile::new(730.0, 27.0, High),
            Self::Ashanti => ClimateProfile::new(1400.0, 26.0, Medium),
            Self::Central => ClimateProfile::new(1200.0, 27.0, High),
            Self::Eastern => ClimateProfile::new(1500.0, 26.0, Medium),
            Self::Western => ClimateProfile::new(1800.0, 27.0, High),
            // Lake Volta
            Self::Volta => ClimateProfile::new(1100.0, 27.0, VeryHigh),
            Self::Northern => ClimateProfile::new(1000.0, 28.0, Low),
            Self::UpperEast => ClimateProfile::new(900.0, 28.0, Low),
            Self::UpperWest => ClimateProfile::new(950.0, 28.0, Low),
            Self::Bono => ClimateProfile::new(1300.0, 26.0, Medium),
            Self::BonoEast => ClimateProfile::new(1200.0, 27.0, Medium),
            Self::Ahafo => ClimateProfile::new(1350.0, 26.0, Medium),
            Self::Savannah => ClimateProfile::new(1050.0, 28.0, Low),
            Self::NorthEast => ClimateProfile::new(950.0, 28.0, Low),
            // Volta River
            Self::Oti => ClimateProfile::new(1100.0, 27.0, High),
            Self::WesternNorth => ClimateProfile::new(1600.0, 27.0, Medium),
        }
    }

    /// Major cities of the region
    #[must_use]
    pub const fn major_cities(self) -> &'static [&'static str] {
        match self {
            Self::GreaterAccra => &["Accra", "Tema", "Madina", "Teshie"],
            Self::Ashanti => &["Kumasi", "Obuasi", "Ejisu", "Mampong"],
            Self::Central => &["Cape Coast", "Winneba", "Kasoa", "Swedru"],
            Self::Eastern => &["Koforidua", "Akropong", "Begoro", "Mpraeso"],
            Self::Western => &["Sekondi-Takoradi", "Tarkwa", "Prestea"],
            Self::Volta => &["Ho", "Hohoe", "Keta", "Aflao"],
            Self::Northern => &["Tamale", "Yendi", "Savelugu"],
            Self::UpperEast => &["Bolgatanga", "Bawku", "Navrongo"],
            Self::UpperWest => &["Wa", "Lawra", "Jirapa"],
            Self::Bono => &["Sunyani", "Berekum", "Dormaa Ahenkro"],
            Self::BonoEast => &["Techiman", "Atebubu", "Kintampo"],
            Self::Ahafo => &["Goaso", "Bechem", "Kukuom"],
            Self::Savannah => &["Damongo", "Salaga", "Bole"],
            Self::NorthEast => &["Nalerigu", "Walewale", "Gambaga"],
            Self::Oti => &["Dambai", "Kete Krachi", "Nkwanta"],
            Self::WesternNorth => &["Sefwi Wiawso", "Bibiani", "Juaboso"],
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Region {
    type Err = OutbreakError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|region| region.name() == trimmed)
            .ok_or_else(|| OutbreakError::UnknownRegion(s.to_string()))
    }
}
