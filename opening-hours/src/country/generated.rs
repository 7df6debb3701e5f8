// @generated from the ISO 3166-1 alpha-2 country code list.
//
// The upstream project derives this file (and the embedded holiday
// database next to it) from a much larger reference dataset at build
// time. This is a trimmed-down, hand-maintained stand-in covering the
// codes exercised by this crate's own tests and examples.

use std::fmt;
use std::str::FromStr;

use crate::error::UnknownCountryCode;

macro_rules! country_enum {
    ( $( $variant: ident ),* $(,)? ) => {
        /// An ISO 3166-1 alpha-2 country code.
        #[derive(Copy, Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
        #[allow(clippy::upper_case_acronyms)]
        pub enum Country {
            $( $variant, )*
        }

        impl fmt::Display for Country {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let code = match self {
                    $( Self::$variant => stringify!($variant), )*
                };

                write!(f, "{code}")
            }
        }

        impl FromStr for Country {
            type Err = UnknownCountryCode;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( stringify!($variant) => Ok(Self::$variant), )*
                    other => Err(UnknownCountryCode(other.to_string())),
                }
            }
        }
    };
}

country_enum! {
    AT, AU, BE, BR, CA, CH, CN, CZ, DE, DK, ES, FI, FR, GB, GR, HU, IE, IN, IT,
    JP, KR, LU, MX, NL, NO, NZ, PL, PT, RU, SE, SG, SK, TR, US, ZA,
}
