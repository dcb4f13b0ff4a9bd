//! Display symbols and number conventions per currency

use crate::core::currency::CurrencyCode;
use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolPosition {
    #[default]
    Prefix,
    Suffix,
}

/// How amounts in one currency are rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyFormat {
    pub symbol: String,
    pub position: SymbolPosition,
    /// Put a space between the symbol and the number.
    pub spaced: bool,
    pub decimal_separator: char,
    pub group_separator: char,
}

impl CurrencyFormat {
    pub fn prefix(symbol: &str) -> Self {
        CurrencyFormat {
            symbol: symbol.to_string(),
            position: SymbolPosition::Prefix,
            spaced: false,
            decimal_separator: '.',
            group_separator: ',',
        }
    }

    /// Used for codes without an entry: the raw code as a spaced prefix.
    pub fn fallback(code: &CurrencyCode) -> Self {
        CurrencyFormat {
            spaced: true,
            ..Self::prefix(code.as_str())
        }
    }

    fn validate(&self, code: &CurrencyCode) -> Result<()> {
        if self.decimal_separator == self.group_separator {
            bail!("Currency {code} uses the same character for decimal and group separators");
        }
        if self.decimal_separator.is_ascii_digit() || self.group_separator.is_ascii_digit() {
            bail!("Currency {code} uses a digit as a separator");
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolTable {
    formats: BTreeMap<CurrencyCode, CurrencyFormat>,
}

impl SymbolTable {
    pub fn new<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (CurrencyCode, CurrencyFormat)>,
    {
        let mut formats = BTreeMap::new();
        for (code, format) in entries {
            format.validate(&code)?;
            if formats.insert(code.clone(), format).is_some() {
                bail!("Duplicate format entry for {code}");
            }
        }
        Ok(SymbolTable { formats })
    }

    pub(crate) fn from_trusted(formats: BTreeMap<CurrencyCode, CurrencyFormat>) -> Self {
        SymbolTable { formats }
    }

    pub fn get(&self, code: &CurrencyCode) -> Option<&CurrencyFormat> {
        self.formats.get(code)
    }

    pub fn contains(&self, code: &CurrencyCode) -> bool {
        self.formats.contains_key(code)
    }

    pub fn codes(&self) -> impl Iterator<Item = &CurrencyCode> {
        self.formats.keys()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_uses_code_as_prefix() {
        let code: CurrencyCode = "ZZZ".parse().unwrap();
        let format = CurrencyFormat::fallback(&code);
        assert_eq!(format.symbol, "ZZZ");
        assert_eq!(format.position, SymbolPosition::Prefix);
        assert!(format.spaced);
    }

    #[test]
    fn test_rejects_ambiguous_separators() {
        let code: CurrencyCode = "EUR".parse().unwrap();
        let mut format = CurrencyFormat::prefix("€");
        format.group_separator = '.';
        assert!(SymbolTable::new([(code.clone(), format)]).is_err());

        let mut format = CurrencyFormat::prefix("€");
        format.decimal_separator = '1';
        assert!(SymbolTable::new([(code, format)]).is_err());
    }

    #[test]
    fn test_position_deserialization() {
        let position: SymbolPosition = serde_yaml::from_str("suffix").unwrap();
        assert_eq!(position, SymbolPosition::Suffix);
        assert!(serde_yaml::from_str::<SymbolPosition>("middle").is_err());
    }
}
