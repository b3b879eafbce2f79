//! Item (RFC 8941 Section 3.3)
//!
//! ## 概要
//!
//! Bare Item とパラメーターの組を提供します。
//!
//! ## 使い方
//!
//! ```rust
//! use shiguredo_sfv::{BareItem, Item};
//!
//! let item = Item::token("sugar").unwrap();
//! assert_eq!(item.to_http_value(), "sugar");
//!
//! let item = Item::from_http_value(b"2;foourl=\"https://foo.example.com/\"").unwrap();
//! assert_eq!(item.bare_item(), &BareItem::Integer(2));
//! assert!(item.parameters().has("foourl"));
//! ```

use core::fmt;

use crate::bare_item::BareItem;
use crate::error::Error;
use crate::parameters::Parameters;
use crate::parser::Parser;
use crate::serializer;

/// Item
///
/// Bare Item と、それに付随するパラメーター。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    bare_item: BareItem,
    parameters: Parameters,
}

impl Item {
    /// Bare Item から作成 (パラメーターなし)
    pub fn new(bare_item: BareItem) -> Self {
        Item {
            bare_item,
            parameters: Parameters::new(),
        }
    }

    /// Integer の Item を作成
    pub fn integer(value: i64) -> Result<Self, Error> {
        Ok(Item::new(BareItem::integer(value)?))
    }

    /// Decimal の Item を作成 (小数部 3 桁へ偶数丸め)
    pub fn decimal(value: f64) -> Result<Self, Error> {
        Ok(Item::new(BareItem::decimal(value)?))
    }

    /// String の Item を作成
    pub fn string(value: impl Into<String>) -> Result<Self, Error> {
        Ok(Item::new(BareItem::string(value)?))
    }

    /// Token の Item を作成
    pub fn token(value: impl Into<String>) -> Result<Self, Error> {
        Ok(Item::new(BareItem::token(value)?))
    }

    /// Byte Sequence の Item を作成
    pub fn byte_sequence(value: impl Into<Vec<u8>>) -> Self {
        Item::new(BareItem::byte_sequence(value))
    }

    /// Boolean の Item を作成
    pub fn boolean(value: bool) -> Self {
        Item::new(BareItem::boolean(value))
    }

    /// Date の Item を作成 (Unix 時刻、秒単位)
    #[cfg(feature = "date")]
    pub fn date(seconds: i64) -> Result<Self, Error> {
        Ok(Item::new(BareItem::date(seconds)?))
    }

    /// Display String の Item を作成
    #[cfg(feature = "display-string")]
    pub fn display_string(value: impl Into<String>) -> Self {
        Item::new(BareItem::display_string(value))
    }

    /// Item フィールド値をパース
    pub fn from_http_value(input: &[u8]) -> Result<Self, Error> {
        Parser::new(input).parse_item_field()
    }

    /// Bare Item を取得
    pub fn bare_item(&self) -> &BareItem {
        &self.bare_item
    }

    /// パラメーターを取得
    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    /// Bare Item を差し替える
    ///
    /// 同じ値なら何もしない。パラメーターは保持される。
    pub fn with_value(self, bare_item: BareItem) -> Self {
        if self.bare_item == bare_item {
            return self;
        }
        Item {
            bare_item,
            parameters: self.parameters,
        }
    }

    /// パラメーターを差し替える
    ///
    /// 同じパラメーターなら何もしない。
    pub fn with_parameters(self, parameters: Parameters) -> Self {
        if self.parameters == parameters {
            return self;
        }
        Item {
            bare_item: self.bare_item,
            parameters,
        }
    }

    /// HTTP フィールド値を生成
    pub fn to_http_value(&self) -> String {
        let mut out = String::new();
        serializer::serialize_item(self, &mut out);
        out
    }

    /// パーサー用コンストラクタ
    pub(crate) fn from_parsed(bare_item: BareItem, parameters: Parameters) -> Self {
        Item {
            bare_item,
            parameters,
        }
    }
}

impl From<BareItem> for Item {
    fn from(bare_item: BareItem) -> Self {
        Item::new(bare_item)
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_http_value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_validate() {
        assert!(Item::integer(999_999_999_999_999).is_ok());
        assert!(Item::integer(1_000_000_000_000_000).is_err());
        assert!(Item::token("2bad").is_err());
        assert!(Item::string("ダメ").is_err());
    }

    #[test]
    fn with_value_identity() {
        let item = Item::integer(1).unwrap();
        let same = item.clone().with_value(BareItem::Integer(1));
        assert_eq!(item, same);

        let changed = item.with_value(BareItem::Integer(2));
        assert_eq!(changed.bare_item(), &BareItem::Integer(2));
    }

    #[test]
    fn with_value_keeps_parameters() {
        let item = Item::boolean(true)
            .with_parameters(Parameters::new().add("x", BareItem::Integer(1)).unwrap());
        let changed = item.with_value(BareItem::Boolean(false));
        assert!(changed.parameters().has("x"));
    }

    #[test]
    fn with_parameters_identity() {
        let params = Parameters::new().add("a", BareItem::Integer(1)).unwrap();
        let item = Item::boolean(true).with_parameters(params.clone());
        let same = item.clone().with_parameters(params);
        assert_eq!(item, same);
    }
}
