//! # shiguredo_sfv
//!
//! 依存なしの HTTP Structured Field Values ライブラリ (Sans I/O)
//!
//! ## 特徴
//!
//! - **依存なし**: 標準ライブラリのみ使用
//! - **RFC 8941 準拠**: List / Dictionary / Item の 3 種のフィールドと
//!   Inner List / Parameters をロスレスに表現
//! - **RFC 9651 拡張**: Date / Display String をフィーチャーフラグで提供
//! - **正準直列化**: 同じ構造は常にバイト単位で同一のフィールド値になる
//!
//! ## 使い方
//!
//! ### パース
//!
//! ```rust
//! use shiguredo_sfv::{parse_dictionary, parse_list, BareItem};
//!
//! let dict = parse_dictionary(b"a=1, b=2;x=?0, c").unwrap();
//! assert_eq!(dict.keys().collect::<Vec<_>>(), ["a", "b", "c"]);
//!
//! let list = parse_list(b"sugar, tea, rum").unwrap();
//! assert_eq!(
//!     list.get(0).unwrap().as_item().unwrap().bare_item(),
//!     &BareItem::token("sugar").unwrap()
//! );
//! ```
//!
//! ### 生成
//!
//! ```rust
//! use shiguredo_sfv::{BareItem, Dictionary, Item};
//!
//! let dict = Dictionary::new()
//!     .add("a", Item::integer(1).unwrap().into()).unwrap()
//!     .add("b", Item::boolean(true).into()).unwrap();
//! assert_eq!(dict.to_http_value(), "a=1, b");
//! ```
//!
//! すべての値はイミュータブルで、変更操作は新しい値を返します。
//! 構造を変えない操作は受け取った値をそのまま返します。

mod bare_item;
mod base64;
mod dictionary;
mod error;
mod index;
mod inner_list;
mod item;
mod key;
mod list;
mod member;
mod parameters;
mod parser;
mod serializer;

pub use bare_item::{BareItem, Decimal};
pub use dictionary::Dictionary;
pub use error::{Error, Offset};
pub use inner_list::InnerList;
pub use item::Item;
pub use key::Key;
pub use list::List;
pub use member::Member;
pub use parameters::Parameters;

/// Item フィールド値をパース
///
/// # 例
///
/// ```rust
/// use shiguredo_sfv::{parse_item, BareItem};
///
/// let item = parse_item(b"?0").unwrap();
/// assert_eq!(item.bare_item(), &BareItem::Boolean(false));
///
/// assert!(parse_item(b"?2").is_err());
/// ```
pub fn parse_item(input: &[u8]) -> Result<Item, Error> {
    Item::from_http_value(input)
}

/// List フィールド値をパース
///
/// 空入力は空の List になる。
pub fn parse_list(input: &[u8]) -> Result<List, Error> {
    List::from_http_value(input)
}

/// Dictionary フィールド値をパース
///
/// 空入力は空の Dictionary になる。
pub fn parse_dictionary(input: &[u8]) -> Result<Dictionary, Error> {
    Dictionary::from_http_value(input)
}
