//! Dictionary / Parameters のキー (RFC 8941 Section 3.1.2)

use core::fmt;

use crate::error::Error;

/// Dictionary / Parameters のキー
///
/// 先頭は小文字英字または `*`、以降は小文字英数字と `_` `-` `.` `*` のみ。
/// 構築時に文法を検証するため、`Key` は常に有効なキーを保持する。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(String);

impl Key {
    /// キーを検証して作成
    ///
    /// # 例
    ///
    /// ```rust
    /// use shiguredo_sfv::Key;
    ///
    /// let key = Key::new("max-age").unwrap();
    /// assert_eq!(key.as_str(), "max-age");
    ///
    /// assert!(Key::new("Max-Age").is_err());
    /// assert!(Key::new("").is_err());
    /// ```
    pub fn new(key: impl Into<String>) -> Result<Self, Error> {
        let key = key.into();
        validate(&key)?;
        Ok(Key(key))
    }

    /// 文字列として取得
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 検証済みの入力から作成する (パーサー内部用)
    pub(crate) fn from_validated(key: String) -> Self {
        debug_assert!(validate(&key).is_ok());
        Key(key)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Key {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Key {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Key {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

fn validate(key: &str) -> Result<(), Error> {
    let mut bytes = key.bytes();

    match bytes.next() {
        Some(b'a'..=b'z') | Some(b'*') => (),
        _ => return Err(Error::syntax(format!("invalid key {:?}", key))),
    }

    if bytes.all(is_key_char) {
        Ok(())
    } else {
        Err(Error::syntax(format!("invalid key {:?}", key)))
    }
}

pub(crate) fn is_first_key_char(b: u8) -> bool {
    matches!(b, b'a'..=b'z' | b'*')
}

pub(crate) fn is_key_char(b: u8) -> bool {
    matches!(b, b'a'..=b'z' | b'0'..=b'9' | b'_' | b'-' | b'.' | b'*')
}
