//! Structured Field Values パーサー (RFC 8941 Section 4.2)
//!
//! バイト位置を持つ単一パスの認識器。失敗時は最初の違反位置で
//! `Error::Syntax` を返し、部分的な結果は返さない。

use crate::bare_item::{self, BareItem, Decimal};
use crate::base64;
use crate::dictionary::Dictionary;
use crate::error::Error;
use crate::inner_list::InnerList;
use crate::item::Item;
use crate::key::{self, Key};
use crate::list::List;
use crate::member::Member;
use crate::parameters::Parameters;

/// 数値の整数部の最大桁数
const MAX_INTEGER_DIGITS: u32 = 15;

/// Decimal の整数部の最大桁数
const MAX_DECIMAL_INTEGER_DIGITS: u32 = 12;

pub(crate) struct Parser<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Parser<'a> {
    pub(crate) fn new(data: &'a [u8]) -> Self {
        Parser { data, pos: 0 }
    }

    /// Item フィールド値として全体をパース
    pub(crate) fn parse_item_field(mut self) -> Result<Item, Error> {
        self.discard_sp();

        if self.eof() {
            return Err(self.error("empty item field"));
        }

        let item = self.parse_item()?;

        self.discard_sp();
        if !self.eof() {
            return Err(self.error("trailing characters after item"));
        }

        Ok(item)
    }

    /// List フィールド値として全体をパース
    pub(crate) fn parse_list_field(mut self) -> Result<List, Error> {
        self.discard_sp();

        let mut members = Vec::new();

        if self.eof() {
            return Ok(List::from_parsed(members));
        }

        loop {
            members.push(self.parse_item_or_inner_list()?);

            self.discard_ows();
            if self.eof() {
                return Ok(List::from_parsed(members));
            }

            self.expect(b',', "expected ','")?;
            self.discard_ows();

            if self.eof() {
                return Err(self.error("trailing ','"));
            }
        }
    }

    /// Dictionary フィールド値として全体をパース
    pub(crate) fn parse_dictionary_field(mut self) -> Result<Dictionary, Error> {
        self.discard_sp();

        let mut dict = Dictionary::new();

        if self.eof() {
            return Ok(dict);
        }

        loop {
            let key = self.parse_key()?;
            let member = self.parse_dictionary_member()?;
            dict.set_parsed(key, member);

            self.discard_ows();
            if self.eof() {
                return Ok(dict);
            }

            self.expect(b',', "expected ','")?;
            self.discard_ows();

            if self.eof() {
                return Err(self.error("trailing ','"));
            }
        }
    }

    /// `key [= member]` の値部分
    ///
    /// `=` がなければ Boolean true の Item で、パラメーターはそれに付く。
    fn parse_dictionary_member(&mut self) -> Result<Member, Error> {
        if !self.eof() && self.data[self.pos] == b'=' {
            self.pos += 1;
            return self.parse_item_or_inner_list();
        }

        let params = self.parse_parameters()?;
        Ok(Member::Item(Item::from_parsed(
            BareItem::Boolean(true),
            params,
        )))
    }

    fn parse_item_or_inner_list(&mut self) -> Result<Member, Error> {
        if !self.eof() && self.data[self.pos] == b'(' {
            Ok(Member::InnerList(self.parse_inner_list()?))
        } else {
            Ok(Member::Item(self.parse_item()?))
        }
    }

    fn parse_item(&mut self) -> Result<Item, Error> {
        let bare_item = self.parse_bare_item()?;
        let params = self.parse_parameters()?;
        Ok(Item::from_parsed(bare_item, params))
    }

    fn parse_inner_list(&mut self) -> Result<InnerList, Error> {
        self.expect(b'(', "expected '('")?;

        let mut items = Vec::new();

        loop {
            self.discard_sp();

            if self.eof() {
                return Err(self.error("unterminated inner list"));
            }

            if self.data[self.pos] == b')' {
                self.pos += 1;
                break;
            }

            items.push(self.parse_item()?);

            // メンバーの直後は SP か ')' のみ
            if self.eof() {
                return Err(self.error("unterminated inner list"));
            }
            match self.data[self.pos] {
                b' ' | b')' => (),
                _ => return Err(self.error("expected ' ' or ')' in inner list")),
            }
        }

        let params = self.parse_parameters()?;
        Ok(InnerList::from_parsed(items, params))
    }

    fn parse_parameters(&mut self) -> Result<Parameters, Error> {
        let mut params = Parameters::new();

        while !self.eof() && self.data[self.pos] == b';' {
            self.pos += 1;
            self.discard_sp();

            let key = self.parse_key()?;

            let value = if !self.eof() && self.data[self.pos] == b'=' {
                self.pos += 1;
                self.parse_bare_item()?
            } else {
                BareItem::Boolean(true)
            };

            // 重複キーは位置を保ったまま上書き
            params.set_parsed(key, value);
        }

        Ok(params)
    }

    fn parse_key(&mut self) -> Result<Key, Error> {
        if self.eof() || !key::is_first_key_char(self.data[self.pos]) {
            return Err(self.error("expected key"));
        }

        let base = self.pos;
        self.pos += 1;

        while !self.eof() && key::is_key_char(self.data[self.pos]) {
            self.pos += 1;
        }

        // キーの文字集合は ASCII のみ
        let key = self.data[base..self.pos]
            .iter()
            .map(|&b| b as char)
            .collect();
        Ok(Key::from_validated(key))
    }

    fn parse_bare_item(&mut self) -> Result<BareItem, Error> {
        if self.eof() {
            return Err(self.error("expected bare item"));
        }

        match self.data[self.pos] {
            b'-' | b'0'..=b'9' => self.parse_number(),
            b'"' => self.parse_string(),
            b':' => self.parse_byte_sequence(),
            b'?' => self.parse_boolean(),
            b'A'..=b'Z' | b'a'..=b'z' | b'*' => self.parse_token(),
            #[cfg(feature = "date")]
            b'@' => self.parse_date(),
            #[cfg(feature = "display-string")]
            b'%' => self.parse_display_string(),
            _ => Err(self.error("unexpected character")),
        }
    }

    /// Integer / Decimal (RFC 8941 Section 4.2.4)
    fn parse_number(&mut self) -> Result<BareItem, Error> {
        let negative = if self.data[self.pos] == b'-' {
            self.pos += 1;
            true
        } else {
            false
        };

        let mut value: i64 = 0;
        let mut integer_digits: u32 = 0;

        while !self.eof() {
            match self.data[self.pos] {
                b @ b'0'..=b'9' => {
                    integer_digits += 1;
                    if integer_digits > MAX_INTEGER_DIGITS {
                        return Err(self.error("integer with more than 15 digits"));
                    }
                    value = value * 10 + (b - b'0') as i64;
                }
                _ => break,
            }
            self.pos += 1;
        }

        if integer_digits == 0 {
            return Err(self.error("expected digit"));
        }

        if self.eof() || self.data[self.pos] != b'.' {
            let value = if negative { -value } else { value };
            return Ok(BareItem::Integer(value));
        }

        // decimal
        if integer_digits > MAX_DECIMAL_INTEGER_DIGITS {
            return Err(self.error("decimal with more than 12 integer digits"));
        }

        self.pos += 1;

        let mut fraction_digits: u32 = 0;
        while !self.eof() {
            match self.data[self.pos] {
                b @ b'0'..=b'9' => {
                    fraction_digits += 1;
                    if fraction_digits > 3 {
                        return Err(self.error("decimal with more than 3 fraction digits"));
                    }
                    value = value * 10 + (b - b'0') as i64;
                }
                _ => break,
            }
            self.pos += 1;
        }

        if fraction_digits == 0 {
            return Err(self.error("expected fraction digit"));
        }

        // 1/1000 単位へ正規化
        let thousandths = value * 10i64.pow(3 - fraction_digits);
        let thousandths = if negative { -thousandths } else { thousandths };
        Ok(BareItem::Decimal(Decimal::from_thousandths(thousandths)))
    }

    /// String (RFC 8941 Section 4.2.5)
    fn parse_string(&mut self) -> Result<BareItem, Error> {
        self.pos += 1;
        let mut value = String::new();

        while !self.eof() {
            match self.data[self.pos] {
                b'\\' => {
                    self.pos += 1;
                    if self.eof() {
                        return Err(self.error("unterminated string"));
                    }
                    match self.data[self.pos] {
                        b @ (b'"' | b'\\') => value.push(b as char),
                        _ => return Err(self.error("invalid escape in string")),
                    }
                }
                b'"' => {
                    self.pos += 1;
                    return Ok(BareItem::String(value));
                }
                b @ 0x20..=0x7E => value.push(b as char),
                _ => return Err(self.error("invalid character in string")),
            }
            self.pos += 1;
        }

        Err(self.error("unterminated string"))
    }

    /// Byte Sequence (RFC 8941 Section 4.2.7)
    fn parse_byte_sequence(&mut self) -> Result<BareItem, Error> {
        self.pos += 1;
        let base = self.pos;

        while !self.eof() {
            match self.data[self.pos] {
                b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'+' | b'/' | b'=' => self.pos += 1,
                b':' => {
                    let encoded = &self.data[base..self.pos];
                    self.pos += 1;

                    return match base64::decode(encoded) {
                        Some(bytes) => Ok(BareItem::ByteSequence(bytes)),
                        None => Err(Error::syntax_at("invalid base64", base)),
                    };
                }
                _ => return Err(self.error("invalid character in byte sequence")),
            }
        }

        Err(self.error("unterminated byte sequence"))
    }

    /// Boolean (RFC 8941 Section 4.2.8)
    fn parse_boolean(&mut self) -> Result<BareItem, Error> {
        self.pos += 1;

        if self.eof() {
            return Err(self.error("expected '0' or '1'"));
        }

        let value = match self.data[self.pos] {
            b'0' => false,
            b'1' => true,
            _ => return Err(self.error("expected '0' or '1'")),
        };
        self.pos += 1;

        Ok(BareItem::Boolean(value))
    }

    /// Token (RFC 8941 Section 4.2.6)
    fn parse_token(&mut self) -> Result<BareItem, Error> {
        let base = self.pos;
        self.pos += 1;

        while !self.eof() && bare_item::is_token_char(self.data[self.pos]) {
            self.pos += 1;
        }

        // トークンの文字集合は ASCII のみ
        let token = self.data[base..self.pos]
            .iter()
            .map(|&b| b as char)
            .collect();
        Ok(BareItem::Token(token))
    }

    /// Date (RFC 9651 Section 4.2.9)
    #[cfg(feature = "date")]
    fn parse_date(&mut self) -> Result<BareItem, Error> {
        self.pos += 1;

        if self.eof() {
            return Err(self.error("expected date"));
        }
        match self.data[self.pos] {
            b'-' | b'0'..=b'9' => (),
            _ => return Err(self.error("expected date")),
        }

        match self.parse_number()? {
            BareItem::Integer(seconds) => Ok(BareItem::Date(seconds)),
            _ => Err(self.error("date must be an integer")),
        }
    }

    /// Display String (RFC 9651 Section 4.2.10)
    #[cfg(feature = "display-string")]
    fn parse_display_string(&mut self) -> Result<BareItem, Error> {
        let base = self.pos;
        self.pos += 1;

        if self.eof() || self.data[self.pos] != b'"' {
            return Err(self.error("expected '\"'"));
        }
        self.pos += 1;

        let mut bytes = Vec::new();

        while !self.eof() {
            match self.data[self.pos] {
                b'%' => {
                    self.pos += 1;
                    if self.pos + 2 > self.data.len() {
                        return Err(self.error("truncated percent escape"));
                    }
                    let hi = hex_digit(self.data[self.pos])
                        .ok_or_else(|| self.error("invalid percent escape"))?;
                    let lo = hex_digit(self.data[self.pos + 1])
                        .ok_or_else(|| Error::syntax_at("invalid percent escape", self.pos + 1))?;
                    bytes.push(hi << 4 | lo);
                    self.pos += 2;
                }
                b'"' => {
                    self.pos += 1;
                    return match String::from_utf8(bytes) {
                        Ok(value) => Ok(BareItem::DisplayString(value)),
                        Err(_) => Err(Error::syntax_at("invalid UTF-8 in display string", base)),
                    };
                }
                b @ 0x20..=0x7E => {
                    bytes.push(b);
                    self.pos += 1;
                }
                _ => return Err(self.error("invalid character in display string")),
            }
        }

        Err(self.error("unterminated display string"))
    }

    fn discard_sp(&mut self) {
        while !self.eof() && self.data[self.pos] == b' ' {
            self.pos += 1;
        }
    }

    fn discard_ows(&mut self) {
        while !self.eof() && matches!(self.data[self.pos], b' ' | b'\t') {
            self.pos += 1;
        }
    }

    fn expect(&mut self, byte: u8, message: &str) -> Result<(), Error> {
        if self.eof() || self.data[self.pos] != byte {
            return Err(self.error(message));
        }
        self.pos += 1;
        Ok(())
    }

    fn eof(&self) -> bool {
        self.pos == self.data.len()
    }

    fn error(&self, message: &str) -> Error {
        Error::syntax_at(message, self.pos)
    }
}

#[cfg(feature = "display-string")]
fn hex_digit(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        // 大文字の 16 進は不正 (RFC 9651)
        b'a'..=b'f' => Some(b - b'a' + 10),
        _ => None,
    }
}
