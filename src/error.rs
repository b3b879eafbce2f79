use core::fmt;

/// コンテナ参照に使うキーまたは符号付きインデックス
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Offset {
    /// Dictionary / Parameters のキー
    Key(String),
    /// List / InnerList の符号付きインデックス
    Index(i64),
}

impl fmt::Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Offset::Key(key) => write!(f, "key {:?}", key),
            Offset::Index(index) => write!(f, "index {}", index),
        }
    }
}

/// Structured Field Values エラー
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// 入力が RFC 8941 / RFC 9651 の文法に違反している。
    /// offset はエラーを起こした入力のバイト位置 (構築時エラーでは None)。
    Syntax {
        message: String,
        offset: Option<usize>,
    },
    /// 存在するコンテナへのキー/インデックス参照が失敗した
    InvalidOffset(Offset),
}

impl Error {
    /// 入力位置つきの構文エラーを作成
    pub(crate) fn syntax_at(message: impl Into<String>, offset: usize) -> Self {
        Error::Syntax {
            message: message.into(),
            offset: Some(offset),
        }
    }

    /// 入力位置なしの構文エラーを作成 (値の構築時など)
    pub(crate) fn syntax(message: impl Into<String>) -> Self {
        Error::Syntax {
            message: message.into(),
            offset: None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Syntax {
                message,
                offset: Some(offset),
            } => {
                write!(f, "syntax error at position {}: {}", offset, message)
            }
            Error::Syntax {
                message,
                offset: None,
            } => write!(f, "syntax error: {}", message),
            Error::InvalidOffset(offset) => write!(f, "invalid offset: {}", offset),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_syntax_with_offset() {
        let err = Error::syntax_at("expected digit", 4);
        assert_eq!(err.to_string(), "syntax error at position 4: expected digit");
    }

    #[test]
    fn display_syntax_without_offset() {
        let err = Error::syntax("integer out of range");
        assert_eq!(err.to_string(), "syntax error: integer out of range");
    }

    #[test]
    fn display_invalid_offset() {
        let err = Error::InvalidOffset(Offset::Key("foo".to_string()));
        assert_eq!(err.to_string(), "invalid offset: key \"foo\"");

        let err = Error::InvalidOffset(Offset::Index(-3));
        assert_eq!(err.to_string(), "invalid offset: index -3");
    }
}
