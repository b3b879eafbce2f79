//! 符号付きインデックスの正規化

/// 長さ `len` のコンテナに対する符号付きインデックスを正規化する
///
/// `-len <= index < 0` は末尾からの参照として `len + index` に、
/// `0 <= index < len` はそのまま対応する。範囲外は `None`。
pub(crate) fn normalize(index: i64, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }

    let len = len as i64;
    if (-len..0).contains(&index) {
        Some((len + index) as usize)
    } else if (0..len).contains(&index) {
        Some(index as usize)
    } else {
        None
    }
}
