use std::str::FromStr;

/// データの取得元
pub const DATA_VAR: &str = "RABBITHOLE_DATA";
/// 1 ページあたりのカード数
pub const PAGE_SIZE_VAR: &str = "RABBITHOLE_PAGE_SIZE";
/// 描画する最大件数
pub const MAX_RENDER_VAR: &str = "RABBITHOLE_MAX_RENDER";

/// 環境変数ユーティリティ
pub struct EnvVar;

impl EnvVar {
    /// 環境変数を取得（空文字列はNoneとして扱う）
    pub fn get(key: &str) -> Option<String> {
        std::env::var(key).ok().filter(|s| !s.is_empty())
    }

    /// 環境変数を取得してパース
    ///
    /// 未設定・空なら `Ok(None)`、パースできなければ `Err`。
    pub fn get_parsed<T: FromStr>(key: &str) -> Result<Option<T>, String> {
        match Self::get(key) {
            None => Ok(None),
            Some(value) => value
                .trim()
                .parse()
                .map(Some)
                .map_err(|_| format!("{key}: invalid value '{value}'")),
        }
    }
}

#[cfg(test)]
#[path = "env_test.rs"]
mod tests;
