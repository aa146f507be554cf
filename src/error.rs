// src/error.rs
//! エラー型をまとめておくところ。
//!
//! 手が不正なときは `bool`、空の山は `Option` で返すので、ここにあるのは
//! セーブ/ロードとテキストコマンドの解析で使うものだけだよ。

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// セーブ・ロードで起きるエラー。
/// `GameApp` の境界で `bool` / `Option` に変換されて、原因はログに出すよ。
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed save document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid save name {0:?}")]
    InvalidName(String),

    #[error("save document has {found} {what}, expected {expected}")]
    Shape {
        what: &'static str,
        expected: usize,
        found: usize,
    },
}

impl PersistenceError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        PersistenceError::Io { path: path.into(), source }
    }
}

/// テキストコマンド (`"d"`, `"12"`, `"w3"`, `"f2"`, `"wf"`) が読めなかったとき。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseMoveError {
    #[error("empty command")]
    Empty,

    #[error("column {0} is out of range (expected 1-{max})", max = crate::config::rules::TABLEAU_COLUMNS)]
    ColumnOutOfRange(char),

    #[error("unrecognized command {0:?}")]
    Unrecognized(String),
}
