//! HTMLテンプレート描画
//!
//! テンプレートは描画のたびにディレクトリから読み込むため、
//! HTMLの変更は再起動なしで反映される。`.html`は自動エスケープされる。

use crate::common::error::{ChatError, ChatResult};
use minijinja::{path_loader, Environment};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// チャット画面
pub const INDEX_TEMPLATE: &str = "index.html";

/// 監査ログ画面
pub const LOGS_TEMPLATE: &str = "logs.html";

/// テンプレートディレクトリに紐づくレンダラー
#[derive(Debug, Clone)]
pub struct Templates {
    dir: PathBuf,
}

impl Templates {
    /// 新しいTemplatesを作成
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// テンプレートディレクトリ
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// テンプレートを描画する
    pub fn render<S: Serialize>(&self, name: &str, context: S) -> ChatResult<String> {
        let mut env = Environment::new();
        env.set_loader(path_loader(&self.dir));

        let template = env
            .get_template(name)
            .map_err(|e| ChatError::Template(format!("Failed to load {}: {}", name, e)))?;

        template
            .render(context)
            .map_err(|e| ChatError::Template(format!("Failed to render {}: {}", name, e)))
    }
}
