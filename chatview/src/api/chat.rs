//! チャット閲覧・メッセージ投稿API

use super::error::AppError;
use super::render::INDEX_TEMPLATE;
use crate::common::error::ChatError;
use crate::common::types::{ChatId, NewMessage, UserId};
use crate::AppState;
use axum::{
    extract::{rejection::FormRejection, Path, State},
    response::{Html, Redirect},
    Form,
};
use minijinja::context;

/// 投稿後のリダイレクト先（投稿先のチャットに関係なく固定）
pub const REDIRECT_AFTER_SEND: &str = "/chat/1";

/// `POST /send`のフォーム
///
/// 各フィールドは欠落していても受け付ける。同じキーが複数ある場合は最初の値を使う。
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SendMessageForm {
    /// 送信者ID
    pub sender_id: Option<String>,
    /// 投稿先チャットID
    pub chat_id: Option<String>,
    /// 本文
    pub content: Option<String>,
}

impl SendMessageForm {
    /// デコード済みのキー・値の組から組み立てる
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut form = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "sender_id" => &mut form.sender_id,
                "chat_id" => &mut form.chat_id,
                "content" => &mut form.content,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        form
    }

    /// 数値でないIDは0として扱う（該当ユーザーが無いため挿入時に失敗する）
    fn into_new_message(self) -> NewMessage {
        NewMessage {
            sender_id: parse_id(self.sender_id.as_deref()),
            chat_id: parse_id(self.chat_id.as_deref()),
            content: self.content.unwrap_or_default(),
        }
    }
}

fn parse_id(raw: Option<&str>) -> UserId {
    raw.and_then(|value| value.parse().ok()).unwrap_or(0)
}

/// GET /chat/{chat_id} - チャットのメッセージ一覧
///
/// 整数として解釈できない`chat_id`はクエリ失敗と同じ扱い（500 `DB error`）。
pub async fn view_chat(
    State(state): State<AppState>,
    Path(raw_chat_id): Path<String>,
) -> Result<Html<String>, AppError> {
    let chat_id: ChatId = raw_chat_id.parse().map_err(|e| {
        AppError::chat_view(ChatError::StorageUnavailable(format!(
            "invalid chat_id {:?}: {}",
            raw_chat_id, e
        )))
    })?;

    let messages = state
        .messages
        .view_chat(chat_id)
        .await
        .map_err(AppError::chat_view)?;

    let html = state
        .templates
        .render(INDEX_TEMPLATE, context! { messages, chat_id })
        .map_err(AppError::chat_view)?;

    Ok(Html(html))
}

/// POST /send - メッセージ投稿
pub async fn send_message(
    State(state): State<AppState>,
    form: Result<Form<Vec<(String, String)>>, FormRejection>,
) -> Result<Redirect, AppError> {
    let Form(pairs) =
        form.map_err(|e| AppError::send_message(ChatError::FormInvalid(e.body_text())))?;

    state
        .messages
        .add_message(SendMessageForm::from_pairs(pairs).into_new_message())
        .await
        .map_err(AppError::send_message)?;

    Ok(Redirect::to(REDIRECT_AFTER_SEND))
}
