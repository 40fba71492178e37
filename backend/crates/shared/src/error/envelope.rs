//! Error Envelope - Wire shape of every error response
//!
//! `{ "code": u16, "code_message": string, "errors": [string, ...] }`

use serde::{Deserialize, Serialize};

/// エラーレスポンスの JSON エンベロープ
///
/// 上流 API のレスポンスと同じフィールド名（`code`, `code_message`）を使うため、
/// フロントエンドは成功・失敗を同じ形で扱えます。
///
/// ## Fields
/// * `code` - 通常は HTTP ステータス。上流エラーの場合は上流のステータス
/// * `code_message` - 短い説明文
/// * `errors` - 詳細メッセージの一覧（空にはしない）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub code: u16,
    pub code_message: String,
    pub errors: Vec<String>,
}
