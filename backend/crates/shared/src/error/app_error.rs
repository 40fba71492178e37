//! Application Error - Unified error type for the application
//!
//! Defines [`AppError`] struct and [`AppResult<T>`] type alias.

use std::borrow::Cow;
use std::fmt;

use super::envelope::ErrorEnvelope;
use super::kind::ErrorKind;

/// アプリケーション統一エラー型
///
/// プロジェクト全体で使用する標準エラー型です。
/// ビルダーパターンを使用してエラーを構築できます。
///
/// ## Fields
/// * `kind` - エラーの分類（HTTP ステータスコードにマッピング）
/// * `message` - エンベロープの `code_message`
/// * `errors` - エンベロープの `errors`
/// * `code` - エンベロープの `code` を上書きする値（オプション）
///
/// ## Examples
/// ```rust
/// use kernel::error::{app_error::AppError, kind::ErrorKind};
///
/// // シンプルなエラー
/// let err = AppError::new(ErrorKind::BadRequest, "missing required parameter");
///
/// // 詳細なエラー
/// let err = AppError::internal("upstream communication error")
///     .with_code(503)
///     .with_error("upstream returned status 503");
/// ```
pub struct AppError {
    /// エラー種別
    kind: ErrorKind,
    /// ユーザー向けメッセージ
    message: Cow<'static, str>,
    /// 詳細メッセージ
    errors: Vec<Cow<'static, str>>,
    /// エンベロープ上のコード
    code: Option<u16>,
}

/// アプリケーション結果型エイリアス
///
/// `Result<T, AppError>` の省略形です。
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// 新しいエラーを作成
    ///
    /// ## Arguments
    /// * `kind` - エラー種別
    /// * `message` - ユーザー向けメッセージ
    #[inline]
    pub fn new(kind: ErrorKind, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind,
            message: message.into(),
            errors: Vec::new(),
            code: None,
        }
    }

    // ========================================================================
    // Convenience constructors
    // ========================================================================

    /// 400 Bad Request エラー
    #[inline]
    pub fn bad_request(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::BadRequest, message)
    }

    /// 404 Not Found エラー
    #[inline]
    pub fn not_found(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    /// 500 Internal Server Error
    #[inline]
    pub fn internal(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::InternalServerError, message)
    }

    // ========================================================================
    // Builder methods
    // ========================================================================

    /// 詳細メッセージを追加
    ///
    /// ## Examples
    /// ```rust
    /// use kernel::error::app_error::AppError;
    /// let err = AppError::bad_request("missing required parameter")
    ///     .with_error("missing token");
    /// assert_eq!(err.errors().count(), 1);
    /// ```
    #[inline]
    pub fn with_error(mut self, error: impl Into<Cow<'static, str>>) -> Self {
        self.errors.push(error.into());
        self
    }

    /// エンベロープの `code` を上書き
    ///
    /// HTTP ステータスとは別の値（例: 上流のステータス）を返したい場合に使用します。
    #[inline]
    pub fn with_code(mut self, code: u16) -> Self {
        self.code = Some(code);
        self
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// エラー種別を取得
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// HTTP ステータスコードを取得
    #[inline]
    pub fn status_code(&self) -> u16 {
        self.kind.status_code()
    }

    /// エンベロープ上のコードを取得（未設定なら HTTP ステータス）
    #[inline]
    pub fn code(&self) -> u16 {
        self.code.unwrap_or_else(|| self.status_code())
    }

    /// メッセージを取得
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// 詳細メッセージを取得
    pub fn errors(&self) -> impl Iterator<Item = &str> {
        self.errors.iter().map(|e| e.as_ref())
    }

    /// エンベロープに変換
    ///
    /// `errors` が空の場合はメッセージを唯一の要素として入れます。
    pub fn envelope(&self) -> ErrorEnvelope {
        let errors = if self.errors.is_empty() {
            vec![self.message.to_string()]
        } else {
            self.errors.iter().map(|e| e.to_string()).collect()
        };

        ErrorEnvelope {
            code: self.code(),
            code_message: self.message.to_string(),
            errors,
        }
    }
}

impl fmt::Debug for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut builder = f.debug_struct("AppError");
        builder.field("kind", &self.kind);
        builder.field("message", &self.message);
        if !self.errors.is_empty() {
            builder.field("errors", &self.errors);
        }
        if let Some(code) = &self.code {
            builder.field("code", code);
        }
        builder.finish()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind, self.message)?;
        if !self.errors.is_empty() {
            write!(f, ": {}", self.errors.join("; "))?;
        }
        Ok(())
    }
}

impl std::error::Error for AppError {}
