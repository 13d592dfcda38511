use thiserror::Error;

/// Why a request failed authentication or authorization.
///
/// Every variant surfaces as a 401. The code is only used for logs.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    #[error("Authorization header is expected")]
    MissingToken,

    #[error("Authorization header must be a bearer token")]
    MalformedHeader,

    #[error("Unable to parse authentication token")]
    InvalidHeader,

    #[error("Incorrect claims, please check the audience and issuer")]
    InvalidClaims,

    #[error("Token is expired")]
    TokenExpired,

    #[error("Permission not found")]
    InsufficientPermission,
}

impl AuthError {
    pub fn code(&self) -> &'static str {
        match self {
            AuthError::MissingToken => "missing_token",
            AuthError::MalformedHeader => "malformed_header",
            AuthError::InvalidHeader => "invalid_header",
            AuthError::InvalidClaims => "invalid_claims",
            AuthError::TokenExpired => "token_expired",
            AuthError::InsufficientPermission => "insufficient_permission",
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Unauthorized: {0}")]
    Unauthorized(#[from] AuthError),

    #[error("Forbidden")]
    Forbidden,

    #[error("Not found")]
    NotFound,

    #[error("Unprocessable: {0}")]
    Unprocessable(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorCode {
    NotAuthorized,
    Forbidden,
    NotFound,
    Unprocessable,
    InternalError,
}

impl ErrorCode {
    pub fn status(&self) -> u16 {
        match self {
            ErrorCode::NotAuthorized => 401,
            ErrorCode::Forbidden => 403,
            ErrorCode::NotFound => 404,
            ErrorCode::Unprocessable => 422,
            ErrorCode::InternalError => 500,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            ErrorCode::NotAuthorized => "not authorized",
            ErrorCode::Forbidden => "forbidden",
            ErrorCode::NotFound => "resource not found",
            ErrorCode::Unprocessable => "unprocessable",
            ErrorCode::InternalError => "internal server error",
        }
    }
}

impl AppError {
    pub fn code(&self) -> ErrorCode {
        match self {
            // insufficient_permission stays on 401 for client compatibility
            AppError::Unauthorized(_) => ErrorCode::NotAuthorized,
            AppError::Forbidden => ErrorCode::Forbidden,
            AppError::NotFound => ErrorCode::NotFound,
            AppError::Unprocessable(_) => ErrorCode::Unprocessable,
            AppError::Database(_) | AppError::Internal(_) => ErrorCode::InternalError,
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
