use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid params - {0}")]
    InvalidParams(String),

    #[error("Internal server error - {0}")]
    InternalServerError(String),

    #[error("Database error - {0}")]
    DatabaseError(#[from] sea_orm::DbErr),

    #[error("Serialization error - {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error - {0}")]
    IoError(#[from] std::io::Error),

    #[error("TryInitError - {0}")]
    TryInitError(#[from] tracing_subscriber::util::TryInitError),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Token expired")]
    TokenExpired,

    #[error("Forbidden")]
    Forbidden,

    #[error("User not found")]
    UserNotFound,

    #[error("Artwork not found")]
    ArtworkNotFound,

    #[error("Cart item not found")]
    CartItemNotFound,

    #[error("Order not found")]
    OrderNotFound,

    #[error("Exhibition not found")]
    ExhibitionNotFound,

    #[error("Ticket not found")]
    TicketNotFound,

    #[error("Notification not found")]
    NotificationNotFound,

    #[error("Cart is empty")]
    EmptyCart,

    #[error("Out of stock")]
    OutOfStock,

    #[error("Insufficient stock for '{0}'")]
    InsufficientStock(String),

    #[error("Order is not payable")]
    NotPayable,

    #[error("Order is not cancellable")]
    NotCancellable,

    #[error("Order is not validatable")]
    NotValidatable,

    #[error("Artwork is not editable")]
    NotEditable,

    #[error("Invalid artwork status transition")]
    InvalidStatusTransition,

    #[error("Invalid payment details - {0}")]
    InvalidPaymentDetails(String),
}

impl AppError {
    pub fn user_safe_message(&self) -> String {
        match self {
            Self::DatabaseError(error) => {
                tracing::error!(error = %error, "Database error");
                "Service temporarily unavailable. Please try again later.".to_string()
            }
            Self::SerializationError(error) => {
                tracing::error!(error = %error, "Serialization error");
                "Internal server error".to_string()
            }
            Self::IoError(error) => {
                tracing::error!(error = %error, "IO error");
                "Service temporarily unavailable. Please try again later.".to_string()
            }
            Self::TryInitError(error) => {
                tracing::error!(error = %error, "TryInitError");
                "Internal server error".to_string()
            }
            Self::InternalServerError(error) => {
                tracing::error!(error = %error, "Internal server error");
                "Internal server error".to_string()
            }
            Self::Unauthorized => "Please login to continue.".to_string(),
            Self::TokenExpired => "Session has expired. Please login again.".to_string(),
            Self::Forbidden => "You do not have permission to perform this action.".to_string(),
            Self::EmptyCart => "Your cart is empty.".to_string(),
            Self::OutOfStock => "Requested quantity exceeds available stock.".to_string(),
            Self::InsufficientStock(title) => format!("Insufficient stock for '{}'.", title),
            Self::NotPayable => "This order can no longer be paid.".to_string(),
            Self::NotCancellable => "This order can no longer be cancelled.".to_string(),
            Self::NotValidatable => "Only paid orders can be validated.".to_string(),
            Self::NotEditable => "Artworks can only be edited while pending validation.".to_string(),
            Self::InvalidStatusTransition => "This artwork has already been reviewed.".to_string(),
            Self::InvalidPaymentDetails(reason) => reason.clone(),
            Self::InvalidParams(msg) => msg.clone(),
            _ => self.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::Unauthorized | Self::TokenExpired => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::UserNotFound
            | Self::ArtworkNotFound
            | Self::CartItemNotFound
            | Self::OrderNotFound
            | Self::ExhibitionNotFound
            | Self::TicketNotFound
            | Self::NotificationNotFound => StatusCode::NOT_FOUND,
            Self::EmptyCart
            | Self::OutOfStock
            | Self::InsufficientStock(_)
            | Self::NotPayable
            | Self::NotCancellable
            | Self::NotValidatable
            | Self::NotEditable
            | Self::InvalidStatusTransition => StatusCode::CONFLICT,
            Self::InvalidParams(_) | Self::InvalidPaymentDetails(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = serde_json::to_string(&ErrorBody {
            message: self.user_safe_message(),
        })
        .unwrap_or_else(|_| r#"{"message":"Internal server error"}"#.to_string());

        (status, [("content-type", "application/json")], body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
