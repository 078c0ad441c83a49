pub mod handlers;
pub mod types;

use axum::{
    Router,
    routing::{delete, get, post, put},
};

use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        // Public catalog
        .route("/artworks", get(handlers::catalog::list_artworks))
        .route("/artworks/{artwork_id}", get(handlers::catalog::artwork_detail))
        .route("/categories", get(handlers::catalog::list_categories))
        // Artist surface
        .route(
            "/artist/artworks",
            get(handlers::catalog::my_artworks).post(handlers::catalog::submit_artwork),
        )
        .route(
            "/artist/artworks/{artwork_id}",
            put(handlers::catalog::update_artwork),
        )
        .route("/artist/sales", get(handlers::orders::artist_sales))
        // Curation
        .route(
            "/admin/artworks/pending",
            get(handlers::catalog::pending_artworks),
        )
        .route(
            "/admin/artworks/{artwork_id}/approve",
            post(handlers::catalog::approve_artwork),
        )
        .route(
            "/admin/artworks/{artwork_id}/reject",
            post(handlers::catalog::reject_artwork),
        )
        // Cart and checkout
        .route("/cart", get(handlers::cart::view_cart))
        .route(
            "/cart/items/{artwork_id}",
            post(handlers::cart::add_item).delete(handlers::cart::remove_item),
        )
        .route("/cart/clear", post(handlers::cart::clear_cart))
        .route("/checkout", post(handlers::orders::checkout))
        // Orders
        .route("/orders", get(handlers::orders::list_orders))
        .route("/orders/{order_id}", get(handlers::orders::order_detail))
        .route("/orders/{order_id}/pay", post(handlers::orders::pay_order))
        .route(
            "/orders/{order_id}/cancel",
            post(handlers::orders::cancel_order),
        )
        .route(
            "/admin/orders/{order_id}/validate",
            post(handlers::orders::validate_order),
        )
        // Exhibitions and tickets
        .route("/exhibitions", get(handlers::exhibitions::list_exhibitions))
        .route(
            "/exhibitions/{exhibition_id}",
            get(handlers::exhibitions::exhibition_detail),
        )
        .route(
            "/exhibitions/{exhibition_id}/tickets/{ticket_id}/purchase",
            post(handlers::exhibitions::purchase_ticket),
        )
        .route("/venues", get(handlers::exhibitions::list_venues))
        // Notifications
        .route("/notifications", get(handlers::notifications::inbox))
        .route(
            "/notifications/{notification_id}/read",
            post(handlers::notifications::mark_read),
        )
        .route(
            "/notifications/{notification_id}",
            delete(handlers::notifications::delete_notification),
        )
        .route(
            "/admin/notifications",
            post(handlers::notifications::send_bulk),
        )
}
