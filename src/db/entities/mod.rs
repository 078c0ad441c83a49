pub mod artist;
pub mod artwork;
pub mod cart;
pub mod cart_item;
pub mod category;
pub mod exhibition;
pub mod exhibition_artwork;
pub mod notification;
pub mod order;
pub mod order_line;
pub mod payment;
pub mod ticket;
pub mod ticket_purchase;
pub mod user;
pub mod venue;

pub use artist::Entity as Artist;
pub use artwork::Entity as Artwork;
pub use cart::Entity as Cart;
pub use cart_item::Entity as CartItem;
pub use category::Entity as Category;
pub use exhibition::Entity as Exhibition;
pub use exhibition_artwork::Entity as ExhibitionArtwork;
pub use notification::Entity as Notification;
pub use order::Entity as Order;
pub use order_line::Entity as OrderLine;
pub use payment::Entity as Payment;
pub use ticket::Entity as Ticket;
pub use ticket_purchase::Entity as TicketPurchase;
pub use user::Entity as User;
pub use venue::Entity as Venue;
