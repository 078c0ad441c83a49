pub mod artwork;
pub mod cart;
pub mod exhibition;
pub mod notification;
pub mod order;
pub mod user;

pub use artwork::ArtworkRepository;
pub use cart::CartRepository;
pub use exhibition::ExhibitionRepository;
pub use notification::NotificationRepository;
pub use order::OrderRepository;
use rand::Rng;
pub use user::UserRepository;

fn generate_code(len: usize) -> String {
    const CHARSET: &[u8] = b"ABCDEFGHJKLMNOPQRSTUVWXYZ0123456789";
    (0..len)
        .map(|_| {
            let mut rng = rand::rng();
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}

pub fn generate_payment_reference() -> String {
    format!("PAY-{}", generate_code(10))
}

pub fn generate_confirmation_code() -> String {
    format!("TKT-{}", generate_code(8))
}

#[cfg(test)]
mod tests {
    use super::{generate_confirmation_code, generate_payment_reference};

    #[test]
    fn payment_references_are_prefixed_and_sized() {
        let reference = generate_payment_reference();
        assert!(reference.starts_with("PAY-"));
        assert_eq!(reference.len(), 14);
    }

    #[test]
    fn confirmation_codes_fit_the_column() {
        let code = generate_confirmation_code();
        assert!(code.starts_with("TKT-"));
        assert_eq!(code.len(), 12);
    }
}
