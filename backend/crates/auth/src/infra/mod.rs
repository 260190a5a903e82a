pub mod postgres;

pub use postgres::PgPrincipalRepository;
