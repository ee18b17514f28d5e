pub mod postgres;

pub use postgres::PgEventRepository;
