mod explorer;

pub use explorer::fetch_transfers;
