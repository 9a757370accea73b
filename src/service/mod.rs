mod transaction_service;
#[cfg(test)]
mod tests;

pub use transaction_service::TransactionService;
