pub(crate) mod quotes_service;
pub(crate) mod quotes_traits;

pub use quotes_service::QuoteService;
pub use quotes_traits::QuoteServiceTrait;
