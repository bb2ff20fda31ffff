pub mod filter;
pub mod history;
pub mod iir;
pub mod response;

pub use filter::Filter;
pub use history::HistoryLine;
pub use iir::IirFilter;
pub use response::frequency_response;
