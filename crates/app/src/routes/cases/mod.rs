pub mod detail;
pub mod list;

pub use detail::CasePage;
pub use list::CaseList;
