//! Member profile service
//!
//! Self-access profile reads plus the admin member listing.

mod service;


pub use service::MemberService;
