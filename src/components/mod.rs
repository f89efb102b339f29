//! UI Components
//!
//! Page sections and their building blocks.

mod navbar;
mod hero;
mod overview;
mod category_tabs;
mod scam_card;
mod scam_modal;
mod scam_catalog;
mod wallet_comparison;
mod security_audit;
mod tips;
mod faq;
mod footer;
mod toast;

pub use navbar::Navbar;
pub use hero::Hero;
pub use overview::Overview;
pub use category_tabs::CategoryTabs;
pub use scam_card::ScamCard;
pub use scam_modal::ScamModal;
pub use scam_catalog::ScamCatalog;
pub use wallet_comparison::WalletComparison;
pub use security_audit::SecurityAudit;
pub use tips::Tips;
pub use faq::Faq;
pub use footer::Footer;
pub use toast::Toast;
