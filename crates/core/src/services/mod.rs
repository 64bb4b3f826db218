pub mod aggregation_service;
pub mod contribution_service;
pub mod entry_service;
pub mod ledger_service;
