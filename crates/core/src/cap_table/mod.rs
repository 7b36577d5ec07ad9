//! Funding rounds, their cap tables and ownership math.

mod cap_table_model;
mod cap_table_view;
mod ownership;

pub use cap_table_model::{CapTableEntry, FundingRound, HolderRef, StartupRef};
pub use cap_table_view::{build_cap_table_view, rounds_for_startup, CapTableSubtotal, CapTableView};
pub use ownership::{
    compute_entries_ownership, compute_round_ownership, ownership_percentage, total_shares,
    EntryOwnership, RoundOwnership,
};
