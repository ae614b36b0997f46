pub mod commit;
pub mod editor;

pub use commit::CommitCommand;
