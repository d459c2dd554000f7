//! Tool definitions module.
//!
//! One file per area of the Golf Genius API:
//! - `health`: connectivity and credential check
//! - `organization`: seasons, categories, directories
//! - `master_roster`: organization-wide players
//! - `events`: event CRUD and courses
//! - `members`: event roster and membership
//! - `rounds`: rounds, tee sheets and tournaments
//! - `results`: tournament results (JSON or raw markup)
//! - `divisions`, `pairings`: flights and tee time groups

pub mod common;
pub mod divisions;
pub mod events;
pub mod health;
pub mod master_roster;
pub mod members;
pub mod organization;
pub mod pairings;
pub mod results;
pub mod rounds;

pub use divisions::{
    CreateDivisionTool, DeleteDivisionTool, GetEventDivisionsTool, UpdateDivisionTool,
};
pub use events::{
    CreateEventTool, DeleteEventTool, GetEventCoursesTool, GetEventDetailsTool, ListEventsTool,
    UpdateEventTool,
};
pub use health::HealthCheckTool;
pub use master_roster::{GetMasterRosterMemberTool, GetPlayerEventsTool, ListMasterRosterTool};
pub use members::{
    DeleteMemberFromEventTool, GetEventRosterTool, RegisterMemberToEventTool,
    UpdateMemberInEventTool,
};
pub use organization::{ListCategoriesTool, ListDirectoriesTool, ListSeasonsTool};
pub use pairings::{CreatePairingTool, DeletePairingTool, UpdatePairingTool};
pub use results::GetTournamentResultsTool;
pub use rounds::{
    CreateRoundTool, DeleteRoundTool, GetRoundTeeSheetTool, GetRoundTournamentsTool,
    ListEventRoundsTool, UpdateRoundTool,
};
