//! Headless board view for the dating lead board.
//!
//! This crate provides:
//!
//! - [`BoardClient`] - HTTP client over the board API
//! - [`BoardView`] - four-column projection with view-only filter and sort
//! - [`stage_move_for_drop`] - drag-and-drop to stage-move translation
//! - [`BoardSession`] - confirm-then-refetch session tying them together
//! - [`CheckinForm`] - daily check-in answer collection
//!
//! # Example
//!
//! ```no_run
//! use board_client::{BoardClient, BoardConfig, BoardSession, DropResult, DropTarget};
//! use board_client::{SortKey, StageFilter};
//! use lead_store::Stage;
//!
//! # async fn example() -> Result<(), board_client::ClientError> {
//! let client = BoardClient::new(BoardConfig::default())?;
//! let mut session = BoardSession::open(client).await?;
//!
//! // Drag lead 1 from Lust to the top of Loyal
//! session
//!     .handle_drop(DropResult {
//!         lead_id: 1,
//!         source: Stage::Lust,
//!         destination: Some(DropTarget { stage: Stage::Loyal, index: 0 }),
//!     })
//!     .await?;
//!
//! for column in session.view(StageFilter::All, SortKey::Roi).columns {
//!     println!("{} ({})", column.title, column.count);
//! }
//! # Ok(())
//! # }
//! ```

pub mod checkin;
pub mod client;
pub mod config;
pub mod drag;
pub mod error;
pub mod session;
pub mod view;

pub use checkin::CheckinForm;
pub use client::{BoardClient, PlaybookContent, StageCoaching};
pub use config::BoardConfig;
pub use drag::{stage_move_for_drop, DropResult, DropTarget};
pub use error::ClientError;
pub use session::BoardSession;
pub use view::{BoardView, Column, RoiBand, SortKey, StageFilter, COLUMNS};
