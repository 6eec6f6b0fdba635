// ABOUTME: Library module for the ds-slides program.
// ABOUTME: Contains the slide deck, navigator, content API and presentation server.

// Reexport modules
pub mod assets;
pub mod config;
pub mod content;
pub mod deck;
pub mod errors;
pub mod input;
pub mod navigator;
pub mod page;
pub mod server;
pub mod sync;
pub mod watch;

// Reexport common types and functions
pub use assets::{AssetKind, ThemeAsset};
pub use config::Config;
pub use content::{structure_key, ContentStore};
pub use deck::{Slide, SlideDeck};
pub use errors::{Result, SlidesError};
pub use input::{transition_for_action, transition_for_key};
pub use navigator::{NavigatorObserver, NavigatorSnapshot, SlideNavigator, Transition};
pub use page::{render_page, write_page_to_file, PageOptions};
pub use server::{run_presentation_server, start_http_server, ServeOptions, ServerState};
pub use sync::{start_sync_listener, SnapshotBroadcaster};
pub use watch::watch_theme_assets;

#[cfg(test)]
mod tests;
