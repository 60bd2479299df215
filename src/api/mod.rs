/// Images API module
///
/// This module handles:
/// - The HTTP client for the remote images API (client.rs)
/// - Binary image fetches, link API fetches, and URL downloads
/// - The fetch error taxonomy surfaced to the UI

pub mod client;
